use std::collections::BTreeSet;

use serde::Serialize;

use crate::columns;
use crate::dataset::Record;

/// An inclusive interval of values.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Range {
    pub min: f64,
    pub max: f64,
}

impl Range {
    /// A range that contains every value.
    pub const UNBOUNDED: Range = Range {
        min: f64::NEG_INFINITY,
        max: f64::INFINITY,
    };

    pub fn new(min: f64, max: f64) -> Range {
        Self { min, max }
    }

    #[inline]
    pub fn contains(&self, value: f64) -> bool {
        self.min <= value && value <= self.max
    }
}

impl Default for Range {
    fn default() -> Self {
        Self::UNBOUNDED
    }
}

/// The fields that are filtered by a numeric range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RangeField {
    CrimeRate,
    PredictedPrice,
    Rooms,
    LowerStatus,
    TaxRate,
    Nox,
    PupilTeacherRatio,
    Zoning,
}

impl RangeField {
    pub const ALL: [RangeField; 8] = [
        RangeField::CrimeRate,
        RangeField::PredictedPrice,
        RangeField::Rooms,
        RangeField::LowerStatus,
        RangeField::TaxRate,
        RangeField::Nox,
        RangeField::PupilTeacherRatio,
        RangeField::Zoning,
    ];

    pub fn column(self) -> &'static str {
        match self {
            RangeField::CrimeRate => columns::CRIME_RATE,
            RangeField::PredictedPrice => columns::PREDICTED_PRICE,
            RangeField::Rooms => columns::ROOMS,
            RangeField::LowerStatus => columns::LOWER_STATUS,
            RangeField::TaxRate => columns::TAX_RATE,
            RangeField::Nox => columns::NOX,
            RangeField::PupilTeacherRatio => columns::PUPIL_TEACHER_RATIO,
            RangeField::Zoning => columns::ZONING,
        }
    }

    /// The human readable name of the filter control.
    pub fn label(self) -> &'static str {
        match self {
            RangeField::CrimeRate => "Crime Rate (CRIM)",
            RangeField::PredictedPrice => "Predicted Price Range ($1000s)",
            RangeField::Rooms => "Average Rooms (RM)",
            RangeField::LowerStatus => "Lower Status Population (%) (LSTAT)",
            RangeField::TaxRate => "Property Tax Rate (TAX)",
            RangeField::Nox => "Nitric Oxide Concentration (NOX)",
            RangeField::PupilTeacherRatio => "Pupil-Teacher Ratio (PTRATIO)",
            RangeField::Zoning => "Residential Land Zoning (ZN)",
        }
    }

    #[inline]
    pub fn value(self, record: &Record) -> f64 {
        match self {
            RangeField::CrimeRate => record.crime_rate,
            RangeField::PredictedPrice => record.predicted_price,
            RangeField::Rooms => record.rooms,
            RangeField::LowerStatus => record.lower_status,
            RangeField::TaxRate => record.tax_rate,
            RangeField::Nox => record.nox,
            RangeField::PupilTeacherRatio => record.pupil_teacher_ratio,
            RangeField::Zoning => record.zoning,
        }
    }

    #[inline]
    fn index(self) -> usize {
        self as usize
    }
}

/// The constraints currently selected by the filter controls.
///
/// Ranges are inclusive and not validated: an inverted range simply
/// matches nothing. The `chas` and `rad` label sets are matched exactly,
/// and an empty set does not exclude any record.
#[derive(Debug, Clone, PartialEq)]
pub struct FilterState {
    ranges: [Range; 8],
    chas: BTreeSet<String>,
    rad: BTreeSet<String>,
}

impl FilterState {
    /// A filter that matches every record.
    pub fn unbounded() -> FilterState {
        Self {
            ranges: [Range::UNBOUNDED; 8],
            chas: BTreeSet::new(),
            rad: BTreeSet::new(),
        }
    }

    pub fn range(&self, field: RangeField) -> Range {
        self.ranges[field.index()]
    }

    pub fn set_range(&mut self, field: RangeField, range: Range) {
        self.ranges[field.index()] = range;
    }

    pub fn with_range(mut self, field: RangeField, range: Range) -> FilterState {
        self.set_range(field, range);
        self
    }

    pub fn chas(&self) -> &BTreeSet<String> {
        &self.chas
    }

    pub fn set_chas<I, S>(&mut self, labels: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.chas = labels.into_iter().map(Into::into).collect();
    }

    pub fn with_chas<I, S>(mut self, labels: I) -> FilterState
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.set_chas(labels);
        self
    }

    pub fn rad(&self) -> &BTreeSet<String> {
        &self.rad
    }

    pub fn set_rad<I, S>(&mut self, labels: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.rad = labels.into_iter().map(Into::into).collect();
    }

    pub fn with_rad<I, S>(mut self, labels: I) -> FilterState
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.set_rad(labels);
        self
    }

    /// Returns `true` when `record` satisfies all ten constraints.
    pub fn matches(&self, record: &Record) -> bool {
        RangeField::ALL
            .iter()
            .all(|field| self.range(*field).contains(field.value(record)))
            && by_label(&self.chas, &record.chas)
            && by_label(&self.rad, &record.rad)
    }
}

impl Default for FilterState {
    fn default() -> Self {
        Self::unbounded()
    }
}

#[inline]
fn by_label(selected: &BTreeSet<String>, label: &str) -> bool {
    selected.is_empty() || selected.contains(label)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing;

    #[test]
    fn range_bounds_are_inclusive() {
        let range = Range::new(15.0, 25.0);

        assert!(range.contains(15.0));
        assert!(range.contains(25.0));
        assert!(!range.contains(14.999));
        assert!(!range.contains(25.001));
    }

    #[test]
    fn inverted_range_matches_nothing() {
        let range = Range::new(25.0, 15.0);

        assert!(!range.contains(20.0));
        assert!(!range.contains(15.0));
    }

    #[test]
    fn unbounded_filter_matches_every_record() {
        let dataset = testing::sample();
        let filter = FilterState::unbounded();

        assert!(dataset.records().iter().all(|r| filter.matches(r)));
    }

    #[test]
    fn empty_label_sets_exclude_nothing() {
        let dataset = testing::sample();
        let empty = FilterState::unbounded();
        let all = FilterState::unbounded()
            .with_chas(["0", "1"])
            .with_rad(["1", "2", "3", "5", "24"]);

        for record in dataset.records() {
            assert_eq!(empty.matches(record), all.matches(record));
        }
    }

    #[test]
    fn labels_are_matched_exactly() {
        let dataset = testing::sample();
        let filter = FilterState::unbounded().with_rad(["2"]);

        let matched: Vec<&str> = dataset
            .records()
            .iter()
            .filter(|r| filter.matches(r))
            .map(|r| r.rad.as_str())
            .collect();

        assert!(!matched.is_empty());
        assert!(matched.iter().all(|rad| *rad == "2"));
    }

    #[test]
    fn each_range_field_constrains_its_own_column() {
        let dataset = testing::sample();

        for field in RangeField::ALL {
            let values: Vec<f64> = dataset.records().iter().map(|r| field.value(r)).collect();
            let max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
            let filter = FilterState::unbounded().with_range(field, Range::new(max, max));

            for record in dataset.records() {
                assert_eq!(
                    filter.matches(record),
                    field.value(record) == max,
                    "{}",
                    field.column()
                );
            }
        }
    }
}
