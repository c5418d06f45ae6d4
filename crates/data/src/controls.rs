use serde::Serialize;

use crate::dataset::Dataset;
use crate::filter::FilterState;
use crate::filter::Range;
use crate::filter::RangeField;

/// The filter controls offered for a dataset and their initial state.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Controls {
    pub sliders: Vec<Slider>,
    pub chas: Vec<ControlOption>,
    pub rad: Vec<ControlOption>,
}

/// A range slider bounded by the extent of its column.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Slider {
    pub field: RangeField,
    pub column: &'static str,
    pub label: &'static str,
    pub min: f64,
    pub max: f64,
}

impl Slider {
    pub fn range(&self) -> Range {
        Range::new(self.min, self.max)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ControlOption {
    pub label: String,
    pub value: String,
}

impl ControlOption {
    fn new(label: impl Into<String>, value: impl Into<String>) -> ControlOption {
        Self {
            label: label.into(),
            value: value.into(),
        }
    }
}

impl Controls {
    pub fn from_dataset(dataset: &Dataset) -> Controls {
        let sliders = RangeField::ALL
            .iter()
            .map(|field| {
                let (min, max) = extent(dataset, *field);
                Slider {
                    field: *field,
                    column: field.column(),
                    label: field.label(),
                    min,
                    max,
                }
            })
            .collect();

        let chas = vec![
            ControlOption::new("Yes (1)", "1"),
            ControlOption::new("No (0)", "0"),
        ];

        Self {
            sliders,
            chas,
            rad: radial_highway_options(dataset),
        }
    }

    pub fn slider(&self, field: RangeField) -> Option<&Slider> {
        self.sliders.iter().find(|slider| slider.field == field)
    }

    /// The filter selected before any interaction: every slider spans its
    /// full extent and every option is checked.
    pub fn initial_filter(&self) -> FilterState {
        let mut filter = FilterState::unbounded()
            .with_chas(self.chas.iter().map(|option| option.value.clone()))
            .with_rad(self.rad.iter().map(|option| option.value.clone()));

        for slider in &self.sliders {
            filter.set_range(slider.field, slider.range());
        }

        filter
    }
}

/// The smallest and largest value of a field; `(0, 0)` for an empty dataset.
fn extent(dataset: &Dataset, field: RangeField) -> (f64, f64) {
    let mut values = dataset.records().iter().map(|record| field.value(record));

    match values.next() {
        Some(first) => values.fold((first, first), |(min, max), value| {
            (min.min(value), max.max(value))
        }),
        None => (0.0, 0.0),
    }
}

/// Distinct radial highway labels ordered by their numeric value.
fn radial_highway_options(dataset: &Dataset) -> Vec<ControlOption> {
    let mut labels: Vec<(f64, &str)> = dataset
        .records()
        .iter()
        .map(|record| {
            let value = record.rad.parse::<f64>().unwrap_or(f64::NAN);
            (value, record.rad.as_str())
        })
        .collect();

    labels.sort_by(|(a, _), (b, _)| a.total_cmp(b));
    labels.dedup_by(|(_, a), (_, b)| a == b);

    labels
        .into_iter()
        .map(|(_, label)| ControlOption::new(label, label))
        .collect()
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::testing;

    #[test]
    fn sliders_span_the_column_extent() {
        let dataset = testing::sample();

        let controls = Controls::from_dataset(&dataset);

        let price = controls.slider(RangeField::PredictedPrice).unwrap();
        assert_eq!((price.min, price.max), (16.9, 35.4));
        assert_eq!(price.label, "Predicted Price Range ($1000s)");

        let zoning = controls.slider(RangeField::Zoning).unwrap();
        assert_eq!((zoning.min, zoning.max), (0.0, 18.0));
        assert_eq!(controls.sliders.len(), 8);
    }

    #[test]
    fn radial_highway_options_are_sorted_numerically() {
        let dataset = testing::sample();

        let controls = Controls::from_dataset(&dataset);
        let values: Vec<&str> = controls.rad.iter().map(|o| o.value.as_str()).collect();

        assert_eq!(values, vec!["1", "2", "3", "5", "24"]);
    }

    #[test]
    fn initial_filter_selects_every_record() {
        let dataset = testing::sample();
        let controls = Controls::from_dataset(&dataset);

        let view = dataset.view(&controls.initial_filter());

        assert_eq!(view.len(), dataset.len());
        assert_eq!(controls.initial_filter().chas().len(), 2);
        assert_eq!(controls.initial_filter().rad().len(), 5);
    }

    #[test]
    fn empty_dataset_has_degenerate_controls() {
        let dataset = testing::dataset(testing::HEADER);

        let controls = Controls::from_dataset(&dataset);

        assert!(controls.rad.is_empty());
        assert!(controls.sliders.iter().all(|s| s.min == 0.0 && s.max == 0.0));
    }
}
