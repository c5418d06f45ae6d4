use log::debug;
use statrs::statistics::Statistics;

use crate::view::FilteredView;

/// Pairwise Pearson correlation coefficients of the numeric columns of a view.
#[derive(Debug, Clone, PartialEq)]
pub struct CorrelationMatrix {
    labels: Vec<String>,
    values: Vec<Vec<Option<f64>>>,
}

impl CorrelationMatrix {
    /// The smallest number of records and numeric columns a matrix is computed for.
    pub const MIN_SIZE: usize = 2;

    /// Computes the matrix over every numeric column of `view`.
    ///
    /// Returns `None` when the view has fewer than two records or fewer than
    /// two numeric columns. Each pair only uses the records where both cells
    /// are present; a pair without variance has no coefficient.
    pub fn of(view: &FilteredView<'_>) -> Option<CorrelationMatrix> {
        let numeric: Vec<(usize, &str)> = view
            .columns()
            .iter()
            .enumerate()
            .filter(|(_, column)| column.is_numeric())
            .map(|(index, column)| (index, column.name.as_str()))
            .collect();

        if view.len() < Self::MIN_SIZE || numeric.len() < Self::MIN_SIZE {
            debug!(
                "skipping correlation of {} records over {} numeric columns",
                view.len(),
                numeric.len()
            );
            return None;
        }

        let series: Vec<Vec<Option<f64>>> = numeric
            .iter()
            .map(|(index, _)| view.numeric_column(*index))
            .collect();

        let values = series
            .iter()
            .map(|xs| series.iter().map(|ys| pairwise(xs, ys)).collect())
            .collect();

        Some(Self {
            labels: numeric.iter().map(|(_, name)| (*name).to_owned()).collect(),
            values,
        })
    }

    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    /// The coefficients, one row per label.
    pub fn values(&self) -> &[Vec<Option<f64>>] {
        &self.values
    }

    pub fn get(&self, row: &str, column: &str) -> Option<f64> {
        let row = self.labels.iter().position(|l| l == row)?;
        let column = self.labels.iter().position(|l| l == column)?;
        self.values[row][column]
    }
}

fn pairwise(xs: &[Option<f64>], ys: &[Option<f64>]) -> Option<f64> {
    let (xs, ys): (Vec<f64>, Vec<f64>) = xs
        .iter()
        .zip(ys)
        .filter_map(|(x, y)| Some(((*x)?, (*y)?)))
        .unzip();

    pearson(&xs, &ys)
}

/// The Pearson correlation coefficient of two equally long samples.
///
/// Returns `None` for fewer than two observations or when either sample
/// is constant.
pub fn pearson(xs: &[f64], ys: &[f64]) -> Option<f64> {
    if xs.len() != ys.len() || xs.len() < 2 {
        return None;
    }

    let covariance = xs.iter().covariance(ys.iter());
    let deviation = xs.iter().std_dev() * ys.iter().std_dev();
    let coefficient = covariance / deviation;

    coefficient
        .is_finite()
        .then(|| coefficient.clamp(-1.0, 1.0))
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::filter::FilterState;
    use crate::filter::Range;
    use crate::filter::RangeField;
    use crate::testing;

    fn approx(left: Option<f64>, right: f64) -> bool {
        left.is_some_and(|left| (left - right).abs() < 1e-9)
    }

    #[test]
    fn perfectly_correlated_samples() {
        let xs = [1.0, 2.0, 3.0, 4.0];

        assert!(approx(pearson(&xs, &[2.0, 4.0, 6.0, 8.0]), 1.0));
        assert!(approx(pearson(&xs, &[8.0, 6.0, 4.0, 2.0]), -1.0));
    }

    #[test]
    fn constant_sample_has_no_coefficient() {
        assert_eq!(pearson(&[1.0, 2.0, 3.0], &[5.0, 5.0, 5.0]), None);
    }

    #[test]
    fn short_or_mismatched_samples_have_no_coefficient() {
        assert_eq!(pearson(&[1.0], &[1.0]), None);
        assert_eq!(pearson(&[1.0, 2.0], &[1.0, 2.0, 3.0]), None);
    }

    #[test]
    fn matrix_covers_numeric_columns_only() {
        let dataset = testing::sample();
        let view = dataset.view(&FilterState::unbounded());

        let matrix = CorrelationMatrix::of(&view).unwrap();

        assert!(!matrix.labels().iter().any(|l| l == "CHAS"));
        assert!(matrix.labels().iter().any(|l| l == "RAD"));
        assert_eq!(matrix.labels().len(), 14);
        assert_eq!(matrix.values().len(), 14);
        assert!(matrix.values().iter().all(|row| row.len() == 14));
    }

    #[test]
    fn matrix_is_symmetric_with_unit_diagonal() {
        let dataset = testing::sample();
        let view = dataset.view(&FilterState::unbounded());

        let matrix = CorrelationMatrix::of(&view).unwrap();

        for (i, row) in matrix.values().iter().enumerate() {
            assert!(approx(row[i], 1.0));
            for (j, value) in row.iter().enumerate() {
                assert_eq!(value.is_some(), matrix.values()[j][i].is_some());
                if let (Some(a), Some(b)) = (value, matrix.values()[j][i]) {
                    assert!((a - b).abs() < 1e-12);
                }
            }
        }
        assert!(matrix.get("RM", "PredictedPrice").unwrap() > 0.5);
    }

    #[test]
    fn single_record_view_is_not_correlated() {
        let dataset = testing::with_prices(&[10.0, 20.0, 30.0]);
        let filter =
            FilterState::unbounded().with_range(RangeField::PredictedPrice, Range::new(15.0, 25.0));

        assert_eq!(CorrelationMatrix::of(&dataset.view(&filter)), None);
    }

    #[test]
    fn empty_view_is_not_correlated() {
        let dataset = testing::dataset(testing::HEADER);

        assert_eq!(CorrelationMatrix::of(&dataset.view(&FilterState::unbounded())), None);
    }

    #[test]
    fn constant_columns_have_no_coefficient() {
        let dataset = testing::with_prices(&[10.0, 20.0, 30.0]);
        let matrix = CorrelationMatrix::of(&dataset.view(&FilterState::unbounded())).unwrap();

        assert_eq!(matrix.get("RM", "PredictedPrice"), None);
        assert!(approx(matrix.get("PredictedPrice", "PredictedPrice"), 1.0));
    }
}
