use log::debug;

use crate::dataset::Column;
use crate::dataset::Dataset;
use crate::dataset::Record;
use crate::filter::FilterState;

/// The records of a [`Dataset`] that satisfy a [`FilterState`], in dataset order.
///
/// A view borrows the dataset and lives only for the duration of one
/// recomputation. An empty view is a valid value.
#[derive(Debug, Clone)]
pub struct FilteredView<'a> {
    dataset: &'a Dataset,
    records: Vec<&'a Record>,
}

impl<'a> FilteredView<'a> {
    pub fn new(dataset: &'a Dataset, filter: &FilterState) -> FilteredView<'a> {
        let records: Vec<&Record> = dataset
            .records()
            .iter()
            .filter(|record| filter.matches(record))
            .collect();

        debug!(
            "filter selected {} of {} records",
            records.len(),
            dataset.len()
        );

        Self { dataset, records }
    }

    pub fn columns(&self) -> &'a [Column] {
        self.dataset.columns()
    }

    pub fn records(&self) -> &[&'a Record] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &'a Record> + '_ {
        self.records.iter().copied()
    }

    /// Collects one value per record.
    pub fn values<F>(&self, value: F) -> Vec<f64>
    where
        F: Fn(&Record) -> f64,
    {
        self.iter().map(value).collect()
    }

    /// Collects the numeric cells of the column at `index`; missing and
    /// non-numeric cells are `None`.
    pub fn numeric_column(&self, index: usize) -> Vec<Option<f64>> {
        self.iter()
            .map(|record| record.cell(index).and_then(|cell| cell.as_number()))
            .collect()
    }
}

impl PartialEq for FilteredView<'_> {
    fn eq(&self, other: &Self) -> bool {
        self.records == other.records
    }
}
