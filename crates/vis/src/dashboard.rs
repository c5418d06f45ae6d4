use dragon_data::Controls;
use dragon_data::Dataset;
use dragon_data::FilterState;
use dragon_data::Summary;
use dragon_data::SummaryCards;
use log::debug;
use serde::Serialize;

use crate::chart::Charts;
use crate::grid::GridOptions;
use crate::grid::GridProjection;

/// The filter-and-aggregate engine behind the dashboard.
///
/// Owns the dataset for the lifetime of the process and recomputes every
/// output from scratch on each [`Dashboard::render`].
#[derive(Debug)]
pub struct Dashboard {
    dataset: Dataset,
    controls: Controls,
}

impl Dashboard {
    pub fn new(dataset: Dataset) -> Dashboard {
        let controls = Controls::from_dataset(&dataset);
        Self { dataset, controls }
    }

    pub fn dataset(&self) -> &Dataset {
        &self.dataset
    }

    pub fn controls(&self) -> &Controls {
        &self.controls
    }

    /// Filters the dataset once and derives the summary, the charts and the
    /// grid from the same view.
    pub fn render(&self, filter: &FilterState) -> ViewModel<'_> {
        let view = self.dataset.view(filter);

        let model = ViewModel {
            summary: Summary::of(&view).cards(),
            charts: Charts::build(&view),
            grid: GridProjection::of(&view),
        };

        debug!(
            "rendered {} of {} records",
            model.grid.row_data.len(),
            self.dataset.len()
        );

        model
    }
}

/// Everything the dashboard displays for one filter state.
#[derive(Serialize, Debug, Clone)]
pub struct ViewModel<'a> {
    pub summary: SummaryCards,
    pub charts: Charts,
    pub grid: GridProjection<'a>,
}

impl ViewModel<'_> {
    pub fn grid_options(&self) -> GridOptions<'_> {
        GridOptions::new(&self.grid)
    }
}
