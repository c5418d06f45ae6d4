//! Charts, grid and report generation for the Dragon Real Estate dashboard.
//!
//! The [`Dashboard`] owns the loaded dataset and turns a
//! [`FilterState`](dragon_data::FilterState) into a [`ViewModel`]: the
//! summary cards, eight Plotly [`Charts`] and the [`GridProjection`] shown by
//! the table. A [`Report`] writes the view model as a standalone HTML page.
//!
//! ```no_run
//! use std::path::Path;
//!
//! use dragon_data::Dataset;
//! use dragon_vis::Dashboard;
//! use dragon_vis::Report;
//!
//! let dataset = Dataset::open(Path::new("Predicted_Data.csv"))?;
//! let dashboard = Dashboard::new(dataset);
//! let filter = dashboard.controls().initial_filter();
//!
//! let report = Report::init(Path::new("."))?;
//! report.generate(&dashboard, &filter)?;
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub(crate) mod template;

mod chart;
mod dashboard;
mod grid;
mod report;

#[cfg(test)]
mod testing;

pub mod error;
pub mod figure;

pub use crate::chart::Bindings;
pub use crate::chart::Chart;
pub use crate::chart::ChartId;
pub use crate::chart::ChartKind;
pub use crate::chart::Charts;
pub use crate::chart::PRICE_BINS;
pub use crate::dashboard::Dashboard;
pub use crate::dashboard::ViewModel;
pub use crate::grid::ColumnDef;
pub use crate::grid::DefaultColumnDef;
pub use crate::grid::GridOptions;
pub use crate::grid::GridProjection;
pub use crate::grid::GridRow;
pub use crate::grid::PAGE_SIZE;
pub use crate::report::Report;
