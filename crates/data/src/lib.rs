//! Loading, filtering and summarizing of the Dragon Real Estate dataset.
//!
//! A [`Dataset`] is read once from a CSV file of predicted prices and never
//! mutated afterwards. Every interaction with the dashboard builds a
//! [`FilterState`], selects a [`FilteredView`] and derives the [`Summary`]
//! and the [`CorrelationMatrix`] from it.
//!
//! ```no_run
//! use std::path::Path;
//!
//! use dragon_data::Controls;
//! use dragon_data::Dataset;
//! use dragon_data::Summary;
//!
//! let dataset = Dataset::open(Path::new("Predicted_Data.csv"))?;
//! let filter = Controls::from_dataset(&dataset).initial_filter();
//! let view = dataset.view(&filter);
//!
//! println!("{}", Summary::of(&view).cards().avg_price);
//! # Ok::<(), dragon_data::error::LoadError>(())
//! ```

mod controls;
mod dataset;
mod filter;
mod stats;
mod summary;
mod view;

#[cfg(test)]
mod testing;

pub mod columns;
pub mod error;

pub use crate::controls::ControlOption;
pub use crate::controls::Controls;
pub use crate::controls::Slider;
pub use crate::dataset::Cell;
pub use crate::dataset::Column;
pub use crate::dataset::ColumnKind;
pub use crate::dataset::Dataset;
pub use crate::dataset::Record;
pub use crate::dataset::Source;
pub use crate::filter::FilterState;
pub use crate::filter::Range;
pub use crate::filter::RangeField;
pub use crate::stats::CorrelationMatrix;
pub use crate::stats::pearson;
pub use crate::summary::Summary;
pub use crate::summary::SummaryCards;
pub use crate::view::FilteredView;
