use serde::Serialize;
use statrs::statistics::Statistics;

use crate::view::FilteredView;

/// Aggregate statistics of a [`FilteredView`].
///
/// Every aggregate is `0` for an empty view, so the summary can always be
/// displayed.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct Summary {
    pub count: usize,
    pub avg_price: f64,
    pub max_price: f64,
    pub min_price: f64,
    pub avg_rooms: f64,
    pub avg_distance: f64,
    pub avg_tax: f64,
    pub avg_ptratio: f64,
    pub avg_nox: f64,
}

impl Summary {
    pub fn of(view: &FilteredView<'_>) -> Summary {
        if view.is_empty() {
            return Summary::default();
        }

        let prices = view.values(|r| r.predicted_price);

        Self {
            count: view.len(),
            avg_price: average(&prices),
            max_price: Statistics::max(prices.iter()),
            min_price: Statistics::min(prices.iter()),
            avg_rooms: average(&view.values(|r| r.rooms)),
            avg_distance: average(&view.values(|r| r.distance)),
            avg_tax: average(&view.values(|r| r.tax_rate)),
            avg_ptratio: average(&view.values(|r| r.pupil_teacher_ratio)),
            avg_nox: average(&view.values(|r| r.nox)),
        }
    }

    /// Formats the summary for the dashboard cards.
    pub fn cards(&self) -> SummaryCards {
        SummaryCards {
            total_properties: self.count,
            avg_price: price(self.avg_price),
            max_price: price(self.max_price),
            min_price: price(self.min_price),
            avg_rooms: format!("{:.2}", self.avg_rooms),
            avg_distance: format!("{:.2}", self.avg_distance),
            avg_tax: format!("{:.2}", self.avg_tax),
            avg_ptratio: format!("{:.2}", self.avg_ptratio),
            avg_nox: format!("{:.3}", self.avg_nox),
        }
    }
}

/// Sum over count, rounded the same way as the dashboard's column means.
fn average(values: &[f64]) -> f64 {
    values.iter().sum::<f64>() / values.len() as f64
}

fn price(value: f64) -> String {
    format!("${value:.2}K")
}

/// The count and the eight formatted aggregates shown on the summary cards.
///
/// Serialized keys match the element ids of the dashboard cards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct SummaryCards {
    pub total_properties: usize,
    pub avg_price: String,
    pub max_price: String,
    pub min_price: String,
    pub avg_rooms: String,
    #[serde(rename = "avg-dis")]
    pub avg_distance: String,
    pub avg_tax: String,
    pub avg_ptratio: String,
    pub avg_nox: String,
}

impl SummaryCards {
    /// The card titles paired with their values, in display order.
    pub fn entries(&self) -> [(&'static str, String); 9] {
        [
            ("Total Properties", self.total_properties.to_string()),
            ("Average Price ($1000s)", self.avg_price.clone()),
            ("Maximum Price ($1000s)", self.max_price.clone()),
            ("Minimum Price ($1000s)", self.min_price.clone()),
            ("Average Rooms", self.avg_rooms.clone()),
            ("Avg Distance", self.avg_distance.clone()),
            ("Avg Tax Rate", self.avg_tax.clone()),
            ("Avg Pupil-Teacher Ratio", self.avg_ptratio.clone()),
            ("Avg NOX", self.avg_nox.clone()),
        ]
    }
}
