//! The eight charts of the dashboard, derived from a filtered view.

use std::fmt::Display;

use dragon_data::CorrelationMatrix;
use dragon_data::FilteredView;
use dragon_data::Record;
use dragon_data::columns;
use serde::Serialize;

use crate::figure::AutoRange;
use crate::figure::AxisKind;
use crate::figure::BoxMode;
use crate::figure::ColorBar;
use crate::figure::ColorScale;
use crate::figure::Figure;
use crate::figure::Layout;
use crate::figure::Marker;
use crate::figure::Mode;
use crate::figure::SizeMode;
use crate::figure::Title;
use crate::figure::Trace;
use crate::figure::TraceKind;

/// Number of bins of the predicted price distribution.
pub const PRICE_BINS: u32 = 50;

/// Largest bubble diameter, in pixels.
const BUBBLE_SIZE_MAX: f64 = 20.0;

#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(rename_all = "kebab-case")]
pub enum ChartId {
    PriceVsRoomsScatter,
    CrimeRateHistogram,
    CorrelationHeatmap,
    NeighborhoodBoxplot,
    PriceVsDistanceLine,
    AgeVsPriceScatter,
    PredictedPriceBubble,
    PriceDistributionHistogram,
}

impl ChartId {
    /// Every chart, in display order.
    pub const ALL: [ChartId; 8] = [
        ChartId::PriceVsRoomsScatter,
        ChartId::CrimeRateHistogram,
        ChartId::CorrelationHeatmap,
        ChartId::NeighborhoodBoxplot,
        ChartId::PriceVsDistanceLine,
        ChartId::AgeVsPriceScatter,
        ChartId::PredictedPriceBubble,
        ChartId::PriceDistributionHistogram,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            ChartId::PriceVsRoomsScatter => "price-vs-rooms-scatter",
            ChartId::CrimeRateHistogram => "crime-rate-histogram",
            ChartId::CorrelationHeatmap => "correlation-heatmap",
            ChartId::NeighborhoodBoxplot => "neighborhood-boxplot",
            ChartId::PriceVsDistanceLine => "price-vs-distance-line",
            ChartId::AgeVsPriceScatter => "age-vs-price-scatter",
            ChartId::PredictedPriceBubble => "predicted-price-bubble",
            ChartId::PriceDistributionHistogram => "price-distribution-histogram",
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            ChartId::PriceVsRoomsScatter => "Predicted Price vs. Average Rooms",
            ChartId::CrimeRateHistogram => "Crime Rate Distribution",
            ChartId::CorrelationHeatmap => "Correlation Heatmap",
            ChartId::NeighborhoodBoxplot => {
                "Neighborhood characteristics boxplot (Price by Charles River Proximity)"
            }
            ChartId::PriceVsDistanceLine => "Predicted Prices by Distance to Employment Centers",
            ChartId::AgeVsPriceScatter => "Housing Age vs. Predicted Price",
            ChartId::PredictedPriceBubble => "Predicted Price Bubble Chart",
            ChartId::PriceDistributionHistogram => "Predicted Price Distribution",
        }
    }
}

impl Display for ChartId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ChartKind {
    Scatter,
    Histogram,
    Heatmap,
    Box,
    Line,
    Bubble,
}

/// The columns a chart is bound to.
#[derive(Serialize, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Bindings {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub x: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub y: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hover: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub group: Option<&'static str>,
}

impl Bindings {
    fn xy(x: &'static str, y: &'static str) -> Bindings {
        Self {
            x: Some(x),
            y: Some(y),
            ..Default::default()
        }
    }

    fn x(x: &'static str) -> Bindings {
        Self {
            x: Some(x),
            ..Default::default()
        }
    }
}

/// A declarative chart: what it shows, which columns it is bound to, and
/// the Plotly figure drawing it.
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct Chart {
    pub id: ChartId,
    pub title: &'static str,
    pub kind: ChartKind,
    pub bindings: Bindings,
    pub figure: Figure,
}

impl Chart {
    fn new(id: ChartId, kind: ChartKind, bindings: Bindings, figure: Figure) -> Chart {
        Self {
            id,
            title: id.title(),
            kind,
            bindings,
            figure,
        }
    }
}

/// The charts of one view, in display order.
#[derive(Serialize, Debug, Clone, PartialEq)]
#[serde(transparent)]
pub struct Charts {
    charts: [Chart; 8],
}

impl Charts {
    /// Builds every chart from the same view.
    ///
    /// An empty view yields empty traces; the correlation heatmap falls
    /// back to a placeholder when there is nothing to correlate.
    pub fn build(view: &FilteredView<'_>) -> Charts {
        Self {
            charts: [
                price_vs_rooms(view),
                crime_rate_histogram(view),
                correlation_heatmap(view),
                neighborhood_boxplot(view),
                price_vs_distance(view),
                age_vs_price(view),
                price_bubble(view),
                price_distribution(view),
            ],
        }
    }

    pub fn get(&self, id: ChartId) -> &Chart {
        // Charts are stored in the order of `ChartId::ALL`.
        &self.charts[id as usize]
    }

    pub fn iter(&self) -> impl Iterator<Item = &Chart> {
        self.charts.iter()
    }
}

impl<'a> IntoIterator for &'a Charts {
    type Item = &'a Chart;
    type IntoIter = std::slice::Iter<'a, Chart>;

    fn into_iter(self) -> Self::IntoIter {
        self.charts.iter()
    }
}

fn scatter(
    id: ChartId,
    view: &FilteredView<'_>,
    x: &'static str,
    x_value: fn(&Record) -> f64,
) -> Chart {
    let trace = Trace::new(TraceKind::Scatter)
        .mode(Mode::Markers)
        .x(view.values(x_value))
        .y(view.values(|r| r.predicted_price));
    let layout = Layout::new(id.title())
        .x_title(x)
        .y_title(columns::PREDICTED_PRICE);

    Chart::new(
        id,
        ChartKind::Scatter,
        Bindings::xy(x, columns::PREDICTED_PRICE),
        Figure::plot(vec![trace], layout),
    )
}

fn histogram(id: ChartId, x: &'static str, values: Vec<f64>, bins: Option<u32>) -> Chart {
    let mut trace = Trace::new(TraceKind::Histogram).x(values);
    if let Some(bins) = bins {
        trace = trace.bins(bins);
    }
    let layout = Layout::new(id.title()).x_title(x).y_title("count");

    Chart::new(
        id,
        ChartKind::Histogram,
        Bindings::x(x),
        Figure::plot(vec![trace], layout),
    )
}

fn price_vs_rooms(view: &FilteredView<'_>) -> Chart {
    scatter(ChartId::PriceVsRoomsScatter, view, columns::ROOMS, |r| r.rooms)
}

fn crime_rate_histogram(view: &FilteredView<'_>) -> Chart {
    let values = view.values(|r| r.crime_rate);
    histogram(ChartId::CrimeRateHistogram, columns::CRIME_RATE, values, None)
}

fn correlation_heatmap(view: &FilteredView<'_>) -> Chart {
    let id = ChartId::CorrelationHeatmap;

    let figure = match CorrelationMatrix::of(view) {
        Some(matrix) => {
            let labels = matrix.labels().to_vec();
            let trace = Trace::new(TraceKind::Heatmap)
                .x(labels.clone())
                .y(labels)
                .z(matrix.values().to_vec())
                .text_template("%{z}")
                .colorscale(ColorScale::RdBu)
                .z_range(-1.0, 1.0);

            let mut layout = Layout::new(id.title());
            layout.x_axis.kind = AxisKind::Category;
            layout.y_axis.kind = AxisKind::Category;
            layout.y_axis.auto_range = Some(AutoRange::Reversed);
            layout.x_axis.show_grid = false;
            layout.y_axis.show_grid = false;

            Figure::plot(vec![trace], layout)
        }
        None => Figure::placeholder(),
    };

    Chart::new(id, ChartKind::Heatmap, Bindings::default(), figure)
}

fn neighborhood_boxplot(view: &FilteredView<'_>) -> Chart {
    let id = ChartId::NeighborhoodBoxplot;

    // Groups keep the order in which their label first appears.
    let mut groups: Vec<(&str, Vec<f64>)> = Vec::new();
    for record in view.iter() {
        match groups.iter_mut().find(|(label, _)| *label == record.chas) {
            Some((_, prices)) => prices.push(record.predicted_price),
            None => groups.push((record.chas.as_str(), vec![record.predicted_price])),
        }
    }

    let traces = groups
        .into_iter()
        .map(|(label, prices)| {
            Trace::new(TraceKind::Box)
                .name(label)
                .legend_group(label)
                .x(vec![label.to_owned(); prices.len()])
                .y(prices)
        })
        .collect();

    let mut layout = Layout::new(id.title())
        .x_title(columns::CHARLES_RIVER)
        .y_title(columns::PREDICTED_PRICE)
        .legend(columns::CHARLES_RIVER);
    layout.x_axis.kind = AxisKind::Category;
    layout.box_mode = Some(BoxMode::Overlay);

    let bindings = Bindings {
        x: Some(columns::CHARLES_RIVER),
        y: Some(columns::PREDICTED_PRICE),
        color: Some(columns::CHARLES_RIVER),
        group: Some(columns::CHARLES_RIVER),
        ..Default::default()
    };

    Chart::new(id, ChartKind::Box, bindings, Figure::plot(traces, layout))
}

fn price_vs_distance(view: &FilteredView<'_>) -> Chart {
    let id = ChartId::PriceVsDistanceLine;

    let mut points: Vec<(f64, f64)> = view
        .iter()
        .map(|r| (r.distance, r.predicted_price))
        .collect();
    points.sort_by(|(a, _), (b, _)| a.total_cmp(b));
    let (distances, prices): (Vec<f64>, Vec<f64>) = points.into_iter().unzip();

    let trace = Trace::new(TraceKind::Scatter)
        .mode(Mode::Lines)
        .x(distances)
        .y(prices);
    let layout = Layout::new(id.title())
        .x_title(columns::DISTANCE)
        .y_title(columns::PREDICTED_PRICE);

    Chart::new(
        id,
        ChartKind::Line,
        Bindings::xy(columns::DISTANCE, columns::PREDICTED_PRICE),
        Figure::plot(vec![trace], layout),
    )
}

fn age_vs_price(view: &FilteredView<'_>) -> Chart {
    scatter(ChartId::AgeVsPriceScatter, view, columns::AGE, |r| r.age)
}

fn price_bubble(view: &FilteredView<'_>) -> Chart {
    let id = ChartId::PredictedPriceBubble;

    let rooms = view.values(|r| r.rooms);
    let largest = rooms.iter().copied().fold(f64::NEG_INFINITY, f64::max);

    let marker = Marker {
        size_ref: (largest > 0.0).then(|| 2.0 * largest / BUBBLE_SIZE_MAX.powi(2)),
        size: Some(rooms),
        color: Some(view.values(|r| r.tax_rate)),
        size_mode: Some(SizeMode::Area),
        colorscale: Some(ColorScale::Viridis),
        show_scale: Some(true),
        color_bar: Some(ColorBar {
            title: Title::new(columns::TAX_RATE),
        }),
    };

    let hover_text = view.iter().map(|r| r.industrial.to_string()).collect();

    let trace = Trace::new(TraceKind::Scatter)
        .mode(Mode::Markers)
        .x(view.values(|r| r.distance))
        .y(view.values(|r| r.predicted_price))
        .marker(marker)
        .hover_text(hover_text);
    let layout = Layout::new(id.title())
        .x_title(columns::DISTANCE)
        .y_title(columns::PREDICTED_PRICE);

    let bindings = Bindings {
        x: Some(columns::DISTANCE),
        y: Some(columns::PREDICTED_PRICE),
        size: Some(columns::ROOMS),
        color: Some(columns::TAX_RATE),
        hover: Some(columns::INDUSTRIAL),
        group: None,
    };

    Chart::new(
        id,
        ChartKind::Bubble,
        bindings,
        Figure::plot(vec![trace], layout),
    )
}

fn price_distribution(view: &FilteredView<'_>) -> Chart {
    let values = view.values(|r| r.predicted_price);
    histogram(
        ChartId::PriceDistributionHistogram,
        columns::PREDICTED_PRICE,
        values,
        Some(PRICE_BINS),
    )
}
