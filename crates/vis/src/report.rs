use std::fs;
use std::path::Path;
use std::path::PathBuf;

use chrono::Utc;
use dragon_data::FilterState;
use dragon_data::Range;
use dragon_data::RangeField;
use dragon_data::SummaryCards;
use log::info;

use crate::dashboard::Dashboard;
use crate::error::Result;
use crate::template;
use crate::template::Card;
use crate::template::ChartContext;
use crate::template::Context;
use crate::template::FilterLine;
use crate::template::TemplateEngine;

const TITLE: &str = "Dragon Real Estate Analysis";
const TAGLINE: &str =
    "Unlocking insights from real estate data to predict home values and neighborhood trends.";
const SOURCE: &str = "Dragon Real Estate Analysis data";
const MODEL_DETAILS: &[&str] = &[
    "Built by Ananya R",
    "Model: Dragon Real Estate Predictor",
    "Accurate. Transparent. Explainable.",
    "Not just predictions -clarity backed by data science.",
    "Developed with precision by Ananya R.",
    "Transforming patterns into property insights.",
    "Every feature counts. Every value tells a story.",
];

/// Element ids of the summary cards, in the order of [`SummaryCards::entries`].
const CARD_IDS: [&str; 9] = [
    "total-properties",
    "avg-price",
    "max-price",
    "min-price",
    "avg-rooms",
    "avg-dis",
    "avg-tax",
    "avg-ptratio",
    "avg-nox",
];

/// The report directory is structured as follows:
///
/// ./dashboard/index.html
///
/// The __index__ file is a self-contained page: the summary cards, the chart
/// figures and the grid rows are embedded in it, while Plotly and AG Grid
/// are loaded from their CDNs.
pub struct Report {
    root_path: PathBuf,
    index_file_path: PathBuf,
}

impl Report {
    const MAIN_DIR_NAME: &str = "dashboard";
    const INDEX_FILE_NAME: &str = "index.html";

    pub fn init(path: &Path) -> Result<Report> {
        let root_path = path.join(Self::MAIN_DIR_NAME);
        let index_file_path = root_path.join(Self::INDEX_FILE_NAME);

        fs::create_dir_all(&root_path)?;

        Ok(Self {
            root_path,
            index_file_path,
        })
    }

    pub fn root_path(&self) -> &Path {
        &self.root_path
    }

    pub fn index_file_path(&self) -> &Path {
        &self.index_file_path
    }

    /// Renders the dashboard for `filter` and writes the index file.
    pub fn generate(&self, dashboard: &Dashboard, filter: &FilterState) -> Result<()> {
        let model = dashboard.render(filter);

        let charts = model
            .charts
            .iter()
            .map(|chart| {
                Ok(ChartContext {
                    id: chart.id.as_str(),
                    title: chart.title,
                    figure: template::script_json(&chart.figure)?,
                })
            })
            .collect::<Result<Vec<_>>>()?;

        let updated = dashboard
            .dataset()
            .source()
            .and_then(|source| source.modified)
            .map(|modified| modified.format("%Y-%m-%d").to_string())
            .unwrap_or_else(|| String::from("unknown"));

        let context = Context {
            style: template::STYLE,
            title: TITLE,
            tagline: TAGLINE,
            updated,
            generated: Utc::now().format("%Y-%m-%d %H:%M UTC").to_string(),
            source: SOURCE.to_owned(),
            filters: filter_lines(filter),
            cards: cards(&model.summary),
            model: MODEL_DETAILS,
            charts,
            grid: template::script_json(&model.grid_options())?,
        };

        TemplateEngine::new(&self.index_file_path).render(&context)?;

        info!(
            "generated the dashboard report for {} records in `{}`",
            model.summary.total_properties,
            self.index_file_path.display()
        );

        Ok(())
    }
}

fn cards(summary: &SummaryCards) -> Vec<Card> {
    CARD_IDS
        .into_iter()
        .zip(summary.entries())
        .map(|(id, (title, value))| Card { id, title, value })
        .collect()
}

fn filter_lines(filter: &FilterState) -> Vec<FilterLine> {
    let mut lines: Vec<FilterLine> = RangeField::ALL
        .iter()
        .map(|field| FilterLine {
            label: field.label(),
            value: describe_range(filter.range(*field)),
        })
        .collect();

    lines.push(FilterLine {
        label: "Charles River (CHAS)",
        value: describe_labels(filter.chas().iter()),
    });
    lines.push(FilterLine {
        label: "Radial Highway Access (RAD)",
        value: describe_labels(filter.rad().iter()),
    });

    lines
}

fn describe_range(range: Range) -> String {
    if range == Range::UNBOUNDED {
        String::from("any")
    } else {
        format!("{} to {}", range.min, range.max)
    }
}

fn describe_labels<'a>(labels: impl Iterator<Item = &'a String>) -> String {
    let labels: Vec<&str> = labels.map(String::as_str).collect();

    if labels.is_empty() {
        String::from("any")
    } else {
        labels.join(", ")
    }
}
