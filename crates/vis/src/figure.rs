//! A declarative Plotly figure: the traces of a chart and their layout.

use serde::Serialize;

/// A figure handed to `Plotly.newPlot`.
///
/// The placeholder serializes as `{}` and is rendered as an empty plot.
#[derive(Serialize, Debug, Clone, PartialEq)]
#[serde(untagged)]
pub enum Figure {
    Plot(Plot),
    Placeholder(Placeholder),
}

impl Figure {
    pub fn plot(data: Vec<Trace>, layout: Layout) -> Figure {
        Figure::Plot(Plot { data, layout })
    }

    pub fn placeholder() -> Figure {
        Figure::Placeholder(Placeholder {})
    }

    pub fn is_placeholder(&self) -> bool {
        matches!(self, Figure::Placeholder(_))
    }

    pub fn traces(&self) -> &[Trace] {
        match self {
            Figure::Plot(plot) => &plot.data,
            Figure::Placeholder(_) => &[],
        }
    }

    pub fn layout(&self) -> Option<&Layout> {
        match self {
            Figure::Plot(plot) => Some(&plot.layout),
            Figure::Placeholder(_) => None,
        }
    }
}

#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct Plot {
    pub data: Vec<Trace>,
    pub layout: Layout,
}

#[derive(Serialize, Debug, Clone, Default, PartialEq)]
pub struct Placeholder {}

#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct Trace {
    #[serde(rename = "type")]
    pub kind: TraceKind,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mode: Option<Mode>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub x: Option<Values>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub y: Option<Values>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub z: Option<Vec<Vec<Option<f64>>>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub marker: Option<Marker>,
    #[serde(rename = "hovertext", skip_serializing_if = "Option::is_none")]
    pub hover_text: Option<Vec<String>>,
    #[serde(rename = "nbinsx", skip_serializing_if = "Option::is_none")]
    pub bins: Option<u32>,
    #[serde(rename = "texttemplate", skip_serializing_if = "Option::is_none")]
    pub text_template: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub colorscale: Option<ColorScale>,
    #[serde(rename = "zmin", skip_serializing_if = "Option::is_none")]
    pub z_min: Option<f64>,
    #[serde(rename = "zmax", skip_serializing_if = "Option::is_none")]
    pub z_max: Option<f64>,
    #[serde(rename = "legendgroup", skip_serializing_if = "Option::is_none")]
    pub legend_group: Option<String>,
}

impl Trace {
    pub fn new(kind: TraceKind) -> Trace {
        Self {
            kind,
            name: None,
            mode: None,
            x: None,
            y: None,
            z: None,
            marker: None,
            hover_text: None,
            bins: None,
            text_template: None,
            colorscale: None,
            z_min: None,
            z_max: None,
            legend_group: None,
        }
    }

    pub fn name(mut self, name: impl Into<String>) -> Trace {
        self.name = Some(name.into());
        self
    }

    pub fn mode(mut self, mode: Mode) -> Trace {
        self.mode = Some(mode);
        self
    }

    pub fn x(mut self, values: impl Into<Values>) -> Trace {
        self.x = Some(values.into());
        self
    }

    pub fn y(mut self, values: impl Into<Values>) -> Trace {
        self.y = Some(values.into());
        self
    }

    pub fn z(mut self, values: Vec<Vec<Option<f64>>>) -> Trace {
        self.z = Some(values);
        self
    }

    pub fn marker(mut self, marker: Marker) -> Trace {
        self.marker = Some(marker);
        self
    }

    pub fn hover_text(mut self, text: Vec<String>) -> Trace {
        self.hover_text = Some(text);
        self
    }

    pub fn bins(mut self, bins: u32) -> Trace {
        self.bins = Some(bins);
        self
    }

    pub fn text_template(mut self, template: impl Into<String>) -> Trace {
        self.text_template = Some(template.into());
        self
    }

    pub fn colorscale(mut self, colorscale: ColorScale) -> Trace {
        self.colorscale = Some(colorscale);
        self
    }

    pub fn z_range(mut self, min: f64, max: f64) -> Trace {
        self.z_min = Some(min);
        self.z_max = Some(max);
        self
    }

    pub fn legend_group(mut self, group: impl Into<String>) -> Trace {
        self.legend_group = Some(group.into());
        self
    }
}

#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum TraceKind {
    Scatter,
    Histogram,
    Heatmap,
    Box,
}

#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    Markers,
    Lines,
}

/// The coordinates of a trace along one axis.
#[derive(Serialize, Debug, Clone, PartialEq)]
#[serde(untagged)]
pub enum Values {
    Numbers(Vec<f64>),
    Labels(Vec<String>),
}

impl Values {
    pub fn len(&self) -> usize {
        match self {
            Values::Numbers(values) => values.len(),
            Values::Labels(values) => values.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl From<Vec<f64>> for Values {
    fn from(values: Vec<f64>) -> Self {
        Values::Numbers(values)
    }
}

impl From<Vec<String>> for Values {
    fn from(values: Vec<String>) -> Self {
        Values::Labels(values)
    }
}

#[derive(Serialize, Debug, Clone, Default, PartialEq)]
pub struct Marker {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size: Option<Vec<f64>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<Vec<f64>>,
    #[serde(rename = "sizemode", skip_serializing_if = "Option::is_none")]
    pub size_mode: Option<SizeMode>,
    #[serde(rename = "sizeref", skip_serializing_if = "Option::is_none")]
    pub size_ref: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub colorscale: Option<ColorScale>,
    #[serde(rename = "showscale", skip_serializing_if = "Option::is_none")]
    pub show_scale: Option<bool>,
    #[serde(rename = "colorbar", skip_serializing_if = "Option::is_none")]
    pub color_bar: Option<ColorBar>,
}

#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum SizeMode {
    Area,
}

#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorScale {
    Viridis,
    RdBu,
}

#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct ColorBar {
    pub title: Title,
}

#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct Title {
    pub text: String,
}

impl Title {
    pub fn new(text: impl Into<String>) -> Title {
        Self { text: text.into() }
    }
}

#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct Layout {
    pub title: Title,
    #[serde(rename = "xaxis")]
    pub x_axis: Axis,
    #[serde(rename = "yaxis")]
    pub y_axis: Axis,
    #[serde(rename = "showlegend")]
    pub show_legend: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub legend: Option<Legend>,
    #[serde(rename = "boxmode", skip_serializing_if = "Option::is_none")]
    pub box_mode: Option<BoxMode>,
    #[serde(rename = "autosize")]
    pub auto_size: bool,
    #[serde(rename = "hovermode")]
    pub hover_mode: HoverMode,
}

impl Layout {
    pub fn new(title: impl Into<String>) -> Layout {
        Self {
            title: Title::new(title),
            x_axis: Axis::new(),
            y_axis: Axis::new(),
            show_legend: false,
            legend: None,
            box_mode: None,
            auto_size: true,
            hover_mode: HoverMode::Closest,
        }
    }

    pub fn x_title(mut self, text: impl Into<String>) -> Layout {
        self.x_axis.title = Some(Title::new(text));
        self
    }

    pub fn y_title(mut self, text: impl Into<String>) -> Layout {
        self.y_axis.title = Some(Title::new(text));
        self
    }

    pub fn legend(mut self, title: impl Into<String>) -> Layout {
        self.show_legend = true;
        self.legend = Some(Legend {
            title: Title::new(title),
        });
        self
    }
}

#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct Legend {
    pub title: Title,
}

#[derive(Serialize, Debug, Clone, Default, PartialEq)]
pub struct Axis {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<Title>,
    #[serde(rename = "type")]
    pub kind: AxisKind,
    #[serde(rename = "autorange", skip_serializing_if = "Option::is_none")]
    pub auto_range: Option<AutoRange>,
    #[serde(rename = "showgrid")]
    pub show_grid: bool,
    #[serde(rename = "zeroline")]
    pub zero_line: bool,
}

impl Axis {
    pub fn new() -> Self {
        Self {
            title: None,
            kind: AxisKind::Linear,
            auto_range: None,
            show_grid: true,
            zero_line: false,
        }
    }
}

#[derive(Serialize, Debug, Clone, Copy, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum AxisKind {
    #[default]
    Linear,
    Category,
}

#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum AutoRange {
    Reversed,
}

#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum BoxMode {
    Overlay,
}

#[derive(Serialize, Debug, Clone, Copy, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum HoverMode {
    #[default]
    Closest,
}
