// File: crates/leads-dashboard/src/page.rs
// Summary: Dashboard view tree (title + chart card) as a pure function, and its mapping onto chart-core.

use chart_core::{parse_hex_color, Axis, Chart, CurveType, Grid, Series, Tooltip};

use crate::data::{LeadCountSample, WEEKLY_LEADS};

pub const TITLE: &str = "📊 Метрики по лидам";
/// Name of the single line series; also the tooltip row label.
pub const SERIES_NAME: &str = "leads";
pub const DAY_KEY: &str = "day";
pub const LEAD_COUNT_KEY: &str = "leadCount";

#[derive(Clone, Debug, PartialEq)]
pub struct DashboardPage {
    /// Full-height page container.
    pub container: Container,
    pub heading: Heading,
    pub card: ChartCard,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Container {
    pub class: &'static str,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Heading {
    pub text: &'static str,
    pub class: &'static str,
}

#[derive(Clone, Debug, PartialEq)]
pub struct ChartCard {
    pub class: &'static str,
    pub chart: LineChartSpec,
}

/// Width follows the parent as a percentage; height is fixed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ResponsiveSize {
    pub width_percent: u8,
    pub height_px: u32,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GridSpec {
    /// Dash (on, off) in pixels; solid when `None`.
    pub dash: Option<[u8; 2]>,
}

#[derive(Clone, Debug, PartialEq)]
pub enum AxisSpec {
    Category { data_key: &'static str, labels: Vec<&'static str> },
    Number { data_key: &'static str },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TooltipSpec {
    pub enabled: bool,
}

#[derive(Clone, Debug, PartialEq)]
pub struct LineSeriesSpec {
    pub name: &'static str,
    pub data_key: &'static str,
    pub curve: CurveType,
    /// `#rrggbb` stroke colour.
    pub stroke: &'static str,
    pub stroke_width: u8,
    pub values: Vec<u32>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct LineChartSpec {
    pub container: ResponsiveSize,
    pub grid: GridSpec,
    pub x_axis: AxisSpec,
    pub y_axis: AxisSpec,
    pub tooltip: TooltipSpec,
    pub series: Vec<LineSeriesSpec>,
}

/// The dashboard page. Takes no input and returns the same tree on every call.
pub fn dashboard() -> DashboardPage {
    DashboardPage {
        container: Container { class: "min-h-screen bg-gray-100 p-6" },
        heading: Heading { text: TITLE, class: "text-3xl font-bold mb-6" },
        card: ChartCard {
            class: "bg-white p-4 rounded-xl shadow-xl",
            chart: LineChartSpec {
                container: ResponsiveSize { width_percent: 100, height_px: 300 },
                grid: GridSpec { dash: Some([3, 3]) },
                x_axis: AxisSpec::Category {
                    data_key: DAY_KEY,
                    labels: WEEKLY_LEADS.iter().map(|s| s.day).collect(),
                },
                y_axis: AxisSpec::Number { data_key: LEAD_COUNT_KEY },
                tooltip: TooltipSpec { enabled: true },
                series: vec![LineSeriesSpec {
                    name: SERIES_NAME,
                    data_key: LEAD_COUNT_KEY,
                    curve: CurveType::Monotone,
                    stroke: "#8884d8",
                    stroke_width: 2,
                    values: WEEKLY_LEADS.iter().map(|s| s.lead_count).collect(),
                }],
            },
        },
    }
}

impl DashboardPage {
    pub fn samples(&self) -> &'static [LeadCountSample] {
        &WEEKLY_LEADS
    }

    pub fn category_labels(&self) -> &[&'static str] {
        self.card.chart.category_labels()
    }

    /// Values of the first (only) line series.
    pub fn series_values(&self) -> &[u32] {
        self.card.chart.series.first().map(|s| s.values.as_slice()).unwrap_or(&[])
    }

    pub fn to_chart(&self) -> Chart {
        self.card.chart.to_chart()
    }
}

impl AxisSpec {
    fn to_axis(&self) -> Axis {
        match self {
            AxisSpec::Category { data_key, labels } => Axis::category(*data_key, labels.iter().copied()),
            AxisSpec::Number { data_key } => Axis::number(*data_key),
        }
    }
}

impl LineSeriesSpec {
    fn to_series(&self) -> Series {
        let series = Series::line(self.name, self.values.iter().map(|&v| f64::from(v))).with_curve(self.curve);
        match parse_hex_color(self.stroke) {
            Some(color) => series.with_stroke(color, f32::from(self.stroke_width)),
            None => {
                tracing::warn!(stroke = self.stroke, series = self.name, "unparseable stroke colour, using theme colour");
                Series { stroke_width: f32::from(self.stroke_width), ..series }
            }
        }
    }
}

impl LineChartSpec {
    pub fn category_labels(&self) -> &[&'static str] {
        match &self.x_axis {
            AxisSpec::Category { labels, .. } => labels,
            AxisSpec::Number { .. } => &[],
        }
    }

    /// Build the chart-core chart this configuration describes, with the value axis fitted to the data.
    pub fn to_chart(&self) -> Chart {
        let mut chart = Chart::new();
        chart.x_axis = self.x_axis.to_axis();
        chart.y_axis = self.y_axis.to_axis();
        chart.grid = Some(match self.grid.dash {
            Some([on, off]) => Grid::dashed(f32::from(on), f32::from(off)),
            None => Grid::default(),
        });
        chart.tooltip = if self.tooltip.enabled { Tooltip::default() } else { Tooltip::disabled() };
        for s in &self.series {
            chart.add_series(s.to_series());
        }
        chart.autoscale_y();
        chart
    }
}
