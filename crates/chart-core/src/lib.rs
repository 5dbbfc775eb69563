// File: crates/chart-core/src/lib.rs
// Summary: Core library entry point; exports public API for category line chart construction and rendering.

pub mod chart;
pub mod series;
pub mod axis;
pub mod grid;
pub mod types;
pub mod geometry;
pub mod scale;
pub mod theme;
pub mod text;
pub mod curve;
pub mod tooltip;
pub mod error;

pub use chart::{Chart, Layout, RenderOptions};
pub use series::{parse_hex_color, Series};
pub use axis::{Axis, AxisKind, Tick};
pub use grid::Grid;
pub use curve::CurveType;
pub use tooltip::{Tooltip, TooltipContent, TooltipRow};
pub use theme::Theme;
pub use text::TextShaper;
pub use error::{ChartError, Result};
