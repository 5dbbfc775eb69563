// File: crates/chart-core/src/tooltip.rs
// Summary: Hover tooltip configuration, content model, and box placement.

use skia_safe as skia;

#[derive(Clone, Debug, PartialEq)]
pub struct Tooltip {
    pub enabled: bool,
    /// Text between a series name and its value.
    pub separator: String,
    /// Gap between the hover cursor and the tooltip box, in pixels.
    pub offset: f32,
}

impl Default for Tooltip {
    fn default() -> Self {
        Self { enabled: true, separator: " : ".to_string(), offset: 10.0 }
    }
}

impl Tooltip {
    pub fn disabled() -> Self {
        Self { enabled: false, ..Self::default() }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct TooltipRow {
    pub name: String,
    pub value: String,
    /// Series colour; the theme line colour when `None`.
    pub color: Option<skia::Color>,
}

/// What the tooltip shows for one category: its label and one row per series.
#[derive(Clone, Debug, PartialEq)]
pub struct TooltipContent {
    pub label: String,
    pub rows: Vec<TooltipRow>,
}

impl TooltipContent {
    /// Rendered text of every row, e.g. `leads : 24`.
    pub fn row_lines(&self, separator: &str) -> Vec<String> {
        self.rows.iter().map(|r| format!("{}{}{}", r.name, separator, r.value)).collect()
    }
}

/// Top-left corner for a `box_w` x `box_h` tooltip next to `anchor`.
///
/// The box goes right of the anchor by `offset` and flips to the left side
/// when it would overflow `surface_w`; vertically it is kept inside the surface.
pub fn place_box(anchor: (f32, f32), box_w: f32, box_h: f32, surface: (f32, f32), offset: f32) -> (f32, f32) {
    let (ax, ay) = anchor;
    let (sw, sh) = surface;
    let mut x = ax + offset;
    if x + box_w > sw {
        x = (ax - offset - box_w).max(0.0);
    }
    let y = ay.min(sh - box_h).max(0.0);
    (x, y)
}
