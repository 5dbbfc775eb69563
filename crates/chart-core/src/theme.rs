// File: crates/chart-core/src/theme.rs
// Summary: Light/Dark theming for chart rendering colors.

use skia_safe as skia;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Theme {
    pub name: &'static str,
    pub background: skia::Color,
    pub grid: skia::Color,
    pub axis_line: skia::Color,
    pub axis_label: skia::Color,
    pub tick: skia::Color,
    /// Vertical hover cursor.
    pub cursor: skia::Color,
    pub line_stroke: skia::Color,
    /// Inner fill of the per-point dots.
    pub dot_fill: skia::Color,
    pub tooltip_background: skia::Color,
    pub tooltip_border: skia::Color,
    pub tooltip_label: skia::Color,
}

impl Theme {
    /// White card look: light grey grid, grey axes, lavender line.
    pub fn light() -> Self {
        Self {
            name: "light",
            background: skia::Color::from_argb(255, 0xff, 0xff, 0xff),
            grid: skia::Color::from_argb(255, 0xcc, 0xcc, 0xcc),
            axis_line: skia::Color::from_argb(255, 0x66, 0x66, 0x66),
            axis_label: skia::Color::from_argb(255, 0x66, 0x66, 0x66),
            tick: skia::Color::from_argb(255, 0x66, 0x66, 0x66),
            cursor: skia::Color::from_argb(255, 0xcc, 0xcc, 0xcc),
            line_stroke: skia::Color::from_argb(255, 0x88, 0x84, 0xd8),
            dot_fill: skia::Color::from_argb(255, 0xff, 0xff, 0xff),
            tooltip_background: skia::Color::from_argb(255, 0xff, 0xff, 0xff),
            tooltip_border: skia::Color::from_argb(255, 0xcc, 0xcc, 0xcc),
            tooltip_label: skia::Color::from_argb(255, 0x33, 0x33, 0x33),
        }
    }

    pub fn dark() -> Self {
        Self {
            name: "dark",
            background: skia::Color::from_argb(255, 18, 18, 20),
            grid: skia::Color::from_argb(255, 40, 40, 45),
            axis_line: skia::Color::from_argb(255, 180, 180, 190),
            axis_label: skia::Color::from_argb(255, 235, 235, 245),
            tick: skia::Color::from_argb(255, 150, 150, 160),
            cursor: skia::Color::from_argb(255, 90, 90, 100),
            line_stroke: skia::Color::from_argb(255, 64, 160, 255),
            dot_fill: skia::Color::from_argb(255, 18, 18, 20),
            tooltip_background: skia::Color::from_argb(240, 30, 30, 34),
            tooltip_border: skia::Color::from_argb(255, 70, 70, 78),
            tooltip_label: skia::Color::from_argb(255, 235, 235, 245),
        }
    }
}

impl Default for Theme {
    fn default() -> Self { Self::light() }
}

/// Return a list of built-in theme presets.
pub fn presets() -> Vec<Theme> {
    vec![Theme::light(), Theme::dark()]
}

/// Find a theme by its `name`, falling back to light.
pub fn find(name: &str) -> Theme {
    presets()
        .into_iter()
        .find(|t| t.name.eq_ignore_ascii_case(name))
        .unwrap_or_else(Theme::light)
}

/// Look a theme up by name without a fallback.
pub fn lookup(name: &str) -> Option<Theme> {
    presets().into_iter().find(|t| t.name.eq_ignore_ascii_case(name))
}
