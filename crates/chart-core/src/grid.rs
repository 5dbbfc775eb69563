// File: crates/chart-core/src/grid.rs
// Summary: Cartesian grid configuration.

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Grid {
    /// Dash pattern (on, off) in pixels; solid lines when `None`.
    pub dash: Option<(f32, f32)>,
    /// Lines at each Y tick.
    pub horizontal: bool,
    /// Lines at each X category.
    pub vertical: bool,
}

impl Grid {
    pub fn dashed(on: f32, off: f32) -> Self {
        Self { dash: Some((on, off)), ..Self::default() }
    }
}

impl Default for Grid {
    fn default() -> Self {
        Self { dash: None, horizontal: true, vertical: true }
    }
}
