// File: crates/chart-core/src/types.rs
// Summary: Shared types and constants (sizes, margins, axis bands).

/// Default surface width in pixels.
pub const WIDTH: i32 = 800;
/// Default surface height in pixels.
pub const HEIGHT: i32 = 300;

/// Horizontal band reserved for the Y axis (ticks + labels).
pub const Y_AXIS_WIDTH: u32 = 60;
/// Vertical band reserved for the X axis (ticks + labels).
pub const X_AXIS_HEIGHT: u32 = 30;

/// Screen margins, in pixels.
/// Contract: all fields are non-negative.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Insets {
    pub left: u32,
    pub right: u32,
    pub top: u32,
    pub bottom: u32,
}

impl Insets {
    /// Create new insets (non-negative by type).
    pub const fn new(left: u32, right: u32, top: u32, bottom: u32) -> Self {
        Self { left, right, top, bottom }
    }
    /// Same inset on every side.
    pub const fn uniform(v: u32) -> Self {
        Self::new(v, v, v, v)
    }
}

impl Default for Insets {
    /// Outer chart margin; axis bands are added on top of it during layout.
    fn default() -> Self {
        Self::uniform(5)
    }
}
