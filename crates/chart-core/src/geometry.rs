// File: crates/chart-core/src/geometry.rs
// Summary: Lightweight geometry helpers for pixel math.

use crate::types::{Insets, X_AXIS_HEIGHT, Y_AXIS_WIDTH};

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RectF {
    pub left: f32,
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
}

impl RectF {
    pub const fn from_ltrb(left: f32, top: f32, right: f32, bottom: f32) -> Self {
        Self { left, top, right, bottom }
    }
    pub fn width(&self) -> f32 { self.right - self.left }
    pub fn height(&self) -> f32 { self.bottom - self.top }
    pub fn contains_x(&self, x: f32) -> bool { x >= self.left && x <= self.right }

    /// Plot area left after removing the margin and both axis bands.
    /// Degenerate surfaces collapse to a zero-sized rect instead of inverting.
    pub fn plot_area(width: i32, height: i32, margin: &Insets) -> Self {
        let left = (margin.left + Y_AXIS_WIDTH) as f32;
        let top = margin.top as f32;
        let right = (width as f32 - margin.right as f32).max(left);
        let bottom = (height as f32 - (margin.bottom + X_AXIS_HEIGHT) as f32).max(top);
        Self::from_ltrb(left, top, right, bottom)
    }
}

impl From<RectF> for skia_safe::Rect {
    fn from(r: RectF) -> Self {
        skia_safe::Rect::from_ltrb(r.left, r.top, r.right, r.bottom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plot_area_reserves_axis_bands() {
        let r = RectF::plot_area(800, 300, &Insets::default());
        assert_eq!(r, RectF::from_ltrb(65.0, 5.0, 795.0, 265.0));
    }

    #[test]
    fn tiny_surface_does_not_invert() {
        let r = RectF::plot_area(10, 10, &Insets::default());
        assert!(r.width() >= 0.0);
        assert!(r.height() >= 0.0);
    }
}
