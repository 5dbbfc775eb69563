// File: crates/chart-core/src/scale.rs
// Summary: Category (point) and value (linear) scale transforms plus nice tick generation.

/// Category index on the X axis.
pub type Category = usize;
/// Value Y coordinate (e.g., a daily count).
pub type Value = f64;

/// Horizontal point scale: `count` categories spread edge to edge over `[left_px, right_px]`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PointScale {
    pub left_px: f32,
    pub right_px: f32,
    pub count: usize,
}

impl PointScale {
    pub fn new(left_px: f32, right_px: f32, count: usize) -> Self {
        Self { left_px, right_px, count }
    }

    /// Pixel distance between neighbouring categories (0 for fewer than two).
    #[inline]
    pub fn step(&self) -> f32 {
        if self.count < 2 { 0.0 } else { (self.right_px - self.left_px) / (self.count - 1) as f32 }
    }

    #[inline]
    pub fn to_px(&self, i: Category) -> f32 {
        if self.count < 2 {
            return (self.left_px + self.right_px) * 0.5;
        }
        self.left_px + i as f32 * self.step()
    }

    /// Nearest category to a pixel X, or `None` when the scale is empty.
    pub fn nearest(&self, px: f32) -> Option<Category> {
        match self.count {
            0 => None,
            1 => Some(0),
            n => {
                let raw = ((px - self.left_px) / self.step()).round();
                Some(raw.clamp(0.0, (n - 1) as f32) as usize)
            }
        }
    }
}

/// Vertical value scale mapping data range to [top, bottom] pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LinearScale {
    pub top_px: f32,
    pub bottom_px: f32,
    pub vmin: Value,
    pub vmax: Value,
}

impl LinearScale {
    pub fn new(top_px: f32, bottom_px: f32, vmin: Value, vmax: Value) -> Self {
        let mut s = Self { top_px, bottom_px, vmin, vmax };
        if (s.vmax - s.vmin).abs() < 1e-12 { s.vmax = s.vmin + 1.0; }
        s
    }
    #[inline]
    pub fn to_px(&self, y: Value) -> f32 {
        let span = (self.vmax - self.vmin).max(1e-12);
        self.bottom_px - ((y - self.vmin) / span) as f32 * (self.bottom_px - self.top_px)
    }
}

/// Round a rough step up to a "nice" value (1, 1.5, 2, 2.5, 5, 6, ... times a power of ten).
/// `correction` bumps the step by whole units when the first guess produced too many ticks.
fn format_step(rough: f64, correction: u32) -> f64 {
    if !rough.is_finite() || rough <= 0.0 {
        return 1.0;
    }
    let digits = rough.log10().floor() as i32 + 1;
    let ratio_scale = if digits == 1 { 0.1 } else { 0.05 };
    let unit = 10f64.powi(digits) * ratio_scale;
    // tolerance absorbs representation error such as 6.000000000000001
    let units = (rough / unit - 1e-9).ceil().max(1.0) + correction as f64;
    units * unit
}

#[inline]
fn snap(v: f64) -> f64 {
    (v * 1e9).round() / 1e9
}

/// Nice tick values covering `[min, max]` with at most `count` ticks.
///
/// The returned ticks start at or below `min` and end at or above `max`;
/// a zero-width range is widened to `[min, min + 1]`.
pub fn nice_ticks(min: Value, max: Value, count: usize) -> Vec<Value> {
    let count = count.max(2);
    let (lo, mut hi) = if min <= max { (min, max) } else { (max, min) };
    if (hi - lo).abs() < 1e-12 {
        hi = lo + 1.0;
    }
    let rough = (hi - lo) / (count - 1) as f64;

    let mut correction = 0;
    loop {
        let step = format_step(rough, correction);
        let first = (lo / step).floor() * step;
        let last = (hi / step).ceil() * step;
        let n = ((last - first) / step).round() as usize + 1;
        // the correction guard keeps pathological inputs from looping
        if n <= count || correction >= 32 {
            return (0..n).map(|i| snap(first + step * i as f64)).collect();
        }
        correction += 1;
    }
}
