// File: crates/chart-core/src/curve.rs
// Summary: Path construction for line series: straight segments or monotone cubic interpolation along X.

/// Pixel-space point.
pub type Pt = (f32, f32);

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum CurveType {
    /// Straight segments between consecutive points.
    Linear,
    /// Monotone cubic interpolation in X; never overshoots between two samples.
    #[default]
    Monotone,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PathCmd {
    MoveTo(Pt),
    LineTo(Pt),
    CubicTo(Pt, Pt, Pt),
}

/// Build path commands through `points` (sorted by X) using the given curve.
pub fn build_path(curve: CurveType, points: &[Pt]) -> Vec<PathCmd> {
    match curve {
        CurveType::Linear => linear(points),
        CurveType::Monotone => monotone_x(points),
    }
}

fn linear(points: &[Pt]) -> Vec<PathCmd> {
    let mut out = Vec::with_capacity(points.len());
    let mut it = points.iter();
    if let Some(&p0) = it.next() {
        out.push(PathCmd::MoveTo(p0));
        out.extend(it.map(|&p| PathCmd::LineTo(p)));
    }
    out
}

#[inline]
fn sign(v: f32) -> f32 {
    if v < 0.0 { -1.0 } else { 1.0 }
}

#[inline]
fn secant(a: Pt, b: Pt) -> f32 {
    let h = b.0 - a.0;
    if h == 0.0 { 0.0 } else { (b.1 - a.1) / h }
}

/// Tangent at `p1` from its neighbours, limited so the curve stays monotone on both sides.
fn interior_tangent(p0: Pt, p1: Pt, p2: Pt) -> f32 {
    let h0 = p1.0 - p0.0;
    let h1 = p2.0 - p1.0;
    let s0 = secant(p0, p1);
    let s1 = secant(p1, p2);
    let p = if h0 + h1 == 0.0 { 0.0 } else { (s0 * h1 + s1 * h0) / (h0 + h1) };
    let t = (sign(s0) + sign(s1)) * s0.abs().min(s1.abs()).min(0.5 * p.abs());
    if t.is_finite() { t } else { 0.0 }
}

/// One-sided tangent at a segment end given the tangent at its other end.
fn end_tangent(a: Pt, b: Pt, t: f32) -> f32 {
    let h = b.0 - a.0;
    if h == 0.0 { t } else { (3.0 * (b.1 - a.1) / h - t) / 2.0 }
}

/// Monotone cubic interpolation (Fritsch–Carlson tangents) emitted as cubic Béziers.
pub fn monotone_x(points: &[Pt]) -> Vec<PathCmd> {
    let n = points.len();
    if n < 3 {
        return linear(points);
    }

    let mut tangents = vec![0.0f32; n];
    for i in 1..n - 1 {
        tangents[i] = interior_tangent(points[i - 1], points[i], points[i + 1]);
    }
    tangents[0] = end_tangent(points[0], points[1], tangents[1]);
    tangents[n - 1] = end_tangent(points[n - 2], points[n - 1], tangents[n - 2]);

    let mut out = Vec::with_capacity(n);
    out.push(PathCmd::MoveTo(points[0]));
    for i in 0..n - 1 {
        let (x0, y0) = points[i];
        let (x1, y1) = points[i + 1];
        let dx = (x1 - x0) / 3.0;
        out.push(PathCmd::CubicTo(
            (x0 + dx, y0 + dx * tangents[i]),
            (x1 - dx, y1 - dx * tangents[i + 1]),
            (x1, y1),
        ));
    }
    out
}
