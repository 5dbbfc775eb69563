// File: crates/chart-core/tests/snapshot.rs
// Purpose: Pixel-level checks for the dashed grid, curve shape and tooltip box.
// Behavior:
// - Renders small charts without labels so no font data reaches the pixels.
// - Probes rows and points derived from the chart layout rather than stored PNGs.

use chart_core::{Axis, Chart, CurveType, Grid, RenderOptions, Series, Theme};

fn no_labels() -> RenderOptions {
    let mut opts = RenderOptions::default();
    opts.draw_labels = false; // avoid text nondeterminism across platforms
    opts
}

fn pixel(px: &[u8], width: u32, x: u32, y: u32) -> [u8; 4] {
    let i = (y as usize * width as usize + x as usize) * 4;
    [px[i], px[i + 1], px[i + 2], px[i + 3]]
}

fn render_bytes(curve: CurveType, active: Option<usize>) -> Vec<u8> {
    let mut chart = Chart::new();
    chart.x_axis = Axis::category("x", ["a", "b", "c", "d", "e"]);
    chart.grid = Some(Grid::dashed(3.0, 3.0));
    chart.add_series(Series::line("y", [0.0, 1.0, 0.0, 1.5, 1.0]).with_curve(curve));
    chart.autoscale_y();

    let mut opts = no_labels();
    opts.active_index = active;
    chart.render_to_png_bytes(&opts).expect("render bytes")
}

/// Flat series on the baseline with only horizontal grid lines, so an interior
/// grid row holds nothing but grid pixels and background.
fn grid_row(dash: Option<(f32, f32)>) -> Vec<[u8; 4]> {
    let mut chart = Chart::new();
    chart.x_axis = Axis::category("x", ["a", "b", "c"]);
    chart.grid = Some(Grid { dash, horizontal: true, vertical: false });
    chart.add_series(Series::line("y", [0.0, 0.0, 0.0]));
    chart.autoscale_y();

    let opts = no_labels();
    let layout = chart.layout(&opts);
    let tick = chart
        .y_axis
        .ticks()
        .into_iter()
        .find(|t| t.value > chart.y_axis.min && t.value < chart.y_axis.max)
        .expect("interior tick");
    let row = (layout.y.to_px(tick.value) - 0.5).floor() as u32;

    let (px, w, ..) = chart.render_to_rgba8(&opts).expect("rgba render");
    let from = layout.plot.left.ceil() as u32 + 2;
    let to = layout.plot.right.floor() as u32 - 2;
    (from..to).map(|x| pixel(&px, w, x, row)).collect()
}

#[test]
fn dashed_grid_leaves_gaps() {
    const BACKGROUND: [u8; 4] = [255, 255, 255, 255];

    let solid = grid_row(None);
    assert!(solid.iter().all(|p| *p != BACKGROUND), "solid grid row should be unbroken");

    let dashed = grid_row(Some((3.0, 3.0)));
    let gaps = dashed.iter().filter(|p| **p == BACKGROUND).count();
    let marks = dashed.len() - gaps;
    assert!(gaps > dashed.len() / 6, "dashed grid should leave gaps, got {gaps}");
    assert!(marks > dashed.len() / 4, "dashed grid should still draw, got {marks}");
}

#[test]
fn monotone_curve_differs_from_linear() {
    let linear = image::load_from_memory(&render_bytes(CurveType::Linear, None)).expect("decode linear").to_rgba8();
    let monotone = image::load_from_memory(&render_bytes(CurveType::Monotone, None)).expect("decode monotone").to_rgba8();
    assert_eq!(linear.dimensions(), monotone.dimensions());
    assert_ne!(linear.as_raw(), monotone.as_raw());
}

#[test]
fn tooltip_box_is_filled_beside_the_cursor() {
    let mut chart = Chart::new();
    chart.x_axis = Axis::category("x", ["a", "b", "c", "d", "e"]);
    chart.grid = None;
    chart.add_series(Series::line("y", [0.0, 1.0, 0.0, 1.5, 1.0]));
    chart.autoscale_y();

    let mut opts = no_labels();
    opts.theme = Theme::dark();
    let layout = chart.layout(&opts);
    // Box opens `offset` right of the cursor and `offset` below the plot top.
    let offset = chart.tooltip.offset;
    let x = (layout.x.to_px(1) + offset + 5.0) as u32;
    let y = (layout.plot.top + offset + 5.0) as u32;

    let (plain, w, ..) = chart.render_to_rgba8(&opts).expect("plain render");
    assert_eq!(pixel(&plain, w, x, y), [18, 18, 20, 255]);

    opts.active_index = Some(1);
    let (hovered, w, ..) = chart.render_to_rgba8(&opts).expect("hover render");
    assert_ne!(pixel(&hovered, w, x, y), pixel(&plain, w, x, y), "tooltip box should cover ({x}, {y})");
}

#[test]
fn rendering_is_deterministic() {
    let a = render_bytes(CurveType::Monotone, Some(1));
    let b = render_bytes(CurveType::Monotone, Some(1));
    let a_img = image::load_from_memory(&a).expect("decode a").to_rgba8();
    let b_img = image::load_from_memory(&b).expect("decode b").to_rgba8();
    assert_eq!(a_img.as_raw(), b_img.as_raw());
}
