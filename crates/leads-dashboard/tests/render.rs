// File: crates/leads-dashboard/tests/render.rs
// Purpose: End-to-end headless rendering of the dashboard chart.

use chart_core::RenderOptions;
use leads_dashboard::config::{day_index, Args};
use leads_dashboard::dashboard;

fn options(active: Option<usize>) -> RenderOptions {
    RenderOptions {
        draw_labels: false, // avoid font variance
        active_index: active,
        ..RenderOptions::default()
    }
}

#[test]
fn renders_png_bytes() {
    let bytes = dashboard().to_chart().render_to_png_bytes(&options(None)).expect("render");
    assert!(bytes.starts_with(&[137, 80, 78, 71]), "should be PNG header");
    let img = image::load_from_memory(&bytes).expect("decode").to_rgba8();
    assert_eq!(img.dimensions(), (800, 300));
}

#[test]
fn re_rendering_is_identical() {
    let opts = options(Some(3));
    let a = dashboard().to_chart().render_to_png_bytes(&opts).expect("first");
    let b = dashboard().to_chart().render_to_png_bytes(&opts).expect("second");
    assert_eq!(a, b);
}

#[test]
fn line_is_drawn_in_the_series_colour() {
    let chart = dashboard().to_chart();
    let opts = options(None);
    let (px, w, _, stride) = chart.render_to_rgba8(&opts).expect("rgba");
    let layout = chart.layout(&opts);

    // Thursday's point (24, the maximum) sits on the plot top; its dot ring uses the stroke colour.
    let x = layout.x.to_px(3).round() as usize;
    let y = layout.y.to_px(24.0).round() as usize;
    let near = (y.saturating_sub(4)..=y + 4)
        .flat_map(|yy| (x.saturating_sub(4)..=x + 4).map(move |xx| (xx, yy)))
        .filter(|&(xx, _)| xx < w as usize)
        .map(|(xx, yy)| &px[yy * stride + xx * 4..yy * stride + xx * 4 + 3])
        .any(|rgb| rgb == [0x88, 0x84, 0xd8]);
    assert!(near, "expected #8884d8 pixels around the peak");
}

#[test]
fn cli_renders_to_file_with_tooltip() {
    let out = std::path::PathBuf::from("target/test_out/leads_hover.png");
    let argv = ["leads-dashboard", "--output", "target/test_out/leads_hover.png", "--hover", "Чт", "--no-labels"];
    let page = dashboard();
    let cfg = <Args as clap::Parser>::try_parse_from(argv)
        .expect("args")
        .into_config(&page)
        .expect("config");
    assert_eq!(cfg.options.active_index, day_index(&page, "Чт"));

    page.to_chart().render_to_png(&cfg.options, &cfg.output).expect("render to file");
    let meta = std::fs::metadata(&out).expect("output exists");
    assert!(meta.len() > 0);
}
