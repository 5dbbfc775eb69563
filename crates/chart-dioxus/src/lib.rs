// File: crates/chart-dioxus/src/lib.rs
// Summary: Dioxus ChartCanvas component: responsive-width chart image with a hover tooltip (desktop only).
// Notes:
// - UI deps stay behind the `desktop` feature, so the workspace builds without
//   fetching Dioxus unless explicitly enabled.
// - The chart is rasterised by chart-core on every render and shown through a
//   PNG data URL; the tooltip is part of the raster, driven by the hovered category.

use chart_core::{Chart, RenderOptions, Theme};

/// Render options for a canvas of `width` x `height` pixels with an optional hovered category.
pub fn canvas_options(width: i32, height: i32, theme: Theme, active: Option<usize>) -> RenderOptions {
    RenderOptions {
        width: width.max(1),
        height: height.max(1),
        theme,
        active_index: active,
        ..RenderOptions::default()
    }
}

/// Category under a pointer at element-relative `x`, for the given canvas options.
pub fn hover_index(chart: &Chart, x: f64, opts: &RenderOptions) -> Option<usize> {
    chart.hit_test(x as f32, opts)
}

#[cfg(feature = "desktop")]
pub mod ui {
    use super::*;
    use base64::Engine as _;
    use dioxus::prelude::*;

    /// PNG data URL for the chart, `None` when rendering fails.
    pub fn render_data_url(chart: &Chart, opts: &RenderOptions) -> Option<String> {
        match chart.render_to_png_bytes(opts) {
            Ok(bytes) => {
                let b64 = base64::engine::general_purpose::STANDARD.encode(bytes);
                Some(format!("data:image/png;base64,{b64}"))
            }
            Err(e) => {
                tracing::warn!(error = %e, "chart render failed");
                None
            }
        }
    }

    #[derive(Props, Clone, PartialEq)]
    pub struct ChartCanvasProps {
        pub chart: Chart,
        #[props(default = Theme::light())]
        pub theme: Theme,
        /// Fixed height; width follows the container.
        #[props(default = 300)]
        pub height_px: i32,
        /// Width used until the first resize event reports the real one.
        #[props(default = 800)]
        pub initial_width_px: i32,
    }

    /// Chart image filling its container's width. Mouse movement selects the nearest
    /// category, which the next render shows as cursor, active dot and tooltip.
    #[component]
    pub fn ChartCanvas(props: ChartCanvasProps) -> Element {
        let mut width = use_signal(|| props.initial_width_px);
        let mut active = use_signal(|| Option::<usize>::None);

        let opts = canvas_options(width(), props.height_px, props.theme, active());
        let src = render_data_url(&props.chart, &opts);
        let chart = props.chart.clone();

        rsx! {
            div {
                style: format!("position:relative; width:100%; height:{}px;", props.height_px),
                onresize: move |evt: Event<ResizeData>| {
                    if let Ok(size) = evt.get_content_box_size() {
                        let w = size.width.round() as i32;
                        if w > 0 && w != *width.peek() {
                            width.set(w);
                        }
                    }
                },
                onmousemove: move |evt: Event<MouseData>| {
                    let p = evt.element_coordinates();
                    let hit = hover_index(&chart, p.x, &opts);
                    if hit != *active.peek() {
                        active.set(hit);
                    }
                },
                onmouseleave: move |_| active.set(None),
                if let Some(src) = src {
                    img { style: "display:block; width:100%; height:100%;", src, alt: "chart" }
                }
            }
        }
    }
}
