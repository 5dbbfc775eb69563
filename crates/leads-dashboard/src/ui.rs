// File: crates/leads-dashboard/src/ui.rs
// Summary: Dioxus dashboard page and desktop launcher (feature `desktop`).

use chart_dioxus::ui::ChartCanvas;
use dioxus::prelude::*;

use crate::page::{dashboard, TITLE};

/// Utility classes used by the page tree, so the desktop window needs no external stylesheet.
pub const PAGE_CSS: &str = r#"
html, body { margin: 0; font-family: "Segoe UI", Arial, Helvetica, sans-serif; }
.min-h-screen { min-height: 100vh; box-sizing: border-box; }
.bg-gray-100 { background-color: #f3f4f6; }
.bg-white { background-color: #ffffff; }
.p-6 { padding: 1.5rem; }
.p-4 { padding: 1rem; }
.text-3xl { font-size: 1.875rem; line-height: 2.25rem; }
.font-bold { font-weight: 700; }
.mb-6 { margin-top: 0; margin-bottom: 1.5rem; }
.rounded-xl { border-radius: 0.75rem; }
.shadow-xl { box-shadow: 0 20px 25px -5px rgb(0 0 0 / 0.1), 0 8px 10px -6px rgb(0 0 0 / 0.1); }
"#;

#[component]
pub fn Dashboard() -> Element {
    let page = dashboard();
    let spec = &page.card.chart;
    let width_percent = spec.container.width_percent;
    let height_px = spec.container.height_px as i32;
    let chart = page.to_chart();
    let title = page.heading.text;

    rsx! {
        div { class: page.container.class,
            h1 { class: page.heading.class, "{title}" }
            div { class: page.card.class,
                div { style: "width:{width_percent}%;",
                    ChartCanvas { chart, height_px }
                }
            }
        }
    }
}

/// Open the dashboard in a desktop window. Blocks until the window closes.
pub fn run() -> ! {
    let window = dioxus_desktop::tao::window::WindowBuilder::new()
        .with_title(TITLE)
        .with_inner_size(dioxus_desktop::tao::dpi::LogicalSize::new(960.0, 520.0));
    let cfg = dioxus_desktop::Config::new()
        .with_window(window)
        .with_custom_head(format!("<style>{PAGE_CSS}</style>"));

    tracing::info!("launching desktop dashboard");
    let providers: Vec<Box<dyn Fn() -> Box<dyn std::any::Any> + Send + Sync>> = Vec::new();
    let globals: Vec<Box<dyn std::any::Any>> = vec![Box::new(cfg)];
    dioxus_desktop::launch::launch(Dashboard, providers, globals)
}
