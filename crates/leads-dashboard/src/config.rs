// File: crates/leads-dashboard/src/config.rs
// Summary: Command-line/environment configuration for the headless renderer.

use std::path::PathBuf;

use chart_core::{theme, RenderOptions};
use clap::Parser;
use thiserror::Error;

use crate::page::DashboardPage;

#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("unknown day '{0}' (expected one of the category labels)")]
    UnknownDay(String),

    #[error("unknown theme '{0}' (available: light, dark)")]
    UnknownTheme(String),

    #[error("invalid surface size {width}x{height}")]
    InvalidSize { width: u32, height: u32 },
}

#[derive(Debug, Parser)]
#[command(name = "leads-dashboard")]
#[command(about = "Render the weekly lead-count dashboard chart to a PNG file")]
pub struct Args {
    /// Output PNG path
    #[arg(short, long, env = "LEADS_OUTPUT", default_value = "target/out/leads.png")]
    pub output: PathBuf,

    /// Surface width in pixels
    #[arg(long, env = "LEADS_WIDTH", default_value_t = 800)]
    pub width: u32,

    /// Surface height in pixels (defaults to the chart container height)
    #[arg(long, env = "LEADS_HEIGHT")]
    pub height: Option<u32>,

    /// Colour theme (light, dark)
    #[arg(long, env = "LEADS_THEME", default_value = "light")]
    pub theme: String,

    /// Render with the tooltip open at this day
    #[arg(long)]
    pub hover: Option<String>,

    /// Skip tick labels and tooltip text
    #[arg(long)]
    pub no_labels: bool,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

/// Resolved render settings.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderConfig {
    pub output: PathBuf,
    pub options: RenderOptions,
}

impl Args {
    pub fn into_config(self, page: &DashboardPage) -> Result<RenderConfig, ConfigError> {
        let width = self.width;
        let height = self.height.unwrap_or(page.card.chart.container.height_px);
        if width == 0 || height == 0 || width > i32::MAX as u32 || height > i32::MAX as u32 {
            return Err(ConfigError::InvalidSize { width, height });
        }

        let theme = theme::lookup(&self.theme).ok_or_else(|| ConfigError::UnknownTheme(self.theme.clone()))?;

        let active_index = match self.hover.as_deref() {
            Some(day) => Some(day_index(page, day).ok_or_else(|| ConfigError::UnknownDay(day.to_string()))?),
            None => None,
        };

        Ok(RenderConfig {
            output: self.output,
            options: RenderOptions {
                width: width as i32,
                height: height as i32,
                theme,
                draw_labels: !self.no_labels,
                active_index,
                ..RenderOptions::default()
            },
        })
    }
}

/// Position of `day` among the page's category labels (case-insensitive).
pub fn day_index(page: &DashboardPage, day: &str) -> Option<usize> {
    let wanted = day.trim().to_lowercase();
    page.category_labels().iter().position(|l| l.to_lowercase() == wanted)
}
