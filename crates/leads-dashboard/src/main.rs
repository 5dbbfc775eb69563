// File: crates/leads-dashboard/src/main.rs
// Summary: Headless renderer: writes the dashboard chart to a PNG.

use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use leads_dashboard::config::Args;
use leads_dashboard::{dashboard, logging};
use tracing::{error, info};

fn run(args: Args) -> Result<()> {
    let page = dashboard();
    let config = args.into_config(&page).context("invalid render configuration")?;
    info!(
        title = page.heading.text,
        days = page.samples().len(),
        width = config.options.width,
        height = config.options.height,
        theme = config.options.theme.name,
        "rendering dashboard"
    );

    let chart = page.to_chart();
    chart
        .render_to_png(&config.options, &config.output)
        .with_context(|| format!("failed to render chart to '{}'", config.output.display()))?;

    info!(path = %config.output.display(), "wrote dashboard chart");
    Ok(())
}

fn main() -> ExitCode {
    let args = Args::parse();
    logging::init_cli_logger(args.verbose);

    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{e:#}");
            ExitCode::FAILURE
        }
    }
}
