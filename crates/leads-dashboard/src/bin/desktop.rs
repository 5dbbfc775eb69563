// File: crates/leads-dashboard/src/bin/desktop.rs
// Purpose: Launcher for the desktop dashboard window.

use std::process::ExitCode;

fn main() -> ExitCode {
    leads_dashboard::logging::init_cli_logger(false);
    if let Err(e) = leads_dashboard::run_desktop() {
        tracing::error!("{e}");
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}
