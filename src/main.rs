use anyhow::Context;
use clap::Parser;

use passcode_tui::cli::Cli;
use passcode_tui::config::Config;
use passcode_tui::shutdown::ShutdownHandle;
use passcode_tui::{logging, ui};

fn main() {
    if let Err(err) = run() {
        eprintln!("Error: {err:#}");
        std::process::exit(1);
    }
}

fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let mut config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };
    cli.apply(&mut config);
    config.validate()?;

    let log_path = logging::init(&config.logging)?;
    if let Some(path) = &log_path {
        tracing::info!(path = %path.display(), "logging to file");
    }

    let shutdown = ShutdownHandle::install().context("failed to register signal handlers")?;
    ui::runtime::run(&config, shutdown).context("terminal UI failed")?;
    Ok(())
}
