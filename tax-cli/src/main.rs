use std::io::Write;

use anyhow::Context;
use clap::Parser;
use tracing::debug;

use tax_cli::logging::init_logging;
use tax_cli::{App, AppConfig, Cli};

// ─── entry point ─────────────────────────────────────────────────────────────

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = AppConfig::load(cli.config.as_deref())?;
    init_logging(&config.log_level, cli.log_file.as_deref())?;
    debug!(?config, "loaded configuration");

    let app = App::new(config.engine, cli.json);
    let output = app.run(&cli.command)?;

    let mut stdout = std::io::stdout().lock();
    stdout
        .write_all(output.as_bytes())
        .context("failed to write output")?;
    stdout.flush().context("failed to write output")?;

    Ok(())
}
