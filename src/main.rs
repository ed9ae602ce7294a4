use anyhow::Context;
use clap::Parser;
use tracing::info;

use userscope::cli::Cli;
use userscope::config::Config;
use userscope::logging;
use userscope::ui::runtime;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    logging::init_tracing().context("failed to open the log file")?;

    let mut config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };
    cli.apply(&mut config);
    config.validate()?;

    info!(
        endpoint = %config.api.base_url,
        results = config.api.results,
        "starting userscope"
    );

    runtime::run(config).context("terminal session failed")?;
    Ok(())
}
