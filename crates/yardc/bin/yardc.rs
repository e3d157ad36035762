use clap::Parser;
use yardc::cli::{self, Cli};
use yardc::{Config, telemetry};

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = Config::load(cli.config.as_deref())?;

    let filter = telemetry::resolve_env_filter(cli.verbosity.as_deref(), &config);
    telemetry::install(&filter);

    cli::run_with_cli(cli, &config)
}
