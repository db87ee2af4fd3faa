use anyhow::Result;
use clap::Parser;
use home_ci_reporter::cli::{self, Cli};
use home_ci_reporter::Config;

fn main() -> Result<()> {
    // Logs go to stderr; stdout carries rendered reports
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::WARN.into()),
        )
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .with_target(false)
        .init();

    let cli = Cli::parse();
    let config = Config::from_env();

    cli::run(cli, &config)
}
