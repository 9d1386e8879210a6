mod cli;
mod commands;
mod config;
mod main_lib;

use std::process::ExitCode;

use clap::Parser;

use cli::Cli;
use config::Config;
use main_lib::{build_state, init_tracing};

#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();
    let config = Config::from_env()?.with_overrides(&cli)?;
    init_tracing(&config.log_format);

    let state = build_state(&config);
    commands::run(&cli.command, &state).await
}
