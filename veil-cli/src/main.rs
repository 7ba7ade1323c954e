use std::process::ExitCode;

use clap::Parser;

mod cli;
mod config;
mod domain;
mod logging;
mod service;

use cli::Cli;

fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();
    cli::run(cli)
}
