mod cli;
mod commands;

use clap::Parser;

use crate::cli::{Cli, Commands};

fn main() {
    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> anyhow::Result<()> {
    samplelibrary::init_logging(&cli.global.log_options())?;
    tracing::debug!(command = ?cli.command, "dispatching");

    match cli.command {
        Commands::Add(args) => commands::arith::execute_add(args),
        Commands::Multiply(args) => commands::arith::execute_multiply(args),
        Commands::Length(args) => commands::length::execute(args),
        Commands::CurlVersion => commands::info::execute_curl_version(),
        Commands::Info(args) => commands::info::execute(args),
    }
}
