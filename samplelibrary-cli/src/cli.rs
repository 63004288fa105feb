use clap::{Args, Parser, Subcommand};
use samplelibrary::LogOptions;

use crate::commands;

#[derive(Parser, Debug)]
#[command(name = "samplelibrary", version, about = "Query the SampleLibrary API")]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalFlags,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Args, Debug)]
pub struct GlobalFlags {
    /// Log filter directive (e.g. "debug", "samplelibrary=trace").
    /// Without it, SAMPLELIBRARY_LOG is used, then "warn".
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    /// Colorize log output
    #[arg(long, global = true)]
    pub color: bool,
}

impl GlobalFlags {
    pub fn log_options(&self) -> LogOptions {
        LogOptions {
            filter: self.log_level.clone(),
            ansi: self.color,
        }
    }
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Add two integers (wraps on overflow)
    Add(commands::arith::AddArgs),
    /// Multiply two integers (wraps on overflow)
    Multiply(commands::arith::MultiplyArgs),
    /// Length of a 3D vector
    Length(commands::length::LengthArgs),
    /// Print the linked libcurl version line
    CurlVersion,
    /// Show library and transfer library details
    Info(commands::info::InfoArgs),
}
