use std::path::PathBuf;

use clap::Parser;

/// Canopy: one window, many web apps.
#[derive(Parser, Debug)]
#[command(name = "canopy", version, about)]
pub struct Args {
    /// Config file path override.
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Log level override (trace, debug, info, warn, error).
    #[arg(long)]
    pub log_level: Option<String>,

    /// Enable the web inspector in every view (always on in debug builds).
    #[arg(long)]
    pub devtools: bool,

    /// Print the effective shortcuts and exit.
    #[arg(long)]
    pub print_shortcuts: bool,

    /// With --print-shortcuts, print the in-page listener table as JSON.
    #[arg(long, requires = "print_shortcuts")]
    pub json: bool,
}

pub fn parse() -> Args {
    Args::parse()
}
