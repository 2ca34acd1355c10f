//! Command-line arguments.

use clap::Parser;
use std::path::PathBuf;

/// Serve the customs export application.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Path to configuration file.
    #[arg(short, long, env = "APP_CONFIG")]
    pub config: Option<PathBuf>,

    /// Insert standard reference codes before serving.
    #[arg(long)]
    pub seed: bool,
}

impl Cli {
    /// Parse command-line arguments.
    pub fn import() -> Result<Self, clap::Error> {
        Self::try_parse()
    }
}
