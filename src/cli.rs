//! Command-line argument parsing for the simulator

use clap::Parser;
use std::path::PathBuf;

/// Replay a scripted panel session and print the resulting geometry
#[derive(Parser, Debug)]
#[command(name = "drawer-sim", version, about = "Replay scripted panel sessions")]
pub struct CliArgs {
    /// Scenario file (`.json`, otherwise YAML)
    #[arg(value_name = "SCENARIO")]
    pub scenario: PathBuf,

    /// Settings file to use instead of the user config
    #[arg(short = 's', long, value_name = "FILE")]
    pub settings: Option<PathBuf>,

    /// Print frames as JSON
    #[arg(long)]
    pub json: bool,
}
