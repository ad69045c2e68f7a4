//! Command-line interface definitions for perch.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use logging::LogArgs;

/// Command-line interface for the `perch` binary.
#[derive(Parser, Debug)]
#[command(
    name = "perch",
    about = "Place floating panels next to their anchors",
    version
)]
pub struct Cli {
    /// Logging controls.
    #[command(flatten)]
    pub log: LogArgs,

    /// What to do.
    #[command(subcommand)]
    pub command: Commands,
}

/// Top-level commands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run placement for the anchor and floating element in a scene file.
    Place(PlaceArgs),
    /// Load and validate a placement configuration file.
    CheckConfig(CheckConfigArgs),
}

/// Arguments for the `place` subcommand.
#[derive(Args, Debug, Clone)]
pub struct PlaceArgs {
    /// Scene description in RON.
    #[arg(value_name = "SCENE")]
    pub scene: PathBuf,

    /// Print the result as JSON.
    #[arg(long)]
    pub json: bool,

    /// Also list every candidate in search order with its overlap.
    #[arg(long)]
    pub candidates: bool,
}

/// Arguments for the `check-config` subcommand.
#[derive(Args, Debug, Clone)]
pub struct CheckConfigArgs {
    /// Placement configuration in RON.
    #[arg(value_name = "CONFIG")]
    pub config: PathBuf,
}
