use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::commands::{launch, list};

#[derive(Debug, Parser)]
#[command(name = "portal-library")]
#[command(about = "MyPortalLibrary world viewer", long_about = None)]
pub struct Cli {
    /// Path to config.toml (default: ~/.config/portal-library/config.toml)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Browse worlds interactively (default)
    Browse,

    /// Print worlds as tables
    List(list::Args),

    /// Open the launch link for a world
    Launch(launch::Args),
}
