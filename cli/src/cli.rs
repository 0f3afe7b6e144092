//! Command-line arguments.

use clap::{Parser, Subcommand};
use hero_core::{HeroId, DEFAULT_RESOURCE_PATH};

/// Talk to a heroes REST backend.
#[derive(Debug, Parser)]
#[command(name = "heroes", version)]
pub struct Cli {
    /// Backend origin, e.g. `http://127.0.0.1:3000`.
    #[arg(long, env = "HEROES_BASE_URL", default_value = "http://127.0.0.1:3000")]
    pub base_url: String,

    /// Path of the hero collection under the base URL.
    #[arg(long, env = "HEROES_RESOURCE_PATH", default_value = DEFAULT_RESOURCE_PATH)]
    pub resource_path: String,

    /// Report failures and exit non-zero instead of printing the fallback.
    #[arg(long)]
    pub strict: bool,

    /// Enable debug logging.
    #[arg(short, long)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand, PartialEq, Eq)]
pub enum Command {
    /// List every hero.
    List,
    /// Show one hero.
    Get { id: HeroId },
    /// Create a hero; the backend assigns its id.
    Add { name: String },
    /// Rename an existing hero.
    Update { id: HeroId, name: String },
    /// Remove a hero.
    Delete { id: HeroId },
}

impl Cli {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
