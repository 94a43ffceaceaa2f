//! Command-line interface for Fyyur.

mod commands;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Fyyur - listings for live music venues, artists and shows
#[derive(Parser)]
#[command(name = "fyyur")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Path to a config file (defaults to the usual lookup locations)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Start the web server (default)
    Serve,

    /// Insert sample venues, artists and shows into an empty database
    Seed,

    /// Create default config file
    #[command(alias = "init")]
    InitConfig,
}

pub use commands::*;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_command_is_none() {
        let cli = Cli::try_parse_from(["fyyur"]).unwrap();
        assert!(cli.command.is_none());
        assert!(cli.config.is_none());
    }

    #[test]
    fn test_global_config_flag() {
        let cli = Cli::try_parse_from(["fyyur", "seed", "--config", "/tmp/fyyur.toml"]).unwrap();
        assert_eq!(cli.command, Some(Commands::Seed));
        assert_eq!(cli.config, Some(PathBuf::from("/tmp/fyyur.toml")));
    }

    #[test]
    fn test_init_alias() {
        let cli = Cli::try_parse_from(["fyyur", "init"]).unwrap();
        assert_eq!(cli.command, Some(Commands::InitConfig));
    }
}
