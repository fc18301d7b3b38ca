//! CLI argument definitions.
//!
//! This module defines all CLI arguments using clap's derive macros.
//! The main entry point is the [`Cli`] struct.

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

use crate::session::default_session_path;

/// statetrail - Drive and inspect component state histories.
#[derive(Debug, Parser)]
#[command(name = "statetrail")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Session file to operate on
    #[arg(short, long, global = true, default_value_os_t = default_session_path())]
    pub session: PathBuf,

    /// Component class name the history is kept for
    #[arg(long, global = true, default_value = "Component")]
    pub class: String,

    /// Path to a tracker config file (YAML)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Payload key as 64 hex characters
    #[arg(long, global = true, env = "STATETRAIL_KEY", hide_env_values = true)]
    pub key: Option<String>,

    /// Passphrase to derive the payload key from (ignored when --key is set)
    #[arg(long, global = true, env = "STATETRAIL_PASSPHRASE", hide_env_values = true)]
    pub passphrase: Option<String>,

    /// Enable debug logging
    #[arg(long, global = true)]
    pub debug: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Simulate a component mount (counts a page refresh)
    Mount,

    /// Register tracked properties with their initial values
    Track(AssignArgs),

    /// Change tracked properties and record a new version
    Update(AssignArgs),

    /// Step back through the history
    Back,

    /// Step forward through the history
    Forward,

    /// Show the tracked state
    Show(ShowArgs),

    /// Forget the tracker for this component
    Forget,

    /// Print a freshly generated payload key
    Keygen,
}

/// Arguments for commands taking `name=value` pairs.
#[derive(Debug, Clone, Args)]
pub struct AssignArgs {
    /// Property assignments; values are parsed as JSON, else taken as text
    #[arg(required = true, value_name = "NAME=VALUE")]
    pub assignments: Vec<String>,
}

/// Arguments for the `show` command.
#[derive(Debug, Clone, Default, Args)]
pub struct ShowArgs {
    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_global_flags_after_subcommand() {
        let cli = Cli::parse_from([
            "statetrail",
            "show",
            "--session",
            "/tmp/s.json",
            "--class",
            "Cart",
            "--json",
        ]);
        assert_eq!(cli.session, PathBuf::from("/tmp/s.json"));
        assert_eq!(cli.class, "Cart");
        assert!(matches!(cli.command, Commands::Show(ShowArgs { json: true })));
    }

    #[test]
    fn defaults_apply() {
        let cli = Cli::parse_from(["statetrail", "back"]);
        assert_eq!(cli.session, default_session_path());
        assert_eq!(cli.class, "Component");
        assert!(!cli.debug);
    }

    #[test]
    fn track_collects_assignments() {
        let cli = Cli::parse_from(["statetrail", "track", "a=1", "b=two"]);
        match cli.command {
            Commands::Track(args) => assert_eq!(args.assignments, ["a=1", "b=two"]),
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn track_requires_assignments() {
        assert!(Cli::try_parse_from(["statetrail", "track"]).is_err());
    }
}
