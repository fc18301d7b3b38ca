//! Command dispatching.
//!
//! This module provides the core command infrastructure:
//! - [`Command`] trait for implementing commands
//! - [`CommandResult`] for uniform result reporting
//! - [`CommandDispatcher`] for routing CLI subcommands

use std::io::Write;

use crate::cli::args::{Cli, Commands};
use crate::error::Result;

use super::context::CommandContext;

/// Trait for command implementations.
///
/// Each CLI subcommand implements this trait to provide its execution logic.
pub trait Command {
    /// Execute the command.
    ///
    /// # Arguments
    ///
    /// * `ctx` - Session file, tracker settings and key material
    /// * `out` - Where to write the command's report
    fn execute(&self, ctx: &CommandContext, out: &mut dyn Write) -> Result<CommandResult>;
}

/// Result of command execution.
#[derive(Debug)]
pub struct CommandResult {
    /// Whether the command succeeded.
    pub success: bool,

    /// Exit code to use (0 for success, non-zero for failure).
    pub exit_code: i32,
}

impl CommandResult {
    /// Create a successful result.
    pub fn success() -> Self {
        Self {
            success: true,
            exit_code: 0,
        }
    }
}

/// Dispatches CLI commands to their implementations.
pub struct CommandDispatcher {
    ctx: CommandContext,
}

impl CommandDispatcher {
    /// Create a dispatcher from parsed arguments.
    pub fn new(cli: &Cli) -> Result<Self> {
        Ok(Self {
            ctx: CommandContext::from_cli(cli)?,
        })
    }

    /// Get the shared command context.
    pub fn context(&self) -> &CommandContext {
        &self.ctx
    }

    /// Dispatch and execute a command.
    pub fn dispatch(&self, command: &Commands, out: &mut dyn Write) -> Result<CommandResult> {
        match command {
            Commands::Mount => super::mount::MountCommand.execute(&self.ctx, out),
            Commands::Track(args) => {
                super::track::TrackCommand::new(args.clone()).execute(&self.ctx, out)
            }
            Commands::Update(args) => {
                super::update::UpdateCommand::new(args.clone()).execute(&self.ctx, out)
            }
            Commands::Back => {
                super::travel::TravelCommand::new(crate::history::Direction::Backward)
                    .execute(&self.ctx, out)
            }
            Commands::Forward => {
                super::travel::TravelCommand::new(crate::history::Direction::Forward)
                    .execute(&self.ctx, out)
            }
            Commands::Show(args) => {
                super::show::ShowCommand::new(args.clone()).execute(&self.ctx, out)
            }
            Commands::Forget => super::forget::ForgetCommand.execute(&self.ctx, out),
            Commands::Keygen => super::keygen::KeygenCommand.execute(&self.ctx, out),
        }
    }
}
