//! Forget command implementation.

use std::io::Write;

use crate::error::Result;

use super::context::CommandContext;
use super::dispatcher::{Command, CommandResult};

/// The forget command implementation.
pub struct ForgetCommand;

impl Command for ForgetCommand {
    fn execute(&self, ctx: &CommandContext, out: &mut dyn Write) -> Result<CommandResult> {
        let namespace = ctx.with_tracker(|tracker, component| {
            tracker.teardown(&*component);
            Ok(tracker.namespace(&*component))
        })?;

        writeln!(out, "Forgot tracker {}", namespace)?;
        Ok(CommandResult::success())
    }
}
