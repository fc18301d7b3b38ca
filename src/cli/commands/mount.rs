//! Mount command implementation.
//!
//! The `statetrail mount` command runs the tracker's mount hook, which
//! counts a page refresh and expires stale trackers.

use std::io::Write;

use crate::error::Result;

use super::context::CommandContext;
use super::dispatcher::{Command, CommandResult};

/// The mount command implementation.
pub struct MountCommand;

impl Command for MountCommand {
    fn execute(&self, ctx: &CommandContext, out: &mut dyn Write) -> Result<CommandResult> {
        let (namespace, expired, refreshes) = ctx.with_tracker(|tracker, component| {
            let expired = tracker.initialize(&*component);
            Ok((
                tracker.namespace(&*component),
                expired,
                tracker.refresh_count(&*component),
            ))
        })?;

        if expired {
            writeln!(
                out,
                "Tracker {} expired; component is back to its initial state",
                namespace
            )?;
        } else {
            writeln!(out, "Mounted {} (refresh {})", namespace, refreshes)?;
        }

        Ok(CommandResult::success())
    }
}
