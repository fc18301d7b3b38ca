//! Track command implementation.
//!
//! The `statetrail track` command registers the properties to keep a
//! history for. Properties already tracked keep their stored values.

use std::io::Write;

use crate::cli::args::AssignArgs;
use crate::error::Result;

use super::context::CommandContext;
use super::dispatcher::{Command, CommandResult};
use super::display::{parse_assignments, write_properties};

/// The track command implementation.
pub struct TrackCommand {
    args: AssignArgs,
}

impl TrackCommand {
    /// Create a new track command.
    pub fn new(args: AssignArgs) -> Self {
        Self { args }
    }
}

impl Command for TrackCommand {
    fn execute(&self, ctx: &CommandContext, out: &mut dyn Write) -> Result<CommandResult> {
        let requested = parse_assignments(&self.args.assignments)?;

        let (namespace, tracked) = ctx.with_tracker(|tracker, component| {
            for (name, value) in &requested {
                if component.get(name).is_none() {
                    component.declare(name.as_str(), value.clone());
                }
            }
            tracker.register_tracking(component, requested.clone())?;
            Ok((
                tracker.namespace(&*component),
                tracker.tracked_properties(&*component)?,
            ))
        })?;

        writeln!(out, "Tracking {}:", namespace)?;
        write_properties(out, &tracked)?;
        Ok(CommandResult::success())
    }
}
