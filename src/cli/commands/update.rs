//! Update command implementation.
//!
//! The `statetrail update` command changes tracked properties and records
//! the change as a new version.

use std::io::Write;

use crate::cli::args::AssignArgs;
use crate::component::Component;
use crate::error::{Result, StateError};

use super::context::CommandContext;
use super::dispatcher::{Command, CommandResult};
use super::display::{parse_assignments, write_properties};

/// The update command implementation.
pub struct UpdateCommand {
    args: AssignArgs,
}

impl UpdateCommand {
    /// Create a new update command.
    pub fn new(args: AssignArgs) -> Self {
        Self { args }
    }
}

impl Command for UpdateCommand {
    fn execute(&self, ctx: &CommandContext, out: &mut dyn Write) -> Result<CommandResult> {
        let changes = parse_assignments(&self.args.assignments)?;

        let (cursor, tracked) = ctx.with_tracker(|tracker, component| {
            let mut names = Vec::with_capacity(changes.len());
            for (name, value) in &changes {
                if !component.set_property(name, value.clone()) {
                    return Err(StateError::PropertyNotFound {
                        property: name.clone(),
                        component: component.class_name(),
                    });
                }
                names.push(name.clone());
            }
            tracker.record_update(&*component, names)?;
            Ok((
                tracker.cursor(&*component),
                tracker.tracked_properties(&*component)?,
            ))
        })?;

        writeln!(
            out,
            "Recorded version (cursor {})",
            cursor.unwrap_or(-1)
        )?;
        write_properties(out, &tracked)?;
        Ok(CommandResult::success())
    }
}
