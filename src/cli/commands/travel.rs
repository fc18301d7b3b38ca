//! Back and forward command implementation.
//!
//! `statetrail back` and `statetrail forward` move the history cursor and
//! print the properties of the snapshot it lands on.

use std::io::Write;

use crate::error::Result;
use crate::history::Direction;

use super::context::CommandContext;
use super::dispatcher::{Command, CommandResult};
use super::display::write_properties;

/// Moves through the history in one direction.
pub struct TravelCommand {
    direction: Direction,
}

impl TravelCommand {
    /// Create a new travel command.
    pub fn new(direction: Direction) -> Self {
        Self { direction }
    }
}

impl Command for TravelCommand {
    fn execute(&self, ctx: &CommandContext, out: &mut dyn Write) -> Result<CommandResult> {
        let (cursor, properties) = ctx.with_tracker(|tracker, component| {
            tracker.traverse(component, self.direction)?;
            Ok((
                tracker.cursor(&*component),
                tracker.tracked_properties(&*component)?,
            ))
        })?;

        match cursor {
            Some(cursor) => writeln!(out, "Cursor at {}", cursor)?,
            None => writeln!(out, "No history recorded yet")?,
        }
        write_properties(out, &properties)?;
        Ok(CommandResult::success())
    }
}
