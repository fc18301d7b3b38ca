//! Show command implementation.
//!
//! The `statetrail show` command prints the tracked properties together
//! with the cursor, history depth and refresh count.

use std::io::Write;

use serde::Serialize;
use serde_json::{Map, Value};

use crate::cli::args::ShowArgs;
use crate::error::Result;

use super::context::CommandContext;
use super::dispatcher::{Command, CommandResult};
use super::display::write_properties;

/// The show command implementation.
pub struct ShowCommand {
    args: ShowArgs,
}

/// Snapshot of a tracker as reported by `show`.
#[derive(Debug, Serialize)]
struct TrackerReport {
    namespace: String,
    tracking: bool,
    cursor: Option<i64>,
    history: usize,
    refreshes: i64,
    max_trails: usize,
    properties: Map<String, Value>,
}

impl ShowCommand {
    /// Create a new show command.
    pub fn new(args: ShowArgs) -> Self {
        Self { args }
    }
}

impl Command for ShowCommand {
    fn execute(&self, ctx: &CommandContext, out: &mut dyn Write) -> Result<CommandResult> {
        let report = ctx.inspect_tracker(|tracker, component| {
            Ok(TrackerReport {
                namespace: tracker.namespace(component).to_string(),
                tracking: tracker.is_tracking(component),
                cursor: tracker.cursor(component),
                history: tracker.history_len(component),
                refreshes: tracker.refresh_count(component),
                max_trails: tracker.config().max_trails,
                properties: tracker.tracked_properties(component)?,
            })
        })?;

        if self.args.json {
            writeln!(out, "{}", serde_json::to_string_pretty(&report)?)?;
            return Ok(CommandResult::success());
        }

        if !report.tracking {
            writeln!(out, "No tracker for {}", report.namespace)?;
            return Ok(CommandResult::success());
        }

        writeln!(out, "Namespace: {}", report.namespace)?;
        match report.cursor {
            Some(cursor) => writeln!(out, "Cursor:    {}", cursor)?,
            None => writeln!(out, "Cursor:    (none)")?,
        }
        writeln!(
            out,
            "History:   {} snapshot(s), reset at index {}",
            report.history, report.max_trails
        )?;
        writeln!(out, "Refreshes: {}", report.refreshes)?;
        writeln!(out, "Properties:")?;
        write_properties(out, &report.properties)?;
        Ok(CommandResult::success())
    }
}
