//! Keygen command implementation.

use std::io::Write;

use crate::cipher::CipherKey;
use crate::error::Result;

use super::context::CommandContext;
use super::dispatcher::{Command, CommandResult};

/// Prints a random payload key as hex.
pub struct KeygenCommand;

impl Command for KeygenCommand {
    fn execute(&self, _ctx: &CommandContext, out: &mut dyn Write) -> Result<CommandResult> {
        writeln!(out, "{}", CipherKey::generate().to_hex())?;
        Ok(CommandResult::success())
    }
}
