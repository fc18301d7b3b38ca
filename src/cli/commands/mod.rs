//! CLI command implementations.
//!
//! Each command implements the [`Command`] trait, which provides a uniform
//! interface for executing commands and reporting results.
//!
//! # Architecture
//!
//! Commands are dispatched via [`CommandDispatcher`]. Every command that
//! touches the session goes through [`CommandContext::with_tracker`], which
//! loads the session file, runs one engine operation and saves it back.

pub mod context;
pub mod dispatcher;
pub mod display;
pub mod forget;
pub mod keygen;
pub mod mount;
pub mod show;
pub mod track;
pub mod travel;
pub mod update;

pub use context::{CommandContext, FileTracker};
pub use dispatcher::{Command, CommandDispatcher, CommandResult};
