//! Session storage that tracker state lives in.
//!
//! - [`StorePath`] - Structured dot-delimited location in a session
//! - [`SessionStore`] - Trait hosts implement over their session backend
//! - [`MemorySession`] - In-memory JSON tree implementation
//! - [`SessionFile`] - Loads and atomically saves a [`MemorySession`]

mod file;
mod path;
mod store;

pub use file::SessionFile;
pub use path::StorePath;
pub use store::{MemorySession, SessionStore};

/// Default session file used by the CLI.
pub fn default_session_path() -> std::path::PathBuf {
    std::path::PathBuf::from("statetrail-session.json")
}
