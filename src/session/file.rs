//! JSON file persistence for sessions.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Context;

use super::MemorySession;
use crate::error::Result;

/// A session persisted to a single JSON file.
pub struct SessionFile {
    path: PathBuf,
}

impl SessionFile {
    /// Create a handle for the session file at `path`.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Get the file path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the session; a missing file is an empty session.
    pub fn load(&self) -> Result<MemorySession> {
        if !self.path.exists() {
            return Ok(MemorySession::new());
        }

        let json = fs::read_to_string(&self.path)
            .with_context(|| format!("Failed to read session from {:?}", self.path))?;
        if json.trim().is_empty() {
            return Ok(MemorySession::new());
        }

        let session = serde_json::from_str(&json)
            .with_context(|| format!("Failed to parse session at {:?}", self.path))?;
        Ok(session)
    }

    /// Save the session using atomic write.
    ///
    /// Writes to a sibling temp file and renames it over the target, so a
    /// crash mid-write never leaves a truncated session behind.
    pub fn save(&self, session: &MemorySession) -> Result<()> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory {:?}", parent))?;
        }

        let json = serde_json::to_string_pretty(session)?;
        let temp_path = self.path.with_extension("json.tmp");
        fs::write(&temp_path, json)
            .with_context(|| format!("Failed to write session to {:?}", temp_path))?;
        fs::rename(&temp_path, &self.path)
            .with_context(|| format!("Failed to replace session at {:?}", self.path))?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::{SessionStore, StorePath};
    use serde_json::json;
    use tempfile::TempDir;

    #[test]
    fn load_missing_file_returns_empty() {
        let temp = TempDir::new().unwrap();
        let file = SessionFile::new(temp.path().join("session.json"));
        assert!(file.load().unwrap().is_empty());
    }

    #[test]
    fn save_and_load() {
        let temp = TempDir::new().unwrap();
        let file = SessionFile::new(temp.path().join("nested").join("session.json"));

        let mut session = MemorySession::new();
        session.set(&StorePath::parse("a.b").unwrap(), json!("value"));
        file.save(&session).unwrap();

        let loaded = file.load().unwrap();
        assert_eq!(loaded, session);
    }

    #[test]
    fn save_leaves_no_temp_file() {
        let temp = TempDir::new().unwrap();
        let file = SessionFile::new(temp.path().join("session.json"));
        file.save(&MemorySession::new()).unwrap();

        assert!(file.path().exists());
        assert!(!file.path().with_extension("json.tmp").exists());
    }

    #[test]
    fn load_corrupt_file_errors() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("session.json");
        fs::write(&path, "{ not json").unwrap();

        let err = SessionFile::new(&path).load().unwrap_err();
        assert!(err.to_string().contains("Failed to parse session"));
    }
}
