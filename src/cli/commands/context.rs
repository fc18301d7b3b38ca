//! Shared state for command execution.

use crate::cipher::{CipherKey, SessionCipher};
use crate::cli::args::Cli;
use crate::component::PropertyBag;
use crate::config::{load_config, TrackerConfig};
use crate::error::{Result, StateError};
use crate::history::StateTracker;
use crate::session::{MemorySession, SessionFile};

/// Tracker type every session-backed command operates on.
pub type FileTracker<'a> = StateTracker<'a, MemorySession, SessionCipher>;

/// Everything a command needs to open a tracker.
pub struct CommandContext {
    session_file: SessionFile,
    class_name: String,
    config: TrackerConfig,
    key: Option<CipherKey>,
}

impl CommandContext {
    /// Resolve settings and key material from parsed arguments.
    pub fn from_cli(cli: &Cli) -> Result<Self> {
        let config = load_config(cli.config.as_deref())?;
        let key = match (&cli.key, &cli.passphrase) {
            (Some(hex), _) => Some(CipherKey::from_hex(hex)?),
            (None, Some(passphrase)) => Some(CipherKey::derive(passphrase)),
            (None, None) => None,
        };

        Ok(Self::new(&cli.session, &cli.class, config, key))
    }

    /// Create a context directly.
    pub fn new(
        session: impl Into<std::path::PathBuf>,
        class_name: impl Into<String>,
        config: TrackerConfig,
        key: Option<CipherKey>,
    ) -> Self {
        Self {
            session_file: SessionFile::new(session),
            class_name: class_name.into(),
            config,
            key,
        }
    }

    /// Get the tracker settings.
    pub fn config(&self) -> &TrackerConfig {
        &self.config
    }

    /// Get the session file handle.
    pub fn session_file(&self) -> &SessionFile {
        &self.session_file
    }

    fn cipher(&self) -> Result<SessionCipher> {
        let key = self.key.as_ref().ok_or_else(|| StateError::InvalidKey {
            message: "no payload key; pass --key or --passphrase (or set STATETRAIL_KEY)"
                .to_string(),
        })?;
        Ok(SessionCipher::new(key))
    }

    /// Run `f` against a tracker over the session file.
    ///
    /// The component is rebuilt from the tracked payload and every history
    /// snapshot, so it declares each property the tracker may restore. The
    /// session is saved only when `f` succeeds.
    pub fn with_tracker<T>(
        &self,
        f: impl FnOnce(&mut FileTracker<'_>, &mut PropertyBag) -> Result<T>,
    ) -> Result<T> {
        let cipher = self.cipher()?;
        let mut session = self.session_file.load()?;
        let result = self.run(&mut session, &cipher, f)?;
        self.session_file.save(&session)?;
        Ok(result)
    }

    /// Like [`with_tracker`](Self::with_tracker), but the session file is
    /// never written.
    pub fn inspect_tracker<T>(
        &self,
        f: impl FnOnce(&FileTracker<'_>, &PropertyBag) -> Result<T>,
    ) -> Result<T> {
        let cipher = self.cipher()?;
        let mut session = self.session_file.load()?;
        self.run(&mut session, &cipher, |tracker, component| f(tracker, component))
    }

    fn run<T>(
        &self,
        session: &mut MemorySession,
        cipher: &SessionCipher,
        f: impl FnOnce(&mut FileTracker<'_>, &mut PropertyBag) -> Result<T>,
    ) -> Result<T> {
        let mut tracker = StateTracker::new(session, cipher, self.config.clone());
        let mut component = PropertyBag::new(self.class_name.as_str());
        for snapshot in tracker.history_snapshots(&component)? {
            component.declare_all(snapshot);
        }
        component.declare_all(tracker.tracked_properties(&component)?);
        f(&mut tracker, &mut component)
    }
}
