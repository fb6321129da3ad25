/**
 * Durable Token Cache
 *
 * Persists the current bearer token in a single named slot so the session
 * survives application restarts. Absence of the slot means logged out.
 *
 * The slot is a plain file under the user configuration directory. All
 * mutation happens on the UI thread with last-write-wins semantics, so no
 * locking is needed.
 */

use std::fs;
use std::io;
use std::path::PathBuf;

/// Token slot file name under the application config directory
const TOKEN_FILE: &str = "token";

/// Durable single-slot token cache
#[derive(Debug, Clone)]
pub struct TokenStore {
    path: PathBuf,
}

impl Default for TokenStore {
    fn default() -> Self {
        let base = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
        Self {
            path: base.join("authgate").join(TOKEN_FILE),
        }
    }
}

impl TokenStore {
    /// Create a store at the default location
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store backed by an explicit file path (used by tests)
    pub fn with_path(path: PathBuf) -> Self {
        Self { path }
    }

    /// Read the cached token
    ///
    /// Returns `None` when the slot is absent or empty.
    pub fn get(&self) -> Option<String> {
        let raw = fs::read_to_string(&self.path).ok()?;
        let token = raw.trim();
        if token.is_empty() {
            None
        } else {
            Some(token.to_string())
        }
    }

    /// Write a token into the slot
    pub fn set(&self, token: &str) -> io::Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&self.path, token)
    }

    /// Remove the slot
    ///
    /// Clearing an already-empty slot is not an error.
    pub fn clear(&self) -> io::Result<()> {
        match fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e),
        }
    }
}
