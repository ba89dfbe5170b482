use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

use crate::error::ClientResult;

/// The three entries that make up a persisted session. Each lives in its
/// own file; legacy readers open the files directly by name, so the names
/// and their independence are a compatibility contract.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionKey {
    Token,
    Username,
    Role,
}

impl SessionKey {
    pub const ALL: [SessionKey; 3] = [SessionKey::Token, SessionKey::Username, SessionKey::Role];

    pub fn as_str(&self) -> &'static str {
        match self {
            SessionKey::Token => "jwt",
            SessionKey::Username => "username",
            SessionKey::Role => "role",
        }
    }
}

/// Read-only view of the current identity.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Session {
    pub username: Option<String>,
    pub role: Option<String>,
    pub is_authenticated: bool,
}

/// Durable key-value store for the session triple. One file per key under
/// the session directory; values are raw strings with no framing and no
/// combined record. Only the auth client writes here; everything else
/// reads.
#[derive(Debug, Clone)]
pub struct SessionStore {
    dir: PathBuf,
}

impl SessionStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    fn entry_path(&self, key: SessionKey) -> PathBuf {
        self.dir.join(key.as_str())
    }

    /// Value for `key`, or None when missing. An unreadable entry counts
    /// as missing.
    pub fn get(&self, key: SessionKey) -> Option<String> {
        fs::read_to_string(self.entry_path(key)).ok()
    }

    /// Overwrite `key` with `value`. Creates the session directory on
    /// first write.
    pub fn set(&self, key: SessionKey, value: &str) -> ClientResult<()> {
        fs::create_dir_all(&self.dir)?;
        fs::write(self.entry_path(key), value)?;
        tracing::debug!(key = key.as_str(), "session entry written");
        Ok(())
    }

    /// Remove all three entries. Missing entries are not an error, and
    /// removal failures are logged and dropped so logout never fails.
    pub fn clear(&self) {
        for key in SessionKey::ALL {
            match fs::remove_file(self.entry_path(key)) {
                Ok(()) => {}
                Err(e) if e.kind() == std::io::ErrorKind::NotFound => {}
                Err(e) => {
                    tracing::warn!(key = key.as_str(), error = %e, "failed to remove session entry");
                }
            }
        }
        tracing::debug!("session cleared");
    }

    pub fn token(&self) -> Option<String> {
        self.get(SessionKey::Token)
    }

    pub fn username(&self) -> Option<String> {
        self.get(SessionKey::Username)
    }

    pub fn role(&self) -> Option<String> {
        self.get(SessionKey::Role)
    }

    /// Token presence is what marks a session as authenticated.
    pub fn is_authenticated(&self) -> bool {
        self.token().is_some()
    }

    pub fn snapshot(&self) -> Session {
        Session {
            username: self.username(),
            role: self.role(),
            is_authenticated: self.is_authenticated(),
        }
    }
}
