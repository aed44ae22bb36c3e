//! Bearer token storage.
//!
//! TuneIn's web player authenticates every profile request with a short-lived
//! JWT in the `authorization` header. Copy it once from the browser's network
//! tab and `tunein login <TOKEN>` keeps it in `session.json` under the
//! platform config directory (`~/.config/tunein/` on Linux):
//!
//! ```json
//! { "token": "eyJhbGciOiJIUzI1NiIs..." }
//! ```
//!
//! Tokens expire after roughly a month; an expired one surfaces as HTTP 401.

use crate::error::{Result, TuneinError};
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::ErrorKind;
use std::path::PathBuf;

/// Persistent login session backed by a JSON file on disk.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct Session {
    /// Bearer token, without the `Bearer ` prefix.
    pub token: Option<String>,
}

impl Session {
    /// Build a session around an explicit token.
    pub fn with_token(token: impl Into<String>) -> Self {
        Self {
            token: Some(token.into()),
        }
    }

    /// Read the saved session. A missing file yields an empty session.
    pub fn load() -> Result<Self> {
        match fs::read_to_string(Self::path()?) {
            Ok(data) => Ok(serde_json::from_str(&data)?),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(Self::default()),
            Err(e) => Err(e.into()),
        }
    }

    /// Write the session file, creating the `tunein` config directory on first use.
    pub fn save(&self) -> Result<()> {
        let path = Self::path()?;
        if let Some(dir) = path.parent() {
            fs::create_dir_all(dir)?;
        }
        fs::write(&path, serde_json::to_vec_pretty(self)?)?;
        Ok(())
    }

    /// Forget the saved token. Succeeds when nothing was saved.
    pub fn clear() -> Result<()> {
        match fs::remove_file(Self::path()?) {
            Err(e) if e.kind() != ErrorKind::NotFound => Err(e.into()),
            _ => Ok(()),
        }
    }

    /// Build the `Authorization` HTTP header value.
    ///
    /// Returns `None` if no token is set. A stray `Bearer ` prefix pasted
    /// along with the token is not duplicated.
    pub fn authorization_header(&self) -> Option<String> {
        let token = self.token.as_deref()?.trim();
        if token.is_empty() {
            return None;
        }
        let token = token.strip_prefix("Bearer ").unwrap_or(token);
        Some(format!("Bearer {token}"))
    }

    /// Check whether a token is present (does not validate it).
    pub fn is_logged_in(&self) -> bool {
        self.authorization_header().is_some()
    }

    /// Location of the session file.
    pub fn path() -> Result<PathBuf> {
        let config = dirs::config_dir()
            .ok_or_else(|| TuneinError::Other("cannot determine config directory".into()))?;
        Ok(config.join("tunein").join("session.json"))
    }
}
