use std::{
    io::{Error, ErrorKind},
    path::{Path, PathBuf},
};

use serde::{Deserialize, Serialize};

#[derive(Debug)]
pub enum StoreError {
    IoError(Error),
    SerdeError(serde_json::Error),
}

impl From<Error> for StoreError {
    fn from(err: Error) -> Self {
        StoreError::IoError(err)
    }
}

impl std::fmt::Display for StoreError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StoreError::IoError(e) => write!(f, "session storage i/o error: {}", e),
            StoreError::SerdeError(e) => write!(f, "session storage format error: {}", e),
        }
    }
}

impl std::error::Error for StoreError {}

/// The three durable entries of a session: token, expiry instant, and the
/// transient login nonce. Nothing else is persisted.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SessionRecord {
    pub access_token: Option<String>,
    pub expires_at: Option<i64>,
    pub nonce: Option<String>,
}

impl SessionRecord {
    pub fn is_empty(&self) -> bool {
        self.access_token.is_none() && self.expires_at.is_none() && self.nonce.is_none()
    }
}

/// File-backed persistence for one [`SessionRecord`], stored as a single
/// JSON document in the application data directory.
pub struct SessionStore {
    path: PathBuf,
}

impl SessionStore {
    pub fn new() -> Self {
        let mut path = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
        path.push("tunesphere/session.json");
        SessionStore { path }
    }

    /// Store rooted at an explicit directory instead of the data dir.
    pub fn with_base_dir(base: &Path) -> Self {
        SessionStore {
            path: base.join("session.json"),
        }
    }

    /// Reads the persisted record; a missing file is an empty session.
    pub async fn load(&self) -> Result<SessionRecord, StoreError> {
        let content = match async_fs::read_to_string(&self.path).await {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(SessionRecord::default()),
            Err(e) => return Err(StoreError::IoError(e)),
        };
        serde_json::from_str(&content).map_err(StoreError::SerdeError)
    }

    pub async fn persist(&self, record: &SessionRecord) -> Result<(), StoreError> {
        if let Some(parent) = self.path.parent() {
            async_fs::create_dir_all(parent)
                .await
                .map_err(StoreError::IoError)?;
        }

        let json = serde_json::to_string_pretty(record).map_err(StoreError::SerdeError)?;
        async_fs::write(&self.path, json)
            .await
            .map_err(StoreError::IoError)
    }

    /// Removes the backing file; a file that never existed is fine.
    pub async fn clear(&self) -> Result<(), StoreError> {
        match async_fs::remove_file(&self.path).await {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(StoreError::IoError(e)),
        }
    }
}

impl Default for SessionStore {
    fn default() -> Self {
        Self::new()
    }
}
