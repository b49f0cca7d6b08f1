//! Saved API keys.
//!
//! A [`CredentialStore`] is handed to the playground service at startup. It
//! is read once when a visitor's session is created and written when the
//! visitor saves a key or signs up.

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::RwLock;

use async_trait::async_trait;
use thiserror::Error;
use tokio::sync::Mutex;
use tracing::info;

/// Credential persistence errors.
#[derive(Error, Debug)]
pub enum CredentialError {
    #[error("credential file I/O failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("credential file is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// Persistence for one opaque key per visitor.
#[async_trait]
pub trait CredentialStore: Send + Sync + std::fmt::Debug {
    /// Saved key for `client_id`, if any.
    async fn load(&self, client_id: &str) -> Result<Option<String>, CredentialError>;

    /// Save `key` for `client_id`, replacing the previous one.
    async fn save(&self, client_id: &str, key: &str) -> Result<(), CredentialError>;
}

/// Keys kept in process memory.
#[derive(Debug, Default)]
pub struct MemoryCredentialStore {
    keys: RwLock<HashMap<String, String>>,
}

impl MemoryCredentialStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl CredentialStore for MemoryCredentialStore {
    async fn load(&self, client_id: &str) -> Result<Option<String>, CredentialError> {
        Ok(self.keys.read().unwrap().get(client_id).cloned())
    }

    async fn save(&self, client_id: &str, key: &str) -> Result<(), CredentialError> {
        self.keys
            .write()
            .unwrap()
            .insert(client_id.to_string(), key.to_string());
        Ok(())
    }
}

/// Keys kept in a JSON file (`{"<client id>": "<key>"}`).
#[derive(Debug)]
pub struct FileCredentialStore {
    path: PathBuf,
    write_lock: Mutex<()>,
}

impl FileCredentialStore {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            write_lock: Mutex::new(()),
        }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    async fn read_all(&self) -> Result<HashMap<String, String>, CredentialError> {
        match tokio::fs::read(&self.path).await {
            Ok(bytes) if bytes.is_empty() => Ok(HashMap::new()),
            Ok(bytes) => Ok(serde_json::from_slice(&bytes)?),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(HashMap::new()),
            Err(e) => Err(e.into()),
        }
    }
}

#[async_trait]
impl CredentialStore for FileCredentialStore {
    async fn load(&self, client_id: &str) -> Result<Option<String>, CredentialError> {
        Ok(self.read_all().await?.remove(client_id))
    }

    async fn save(&self, client_id: &str, key: &str) -> Result<(), CredentialError> {
        let _guard = self.write_lock.lock().await;

        let mut keys = self.read_all().await?;
        keys.insert(client_id.to_string(), key.to_string());

        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            tokio::fs::create_dir_all(parent).await?;
        }
        // Write to a sibling file, then rename over the original.
        let tmp = self.path.with_extension("json.tmp");
        tokio::fs::write(&tmp, serde_json::to_vec_pretty(&keys)?).await?;
        tokio::fs::rename(&tmp, &self.path).await?;

        info!(name: "credentials.saved", path = %self.path.display(), "API key saved");
        Ok(())
    }
}
