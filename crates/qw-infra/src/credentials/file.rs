//! File-based access token store
//!
//! Persists the long-lived session credential to a local JSON file in the
//! application data directory.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use tokio::fs;
use tokio::io::AsyncWriteExt;
use tracing::debug;

use qw_core::ports::AccessTokenStorePort;
use qw_core::AccessToken;

pub use qw_core::config::ACCESS_TOKEN_FILE as DEFAULT_ACCESS_TOKEN_FILE;

#[derive(Serialize, Deserialize)]
struct StoredSession {
    access_token: String,
}

pub struct FileAccessTokenStore {
    token_file_path: PathBuf,
}

impl FileAccessTokenStore {
    /// Create store with custom file path
    pub fn new(token_file_path: PathBuf) -> Self {
        Self { token_file_path }
    }

    /// Create store with defaults
    pub fn with_defaults(base_dir: PathBuf) -> Self {
        Self {
            token_file_path: base_dir.join(DEFAULT_ACCESS_TOKEN_FILE),
        }
    }

    pub fn path(&self) -> &PathBuf {
        &self.token_file_path
    }

    async fn ensure_parent_dir(&self) -> anyhow::Result<()> {
        if let Some(parent) = self.token_file_path.parent() {
            fs::create_dir_all(parent).await?;
        }
        Ok(())
    }
}

#[async_trait]
impl AccessTokenStorePort for FileAccessTokenStore {
    async fn load(&self) -> anyhow::Result<Option<AccessToken>> {
        if !self.token_file_path.exists() {
            return Ok(None);
        }

        let content = fs::read_to_string(&self.token_file_path).await?;
        if content.trim().is_empty() {
            return Ok(None);
        }

        let stored: StoredSession = serde_json::from_str(&content)
            .map_err(|e| anyhow::anyhow!("Failed to parse session file: {}", e))?;

        Ok(Some(AccessToken::new(stored.access_token)).filter(|t| !t.is_empty()))
    }

    async fn save(&self, token: &AccessToken) -> anyhow::Result<()> {
        self.ensure_parent_dir().await?;

        let json = serde_json::to_string_pretty(&StoredSession {
            access_token: token.expose().to_string(),
        })
        .map_err(|e| anyhow::anyhow!("Failed to serialize session: {}", e))?;

        let mut file = fs::File::create(&self.token_file_path)
            .await
            .map_err(|e| anyhow::anyhow!("Failed to create session file: {}", e))?;

        file.write_all(json.as_bytes())
            .await
            .map_err(|e| anyhow::anyhow!("Failed to write session file: {}", e))?;

        file.sync_all()
            .await
            .map_err(|e| anyhow::anyhow!("Failed to sync session file: {}", e))?;

        debug!(path = %self.token_file_path.display(), "session file written");
        Ok(())
    }

    async fn clear(&self) -> anyhow::Result<()> {
        if self.token_file_path.exists() {
            fs::remove_file(&self.token_file_path).await?;
        }
        Ok(())
    }
}
