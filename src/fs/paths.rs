//! Path and directory management.

use std::path::{Path, PathBuf};

use crate::config::Config;
use crate::error::Result;
use crate::fs::naming::sanitize_filename;

/// Name of the per-community scope: output folder and cache file stem.
///
/// Falls back to `club<id>` when the sanitized title could escape its parent
/// directory or would be empty.
pub fn community_folder(title: &str, community_id: i64) -> String {
    let sanitized = sanitize_filename(title);
    let trimmed = sanitized.trim();

    if trimmed.is_empty() || trimmed.chars().all(|c| c == '.') {
        format!("club{}", community_id.unsigned_abs())
    } else {
        sanitized
    }
}

/// Directories used while processing one community.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommunityPaths {
    /// Scope name shared by the output folder and the cache file.
    pub scope: String,
    /// Where this community's clips are written.
    pub clips_dir: PathBuf,
    /// Directory holding the cache file.
    pub cache_dir: PathBuf,
}

impl CommunityPaths {
    pub fn new(config: &Config, title: &str, community_id: i64) -> Self {
        let scope = community_folder(title, community_id);
        Self {
            clips_dir: config.options.download_directory.join(&scope),
            cache_dir: config.options.cache_directory.clone(),
            scope,
        }
    }

    /// Create the output and cache directories.
    pub async fn create(&self) -> Result<()> {
        ensure_dir(&self.clips_dir).await?;
        ensure_dir(&self.cache_dir).await?;
        Ok(())
    }
}

/// Ensure a directory exists, creating it if necessary.
pub async fn ensure_dir(path: &Path) -> Result<()> {
    tokio::fs::create_dir_all(path).await?;
    Ok(())
}
