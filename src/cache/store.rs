//! Append-only clip id cache, one text file per community scope.

use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::Arc;

use tokio::fs::OpenOptions;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::sync::Mutex;

use crate::error::Result;

/// Extension of cache files.
const CACHE_EXTENSION: &str = "txt";

/// Per-scope record of clip ids already claimed for download.
///
/// A check-and-claim on one scope is serialized inside this process. Separate
/// processes sharing the same directory are not coordinated.
#[derive(Debug)]
pub struct DownloadCache {
    dir: PathBuf,
    locks: Mutex<HashMap<String, Arc<Mutex<()>>>>,
}

impl DownloadCache {
    /// Create a cache rooted at `dir`. Files are created lazily.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self {
            dir: dir.into(),
            locks: Mutex::new(HashMap::new()),
        }
    }

    /// Path of the cache file for a scope.
    pub fn file_path(&self, scope: &str) -> PathBuf {
        self.dir.join(format!("{}.{}", scope, CACHE_EXTENSION))
    }

    /// Return whether `id` is already recorded for `scope`.
    ///
    /// When it is not, the id is appended before returning `false`: the
    /// check itself claims the clip, so a second call answers `true`.
    pub async fn is_cached(&self, scope: &str, id: &str) -> Result<bool> {
        let lock = self.scope_lock(scope).await;
        let _guard = lock.lock().await;

        tokio::fs::create_dir_all(&self.dir).await?;
        let mut file = OpenOptions::new()
            .create(true)
            .read(true)
            .append(true)
            .open(self.file_path(scope))
            .await?;

        let mut content = String::new();
        file.read_to_string(&mut content).await?;

        if content.lines().any(|line| line.trim() == id) {
            return Ok(true);
        }

        let mut entry = String::with_capacity(id.len() + 2);
        if !content.is_empty() && !content.ends_with('\n') {
            entry.push('\n');
        }
        entry.push_str(id);
        entry.push('\n');

        file.write_all(entry.as_bytes()).await?;
        file.flush().await?;

        tracing::debug!("Claimed clip {} in cache scope '{}'", id, scope);
        Ok(false)
    }

    async fn scope_lock(&self, scope: &str) -> Arc<Mutex<()>> {
        let mut locks = self.locks.lock().await;
        locks
            .entry(scope.to_string())
            .or_insert_with(|| Arc::new(Mutex::new(())))
            .clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_check_claims_id() {
        let dir = tempfile::tempdir().unwrap();
        let cache = DownloadCache::new(dir.path());

        assert!(!cache.is_cached("group", "123").await.unwrap());
        assert!(cache.is_cached("group", "123").await.unwrap());

        let content = tokio::fs::read_to_string(cache.file_path("group"))
            .await
            .unwrap();
        assert_eq!(content, "123\n");
    }

    #[tokio::test]
    async fn test_scopes_are_independent() {
        let dir = tempfile::tempdir().unwrap();
        let cache = DownloadCache::new(dir.path());

        assert!(!cache.is_cached("a", "1").await.unwrap());
        assert!(!cache.is_cached("b", "1").await.unwrap());
        assert!(cache.is_cached("a", "1").await.unwrap());
    }

    #[tokio::test]
    async fn test_existing_file_without_trailing_newline() {
        let dir = tempfile::tempdir().unwrap();
        let cache = DownloadCache::new(dir.path());
        tokio::fs::write(cache.file_path("group"), "1\n2").await.unwrap();

        assert!(cache.is_cached("group", "2").await.unwrap());
        assert!(!cache.is_cached("group", "3").await.unwrap());

        let content = tokio::fs::read_to_string(cache.file_path("group"))
            .await
            .unwrap();
        assert_eq!(content, "1\n2\n3\n");
    }

    #[tokio::test]
    async fn test_creates_missing_directory() {
        let dir = tempfile::tempdir().unwrap();
        let cache = DownloadCache::new(dir.path().join("nested").join("cache"));

        assert!(!cache.is_cached("group", "9").await.unwrap());
        assert!(cache.file_path("group").is_file());
    }

    #[tokio::test]
    async fn test_concurrent_claims_record_once() {
        let dir = tempfile::tempdir().unwrap();
        let cache = Arc::new(DownloadCache::new(dir.path()));

        let mut handles = Vec::new();
        for _ in 0..16 {
            let cache = Arc::clone(&cache);
            handles.push(tokio::spawn(async move {
                cache.is_cached("group", "42").await.unwrap()
            }));
        }

        let mut claimed = 0;
        for handle in handles {
            if !handle.await.unwrap() {
                claimed += 1;
            }
        }

        assert_eq!(claimed, 1);
        let content = tokio::fs::read_to_string(cache.file_path("group"))
            .await
            .unwrap();
        assert_eq!(content.lines().filter(|l| *l == "42").count(), 1);
    }
}
