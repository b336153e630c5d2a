//! Single clip downloading.

use std::path::{Path, PathBuf};

use rand::seq::SliceRandom;

use crate::cache::DownloadCache;
use crate::error::Result;
use crate::fs::clip_filename;
use crate::media::{Clip, MediaEngine};
use crate::output::Reporter;

/// Why a clip was not downloaded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SkipReason {
    /// The id was already claimed in the community's cache.
    Cached,
    /// The target file is already on disk.
    FileExists(PathBuf),
}

/// Result of one clip download attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClipOutcome {
    Downloaded(PathBuf),
    Skipped(SkipReason),
    Failed(String),
}

/// Downloads clips of one run through a media engine.
pub struct ClipDownloader<'a, E: ?Sized> {
    engine: &'a E,
    cache: &'a DownloadCache,
    proxies: &'a [String],
    reporter: &'a Reporter,
}

impl<'a, E: MediaEngine + ?Sized> ClipDownloader<'a, E> {
    pub fn new(
        engine: &'a E,
        cache: &'a DownloadCache,
        proxies: &'a [String],
        reporter: &'a Reporter,
    ) -> Self {
        Self {
            engine,
            cache,
            proxies,
            reporter,
        }
    }

    /// Download one clip into `target_dir`, recording it under `scope`.
    ///
    /// Never fails: every error is reported and returned as
    /// [`ClipOutcome::Failed`].
    pub async fn download(&self, url: &str, target_dir: &Path, scope: &str) -> ClipOutcome {
        let outcome = match self.try_download(url, target_dir, scope).await {
            Ok(outcome) => outcome,
            Err(e) => ClipOutcome::Failed(e.to_string()),
        };

        self.reporter.clip_outcome(url, &outcome);
        outcome
    }

    async fn try_download(&self, url: &str, target_dir: &Path, scope: &str) -> Result<ClipOutcome> {
        let clip = Clip::from_url(url)?;

        if self.cache.is_cached(scope, &clip.id).await? {
            tracing::debug!("Clip {} already claimed in '{}'", clip.id, scope);
            return Ok(ClipOutcome::Skipped(SkipReason::Cached));
        }

        let proxy = self.pick_proxy();
        let metadata = self.engine.probe(&clip.playable_url, proxy).await?;
        let output_path = target_dir.join(clip_filename(&metadata.title, &clip.id));

        if tokio::fs::try_exists(&output_path).await? {
            return Ok(ClipOutcome::Skipped(SkipReason::FileExists(output_path)));
        }

        self.engine
            .download(&clip.playable_url, &output_path, proxy)
            .await?;

        Ok(ClipOutcome::Downloaded(output_path))
    }

    /// Uniformly random proxy from the pool, if any.
    fn pick_proxy(&self) -> Option<&'a str> {
        self.proxies
            .choose(&mut rand::thread_rng())
            .map(String::as_str)
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::error::Error;
    use crate::media::ClipMetadata;
    use async_trait::async_trait;
    use std::sync::Mutex;

    /// Media engine double that writes a small file instead of fetching.
    #[derive(Default)]
    pub(crate) struct FakeEngine {
        pub probes: Mutex<Vec<(String, Option<String>)>>,
        pub downloads: Mutex<Vec<PathBuf>>,
        pub fail_downloads: bool,
    }

    impl FakeEngine {
        pub fn download_count(&self) -> usize {
            self.downloads.lock().unwrap().len()
        }
    }

    #[async_trait]
    impl MediaEngine for FakeEngine {
        async fn probe(&self, url: &str, proxy: Option<&str>) -> Result<ClipMetadata> {
            self.probes
                .lock()
                .unwrap()
                .push((url.to_string(), proxy.map(String::from)));
            let id = Clip::from_url(url)?.id;
            Ok(ClipMetadata {
                title: format!("Clip: {}", id),
            })
        }

        async fn download(&self, _url: &str, output: &Path, _proxy: Option<&str>) -> Result<()> {
            if self.fail_downloads {
                return Err(Error::Engine("ERROR: Unable to extract video".into()));
            }
            tokio::fs::write(output, b"mp4").await?;
            self.downloads.lock().unwrap().push(output.to_path_buf());
            Ok(())
        }
    }

    fn url(id: u32) -> String {
        format!("https://vk.com/video_ext.php?oid=-1&id={}&hash=x", id)
    }

    #[tokio::test]
    async fn test_downloads_then_skips_cached() {
        let dir = tempfile::tempdir().unwrap();
        let cache = DownloadCache::new(dir.path().join("cache"));
        let engine = FakeEngine::default();
        let reporter = Reporter::hidden();
        let downloader = ClipDownloader::new(&engine, &cache, &[], &reporter);

        let first = downloader.download(&url(7), dir.path(), "group").await;
        assert_eq!(
            first,
            ClipOutcome::Downloaded(dir.path().join("Clip_ 7_7.mp4"))
        );

        let second = downloader.download(&url(7), dir.path(), "group").await;
        assert_eq!(second, ClipOutcome::Skipped(SkipReason::Cached));
        assert_eq!(engine.download_count(), 1);
        assert_eq!(engine.probes.lock().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_existing_file_skips_download_even_if_not_cached() {
        let dir = tempfile::tempdir().unwrap();
        let cache = DownloadCache::new(dir.path().join("cache"));
        let engine = FakeEngine::default();
        let reporter = Reporter::hidden();
        let downloader = ClipDownloader::new(&engine, &cache, &[], &reporter);

        let existing = dir.path().join("Clip_ 9_9.mp4");
        tokio::fs::write(&existing, b"old").await.unwrap();

        let outcome = downloader.download(&url(9), dir.path(), "group").await;
        assert_eq!(outcome, ClipOutcome::Skipped(SkipReason::FileExists(existing)));
        assert_eq!(engine.download_count(), 0);
    }

    #[tokio::test]
    async fn test_unsupported_url_fails_without_io() {
        let dir = tempfile::tempdir().unwrap();
        let cache = DownloadCache::new(dir.path().join("cache"));
        let engine = FakeEngine::default();
        let reporter = Reporter::hidden();
        let downloader = ClipDownloader::new(&engine, &cache, &[], &reporter);

        let outcome = downloader
            .download("https://vk.com/video_ext.php?oid=-1", dir.path(), "group")
            .await;
        assert!(matches!(outcome, ClipOutcome::Failed(reason) if reason.contains("Unsupported")));
        assert!(engine.probes.lock().unwrap().is_empty());
        assert!(!cache.file_path("group").exists());
    }

    #[tokio::test]
    async fn test_engine_failure_is_captured() {
        let dir = tempfile::tempdir().unwrap();
        let cache = DownloadCache::new(dir.path().join("cache"));
        let engine = FakeEngine {
            fail_downloads: true,
            ..Default::default()
        };
        let reporter = Reporter::hidden();
        let downloader = ClipDownloader::new(&engine, &cache, &[], &reporter);

        let outcome = downloader.download(&url(3), dir.path(), "group").await;
        assert!(matches!(outcome, ClipOutcome::Failed(reason) if reason.contains("Unable to extract")));
    }

    #[tokio::test]
    async fn test_proxy_taken_from_pool() {
        let dir = tempfile::tempdir().unwrap();
        let cache = DownloadCache::new(dir.path().join("cache"));
        let engine = FakeEngine::default();
        let reporter = Reporter::hidden();
        let proxies = vec!["http://u:p@1.2.3.4:8080".to_string()];
        let downloader = ClipDownloader::new(&engine, &cache, &proxies, &reporter);

        downloader.download(&url(1), dir.path(), "group").await;
        let probes = engine.probes.lock().unwrap();
        assert_eq!(probes[0].1.as_deref(), Some("http://u:p@1.2.3.4:8080"));
    }
}
