//! Run orchestration: tokens, communities and the download fan-out.

use futures::stream::{self, StreamExt};
use rand::seq::SliceRandom;

use crate::api::{resolve_group, validate_tokens, ClientFactory};
use crate::cache::DownloadCache;
use crate::config::Config;
use crate::download::clip::{ClipDownloader, ClipOutcome};
use crate::download::listing::list_clips;
use crate::download::state::{AbortReason, CommunityReport, RunReport};
use crate::error::{Error, Result};
use crate::fs::CommunityPaths;
use crate::media::MediaEngine;
use crate::output::Reporter;

/// Drives one run over a set of tokens and community references.
///
/// Communities are processed on a pool of `min(#references, #valid tokens)`
/// concurrent workers; inside a community, clips are downloaded concurrently
/// up to `options.concurrent_downloads`.
pub struct Orchestrator<F, E> {
    factory: F,
    engine: E,
    config: Config,
    cache: DownloadCache,
    proxies: Vec<String>,
    reporter: Reporter,
}

impl<F: ClientFactory, E: MediaEngine> Orchestrator<F, E> {
    pub fn new(
        factory: F,
        engine: E,
        config: Config,
        proxies: Vec<String>,
        reporter: Reporter,
    ) -> Self {
        let cache = DownloadCache::new(config.options.cache_directory.clone());
        Self {
            factory,
            engine,
            config,
            cache,
            proxies,
            reporter,
        }
    }

    /// Validate the tokens, then download every community.
    ///
    /// Ends early, without downloading anything, when no token is valid or no
    /// reference was supplied.
    pub async fn run(&self, tokens: &[String], references: &[String]) -> RunReport {
        self.reporter
            .info(&format!("Checking {} token(s)...", tokens.len()));
        let valid_tokens = validate_tokens(&self.factory, tokens).await;

        if valid_tokens.is_empty() {
            self.reporter.error("No valid tokens.");
            return RunReport::aborted(AbortReason::NoValidTokens, 0);
        }

        if references.is_empty() {
            self.reporter.error("No community links.");
            return RunReport::aborted(AbortReason::NoCommunities, valid_tokens.len());
        }

        let workers = worker_count(references.len(), valid_tokens.len());
        self.reporter.info(&format!(
            "{} valid token(s), {} communities, {} worker(s)",
            valid_tokens.len(),
            references.len(),
            workers
        ));

        let communities: Vec<CommunityReport> = stream::iter(references)
            .map(|reference| self.process_community(&valid_tokens, reference))
            .buffer_unordered(workers)
            .collect()
            .await;

        RunReport {
            valid_tokens: valid_tokens.len(),
            workers,
            aborted: None,
            communities,
        }
    }

    /// Process one reference; failures are reported and kept in the result.
    async fn process_community(&self, tokens: &[String], reference: &str) -> CommunityReport {
        match self.try_process_community(tokens, reference).await {
            Ok(report) => report,
            Err(e) => {
                self.reporter
                    .error(&format!("Failed to process {}: {}", reference, e));
                CommunityReport::failed(reference, e.to_string())
            }
        }
    }

    async fn try_process_community(
        &self,
        tokens: &[String],
        reference: &str,
    ) -> Result<CommunityReport> {
        let token = tokens
            .choose(&mut rand::thread_rng())
            .ok_or_else(|| Error::Authentication("No valid token available".into()))?;
        let api = self.factory.create(token)?;

        let community = resolve_group(&api, reference).await?;
        self.reporter.info(&format!(
            "Processing {} (id {})",
            community.title, community.id
        ));

        let paths = CommunityPaths::new(&self.config, &community.title, community.id);
        paths.create().await?;

        let spinner = self.reporter.listing_spinner(&community.title);
        let urls = list_clips(
            &api,
            community.id,
            self.config.options.album_id,
            self.config.options.page_size,
            &spinner,
        )
        .await;
        spinner.finish_and_clear();

        if urls.is_empty() {
            self.reporter
                .warning(&format!("No clips found in {}", community.title));
        } else {
            self.reporter.info(&format!(
                "Found {} clips in {}",
                urls.len(),
                community.title
            ));
        }

        let downloader =
            ClipDownloader::new(&self.engine, &self.cache, &self.proxies, &self.reporter);
        let outcomes: Vec<ClipOutcome> = stream::iter(&urls)
            .map(|url| downloader.download(url, &paths.clips_dir, &paths.scope))
            .buffer_unordered(self.config.options.concurrent_downloads.max(1))
            .collect()
            .await;

        Ok(CommunityReport {
            reference: reference.to_string(),
            community: Some(community),
            error: None,
            outcomes,
        })
    }
}

/// Number of communities processed at once.
pub fn worker_count(references: usize, valid_tokens: usize) -> usize {
    references.min(valid_tokens)
}
