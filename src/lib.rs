//! VK Clips Downloader - bulk download of VK community clips.
//!
//! This library provides functionality for downloading every clip of a set
//! of VK communities through yt-dlp.
//!
//! # Features
//!
//! - Concurrent access token validation
//! - Community link resolution
//! - Paginated clip listing with deduplication
//! - Per-community download cache and on-disk skip
//! - Concurrent downloads, optionally through random HTTP proxies
//!
//! # Example
//!
//! ```no_run
//! use vk_clips_downloader::{
//!     api::VkClientFactory, config::read_lines, media::YtDlp, output::Reporter, Config,
//!     Orchestrator,
//! };
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = Config::default();
//!     let tokens = read_lines(&config.input.tokens_file).await?;
//!     let groups = read_lines(&config.input.groups_file).await?;
//!
//!     let orchestrator = Orchestrator::new(
//!         VkClientFactory::new(config.api.clone()),
//!         YtDlp::new(&config.media),
//!         config,
//!         Vec::new(),
//!         Reporter::new(true, true),
//!     );
//!     let report = orchestrator.run(&tokens, &groups).await;
//!     println!("{} clips downloaded", report.downloaded_count());
//!     Ok(())
//! }
//! ```

pub mod api;
pub mod cache;
pub mod cli;
pub mod config;
pub mod download;
pub mod error;
pub mod fs;
pub mod media;
pub mod output;

// Re-exports for convenience
pub use api::{Community, VkApi};
pub use cache::DownloadCache;
pub use config::Config;
pub use download::{ClipOutcome, Orchestrator, RunReport};
pub use error::{Error, Result};
pub use media::{Clip, YtDlp};
