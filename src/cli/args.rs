//! Command-line argument definitions using clap.

use clap::Parser;
use std::path::PathBuf;

use crate::config::Config;

/// VK community clips downloader CLI.
#[derive(Parser, Debug)]
#[command(
    name = "vk-clips-downloader",
    version,
    about = "Download every clip of VK communities",
    long_about = "Validates VK access tokens, resolves community links and downloads every clip \
                  of each community with yt-dlp.\n\n\
                  Already downloaded clips are remembered in a per-community cache file."
)]
pub struct Args {
    /// File with one access token per line.
    #[arg(short, long, env = "VK_TOKENS_FILE")]
    pub tokens: Option<PathBuf>,

    /// File with one community link or handle per line.
    #[arg(short, long, env = "VK_GROUPS_FILE")]
    pub groups: Option<PathBuf>,

    /// File with proxies in ip:port:username:password format.
    #[arg(short, long, env = "VK_PROXIES_FILE")]
    pub proxies: Option<PathBuf>,

    /// Base directory for downloaded clips.
    #[arg(short = 'd', long = "directory")]
    pub download_directory: Option<PathBuf>,

    /// Directory for the per-community cache files.
    #[arg(long = "cache-dir")]
    pub cache_directory: Option<PathBuf>,

    /// Path to configuration file.
    #[arg(short, long, default_value = "config.toml")]
    pub config: PathBuf,

    /// Maximum simultaneous downloads per community.
    #[arg(long)]
    pub concurrency: Option<usize>,

    /// Videos requested per listing page (1-200).
    #[arg(long)]
    pub page_size: Option<u32>,

    /// Path or name of the yt-dlp binary.
    #[arg(long = "yt-dlp", env = "YT_DLP")]
    pub yt_dlp: Option<String>,

    /// Hide per-clip progress information.
    #[arg(long, short)]
    pub quiet: bool,

    /// Enable debug logging.
    #[arg(long)]
    pub debug: bool,
}

impl Args {
    /// Merge CLI arguments into an existing config, overriding where specified.
    pub fn merge_into_config(&self, config: &mut Config) {
        if let Some(tokens) = &self.tokens {
            config.input.tokens_file = tokens.clone();
        }

        if let Some(groups) = &self.groups {
            config.input.groups_file = groups.clone();
        }

        if let Some(proxies) = &self.proxies {
            config.input.proxies_file = Some(proxies.clone());
        }

        if let Some(dir) = &self.download_directory {
            config.options.download_directory = dir.clone();
        }

        if let Some(dir) = &self.cache_directory {
            config.options.cache_directory = dir.clone();
        }

        if let Some(concurrency) = self.concurrency {
            config.options.concurrent_downloads = concurrency;
        }

        if let Some(page_size) = self.page_size {
            config.options.page_size = page_size;
        }

        if let Some(program) = &self.yt_dlp {
            config.media.program = program.clone();
        }

        if self.quiet {
            config.options.show_downloads = false;
            config.options.show_skipped_downloads = false;
        }
    }
}
