//! Configuration structures and loading logic.

use crate::error::{Error, Result};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

/// Main configuration structure.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub input: InputConfig,

    #[serde(default)]
    pub api: ApiConfig,

    #[serde(default)]
    pub options: OptionsConfig,

    #[serde(default)]
    pub media: MediaConfig,
}

/// Locations of the plain-text input lists.
#[derive(Debug, Clone, Deserialize)]
pub struct InputConfig {
    /// File with one access token per line.
    #[serde(default = "default_tokens_file")]
    pub tokens_file: PathBuf,

    /// File with one community link or handle per line.
    #[serde(default = "default_groups_file")]
    pub groups_file: PathBuf,

    /// Optional file with one `ip:port:username:password` proxy per line.
    #[serde(default)]
    pub proxies_file: Option<PathBuf>,
}

impl Default for InputConfig {
    fn default() -> Self {
        Self {
            tokens_file: default_tokens_file(),
            groups_file: default_groups_file(),
            proxies_file: None,
        }
    }
}

/// VK API connection settings.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiConfig {
    /// Method endpoint root, e.g. `https://api.vk.com/method`.
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// API version sent as the `v` parameter.
    #[serde(default = "default_api_version")]
    pub version: String,

    /// User agent for API requests.
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            version: default_api_version(),
            user_agent: default_user_agent(),
        }
    }
}

/// Download options configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct OptionsConfig {
    /// Base directory for downloaded clips.
    #[serde(default = "default_download_directory")]
    pub download_directory: PathBuf,

    /// Directory holding the per-community cache files.
    #[serde(default = "default_cache_directory")]
    pub cache_directory: PathBuf,

    /// Number of videos requested per listing page.
    #[serde(default = "default_page_size")]
    pub page_size: u32,

    /// Album listed for every community.
    #[serde(default = "default_album_id")]
    pub album_id: i64,

    /// Maximum simultaneous clip downloads inside one community.
    #[serde(default = "default_concurrent_downloads")]
    pub concurrent_downloads: usize,

    /// Whether to show download progress.
    #[serde(default = "default_true")]
    pub show_downloads: bool,

    /// Whether to show skipped downloads.
    #[serde(default = "default_true")]
    pub show_skipped_downloads: bool,
}

impl Default for OptionsConfig {
    fn default() -> Self {
        Self {
            download_directory: default_download_directory(),
            cache_directory: default_cache_directory(),
            page_size: default_page_size(),
            album_id: default_album_id(),
            concurrent_downloads: default_concurrent_downloads(),
            show_downloads: true,
            show_skipped_downloads: true,
        }
    }
}

/// External media engine settings.
#[derive(Debug, Clone, Deserialize)]
pub struct MediaConfig {
    /// Program name or path of the yt-dlp binary.
    #[serde(default = "default_program")]
    pub program: String,

    /// yt-dlp format selector.
    #[serde(default = "default_format")]
    pub format: String,

    /// Whether yt-dlp should verify TLS certificates.
    #[serde(default)]
    pub check_certificates: bool,
}

impl Default for MediaConfig {
    fn default() -> Self {
        Self {
            program: default_program(),
            format: default_format(),
            check_certificates: false,
        }
    }
}

fn default_tokens_file() -> PathBuf {
    PathBuf::from("tokens.txt")
}

fn default_groups_file() -> PathBuf {
    PathBuf::from("groups.txt")
}

fn default_base_url() -> String {
    "https://api.vk.com/method".to_string()
}

fn default_api_version() -> String {
    "5.131".to_string()
}

fn default_user_agent() -> String {
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36".to_string()
}

fn default_download_directory() -> PathBuf {
    PathBuf::from("clips")
}

fn default_cache_directory() -> PathBuf {
    PathBuf::from("cache")
}

fn default_page_size() -> u32 {
    200
}

fn default_album_id() -> i64 {
    -6
}

fn default_concurrent_downloads() -> usize {
    16
}

fn default_program() -> String {
    "yt-dlp".to_string()
}

fn default_format() -> String {
    "bestvideo[ext=mp4]+bestaudio[ext=m4a]/best[ext=mp4]".to_string()
}

fn default_true() -> bool {
    true
}

impl Config {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                Error::Config(format!("Configuration file not found: {}", path.display()))
            } else {
                Error::Io(e)
            }
        })?;

        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }
}
