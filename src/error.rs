//! Error types for the vk-clips-downloader application.

use thiserror::Error;

/// Main error type for the application.
#[derive(Error, Debug)]
pub enum Error {
    // Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Invalid configuration value for '{field}': {message}")]
    ConfigValidation { field: String, message: String },

    #[error("Input file not found: {0}")]
    MissingInput(String),

    #[error("Invalid proxy line (expected ip:port:username:password): {0}")]
    InvalidProxy(String),

    // API errors
    #[error("VK API error {code}: {message}")]
    Api { code: i64, message: String },

    #[error("Authentication failed: {0}")]
    Authentication(String),

    #[error("Unexpected API response: {0}")]
    UnexpectedResponse(String),

    // Resolution errors
    #[error("Cannot extract a group handle from '{0}'")]
    InvalidGroupReference(String),

    #[error("Group not found: {0}")]
    GroupNotFound(String),

    // Download errors
    #[error("Unsupported clip URL (no numeric id parameter): {0}")]
    UnsupportedClipUrl(String),

    #[error("Media engine error: {0}")]
    Engine(String),

    #[error("Media engine '{0}' not found. Please install yt-dlp and ensure it's in your PATH.")]
    EngineNotFound(String),

    // IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // HTTP errors
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    // Serialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    // URL parsing errors
    #[error("Invalid URL: {0}")]
    UrlParse(#[from] url::ParseError),
}

/// Result type alias using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Process exit codes.
pub mod exit_codes {
    pub const SUCCESS: i32 = 0;
    pub const API_ERROR: i32 = 2;
    pub const CONFIG_ERROR: i32 = 3;
    pub const DOWNLOAD_ERROR: i32 = 4;
    pub const UNEXPECTED_ERROR: i32 = 5;
}
