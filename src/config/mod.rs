//! Configuration module for the vk-clips-downloader.
//!
//! This module handles:
//! - Loading configuration from TOML files
//! - Reading the token, community and proxy lists
//! - Configuration validation and community reference parsing

pub mod inputs;
pub mod loader;
pub mod validation;

pub use inputs::{parse_proxy_line, read_lines, read_proxies};
pub use loader::{ApiConfig, Config, InputConfig, MediaConfig, OptionsConfig};
pub use validation::{parse_group_reference, validate_config, GroupHandle};
