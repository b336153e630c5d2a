//! VK API module.
//!
//! This module provides:
//! - HTTP client for the VK method API
//! - Access token validation
//! - Community reference resolution
//! - API response types
//! - Traits the download pipeline is written against

pub mod auth;
pub mod client;
pub mod resolve;
pub mod traits;
pub mod types;

pub use auth::{mask_token, validate_tokens};
pub use client::{VkApi, VkClientFactory};
pub use resolve::{resolve_group, Community};
pub use traits::{ClientFactory, VideoApi};
pub use types::*;
