//! Seams between the orchestration code and the remote API.

use async_trait::async_trait;

use crate::api::types::{AccountInfo, GroupInfo, VideoPage};
use crate::config::GroupHandle;
use crate::error::Result;

/// Remote operations needed to enumerate a community's clips.
#[async_trait]
pub trait VideoApi: Send + Sync {
    /// Lightweight "who am I" call used to check a token.
    async fn account_info(&self) -> Result<AccountInfo>;

    /// Look up a community by id or short name.
    async fn get_group(&self, handle: &GroupHandle) -> Result<Vec<GroupInfo>>;

    /// Fetch one page of an owner's videos.
    async fn get_videos(
        &self,
        owner_id: i64,
        album_id: i64,
        offset: u32,
        count: u32,
    ) -> Result<VideoPage>;
}

/// Creates one authenticated client per access token.
pub trait ClientFactory: Send + Sync {
    type Client: VideoApi;

    fn create(&self, token: &str) -> Result<Self::Client>;
}
