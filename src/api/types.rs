//! API response type definitions.

use serde::Deserialize;

/// Generic VK API response wrapper.
///
/// Exactly one of `response` or `error` is present.
#[derive(Debug, Deserialize)]
pub struct ApiEnvelope<T> {
    pub response: Option<T>,
    pub error: Option<ApiErrorBody>,
}

/// Error object returned instead of a response.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiErrorBody {
    pub error_code: i64,
    pub error_msg: String,
}

/// Error codes that mean the token itself is unusable.
pub const AUTH_ERROR_CODES: [i64; 2] = [5, 1116];

/// Answer of `account.getInfo`.
///
/// Only the fact that the call succeeded matters; the settings are ignored.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AccountInfo {}

/// Community description from `groups.getById`.
#[derive(Debug, Clone, Deserialize)]
pub struct GroupInfo {
    pub id: i64,
    pub name: String,
}

/// `groups.getById` answers with a bare array on older API versions
/// and with `{"groups": [...]}` on newer ones.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum GroupsResponse {
    List(Vec<GroupInfo>),
    Wrapped { groups: Vec<GroupInfo> },
}

impl GroupsResponse {
    pub fn into_groups(self) -> Vec<GroupInfo> {
        match self {
            GroupsResponse::List(groups) => groups,
            GroupsResponse::Wrapped { groups } => groups,
        }
    }
}

/// One page of `video.get`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct VideoPage {
    /// Total number of videos in the album, as reported by the server.
    #[serde(default)]
    pub count: u64,
    #[serde(default)]
    pub items: Vec<VideoItem>,
}

/// Video entry inside a listing page.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct VideoItem {
    /// Embeddable player URL the media engine can resolve.
    #[serde(default)]
    pub player: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_groups_legacy_shape() {
        let json = r#"{"response":[{"id":1,"name":"VK API","screen_name":"apiclub"}]}"#;
        let envelope: ApiEnvelope<GroupsResponse> = serde_json::from_str(json).unwrap();
        let groups = envelope.response.unwrap().into_groups();
        assert_eq!(groups.len(), 1);
        assert_eq!(groups[0].name, "VK API");
    }

    #[test]
    fn test_groups_wrapped_shape() {
        let json = r#"{"response":{"groups":[{"id":7,"name":"Seven"}],"profiles":[]}}"#;
        let envelope: ApiEnvelope<GroupsResponse> = serde_json::from_str(json).unwrap();
        let groups = envelope.response.unwrap().into_groups();
        assert_eq!(groups[0].id, 7);
        assert_eq!(groups[0].name, "Seven");
    }

    #[test]
    fn test_account_info_ignores_settings() {
        let json = r#"{"response":{"country":"RU","lang":0,"https_required":1}}"#;
        let envelope: ApiEnvelope<AccountInfo> = serde_json::from_str(json).unwrap();
        assert!(envelope.response.is_some());
    }

    #[test]
    fn test_error_envelope() {
        let json = r#"{"error":{"error_code":5,"error_msg":"User authorization failed","request_params":[]}}"#;
        let envelope: ApiEnvelope<AccountInfo> = serde_json::from_str(json).unwrap();
        assert!(envelope.response.is_none());
        let error = envelope.error.unwrap();
        assert_eq!(error.error_code, 5);
        assert!(AUTH_ERROR_CODES.contains(&error.error_code));
    }

    #[test]
    fn test_video_page_without_player() {
        let json = r#"{"response":{"count":2,"items":[
            {"id":10,"owner_id":-1,"title":"a","player":"https://vk.com/video_ext.php?oid=-1&id=10"},
            {"id":11,"owner_id":-1,"title":"b"}
        ]}}"#;
        let envelope: ApiEnvelope<VideoPage> = serde_json::from_str(json).unwrap();
        let page = envelope.response.unwrap();
        assert_eq!(page.count, 2);
        assert!(page.items[0].player.is_some());
        assert!(page.items[1].player.is_none());
    }
}
