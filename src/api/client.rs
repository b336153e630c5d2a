//! VK API HTTP client.

use async_trait::async_trait;
use reqwest::Client;
use serde::de::DeserializeOwned;

use crate::api::traits::{ClientFactory, VideoApi};
use crate::api::types::*;
use crate::config::{ApiConfig, GroupHandle};
use crate::error::{Error, Result};

/// Maximum response excerpt kept in parse error messages.
const ERROR_EXCERPT_CHARS: usize = 500;

/// VK API client bound to a single access token.
pub struct VkApi {
    client: Client,
    token: String,
    base_url: String,
    version: String,
}

impl VkApi {
    /// Create a new API client for one token.
    pub fn new(token: String, config: &ApiConfig) -> Result<Self> {
        let client = Client::builder()
            .user_agent(&config.user_agent)
            .build()
            .map_err(|e| Error::Config(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self {
            client,
            token,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            version: config.version.clone(),
        })
    }

    /// Call an API method and unwrap its response envelope.
    async fn call<T: DeserializeOwned>(&self, method: &str, params: &[(&str, String)]) -> Result<T> {
        let url = format!("{}/{}", self.base_url, method);

        // The query string carries the token: neither log lines nor errors
        // may include the full request URL
        tracing::debug!("GET {} {:?}", url, params);

        let response = self
            .client
            .get(&url)
            .query(params)
            .query(&[("access_token", &self.token), ("v", &self.version)])
            .send()
            .await
            .map_err(|e| Error::Http(e.without_url()))?;

        let status = response.status();
        tracing::debug!("Response status: {}", status);

        if status == 401 || status == 403 {
            let body = response.text().await.unwrap_or_default();
            return Err(Error::Authentication(format!(
                "HTTP {}: {}",
                status,
                if body.is_empty() {
                    "Authentication failed"
                } else {
                    &body
                }
            )));
        }

        if !status.is_success() {
            return Err(Error::UnexpectedResponse(format!(
                "{} returned HTTP {}",
                method, status
            )));
        }

        let text = response
            .text()
            .await
            .map_err(|e| Error::Http(e.without_url()))?;
        parse_envelope(method, &text)
    }
}

/// Decode a raw response body into the method result or an API error.
pub(crate) fn parse_envelope<T: DeserializeOwned>(method: &str, text: &str) -> Result<T> {
    let envelope: ApiEnvelope<T> = serde_json::from_str(text).map_err(|e| {
        Error::UnexpectedResponse(format!(
            "Failed to parse {} response: {} - Response: {}",
            method,
            e,
            text.chars().take(ERROR_EXCERPT_CHARS).collect::<String>()
        ))
    })?;

    if let Some(error) = envelope.error {
        if AUTH_ERROR_CODES.contains(&error.error_code) {
            return Err(Error::Authentication(error.error_msg));
        }
        return Err(Error::Api {
            code: error.error_code,
            message: error.error_msg,
        });
    }

    envelope
        .response
        .ok_or_else(|| Error::UnexpectedResponse(format!("{} returned no response", method)))
}

#[async_trait]
impl VideoApi for VkApi {
    async fn account_info(&self) -> Result<AccountInfo> {
        self.call("account.getInfo", &[]).await
    }

    async fn get_group(&self, handle: &GroupHandle) -> Result<Vec<GroupInfo>> {
        let response: GroupsResponse = self
            .call(
                "groups.getById",
                &[("group_id", handle.to_string()), ("fields", "id".to_string())],
            )
            .await?;
        Ok(response.into_groups())
    }

    async fn get_videos(
        &self,
        owner_id: i64,
        album_id: i64,
        offset: u32,
        count: u32,
    ) -> Result<VideoPage> {
        self.call(
            "video.get",
            &[
                ("owner_id", owner_id.to_string()),
                ("album_id", album_id.to_string()),
                ("offset", offset.to_string()),
                ("count", count.to_string()),
            ],
        )
        .await
    }
}

/// Builds [`VkApi`] clients that share one API configuration.
#[derive(Debug, Clone)]
pub struct VkClientFactory {
    config: ApiConfig,
}

impl VkClientFactory {
    pub fn new(config: ApiConfig) -> Self {
        Self { config }
    }
}

impl ClientFactory for VkClientFactory {
    type Client = VkApi;

    fn create(&self, token: &str) -> Result<VkApi> {
        VkApi::new(token.to_string(), &self.config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_envelope_response() {
        let page: VideoPage =
            parse_envelope("video.get", r#"{"response":{"count":0,"items":[]}}"#).unwrap();
        assert!(page.items.is_empty());
    }

    #[test]
    fn test_parse_envelope_auth_error() {
        let err = parse_envelope::<AccountInfo>(
            "account.getInfo",
            r#"{"error":{"error_code":5,"error_msg":"invalid access_token"}}"#,
        )
        .unwrap_err();
        assert!(matches!(err, Error::Authentication(_)));
    }

    #[test]
    fn test_parse_envelope_api_error() {
        let err = parse_envelope::<VideoPage>(
            "video.get",
            r#"{"error":{"error_code":15,"error_msg":"Access denied"}}"#,
        )
        .unwrap_err();
        assert!(matches!(err, Error::Api { code: 15, .. }));
    }

    #[tokio::test]
    async fn test_transport_error_hides_token() {
        let config = ApiConfig {
            base_url: "http://127.0.0.1:1/method".to_string(),
            ..ApiConfig::default()
        };
        let api = VkApi::new("SECRETTOKEN123456789".to_string(), &config).unwrap();

        let err = api.account_info().await.unwrap_err();
        assert!(matches!(err, Error::Http(_)));
        let message = err.to_string();
        assert!(!message.contains("SECRETTOKEN123456789"));
        assert!(!message.contains("access_token"));
    }

    #[test]
    fn test_parse_envelope_garbage() {
        let err = parse_envelope::<VideoPage>("video.get", "<html>").unwrap_err();
        assert!(matches!(err, Error::UnexpectedResponse(_)));
    }
}
