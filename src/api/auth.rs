//! Access token validation.

use futures::future::join_all;

use crate::api::traits::{ClientFactory, VideoApi};
use crate::error::Result;

/// Number of leading characters of a token kept in log lines.
const VISIBLE_TOKEN_CHARS: usize = 8;

/// Shorten a token for diagnostics.
pub fn mask_token(token: &str) -> String {
    let visible: String = token.chars().take(VISIBLE_TOKEN_CHARS).collect();
    if visible.len() == token.len() {
        visible
    } else {
        format!("{}...", visible)
    }
}

/// Probe a single token with an authenticated call.
pub async fn validate_token<F: ClientFactory>(factory: &F, token: &str) -> Result<()> {
    let client = factory.create(token)?;
    client.account_info().await?;
    Ok(())
}

/// Probe every token concurrently and keep the ones that authenticate.
///
/// Rejected tokens are logged and dropped; an empty result is returned as is.
pub async fn validate_tokens<F: ClientFactory>(factory: &F, tokens: &[String]) -> Vec<String> {
    let checks = tokens
        .iter()
        .filter(|token| !token.trim().is_empty())
        .map(|token| async move {
            match validate_token(factory, token).await {
                Ok(()) => {
                    tracing::debug!("Token {} is valid", mask_token(token));
                    Some(token.clone())
                }
                Err(e) => {
                    tracing::warn!("Token {} rejected: {}", mask_token(token), e);
                    None
                }
            }
        });

    join_all(checks).await.into_iter().flatten().collect()
}
