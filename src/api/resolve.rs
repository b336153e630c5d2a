//! Community reference resolution.

use crate::api::traits::VideoApi;
use crate::config::parse_group_reference;
use crate::error::{Error, Result};

/// A resolved community.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Community {
    /// Owner id for listing calls; negative for communities.
    pub id: i64,
    pub title: String,
}

/// Map a community link or handle to its owner id and title.
pub async fn resolve_group<A: VideoApi + ?Sized>(api: &A, reference: &str) -> Result<Community> {
    let handle = parse_group_reference(reference)?;
    tracing::debug!("Resolving '{}' as handle '{}'", reference, handle);

    let group = api
        .get_group(&handle)
        .await?
        .into_iter()
        .next()
        .ok_or_else(|| Error::GroupNotFound(reference.to_string()))?;

    Ok(Community {
        id: -group.id.abs(),
        title: group.name,
    })
}
