//! Community clip listing.

use std::collections::HashSet;

use indicatif::ProgressBar;

use crate::api::VideoApi;

/// Page through an owner's album and collect unique player URLs.
///
/// Stops at the first page with no items. A failed request ends the listing
/// early and the URLs gathered so far are returned.
pub async fn list_clips<A: VideoApi + ?Sized>(
    api: &A,
    owner_id: i64,
    album_id: i64,
    page_size: u32,
    progress: &ProgressBar,
) -> Vec<String> {
    let mut urls = Vec::new();
    let mut seen = HashSet::new();
    let mut offset: u32 = 0;
    let mut reported: Option<u64> = None;

    loop {
        progress.set_position(urls.len() as u64);

        let page = match api.get_videos(owner_id, album_id, offset, page_size).await {
            Ok(page) => page,
            Err(e) => {
                tracing::error!(
                    "Listing of owner {} stopped at offset {}: {}",
                    owner_id,
                    offset,
                    e
                );
                break;
            }
        };

        if page.items.is_empty() {
            break;
        }

        if reported.is_none() {
            tracing::debug!("Owner {} reports {} videos", owner_id, page.count);
            reported = Some(page.count);
        }

        for url in page.items.into_iter().filter_map(|item| item.player) {
            if seen.insert(url.clone()) {
                urls.push(url);
            }
        }

        offset = match offset.checked_add(page_size) {
            Some(next) => next,
            None => break,
        };
    }

    progress.set_position(urls.len() as u64);
    match reported {
        Some(total) if (urls.len() as u64) < total => tracing::info!(
            "Listed {} of {} videos reported for owner {}",
            urls.len(),
            total,
            owner_id
        ),
        _ => tracing::debug!("Listed {} clips for owner {}", urls.len(), owner_id),
    }
    urls
}
