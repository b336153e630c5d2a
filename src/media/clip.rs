//! Clip identity derived from its playable URL.

use url::Url;

use crate::error::{Error, Result};

/// A short video discovered in a community listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Clip {
    /// Player URL handed to the media engine.
    pub playable_url: String,

    /// Numeric id taken from the URL's `id` query parameter.
    pub id: String,
}

impl Clip {
    /// Build a clip from a player URL such as
    /// `https://vk.com/video_ext.php?oid=-1&id=456239017&hash=...`.
    pub fn from_url(playable_url: &str) -> Result<Self> {
        let unsupported = || Error::UnsupportedClipUrl(playable_url.to_string());

        let url = Url::parse(playable_url).map_err(|_| unsupported())?;
        let id = url
            .query_pairs()
            .find(|(key, _)| key == "id")
            .map(|(_, value)| value.into_owned())
            .filter(|value| !value.is_empty() && value.chars().all(|c| c.is_ascii_digit()))
            .ok_or_else(unsupported)?;

        Ok(Self {
            playable_url: playable_url.to_string(),
            id,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_id() {
        let clip =
            Clip::from_url("https://vk.com/video_ext.php?oid=-12345&id=456239017&hash=abc")
                .unwrap();
        assert_eq!(clip.id, "456239017");
    }

    #[test]
    fn test_owner_id_is_not_mistaken_for_clip_id() {
        let clip = Clip::from_url("https://vk.com/video_ext.php?oid=777&id=5").unwrap();
        assert_eq!(clip.id, "5");
    }

    #[test]
    fn test_unsupported_urls() {
        for url in [
            "https://vk.com/video_ext.php?oid=-1&hash=abc",
            "https://vk.com/video_ext.php?oid=-1&id=abc",
            "https://vk.com/video_ext.php?id=",
            "not a url",
        ] {
            assert!(
                matches!(Clip::from_url(url), Err(Error::UnsupportedClipUrl(_))),
                "{} should be rejected",
                url
            );
        }
    }
}
