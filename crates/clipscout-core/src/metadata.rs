use std::sync::LazyLock;

use async_trait::async_trait;
use regex::Regex;
use tracing::debug;

use crate::{error::Result, platform::Platform, types::VideoMetadata};

// youtube.com/watch?v=ID
static WATCH_URL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[?&]v=([A-Za-z0-9_-]{11})").unwrap());

// youtu.be/ID
static SHORT_URL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"youtu\.be/([A-Za-z0-9_-]{11})").unwrap());

/// Duration reported for every video while metadata is simulated.
pub const SIMULATED_DURATION_SECS: u32 = 420;

const SIMULATED_TITLE: &str = "Untitled video";

/// Source of title, duration and thumbnail for a video URL.
#[async_trait]
pub trait MetadataProvider: Send + Sync {
    async fn fetch(&self, url: &str, platform: Platform) -> Result<VideoMetadata>;
}

/// Placeholder provider: fixed title and duration for every URL, no network
/// access. Only the YouTube thumbnail is derived from the URL itself.
pub struct SimulatedProvider;

#[async_trait]
impl MetadataProvider for SimulatedProvider {
    async fn fetch(&self, url: &str, platform: Platform) -> Result<VideoMetadata> {
        let thumbnail_url = match platform {
            Platform::YouTube => extract_youtube_id(url)
                .map(|id| format!("https://img.youtube.com/vi/{id}/maxresdefault.jpg")),
            _ => None,
        };

        debug!(%platform, thumbnail = thumbnail_url.is_some(), "simulated metadata");
        Ok(VideoMetadata {
            title: SIMULATED_TITLE.to_string(),
            duration_seconds: SIMULATED_DURATION_SECS,
            thumbnail_url,
        })
    }
}

/// Extract the 11-character video id from watch-page and short-link URLs.
pub fn extract_youtube_id(url: &str) -> Option<String> {
    if let Some(caps) = WATCH_URL_RE.captures(url) {
        return Some(caps[1].to_string());
    }

    if let Some(caps) = SHORT_URL_RE.captures(url) {
        return Some(caps[1].to_string());
    }

    None
}
