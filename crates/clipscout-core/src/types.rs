use serde::{Deserialize, Serialize};

use crate::platform::Platform;

/// One proposed shareable excerpt of the source video.
///
/// Times are whole seconds from the start of the video. `duration` is always
/// `end_time - start_time`; `score` stays within 0..=100.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClipSuggestion {
    pub start_time: u32,
    pub end_time: u32,
    pub duration: u32,
    pub score: u8,
    pub reason: String,
    pub keywords: Vec<String>,
}

/// Full analysis for one video URL, as returned to the UI.
/// Clips are ordered by descending score, at most five of them.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisResult {
    pub video_url: String,
    pub platform: Platform,
    pub title: String,
    pub duration: u32,
    pub clips: Vec<ClipSuggestion>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub thumbnail_url: Option<String>,
}

/// What a metadata provider knows about a video.
#[derive(Debug, Clone)]
pub struct VideoMetadata {
    pub title: String,
    pub duration_seconds: u32,
    pub thumbnail_url: Option<String>,
}
