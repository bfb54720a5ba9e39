use tracing::debug;

use crate::{
    error::{ClipscoutError, Result},
    heuristics::suggest_clips,
    metadata::MetadataProvider,
    platform::{Platform, classify},
    types::AnalysisResult,
};

/// Run the full analysis for a single video URL: validate, classify the
/// platform, fetch (simulated) metadata and score clip windows.
pub async fn analyze_url(url: &str, provider: &dyn MetadataProvider) -> Result<AnalysisResult> {
    let url = url.trim();
    if url.is_empty() {
        return Err(ClipscoutError::MissingUrl);
    }

    let platform = classify(url);
    if platform == Platform::Unknown {
        return Err(ClipscoutError::UnsupportedPlatform {
            url: url.to_string(),
        });
    }

    let metadata = provider.fetch(url, platform).await?;
    let clips = suggest_clips(metadata.duration_seconds);
    debug!(
        %platform,
        duration = metadata.duration_seconds,
        clips = clips.len(),
        "analysis complete"
    );

    Ok(AnalysisResult {
        video_url: url.to_string(),
        platform,
        title: metadata.title,
        duration: metadata.duration_seconds,
        clips,
        thumbnail_url: metadata.thumbnail_url,
    })
}
