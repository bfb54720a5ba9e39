use crate::types::AnalysisResult;

/// Format seconds as MM:SS timestamp
pub fn format_timestamp(seconds: u32) -> String {
    format!("{:02}:{:02}", seconds / 60, seconds % 60)
}

/// Format an analysis result as human-readable markdown
pub fn format_analysis_readable(result: &AnalysisResult) -> String {
    let mut output = String::new();

    // Title
    output.push_str(&format!("# {}\n\n", result.title));

    // Meta info
    output.push_str(&format!(
        "**Platform:** {} | **Duration:** {}\n\n",
        result.platform,
        format_timestamp(result.duration)
    ));
    if let Some(thumb) = &result.thumbnail_url {
        output.push_str(&format!("**Thumbnail:** {}\n\n", thumb));
    }

    // Clips
    output.push_str("## Suggested Clips\n\n");
    if result.clips.is_empty() {
        output.push_str("No clips suggested for a video this short.\n");
        return output;
    }

    for (i, clip) in result.clips.iter().enumerate() {
        let start = format_timestamp(clip.start_time);
        let end = format_timestamp(clip.end_time);
        output.push_str(&format!(
            "### {}. [{}–{}] score {}\n\n",
            i + 1,
            start,
            end,
            clip.score
        ));
        output.push_str(&format!("{}\n\n", clip.reason));
        output.push_str(&format!("Keywords: {}\n\n", clip.keywords.join(", ")));
    }

    output
}
