//! Duration-gated heuristic rules for picking shareable clip windows.
//!
//! The rules look at a single integer (total duration in seconds) and nothing
//! else. No frame or audio content is inspected; scores, reasons and keywords
//! are fixed per rule.

use crate::types::ClipSuggestion;

/// Upper bound on suggestions returned per video.
pub const MAX_SUGGESTIONS: usize = 5;

/// Produce up to [`MAX_SUGGESTIONS`] clip windows for a video of the given
/// total duration, ordered by descending score. Ties keep rule order.
pub fn suggest_clips(duration: u32) -> Vec<ClipSuggestion> {
    let mut clips = Vec::new();

    // Hook: the opening seconds, up to 75s.
    if duration >= 60 {
        clips.push(clip(
            0,
            duration.min(75),
            92,
            "Strong opening hook that decides whether viewers keep watching",
            &["hook", "opening", "intro"],
        ));
    }

    // Peak: high-energy window around 40% in.
    if duration >= 180 {
        let start = (duration as f64 * 0.4) as u32;
        clips.push(clip(
            start,
            duration.min(start + 65),
            95,
            "High-energy peak near the middle of the video",
            &["peak", "highlight", "energy"],
        ));
    }

    // Payoff: the final 80 seconds.
    if duration >= 240 {
        clips.push(clip(
            duration.saturating_sub(80),
            duration,
            88,
            "Closing payoff where the video delivers its conclusion",
            &["payoff", "conclusion", "ending"],
        ));
    }

    // Best segment: a longer cut from 30% in. The end is intentionally not
    // capped to the video duration and may run past it.
    if duration >= 300 {
        let start = (duration as f64 * 0.3) as u32;
        clips.push(clip(
            start,
            start + 90,
            89,
            "Sustained segment with room for a longer cut",
            &["segment", "story", "context"],
        ));
    }

    // Reaction: a late beat at 55% in.
    if duration >= 150 {
        let start = (duration as f64 * 0.55) as u32;
        clips.push(clip(
            start,
            duration.min(start + 70),
            91,
            "Late reaction beat that performs well on short-form feeds",
            &["reaction", "moment", "shareable"],
        ));
    }

    // Stable sort: equal scores keep the rule order above.
    clips.sort_by(|a, b| b.score.cmp(&a.score));
    clips.truncate(MAX_SUGGESTIONS);
    clips
}

fn clip(start: u32, end: u32, score: u8, reason: &str, keywords: &[&str]) -> ClipSuggestion {
    ClipSuggestion {
        start_time: start,
        end_time: end,
        duration: end - start,
        score,
        reason: reason.to_string(),
        keywords: keywords.iter().map(|k| k.to_string()).collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_duration_triggers_all_five_rules() {
        let clips = suggest_clips(420);
        assert_eq!(clips.len(), 5);

        let scores: Vec<u8> = clips.iter().map(|c| c.score).collect();
        assert_eq!(scores, vec![95, 92, 91, 89, 88]);
    }

    #[test]
    fn short_video_gets_no_clips() {
        assert!(suggest_clips(50).is_empty());
        assert!(suggest_clips(0).is_empty());
        assert!(suggest_clips(59).is_empty());
    }

    #[test]
    fn medium_video_gets_only_the_hook() {
        let clips = suggest_clips(100);
        assert_eq!(clips.len(), 1);
        assert_eq!(clips[0].score, 92);
        assert_eq!(clips[0].start_time, 0);
        assert_eq!(clips[0].end_time, 75);
    }

    #[test]
    fn hook_is_capped_to_short_durations() {
        let clips = suggest_clips(60);
        assert_eq!(clips.len(), 1);
        assert_eq!(clips[0].end_time, 60);
        assert_eq!(clips[0].duration, 60);
    }

    #[test]
    fn rules_are_deterministic() {
        for duration in [50, 60, 100, 150, 180, 240, 300, 420, 3600] {
            assert_eq!(suggest_clips(duration), suggest_clips(duration));
        }
    }

    #[test]
    fn clip_duration_matches_window() {
        for duration in [60, 150, 180, 240, 300, 420, 900] {
            for c in suggest_clips(duration) {
                assert!(c.end_time >= c.start_time);
                assert_eq!(c.duration, c.end_time - c.start_time);
                assert!(c.score <= 100);
            }
        }
    }

    #[test]
    fn windows_at_default_duration() {
        let clips = suggest_clips(420);

        // Peak: 40% of 420 = 168, +65 = 233
        assert_eq!((clips[0].start_time, clips[0].end_time), (168, 233));
        // Hook
        assert_eq!((clips[1].start_time, clips[1].end_time), (0, 75));
        // Reaction: 55% of 420 = 231, +70 = 301
        assert_eq!((clips[2].start_time, clips[2].end_time), (231, 301));
        // Best segment: 30% of 420 = 126, +90 = 216
        assert_eq!((clips[3].start_time, clips[3].end_time), (126, 216));
        // Payoff: 420-80 = 340
        assert_eq!((clips[4].start_time, clips[4].end_time), (340, 420));
    }

    #[test]
    fn best_segment_end_is_never_capped() {
        let clips = suggest_clips(300);
        let best = clips.iter().find(|c| c.score == 89).unwrap();
        assert_eq!(best.start_time, 90);
        assert_eq!(best.end_time, 180);

        // End is always start + 90, independent of the video length.
        for duration in [300, 333, 1000] {
            let clips = suggest_clips(duration);
            let best = clips.iter().find(|c| c.score == 89).unwrap();
            assert_eq!(best.end_time, best.start_time + 90);
        }
    }
}
