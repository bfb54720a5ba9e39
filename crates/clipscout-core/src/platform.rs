use serde::Serialize;

/// Source site a video URL points at, derived from domain substrings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Platform {
    YouTube,
    TikTok,
    Instagram,
    #[serde(rename = "Twitter/X")]
    Twitter,
    Facebook,
    Vimeo,
    Twitch,
    Unknown,
}

impl Platform {
    pub fn name(&self) -> &'static str {
        match self {
            Platform::YouTube => "YouTube",
            Platform::TikTok => "TikTok",
            Platform::Instagram => "Instagram",
            Platform::Twitter => "Twitter/X",
            Platform::Facebook => "Facebook",
            Platform::Vimeo => "Vimeo",
            Platform::Twitch => "Twitch",
            Platform::Unknown => "Unknown",
        }
    }
}

impl std::fmt::Display for Platform {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Classify a URL by known domain substrings, first match wins.
/// No well-formedness checks beyond containment.
pub fn classify(url: &str) -> Platform {
    if url.contains("youtube.com") || url.contains("youtu.be") {
        Platform::YouTube
    } else if url.contains("tiktok.com") {
        Platform::TikTok
    } else if url.contains("instagram.com") {
        Platform::Instagram
    } else if url.contains("twitter.com") || url.contains("x.com") {
        Platform::Twitter
    } else if url.contains("facebook.com") || url.contains("fb.watch") {
        Platform::Facebook
    } else if url.contains("vimeo.com") {
        Platform::Vimeo
    } else if url.contains("twitch.tv") {
        Platform::Twitch
    } else {
        Platform::Unknown
    }
}
