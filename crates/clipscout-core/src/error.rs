use thiserror::Error;

#[derive(Error, Debug)]
pub enum ClipscoutError {
    #[error("No video URL provided")]
    MissingUrl,

    #[error("Unsupported video platform for {url}")]
    UnsupportedPlatform { url: String },

    #[error("Metadata lookup failed: {reason}")]
    MetadataFailed { reason: String },
}

impl ClipscoutError {
    /// Whether the caller is at fault (bad input) rather than the system.
    pub fn is_client_error(&self) -> bool {
        matches!(
            self,
            ClipscoutError::MissingUrl | ClipscoutError::UnsupportedPlatform { .. }
        )
    }
}

pub type Result<T> = std::result::Result<T, ClipscoutError>;
