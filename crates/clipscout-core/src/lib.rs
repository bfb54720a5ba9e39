//! Clipscout Core Library
//!
//! Core functionality for classifying video URLs by platform, fabricating
//! placeholder metadata, and suggesting shareable clip windows with a set of
//! duration-gated heuristic rules.

pub mod error;
pub mod format;
pub mod heuristics;
pub mod metadata;
pub mod pipeline;
pub mod platform;
pub mod types;

// Re-export commonly used items at crate root
pub use error::{ClipscoutError, Result};
pub use format::{format_analysis_readable, format_timestamp};
pub use heuristics::{MAX_SUGGESTIONS, suggest_clips};
pub use metadata::{MetadataProvider, SIMULATED_DURATION_SECS, SimulatedProvider};
pub use pipeline::analyze_url;
pub use platform::{Platform, classify};
pub use types::{AnalysisResult, ClipSuggestion, VideoMetadata};
