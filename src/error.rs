use thiserror::Error;

/// Failure taxonomy for the article pipeline.
///
/// A missing style source is not represented here: the loader recovers
/// locally by substituting the built-in sample. An empty transcript is a
/// valid input and produces a frame-only article.
#[derive(Debug, Error)]
pub enum ArticleError {
    /// Malformed configuration, rejected at construction time.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// The corrector/segmenter/balancer chain produced output that violates
    /// the article frame. The raw transcript is preserved so the caller can
    /// still salvage it.
    #[error("article assembly failed: {reason}")]
    AssemblyFailed { reason: String, transcript: String },

    /// The external transcoding utility failed or is unavailable.
    #[error("audio transcode failed: {0}")]
    TranscodeFailed(String),

    /// The external speech recognizer failed or returned nothing.
    #[error("speech recognition failed: {0}")]
    RecognitionFailed(String),
}
