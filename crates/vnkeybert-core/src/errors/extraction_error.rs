/// Keyword extraction errors.
#[derive(Debug, thiserror::Error)]
pub enum ExtractionError {
    #[error("candidate phrases and embeddings are misaligned: {phrases} phrases, {embeddings} embeddings")]
    MisalignedCandidates { phrases: usize, embeddings: usize },

    #[error("segmentation failed: {reason}")]
    SegmentationFailed { reason: String },

    #[error("extraction cancelled during {stage}")]
    Cancelled { stage: String },

    #[error("deadline exceeded during {stage}")]
    DeadlineExceeded { stage: String },
}
