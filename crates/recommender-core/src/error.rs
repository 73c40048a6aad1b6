/// Error types for the recommendation core.
///
/// Transport crates wrap `RecommendError` in their own error type via `#[from]`.

#[derive(Debug, thiserror::Error)]
pub enum RecommendError {
    #[error("invalid input: {0}")]
    InvalidInput(String),

    #[error("invalid catalogue: {0}")]
    InvalidCatalogue(String),

    #[error("catalogue io error: {0}")]
    CatalogueIo(#[from] std::io::Error),

    #[error("catalogue format error: {0}")]
    CatalogueFormat(#[from] serde_json::Error),
}
