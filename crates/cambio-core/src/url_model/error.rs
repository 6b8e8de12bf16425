//! Error types for câmbio URL validation and parameter lookup.

/// Why a raw string could not become a [`CambioUrl`](super::CambioUrl).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    /// Input was empty or whitespace-only.
    #[error("the URL is empty")]
    Empty,
    /// Input does not start with an accepted bytebank câmbio prefix.
    #[error("the URL is not a valid bytebank câmbio URL: {url}")]
    PatternMismatch { url: String },
}

/// Lookup failure for a named query parameter.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParameterError {
    #[error("parameter `{name}` not found in query string")]
    NotFound { name: String },
}
