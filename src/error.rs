use thiserror::Error;

/// Errors surfaced by the generation entry points.
///
/// `InvalidInput` carries each backend's exact message string; callers (and
/// external test suites) assert on those literally, so the wordings are part
/// of the contract and are deliberately not unified across backends.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum Error {
    #[error("{0}")]
    InvalidInput(&'static str),

    /// Per-language options JSON failed to deserialize (CLI path).
    #[error("invalid options: {0}")]
    InvalidOptions(String),

    #[error("unknown language: {0}")]
    UnknownLanguage(String),
}
