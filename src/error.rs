use thiserror::Error;

/// Errors reported across the scorer boundary.
///
/// Degenerate text (empty, whitespace, punctuation, digits) is never an
/// error; it resolves to an empty document or a zero score.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TfIdfError {
    /// The caller passed no text at all.
    #[error("invalid argument: {0}")]
    InvalidArgument(&'static str),
}

impl TfIdfError {
    /// Unwrap an optional text argument, naming the operation that required it.
    #[inline]
    pub(crate) fn require_text<'a>(
        text: Option<&'a str>,
        op: &'static str,
    ) -> Result<&'a str, TfIdfError> {
        text.ok_or(TfIdfError::InvalidArgument(op))
    }
}
