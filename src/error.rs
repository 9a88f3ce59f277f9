//! Error taxonomy for short link generation.
//!
//! Every failure is recovered locally and surfaced as a user-facing message;
//! nothing panics and no error escapes the top-level entry point. Blank input
//! is deliberately not part of this taxonomy (see
//! [`Generation::Empty`](crate::generate::Generation)).

/// Reasons a non-blank input fails to produce a short URL.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GenerateError {
    /// Input is not a parseable URL or does not begin with the canonical origin.
    #[error("The URL must be a valid URL beginning with {origin}.")]
    InvalidOrigin { origin: String },

    /// Input is a validly-origined URL, but its query parameters match no
    /// recognized pattern.
    #[error("No known URL pattern recognized.")]
    NoPatternMatch,

    /// Decomposing an already-validated URL failed. Should not occur after
    /// validation succeeds; kept as a fallback so a raw parser error never
    /// reaches the user.
    #[error("Invalid URL format.")]
    MalformedUrl,
}
