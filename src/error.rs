//! Conversion errors.
//!
//! Both kinds are raised by the inline scanners and abort the whole
//! document. There is no partial output.

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;

/// Malformed inline markup.
///
/// `line` is the 1-based document line the error was found on, or `0` when
/// the error comes straight from [`crate::inline::process_line`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[non_exhaustive]
pub enum Error {
    /// An opening token has no matching close before the end of the line.
    #[error("no closing token found for `{token}` (line {line})")]
    UnterminatedToken { token: &'static str, line: usize },

    /// A complex token overlaps same-character runs in a way the
    /// single-character count cannot resolve.
    #[error("uneven number of tokens found for `{token}` (line {line})")]
    AmbiguousNesting { token: &'static str, line: usize },
}

impl Error {
    pub(crate) fn unterminated(token: &'static str) -> Self {
        Self::UnterminatedToken { token, line: 0 }
    }

    pub(crate) fn ambiguous(token: &'static str) -> Self {
        Self::AmbiguousNesting { token, line: 0 }
    }

    /// Attach a document line number.
    #[must_use]
    pub fn at_line(self, line: usize) -> Self {
        match self {
            Self::UnterminatedToken { token, .. } => Self::UnterminatedToken { token, line },
            Self::AmbiguousNesting { token, .. } => Self::AmbiguousNesting { token, line },
        }
    }

    /// The token that triggered the error.
    pub fn token(&self) -> &'static str {
        match self {
            Self::UnterminatedToken { token, .. } | Self::AmbiguousNesting { token, .. } => token,
        }
    }

    /// 1-based line number, `0` if unknown.
    pub fn line(&self) -> usize {
        match self {
            Self::UnterminatedToken { line, .. } | Self::AmbiguousNesting { line, .. } => *line,
        }
    }
}
