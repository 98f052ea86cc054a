//! Error type and result alias for semantic analysis.

use crate::Span;
use miette::{Diagnostic, SourceSpan};
use thiserror::Error;

/// A semantic violation.
///
/// Analysis stops at the first violation, so there is only ever one of these
/// per run. The two variants differ only in whether a source location is
/// known; callers that match on wording should use [`Error::message`].
#[derive(Error, Debug, Clone, PartialEq, Diagnostic)]
pub enum Error {
    #[error("Semantic error: {0}")]
    #[diagnostic(code(bjin::semantic))]
    Semantic(String),

    #[error("{0}")]
    #[diagnostic(code(bjin::semantic))]
    SemanticWithSpan(String, #[label("here")] Span),
}

impl Error {
    /// Returns the human-readable message without any prefix.
    #[must_use]
    pub fn message(&self) -> &str {
        match self {
            Self::Semantic(message) | Self::SemanticWithSpan(message, _) => message,
        }
    }

    /// Returns the source location of the violation, if known.
    #[must_use]
    pub fn span(&self) -> Option<Span> {
        match self {
            Self::Semantic(_) => None,
            Self::SemanticWithSpan(_, span) => Some(*span),
        }
    }
}

impl From<Span> for SourceSpan {
    fn from(span: Span) -> Self {
        SourceSpan::from(span.start.offset..span.end.offset)
    }
}

/// Result type alias using the bJin Error type.
pub type Result<T> = std::result::Result<T, Error>;
