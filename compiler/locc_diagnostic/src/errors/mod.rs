//! Embedded documentation for `locc explain`.
//!
//! Each code has a markdown file in this directory, embedded at compile
//! time.

use crate::ErrorCode;

/// Registry of embedded code documentation.
pub struct ErrorDocs;

impl ErrorDocs {
    /// Get the documentation for a code, if any.
    pub fn get(code: ErrorCode) -> Option<&'static str> {
        DOCS.iter().find(|(c, _)| *c == code).map(|(_, doc)| *doc)
    }

    /// Get all documented codes.
    pub fn all_codes() -> impl Iterator<Item = ErrorCode> {
        DOCS.iter().map(|(code, _)| *code)
    }

    pub fn has_docs(code: ErrorCode) -> bool {
        DOCS.iter().any(|(c, _)| *c == code)
    }
}

static DOCS: &[(ErrorCode, &str)] = &[
    (ErrorCode::E1001, include_str!("E1001.md")),
    (ErrorCode::W2001, include_str!("W2001.md")),
    (ErrorCode::W2002, include_str!("W2002.md")),
    (ErrorCode::W2003, include_str!("W2003.md")),
    (ErrorCode::W2004, include_str!("W2004.md")),
    (ErrorCode::W2005, include_str!("W2005.md")),
    (ErrorCode::W2006, include_str!("W2006.md")),
];

#[cfg(test)]
mod tests;
