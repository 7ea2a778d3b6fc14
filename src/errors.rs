//! Error types for query text (patterns and letter pools) with error codes and helpful messages.
//!
//! # Error Codes
//!
//! Each error variant has a unique code (E001-E005) for documentation lookup:
//!
//! - E001: `EmptyPattern` (Pattern is empty after stripping whitespace)
//! - E002: `InvalidPatternChar` (Pattern contains something other than a-z, '?' or '*')
//! - E003: `InvalidLetter` (Letter pool contains something other than a-z)
//! - E004: `RegexError` (Rendered pattern regex failed to compile or match)
//! - E005: `NomError` (Low-level nom parser error)
//!
//! # Examples
//!
//! ```
//! use cw::errors::QueryError;
//! use cw::letters::LetterPool;
//!
//! match LetterPool::from_query("cat 5") {
//!     Err(e) => {
//!         assert_eq!(e.code(), "E003");
//!         println!("{}", e.display_detailed());
//!     }
//!     Ok(_) => unreachable!(),
//! }
//! ```

use nom::error::{ErrorKind, ParseError as NomParseError};

/// Custom error type for query parsing
#[derive(Debug, thiserror::Error)]
pub enum QueryError {
    #[error("Empty pattern")]
    EmptyPattern,

    #[error("Pattern \"{pattern}\" contains invalid character '{invalid_char}' (only a-z, '?' and '*' allowed)")]
    InvalidPatternChar { pattern: String, invalid_char: char },

    #[error("Letters \"{letters}\" contain invalid character '{invalid_char}' (only a-z allowed)")]
    InvalidLetter { letters: String, invalid_char: char },

    #[error("Invalid regex pattern: {0}")]
    RegexError(#[from] fancy_regex::Error),

    // nom parser error (lowest level)
    #[error("nom parser error: {0:?}")]
    NomError(ErrorKind),
}

impl From<Box<fancy_regex::Error>> for Box<QueryError> {
    fn from(e: Box<fancy_regex::Error>) -> Self {
        Box::new(QueryError::RegexError(*e))
    }
}

impl From<fancy_regex::Error> for Box<QueryError> {
    fn from(e: fancy_regex::Error) -> Self {
        Box::new(QueryError::RegexError(e))
    }
}

impl<'a> NomParseError<&'a str> for Box<QueryError> {
    fn from_error_kind(_input: &'a str, kind: ErrorKind) -> Self {
        Box::new(QueryError::NomError(kind))
    }

    fn append(_input: &'a str, _kind: ErrorKind, other: Self) -> Self {
        other
    }
}

impl QueryError {
    /// Returns the error code for this error variant
    #[must_use]
    pub fn code(&self) -> &'static str {
        match self {
            QueryError::EmptyPattern => "E001",
            QueryError::InvalidPatternChar { .. } => "E002",
            QueryError::InvalidLetter { .. } => "E003",
            QueryError::RegexError(_) => "E004",
            QueryError::NomError(_) => "E005",
        }
    }

    /// Returns a short description of this error type (for documentation)
    #[must_use]
    pub fn description(&self) -> &'static str {
        match self {
            QueryError::EmptyPattern => "Pattern is empty",
            QueryError::InvalidPatternChar { .. } => "Invalid character in pattern",
            QueryError::InvalidLetter { .. } => "Invalid character in letters",
            QueryError::RegexError(_) => "Pattern regex error",
            QueryError::NomError(_) => "Low-level parser error",
        }
    }

    /// Returns detailed explanation of this error type (for documentation)
    #[must_use]
    pub fn details(&self) -> &'static str {
        match self {
            QueryError::EmptyPattern => "The pattern contained no letters or wildcards once whitespace was removed.",
            QueryError::InvalidPatternChar { .. } => "Patterns are made of known letters (a-z, any case) and wildcards. Both '?' and '*' stand for exactly one unknown letter.",
            QueryError::InvalidLetter { .. } => "Anagram input is a pool of letters. Whitespace is ignored and case is folded, but digits and punctuation are rejected.",
            QueryError::RegexError(_) => "The regex rendered from the pattern could not be compiled or evaluated. This is usually an internal error.",
            QueryError::NomError(_) => "The pattern parser failed at a low level. This is usually wrapped by a more specific error.",
        }
    }

    /// Returns a helpful suggestion or example for this error
    #[must_use]
    pub fn help(&self) -> Option<&'static str> {
        match self {
            QueryError::EmptyPattern => Some("Example: use '?u??t???' to find 8-letter words with 'u' second and 't' fifth"),
            QueryError::InvalidPatternChar { .. } => Some("Use '?' or '*' for unknown letters (e.g., 'c?t' or 'c*t')"),
            QueryError::InvalidLetter { .. } => Some("Supply letters only, optionally separated by spaces (e.g., 'u q s o t e n i')"),
            _ => None,
        }
    }

    /// Formats the error with code and optional help text
    #[must_use]
    pub fn display_detailed(&self) -> String {
        format_error_with_code_and_help(&self.to_string(), self.code(), self.help())
    }
}

/// Helper function to format error messages with code and optional help text
pub(crate) fn format_error_with_code_and_help(base_msg: &str, code: &str, help: Option<&str>) -> String {
    if let Some(help_text) = help {
        format!("{base_msg} ({code})\n{help_text}")
    } else {
        format!("{base_msg} ({code})")
    }
}
