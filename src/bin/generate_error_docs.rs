//! Generate error code documentation from the source of truth (error enums).
//!
//! Codes, descriptions, details and help text come straight from the
//! `code()`, `description()`, `details()` and `help()` methods of
//! `QueryError` and `SolverError`.
//!
//! Run with:
//! ```bash
//! cargo run --bin generate_error_docs > docs/ERROR_CODES.md
//! ```

use std::fmt::Write;

use cw::errors::QueryError;
use cw::solver::SolverError;

/// Macro to generate error documentation for any error type
/// with `code()`, `description()`, `details()`, `help()`, and `display_detailed()` methods
macro_rules! generate_error_docs {
    ($out:expr, $errors:expr) => {
        for error in $errors {
            let _ = writeln!($out, "### {}: {}\n", error.code(), error.description());
            let _ = writeln!($out, "**Details:** {}\n", error.details());

            if let Some(help_text) = error.help() {
                let _ = writeln!($out, "**How to fix:**\n```\n{help_text}\n```\n");
            }

            let _ = writeln!($out, "**Example error message:**\n```\n{error}\n```\n");
            let _ = writeln!($out, "**Detailed format:**\n```\n{}\n```\n", error.display_detailed());
            let _ = writeln!($out, "---\n");
        }
    };
}

/// One of each `QueryError` variant.
fn all_query_error_variants() -> Vec<QueryError> {
    let mut errors = vec![
        QueryError::EmptyPattern,
        QueryError::InvalidPatternChar { pattern: "c!t".to_string(), invalid_char: '!' },
        QueryError::InvalidLetter { letters: "c4t".to_string(), invalid_char: '4' },
    ];
    // RegexError: create by attempting to compile an invalid regex
    if let Err(e) = fancy_regex::Regex::new("(?P<invalid") {
        errors.push(QueryError::RegexError(e));
    }
    errors.push(QueryError::NomError(nom::error::ErrorKind::Many1));
    errors
}

/// One of each `SolverError` variant.
fn all_solver_error_variants() -> Vec<SolverError> {
    vec![
        SolverError::InvalidQuery(Box::new(QueryError::InvalidLetter {
            letters: "c4t".to_string(),
            invalid_char: '4',
        })),
        SolverError::LengthMismatch { letter_count: 6, length_sum: 7 },
        SolverError::ZeroLength { position: 2 },
    ]
}

fn render_docs() -> String {
    let mut out = String::new();
    let _ = writeln!(out, "# Error Code Reference\n");
    let _ = writeln!(out, "**This document is auto-generated from the source code. Do not edit manually.**\n");

    let _ = writeln!(out, "## Table of Contents\n");
    let _ = writeln!(out, "- [Solver Errors (S001–S003)](#solver-errors)");
    let _ = writeln!(out, "- [Query Errors (E001–E005)](#query-errors)\n");

    let _ = writeln!(out, "## Solver Errors\n");
    let _ = writeln!(out, "Errors from validating a multi-word anagram query. These wrap query errors or report length problems.\n");
    generate_error_docs!(out, all_solver_error_variants());

    let _ = writeln!(out, "## Query Errors\n");
    let _ = writeln!(out, "Errors that occur when reading patterns or letter pools.\n");
    generate_error_docs!(out, all_query_error_variants());

    let _ = writeln!(out, "## Error Display Formats\n");
    let _ = writeln!(out, "### Simple Format\n```\nError: <message>\n```\n");
    let _ = writeln!(out, "### Detailed Format (via `display_detailed()`)\n```\n<message> (<code>)\n<help text if available>\n```");
    out
}

fn main() {
    print!("{}", render_docs());
}
