//! Wildcard patterns: `?u??t???` finds 8-letter words with 'u' second and 't' fifth.
//!
//! A pattern is a sequence of known letters and wildcards. Both `?` and `*`
//! stand for exactly one unknown letter (so `*` is *not* "any run of
//! letters" here). Whitespace is ignored and case is folded before parsing.

use std::collections::HashMap;
use std::str::FromStr;
use std::sync::{Mutex, OnceLock};

use fancy_regex::Regex;
use nom::{
    branch::alt,
    character::complete::{one_of, satisfy},
    combinator::map,
    multi::many1,
    IResult,
    Parser,
};

use crate::errors::QueryError;

/// Parser result type: input, output, with our custom `QueryError`
pub type PResult<'a, O> = IResult<&'a str, O, Box<QueryError>>;

/// Wildcard characters; each matches exactly one letter.
pub(crate) const WILDCARDS: &str = "?*";

/// One position of a pattern.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PatternPart {
    Letter(char), // 'a'..='z': must match exactly
    Any,          // '?' or '*': any single letter
}

/// A parsed pattern along with its compiled, anchored regex.
#[derive(Debug, Clone)]
pub struct Pattern {
    pub parts: Vec<PatternPart>,
    regex: Regex,
}

/// Global, lazily initialized cache of compiled regexes.
///
/// The CLI compiles one pattern per run, but the WASM front end re-runs the
/// same pattern as the user edits other fields, so compiled regexes are kept.
static REGEX_CACHE: OnceLock<Mutex<HashMap<String, Regex>>> = OnceLock::new();

/// Return a compiled `Regex` for `pattern`, caching the result.
pub(crate) fn get_regex(pattern: &str) -> Result<Regex, Box<fancy_regex::Error>> {
    let cache = REGEX_CACHE.get_or_init(|| Mutex::new(HashMap::new()));

    // if the lock is poisoned we compile without caching
    if let Ok(guard) = cache.lock() {
        if let Some(re) = guard.get(pattern).cloned() {
            return Ok(re);
        }
    }

    let compiled = Regex::new(pattern)?;

    if let Ok(mut guard) = cache.lock() {
        if let Some(existing) = guard.get(pattern).cloned() {
            return Ok(existing);
        }
        guard.insert(pattern.to_string(), compiled.clone());
    }
    Ok(compiled)
}

fn letter(input: &str) -> PResult<'_, PatternPart> {
    map(satisfy(|c| c.is_ascii_lowercase()), PatternPart::Letter).parse(input)
}

fn wildcard(input: &str) -> PResult<'_, PatternPart> {
    map(one_of(WILDCARDS), |_| PatternPart::Any).parse(input)
}

fn pattern_parts(input: &str) -> PResult<'_, Vec<PatternPart>> {
    many1(alt((letter, wildcard))).parse(input)
}

/// Anchored regex source for `parts`, e.g. `[Letter('c'), Any]` -> `^c.$`
fn render_parts_to_regex(parts: &[PatternPart]) -> String {
    let mut regex_str = String::with_capacity(parts.len() + 2);
    regex_str.push('^');
    for part in parts {
        match part {
            PatternPart::Letter(c) => regex_str.push(*c),
            PatternPart::Any => regex_str.push('.'),
        }
    }
    regex_str.push('$');
    regex_str
}

impl Pattern {
    /// Number of letters a matching word has.
    #[must_use]
    pub fn len(&self) -> usize {
        self.parts.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.parts.is_empty()
    }

    /// Does `word` (lowercase) match this pattern?
    ///
    /// # Errors
    ///
    /// Returns [`QueryError::RegexError`] if the regex engine fails.
    pub fn is_match(&self, word: &str) -> Result<bool, Box<QueryError>> {
        // each part is one letter, so compare against chars, not bytes
        if word.chars().count() != self.parts.len() {
            return Ok(false);
        }
        Ok(self.regex.is_match(word)?)
    }
}

impl FromStr for Pattern {
    type Err = Box<QueryError>;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let folded: String = raw
            .chars()
            .filter(|c| !c.is_whitespace())
            .flat_map(char::to_lowercase)
            .collect();

        if folded.is_empty() {
            return Err(Box::new(QueryError::EmptyPattern));
        }

        let invalid = |rest: &str| {
            let invalid_char = rest.chars().next().unwrap_or_default();
            Box::new(QueryError::InvalidPatternChar { pattern: raw.to_string(), invalid_char })
        };

        let parts = match pattern_parts(&folded) {
            Ok(("", parts)) => parts,
            Ok((rest, _)) => return Err(invalid(rest)),
            // many1 only fails when the very first character is not a part
            Err(nom::Err::Error(_) | nom::Err::Failure(_)) => return Err(invalid(&folded)),
            Err(nom::Err::Incomplete(_)) => return Err(Box::new(QueryError::NomError(nom::error::ErrorKind::Complete))),
        };

        let regex = get_regex(&render_parts_to_regex(&parts))?;
        Ok(Pattern { parts, regex })
    }
}

/// Dictionary words matching `pattern`, in dictionary order.
///
/// # Errors
///
/// Returns a [`QueryError`] if the pattern is empty or contains a character
/// that is neither a letter nor a wildcard.
pub fn match_pattern<'w>(pattern: &str, words: &[&'w str]) -> Result<Vec<&'w str>, Box<QueryError>> {
    let pattern: Pattern = pattern.parse()?;
    let mut matches = Vec::new();
    for &word in words {
        if pattern.is_match(word)? {
            matches.push(word);
        }
    }
    log::debug!("Pattern of length {} matched {} of {} words", pattern.len(), matches.len(), words.len());
    Ok(matches)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_letters_and_wildcards() {
        let p: Pattern = "c?t*".parse().unwrap();
        assert_eq!(
            p.parts,
            vec![PatternPart::Letter('c'), PatternPart::Any, PatternPart::Letter('t'), PatternPart::Any]
        );
        assert_eq!(p.len(), 4);
    }

    #[test]
    fn test_parse_folds_case_and_whitespace() {
        let p: Pattern = " C ? T ".parse().unwrap();
        assert_eq!(p.parts, vec![PatternPart::Letter('c'), PatternPart::Any, PatternPart::Letter('t')]);
    }

    #[test]
    fn test_empty_pattern_error() {
        assert!(matches!(*"".parse::<Pattern>().unwrap_err(), QueryError::EmptyPattern));
        assert!(matches!(*"  \t".parse::<Pattern>().unwrap_err(), QueryError::EmptyPattern));
    }

    #[test]
    fn test_invalid_char_in_middle() {
        let err = "ca!t".parse::<Pattern>().unwrap_err();
        assert!(matches!(*err, QueryError::InvalidPatternChar { invalid_char: '!', ref pattern } if pattern == "ca!t"));
    }

    #[test]
    fn test_invalid_char_at_start() {
        let err = ".at".parse::<Pattern>().unwrap_err();
        assert!(matches!(*err, QueryError::InvalidPatternChar { invalid_char: '.', .. }));
    }

    #[test]
    fn test_render_regex() {
        let parts = vec![PatternPart::Letter('c'), PatternPart::Any, PatternPart::Letter('t')];
        assert_eq!(render_parts_to_regex(&parts), "^c.t$");
    }

    #[test]
    fn test_star_matches_exactly_one_letter() {
        let p: Pattern = "c*t".parse().unwrap();
        assert!(p.is_match("cat").unwrap());
        assert!(!p.is_match("ct").unwrap());
        assert!(!p.is_match("coat").unwrap());
    }

    #[test]
    fn test_non_ascii_word_counts_letters_not_bytes() {
        let p: Pattern = "caf?".parse().unwrap();
        assert!(p.is_match("café").unwrap());
        assert!(!p.is_match("cafés").unwrap());
        assert_eq!(match_pattern("?afe", &["café", "cafe", "safe"]).unwrap(), vec!["cafe", "safe"]);
    }

    #[test]
    fn test_match_pattern_keeps_order() {
        let words = vec!["cut", "cat", "cot", "coat", "bat"];
        assert_eq!(match_pattern("c?t", &words).unwrap(), vec!["cut", "cat", "cot"]);
    }

    #[test]
    fn test_match_pattern_known_positions() {
        // quotient has 'i' in fifth place
        let words = vec!["question", "quotient", "quieting", "building", "tumbling"];
        assert_eq!(match_pattern("?u??t???", &words).unwrap(), vec!["question", "quieting"]);
    }

    #[test]
    fn test_match_pattern_no_wildcards() {
        let words = vec!["cat", "dog"];
        assert_eq!(match_pattern("dog", &words).unwrap(), vec!["dog"]);
    }

    #[test]
    fn test_regex_cache_returns_same_behavior() {
        let a = get_regex("^a.c$").unwrap();
        let b = get_regex("^a.c$").unwrap();
        assert_eq!(a.as_str(), b.as_str());
        assert!(b.is_match("abc").unwrap());
    }
}
