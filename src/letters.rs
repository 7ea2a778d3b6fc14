//! Letter constants and the [`LetterPool`] multiset.
//!
//! A `LetterPool` is a fixed 26-slot count array (one slot per letter `a`-`z`)
//! together with its cached total. It is the only multiset representation in
//! the crate: the word index precomputes one per candidate word, and the
//! multi-word search mutates a single remaining pool in place.

use crate::errors::QueryError;
use std::fmt;
use std::ops::RangeInclusive;
use std::str::FromStr;

// Character-set constants
pub(crate) const ALPHABET_SIZE: usize = 26;
pub(crate) const LOWERCASE_ALPHABET: RangeInclusive<char> = 'a'..='z';

// 'a' -> 0, 'b' -> 1, ..., 'z' -> 25
pub(crate) fn letter_to_num(c: char) -> Option<usize> {
    if c.is_ascii_lowercase() {
        Some(c as usize - 'a' as usize)
    } else {
        None
    }
}

/// Multiset of lowercase letters.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct LetterPool {
    counts: [u32; ALPHABET_SIZE],
    len: usize,
}

impl LetterPool {
    /// Build a pool from raw query text.
    ///
    /// Whitespace is stripped and case is folded; anything left that is not
    /// `a`-`z` is rejected.
    ///
    /// # Errors
    ///
    /// Returns [`QueryError::InvalidLetter`] naming the first offending character.
    pub fn from_query(letters: &str) -> Result<Self, Box<QueryError>> {
        let mut pool = LetterPool::default();
        for c in letters.chars().filter(|c| !c.is_whitespace()).flat_map(char::to_lowercase) {
            let idx = letter_to_num(c).ok_or_else(|| {
                Box::new(QueryError::InvalidLetter { letters: letters.to_string(), invalid_char: c })
            })?;
            pool.counts[idx] += 1;
            pool.len += 1;
        }
        Ok(pool)
    }

    /// Pool of a dictionary word, or `None` if the word is not all `a`-`z`.
    #[must_use]
    pub fn from_word(word: &str) -> Option<Self> {
        word.parse().ok()
    }

    /// Total number of letters in the pool.
    #[must_use]
    pub fn len(&self) -> usize {
        self.len
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// How many copies of `letter` the pool holds (0 for anything outside `a`-`z`).
    #[must_use]
    pub fn count(&self, letter: char) -> u32 {
        letter_to_num(letter).map_or(0, |idx| self.counts[idx])
    }

    /// True iff every letter of `sub` is available here with at least the same multiplicity.
    #[must_use]
    pub fn contains(&self, sub: &LetterPool) -> bool {
        sub.len <= self.len && self.counts.iter().zip(sub.counts.iter()).all(|(have, need)| need <= have)
    }

    /// Remove `sub` from the pool. Callers must have checked [`LetterPool::contains`].
    pub fn subtract(&mut self, sub: &LetterPool) {
        debug_assert!(self.contains(sub), "subtract would drive a letter count negative");
        for (have, take) in self.counts.iter_mut().zip(sub.counts.iter()) {
            *have -= take;
        }
        self.len -= sub.len;
    }

    /// Put `sub` back; the undo of [`LetterPool::subtract`].
    pub fn add(&mut self, sub: &LetterPool) {
        for (have, give) in self.counts.iter_mut().zip(sub.counts.iter()) {
            *have += give;
        }
        self.len += sub.len;
    }
}

impl FromStr for LetterPool {
    type Err = Box<QueryError>;

    // NB: strict; only lowercase a-z is accepted, with no folding
    fn from_str(lowercase_word: &str) -> Result<Self, Self::Err> {
        let mut pool = LetterPool::default();
        for c in lowercase_word.chars() {
            let idx = letter_to_num(c).ok_or_else(|| {
                Box::new(QueryError::InvalidLetter { letters: lowercase_word.to_string(), invalid_char: c })
            })?;
            pool.counts[idx] += 1;
            pool.len += 1;
        }
        Ok(pool)
    }
}

// Alphagram form, e.g. "catdog" -> "acdgot"
impl fmt::Display for LetterPool {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for c in LOWERCASE_ALPHABET {
            for _ in 0..self.count(c) {
                write!(f, "{c}")?;
            }
        }
        Ok(())
    }
}

impl fmt::Debug for LetterPool {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "LetterPool({self})")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pool(s: &str) -> LetterPool {
        s.parse().unwrap()
    }

    #[test]
    fn test_letter_to_num() {
        assert_eq!(letter_to_num('a'), Some(0));
        assert_eq!(letter_to_num('z'), Some(25));
        assert_eq!(letter_to_num('A'), None);
        assert_eq!(letter_to_num('{'), None);
        assert_eq!(letter_to_num('é'), None);
    }

    #[test]
    fn test_from_query_folds_case_and_whitespace() {
        let p = LetterPool::from_query("U q s\tO t e n I").unwrap();
        assert_eq!(p, pool("uqsoteni"));
        assert_eq!(p.len(), 8);
    }

    #[test]
    fn test_from_query_rejects_digits() {
        let err = LetterPool::from_query("ab3").unwrap_err();
        assert!(matches!(*err, QueryError::InvalidLetter { invalid_char: '3', .. }));
    }

    #[test]
    fn test_from_str_is_strict() {
        assert!("Cat".parse::<LetterPool>().is_err());
        assert!("c t".parse::<LetterPool>().is_err());
        assert!("cat".parse::<LetterPool>().is_ok());
    }

    #[test]
    fn test_from_word_is_strict_parse() {
        assert_eq!(LetterPool::from_word("tinsel"), Some(pool("tinsel")));
        assert_eq!(LetterPool::from_word("Tinsel"), None);
        assert_eq!(LetterPool::from_word("x-ray"), None);
        assert_eq!(LetterPool::from_word(""), Some(LetterPool::default()));
    }

    #[test]
    fn test_empty_pool() {
        let p = LetterPool::from_query("   ").unwrap();
        assert!(p.is_empty());
        assert_eq!(p, LetterPool::default());
    }

    #[test]
    fn test_counts() {
        let p = pool("banana");
        assert_eq!(p.count('a'), 3);
        assert_eq!(p.count('n'), 2);
        assert_eq!(p.count('b'), 1);
        assert_eq!(p.count('z'), 0);
        assert_eq!(p.count('A'), 0);
    }

    #[test]
    fn test_contains_respects_multiplicity() {
        let p = pool("banana");
        assert!(p.contains(&pool("nab")));
        assert!(p.contains(&pool("aaa")));
        assert!(!p.contains(&pool("aaaa")));
        assert!(!p.contains(&pool("bb")));
        assert!(p.contains(&LetterPool::default()));
        assert!(p.contains(&p));
    }

    #[test]
    fn test_subtract_then_add_restores() {
        let original = pool("catdog");
        let mut p = original;
        p.subtract(&pool("dog"));
        assert_eq!(p, pool("cat"));
        assert_eq!(p.len(), 3);
        p.add(&pool("dog"));
        assert_eq!(p, original);
    }

    #[test]
    fn test_subtract_to_empty() {
        let mut p = pool("listen");
        p.subtract(&pool("silent"));
        assert!(p.is_empty());
    }

    #[test]
    fn test_display_is_alphagram() {
        assert_eq!(pool("catdog").to_string(), "acdgot");
        assert_eq!(format!("{:?}", pool("ba")), "LetterPool(ab)");
    }
}
