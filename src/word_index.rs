//! Per-length candidate lists for the multi-word anagram search.
//!
//! The index keeps, for each required length, only the dictionary words whose
//! letters fit inside the full query pool. Anything filtered out here could
//! never take part in a solution, and anything kept needs no further check
//! beyond "does it fit in what is left", which the solver does itself.

use std::collections::{BTreeSet, HashMap};

use crate::letters::LetterPool;

/// A dictionary word with its letters precounted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WordCandidate<'w> {
    pub word: &'w str,
    pub pool: LetterPool,
}

/// Required length -> candidates of that length, in dictionary order.
///
/// The position of a candidate in its list is the index the solver's
/// dedup cursor refers to, so list order must not change once built.
#[derive(Debug, Clone, Default)]
pub struct CandidateTable<'w> {
    by_length: HashMap<usize, Vec<WordCandidate<'w>>>,
}

impl<'w> CandidateTable<'w> {
    /// Build the table for `lengths` (duplicates allowed) against the `full` pool.
    #[must_use]
    pub fn build(full: &LetterPool, lengths: &[usize], words: &[&'w str]) -> Self {
        let wanted: BTreeSet<usize> = lengths.iter().copied().collect();
        let mut by_length: HashMap<usize, Vec<WordCandidate<'w>>> =
            wanted.iter().map(|&len| (len, Vec::new())).collect();

        for &word in words {
            // bytes == letters for the ASCII words that can produce a pool
            let Some(bucket) = by_length.get_mut(&word.len()) else {
                continue;
            };
            match LetterPool::from_word(word) {
                Some(pool) if full.contains(&pool) => bucket.push(WordCandidate { word, pool }),
                _ => {}
            }
        }

        for len in &wanted {
            log::debug!(
                "length {len}: {} candidate(s)",
                by_length.get(len).map_or(0, Vec::len)
            );
        }

        debug_assert!(
            by_length.values().flatten().all(|c| full.contains(&c.pool)),
            "every candidate must fit in the full pool"
        );

        CandidateTable { by_length }
    }

    /// Candidates of length `len`; empty if none fit (or `len` was never requested).
    #[must_use]
    pub fn candidates(&self, len: usize) -> &[WordCandidate<'w>] {
        self.by_length.get(&len).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Total number of candidates across all lengths.
    #[must_use]
    pub fn len(&self) -> usize {
        self.by_length.values().map(Vec::len).sum()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words_of<'a>(table: &CandidateTable<'a>, len: usize) -> Vec<&'a str> {
        table.candidates(len).iter().map(|c| c.word).collect()
    }

    #[test]
    fn test_filters_by_length_and_pool() {
        let full = LetterPool::from_query("catdog").unwrap();
        let words = vec!["cat", "dog", "cog", "act", "god", "tag", "cats", "do", "dot"];
        let table = CandidateTable::build(&full, &[3, 3], &words);
        assert_eq!(words_of(&table, 3), vec!["cat", "dog", "cog", "act", "god", "tag", "dot"]);
        assert!(table.candidates(2).is_empty());
        assert!(table.candidates(4).is_empty());
    }

    #[test]
    fn test_respects_multiplicity() {
        let full = LetterPool::from_query("aabc").unwrap();
        let words = vec!["aa", "bb", "ab", "cc"];
        let table = CandidateTable::build(&full, &[2], &words);
        assert_eq!(words_of(&table, 2), vec!["aa", "ab"]);
    }

    #[test]
    fn test_keeps_dictionary_order() {
        let full = LetterPool::from_query("listen").unwrap();
        let words = vec!["tinsel", "enlist", "silent", "listen"];
        let table = CandidateTable::build(&full, &[6], &words);
        assert_eq!(words_of(&table, 6), words);
    }

    #[test]
    fn test_skips_words_with_foreign_letters() {
        let full = LetterPool::from_query("abc").unwrap();
        let words = vec!["Abc", "a-b", "cab"];
        let table = CandidateTable::build(&full, &[3], &words);
        assert_eq!(words_of(&table, 3), vec!["cab"]);
    }

    #[test]
    fn test_precomputed_pool_matches_word() {
        let full = LetterPool::from_query("catdog").unwrap();
        let table = CandidateTable::build(&full, &[3], &["dog"]);
        let candidate = table.candidates(3)[0];
        assert_eq!(candidate.pool, LetterPool::from_word("dog").unwrap());
    }

    #[test]
    fn test_empty_lengths() {
        let full = LetterPool::default();
        let table = CandidateTable::build(&full, &[], &["a", "b"]);
        assert!(table.is_empty());
        assert_eq!(table.len(), 0);
    }

    #[test]
    fn test_len_counts_all_lengths() {
        let full = LetterPool::from_query("catdogs").unwrap();
        let table = CandidateTable::build(&full, &[3, 4], &["cat", "dogs", "dog", "cats"]);
        assert_eq!(table.len(), 4);
    }
}
