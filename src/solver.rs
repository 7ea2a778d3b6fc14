//! Multi-word anagram search.
//!
//! Given a pool of letters and a list of word lengths, find every way to
//! spell the whole pool as dictionary words of exactly those lengths, each
//! letter used once.
//!
//! # Algorithm
//!
//! Lengths are sorted ascending; slot `i` takes one word of length
//! `lengths[i]`. A [`CandidateTable`] keeps, per length, the words that fit
//! in the full pool. The search then walks the slots depth-first:
//!
//! 1. At slot `i`, try each candidate of that length from the slot's
//!    *dedup cursor* onward, skipping any that don't fit in what is left.
//! 2. Choose it (subtract its letters, push the word), recurse into `i + 1`,
//!    then undo (add the letters back, pop the word).
//! 3. If slot `i + 1` has the same length, recursion there starts at the
//!    chosen index + 1; otherwise at 0.
//! 4. Past the last slot, the chosen words are a solution.
//!
//! Step 3 makes the indices picked within a run of equal lengths strictly
//! increasing, so `{cat, dog}` comes out once rather than once per ordering.
//! The remaining pool is a single value mutated in place; nothing is cloned
//! per branch.
//!
//! # Error Handling
//!
//! The search itself cannot fail. [`SolverError`] covers query validation,
//! which happens before any work is done:
//!
//! - S001: `InvalidQuery` (Letters could not be read (wraps [`QueryError`]))
//! - S002: `LengthMismatch` (Lengths don't add up to the number of letters)
//! - S003: `ZeroLength` (A requested length is zero)
//!
//! # Examples
//!
//! ```
//! use cw::solver;
//!
//! let words = vec!["cat", "dog", "act", "god", "cog"];
//! let solutions = solver::solve_multi_anagram("catdog", &[3, 3], &words)?;
//!
//! let rendered: Vec<String> = solutions.iter().map(ToString::to_string).collect();
//! assert_eq!(rendered, vec!["cat dog", "cat god", "dog act", "act god"]);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! ## Bounding a search
//!
//! ```
//! use cw::solver::{self, SearchLimits, SolveStatus};
//!
//! let words = vec!["cat", "dog", "act", "god"];
//! let limits = SearchLimits { max_results: Some(1), ..SearchLimits::default() };
//! let result = solver::solve_multi_anagram_bounded("catdog", &[3, 3], &words, limits)?;
//!
//! assert_eq!(result.solutions.len(), 1);
//! assert_eq!(result.status, SolveStatus::FoundEnough);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

use std::fmt;
use std::ops::ControlFlow;
use std::time::Duration;

use instant::Instant;
use log::debug;

use crate::config::BUDGET_POLL_INTERVAL;
use crate::errors::QueryError;
use crate::letters::LetterPool;
use crate::word_index::CandidateTable;

/// Unified error type for multi-word anagram queries.
#[derive(Debug, thiserror::Error)]
pub enum SolverError {
    /// The letters could not be turned into a pool.
    #[error("invalid query: {0}")]
    InvalidQuery(#[from] Box<QueryError>),

    /// The lengths don't add up to the number of letters supplied.
    #[error("lengths add up to {length_sum} but {letter_count} letters were given")]
    LengthMismatch { letter_count: usize, length_sum: usize },

    /// Every slot must hold a word of at least one letter.
    #[error("length #{position} is zero")]
    ZeroLength { position: usize },
}

impl SolverError {
    /// Returns the error code for this error variant
    #[must_use]
    pub fn code(&self) -> &'static str {
        match self {
            SolverError::InvalidQuery(_) => "S001",
            SolverError::LengthMismatch { .. } => "S002",
            SolverError::ZeroLength { .. } => "S003",
        }
    }

    /// Returns a short description of this error type (for documentation)
    #[must_use]
    pub fn description(&self) -> &'static str {
        match self {
            SolverError::InvalidQuery(_) => "Letters could not be read",
            SolverError::LengthMismatch { .. } => "Lengths don't add up to the number of letters",
            SolverError::ZeroLength { .. } => "A requested length is zero",
        }
    }

    /// Returns detailed explanation of this error type (for documentation)
    #[must_use]
    pub fn details(&self) -> &'static str {
        match self {
            SolverError::InvalidQuery(_) => "The letter pool could not be parsed. This wraps an underlying QueryError (see Query Errors section for specific error codes).",
            SolverError::LengthMismatch { .. } => "A multi-word anagram uses every letter exactly once, so the requested word lengths must add up to the number of letters. Lengths are never padded or truncated to make them fit.",
            SolverError::ZeroLength { .. } => "Each requested length is the length of one word in every answer, so it must be at least 1.",
        }
    }

    /// Returns a helpful suggestion for this error
    #[must_use]
    pub fn help(&self) -> Option<&'static str> {
        match self {
            SolverError::LengthMismatch { .. } => Some("Example: 'catdog' has 6 letters, so use lengths like '3,3' or '2,4'"),
            SolverError::ZeroLength { .. } => Some("Remove the 0 from the lengths list"),
            SolverError::InvalidQuery(_) => None, // QueryError has its own help
        }
    }

    /// Formats the error with code and optional help text
    #[must_use]
    pub fn display_detailed(&self) -> String {
        match self {
            SolverError::InvalidQuery(qe) => {
                format!("{}\n  caused by: {}", self.code(), qe.display_detailed())
            }
            _ => crate::errors::format_error_with_code_and_help(&self.to_string(), self.code(), self.help()),
        }
    }
}

/// One complete answer: a word per slot, in ascending-length slot order.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Solution {
    words: Box<[String]>,
}

impl Solution {
    fn from_chosen(chosen: &[&str]) -> Self {
        Solution { words: chosen.iter().map(|w| (*w).to_string()).collect() }
    }

    #[must_use]
    pub fn words(&self) -> &[String] {
        &self.words
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

impl fmt::Display for Solution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.words.join(" "))
    }
}

/// Where the search hands its solutions.
pub trait SolutionSink<'w> {
    /// Called once per complete assignment, words in slot order.
    /// Returning `Break` ends the whole search.
    fn accept(&mut self, words: &[&'w str]) -> ControlFlow<()>;

    /// Polled once per visited search node; `true` ends the whole search.
    fn should_stop(&mut self) -> bool {
        false
    }
}

/// Keeps every solution, in the order found.
#[derive(Debug, Clone, Default)]
pub struct ResultCollector {
    solutions: Vec<Solution>,
}

impl ResultCollector {
    #[must_use]
    pub fn solutions(&self) -> &[Solution] {
        &self.solutions
    }

    #[must_use]
    pub fn into_solutions(self) -> Vec<Solution> {
        self.solutions
    }
}

impl<'w> SolutionSink<'w> for ResultCollector {
    fn accept(&mut self, words: &[&'w str]) -> ControlFlow<()> {
        self.solutions.push(Solution::from_chosen(words));
        ControlFlow::Continue(())
    }
}

/// Status of a bounded search.
#[derive(Debug, Clone, PartialEq)]
pub enum SolveStatus {
    /// Every branch was explored.
    Exhausted,

    /// Stopped early because the requested number of results was found.
    FoundEnough,

    /// Stopped because the time budget expired. Contains the elapsed time.
    TimedOut { elapsed: Duration },
}

/// Optional caps for [`solve_multi_anagram_bounded`]. `None` means unbounded.
#[derive(Debug, Clone, Default)]
pub struct SearchLimits {
    pub max_results: Option<usize>,
    pub time_budget: Option<Duration>,
}

/// A bounded search run (even if it stopped early).
#[derive(Debug, Clone)]
pub struct SolveResult {
    pub solutions: Vec<Solution>,
    pub status: SolveStatus,
}

impl IntoIterator for SolveResult {
    type Item = Solution;
    type IntoIter = std::vec::IntoIter<Self::Item>;

    fn into_iter(self) -> Self::IntoIter {
        self.solutions.into_iter()
    }
}

/// Simple helper to enforce a wall-clock time limit.
struct TimeBudget {
    start: Instant,
    limit: Duration,
}

impl TimeBudget {
    fn new(limit: Duration) -> Self {
        Self { start: Instant::now(), limit }
    }

    fn elapsed(&self) -> Duration {
        self.start.elapsed()
    }

    fn expired(&self) -> bool {
        self.start.elapsed() >= self.limit
    }
}

/// [`ResultCollector`] plus a result cap and a time budget.
///
/// This wraps the search from the outside; the search itself knows nothing
/// about either limit.
struct BoundedCollector {
    inner: ResultCollector,
    max_results: Option<usize>,
    budget: Option<TimeBudget>,
    nodes_visited: u64,
    stopped: Option<SolveStatus>,
}

impl BoundedCollector {
    fn new(limits: &SearchLimits) -> Self {
        BoundedCollector {
            inner: ResultCollector::default(),
            max_results: limits.max_results,
            budget: limits.time_budget.map(TimeBudget::new),
            nodes_visited: 0,
            stopped: None,
        }
    }

    fn have_enough(&self) -> bool {
        self.max_results.is_some_and(|max| self.inner.solutions.len() >= max)
    }
}

impl<'w> SolutionSink<'w> for BoundedCollector {
    fn accept(&mut self, words: &[&'w str]) -> ControlFlow<()> {
        // a cap of 0 is caught by should_stop before any solution is reached
        let _ = self.inner.accept(words);
        if self.have_enough() {
            self.stopped = Some(SolveStatus::FoundEnough);
            ControlFlow::Break(())
        } else {
            ControlFlow::Continue(())
        }
    }

    fn should_stop(&mut self) -> bool {
        if self.have_enough() {
            self.stopped = Some(SolveStatus::FoundEnough);
            return true;
        }
        self.nodes_visited += 1;
        if self.nodes_visited % BUDGET_POLL_INTERVAL == 0 {
            if let Some(budget) = &self.budget {
                if budget.expired() {
                    self.stopped = Some(SolveStatus::TimedOut { elapsed: budget.elapsed() });
                    return true;
                }
            }
        }
        false
    }
}

/// A validated multi-word anagram query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MultiAnagramQuery {
    pool: LetterPool,
    lengths: Vec<usize>,
}

impl MultiAnagramQuery {
    /// Validate `letters` against `lengths`.
    ///
    /// Letters are whitespace-stripped and case-folded; lengths may come in
    /// any order and are sorted ascending.
    ///
    /// # Errors
    ///
    /// - [`SolverError::InvalidQuery`] if `letters` contains a non-letter.
    /// - [`SolverError::ZeroLength`] if any length is 0.
    /// - [`SolverError::LengthMismatch`] if the lengths don't sum to the letter count.
    pub fn new(letters: &str, lengths: &[usize]) -> Result<Self, SolverError> {
        let pool = LetterPool::from_query(letters)?;

        if let Some(position) = lengths.iter().position(|&len| len == 0) {
            return Err(SolverError::ZeroLength { position: position + 1 });
        }

        let length_sum = lengths
            .iter()
            .try_fold(0usize, |acc, &len| acc.checked_add(len))
            .unwrap_or(usize::MAX);
        if length_sum != pool.len() {
            return Err(SolverError::LengthMismatch { letter_count: pool.len(), length_sum });
        }

        let mut lengths = lengths.to_vec();
        lengths.sort_unstable();
        Ok(MultiAnagramQuery { pool, lengths })
    }

    #[must_use]
    pub fn pool(&self) -> &LetterPool {
        &self.pool
    }

    /// Slot lengths, ascending.
    #[must_use]
    pub fn lengths(&self) -> &[usize] {
        &self.lengths
    }

    /// Build the candidate table for `words` and run the search into `sink`.
    ///
    /// Returns `Break` if the sink cut the search short.
    pub fn search<'w, S: SolutionSink<'w>>(&self, words: &[&'w str], sink: &mut S) -> ControlFlow<()> {
        let table = CandidateTable::build(&self.pool, &self.lengths, words);
        debug!(
            "searching {} slot(s) {:?} over {} candidate(s)",
            self.lengths.len(),
            self.lengths,
            table.len()
        );

        let mut search = Search {
            table: &table,
            lengths: &self.lengths,
            remaining: self.pool,
            chosen: Vec::with_capacity(self.lengths.len()),
            sink,
        };
        let flow = search.descend(0, 0);

        debug_assert_eq!(search.remaining, self.pool, "every choice must be undone");
        debug_assert!(search.chosen.is_empty(), "every choice must be undone");
        flow
    }
}

/// Depth-first state shared by every frame of one search.
struct Search<'q, 'w, S> {
    table: &'q CandidateTable<'w>,
    lengths: &'q [usize],
    remaining: LetterPool,
    chosen: Vec<&'w str>,
    sink: &'q mut S,
}

impl<'w, S: SolutionSink<'w>> Search<'_, 'w, S> {
    fn descend(&mut self, slot: usize, min_idx: usize) -> ControlFlow<()> {
        if self.sink.should_stop() {
            return ControlFlow::Break(());
        }

        let Some(&len) = self.lengths.get(slot) else {
            debug_assert!(self.remaining.is_empty(), "a full assignment must use every letter");
            return self.sink.accept(&self.chosen);
        };

        let next_shares_length = self.lengths.get(slot + 1) == Some(&len);
        let table = self.table;
        let candidates = table.candidates(len);

        for (idx, candidate) in candidates.iter().enumerate().skip(min_idx) {
            if !self.remaining.contains(&candidate.pool) {
                continue;
            }

            self.remaining.subtract(&candidate.pool);
            self.chosen.push(candidate.word);

            let next_min_idx = if next_shares_length { idx + 1 } else { 0 };
            let flow = self.descend(slot + 1, next_min_idx);

            self.chosen.pop();
            self.remaining.add(&candidate.pool);

            if flow.is_break() {
                return flow;
            }
        }

        ControlFlow::Continue(())
    }
}

/// Every multi-word anagram of `letters` with words of the given `lengths`.
///
/// Solutions list their words in ascending length order; within equal
/// lengths, in dictionary order. The list itself is in search order, not
/// sorted.
///
/// # Errors
///
/// Returns a [`SolverError`] if the query is invalid (see [`MultiAnagramQuery::new`]).
pub fn solve_multi_anagram(letters: &str, lengths: &[usize], words: &[&str]) -> Result<Vec<Solution>, SolverError> {
    let query = MultiAnagramQuery::new(letters, lengths)?;
    let mut collector = ResultCollector::default();
    let _ = query.search(words, &mut collector);
    debug!("found {} solution(s)", collector.solutions().len());
    Ok(collector.into_solutions())
}

/// Like [`solve_multi_anagram`], but stops at `limits`.
///
/// # Errors
///
/// Returns a [`SolverError`] if the query is invalid (see [`MultiAnagramQuery::new`]).
pub fn solve_multi_anagram_bounded(
    letters: &str,
    lengths: &[usize],
    words: &[&str],
    limits: SearchLimits,
) -> Result<SolveResult, SolverError> {
    let query = MultiAnagramQuery::new(letters, lengths)?;
    let started = Instant::now();

    let mut collector = BoundedCollector::new(&limits);
    let flow = query.search(words, &mut collector);

    let status = match (flow, collector.stopped.take()) {
        (ControlFlow::Break(()), Some(status)) => status,
        _ => SolveStatus::Exhausted,
    };
    let solutions = collector.inner.into_solutions();

    debug!(
        "multi-word search {:?}: {} solution(s) in {:.3}s ({:?})",
        query.lengths(),
        solutions.len(),
        started.elapsed().as_secs_f64(),
        status
    );

    Ok(SolveResult { solutions, status })
}
