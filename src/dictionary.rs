//! `dictionary`: load and normalize the word list the lookups run against.
//!
//! The dictionary can be read from a file (native builds) or parsed from an
//! in-memory string (everywhere, including WebAssembly, where there is no
//! filesystem).
//!
//! The parsing logic:
//! - One word per line.
//! - Each line is trimmed and lowercased.
//! - Lines that are empty, or contain anything other than ASCII letters after
//!   lowercasing (hyphens, apostrophes, digits, accented letters), are skipped.
//! - Duplicates (e.g. "Polish" and "polish") are dropped, keeping the first occurrence.
//!
//! Unlike a sorted list, the output keeps the file's order. The multi-word
//! anagram search numbers candidates by this order, so it must be the same
//! every time the same source is loaded; it is, because nothing here depends
//! on hashing order.

use std::collections::HashSet;

/// A processed, ready-to-use dictionary.
#[derive(Debug, Clone, Default)]
pub struct Dictionary {
    /// Lowercase `a`-`z` words in first-seen order.
    /// Example: `["aardvark", "abacus", ...]`
    pub words: Vec<String>,
}

impl Dictionary {
    /// Parse a raw word list from an in-memory string.
    ///
    /// This is **WASM-safe** because it doesn't touch the filesystem.
    ///
    /// Steps:
    /// 1. Splits the input into lines.
    /// 2. Trims and lowercases each line.
    /// 3. Skips empty lines and lines with anything but `a`-`z`.
    /// 4. Drops repeats, keeping the first occurrence in place.
    #[must_use]
    pub fn parse_from_str(contents: &str) -> Dictionary {
        // Words already kept; a HashSet here is only a membership test, so
        // the output order still comes from the file alone.
        let mut seen: HashSet<String> = HashSet::new();

        // Steps 1-4 in a single `filter_map` pass.
        let words = contents
            .lines()
            .filter_map(|raw_line| {
                // Step 2: "  Polish\r" and "polish" normalize to the same word.
                let word = raw_line.trim().to_lowercase();

                // Step 3: the letter pool only has slots for a-z, so words
                // like "x-ray", "it's" or "café" could never be spelled.
                if word.is_empty() || !word.bytes().all(|b| b.is_ascii_lowercase()) {
                    None
                // Step 4: `insert` returns false for a word we've seen.
                } else if seen.insert(word.clone()) {
                    Some(word)
                } else {
                    None
                }
            })
            .collect();

        Dictionary { words }
    }

    /// Native-only convenience method: read from a file path and parse.
    ///
    /// # Errors
    ///
    /// Will return an `Error` if unable to read a file at `path`.
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load_from_path<P: AsRef<std::path::Path>>(path: P) -> std::io::Result<Dictionary> {
        let path_ref = path.as_ref();

        // System word lists are not always clean UTF-8, so decode lossily
        // rather than refusing the whole file.
        let bytes = std::fs::read(path_ref).map_err(|e| {
            std::io::Error::new(
                e.kind(),
                format!("failed to read dictionary from '{}': {}", path_ref.display(), e),
            )
        })?;

        let dictionary = Self::parse_from_str(&String::from_utf8_lossy(&bytes));
        log::debug!("Loaded {} words from {}", dictionary.len(), path_ref.display());
        Ok(dictionary)
    }

    /// Borrowed view of the words, the shape every lookup takes.
    #[must_use]
    pub fn as_strs(&self) -> Vec<&str> {
        self.words.iter().map(String::as_str).collect()
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_basic() {
        let dictionary = Dictionary::parse_from_str("cat\ndog\nbird");
        assert_eq!(dictionary.words, vec!["cat", "dog", "bird"]);
    }

    #[test]
    fn test_parse_keeps_file_order() {
        let dictionary = Dictionary::parse_from_str("zebra\napple\nmango");
        assert_eq!(dictionary.words, vec!["zebra", "apple", "mango"]);
    }

    #[test]
    fn test_parse_deduplicates_keeping_first() {
        let dictionary = Dictionary::parse_from_str("Polish\ncat\npolish\ncat\ndog");
        assert_eq!(dictionary.words, vec!["polish", "cat", "dog"]);
    }

    #[test]
    fn test_parse_normalizes_to_lowercase() {
        let dictionary = Dictionary::parse_from_str("CAT\nDog\nBIRD");
        assert_eq!(dictionary.words, vec!["cat", "dog", "bird"]);
    }

    #[test]
    fn test_parse_skips_non_alphabetic() {
        let input = "cat\nit's\nx-ray\nr2d2\ncafé\ndog\nice cream";
        let dictionary = Dictionary::parse_from_str(input);
        assert_eq!(dictionary.words, vec!["cat", "dog"]);
    }

    #[test]
    fn test_parse_skips_empty_lines_and_trims() {
        let dictionary = Dictionary::parse_from_str("  cat  \n\n\r\n\tdog\r\n");
        assert_eq!(dictionary.words, vec!["cat", "dog"]);
    }

    #[test]
    fn test_parse_empty_input() {
        let dictionary = Dictionary::parse_from_str("");
        assert!(dictionary.is_empty());
        assert_eq!(dictionary.len(), 0);
    }

    #[test]
    fn test_parse_is_deterministic() {
        let input = "b\na\nc\nA\nb";
        assert_eq!(Dictionary::parse_from_str(input).words, Dictionary::parse_from_str(input).words);
    }

    #[test]
    fn test_as_strs() {
        let dictionary = Dictionary::parse_from_str("cat\ndog");
        assert_eq!(dictionary.as_strs(), vec!["cat", "dog"]);
    }

    #[test]
    fn test_load_missing_file_names_path() {
        let err = Dictionary::load_from_path("/definitely/not/here/words").unwrap_err();
        assert!(err.to_string().contains("/definitely/not/here/words"));
    }
}
