//! Column layout for result lists.

use std::fmt::Write;

/// Lay `items` out `columns` per line.
///
/// Every item is left-justified to the width of the longest item plus two;
/// a newline follows every `columns`-th item and the last one. No items, no
/// output. Callers sort beforehand.
#[must_use]
pub fn columnize<S: AsRef<str>>(items: &[S], columns: usize) -> String {
    let columns = columns.max(1);
    let col_width = items.iter().map(|s| s.as_ref().chars().count()).max().unwrap_or(0) + 2;

    let mut out = String::new();
    for (index, item) in items.iter().enumerate() {
        // NB: writing to a String never fails
        let _ = write!(out, "{:<col_width$}", item.as_ref());
        if index % columns == columns - 1 || index == items.len() - 1 {
            out.push('\n');
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty() {
        let items: Vec<&str> = Vec::new();
        assert_eq!(columnize(&items, 5), "");
    }

    #[test]
    fn test_single_row() {
        assert_eq!(columnize(&["cat", "dog"], 5), "cat  dog  \n");
    }

    #[test]
    fn test_wraps_after_columns() {
        let items = ["a", "bb", "c", "d", "e"];
        assert_eq!(columnize(&items, 2), "a   bb  \nc   d   \ne   \n");
    }

    #[test]
    fn test_exact_multiple_has_no_blank_line() {
        let items = ["ab", "cd", "ef", "gh"];
        assert_eq!(columnize(&items, 2), "ab  cd  \nef  gh  \n");
    }

    #[test]
    fn test_one_column() {
        assert_eq!(columnize(&["x", "yz"], 1), "x   \nyz  \n");
    }

    #[test]
    fn test_zero_columns_treated_as_one() {
        assert_eq!(columnize(&["x"], 0), "x  \n");
    }

    #[test]
    fn test_multi_word_items() {
        let items = vec!["cat dog".to_string(), "act god".to_string()];
        assert_eq!(columnize(&items, 5), "cat dog  act god  \n");
    }
}
