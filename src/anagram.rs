//! Single-word anagrams: words that use every supplied letter exactly once.

use crate::errors::QueryError;
use crate::letters::LetterPool;

/// Dictionary words that are exact anagrams of `letters`, in dictionary order.
///
/// `letters` may contain spaces and any case (`"u q s o t e n i"`).
///
/// # Errors
///
/// Returns [`QueryError::InvalidLetter`] if `letters` holds anything but letters and whitespace.
pub fn find_anagrams<'w>(letters: &str, words: &[&'w str]) -> Result<Vec<&'w str>, Box<QueryError>> {
    let target = LetterPool::from_query(letters)?;
    Ok(words
        .iter()
        .copied()
        .filter(|word| word.len() == target.len() && LetterPool::from_word(word) == Some(target))
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_listen() {
        let words = vec!["enlist", "google", "inlets", "listen", "silent", "tinsel", "lister"];
        assert_eq!(
            find_anagrams("listen", &words).unwrap(),
            vec!["enlist", "inlets", "listen", "silent", "tinsel"]
        );
    }

    #[test]
    fn test_spaces_and_case_ignored() {
        let words = vec!["question", "quotient"];
        assert_eq!(find_anagrams("U Q S O T E N I", &words).unwrap(), vec!["question"]);
    }

    #[test]
    fn test_multiplicity_matters() {
        let words = vec!["aab", "abb", "bab"];
        assert_eq!(find_anagrams("bba", &words).unwrap(), vec!["abb", "bab"]);
    }

    #[test]
    fn test_no_anagrams() {
        let words = vec!["cat", "dog"];
        assert!(find_anagrams("xyz", &words).unwrap().is_empty());
    }

    #[test]
    fn test_empty_letters_match_nothing() {
        let words = vec!["cat"];
        assert!(find_anagrams("", &words).unwrap().is_empty());
    }

    #[test]
    fn test_invalid_letters() {
        let words = vec!["cat"];
        assert!(matches!(
            *find_anagrams("c4t", &words).unwrap_err(),
            QueryError::InvalidLetter { invalid_char: '4', .. }
        ));
    }
}
