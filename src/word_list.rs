//! `word_list` — reads the words a puzzle should contain.
//!
//! The format is one word per line. Surrounding whitespace is trimmed, empty
//! lines and lines starting with `#` are skipped. Words are kept exactly as
//! written (no case folding, no dictionary check) and in file order, so the
//! caller controls placement order. Duplicates are kept too: placing the same
//! word twice is a legitimate request.

/// Words to place, in placement order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WordList {
    pub words: Vec<String>,
}

impl WordList {
    /// Parse a word list from an in-memory string.
    #[must_use]
    pub fn parse_from_str(contents: &str) -> WordList {
        let words = contents
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty() && !line.starts_with('#'))
            .map(str::to_string)
            .collect();

        WordList { words }
    }

    /// Read a word list file and parse it.
    ///
    /// # Errors
    ///
    /// Will return an `Error` if unable to read a file at `path`.
    pub fn load_from_path<P: AsRef<std::path::Path>>(path: P) -> std::io::Result<WordList> {
        let path_ref = path.as_ref();

        let data = std::fs::read_to_string(path_ref).map_err(|e| {
            std::io::Error::new(
                e.kind(),
                format!("failed to read word list from '{}': {}", path_ref.display(), e)
            )
        })?;

        Ok(Self::parse_from_str(&data))
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

impl FromIterator<String> for WordList {
    fn from_iter<I: IntoIterator<Item = String>>(iter: I) -> Self {
        WordList { words: iter.into_iter().collect() }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_basic() {
        let list = WordList::parse_from_str("hello\nagain\nworld");
        assert_eq!(list.words, vec!["hello", "again", "world"]);
    }

    #[test]
    fn test_parse_preserves_case_and_order() {
        let list = WordList::parse_from_str("Zebra\napple\nMANGO");
        assert_eq!(list.words, vec!["Zebra", "apple", "MANGO"]);
    }

    #[test]
    fn test_parse_keeps_duplicates() {
        let list = WordList::parse_from_str("again\nagain\nagain");
        assert_eq!(list.len(), 3);
    }

    #[test]
    fn test_parse_skips_blank_and_comment_lines() {
        let list = WordList::parse_from_str("# animals\n\ncat\n   \n  dog  \n#bird\n");
        assert_eq!(list.words, vec!["cat", "dog"]);
    }

    #[test]
    fn test_parse_empty_input() {
        assert!(WordList::parse_from_str("").is_empty());
    }

    #[test]
    fn test_load_missing_file_names_path() {
        let err = WordList::load_from_path("definitely/not/here.txt").unwrap_err();
        assert_eq!(err.kind(), std::io::ErrorKind::NotFound);
        assert!(err.to_string().contains("definitely/not/here.txt"));
    }

    #[test]
    fn test_collect_from_strings() {
        let list: WordList = ["a", "b"].iter().map(|s| s.to_string()).collect();
        assert_eq!(list.words, vec!["a", "b"]);
    }
}
