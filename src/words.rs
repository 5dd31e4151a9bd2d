use anyhow::{Context, Result};
use rustc_hash::FxHashSet;
use std::fs::File;
use std::io::{prelude::*, BufReader};
use std::path::Path;
use tracing::{debug, warn};

use crate::error::GameError;

/// Words shipped with the game.
pub const DEFAULT_WORDS: [&str; 15] = [
    "PYTHON",
    "DEVELOPER",
    "HANGMAN",
    "COMPUTER",
    "PROGRAMMING",
    "ALGORITHM",
    "FUNCTION",
    "VARIABLE",
    "STRUCTURE",
    "NETWORK",
    "DATABASE",
    "FRAMEWORK",
    "INTERFACE",
    "PACKAGE",
    "MODULE",
];

/// The pool secret words are drawn from.
///
/// Entries are always uppercase ASCII letters and unique. The list can only
/// grow, through [`WordList::add`].
#[derive(Clone, Debug, Default, PartialEq)]
pub struct WordList {
    words: Vec<String>,
    index: FxHashSet<String>,
}

impl WordList {
    /// Create an empty word list
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a word list with the built-in words
    ///
    /// # Example
    ///
    /// ```
    /// use hangman::words::WordList;
    /// let words = WordList::builtin();
    /// assert_eq!(words.len(), 15);
    /// assert!(words.contains("hangman"));
    /// ```
    pub fn builtin() -> Self {
        let mut list = Self::new();
        for word in DEFAULT_WORDS {
            list.push_unchecked(word.to_string());
        }
        list
    }

    /// Normalize and append a word.
    ///
    /// Surrounding whitespace is trimmed and the word is uppercased. Empty
    /// input, anything other than the letters A-Z, and words already in the
    /// list are rejected and leave the list untouched.
    ///
    /// # Example
    ///
    /// ```
    /// use hangman::words::WordList;
    /// use hangman::error::GameError;
    /// let mut words = WordList::new();
    /// assert_eq!(words.add(" rust ").unwrap(), "RUST");
    /// assert_eq!(words.add("Rust"), Err(GameError::DuplicateWord("RUST".into())));
    /// assert_eq!(words.add("c++"), Err(GameError::InvalidWord("C++".into())));
    /// assert_eq!(words.len(), 1);
    /// ```
    pub fn add(&mut self, word: &str) -> Result<&str, GameError> {
        let word = normalize(word);
        if word.is_empty() || !word.chars().all(|c| c.is_ascii_uppercase()) {
            debug!(%word, "rejected invalid word");
            return Err(GameError::InvalidWord(word));
        }
        if self.index.contains(&word) {
            debug!(%word, "rejected duplicate word");
            return Err(GameError::DuplicateWord(word));
        }
        self.push_unchecked(word);
        Ok(self.words[self.words.len() - 1].as_str())
    }

    /// Read a newline separated word list.
    ///
    /// Blank lines and lines starting with `#` are skipped. Duplicates are
    /// dropped with a warning, any other invalid entry fails the whole read.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        let mut list = Self::new();
        let reader = BufReader::new(reader);
        for (i, line) in reader.lines().enumerate() {
            let line = line.context("Error reading line")?;
            let entry = line.trim();
            if entry.is_empty() || entry.starts_with('#') {
                continue;
            }
            match list.add(entry) {
                Ok(_) => {}
                Err(GameError::DuplicateWord(word)) => {
                    warn!(line = i + 1, %word, "skipping duplicate word");
                }
                Err(e) => {
                    return Err(e).with_context(|| format!("Invalid entry on line {}", i + 1))
                }
            }
        }
        Ok(list)
    }

    /// Load a word list from a file, see [`WordList::from_reader`]
    pub fn load(path: &Path) -> Result<Self> {
        let file = File::open(path)
            .with_context(|| format!("Could not open word list {}", path.display()))?;
        Self::from_reader(file)
            .with_context(|| format!("Could not read word list {}", path.display()))
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Case-insensitive membership check
    pub fn contains(&self, word: &str) -> bool {
        self.index.contains(&normalize(word))
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.words.iter().map(String::as_str)
    }

    pub fn as_slice(&self) -> &[String] {
        &self.words
    }

    fn push_unchecked(&mut self, word: String) {
        self.index.insert(word.clone());
        self.words.push(word);
    }
}

fn normalize(word: &str) -> String {
    word.trim().to_uppercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_words_are_valid() {
        let words = WordList::builtin();
        assert_eq!(words.len(), DEFAULT_WORDS.len());
        for word in words.iter() {
            assert!(word.chars().all(|c| c.is_ascii_uppercase()));
        }
    }

    #[test]
    fn add_rejects_invalid_input() {
        let mut words = WordList::builtin();
        let before = words.clone();

        assert_eq!(words.add(""), Err(GameError::InvalidWord("".into())));
        assert_eq!(words.add("   "), Err(GameError::InvalidWord("".into())));
        assert_eq!(
            words.add("two words"),
            Err(GameError::InvalidWord("TWO WORDS".into()))
        );
        assert_eq!(words.add("abc1"), Err(GameError::InvalidWord("ABC1".into())));
        assert_eq!(words.add("café"), Err(GameError::InvalidWord("CAFÉ".into())));
        assert_eq!(
            words.add("python"),
            Err(GameError::DuplicateWord("PYTHON".into()))
        );
        assert_eq!(words, before);
    }

    #[test]
    fn add_appends_uppercase() {
        let mut words = WordList::builtin();
        assert_eq!(words.add("\tcompiler\n"), Ok("COMPILER"));
        assert_eq!(words.len(), 16);
        assert_eq!(words.iter().last(), Some("COMPILER"));
        assert!(words.contains("Compiler"));
    }

    #[test]
    fn read_word_file() -> Result<()> {
        let data = "# languages\nrust\n\n  Go  \nRUST\nzig\n";
        let words = WordList::from_reader(data.as_bytes())?;
        assert_eq!(words.iter().collect::<Vec<_>>(), vec!["RUST", "GO", "ZIG"]);
        Ok(())
    }

    #[test]
    fn read_word_file_reports_line() {
        let data = "rust\nc++\n";
        let err = WordList::from_reader(data.as_bytes()).unwrap_err();
        assert!(format!("{err:#}").contains("line 2"));
    }

    #[test]
    fn read_empty_word_file() -> Result<()> {
        let words = WordList::from_reader("# nothing here\n".as_bytes())?;
        assert!(words.is_empty());
        Ok(())
    }
}
