use thiserror::Error;

/// Failures reported by the rules engine and the word list.
///
/// None of these are fatal to the process: the UI shows them in the status
/// line and the round (if any) carries on.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("the word list is empty, add a word first")]
    EmptyWordList,
    #[error("no hints available")]
    NoHintAvailable,
    #[error("the round is over")]
    RoundOver,
    #[error("`{0}` is not a word, only letters are allowed")]
    InvalidWord(String),
    #[error("`{0}` is already in the list")]
    DuplicateWord(String),
}
