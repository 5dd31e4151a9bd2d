use rand::seq::IndexedRandom;
use rand::Rng;
use rustc_hash::FxHashSet;
use std::fmt;
use tracing::{debug, info};

use crate::error::GameError;
use crate::words::WordList;

/// Wrong guesses allowed when nothing else is configured, one per figure part
pub const DEFAULT_MAX_WRONG: usize = 6;

/// Placeholder shown for letters that have not been guessed yet
pub const MASK: char = '_';

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Outcome {
    InProgress,
    Won,
    Lost,
}

impl Outcome {
    pub fn is_over(&self) -> bool {
        !matches!(self, Outcome::InProgress)
    }
}

/// What a single call to [`Round::guess`] did
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum GuessEvent {
    /// The letter is in the word
    Hit { letter: char, outcome: Outcome },
    /// The letter is not in the word, one wrong guess was charged
    Miss { letter: char, outcome: Outcome },
    /// The letter was tried before, nothing changed
    AlreadyGuessed(char),
    /// Not a letter A-Z, nothing changed
    NotALetter(char),
    /// The round has already ended, nothing changed
    RoundOver(Outcome),
}

impl GuessEvent {
    /// The outcome after the guess, if the guess changed anything
    pub fn outcome(&self) -> Option<Outcome> {
        match self {
            GuessEvent::Hit { outcome, .. } | GuessEvent::Miss { outcome, .. } => Some(*outcome),
            _ => None,
        }
    }
}

/// A letter revealed by [`Round::reveal_hint`]
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Hint {
    pub letter: char,
    /// Wrong guesses actually charged for the hint
    pub charged: usize,
    pub outcome: Outcome,
}

/// Tunables of a round
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Rules {
    /// The round is lost once this many wrong guesses were made, at least 1
    pub max_wrong: usize,
    /// Wrong guesses charged for every hint
    pub hint_cost: usize,
}

impl Default for Rules {
    fn default() -> Self {
        Rules {
            max_wrong: DEFAULT_MAX_WRONG,
            hint_cost: 1,
        }
    }
}

/// State of one round: the secret word, the letters tried so far and the
/// number of wrong guesses.
///
/// The outcome is derived from that state. Once it is [`Outcome::Won`] or
/// [`Outcome::Lost`] every further guess or hint is rejected without touching
/// the state.
#[derive(Clone, Debug, PartialEq)]
pub struct Round {
    word: String,
    letters: FxHashSet<char>,
    guessed: FxHashSet<char>,
    wrong: usize,
    rules: Rules,
}

impl Round {
    /// Start a round with a word picked uniformly at random from `words`.
    ///
    /// # Example
    ///
    /// ```
    /// use hangman::engine::{Round, Rules, Outcome};
    /// use hangman::words::WordList;
    /// use rand::{rngs::StdRng, SeedableRng};
    ///
    /// let mut rng = StdRng::seed_from_u64(7);
    /// let round = Round::start(&WordList::builtin(), Rules::default(), &mut rng).unwrap();
    /// assert_eq!(round.wrong_count(), 0);
    /// assert_eq!(round.outcome(), Outcome::InProgress);
    /// assert!(WordList::builtin().contains(round.word()));
    ///
    /// let empty = Round::start(&WordList::new(), Rules::default(), &mut rng);
    /// assert!(empty.is_err());
    /// ```
    pub fn start<R: Rng + ?Sized>(
        words: &WordList,
        rules: Rules,
        rng: &mut R,
    ) -> Result<Self, GameError> {
        let word = words
            .as_slice()
            .choose(rng)
            .ok_or(GameError::EmptyWordList)?;
        let round = Self::with_word(word, rules);
        info!(length = round.word.len(), max_wrong = round.rules.max_wrong, "round started");
        debug!(word = %round.word, "secret word");
        Ok(round)
    }

    /// Start a round with a known word.
    ///
    /// The word is uppercased. Characters other than A-Z are shown as they
    /// are and never have to be guessed.
    pub fn with_word(word: &str, rules: Rules) -> Self {
        let word = word.to_uppercase();
        let letters = word.chars().filter(char::is_ascii_uppercase).collect();
        Round {
            word,
            letters,
            guessed: FxHashSet::default(),
            wrong: 0,
            rules: Rules {
                max_wrong: rules.max_wrong.max(1),
                ..rules
            },
        }
    }

    /// Guess a single letter.
    ///
    /// # Example
    ///
    /// ```
    /// use hangman::engine::{Round, Rules, GuessEvent, Outcome};
    /// let mut round = Round::with_word("dog", Rules { max_wrong: 1, hint_cost: 1 });
    /// assert_eq!(
    ///     round.guess('z'),
    ///     GuessEvent::Miss { letter: 'Z', outcome: Outcome::Lost }
    /// );
    /// assert_eq!(round.guess('d'), GuessEvent::RoundOver(Outcome::Lost));
    /// assert_eq!(round.display_string(), "_ _ _");
    /// ```
    pub fn guess(&mut self, letter: char) -> GuessEvent {
        let outcome = self.outcome();
        if outcome.is_over() {
            return GuessEvent::RoundOver(outcome);
        }
        if !letter.is_ascii_alphabetic() {
            return GuessEvent::NotALetter(letter);
        }
        let letter = letter.to_ascii_uppercase();
        if !self.guessed.insert(letter) {
            return GuessEvent::AlreadyGuessed(letter);
        }

        let event = if self.letters.contains(&letter) {
            GuessEvent::Hit {
                letter,
                outcome: self.outcome(),
            }
        } else {
            self.wrong += 1;
            GuessEvent::Miss {
                letter,
                outcome: self.outcome(),
            }
        };
        debug!(?event, wrong = self.wrong, "guess");
        event
    }

    /// Reveal a random letter of the word that has not been guessed yet.
    ///
    /// The letter is guessed as with [`Round::guess`], which always hits, and
    /// the hint is charged as `hint_cost` wrong guesses on top. The charge
    /// never pushes the count past `max_wrong`. A hint that completes the
    /// word wins the round even if the charge used up the last try.
    ///
    /// Fails with [`GameError::NoHintAvailable`] once every letter is known,
    /// which includes a won round, and with [`GameError::RoundOver`] on a
    /// lost round.
    ///
    /// # Example
    ///
    /// ```
    /// use hangman::engine::{Round, Rules, Outcome};
    /// use hangman::error::GameError;
    /// use rand::{rngs::StdRng, SeedableRng};
    ///
    /// let mut rng = StdRng::seed_from_u64(0);
    /// let mut round = Round::with_word("ox", Rules::default());
    /// round.guess('o');
    /// let hint = round.reveal_hint(&mut rng).unwrap();
    /// assert_eq!(hint.letter, 'X');
    /// assert_eq!(hint.outcome, Outcome::Won);
    /// assert_eq!(round.reveal_hint(&mut rng), Err(GameError::NoHintAvailable));
    /// ```
    pub fn reveal_hint<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Result<Hint, GameError> {
        let mut candidates: Vec<char> = self.letters.difference(&self.guessed).copied().collect();
        if candidates.is_empty() {
            return Err(GameError::NoHintAvailable);
        }
        if self.is_lost() {
            return Err(GameError::RoundOver);
        }
        // set iteration order is unspecified, sort so a seeded rng picks reproducibly
        candidates.sort_unstable();
        let letter = *candidates.choose(rng).ok_or(GameError::NoHintAvailable)?;

        self.guessed.insert(letter);
        let before = self.wrong;
        self.wrong = (self.wrong + self.rules.hint_cost).min(self.rules.max_wrong);

        let hint = Hint {
            letter,
            charged: self.wrong - before,
            outcome: self.outcome(),
        };
        info!(letter = %hint.letter, charged = hint.charged, "hint revealed");
        Ok(hint)
    }

    /// The word with every letter that has not been guessed replaced by `_`,
    /// letters separated by single spaces.
    ///
    /// # Example
    ///
    /// ```
    /// use hangman::engine::{Round, Rules};
    /// let mut round = Round::with_word("cat", Rules::default());
    /// round.guess('c');
    /// assert_eq!(round.display_string(), "C _ _");
    /// ```
    pub fn display_string(&self) -> String {
        spaced(self.masked().chars())
    }

    /// Like [`Round::display_string`] without separators, one character per
    /// character of the word
    pub fn masked(&self) -> String {
        self.word
            .chars()
            .map(|c| self.reveal(c).unwrap_or(MASK))
            .collect()
    }

    /// The full word spaced like [`Round::display_string`]
    pub fn solution_string(&self) -> String {
        spaced(self.word.chars())
    }

    /// The character shown at a position, `None` while it is still hidden
    pub fn reveal(&self, c: char) -> Option<char> {
        if !self.letters.contains(&c) || self.guessed.contains(&c) {
            Some(c)
        } else {
            None
        }
    }

    pub fn outcome(&self) -> Outcome {
        if self.letters.is_subset(&self.guessed) {
            Outcome::Won
        } else if self.wrong >= self.rules.max_wrong {
            Outcome::Lost
        } else {
            Outcome::InProgress
        }
    }

    pub fn is_won(&self) -> bool {
        self.outcome() == Outcome::Won
    }

    pub fn is_lost(&self) -> bool {
        self.outcome() == Outcome::Lost
    }

    pub fn is_over(&self) -> bool {
        self.outcome().is_over()
    }

    pub fn word(&self) -> &str {
        &self.word
    }

    pub fn wrong_count(&self) -> usize {
        self.wrong
    }

    pub fn max_wrong(&self) -> usize {
        self.rules.max_wrong
    }

    pub fn remaining_tries(&self) -> usize {
        self.rules.max_wrong - self.wrong
    }

    pub fn is_guessed(&self, letter: char) -> bool {
        self.guessed.contains(&letter.to_ascii_uppercase())
    }

    /// Whether the letter is part of the word
    pub fn contains(&self, letter: char) -> bool {
        self.letters.contains(&letter.to_ascii_uppercase())
    }

    /// All letters tried so far, in alphabetical order
    pub fn guessed(&self) -> Vec<char> {
        let mut guessed: Vec<char> = self.guessed.iter().copied().collect();
        guessed.sort_unstable();
        guessed
    }

    /// Letters tried that are not in the word, in alphabetical order
    pub fn misses(&self) -> Vec<char> {
        let mut misses: Vec<char> = self.guessed.difference(&self.letters).copied().collect();
        misses.sort_unstable();
        misses
    }
}

impl fmt::Display for Round {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.display_string())
    }
}

fn spaced(chars: impl Iterator<Item = char>) -> String {
    let mut res = String::new();
    for (i, c) in chars.enumerate() {
        if i > 0 {
            res.push(' ');
        }
        res.push(c);
    }
    res
}
