use super::*;
use hangman::engine::{GuessEvent, Outcome};
use hangman::error::GameError;
use tracing::{info, warn};

/// The message shown under the word, replacing the original dialogs
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Notice {
    Info(String),
    Success(String),
    Failure(String),
}

impl Default for Notice {
    fn default() -> Self {
        Notice::Info(String::new())
    }
}

impl From<GameError> for Notice {
    fn from(e: GameError) -> Self {
        Notice::Failure(e.to_string())
    }
}

impl App {
    pub fn start_round(&mut self) {
        self.hinted.clear();
        match Round::start(&self.words, self.rules, &mut self.rng) {
            Ok(round) => {
                self.notice = Notice::Info(format!(
                    "New round, the word has {} letters.",
                    round.word().chars().count()
                ));
                self.round = Some(round);
            }
            Err(e) => {
                warn!(error = %e, "could not start a round");
                self.round = None;
                self.notice = e.into();
            }
        }
    }

    pub fn guess(&mut self, letter: char) {
        let Some(round) = self.round.as_mut() else {
            self.notice = GameError::EmptyWordList.into();
            return;
        };
        let event = round.guess(letter);
        if let Some(outcome) = event.outcome().filter(Outcome::is_over) {
            self.notice = self.round_ended(outcome);
            return;
        }
        let notice = match event {
            GuessEvent::Hit { letter, .. } => {
                Notice::Info(format!("Good guess! '{letter}' is in the word."))
            }
            GuessEvent::Miss { letter, .. } => {
                Notice::Failure(format!("Sorry, '{letter}' is not in the word."))
            }
            GuessEvent::AlreadyGuessed(letter) => {
                Notice::Info(format!("'{letter}' was already guessed."))
            }
            GuessEvent::NotALetter(c) => Notice::Failure(format!("'{c}' is not a letter.")),
            GuessEvent::RoundOver(_) => {
                Notice::Info("The round is over, press <Enter> to play again.".to_string())
            }
        };
        self.notice = notice;
    }

    pub fn hint(&mut self) {
        let Some(round) = self.round.as_mut() else {
            self.notice = GameError::EmptyWordList.into();
            return;
        };
        self.notice = match round.reveal_hint(&mut self.rng) {
            Ok(hint) => {
                self.hinted.push(hint.letter);
                if hint.outcome.is_over() {
                    self.round_ended(hint.outcome)
                } else {
                    let cost = match hint.charged {
                        0 => "free".to_string(),
                        1 => "costs 1 wrong guess".to_string(),
                        n => format!("costs {n} wrong guesses"),
                    };
                    Notice::Info(format!("Hint: '{}' ({cost}).", hint.letter))
                }
            }
            Err(e) => e.into(),
        };
    }

    pub fn submit_word(&mut self) {
        let Some(input) = self.input.as_ref() else {
            return;
        };
        match self.words.add(input) {
            Ok(word) => {
                let word = word.to_string();
                info!(%word, total = self.words.len(), "word added");
                self.notice = Notice::Success(format!("Added '{word}' to the word list."));
                self.input = None;
            }
            Err(e) => {
                self.notice = e.into();
            }
        }
    }

    /// Whether there is no round to guess in
    pub fn round_over(&self) -> bool {
        self.round.as_ref().map_or(true, Round::is_over)
    }

    fn round_ended(&self, outcome: Outcome) -> Notice {
        let word = self.round.as_ref().map(Round::word).unwrap_or_default();
        info!(?outcome, "round ended");
        match outcome {
            Outcome::Won => Notice::Success(format!("You win! You guessed '{word}'.")),
            Outcome::Lost => Notice::Failure(format!("Out of guesses. The word was: {word}")),
            Outcome::InProgress => Notice::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
    use rand::SeedableRng;

    fn app_with(words: &[&str], rules: Rules) -> App {
        let mut list = WordList::new();
        for word in words {
            list.add(word).unwrap();
        }
        App::init(list, rules, StdRng::seed_from_u64(1))
    }

    fn press(app: &mut App, code: KeyCode) {
        app.update(Some(Action::Key(KeyEvent::new(code, KeyModifiers::NONE))));
    }

    fn round(app: &App) -> &Round {
        app.round.as_ref().unwrap()
    }

    #[test]
    fn starts_with_a_round() {
        let app = app_with(&["cat"], Rules::default());
        assert_eq!(round(&app).word(), "CAT");
        assert!(!app.round_over());
    }

    #[test]
    fn play_to_win() {
        let mut app = app_with(&["cat"], Rules::default());
        press(&mut app, KeyCode::Char('c'));
        assert_eq!(round(&app).display_string(), "C _ _");
        press(&mut app, KeyCode::Char('x'));
        assert_eq!(round(&app).wrong_count(), 1);
        assert!(matches!(app.notice, Notice::Failure(_)));
        press(&mut app, KeyCode::Char('a'));
        press(&mut app, KeyCode::Char('t'));
        assert!(round(&app).is_won());
        assert_eq!(
            app.notice,
            Notice::Success("You win! You guessed 'CAT'.".to_string())
        );

        // Enter starts over once the round is finished
        press(&mut app, KeyCode::Enter);
        assert_eq!(round(&app).display_string(), "_ _ _");
    }

    #[test]
    fn play_to_lose() {
        let mut app = app_with(&["dog"], Rules { max_wrong: 1, hint_cost: 1 });
        press(&mut app, KeyCode::Char('z'));
        assert!(round(&app).is_lost());
        assert_eq!(
            app.notice,
            Notice::Failure("Out of guesses. The word was: DOG".to_string())
        );
        press(&mut app, KeyCode::Char('d'));
        assert!(!round(&app).is_guessed('D'));
    }

    #[test]
    fn hint_is_remembered_until_next_round() {
        let mut app = app_with(&["cat"], Rules::default());
        press(&mut app, KeyCode::Char('c'));
        press(&mut app, KeyCode::Char('a'));
        press(&mut app, KeyCode::Char('1'));
        assert_eq!(app.hinted, vec!['T']);
        assert!(round(&app).is_won());
        assert_eq!(round(&app).wrong_count(), 1);

        press(&mut app, KeyCode::Char('1'));
        assert_eq!(app.notice, Notice::from(GameError::NoHintAvailable));
        assert_eq!(app.hinted, vec!['T']);

        press(&mut app, KeyCode::Char('2'));
        assert!(app.hinted.is_empty());
    }

    #[test]
    fn add_word_through_input() {
        let mut app = app_with(&["cat"], Rules::default());
        press(&mut app, KeyCode::Char('3'));
        assert_eq!(app.input, Some(String::new()));

        // letters go to the input, not to the round
        for c in "dog".chars() {
            press(&mut app, KeyCode::Char(c));
        }
        assert!(round(&app).guessed().is_empty());
        press(&mut app, KeyCode::Char('!'));
        press(&mut app, KeyCode::Enter);
        assert_eq!(
            app.notice,
            Notice::from(GameError::InvalidWord("DOG!".to_string()))
        );
        assert_eq!(app.input.as_deref(), Some("dog!"));

        press(&mut app, KeyCode::Backspace);
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.input, None);
        assert!(app.words.contains("DOG"));

        press(&mut app, KeyCode::Char('3'));
        for c in "Cat".chars() {
            press(&mut app, KeyCode::Char(c));
        }
        press(&mut app, KeyCode::Enter);
        assert_eq!(
            app.notice,
            Notice::from(GameError::DuplicateWord("CAT".to_string()))
        );
        press(&mut app, KeyCode::Esc);
        assert_eq!(app.input, None);
        assert!(!app.exit);
        assert_eq!(app.words.len(), 2);
    }

    #[test]
    fn empty_word_list_is_reported() {
        let mut app = app_with(&[], Rules::default());
        assert!(app.round.is_none());
        assert_eq!(app.notice, Notice::from(GameError::EmptyWordList));

        press(&mut app, KeyCode::Char('q'));
        assert_eq!(app.notice, Notice::from(GameError::EmptyWordList));

        press(&mut app, KeyCode::Char('3'));
        for c in "fox".chars() {
            press(&mut app, KeyCode::Char(c));
        }
        press(&mut app, KeyCode::Enter);
        press(&mut app, KeyCode::Enter);
        assert_eq!(round(&app).word(), "FOX");
    }

    #[test]
    fn input_is_limited() {
        let mut app = app_with(&["cat"], Rules::default());
        press(&mut app, KeyCode::Char('3'));
        for _ in 0..MAX_INPUT + 5 {
            press(&mut app, KeyCode::Char('a'));
        }
        assert_eq!(app.input.as_ref().map(String::len), Some(MAX_INPUT));
    }

    #[test]
    fn escape_and_ctrl_c_exit() {
        let mut app = app_with(&["cat"], Rules::default());
        press(&mut app, KeyCode::Esc);
        assert!(app.exit);
        assert!(app.token.is_cancelled());

        let mut app = app_with(&["cat"], Rules::default());
        press(&mut app, KeyCode::Char('3'));
        app.update(Some(Action::Key(KeyEvent::new(
            KeyCode::Char('c'),
            KeyModifiers::CONTROL,
        ))));
        assert!(app.exit);
    }
}
