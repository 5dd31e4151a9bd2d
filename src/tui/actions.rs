use super::*;
use crossterm::event::KeyEvent;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Action {
    Exit,
    Key(KeyEvent),
    Guess(char),
    Hint,
    NewRound,
    OpenInput,
    CloseInput,
    InputChar(char),
    DeleteChar,
    SubmitWord,
}

impl App {
    /// Apply an action, `None` only asks for a redraw
    pub fn update(&mut self, msg: Option<Action>) {
        if let Some(msg) = msg {
            match msg {
                Action::Exit => {
                    self.token.cancel();
                    self.exit = true;
                }
                Action::Key(key) => {
                    let action = self.key_action(key);
                    self.update(action);
                }
                Action::Guess(letter) => {
                    self.guess(letter);
                }
                Action::Hint => {
                    self.hint();
                }
                Action::NewRound => {
                    self.start_round();
                }
                Action::OpenInput => {
                    self.input = Some(String::new());
                }
                Action::CloseInput => {
                    self.input = None;
                }
                Action::InputChar(c) => {
                    if let Some(input) = self.input.as_mut() {
                        if input.chars().count() < MAX_INPUT {
                            input.push(c);
                        }
                    }
                }
                Action::DeleteChar => {
                    if let Some(input) = self.input.as_mut() {
                        input.pop();
                    }
                }
                Action::SubmitWord => {
                    self.submit_word();
                }
            }
        }
    }
}
