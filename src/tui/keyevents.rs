use super::actions::Action;
use super::*;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

impl App {
    /// Map a key press to an action, depending on whether the add-word input
    /// is open
    pub fn key_action(&self, key: KeyEvent) -> Option<Action> {
        // crossterm also emits release and repeat events on Windows
        if key.kind != KeyEventKind::Press {
            return None;
        }
        if key.modifiers.contains(KeyModifiers::CONTROL) {
            return match key.code {
                KeyCode::Char('c') => Some(Action::Exit),
                _ => None,
            };
        }

        let action = if self.input.is_some() {
            match key.code {
                KeyCode::Esc => Action::CloseInput,
                KeyCode::Enter => Action::SubmitWord,
                KeyCode::Backspace => Action::DeleteChar,
                KeyCode::Char(x) => Action::InputChar(x),
                _ => return None,
            }
        } else {
            match key.code {
                KeyCode::Esc => Action::Exit,
                KeyCode::Char('1') => Action::Hint,
                KeyCode::Char('2') => Action::NewRound,
                KeyCode::Char('3') => Action::OpenInput,
                KeyCode::Char(x) if x.is_ascii_alphabetic() => Action::Guess(x),
                KeyCode::Enter if self.round_over() => Action::NewRound,
                _ => return None,
            }
        };
        Some(action)
    }
}
