use std::io::{self, stdout, Stdout};

use color_eyre::config::HookBuilder;
use crossterm::{execute, terminal::*};
use rand::rngs::StdRng;
use ratatui::prelude::*;
use tokio::sync::mpsc;
use tokio_util::sync::CancellationToken;

use hangman::engine::{Round, Rules};
use hangman::words::WordList;

use actions::Action;
use update::Notice;

mod actions;
mod events;
mod keyevents;
mod tiles;
mod ui;
mod update;

/// Longest word accepted in the add-word input
const MAX_INPUT: usize = 24;

/// A type alias for the terminal type used in this application
pub type Tui = Terminal<CrosstermBackend<Stdout>>;

/// Restore the terminal before panics and errors are reported
pub fn install_hooks() -> color_eyre::Result<()> {
    let (panic_hook, eyre_hook) = HookBuilder::default().into_hooks();

    let panic_hook = panic_hook.into_panic_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let _ = restore();
        panic_hook(panic_info);
    }));

    let eyre_hook = eyre_hook.into_eyre_hook();
    color_eyre::eyre::set_hook(Box::new(move |error| {
        let _ = restore();
        eyre_hook(error)
    }))?;
    Ok(())
}

/// Initialize the terminal
pub fn init() -> io::Result<Tui> {
    execute!(stdout(), EnterAlternateScreen)?;
    enable_raw_mode()?;
    Terminal::new(CrosstermBackend::new(stdout()))
}

/// Restore the terminal to its original state
pub fn restore() -> io::Result<()> {
    execute!(stdout(), LeaveAlternateScreen)?;
    disable_raw_mode()?;
    Ok(())
}

pub struct App {
    exit: bool,
    words: WordList,
    rules: Rules,
    rng: StdRng,
    round: Option<Round>,
    hinted: Vec<char>,
    notice: Notice,
    input: Option<String>,
    action_tx: mpsc::UnboundedSender<Option<Action>>,
    action_rx: mpsc::UnboundedReceiver<Option<Action>>,
    token: CancellationToken,
}

impl App {
    /// Create the app and start the first round
    pub fn init(words: WordList, rules: Rules, rng: StdRng) -> Self {
        let (action_tx, action_rx) = mpsc::unbounded_channel();

        let mut app = App {
            exit: false,
            words,
            rules,
            rng,
            round: None,
            hinted: vec![],
            notice: Notice::default(),
            input: None,
            action_tx,
            action_rx,
            token: CancellationToken::new(),
        };
        app.start_round();
        app
    }

    /// runs the application's main loop until the user quits
    pub async fn run(&mut self, terminal: &mut Tui) -> io::Result<()> {
        let task = self.handle_events(self.action_tx.clone());

        while !self.exit {
            terminal.draw(|frame| self.render_frame(frame))?;

            if let Some(action) = self.action_rx.recv().await {
                self.update(action);
            }
        }
        self.token.cancel();
        task.abort();
        Ok(())
    }

    fn render_frame(&self, frame: &mut Frame) {
        frame.render_widget(self, frame.size());
    }
}
