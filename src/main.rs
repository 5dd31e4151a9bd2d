use clap::Parser;
use color_eyre::eyre::{eyre, Result};

use hangman::config::Config;
use hangman::logging;

mod tui;

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::parse();
    tui::install_hooks()?;
    logging::init_tracing(config.log_file.as_deref()).map_err(|e| eyre!("{e:#}"))?;
    let words = config.word_list().map_err(|e| eyre!("{e:#}"))?;

    let mut terminal = tui::init()?;
    let app_result = tui::App::init(words, config.rules(), config.rng())
        .run(&mut terminal)
        .await;
    tui::restore()?;
    app_result?;
    Ok(())
}
