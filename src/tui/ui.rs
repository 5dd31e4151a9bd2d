use super::tiles::{self, KEYS_PER_ROW, KEY_ROWS};
use super::update::Notice;
use super::App;
use hangman::engine::Round;
use hangman::gallows::{self, Shape};
use ratatui::{
    prelude::*,
    widgets::block::{Position, Title},
    widgets::canvas::{Canvas, Circle, Line as CanvasLine},
    widgets::*,
};

impl Widget for &App {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let border = self.create_border();

        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .horizontal_margin(1)
            .constraints(vec![Constraint::Length(34), Constraint::Fill(1)])
            .split(border.inner(area));

        let rows = Layout::default()
            .direction(Direction::Vertical)
            .vertical_margin(1)
            .constraints(vec![
                Constraint::Length(3),
                Constraint::Length(3),
                Constraint::Length(3 * KEY_ROWS.len() as u16),
                Constraint::Length(3),
                Constraint::Fill(1),
            ])
            .split(columns[1]);

        self.render_gallows(columns[0], buf);
        self.render_word(rows[0], buf);
        self.render_status(rows[1], buf);
        self.render_keys(rows[2], buf);
        self.render_input(rows[3], buf);

        border.render(area, buf);
    }
}

impl App {
    fn create_border(&self) -> Block<'_> {
        let title = Title::from(" Hangman ".bold());
        let instructions = Title::from(Line::from(vec![
            " Quit ".into(),
            "<Esc> ".blue().bold(),
            " Hint ".into(),
            "<1> ".blue().bold(),
            " New round ".into(),
            "<2> ".blue().bold(),
            " Add word ".into(),
            "<3> ".blue().bold(),
        ]));
        Block::default()
            .title(title.alignment(Alignment::Center))
            .title(
                instructions
                    .alignment(Alignment::Center)
                    .position(Position::Bottom),
            )
            .borders(Borders::ALL)
            .border_set(symbols::border::PLAIN)
    }

    fn render_gallows(&self, area: Rect, buf: &mut Buffer) {
        let wrong = self.round.as_ref().map_or(0, Round::wrong_count);
        let figure_color = if self.round.as_ref().is_some_and(Round::is_lost) {
            Color::LightRed
        } else {
            Color::White
        };

        Canvas::default()
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_type(BorderType::Rounded)
                    .border_style(Style::new().dark_gray()),
            )
            .marker(symbols::Marker::Braille)
            .x_bounds([0.0, gallows::WIDTH])
            .y_bounds([0.0, gallows::HEIGHT])
            .paint(move |ctx| {
                for part in gallows::parts(wrong) {
                    let color = if part.is_scaffold() {
                        Color::Gray
                    } else {
                        figure_color
                    };
                    match part.shape() {
                        Shape::Line { x1, y1, x2, y2 } => ctx.draw(&CanvasLine {
                            x1,
                            y1,
                            x2,
                            y2,
                            color,
                        }),
                        Shape::Circle { x, y, radius } => ctx.draw(&Circle {
                            x,
                            y,
                            radius,
                            color,
                        }),
                    }
                }
            })
            .render(area, buf);
    }

    fn render_word(&self, area: Rect, buf: &mut Buffer) {
        if self.round.is_none() {
            Paragraph::new("No word to guess".dark_gray())
                .centered()
                .block(Block::new().padding(Padding::new(0, 0, 1, 0)))
                .render(area, buf);
            return;
        }
        tiles::render_row(&self.word_tiles(), area, buf);
    }

    fn render_status(&self, area: Rect, buf: &mut Buffer) {
        let mut lines: Vec<Line<'_>> = vec![];
        if let Some(round) = self.round.as_ref() {
            let misses: String = round.misses().iter().map(|c| format!("{c} ")).collect();
            lines.push(Line::from(vec![
                "Wrong: ".bold(),
                format!("{} / {}", round.wrong_count(), round.max_wrong())
                    .magenta()
                    .bold(),
                "   Misses: ".bold(),
                misses.trim_end().to_string().red(),
            ]));
        }
        lines.push(match &self.notice {
            Notice::Info(text) => Line::from(text.as_str()),
            Notice::Success(text) => Line::from(text.as_str().light_green().bold()),
            Notice::Failure(text) => Line::from(text.as_str().light_red()),
        });

        Paragraph::new(lines)
            .centered()
            .wrap(Wrap { trim: true })
            .render(area, buf);
    }

    fn render_keys(&self, area: Rect, buf: &mut Buffer) {
        let keys = self.key_tiles();
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints(vec![Constraint::Length(3); KEY_ROWS.len()])
            .split(area);
        for (row, chunk) in rows.iter().zip(keys.chunks(KEYS_PER_ROW)) {
            tiles::render_row(chunk, *row, buf);
        }
    }

    fn render_input(&self, area: Rect, buf: &mut Buffer) {
        let (text, block) = match &self.input {
            Some(input) => (
                Line::from(vec![input.as_str().into(), "_".blue().slow_blink()]),
                Block::default()
                    .title(Title::from(" New word ".bold()).alignment(Alignment::Left))
                    .title(
                        Title::from(Line::from(vec![
                            " Add ".into(),
                            "<Enter> ".blue().bold(),
                            " Cancel ".into(),
                            "<Esc> ".blue().bold(),
                        ]))
                        .alignment(Alignment::Right),
                    )
                    .borders(Borders::ALL)
                    .border_type(BorderType::Rounded),
            ),
            None => (
                Line::from(format!("{} words in the list", self.words.len()).dark_gray()),
                Block::default()
                    .borders(Borders::ALL)
                    .border_type(BorderType::Rounded)
                    .border_style(Style::new().dark_gray()),
            ),
        };
        Paragraph::new(text).block(block).render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hangman::engine::Rules;
    use hangman::words::WordList;
    use rand::{rngs::StdRng, SeedableRng};
    use ratatui::backend::TestBackend;

    fn screen(app: &App) -> String {
        let mut terminal = Terminal::new(TestBackend::new(110, 30)).unwrap();
        terminal
            .draw(|frame| frame.render_widget(app, frame.size()))
            .unwrap();
        let buffer = terminal.backend().buffer();
        buffer.content().iter().map(|cell| cell.symbol()).collect()
    }

    #[test]
    fn render_round() {
        let mut words = WordList::new();
        words.add("cat").unwrap();
        let mut app = App::init(words, Rules::default(), StdRng::seed_from_u64(0));
        app.guess('q');

        let screen = screen(&app);
        assert!(screen.contains("Hangman"));
        assert!(screen.contains("Wrong: 1 / 6"));
        assert!(screen.contains("Sorry, 'Q' is not in the word."));
        assert!(screen.contains("1 words in the list"));
    }

    #[test]
    fn render_without_round() {
        let app = App::init(WordList::new(), Rules::default(), StdRng::seed_from_u64(0));
        let screen = screen(&app);
        assert!(screen.contains("No word to guess"));
        assert!(screen.contains("the word list is empty"));
    }
}
