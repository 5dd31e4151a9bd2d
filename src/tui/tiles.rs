use super::*;
use ratatui::widgets::*;

/// First letters of the rows of the alphabet grid
pub const KEY_ROWS: [char; 3] = ['A', 'J', 'S'];
pub const KEYS_PER_ROW: usize = 9;

#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum Status {
    /// Not guessed yet
    Unknown,
    /// Guessed and in the word
    Revealed,
    /// Revealed by a hint
    Hinted,
    /// Guessed and not in the word
    Absent,
    /// Never found, shown after the round was lost
    Missed,
    /// Can no longer be guessed
    Locked,
}

#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub struct Tile {
    pub letter: Option<char>,
    pub status: Status,
}

impl Tile {
    pub fn new(letter: Option<char>, status: Status) -> Self {
        Tile { letter, status }
    }

    pub fn render(self, area: Rect, buf: &mut Buffer) {
        let border_style = match self.status {
            Status::Unknown => Style::default().white(),
            Status::Revealed => Style::default().light_green(),
            Status::Hinted => Style::default().light_yellow(),
            Status::Absent | Status::Missed => Style::default().light_red(),
            Status::Locked => Style::default().dark_gray(),
        };
        let text_style = match self.status {
            Status::Unknown => Style::default(),
            Status::Revealed => Style::default().fg(Color::LightGreen).bold(),
            Status::Hinted => Style::default().fg(Color::LightYellow).bold(),
            Status::Absent => Style::default().fg(Color::Red).crossed_out(),
            Status::Missed => Style::default().fg(Color::LightRed).bold(),
            Status::Locked => Style::default().dark_gray(),
        };

        let block = Block::new()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(border_style);

        let letter = match self.letter {
            Some(l) => Text::styled(l.to_string(), text_style),
            _ => Text::styled("", text_style),
        };
        Paragraph::new(letter)
            .centered()
            .block(block)
            .render(area, buf);
    }
}

/// Render tiles side by side, centered in `area`
pub fn render_row(tiles: &[Tile], area: Rect, buf: &mut Buffer) {
    let row_layout = Layout::default()
        .direction(Direction::Horizontal)
        .constraints(vec![Constraint::Length(5); tiles.len()])
        .flex(layout::Flex::Center)
        .split(area);
    for (tile, area) in tiles.iter().zip(row_layout.iter()) {
        tile.render(*area, buf);
    }
}

impl App {
    /// One tile per character of the word
    pub fn word_tiles(&self) -> Vec<Tile> {
        let Some(round) = self.round.as_ref() else {
            return vec![];
        };
        round
            .word()
            .chars()
            .map(|c| match round.reveal(c) {
                Some(c) if self.hinted.contains(&c) => Tile::new(Some(c), Status::Hinted),
                Some(c) => Tile::new(Some(c), Status::Revealed),
                None if round.is_lost() => Tile::new(Some(c), Status::Missed),
                None => Tile::new(None, Status::Unknown),
            })
            .collect()
    }

    /// One tile per letter A-Z
    pub fn key_tiles(&self) -> Vec<Tile> {
        ('A'..='Z')
            .map(|c| {
                let status = match self.round.as_ref() {
                    Some(round) if round.is_guessed(c) => {
                        if self.hinted.contains(&c) {
                            Status::Hinted
                        } else if round.contains(c) {
                            Status::Revealed
                        } else {
                            Status::Absent
                        }
                    }
                    Some(round) if !round.is_over() => Status::Unknown,
                    _ => Status::Locked,
                };
                Tile::new(Some(c), status)
            })
            .collect()
    }
}
