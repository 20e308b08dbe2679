use std::io::{Stdout, Write};

use crossterm::{
    cursor, queue,
    style::{self, Attribute, Color, Stylize},
    terminal::{self, ClearType},
};
use unicode_truncate::UnicodeTruncateStr;

use crate::{
    app::tile::{Frame, Tile},
    game::GameState,
};

pub struct Renderer {
    /// Standard output handle to write to the terminal
    stdout: Stdout,
    /// Tiles currently on screen, row-major, with their grid dimensions
    on_screen: Option<((u16, u16), Vec<Tile>)>,
}

impl Renderer {
    /// Rows reserved below the maze for the status and help lines
    pub const NUM_LOG_ROWS: u16 = 2;

    pub fn new() -> Self {
        Self {
            stdout: std::io::stdout(),
            on_screen: None,
        }
    }

    /// Check if terminal size is sufficient for the given grid dimensions.
    /// If not, display a resize message and return Ok(false).
    fn check_resize(stdout: &mut Stdout, width: u16, height: u16) -> std::io::Result<bool> {
        let (term_width, term_height) = terminal::size()?;
        if term_width < width * Tile::WIDTH || term_height < height + Renderer::NUM_LOG_ROWS {
            let msg = format!(
                "Terminal size is too small ({}x{}) for the maze ({}x{} tiles). Please resize the terminal, or press Esc to exit.",
                term_width, term_height, width, height
            );
            let (msg, _) = msg.unicode_truncate(term_width as usize);
            queue!(
                stdout,
                terminal::Clear(ClearType::All),
                cursor::MoveTo(0, 0),
                style::PrintStyledContent(msg.with(Color::Yellow).attribute(Attribute::Bold)),
            )?;
            stdout.flush()?;
            return Ok(false);
        }
        Ok(true)
    }

    /// Draws the maze followed by the status lines.
    pub fn draw(&mut self, game: &GameState) -> std::io::Result<()> {
        let frame = Frame::new(game);
        let (width, height) = frame.size();
        if !Renderer::check_resize(&mut self.stdout, width, height)? {
            self.on_screen = None;
            return Ok(());
        }

        let tiles = (0..height)
            .flat_map(|y| (0..width).map(move |x| (x, y)))
            .map(|coord| frame.tile(coord))
            .collect::<Vec<_>>();
        // Only tiles that changed since the last draw are written
        let previous = match &self.on_screen {
            Some((size, previous)) if *size == (width, height) => Some(previous),
            _ => None,
        };
        for (i, &tile) in tiles.iter().enumerate() {
            if previous.is_some_and(|p| p[i] == tile) {
                continue;
            }
            let (x, y) = ((i % width as usize) as u16, (i / width as usize) as u16);
            queue!(
                self.stdout,
                cursor::MoveTo(x * Tile::WIDTH, y),
                style::Print(tile)
            )?;
        }
        self.on_screen = Some(((width, height), tiles));

        let term_width = terminal::size()?.0 as usize;
        let status = status_line(game);
        let (status, _) = status.unicode_truncate(term_width);
        let status = if game.is_won() {
            status.to_string().with(Color::Green).attribute(Attribute::Bold)
        } else {
            status.to_string().with(Color::Cyan)
        };
        let (help, _) = HELP_LINE.unicode_truncate(term_width);
        queue!(
            self.stdout,
            cursor::MoveTo(0, height),
            terminal::Clear(ClearType::CurrentLine),
            style::PrintStyledContent(status),
            cursor::MoveTo(0, height + 1),
            terminal::Clear(ClearType::CurrentLine),
            style::PrintStyledContent(help.with(Color::DarkGrey)),
        )?;
        self.stdout.flush()
    }

    /// Wipes the screen so the next draw repaints every tile.
    pub fn clear(&mut self) -> std::io::Result<()> {
        self.on_screen = None;
        queue!(
            self.stdout,
            terminal::Clear(ClearType::All),
            cursor::MoveTo(0, 0)
        )?;
        self.stdout.flush()
    }
}

impl Default for Renderer {
    fn default() -> Self {
        Self::new()
    }
}

const HELP_LINE: &str = "Arrows: move  b: breadth-first  d: depth-first  r: new maze  t: toggle trail  Esc/q: quit";

/// Dimensions, score, and the win message once the exit is reached.
fn status_line(game: &GameState) -> String {
    let maze = game.maze();
    match game.final_score() {
        Some(final_score) => format!(
            "{}x{} maze | You win! Score: {}",
            maze.width(),
            maze.height(),
            final_score
        ),
        None => format!(
            "{}x{} maze | Steps: {} | Explored: {} | Path: {}",
            maze.width(),
            maze.height(),
            game.score(),
            game.explored().len(),
            game.path().len()
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{config::GameConfig, game::Command, solvers::SearchMode};

    #[test]
    fn test_default_renderer_starts_blank() {
        let renderer = Renderer::default();
        assert!(renderer.on_screen.is_none());
    }

    #[test]
    fn test_status_line() {
        let mut game = GameState::new(&GameConfig {
            width: 4,
            height: 3,
            seed: Some(1),
            ..Default::default()
        })
        .unwrap();
        assert_eq!(
            status_line(&game),
            "4x3 maze | Steps: 0 | Explored: 0 | Path: 0"
        );
        game.apply(Command::Search(SearchMode::BreadthFirst)).unwrap();
        let path_len = game.path().len();
        assert!(status_line(&game).ends_with(&format!("Path: {}", path_len)));
    }
}
