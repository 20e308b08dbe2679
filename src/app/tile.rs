use crossterm::style::{Color, Stylize};
use std::{collections::HashSet, fmt};

use crate::{game::GameState, maze::Coord};

/// What a single two-column slot of the rendered maze shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tile {
    Wall,
    /// Open cell or passage with nothing on it
    Empty,
    /// Revealed as explored by the search replay
    Scanned,
    /// Revealed as part of the solution path
    Solution,
    /// Visited by the player
    Trail,
    Player,
    Exit,
}

impl Tile {
    /// The width of each tile when rendered, in character widths.
    pub const WIDTH: u16 = 2;
}

impl fmt::Display for Tile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let styled_symbol = match self {
            Tile::Wall => "⬜".with(Color::White),
            Tile::Empty => "  ".with(Color::Reset),
            Tile::Scanned => "🟦".with(Color::Cyan),
            Tile::Solution => "🟪".with(Color::Blue),
            Tile::Trail => "🟧".with(Color::Magenta),
            Tile::Player => "🟩".with(Color::Green),
            Tile::Exit => "🟥".with(Color::Red),
        };

        #[cfg(debug_assertions)]
        {
            use unicode_width::UnicodeWidthStr;
            assert_eq!(
                styled_symbol.content().width(),
                Tile::WIDTH as usize,
                "Each tile must occupy exactly two character widths."
            );
        }

        write!(f, "{}", styled_symbol)
    }
}

/// Snapshot of a game used to resolve the tile at every position of the
/// `(2w + 1) x (2h + 1)` display grid.
///
/// Cells sit at odd coordinates. The slots between them are passages when a
/// tree edge joins the two cells and walls otherwise.
pub struct Frame<'a> {
    game: &'a GameState,
    trail: HashSet<Coord>,
}

impl<'a> Frame<'a> {
    pub fn new(game: &'a GameState) -> Self {
        let trail = if game.player().show_trail() {
            game.player().trail().iter().copied().collect()
        } else {
            HashSet::new()
        };
        Frame { game, trail }
    }

    /// Display grid dimensions in tiles.
    pub fn size(&self) -> (u16, u16) {
        let maze = self.game.maze();
        (maze.width() as u16 * 2 + 1, maze.height() as u16 * 2 + 1)
    }

    pub fn tile(&self, grid_coord: (u16, u16)) -> Tile {
        let (gx, gy) = grid_coord;
        let (width, height) = self.size();
        if gx == 0 || gy == 0 || gx >= width - 1 || gy >= height - 1 {
            return Tile::Wall;
        }
        let cell = |g: u16| ((g - 1) / 2) as u8;
        match (gx % 2 == 1, gy % 2 == 1) {
            (true, true) => self.cell_tile((cell(gx), cell(gy))),
            // Between horizontally adjacent cells
            (false, true) => self.passage_tile((cell(gx - 1), cell(gy)), (cell(gx + 1), cell(gy))),
            // Between vertically adjacent cells
            (true, false) => self.passage_tile((cell(gx), cell(gy - 1)), (cell(gx), cell(gy + 1))),
            (false, false) => Tile::Wall,
        }
    }

    fn cell_tile(&self, coord: Coord) -> Tile {
        let display = self.game.animation().display(coord);
        if coord == self.game.player().position() {
            Tile::Player
        } else if coord == self.game.maze().exit() {
            Tile::Exit
        } else if display.in_solution_path {
            Tile::Solution
        } else if self.trail.contains(&coord) {
            Tile::Trail
        } else if display.scanned {
            Tile::Scanned
        } else {
            Tile::Empty
        }
    }

    fn passage_tile(&self, a: Coord, b: Coord) -> Tile {
        if !self.game.maze().has_edge(a, b) {
            return Tile::Wall;
        }
        let animation = self.game.animation();
        let (da, db) = (animation.display(a), animation.display(b));
        if da.in_solution_path && db.in_solution_path {
            Tile::Solution
        } else if self.trail.contains(&a) && self.trail.contains(&b) {
            Tile::Trail
        } else if da.scanned && db.scanned {
            Tile::Scanned
        } else {
            Tile::Empty
        }
    }
}
