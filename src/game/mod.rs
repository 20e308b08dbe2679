mod player;

use rand::rngs::StdRng;

use crate::{
    animation::Animation,
    config::GameConfig,
    error::Result,
    generators::get_rng,
    maze::{Coord, Maze},
    solvers::{self, SearchMode},
};
pub use player::{Direction, Player};

/// Discrete commands accepted from the input layer.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Command {
    Move(Direction),
    Regenerate,
    Search(SearchMode),
    ToggleTrail,
    Tick,
}

pub struct GameState {
    /// The maze being played
    maze: Maze,
    player: Player,
    /// Replay of the latest search
    animation: Animation,
    /// Source of every maze generated in this game
    rng: StdRng,
}

impl GameState {
    /// Validates `config` and generates the first maze.
    pub fn new(config: &GameConfig) -> Result<Self> {
        config.validate()?;
        let mut rng = get_rng(config.seed);
        let maze = Maze::generate(config.width, config.height, &mut rng)?;
        tracing::info!(
            "[game] generated {}x{} maze",
            config.width,
            config.height
        );
        Ok(GameState::from_maze(maze, rng))
    }

    /// Starts a game on an existing maze. Later regenerations draw from `rng`.
    pub fn from_maze(maze: Maze, rng: StdRng) -> Self {
        GameState {
            player: Player::new(maze.entry()),
            animation: Animation::idle(maze.width(), maze.height()),
            maze,
            rng,
        }
    }

    /// Applies one command. Illegal moves are ignored without error.
    pub fn apply(&mut self, command: Command) -> Result<()> {
        match command {
            Command::Move(direction) => {
                self.move_player(direction);
            }
            Command::Regenerate => self.regenerate()?,
            Command::Search(mode) => self.search(mode)?,
            Command::ToggleTrail => self.player.toggle_trail(),
            Command::Tick => self.animation.tick(),
        }
        Ok(())
    }

    /// Attempts one step. Returns the new position if the move was legal.
    pub fn move_player(&mut self, direction: Direction) -> Option<Coord> {
        let from = self.player.position();
        let to = direction.step(from)?;
        if !self.maze.can_move(from, to) {
            return None;
        }
        self.player.advance(to);
        tracing::debug!("[game] player moved {:?} to {:?}", direction, to);
        if self.is_won() {
            tracing::info!("[game] exit reached with score {}", self.player.score());
        }
        Some(to)
    }

    /// Builds a fresh maze of the same size, then swaps it in.
    ///
    /// Player, score, trail and any replay are reset. Nothing changes if generation fails.
    pub fn regenerate(&mut self) -> Result<()> {
        let maze = Maze::generate(self.maze.width(), self.maze.height(), &mut self.rng)?;
        tracing::info!(
            "[game] regenerated {}x{} maze",
            maze.width(),
            maze.height()
        );
        self.player = Player::new(maze.entry());
        self.animation = Animation::idle(maze.width(), maze.height());
        self.maze = maze;
        Ok(())
    }

    /// Solves the maze from entry to exit and restarts the replay with the result.
    pub fn search(&mut self, mode: SearchMode) -> Result<()> {
        let result = solvers::search(&self.maze, mode)?;
        tracing::info!(
            "[game] {}: {} explored, path of {}",
            mode,
            result.explored.len(),
            result.path.len()
        );
        self.animation.start(result);
        Ok(())
    }

    pub fn maze(&self) -> &Maze {
        &self.maze
    }

    pub fn player(&self) -> &Player {
        &self.player
    }

    pub fn animation(&self) -> &Animation {
        &self.animation
    }

    /// Vertices explored by the latest search.
    pub fn explored(&self) -> &[Coord] {
        self.animation
            .search()
            .map(|search| search.explored.as_slice())
            .unwrap_or_default()
    }

    /// Solution path of the latest search, exit first.
    pub fn path(&self) -> &[Coord] {
        self.animation
            .search()
            .map(|search| search.path.as_slice())
            .unwrap_or_default()
    }

    pub fn score(&self) -> u32 {
        self.player.score()
    }

    pub fn is_won(&self) -> bool {
        self.player.position() == self.maze.exit()
    }

    /// Once the exit is reached: steps taken minus the length of the known solution path.
    pub fn final_score(&self) -> Option<i64> {
        self.is_won()
            .then(|| self.player.score() as i64 - self.path().len() as i64)
    }
}
