mod renderer;
mod tile;

use std::{
    io::{Stdout, Write},
    time::Instant,
};

use crossterm::{
    cursor,
    event::{self, KeyCode, KeyEvent, KeyEventKind},
    queue,
    terminal::{self, ClearType},
};

use crate::{
    app::renderer::Renderer,
    config::GameConfig,
    game::{Command, Direction, GameState},
    solvers::SearchMode,
};

/// What a key press asks the application to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum UserAction {
    Quit,
    Command(Command),
}

pub struct App {
    config: GameConfig,
}

impl App {
    pub fn new(config: GameConfig) -> Self {
        Self { config }
    }

    /// Set a panic hook to restore terminal state on panic
    /// This ensures that the terminal is not left in raw mode or alternate screen on panic
    fn set_panic_hook() {
        let hook = std::panic::take_hook();
        std::panic::set_hook(Box::new(move |panic_info| {
            let _ = App::restore_terminal(&mut std::io::stdout()); // ignore any errors as we are already failing
            hook(panic_info);
        }));
    }

    /// Setup terminal in raw mode and enter alternate screen
    /// Also sets a panic hook to restore terminal on panic
    pub fn setup_terminal(stdout: &mut Stdout) -> std::io::Result<()> {
        terminal::enable_raw_mode()?;
        App::set_panic_hook();
        queue!(
            stdout,
            terminal::EnterAlternateScreen,
            terminal::Clear(ClearType::All),
            cursor::Hide,
            cursor::MoveTo(0, 0)
        )?;
        stdout.flush()?;
        Ok(())
    }

    /// Restore terminal to original state
    /// Leave alternate screen and disable raw mode
    pub fn restore_terminal(stdout: &mut Stdout) -> std::io::Result<()> {
        queue!(stdout, terminal::LeaveAlternateScreen, cursor::Show)?;
        stdout.flush()?;
        terminal::disable_raw_mode()?;
        Ok(())
    }

    /// Main application loop. Returns when the user quits.
    pub fn run(&self) -> anyhow::Result<()> {
        let mut game = GameState::new(&self.config)?;
        let mut renderer = Renderer::new();
        let tick_interval = self.config.tick_interval;

        tracing::info!("Started main app loop");
        renderer.draw(&game)?;
        let mut next_tick = Instant::now() + tick_interval;
        loop {
            let timeout = next_tick.saturating_duration_since(Instant::now());
            if event::poll(timeout)? {
                let command = match event::read()? {
                    event::Event::Key(key_event) => match map_key(key_event) {
                        Some(UserAction::Quit) => {
                            tracing::debug!("[app loop] quit requested");
                            break;
                        }
                        Some(UserAction::Command(command)) => Some(command),
                        None => None,
                    },
                    event::Event::Resize(_, _) => {
                        renderer.clear()?;
                        renderer.draw(&game)?;
                        None
                    }
                    _ => None, // Ignore other events
                };
                if let Some(command) = command {
                    if matches!(command, Command::Regenerate) {
                        renderer.clear()?;
                    }
                    game.apply(command)?;
                    renderer.draw(&game)?;
                }
            }

            if Instant::now() < next_tick {
                continue;
            }
            next_tick = Instant::now() + tick_interval;
            // Only a replay in progress needs ticks
            if game.animation().search().is_some() && !game.animation().is_settled() {
                game.apply(Command::Tick)?;
                renderer.draw(&game)?;
            }
        }
        tracing::info!("Exiting main app loop");
        Ok(())
    }
}

/// Maps a key press to an action. Releases and repeats are ignored.
fn map_key(key_event: KeyEvent) -> Option<UserAction> {
    if key_event.kind != KeyEventKind::Press {
        return None;
    }
    let command = match key_event.code {
        KeyCode::Esc | KeyCode::Char('q') => return Some(UserAction::Quit),
        KeyCode::Up => Command::Move(Direction::Up),
        KeyCode::Down => Command::Move(Direction::Down),
        KeyCode::Left => Command::Move(Direction::Left),
        KeyCode::Right => Command::Move(Direction::Right),
        KeyCode::Char('r') => Command::Regenerate,
        KeyCode::Char('t') => Command::ToggleTrail,
        KeyCode::Char('b') => Command::Search(SearchMode::BreadthFirst),
        KeyCode::Char('d') => Command::Search(SearchMode::DepthFirst),
        _ => return None,
    };
    Some(UserAction::Command(command))
}
