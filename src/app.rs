//! Driver state: the running game, its tick interval, and play/pause.
//!
//! The event loop in `main` feeds commands (or timeouts) in here and asks
//! what to do next; nothing in this module touches the terminal.

use std::time::Duration;

use tracing::info;

use crate::config::Config;
use crate::core::game::Game;
use crate::core::grid::Result;
use crate::ui::Command;

/// What the event loop should do after handling input
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Flow {
    /// Tick once and redraw
    Advance,
    /// Nothing to do this round
    Idle,
    /// Leave the loop
    Quit,
}

pub struct App {
    game: Game,
    tick_ms: u64,
    min_tick_ms: u64,
    max_tick_ms: u64,
    running: bool,
    /// Generations advanced since the current game was seeded
    generation: u64,
    frequency: u32,
    seed: Option<u64>,
}

/// Board size for a terminal of `cols` x `rows`; each row shows two board rows
pub fn board_size(cols: u16, rows: u16) -> (usize, usize) {
    (cols as usize, rows as usize * 2)
}

impl App {
    pub fn new(config: &Config, cols: u16, rows: u16) -> Result<Self> {
        let game = Self::build_game(config.frequency, config.seed, cols, rows)?;
        Ok(Self {
            game,
            tick_ms: config.tick_ms,
            min_tick_ms: config.min_tick_ms,
            max_tick_ms: config.max_tick_ms,
            running: !config.paused,
            generation: 0,
            frequency: config.frequency,
            seed: config.seed,
        })
    }

    fn build_game(frequency: u32, seed: Option<u64>, cols: u16, rows: u16) -> Result<Game> {
        let (width, height) = board_size(cols, rows);
        match seed {
            Some(seed) => Game::with_seed(width, height, frequency, seed),
            None => Game::new(width, height, frequency),
        }
    }

    pub fn game(&self) -> &Game {
        &self.game
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    #[cfg(test)]
    pub fn is_running(&self) -> bool {
        self.running
    }

    /// How long to wait for input before the next tick
    pub fn tick_interval(&self) -> Duration {
        Duration::from_millis(self.tick_ms)
    }

    /// Replace the game with a freshly seeded one sized for the new terminal.
    /// The current game is kept if the new size is unusable.
    pub fn resize(&mut self, cols: u16, rows: u16) -> Result<()> {
        self.game = Self::build_game(self.frequency, self.seed, cols, rows)?;
        self.generation = 0;
        info!("Resize: {}x{} (board {}x{})", cols, rows, self.game.width(), self.game.height());
        Ok(())
    }

    /// Handle one round of input. `None` means the wait timed out or the
    /// key had no binding.
    pub fn handle(&mut self, command: Option<Command>) -> Flow {
        match command {
            Some(Command::Quit) => {
                info!(
                    "Quit after {} generations, {} cells alive",
                    self.generation,
                    self.game.board().count_alive()
                );
                return Flow::Quit;
            }
            Some(Command::Step) => return Flow::Advance,
            Some(Command::Slower) => {
                if self.tick_ms < self.max_tick_ms {
                    self.tick_ms = self.tick_ms.saturating_mul(2).min(self.max_tick_ms);
                    info!("Tick interval: {}ms", self.tick_ms);
                }
            }
            Some(Command::Faster) => {
                if self.tick_ms > self.min_tick_ms {
                    self.tick_ms = (self.tick_ms / 2).max(self.min_tick_ms);
                    info!("Tick interval: {}ms", self.tick_ms);
                }
            }
            Some(Command::TogglePause) => {
                self.running = !self.running;
                info!("{}", if self.running { "Resumed" } else { "Paused" });
            }
            None => {}
        }

        if self.running {
            Flow::Advance
        } else {
            Flow::Idle
        }
    }

    /// Advance the game one generation
    pub fn tick(&mut self) {
        self.game.tick();
        self.generation += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn app() -> App {
        let config = Config {
            seed: Some(11),
            ..Config::default()
        };
        App::new(&config, 20, 10).unwrap()
    }

    #[test]
    fn test_board_uses_half_blocks() {
        let app = app();
        assert_eq!((app.game().width(), app.game().height()), (20, 20));
        assert_eq!(board_size(80, 24), (80, 48));
    }

    #[test]
    fn test_speed_bounds() {
        let mut app = app();
        assert_eq!(app.tick_interval(), Duration::from_millis(32));

        app.handle(Some(Command::Faster));
        assert_eq!(app.tick_interval(), Duration::from_millis(16));
        app.handle(Some(Command::Faster));
        assert_eq!(app.tick_interval(), Duration::from_millis(16));

        for _ in 0..10 {
            app.handle(Some(Command::Slower));
        }
        assert_eq!(app.tick_interval(), Duration::from_millis(1024));
    }

    #[test]
    fn test_slower_near_u64_max() {
        let config = Config {
            tick_ms: u64::MAX / 2 + 1,
            max_tick_ms: u64::MAX,
            seed: Some(5),
            ..Config::default()
        };
        assert!(config.validate().is_ok());

        let mut app = App::new(&config, 4, 2).unwrap();
        app.handle(Some(Command::Slower));
        assert_eq!(app.tick_interval(), Duration::from_millis(u64::MAX));
        app.handle(Some(Command::Slower));
        assert_eq!(app.tick_interval(), Duration::from_millis(u64::MAX));
    }

    #[test]
    fn test_pause_and_step() {
        let mut app = app();
        assert!(app.is_running());
        assert_eq!(app.handle(None), Flow::Advance);

        assert_eq!(app.handle(Some(Command::TogglePause)), Flow::Idle);
        assert!(!app.is_running());
        assert_eq!(app.handle(None), Flow::Idle);
        assert_eq!(app.handle(Some(Command::Faster)), Flow::Idle);
        assert_eq!(app.handle(Some(Command::Step)), Flow::Advance);

        assert_eq!(app.handle(Some(Command::TogglePause)), Flow::Advance);
    }

    #[test]
    fn test_start_paused() {
        let config = Config {
            paused: true,
            seed: Some(1),
            ..Config::default()
        };
        let mut app = App::new(&config, 4, 2).unwrap();
        assert_eq!(app.handle(None), Flow::Idle);
    }

    #[test]
    fn test_quit() {
        let mut app = app();
        assert_eq!(app.handle(Some(Command::Quit)), Flow::Quit);
    }

    #[test]
    fn test_resize_replaces_game() {
        let mut app = app();
        app.tick();
        assert_eq!(app.generation(), 1);

        app.resize(30, 5).unwrap();
        assert_eq!((app.game().width(), app.game().height()), (30, 10));
        assert_eq!(app.generation(), 0);
    }

    #[test]
    fn test_resize_to_nothing_keeps_game() {
        let mut app = app();
        assert!(app.resize(0, 0).is_err());
        assert_eq!(app.game().width(), 20);
    }
}
