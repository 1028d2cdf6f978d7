//! Game of Life simulation
//!
//! A `Game` owns a double-buffered board. It is seeded randomly when built,
//! advances one generation per [`Game::tick`] and draws the current
//! generation with [`Game::render`], packing two board rows into each
//! character row using half-block glyphs.

use std::io;
use std::time::{SystemTime, UNIX_EPOCH};

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::debug;

use super::buffer::DoubleBufferedGrid;
use super::grid::{Grid, GridError, Result};
use super::rules::next_generation;
use super::surface::Surface;

/// Default seeding frequency; a cell starts alive with probability 1/(frequency+1)
pub const DEFAULT_FREQUENCY: u32 = 3;

pub const FULL_BLOCK: char = '█';
pub const UPPER_HALF_BLOCK: char = '▀';
pub const LOWER_HALF_BLOCK: char = '▄';
pub const BLANK: char = ' ';

/// Glyph for a vertically stacked pair of cells
pub fn glyph(top: bool, bottom: bool) -> char {
    match (top, bottom) {
        (true, true) => FULL_BLOCK,
        (true, false) => UPPER_HALF_BLOCK,
        (false, true) => LOWER_HALF_BLOCK,
        (false, false) => BLANK,
    }
}

pub struct Game {
    buffer: DoubleBufferedGrid,
}

impl Game {
    /// Build a board seeded from the wall clock
    pub fn new(width: usize, height: usize, frequency: u32) -> Result<Self> {
        Self::with_seed(width, height, frequency, clock_seed())
    }

    /// Build a board from a fixed seed, so runs can be reproduced
    pub fn with_seed(width: usize, height: usize, frequency: u32, seed: u64) -> Result<Self> {
        debug!("Seeding {}x{} board with seed {}", width, height, seed);
        let mut rng = StdRng::seed_from_u64(seed);
        Self::with_rng(width, height, frequency, &mut rng)
    }

    /// Build a board seeded from `rng`
    pub fn with_rng<R: Rng>(
        width: usize,
        height: usize,
        frequency: u32,
        rng: &mut R,
    ) -> Result<Self> {
        if height % 2 != 0 {
            return Err(GridError::OddHeight(height));
        }

        let mut buffer = DoubleBufferedGrid::new(width, height)?;
        let back = buffer.back();
        for y in 0..height {
            for x in 0..width {
                back.set(x, y, rng.gen_range(0..=frequency) == 0);
            }
        }
        buffer.swap();

        Ok(Self { buffer })
    }

    pub fn width(&self) -> usize {
        self.buffer.width()
    }

    pub fn height(&self) -> usize {
        self.buffer.height()
    }

    /// The generation currently on display
    pub fn board(&self) -> &Grid {
        self.buffer.front()
    }

    /// Advance one generation
    pub fn tick(&mut self) {
        let (front, back) = self.buffer.split();
        next_generation(front, back);
        self.buffer.swap();
    }

    /// Draw the current generation, one character row per pair of board rows
    pub fn render<S: Surface + ?Sized>(&self, surface: &mut S) -> io::Result<()> {
        let grid = self.buffer.front();
        assert!(grid.height() % 2 == 0, "board height {} is odd", grid.height());

        for y in (0..grid.height()).step_by(2) {
            for x in 0..grid.width() {
                surface.put(y / 2, x, glyph(grid.get(x, y), grid.get(x, y + 1)))?;
            }
        }

        surface.flush()
    }
}

fn clock_seed() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or_default()
}
