//! Cellular-automaton engine.
//!
//! - **grid**: fixed-size boolean cell grid
//! - **buffer**: front/back pair of grids with O(1) swap
//! - **rules**: Conway's Life transition rule with non-wrapping edges
//! - **surface**: character display the game draws through
//! - **game**: seeding, ticking and half-block rendering
//!
//! # Data Flow
//!
//! ```text
//! Game
//! └── DoubleBufferedGrid
//!     ├── front ──next_generation──▶ back
//!     └── swap()
//! front ──render──▶ Surface (two board rows per character row)
//! ```

pub mod grid;
pub mod buffer;
pub mod rules;
pub mod surface;
pub mod game;
