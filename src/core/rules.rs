//! Conway's Game of Life transition rule
//!
//! - A live cell with two or three live neighbours survives.
//! - A dead cell with exactly three live neighbours becomes alive.
//! - Every other cell is dead in the next generation.
//!
//! Edges do not wrap: positions outside the grid never count as neighbours.

use super::grid::Grid;

/// Offsets of the eight surrounding cells
const NEIGHBOURS: [(isize, isize); 8] = [
    (-1, -1),
    (0, -1),
    (1, -1),
    (-1, 0),
    (1, 0),
    (-1, 1),
    (0, 1),
    (1, 1),
];

/// Count the live in-bounds neighbours of `(x, y)`
pub fn neighbour_count(grid: &Grid, x: usize, y: usize) -> u8 {
    let mut count = 0;
    for (dx, dy) in NEIGHBOURS {
        let (Some(nx), Some(ny)) = (x.checked_add_signed(dx), y.checked_add_signed(dy)) else {
            continue;
        };
        if grid.contains(nx, ny) && grid.get(nx, ny) {
            count += 1;
        }
    }
    count
}

/// Whether a cell is alive next generation
pub fn survives(alive: bool, neighbours: u8) -> bool {
    matches!((alive, neighbours), (true, 2) | (true, 3) | (false, 3))
}

/// Write the generation following `current` into `next`.
///
/// Every cell of `next` is overwritten and only `current` is read, so the
/// two must be separate grids. Panics if their sizes differ.
pub fn next_generation(current: &Grid, next: &mut Grid) {
    assert!(
        current.same_size(next),
        "generation buffers differ in size: {}x{} vs {}x{}",
        current.width(),
        current.height(),
        next.width(),
        next.height()
    );

    for y in 0..current.height() {
        for x in 0..current.width() {
            let neighbours = neighbour_count(current, x, y);
            next.set(x, y, survives(current.get(x, y), neighbours));
        }
    }
}
