//! Fixed-size boolean cell grid
//!
//! Cells are stored row-major, so cell `(x, y)` lives at `x + y * width`.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GridError {
    #[error("Grid dimensions must be non-zero (got {width}x{height})")]
    EmptyDimensions { width: usize, height: usize },

    #[error("Grid height must be even for half-block rendering (got {0})")]
    OddHeight(usize),

    #[error("Failed to allocate {0} cells")]
    Allocation(usize),

    #[error("Cell ({x}, {y}) is outside a {width}x{height} grid")]
    OutOfBounds {
        x: usize,
        y: usize,
        width: usize,
        height: usize,
    },
}

pub type Result<T> = std::result::Result<T, GridError>;

/// A two-dimensional field of alive/dead cells
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    width: usize,
    height: usize,
    cells: Vec<bool>,
}

impl Grid {
    /// Allocate a `width` x `height` grid with every cell dead
    pub fn new(width: usize, height: usize) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(GridError::EmptyDimensions { width, height });
        }

        let len = width
            .checked_mul(height)
            .ok_or(GridError::Allocation(usize::MAX))?;

        let mut cells = Vec::new();
        cells
            .try_reserve_exact(len)
            .map_err(|_| GridError::Allocation(len))?;
        cells.resize(len, false);

        Ok(Self {
            width,
            height,
            cells,
        })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Whether both grids have the same width and height
    pub fn same_size(&self, other: &Grid) -> bool {
        self.width == other.width && self.height == other.height
    }

    /// Read a cell. Panics when `(x, y)` is out of range.
    pub fn get(&self, x: usize, y: usize) -> bool {
        self.cells[self.index(x, y)]
    }

    /// Write a cell. Panics when `(x, y)` is out of range.
    pub fn set(&mut self, x: usize, y: usize, alive: bool) {
        let i = self.index(x, y);
        self.cells[i] = alive;
    }

    /// Read a cell, reporting out-of-range coordinates as an error
    #[allow(dead_code)]
    pub fn try_get(&self, x: usize, y: usize) -> Result<bool> {
        if self.contains(x, y) {
            Ok(self.cells[x + y * self.width])
        } else {
            Err(GridError::OutOfBounds {
                x,
                y,
                width: self.width,
                height: self.height,
            })
        }
    }

    pub fn contains(&self, x: usize, y: usize) -> bool {
        x < self.width && y < self.height
    }

    /// Number of alive cells
    pub fn count_alive(&self) -> usize {
        self.cells.iter().filter(|&&alive| alive).count()
    }

    // Checked in release builds too
    fn index(&self, x: usize, y: usize) -> usize {
        assert!(
            self.contains(x, y),
            "cell ({}, {}) is outside a {}x{} grid",
            x,
            y,
            self.width,
            self.height
        );
        x + y * self.width
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_grid_is_dead() {
        let grid = Grid::new(4, 3).unwrap();
        assert_eq!(grid.width(), 4);
        assert_eq!(grid.height(), 3);
        assert_eq!(grid.count_alive(), 0);
    }

    #[test]
    fn test_zero_dimensions_rejected() {
        assert_eq!(
            Grid::new(0, 5),
            Err(GridError::EmptyDimensions { width: 0, height: 5 })
        );
        assert!(Grid::new(5, 0).is_err());
    }

    #[test]
    fn test_size_overflow_is_allocation_error() {
        assert_eq!(Grid::new(usize::MAX, 2), Err(GridError::Allocation(usize::MAX)));
    }

    #[test]
    #[cfg(target_pointer_width = "64")]
    fn test_huge_grid_is_allocation_error() {
        assert!(matches!(
            Grid::new(1 << 40, 1 << 20),
            Err(GridError::Allocation(_))
        ));
    }

    #[test]
    fn test_set_and_get() {
        let mut grid = Grid::new(3, 2).unwrap();
        grid.set(2, 1, true);
        assert!(grid.get(2, 1));
        assert!(!grid.get(1, 1));
        assert_eq!(grid.count_alive(), 1);

        grid.set(2, 1, false);
        assert!(!grid.get(2, 1));
    }

    #[test]
    fn test_row_major_layout() {
        // (x, y) and (y, x) must be distinct cells on a non-square grid
        let mut grid = Grid::new(5, 2).unwrap();
        grid.set(1, 0, true);
        assert!(grid.get(1, 0));
        assert!(!grid.get(0, 1));
    }

    #[test]
    fn test_try_get_out_of_bounds() {
        let grid = Grid::new(2, 2).unwrap();
        assert_eq!(grid.try_get(1, 1), Ok(false));
        assert_eq!(
            grid.try_get(2, 0),
            Err(GridError::OutOfBounds {
                x: 2,
                y: 0,
                width: 2,
                height: 2,
            })
        );
    }

    #[test]
    #[should_panic(expected = "outside a 2x2 grid")]
    fn test_get_out_of_bounds_panics() {
        let grid = Grid::new(2, 2).unwrap();
        grid.get(0, 2);
    }

    #[test]
    #[should_panic]
    fn test_set_out_of_bounds_panics() {
        let mut grid = Grid::new(2, 2).unwrap();
        grid.set(2, 0, true);
    }
}
