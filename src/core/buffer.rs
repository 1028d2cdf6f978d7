//! Double-buffered grid
//!
//! Two grids of the same size alternate between being the displayed
//! generation (front) and the one being computed (back). Swapping flips a
//! selector; cell data is never copied.

use super::grid::{Grid, Result};

pub struct DoubleBufferedGrid {
    primary: Grid,
    secondary: Grid,
    /// When false, `primary` is the front buffer
    flipped: bool,
}

impl DoubleBufferedGrid {
    pub fn new(width: usize, height: usize) -> Result<Self> {
        Ok(Self {
            primary: Grid::new(width, height)?,
            secondary: Grid::new(width, height)?,
            flipped: false,
        })
    }

    pub fn width(&self) -> usize {
        self.primary.width()
    }

    pub fn height(&self) -> usize {
        self.primary.height()
    }

    /// The current generation
    pub fn front(&self) -> &Grid {
        if self.flipped {
            &self.secondary
        } else {
            &self.primary
        }
    }

    /// The generation being computed
    pub fn back(&mut self) -> &mut Grid {
        if self.flipped {
            &mut self.primary
        } else {
            &mut self.secondary
        }
    }

    /// Borrow both buffers at once: front for reading, back for writing
    pub fn split(&mut self) -> (&Grid, &mut Grid) {
        if self.flipped {
            (&self.secondary, &mut self.primary)
        } else {
            (&self.primary, &mut self.secondary)
        }
    }

    pub fn swap(&mut self) {
        self.flipped = !self.flipped;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_buffers_share_dimensions() {
        let mut buffer = DoubleBufferedGrid::new(6, 4).unwrap();
        assert_eq!((buffer.width(), buffer.height()), (6, 4));
        let (front, back) = buffer.split();
        assert!(front.same_size(back));
    }

    #[test]
    fn test_swap_exposes_written_back() {
        let mut buffer = DoubleBufferedGrid::new(3, 3).unwrap();
        {
            let back = buffer.back();
            for y in 0..3 {
                for x in 0..3 {
                    back.set(x, y, (x + y) % 2 == 0);
                }
            }
        }
        assert_eq!(buffer.front().count_alive(), 0);

        buffer.swap();
        for y in 0..3 {
            for x in 0..3 {
                assert_eq!(buffer.front().get(x, y), (x + y) % 2 == 0);
            }
        }

        // The old front (all dead) is now the back
        assert_eq!(buffer.back().count_alive(), 0);
    }

    #[test]
    fn test_double_swap_restores_roles() {
        let mut buffer = DoubleBufferedGrid::new(2, 2).unwrap();
        buffer.back().set(0, 0, true);
        buffer.swap();
        buffer.swap();
        assert!(!buffer.front().get(0, 0));
        assert!(buffer.back().get(0, 0));
    }

    #[test]
    fn test_split_matches_front_and_back() {
        let mut buffer = DoubleBufferedGrid::new(2, 2).unwrap();
        buffer.back().set(1, 1, true);
        buffer.swap();

        let (front, back) = buffer.split();
        assert!(front.get(1, 1));
        assert!(!back.get(1, 1));
        back.set(0, 0, true);

        buffer.swap();
        assert!(buffer.front().get(0, 0));
    }

    #[test]
    fn test_empty_dimensions_propagate() {
        assert!(DoubleBufferedGrid::new(0, 2).is_err());
    }
}
