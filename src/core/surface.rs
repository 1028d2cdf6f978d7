//! Display surface the game draws through

use std::io;

/// A character-cell display
pub trait Surface {
    /// Place `glyph` at character row `row`, column `col`
    fn put(&mut self, row: usize, col: usize, glyph: char) -> io::Result<()>;

    /// Make everything put since the last flush visible
    fn flush(&mut self) -> io::Result<()>;
}

/// In-memory surface for tests
#[cfg(test)]
#[derive(Debug, Default)]
pub struct MemorySurface {
    pub rows: Vec<Vec<char>>,
    pub flushes: usize,
}

#[cfg(test)]
impl MemorySurface {
    pub fn new() -> Self {
        Self::default()
    }

    /// Row `row` as a string
    pub fn line(&self, row: usize) -> String {
        self.rows[row].iter().collect()
    }
}

#[cfg(test)]
impl Surface for MemorySurface {
    fn put(&mut self, row: usize, col: usize, glyph: char) -> io::Result<()> {
        if self.rows.len() <= row {
            self.rows.resize(row + 1, Vec::new());
        }
        let line = &mut self.rows[row];
        if line.len() <= col {
            line.resize(col + 1, '?');
        }
        line[col] = glyph;
        Ok(())
    }

    fn flush(&mut self) -> io::Result<()> {
        self.flushes += 1;
        Ok(())
    }
}
