//! Terminal renderer using crossterm
//!
//! Owns the terminal session (raw mode, alternate screen, hidden cursor) and
//! implements [`Surface`] so the game can draw straight to the console.

use std::io::{self, Stdout, Write};

use crossterm::{
    cursor::{Hide, MoveTo, Show},
    execute, queue,
    style::{Attribute, Print, ResetColor, SetAttribute},
    terminal::{
        self, Clear, ClearType, DisableLineWrap, EnableLineWrap, EnterAlternateScreen,
        LeaveAlternateScreen,
    },
};
use tracing::{debug, warn};

use crate::core::surface::Surface;

/// Begin/end synchronized update (reduces flicker)
const SYNC_BEGIN: &str = "\x1b[?2026h";
const SYNC_END: &str = "\x1b[?2026l";

/// Crossterm-backed display surface
pub struct TerminalSurface {
    out: io::BufWriter<Stdout>,
    /// Whether the terminal has been initialized
    initialized: bool,
    /// A frame has been started and not yet flushed
    in_frame: bool,
    /// Where the terminal cursor sits after the last glyph, as (row, col)
    next_pos: Option<(u16, u16)>,
}

impl Default for TerminalSurface {
    fn default() -> Self {
        Self::new()
    }
}

impl TerminalSurface {
    pub fn new() -> Self {
        Self {
            out: io::BufWriter::with_capacity(65536, io::stdout()),
            initialized: false,
            in_frame: false,
            next_pos: None,
        }
    }

    /// Current terminal size as (cols, rows)
    pub fn size() -> io::Result<(u16, u16)> {
        terminal::size()
    }

    /// Initialize the terminal for drawing
    pub fn init(&mut self) -> io::Result<()> {
        terminal::enable_raw_mode()?;
        execute!(
            self.out,
            EnterAlternateScreen,
            DisableLineWrap,
            Hide,
            Clear(ClearType::All),
            MoveTo(0, 0)
        )?;
        self.initialized = true;
        debug!("Terminal initialized");
        Ok(())
    }

    /// Restore the terminal. Safe to call more than once.
    pub fn cleanup(&mut self) -> io::Result<()> {
        if !self.initialized {
            return Ok(());
        }
        self.initialized = false;
        self.in_frame = false;
        self.next_pos = None;

        // Keep going on failures; leaving raw mode matters most
        let _ = write!(self.out, "{}", SYNC_END);
        let _ = execute!(self.out, ResetColor, SetAttribute(Attribute::Reset));
        let _ = execute!(self.out, Show, EnableLineWrap, LeaveAlternateScreen);
        let _ = self.out.flush();

        terminal::disable_raw_mode()?;
        debug!("Terminal restored");
        Ok(())
    }

    /// Wipe the screen, e.g. after a resize
    pub fn clear(&mut self) -> io::Result<()> {
        self.next_pos = None;
        queue!(self.out, Clear(ClearType::All))
    }

    fn begin_frame(&mut self) -> io::Result<()> {
        if !self.in_frame {
            write!(self.out, "{}", SYNC_BEGIN)?;
            self.in_frame = true;
            self.next_pos = None;
        }
        Ok(())
    }
}

fn to_u16(value: usize) -> io::Result<u16> {
    u16::try_from(value).map_err(|_| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            format!("screen coordinate {} out of range", value),
        )
    })
}

impl Surface for TerminalSurface {
    fn put(&mut self, row: usize, col: usize, glyph: char) -> io::Result<()> {
        self.begin_frame()?;
        let (row, col) = (to_u16(row)?, to_u16(col)?);

        // Glyphs usually arrive left to right, so only move when we jump
        if self.next_pos != Some((row, col)) {
            queue!(self.out, MoveTo(col, row))?;
        }
        queue!(self.out, Print(glyph))?;
        self.next_pos = Some((row, col.saturating_add(1)));
        Ok(())
    }

    fn flush(&mut self) -> io::Result<()> {
        if self.in_frame {
            write!(self.out, "{}", SYNC_END)?;
            self.in_frame = false;
        }
        self.out.flush()
    }
}

impl Drop for TerminalSurface {
    fn drop(&mut self) {
        if let Err(e) = self.cleanup() {
            warn!("Failed to restore terminal: {}", e);
        }
    }
}
