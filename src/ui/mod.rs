//! Terminal rendering and input handling.
//!
//! - **renderer**: crossterm-backed drawing surface and terminal session
//! - **keymapper**: keyboard input to simulation command mapping

pub mod keymapper;
pub mod renderer;

pub use keymapper::{Command, KeyMapper};
pub use renderer::TerminalSurface;
