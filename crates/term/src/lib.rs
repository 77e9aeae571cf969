//! Terminal device layer.
//!
//! Everything that touches the process's controlling terminal lives here:
//!
//! - [`Tty`]: the seam the input crate decodes keys through (mode capture,
//!   readiness polling, single-byte reads)
//! - [`StdinTty`]: termios + `poll(2)` implementation over fd 0
//! - [`ScriptedTty`]: in-memory device for headless runs and tests
//! - [`signal`]: SIGINT/SIGTERM capture so Ctrl-C ends the loop normally
//! - [`output`]: crossterm helpers for writing frame text

pub mod output;
pub mod scripted;
pub mod signal;
pub mod stdin;
pub mod tty;

pub use scripted::{ScriptedMode, ScriptedTty};
pub use stdin::StdinTty;
pub use tty::Tty;
