//! Terminal input module (game-facing).
//!
//! Turns raw terminal bytes into abstract [`types::Button`]s:
//!
//! - [`map`]: the fixed key table (`w`/`ESC [ A` → up, `q` → quit, ...)
//! - [`decode`]: reads one logical keypress, including 3-byte arrow sequences
//! - [`source`]: [`InputSource`], which owns raw mode while a game runs and
//!   polls once per frame without blocking
//!
//! Unrecognised keys are not errors; they decode to `None`.

pub mod decode;
pub mod map;
pub mod source;

pub use tui_loop_term as term;
pub use tui_loop_types as types;

pub use decode::{read_key, KeyCode};
pub use map::{map_key, KEY_BINDINGS};
pub use source::{InputSource, ModeState};
