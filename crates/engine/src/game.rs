//! The game contract.

use std::io::Write;

use crate::types::{Button, Result};

/// Hooks the loop driver calls, plus queries concrete games answer.
///
/// Every method has a default, so a game overrides only what it needs. Note
/// that the default `is_closed` is always `false`: a game that never
/// overrides it runs forever.
///
/// Call order: `start` once, then `update`/`draw` once per frame while
/// `is_closed` is false, then `end` once. `end` also runs when `start` or a
/// frame hook fails, so it must cope with a partially started game.
pub trait Game {
    /// One-time setup. Resource acquisition failures must be returned, not
    /// swallowed.
    fn start(&mut self) -> Result<()> {
        Ok(())
    }

    /// Advance one frame. Must not block.
    fn update(&mut self) -> Result<()> {
        Ok(())
    }

    /// Render the current state. Takes `&self`: drawing never changes state.
    fn draw(&self, out: &mut dyn Write) -> Result<()> {
        let _ = out;
        Ok(())
    }

    /// Release whatever `start` acquired.
    fn end(&mut self) {}

    /// Most recent button pressed, `None` if no key was pending. Never blocks.
    fn input(&mut self) -> Option<Button> {
        None
    }

    fn is_closed(&self) -> bool {
        false
    }

    /// Domain-specific; the driver never consults it.
    fn is_game_over(&self) -> bool {
        false
    }
}
