//! Reference game: a terminal gamepad.
//!
//! Puts the terminal in raw-ish mode on `start`, reads at most one key per
//! frame, echoes the button it mapped to, and closes on `quit` (or on
//! SIGINT/SIGTERM). Concrete games can embed a `WasdGame` and delegate their
//! lifecycle hooks to it, reading [`WasdGame::last_button`] after each
//! `update`.

use std::io::Write;

use crate::game::Game;
use crate::input::InputSource;
use crate::term::{output, signal, Tty};
use crate::types::{Button, Result};

pub struct WasdGame<T: Tty> {
    source: InputSource<T>,
    frame_count: u64,
    last_button: Option<Button>,
}

impl<T: Tty> WasdGame<T> {
    pub fn new(tty: T) -> Self {
        Self::with_input_source(InputSource::new(tty))
    }

    pub fn with_input_source(source: InputSource<T>) -> Self {
        Self {
            source,
            frame_count: 0,
            last_button: None,
        }
    }

    /// Number of `update` calls since `start`.
    pub fn frame_count(&self) -> u64 {
        self.frame_count
    }

    /// Button read during the latest `update`, if any.
    pub fn last_button(&self) -> Option<Button> {
        self.last_button
    }

    pub fn input_source(&self) -> &InputSource<T> {
        &self.source
    }
}

impl<T: Tty> Game for WasdGame<T> {
    fn start(&mut self) -> Result<()> {
        self.frame_count = 0;
        self.last_button = None;
        signal::clear_interrupt();
        self.source.acquire()
    }

    fn update(&mut self) -> Result<()> {
        self.last_button = self.input();
        self.frame_count += 1;
        Ok(())
    }

    fn draw(&self, out: &mut dyn Write) -> Result<()> {
        if let Some(button) = self.last_button {
            output::status_line(out, "You pressed", button)?;
        }
        Ok(())
    }

    fn end(&mut self) {
        self.source.release();
    }

    fn input(&mut self) -> Option<Button> {
        self.source.poll()
    }

    fn is_closed(&self) -> bool {
        self.last_button == Some(Button::Quit) || signal::interrupted()
    }
}
