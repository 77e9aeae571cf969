//! In-memory terminal device.
//!
//! Feeds a fixed byte script to the input layer and records what the input
//! layer did to the device mode. Used for headless runs and throughout the
//! test suites.

use std::collections::VecDeque;
use std::io;
use std::time::Duration;

use crate::tty::Tty;

/// Line-discipline flags tracked by [`ScriptedTty`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScriptedMode {
    pub canonical: bool,
    pub echo: bool,
}

impl ScriptedMode {
    /// A freshly opened interactive terminal.
    pub const COOKED: ScriptedMode = ScriptedMode {
        canonical: true,
        echo: true,
    };
}

impl Default for ScriptedMode {
    fn default() -> Self {
        Self::COOKED
    }
}

#[derive(Debug, Clone)]
pub struct ScriptedTty {
    pending: VecDeque<u8>,
    mode: ScriptedMode,
    mode_writes: u32,
    unavailable: bool,
}

impl ScriptedTty {
    pub fn new() -> Self {
        Self {
            pending: VecDeque::new(),
            mode: ScriptedMode::COOKED,
            mode_writes: 0,
            unavailable: false,
        }
    }

    /// Device with `bytes` already waiting to be read.
    pub fn with_input(bytes: &[u8]) -> Self {
        let mut tty = Self::new();
        tty.push(bytes);
        tty
    }

    /// Device that behaves like a non-interactive stdin: every mode query
    /// fails with `ENOTTY`.
    pub fn unavailable() -> Self {
        Self {
            unavailable: true,
            ..Self::new()
        }
    }

    /// Queue more bytes behind the ones already pending.
    pub fn push(&mut self, bytes: &[u8]) {
        self.pending.extend(bytes.iter().copied());
    }

    pub fn pending(&self) -> usize {
        self.pending.len()
    }

    pub fn mode(&self) -> ScriptedMode {
        self.mode
    }

    /// Number of successful `set_mode` calls.
    pub fn mode_writes(&self) -> u32 {
        self.mode_writes
    }
}

impl Default for ScriptedTty {
    fn default() -> Self {
        Self::new()
    }
}

impl Tty for ScriptedTty {
    type Mode = ScriptedMode;

    fn get_mode(&self) -> io::Result<ScriptedMode> {
        if self.unavailable {
            return Err(io::Error::from_raw_os_error(nix::libc::ENOTTY));
        }
        Ok(self.mode)
    }

    fn set_mode(&mut self, mode: &ScriptedMode) -> io::Result<()> {
        if self.unavailable {
            return Err(io::Error::from_raw_os_error(nix::libc::ENOTTY));
        }
        self.mode = *mode;
        self.mode_writes += 1;
        Ok(())
    }

    fn raw_mode(_mode: &ScriptedMode) -> ScriptedMode {
        ScriptedMode {
            canonical: false,
            echo: false,
        }
    }

    // Scripted bytes are either there or never coming; the timeout is moot.
    fn poll_readable(&mut self, _timeout: Duration) -> io::Result<bool> {
        Ok(!self.pending.is_empty())
    }

    fn read_byte(&mut self) -> io::Result<Option<u8>> {
        Ok(self.pending.pop_front())
    }
}
