//! Raw-mode input source.
//!
//! Mode lifecycle: `Inactive --acquire--> RawActive --release--> Inactive`.
//! The saved mode is held only while `RawActive`, so every successful
//! acquisition is paired with exactly one restore. `Drop` releases too.

use std::time::Duration;

use crate::decode::read_key;
use crate::map::map_key;
use crate::term::Tty;
use crate::types::{Button, Error, Result, DEFAULT_ESCAPE_TIMEOUT_MS};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModeState {
    Inactive,
    RawActive,
}

pub struct InputSource<T: Tty> {
    tty: T,
    saved: Option<T::Mode>,
    escape_timeout: Duration,
}

impl<T: Tty> InputSource<T> {
    pub fn new(tty: T) -> Self {
        Self {
            tty,
            saved: None,
            escape_timeout: Duration::from_millis(DEFAULT_ESCAPE_TIMEOUT_MS),
        }
    }

    pub fn with_escape_timeout(mut self, timeout: Duration) -> Self {
        self.escape_timeout = timeout;
        self
    }

    pub fn escape_timeout(&self) -> Duration {
        self.escape_timeout
    }

    /// Capture the current mode and switch the device to raw-ish mode.
    ///
    /// Failure leaves the source `Inactive` with nothing to restore. Calling
    /// this while already `RawActive` is a no-op.
    pub fn acquire(&mut self) -> Result<()> {
        if self.saved.is_some() {
            return Ok(());
        }

        let saved = self.tty.get_mode().map_err(Error::TerminalUnavailable)?;
        let raw = T::raw_mode(&saved);
        self.tty
            .set_mode(&raw)
            .map_err(Error::TerminalUnavailable)?;

        self.saved = Some(saved);
        log::debug!("raw mode acquired");
        Ok(())
    }

    /// Decode at most one pending keypress. Never blocks on an idle device.
    ///
    /// Unmapped keys, read failures and polling while `Inactive` all yield
    /// `None`.
    pub fn poll(&mut self) -> Option<Button> {
        if self.saved.is_none() {
            return None;
        }

        let code = match read_key(&mut self.tty, self.escape_timeout) {
            Ok(Some(code)) => code,
            Ok(None) => return None,
            Err(err) => {
                log::warn!("terminal read failed: {err}");
                return None;
            }
        };

        let button = map_key(&code);
        if button.is_none() {
            log::trace!("unmapped key {:?}", code.as_slice());
        }
        button
    }

    /// Restore the mode captured by [`acquire`](Self::acquire).
    ///
    /// Idempotent: a no-op when `Inactive`. A failed restore is logged; the
    /// saved mode is dropped either way so it is never applied twice.
    pub fn release(&mut self) {
        let Some(saved) = self.saved.take() else {
            return;
        };
        match self.tty.set_mode(&saved) {
            Ok(()) => log::debug!("terminal mode restored"),
            Err(err) => log::warn!("failed to restore terminal mode: {err}"),
        }
    }

    pub fn state(&self) -> ModeState {
        if self.saved.is_some() {
            ModeState::RawActive
        } else {
            ModeState::Inactive
        }
    }

    pub fn tty(&self) -> &T {
        &self.tty
    }
}

impl<T: Tty> Drop for InputSource<T> {
    fn drop(&mut self) {
        self.release();
    }
}
