//! Error type shared by the loop, input and terminal crates.

use std::io;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    /// Invalid startup configuration (e.g. a bad frame rate). Raised before
    /// the terminal is touched.
    #[error("invalid configuration value {value:?}: {reason}")]
    Configuration { value: String, reason: &'static str },

    /// Raw mode could not be captured or applied; there is no interactive
    /// terminal to retry against.
    #[error("terminal unavailable: {0}")]
    TerminalUnavailable(#[source] io::Error),

    /// Writing to the output sink failed.
    #[error("output error: {0}")]
    Io(#[from] io::Error),

    /// A concrete game reported a failure from one of its hooks.
    #[error("game error: {0}")]
    Game(String),
}

impl Error {
    /// Process exit code for this error.
    pub fn exit_code(&self) -> u8 {
        match self {
            Error::Configuration { .. } => 2,
            Error::TerminalUnavailable(_) => 3,
            Error::Io(_) | Error::Game(_) => 1,
        }
    }
}
