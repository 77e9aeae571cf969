//! Core types module - shared data structures and constants
//!
//! This module defines the small vocabulary shared by every other crate:
//! the abstract [`Button`] set that key decoding normalizes to, the
//! [`FrameRate`] selector, and the crate-wide [`Error`] type.
//!
//! # Timing and Input Constants
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `DEFAULT_FPS` | 30 | Target frame rate when none is given |
//! | `ESC` | 0x1b | First byte of arrow-key escape sequences |
//! | `ESCAPE_SEQUENCE_LEN` | 3 | Fixed width of a decoded escape sequence |
//! | `DEFAULT_ESCAPE_TIMEOUT_MS` | 20 | Wait for each trailing escape byte |
//!
//! # Example
//!
//! ```
//! use tui_loop_types::{Button, FrameRate};
//!
//! assert_eq!(Button::from_str("UP"), Some(Button::Up));
//! assert_eq!(Button::A.as_str(), "A");
//!
//! let rate: FrameRate = "inf".parse().unwrap();
//! assert_eq!(rate, FrameRate::Unlimited);
//! assert!(rate.frame_interval().is_none());
//! ```

use std::fmt;
use std::str::FromStr;
use std::time::Duration;

pub mod error;

pub use error::{Error, Result};

/// Target frame rate used when none is configured.
pub const DEFAULT_FPS: f64 = 30.0;

/// Escape byte that starts a multi-byte key sequence.
pub const ESC: u8 = 0x1b;

/// Escape byte plus the two bytes of an arrow-key sequence (`ESC [ A`).
pub const ESCAPE_SEQUENCE_LEN: usize = 3;

/// How long to wait for each trailing byte after an escape byte.
pub const DEFAULT_ESCAPE_TIMEOUT_MS: u64 = 20;

/// Token accepted by [`FrameRate::from_str`] for an unthrottled loop.
pub const UNLIMITED_TOKEN: &str = "inf";

/// Abstract gamepad buttons that raw keys are normalized to.
///
/// "No input" is expressed as `Option::<Button>::None` rather than a variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Button {
    Up,
    Down,
    Left,
    Right,
    A,
    B,
    Quit,
}

impl Button {
    /// Every button, in declaration order.
    pub const ALL: [Button; 7] = [
        Button::Up,
        Button::Down,
        Button::Left,
        Button::Right,
        Button::A,
        Button::B,
        Button::Quit,
    ];

    /// Parse a button name (case-insensitive).
    ///
    /// ```
    /// use tui_loop_types::Button;
    ///
    /// assert_eq!(Button::from_str("left"), Some(Button::Left));
    /// assert_eq!(Button::from_str("b"), Some(Button::B));
    /// assert_eq!(Button::from_str("start"), None);
    /// ```
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "up" => Some(Button::Up),
            "down" => Some(Button::Down),
            "left" => Some(Button::Left),
            "right" => Some(Button::Right),
            "a" => Some(Button::A),
            "b" => Some(Button::B),
            "quit" => Some(Button::Quit),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Button::Up => "up",
            Button::Down => "down",
            Button::Left => "left",
            Button::Right => "right",
            Button::A => "A",
            Button::B => "B",
            Button::Quit => "quit",
        }
    }
}

impl fmt::Display for Button {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Frame-rate selector for the loop driver.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FrameRate {
    /// Throttled to at most this many frames per second (finite, > 0).
    Limited(f64),
    /// Frames run back-to-back with no enforced delay.
    Unlimited,
}

impl FrameRate {
    /// Build a throttled rate, rejecting zero, negative and non-finite
    /// values, and rates so low that one frame would outlast `Duration`.
    pub fn limited(fps: f64) -> Result<Self> {
        let representable =
            fps.is_finite() && fps > 0.0 && Duration::try_from_secs_f64(1.0 / fps).is_ok();
        if representable {
            Ok(FrameRate::Limited(fps))
        } else {
            Err(Error::Configuration {
                value: fps.to_string(),
                reason: "frame rate must be a positive, finite number",
            })
        }
    }

    /// Minimum wall-clock time per frame, or `None` when unthrottled.
    ///
    /// A `Limited` value built without [`FrameRate::limited`] whose interval
    /// does not fit a `Duration` saturates to `Duration::MAX`.
    pub fn frame_interval(&self) -> Option<Duration> {
        match *self {
            FrameRate::Limited(fps) => {
                Some(Duration::try_from_secs_f64(1.0 / fps).unwrap_or(Duration::MAX))
            }
            FrameRate::Unlimited => None,
        }
    }
}

impl Default for FrameRate {
    fn default() -> Self {
        FrameRate::Limited(DEFAULT_FPS)
    }
}

impl fmt::Display for FrameRate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FrameRate::Limited(fps) => write!(f, "{fps} fps"),
            FrameRate::Unlimited => f.write_str("unlimited"),
        }
    }
}

impl FromStr for FrameRate {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let trimmed = s.trim();
        // Checked before numeric parsing: f64 would accept "inf" as infinity.
        if trimmed.eq_ignore_ascii_case(UNLIMITED_TOKEN)
            || trimmed.eq_ignore_ascii_case("unlimited")
        {
            return Ok(FrameRate::Unlimited);
        }

        let fps: f64 = trimmed.parse().map_err(|_| Error::Configuration {
            value: s.to_string(),
            reason: "expected a positive number of frames per second or \"inf\"",
        })?;

        FrameRate::limited(fps).map_err(|_| Error::Configuration {
            value: s.to_string(),
            reason: "frame rate must be a positive, finite number",
        })
    }
}
