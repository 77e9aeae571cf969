//! Game loop engine.
//!
//! - [`game`]: the [`Game`] contract concrete games implement; every hook has
//!   a no-op default
//! - [`driver`]: [`LoopDriver`], which runs `start → [update → draw → sleep]* → end`
//!   at a target frame rate and guarantees `end` runs exactly once
//! - [`clock`]: wall clock and a manual clock for deterministic runs
//! - [`wasd`]: [`WasdGame`], the reference terminal gamepad game
//!
//! # Example
//!
//! ```
//! use tui_loop_engine::{Game, LoopDriver, ManualClock};
//! use tui_loop_types::{FrameRate, Result};
//!
//! struct Countdown(u32);
//!
//! impl Game for Countdown {
//!     fn update(&mut self) -> Result<()> {
//!         self.0 -= 1;
//!         Ok(())
//!     }
//!     fn is_closed(&self) -> bool {
//!         self.0 == 0
//!     }
//! }
//!
//! let clock = ManualClock::new();
//! let mut driver = LoopDriver::with_clock(FrameRate::Limited(60.0), &clock);
//! let report = driver.run(&mut Countdown(3), &mut Vec::<u8>::new()).unwrap();
//! assert_eq!(report.frames, 3);
//! ```

pub mod clock;
pub mod driver;
pub mod game;
pub mod wasd;

pub use tui_loop_input as input;
pub use tui_loop_term as term;
pub use tui_loop_types as types;

pub use clock::{Clock, ManualClock, SystemClock};
pub use driver::{run, FramePacer, LoopDriver, RunReport};
pub use game::Game;
pub use wasd::WasdGame;
