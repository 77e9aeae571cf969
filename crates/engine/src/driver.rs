//! Fixed-rate loop driver.
//!
//! One run is `start → [update → draw → sleep]* → end`, single-threaded. The
//! end-of-frame sleep is `max(0, interval - elapsed)`: a slow frame is never
//! paid back by shortening the next one.

use std::io::{self, Write};
use std::time::Duration;

use crate::clock::{Clock, SystemClock};
use crate::game::Game;
use crate::types::{FrameRate, Result};

/// Per-frame sleep calculation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FramePacer {
    interval: Option<Duration>,
}

impl FramePacer {
    pub fn new(rate: FrameRate) -> Self {
        Self {
            interval: rate.frame_interval(),
        }
    }

    pub fn is_throttled(&self) -> bool {
        self.interval.is_some()
    }

    /// Sleep owed after a frame that took `elapsed`. Zero when unthrottled
    /// or when the frame used up its budget.
    pub fn sleep_after(&self, elapsed: Duration) -> Duration {
        self.interval
            .map_or(Duration::ZERO, |interval| interval.saturating_sub(elapsed))
    }
}

/// What a finished run did.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunReport {
    /// Frames executed (`update` + `draw` pairs).
    pub frames: u64,
    /// Throttled frames that used their whole budget and got no sleep.
    pub overruns: u64,
    /// Total time spent sleeping between frames.
    pub slept: Duration,
}

pub struct LoopDriver<C = SystemClock> {
    pacer: FramePacer,
    clock: C,
}

impl LoopDriver {
    pub fn new(rate: FrameRate) -> Self {
        Self::with_clock(rate, SystemClock)
    }
}

impl<C: Clock> LoopDriver<C> {
    pub fn with_clock(rate: FrameRate, clock: C) -> Self {
        Self {
            pacer: FramePacer::new(rate),
            clock,
        }
    }

    /// Run `game` until it reports closed, drawing into `out`.
    ///
    /// `game.end()` runs exactly once however this returns: normal closure,
    /// an error from any hook (including `start`), or a panic unwinding
    /// through here. Errors are returned after `end` has run.
    pub fn run<G, W>(&mut self, game: &mut G, out: &mut W) -> Result<RunReport>
    where
        G: Game + ?Sized,
        W: Write,
    {
        let mut session = Session { game };
        session.game.start()?;

        let mut report = RunReport::default();
        while !session.game.is_closed() {
            let frame_start = self.clock.now();

            session.game.update()?;
            session.game.draw(out)?;
            out.flush()?;
            report.frames += 1;

            let elapsed = self.clock.now().saturating_duration_since(frame_start);
            let sleep = self.pacer.sleep_after(elapsed);
            if sleep.is_zero() {
                if self.pacer.is_throttled() {
                    report.overruns += 1;
                    log::trace!("frame {} overran its budget ({elapsed:?})", report.frames);
                }
            } else {
                self.clock.sleep(sleep);
                report.slept += sleep;
            }
        }

        drop(session);
        log::info!(
            "loop finished: {} frames, {} overruns",
            report.frames,
            report.overruns
        );
        Ok(report)
    }
}

/// Run `game` at `rate` against stdout and the wall clock.
pub fn run<G: Game + ?Sized>(game: &mut G, rate: FrameRate) -> Result<RunReport> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    LoopDriver::new(rate).run(game, &mut out)
}

/// Calls `end` when dropped, so every exit from `run` releases the game.
struct Session<'g, G: Game + ?Sized> {
    game: &'g mut G,
}

impl<G: Game + ?Sized> Drop for Session<'_, G> {
    fn drop(&mut self) {
        self.game.end();
    }
}
