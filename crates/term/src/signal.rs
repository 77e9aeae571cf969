//! Interrupt capture.
//!
//! With canonical mode off the terminal still turns Ctrl-C into SIGINT. The
//! default disposition would kill the process with raw mode still applied,
//! so the handler here only records the signal; the game loop notices it at
//! the next frame boundary and shuts down through `end()`.
//!
//! The flag is process-wide. A game clears it with [`clear_interrupt`] when it
//! starts, so an interrupt that ended one run does not close the next.

use std::io;
use std::sync::atomic::{AtomicBool, Ordering};

use nix::libc::c_int;
use nix::sys::signal::{sigaction, SaFlags, SigAction, SigHandler, SigSet, Signal};

static INTERRUPTED: AtomicBool = AtomicBool::new(false);

extern "C" fn on_interrupt(_signal: c_int) {
    INTERRUPTED.store(true, Ordering::SeqCst);
}

/// Route SIGINT and SIGTERM to the interrupt flag.
pub fn install_interrupt_handler() -> io::Result<()> {
    let action = SigAction::new(
        SigHandler::Handler(on_interrupt),
        SaFlags::SA_RESTART,
        SigSet::empty(),
    );
    for signal in [Signal::SIGINT, Signal::SIGTERM] {
        // SAFETY: the handler only stores to an atomic, which is async-signal-safe.
        unsafe { sigaction(signal, &action) }?;
    }
    log::debug!("interrupt handler installed");
    Ok(())
}

/// Whether SIGINT/SIGTERM has arrived since startup or the last
/// [`clear_interrupt`].
pub fn interrupted() -> bool {
    INTERRUPTED.load(Ordering::SeqCst)
}

pub fn clear_interrupt() {
    INTERRUPTED.store(false, Ordering::SeqCst);
}
