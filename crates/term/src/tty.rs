use std::io;
use std::time::Duration;

/// A terminal input device whose line discipline can be switched.
///
/// Implementations must make `poll_readable(Duration::ZERO)` return
/// immediately; it is called once per frame.
pub trait Tty {
    /// Snapshot of the device's mode configuration.
    type Mode: Clone;

    /// Capture the current mode.
    fn get_mode(&self) -> io::Result<Self::Mode>;

    /// Apply `mode` immediately.
    fn set_mode(&mut self, mode: &Self::Mode) -> io::Result<()>;

    /// Derive the "raw-ish" variant of `mode`: canonical line buffering and
    /// local echo disabled, everything else untouched.
    fn raw_mode(mode: &Self::Mode) -> Self::Mode;

    /// Wait at most `timeout` for input. `true` means a read will not block.
    fn poll_readable(&mut self, timeout: Duration) -> io::Result<bool>;

    /// Read one byte. `None` means end of input.
    fn read_byte(&mut self) -> io::Result<Option<u8>>;
}

/// Lend a device to an input source without giving it up.
impl<T: Tty> Tty for &mut T {
    type Mode = T::Mode;

    fn get_mode(&self) -> io::Result<Self::Mode> {
        (**self).get_mode()
    }

    fn set_mode(&mut self, mode: &Self::Mode) -> io::Result<()> {
        (**self).set_mode(mode)
    }

    fn raw_mode(mode: &Self::Mode) -> Self::Mode {
        T::raw_mode(mode)
    }

    fn poll_readable(&mut self, timeout: Duration) -> io::Result<bool> {
        (**self).poll_readable(timeout)
    }

    fn read_byte(&mut self) -> io::Result<Option<u8>> {
        (**self).read_byte()
    }
}
