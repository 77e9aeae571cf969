//! Standard-input terminal device (termios + poll).

use std::io;
use std::os::fd::{AsFd, AsRawFd};
use std::time::Duration;

use nix::errno::Errno;
use nix::poll::{poll, PollFd, PollFlags, PollTimeout};
use nix::sys::termios::{self, LocalFlags, SetArg, Termios};
use nix::unistd;

use crate::tty::Tty;

/// The process's standard input as a [`Tty`].
///
/// Bytes are read with `read(2)` straight from fd 0. `std::io::Stdin` is
/// buffered, and bytes sitting in its buffer are invisible to `poll(2)`.
pub struct StdinTty {
    stdin: io::Stdin,
}

impl StdinTty {
    pub fn new() -> Self {
        Self { stdin: io::stdin() }
    }
}

impl Default for StdinTty {
    fn default() -> Self {
        Self::new()
    }
}

impl Tty for StdinTty {
    type Mode = Termios;

    fn get_mode(&self) -> io::Result<Termios> {
        Ok(termios::tcgetattr(self.stdin.as_fd())?)
    }

    fn set_mode(&mut self, mode: &Termios) -> io::Result<()> {
        termios::tcsetattr(self.stdin.as_fd(), SetArg::TCSANOW, mode)?;
        Ok(())
    }

    fn raw_mode(mode: &Termios) -> Termios {
        let mut raw = mode.clone();
        raw.local_flags.remove(LocalFlags::ICANON | LocalFlags::ECHO);
        raw
    }

    fn poll_readable(&mut self, timeout: Duration) -> io::Result<bool> {
        let millis = u16::try_from(timeout.as_millis()).unwrap_or(u16::MAX);
        let mut fds = [PollFd::new(self.stdin.as_fd(), PollFlags::POLLIN)];

        match poll(&mut fds, PollTimeout::from(millis)) {
            Ok(n) if n > 0 => {
                let revents = fds[0].revents().unwrap_or(PollFlags::empty());
                // HUP counts as readable: the next read reports end of input.
                Ok(revents.intersects(PollFlags::POLLIN | PollFlags::POLLHUP))
            }
            Ok(_) => Ok(false),
            Err(Errno::EINTR) => Ok(false),
            Err(e) => Err(e.into()),
        }
    }

    fn read_byte(&mut self) -> io::Result<Option<u8>> {
        let mut buf = [0u8; 1];
        loop {
            match unistd::read(self.stdin.as_raw_fd(), &mut buf) {
                Ok(0) => return Ok(None),
                Ok(_) => return Ok(Some(buf[0])),
                Err(Errno::EINTR) => continue,
                Err(e) => return Err(e.into()),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use nix::libc;
    use nix::sys::termios::{InputFlags, OutputFlags};

    /// A typical interactive configuration, built without opening a device.
    fn cooked() -> Termios {
        // SAFETY: libc::termios is plain old data; all-zero is a valid value.
        let zeroed: libc::termios = unsafe { std::mem::zeroed() };
        let mut mode = Termios::from(zeroed);
        mode.local_flags = LocalFlags::ICANON
            | LocalFlags::ECHO
            | LocalFlags::ECHOE
            | LocalFlags::ISIG
            | LocalFlags::IEXTEN;
        mode.input_flags = InputFlags::ICRNL | InputFlags::IXON;
        mode.output_flags = OutputFlags::OPOST | OutputFlags::ONLCR;
        mode
    }

    #[test]
    fn raw_mode_only_clears_canonical_and_echo() {
        let saved = cooked();
        let raw = StdinTty::raw_mode(&saved);

        assert!(!raw.local_flags.contains(LocalFlags::ICANON));
        assert!(!raw.local_flags.contains(LocalFlags::ECHO));
        assert_eq!(
            raw.local_flags,
            LocalFlags::ECHOE | LocalFlags::ISIG | LocalFlags::IEXTEN
        );
        assert_eq!(raw.input_flags, saved.input_flags);
        assert_eq!(raw.output_flags, saved.output_flags);
    }

    #[test]
    fn raw_mode_leaves_the_saved_copy_untouched() {
        let saved = cooked();
        let _raw = StdinTty::raw_mode(&saved);

        assert!(saved.local_flags.contains(LocalFlags::ICANON | LocalFlags::ECHO));
    }
}
