//! One-keypress decoder.
//!
//! A keypress is one byte, or the escape byte followed by exactly two more
//! (`ESC [ A`). This is a fixed-width decode, not a general escape-sequence
//! parser: longer sequences leave their tail in the device for later frames,
//! where it decodes to unmapped codes.

use std::io;
use std::time::Duration;

use arrayvec::ArrayVec;

use crate::term::Tty;
use crate::types::{ESC, ESCAPE_SEQUENCE_LEN};

/// Raw code of one keypress: 1 byte, or up to 3 for an escape sequence.
pub type KeyCode = ArrayVec<u8, ESCAPE_SEQUENCE_LEN>;

/// Read one keypress if one is pending.
///
/// Returns `Ok(None)` without blocking when nothing is pending. After an
/// escape byte, each trailing byte is awaited for at most `escape_timeout`;
/// a lone or truncated sequence is returned as read (it maps to no button).
pub fn read_key<T: Tty>(tty: &mut T, escape_timeout: Duration) -> io::Result<Option<KeyCode>> {
    if !tty.poll_readable(Duration::ZERO)? {
        return Ok(None);
    }
    let Some(first) = tty.read_byte()? else {
        return Ok(None);
    };

    let mut code = KeyCode::new();
    code.push(first.to_ascii_lowercase());

    if first == ESC {
        while !code.is_full() {
            if !tty.poll_readable(escape_timeout)? {
                log::trace!("escape sequence cut short: {:?}", code.as_slice());
                break;
            }
            match tty.read_byte()? {
                Some(byte) => code.push(byte),
                None => break,
            }
        }
    }

    Ok(Some(code))
}
