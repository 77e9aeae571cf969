//! Byte-level input scenarios through the public API.

use tui_loop::input::{map_key, read_key, InputSource, KEY_BINDINGS};
use tui_loop::term::ScriptedTty;
use tui_loop::types::Button;

use std::time::Duration;

fn poll_once(bytes: &[u8]) -> Option<Button> {
    let mut source = InputSource::new(ScriptedTty::with_input(bytes));
    source.acquire().unwrap();
    source.poll()
}

#[test]
fn letter_a_is_left() {
    assert_eq!(poll_once(b"a"), Some(Button::Left));
}

#[test]
fn escape_bracket_a_is_up() {
    assert_eq!(poll_once(&[0x1b, b'[', b'A']), Some(Button::Up));
}

#[test]
fn q_is_quit() {
    assert_eq!(poll_once(b"q"), Some(Button::Quit));
}

#[test]
fn unmapped_letter_is_none() {
    assert_eq!(poll_once(b"m"), None);
}

#[test]
fn uppercase_letters_fold_to_lowercase() {
    for (upper, button) in [
        (b"W", Button::Up),
        (b"A", Button::Left),
        (b"S", Button::Down),
        (b"D", Button::Right),
        (b"Z", Button::A),
        (b"X", Button::B),
        (b"J", Button::A),
        (b"K", Button::B),
        (b"Q", Button::Quit),
    ] {
        assert_eq!(poll_once(upper), Some(button));
    }
}

#[test]
fn all_arrow_keys() {
    assert_eq!(poll_once(b"\x1b[A"), Some(Button::Up));
    assert_eq!(poll_once(b"\x1b[B"), Some(Button::Down));
    assert_eq!(poll_once(b"\x1b[C"), Some(Button::Right));
    assert_eq!(poll_once(b"\x1b[D"), Some(Button::Left));
}

#[test]
fn lone_escape_is_none() {
    assert_eq!(poll_once(b"\x1b"), None);
}

#[test]
fn every_binding_decodes_from_its_own_bytes() {
    for (code, button) in KEY_BINDINGS {
        let mut tty = ScriptedTty::with_input(code);
        let decoded = read_key(&mut tty, Duration::from_millis(1))
            .unwrap()
            .unwrap();
        assert_eq!(decoded.as_slice(), code);
        assert_eq!(map_key(&decoded), Some(button));
    }
}

#[test]
fn mapping_is_deterministic_across_calls() {
    for (code, _) in KEY_BINDINGS {
        let first = map_key(code);
        for _ in 0..10 {
            assert_eq!(map_key(code), first);
        }
    }
}

#[test]
fn stream_of_mixed_keys() {
    let mut source = InputSource::new(ScriptedTty::with_input(b"w\x1b[Dm\x1b[Zkq"));
    source.acquire().unwrap();

    let pressed: Vec<Option<Button>> = (0..7).map(|_| source.poll()).collect();
    assert_eq!(
        pressed,
        vec![
            Some(Button::Up),
            Some(Button::Left),
            None,
            None,
            Some(Button::B),
            Some(Button::Quit),
            None,
        ]
    );
}
