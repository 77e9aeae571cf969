//! Key mapping from raw terminal codes to abstract buttons.

use crate::types::Button;

/// The fixed virtual gamepad.
///
/// Single-byte codes are lowercase; [`crate::decode`] lowercases the first
/// byte of every keypress before lookup. Arrow keys arrive as `ESC [ A..D`.
pub const KEY_BINDINGS: [(&[u8], Button); 13] = [
    (b"w", Button::Up),
    (b"a", Button::Left),
    (b"s", Button::Down),
    (b"d", Button::Right),
    (b"\x1b[A", Button::Up),
    (b"\x1b[B", Button::Down),
    (b"\x1b[C", Button::Right),
    (b"\x1b[D", Button::Left),
    (b"z", Button::A),
    (b"x", Button::B),
    (b"j", Button::A),
    (b"k", Button::B),
    (b"q", Button::Quit),
];

/// Map a decoded key code to a button. Codes outside [`KEY_BINDINGS`] give `None`.
pub fn map_key(code: &[u8]) -> Option<Button> {
    match code {
        b"w" | b"\x1b[A" => Some(Button::Up),
        b"s" | b"\x1b[B" => Some(Button::Down),
        b"a" | b"\x1b[D" => Some(Button::Left),
        b"d" | b"\x1b[C" => Some(Button::Right),
        b"z" | b"j" => Some(Button::A),
        b"x" | b"k" => Some(Button::B),
        b"q" => Some(Button::Quit),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_movement_keys() {
        assert_eq!(map_key(b"w"), Some(Button::Up));
        assert_eq!(map_key(b"a"), Some(Button::Left));
        assert_eq!(map_key(b"s"), Some(Button::Down));
        assert_eq!(map_key(b"d"), Some(Button::Right));
    }

    #[test]
    fn test_arrow_keys_match_letters() {
        assert_eq!(map_key(b"\x1b[A"), map_key(b"w"));
        assert_eq!(map_key(b"\x1b[B"), map_key(b"s"));
        assert_eq!(map_key(b"\x1b[C"), map_key(b"d"));
        assert_eq!(map_key(b"\x1b[D"), map_key(b"a"));
    }

    #[test]
    fn test_action_keys() {
        assert_eq!(map_key(b"z"), Some(Button::A));
        assert_eq!(map_key(b"j"), Some(Button::A));
        assert_eq!(map_key(b"x"), Some(Button::B));
        assert_eq!(map_key(b"k"), Some(Button::B));
        assert_eq!(map_key(b"q"), Some(Button::Quit));
    }

    #[test]
    fn test_table_agrees_with_lookup() {
        for (code, button) in KEY_BINDINGS {
            assert_eq!(map_key(code), Some(button), "code {code:?}");
            assert_eq!(map_key(code), map_key(code));
        }
    }

    #[test]
    fn test_table_codes_are_unique() {
        for (i, (a, _)) in KEY_BINDINGS.iter().enumerate() {
            for (b, _) in &KEY_BINDINGS[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn test_every_button_is_reachable() {
        for button in Button::ALL {
            assert!(KEY_BINDINGS.iter().any(|(_, b)| *b == button), "{button}");
        }
    }

    #[test]
    fn test_unmapped_codes() {
        // Uppercase is folded by the decoder, not here.
        let codes: [&[u8]; 11] = [
            b"m",
            b"W",
            b"Q",
            b"",
            b" ",
            b"\x1b",
            b"\x1b[",
            b"\x1b[Z",
            b"\x1bOA",
            b"\x1b[a",
            b"wa",
        ];
        for code in codes {
            assert_eq!(map_key(code), None, "code {code:?}");
        }
    }

    #[test]
    fn test_every_single_byte_outside_table_is_none() {
        let mapped = b"wasdzxjkq";
        for byte in 0..=u8::MAX {
            if !mapped.contains(&byte) {
                assert_eq!(map_key(&[byte]), None, "byte {byte:#04x}");
            }
        }
    }
}
