//! Logical key events and their legacy numeric codes.
//!
//! Every decoded keypress is a [`KeyEvent`]: a named [`Key`], a raw
//! character byte, or a legacy extended code that fell outside the
//! function-key range. Consumers that still speak the old integer key codes
//! go through [`KeyEvent::code`]; everything else matches on the variants.
//!
//! # Legacy code table
//!
//! ```text
//! Escape 0   Enter 1   Insert 2   Home 3   PageUp 4   Delete 5   End 6
//! PageDown 7   Up 14   Down 15   Left 16   Right 17   F1..F12 18..29
//! NumpadDel 30   Numpad0 31   Space 32   Numpad1..Numpad9 127..135
//! ```

// Rust guideline compliant 2026-02

use std::fmt;

/// Legacy code of [`Key::F1`]; function keys are contiguous from here.
pub const F1_CODE: i32 = 18;

/// A named logical key.
///
/// The set is closed. Each variant has a fixed legacy code, see [`Key::code`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    /// Escape, also produced for abandoned escape sequences.
    Escape,
    /// Enter / carriage return.
    Enter,
    /// Space bar (shares its code with the raw byte `b' '`).
    Space,
    /// Insert.
    Insert,
    /// Home.
    Home,
    /// Page up.
    PageUp,
    /// Delete.
    Delete,
    /// End.
    End,
    /// Page down.
    PageDown,
    /// Cursor up.
    Up,
    /// Cursor down.
    Down,
    /// Cursor left.
    Left,
    /// Cursor right.
    Right,
    /// F1.
    F1,
    /// F2.
    F2,
    /// F3.
    F3,
    /// F4.
    F4,
    /// F5.
    F5,
    /// F6.
    F6,
    /// F7.
    F7,
    /// F8.
    F8,
    /// F9.
    F9,
    /// F10.
    F10,
    /// F11.
    F11,
    /// F12.
    F12,
    /// Numeric keypad decimal / delete.
    NumpadDel,
    /// Numpad 0.
    Numpad0,
    /// Numpad 1.
    Numpad1,
    /// Numpad 2.
    Numpad2,
    /// Numpad 3.
    Numpad3,
    /// Numpad 4.
    Numpad4,
    /// Numpad 5.
    Numpad5,
    /// Numpad 6.
    Numpad6,
    /// Numpad 7.
    Numpad7,
    /// Numpad 8.
    Numpad8,
    /// Numpad 9.
    Numpad9,
}

impl Key {
    /// Every named key, in legacy code order within each group.
    pub const ALL: [Key; 36] = [
        Key::Escape,
        Key::Enter,
        Key::Insert,
        Key::Home,
        Key::PageUp,
        Key::Delete,
        Key::End,
        Key::PageDown,
        Key::Up,
        Key::Down,
        Key::Left,
        Key::Right,
        Key::F1,
        Key::F2,
        Key::F3,
        Key::F4,
        Key::F5,
        Key::F6,
        Key::F7,
        Key::F8,
        Key::F9,
        Key::F10,
        Key::F11,
        Key::F12,
        Key::NumpadDel,
        Key::Numpad0,
        Key::Space,
        Key::Numpad1,
        Key::Numpad2,
        Key::Numpad3,
        Key::Numpad4,
        Key::Numpad5,
        Key::Numpad6,
        Key::Numpad7,
        Key::Numpad8,
        Key::Numpad9,
    ];

    /// Legacy numeric code of this key.
    pub const fn code(self) -> i32 {
        match self {
            Key::Escape => 0,
            Key::Enter => 1,
            Key::Insert => 2,
            Key::Home => 3,
            Key::PageUp => 4,
            Key::Delete => 5,
            Key::End => 6,
            Key::PageDown => 7,
            Key::Up => 14,
            Key::Down => 15,
            Key::Left => 16,
            Key::Right => 17,
            Key::F1 => 18,
            Key::F2 => 19,
            Key::F3 => 20,
            Key::F4 => 21,
            Key::F5 => 22,
            Key::F6 => 23,
            Key::F7 => 24,
            Key::F8 => 25,
            Key::F9 => 26,
            Key::F10 => 27,
            Key::F11 => 28,
            Key::F12 => 29,
            Key::NumpadDel => 30,
            Key::Numpad0 => 31,
            Key::Space => 32,
            Key::Numpad1 => 127,
            Key::Numpad2 => 128,
            Key::Numpad3 => 129,
            Key::Numpad4 => 130,
            Key::Numpad5 => 131,
            Key::Numpad6 => 132,
            Key::Numpad7 => 133,
            Key::Numpad8 => 134,
            Key::Numpad9 => 135,
        }
    }

    /// Named key for a legacy code, if one exists.
    pub fn from_code(code: i32) -> Option<Key> {
        Key::ALL.into_iter().find(|key| key.code() == code)
    }

    /// Function key `F<n>` for `n` in `1..=12`.
    pub fn function(n: u8) -> Option<Key> {
        match n {
            1..=12 => Key::from_code(F1_CODE + i32::from(n) - 1),
            _ => None,
        }
    }

    /// Lowercase display name (`"pageup"`, `"f5"`, `"numpad7"`).
    pub fn name(self) -> &'static str {
        match self {
            Key::Escape => "escape",
            Key::Enter => "enter",
            Key::Space => "space",
            Key::Insert => "insert",
            Key::Home => "home",
            Key::PageUp => "pageup",
            Key::Delete => "delete",
            Key::End => "end",
            Key::PageDown => "pagedown",
            Key::Up => "up",
            Key::Down => "down",
            Key::Left => "left",
            Key::Right => "right",
            Key::F1 => "f1",
            Key::F2 => "f2",
            Key::F3 => "f3",
            Key::F4 => "f4",
            Key::F5 => "f5",
            Key::F6 => "f6",
            Key::F7 => "f7",
            Key::F8 => "f8",
            Key::F9 => "f9",
            Key::F10 => "f10",
            Key::F11 => "f11",
            Key::F12 => "f12",
            Key::NumpadDel => "numpaddel",
            Key::Numpad0 => "numpad0",
            Key::Numpad1 => "numpad1",
            Key::Numpad2 => "numpad2",
            Key::Numpad3 => "numpad3",
            Key::Numpad4 => "numpad4",
            Key::Numpad5 => "numpad5",
            Key::Numpad6 => "numpad6",
            Key::Numpad7 => "numpad7",
            Key::Numpad8 => "numpad8",
            Key::Numpad9 => "numpad9",
        }
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// One decoded keypress.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyEvent {
    /// A named key.
    Key(Key),
    /// A byte with no special meaning, passed through as its own code.
    Char(u8),
    /// Result of the function-key arithmetic that does not land on F1..F12.
    ///
    /// The number is kept exactly as the legacy arithmetic produced it, so
    /// it may be negative or above 255. It may also equal the code of a
    /// named key outside F1..F12 (`[224, 119]` gives 14, the code of
    /// [`Key::Up`]) without being that key: `Legacy(14) != Key(Up)`.
    /// Compare through [`KeyEvent::code`] to match the legacy behavior.
    Legacy(i32),
}

impl KeyEvent {
    /// Event for a legacy function-key code computed by offset arithmetic.
    ///
    /// Codes inside F1..F12 become named keys; anything else is preserved
    /// verbatim as [`KeyEvent::Legacy`].
    pub fn from_function_code(code: i32) -> KeyEvent {
        match code {
            c if (F1_CODE..F1_CODE + 12).contains(&c) => {
                Key::from_code(c).map_or(KeyEvent::Legacy(c), KeyEvent::Key)
            }
            c => KeyEvent::Legacy(c),
        }
    }

    /// Legacy numeric code, the only place keys and raw bytes share a space.
    pub fn code(self) -> i32 {
        match self {
            KeyEvent::Key(key) => key.code(),
            KeyEvent::Char(byte) => i32::from(byte),
            KeyEvent::Legacy(code) => code,
        }
    }

    /// Named key carried by this event.
    ///
    /// A raw space byte reports [`Key::Space`]; no other raw byte is named.
    pub fn key(self) -> Option<Key> {
        match self {
            KeyEvent::Key(key) => Some(key),
            KeyEvent::Char(b' ') => Some(Key::Space),
            KeyEvent::Char(_) | KeyEvent::Legacy(_) => None,
        }
    }
}

impl From<Key> for KeyEvent {
    fn from(key: Key) -> Self {
        KeyEvent::Key(key)
    }
}

impl fmt::Display for KeyEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            KeyEvent::Key(key) => write!(f, "{key}"),
            KeyEvent::Char(b' ') => f.write_str("space"),
            KeyEvent::Char(byte) if byte.is_ascii_graphic() => write!(f, "{}", char::from(*byte)),
            KeyEvent::Char(byte) => write!(f, "0x{byte:02x}"),
            KeyEvent::Legacy(code) => write!(f, "legacy({code})"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    // === Legacy Codes ===

    #[test]
    fn test_documented_codes() {
        assert_eq!(Key::Escape.code(), 0);
        assert_eq!(Key::Enter.code(), 1);
        assert_eq!(Key::Insert.code(), 2);
        assert_eq!(Key::Home.code(), 3);
        assert_eq!(Key::PageUp.code(), 4);
        assert_eq!(Key::Delete.code(), 5);
        assert_eq!(Key::End.code(), 6);
        assert_eq!(Key::PageDown.code(), 7);
        assert_eq!(Key::NumpadDel.code(), 30);
        assert_eq!(Key::Numpad0.code(), 31);
        assert_eq!(Key::Space.code(), 32);
    }

    #[test]
    fn test_contiguous_ranges() {
        let arrows = [Key::Up, Key::Down, Key::Left, Key::Right];
        for (i, key) in arrows.iter().enumerate() {
            assert_eq!(key.code(), 14 + i as i32);
        }
        for n in 1..=12u8 {
            let key = Key::function(n).unwrap();
            assert_eq!(key.code(), 17 + i32::from(n));
            assert_eq!(key.name(), format!("f{n}"));
        }
        let numpad = [
            Key::Numpad1,
            Key::Numpad2,
            Key::Numpad3,
            Key::Numpad4,
            Key::Numpad5,
            Key::Numpad6,
            Key::Numpad7,
            Key::Numpad8,
            Key::Numpad9,
        ];
        for (i, key) in numpad.iter().enumerate() {
            assert_eq!(key.code(), 127 + i as i32);
        }
    }

    #[test]
    fn test_codes_are_unique() {
        let codes: HashSet<i32> = Key::ALL.iter().map(|k| k.code()).collect();
        assert_eq!(codes.len(), Key::ALL.len());
    }

    #[test]
    fn test_from_code_inverts_code() {
        for key in Key::ALL {
            assert_eq!(Key::from_code(key.code()), Some(key));
        }
        assert_eq!(Key::from_code(8), None);
        assert_eq!(Key::from_code(-1), None);
    }

    #[test]
    fn test_function_out_of_range() {
        assert_eq!(Key::function(0), None);
        assert_eq!(Key::function(13), None);
    }

    // === KeyEvent ===

    #[test]
    fn test_function_code_inside_range_is_named() {
        assert_eq!(KeyEvent::from_function_code(18), KeyEvent::Key(Key::F1));
        assert_eq!(KeyEvent::from_function_code(29), KeyEvent::Key(Key::F12));
    }

    #[test]
    fn test_function_code_outside_range_is_preserved() {
        assert_eq!(KeyEvent::from_function_code(17), KeyEvent::Legacy(17));
        assert_eq!(KeyEvent::from_function_code(30), KeyEvent::Legacy(30));
        assert_eq!(KeyEvent::from_function_code(-41), KeyEvent::Legacy(-41));
        assert_eq!(KeyEvent::Legacy(-41).code(), -41);
    }

    #[test]
    fn test_function_code_colliding_with_named_key() {
        // 119 - 123 + 18 = 14 and 168 - 59 + 18 = 127
        let up_like = KeyEvent::from_function_code(14);
        let numpad_like = KeyEvent::from_function_code(127);
        assert_eq!(up_like, KeyEvent::Legacy(14));
        assert_ne!(up_like, KeyEvent::from(Key::Up));
        assert_eq!(up_like.code(), Key::Up.code());
        assert_eq!(up_like.key(), None);
        assert_eq!(numpad_like.code(), Key::Numpad1.code());
    }

    #[test]
    fn test_char_code_is_byte() {
        assert_eq!(KeyEvent::Char(b'a').code(), 97);
        assert_eq!(KeyEvent::Char(255).code(), 255);
    }

    #[test]
    fn test_space_byte_reports_space_key() {
        assert_eq!(KeyEvent::Char(b' ').key(), Some(Key::Space));
        assert_eq!(KeyEvent::Char(b' ').code(), Key::Space.code());
        assert_eq!(KeyEvent::Char(b'x').key(), None);
    }

    #[test]
    fn test_display() {
        assert_eq!(KeyEvent::Key(Key::PageUp).to_string(), "pageup");
        assert_eq!(KeyEvent::Char(b'q').to_string(), "q");
        assert_eq!(KeyEvent::Char(b' ').to_string(), "space");
        assert_eq!(KeyEvent::Char(0x03).to_string(), "0x03");
        assert_eq!(KeyEvent::Legacy(140).to_string(), "legacy(140)");
    }
}
