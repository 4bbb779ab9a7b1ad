//! Keyboard usage codes (HID Usage Tables, page 0x07).
//!
//! Only the usages the firmware needs are named; anything else can be
//! built with [`Key::from_usage`].

/// A single keyboard usage.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Key(u8);

impl Key {
    pub const K: Key = Key(0x0E);
    pub const L: Key = Key(0x0F);
    pub const ENTER: Key = Key(0x28);

    pub const LEFT_CTRL: Key = Key(0xE0);
    pub const LEFT_SHIFT: Key = Key(0xE1);

    pub const fn from_usage(usage: u8) -> Self {
        Key(usage)
    }

    pub const fn usage(self) -> u8 {
        self.0
    }

    /// Modifier bit in the report's first byte, if this is a modifier.
    pub const fn modifier_bit(self) -> Option<u8> {
        if self.0 >= 0xE0 && self.0 <= 0xE7 {
            Some(1 << (self.0 - 0xE0))
        } else {
            None
        }
    }

    pub const fn is_modifier(self) -> bool {
        self.modifier_bit().is_some()
    }

    /// Map a printable ASCII byte to its usage on a US layout.
    ///
    /// Returns the key and whether Shift must be held with it.
    pub fn from_ascii(c: u8) -> Option<(Key, bool)> {
        let mapped = match c {
            b'a'..=b'z' => (0x04 + (c - b'a'), false),
            b'A'..=b'Z' => (0x04 + (c - b'A'), true),
            b'1'..=b'9' => (0x1E + (c - b'1'), false),
            b'0' => (0x27, false),
            b'\n' | b'\r' => (0x28, false),
            b'\t' => (0x2B, false),
            b' ' => (0x2C, false),
            b'!' => (0x1E, true),
            b'@' => (0x1F, true),
            b'#' => (0x20, true),
            b'$' => (0x21, true),
            b'%' => (0x22, true),
            b'^' => (0x23, true),
            b'&' => (0x24, true),
            b'*' => (0x25, true),
            b'(' => (0x26, true),
            b')' => (0x27, true),
            b'-' => (0x2D, false),
            b'_' => (0x2D, true),
            b'=' => (0x2E, false),
            b'+' => (0x2E, true),
            b'[' => (0x2F, false),
            b'{' => (0x2F, true),
            b']' => (0x30, false),
            b'}' => (0x30, true),
            b'\\' => (0x31, false),
            b'|' => (0x31, true),
            b';' => (0x33, false),
            b':' => (0x33, true),
            b'\'' => (0x34, false),
            b'"' => (0x34, true),
            b'`' => (0x35, false),
            b'~' => (0x35, true),
            b',' => (0x36, false),
            b'<' => (0x36, true),
            b'.' => (0x37, false),
            b'>' => (0x37, true),
            b'/' => (0x38, false),
            b'?' => (0x38, true),
            _ => return None,
        };
        Some((Key(mapped.0), mapped.1))
    }
}
