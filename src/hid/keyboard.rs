//! USB HID keyboard report (boot protocol compatible).
//!
//! Layout (8 bytes):
//! ```text
//! Byte 0: Modifier keys (bitfield)
//!         Bit 0 = Left Ctrl,  Bit 1 = Left Shift,
//!         Bit 2 = Left Alt,   Bit 3 = Left GUI,
//!         Bit 4 = Right Ctrl, Bit 5 = Right Shift,
//!         Bit 6 = Right Alt,  Bit 7 = Right GUI
//! Byte 1: Reserved (0x00)
//! Byte 2-7: Up to 6 simultaneous key codes (USB HID usage codes)
//! ```

use super::keys::Key;

/// Keyboard report size in bytes.
pub const KEYBOARD_REPORT_SIZE: usize = 8;

/// Number of non-modifier key slots in a boot report.
pub const KEY_SLOTS: usize = 6;

/// Standard USB HID boot-protocol keyboard report.
#[derive(Clone, Copy, Default, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct KeyboardReport {
    /// Modifier key bitfield.
    pub modifier: u8,
    /// Reserved byte (always 0x00 per HID spec).
    pub reserved: u8,
    /// Up to 6 simultaneously pressed key codes.
    pub keycodes: [u8; KEY_SLOTS],
}

impl KeyboardReport {
    /// Create an empty (all-keys-released) report.
    pub const fn empty() -> Self {
        Self {
            modifier: 0,
            reserved: 0,
            keycodes: [0; KEY_SLOTS],
        }
    }

    /// Add a key to the report.
    ///
    /// Modifiers set their bit; other keys take the first free slot.
    /// Returns `false` when the report did not change (key already held,
    /// or all six slots in use).
    pub fn press(&mut self, key: Key) -> bool {
        if let Some(bit) = key.modifier_bit() {
            if self.modifier & bit != 0 {
                return false;
            }
            self.modifier |= bit;
            return true;
        }

        let code = key.usage();
        if code == 0 || self.keycodes.contains(&code) {
            return false;
        }
        match self.keycodes.iter_mut().find(|slot| **slot == 0) {
            Some(slot) => {
                *slot = code;
                true
            }
            None => false,
        }
    }

    /// Remove a key from the report. Returns `false` if it was not held.
    pub fn release(&mut self, key: Key) -> bool {
        if let Some(bit) = key.modifier_bit() {
            let held = self.modifier & bit != 0;
            self.modifier &= !bit;
            return held;
        }

        let code = key.usage();
        match self.keycodes.iter_mut().find(|slot| **slot == code) {
            Some(slot) if code != 0 => {
                *slot = 0;
                true
            }
            _ => false,
        }
    }

    /// Release every key and modifier.
    pub fn clear(&mut self) {
        *self = Self::empty();
    }

    /// Serialise into a byte slice for USB HID transmission.
    /// Returns the number of bytes written (always 8).
    pub fn serialize(&self, buf: &mut [u8]) -> usize {
        if buf.len() < KEYBOARD_REPORT_SIZE {
            return 0;
        }
        buf[0] = self.modifier;
        buf[1] = self.reserved;
        buf[2..8].copy_from_slice(&self.keycodes);
        KEYBOARD_REPORT_SIZE
    }

    /// Returns `true` if no keys are pressed (release event).
    pub fn is_empty(&self) -> bool {
        self.modifier == 0 && self.keycodes.iter().all(|&k| k == 0)
    }
}
