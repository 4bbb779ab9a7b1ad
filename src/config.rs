//! Application-wide constants and compile-time configuration.
//!
//! Pin assignments, USB identity, timing parameters and the deployable
//! profile live here so they can be tuned in one place.

use crate::hid::Key;
use crate::switch::KeySequence;

// USB

/// USB VID/PID - use the "pid.codes" open-source test VID.
/// Replace with your own allocated VID/PID for production.
pub const USB_VID: u16 = 0x1209;
pub const USB_PID: u16 = 0x0001;

/// USB device strings.
pub const USB_MANUFACTURER: &str = "hidswitch";
pub const USB_PRODUCT: &str = "Switch HID Keyer";
pub const USB_SERIAL_NUMBER: &str = "000001";

/// USB HID polling interval (ms).
pub const USB_HID_POLL_MS: u8 = 10;

// GPIO pin assignments (nRF52840-DK defaults)
//
// Concrete `embassy_nrf::peripherals::*` pins are picked in `main.rs`.
//
//   Switch (pull-up, closed = low) → P0.11 (Button 1)
//   Status LED                     → P0.13 (LED 1)

// Deployable profile

/// Profile flashed by the embedded binary.
pub const PROFILE: Profile = Profile::DirectChord;

/// Ctrl+Shift+L
pub const CHORD_CTRL_SHIFT_L: &[Key] = &[Key::LEFT_CTRL, Key::LEFT_SHIFT, Key::L];

/// Ctrl+Shift+K
pub const CHORD_CTRL_SHIFT_K: &[Key] = &[Key::LEFT_CTRL, Key::LEFT_SHIFT, Key::K];

/// How transitions map to actions.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Mode {
    /// Activate emits the "on" payload, deactivate the "off" payload.
    /// LED mirrors the switch.
    Direct,
    /// Each activate flips a latched state; deactivate is ignored.
    Toggle,
}

/// Fixed-count LED blink run once at boot.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BlinkPattern {
    pub count: u8,
    pub on_ms: u32,
    pub off_ms: u32,
}

/// Every blind wait the firmware performs, in milliseconds.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Timings {
    /// Before the USB session is started, so the host can settle.
    pub enumeration_wait_ms: u32,
    /// After the USB session is started.
    pub session_settle_ms: u32,
    /// After the LED is first driven low.
    pub pin_settle_ms: u32,
    /// Between the LED write and the first key event of an action.
    pub led_settle_ms: u32,
    /// How long chord keys stay down.
    pub key_hold_ms: u32,
    /// Dead time after every accepted transition; this is the debounce.
    pub dead_time_ms: u32,
    /// Wait between samples when nothing changed.
    pub poll_interval_ms: u32,
}

impl Timings {
    pub const DEFAULT: Timings = Timings {
        enumeration_wait_ms: 5000,
        session_settle_ms: 3000,
        pin_settle_ms: 10,
        led_settle_ms: 20,
        key_hold_ms: 50,
        dead_time_ms: 50,
        poll_interval_ms: 10,
    };
}

impl Default for Timings {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Optional bounded check that the host has configured the device.
///
/// Runs after the blind settle wait; a failed probe is logged and boot
/// carries on.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ReadinessProbe {
    pub attempts: u8,
    pub interval_ms: u32,
}

/// Everything the switch logic needs to know about one deployment.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Settings {
    pub mode: Mode,
    pub on_keys: KeySequence,
    pub off_keys: KeySequence,
    /// Whether the board has a status LED wired up.
    pub has_led: bool,
    pub self_test: Option<BlinkPattern>,
    /// Type the initial switch state once at boot.
    pub announce_initial: bool,
    pub timings: Timings,
    pub readiness: Option<ReadinessProbe>,
}

/// The deployable variants.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Profile {
    /// Types "ON"/"OFF" + Return on every edge. No LED.
    TextAnnounce,
    /// Ctrl+Shift+L on every press, LED latches on/off.
    ToggleChord,
    /// Ctrl+Shift+L on press, Ctrl+Shift+K on release, LED mirrors switch.
    DirectChord,
}

const SELF_TEST: BlinkPattern = BlinkPattern {
    count: 3,
    on_ms: 200,
    off_ms: 200,
};

impl Profile {
    pub const fn settings(self) -> Settings {
        match self {
            Profile::TextAnnounce => Settings {
                mode: Mode::Direct,
                on_keys: KeySequence::Text("ON"),
                off_keys: KeySequence::Text("OFF"),
                has_led: false,
                self_test: None,
                announce_initial: true,
                timings: Timings {
                    dead_time_ms: 300,
                    poll_interval_ms: 1,
                    ..Timings::DEFAULT
                },
                readiness: None,
            },
            Profile::ToggleChord => Settings {
                mode: Mode::Toggle,
                on_keys: KeySequence::Chord(CHORD_CTRL_SHIFT_L),
                off_keys: KeySequence::Chord(CHORD_CTRL_SHIFT_L),
                has_led: true,
                self_test: Some(SELF_TEST),
                announce_initial: false,
                timings: Timings {
                    dead_time_ms: 50,
                    poll_interval_ms: 50,
                    ..Timings::DEFAULT
                },
                readiness: None,
            },
            Profile::DirectChord => Settings {
                mode: Mode::Direct,
                on_keys: KeySequence::Chord(CHORD_CTRL_SHIFT_L),
                off_keys: KeySequence::Chord(CHORD_CTRL_SHIFT_K),
                has_led: true,
                self_test: Some(SELF_TEST),
                announce_initial: false,
                timings: Timings::DEFAULT,
                readiness: Some(ReadinessProbe {
                    attempts: 20,
                    interval_ms: 100,
                }),
            },
        }
    }
}
