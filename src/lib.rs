//! hidswitch - single-switch USB HID keyer.
//!
//! A debounced switch drives a status LED and emits keyboard chords or
//! literal text to the USB host. The switch logic is generic over
//! `embedded-hal` pins, an async delay and the [`hid::Keyboard`]
//! capability, so everything outside [`usb`] runs on the host too.
//!
//! Usage: `cargo test` (host), `cargo run --release --features embedded`
//! (nRF52840 via probe-rs).
//!
//! Note: The embedded binary uses main.rs with #![no_std] and #![no_main].

#![cfg_attr(not(test), no_std)]

pub mod config;
pub mod error;
pub mod hid;
pub mod led;
pub mod switch;

#[cfg(feature = "embedded")]
pub mod usb;

pub use error::Error;
