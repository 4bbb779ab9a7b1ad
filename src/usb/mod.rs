//! USB Device subsystem - presents a HID keyboard to the host.
//!
//! The nRF52840's built-in USB 2.0 Full-Speed controller is driven by
//! `embassy-usb` with a single boot-protocol keyboard interface.
//! The device runner lives in its own Embassy task; the switch loop only
//! sees the [`HostSession`](crate::switch::HostSession) and
//! [`ReportWriter`](crate::hid::ReportWriter) seams.

pub mod hid_device;
