//! Unified error type for hidswitch.
//!
//! We avoid `alloc` - all error variants carry only fixed-size data.
//! Implements `defmt::Format` for efficient on-target logging.
//!
//! Nothing here is fatal: callers log the error and fall back to the
//! blind-wait behaviour.

/// Top-level error type used across the application.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Error {
    /// Reading the switch input failed.
    Pin,

    /// The host never configured the device within the readiness probe.
    HostNotReady {
        /// Number of probes made before giving up.
        attempts: u8,
    },
}
