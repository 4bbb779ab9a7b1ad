//! Switch input debouncing.
//!
//! The switch is active-low with a pull-up: closed reads low.
//!
//! A change is accepted on the first sample that differs from the stored
//! state; the controller then waits out the dead time before sampling
//! again. Bounce inside that window is never seen.

use crate::error::Error;
use embedded_hal::digital::InputPin;

/// Debounced switch position.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum LogicalState {
    /// Switch closed (pin low).
    Active,
    /// Switch open (pin high).
    #[default]
    Inactive,
}

impl LogicalState {
    pub fn from_pin_low(is_low: bool) -> Self {
        if is_low {
            LogicalState::Active
        } else {
            LogicalState::Inactive
        }
    }

    pub fn is_active(self) -> bool {
        self == LogicalState::Active
    }
}

/// An accepted change of logical state.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Transition {
    pub previous: LogicalState,
    pub current: LogicalState,
}

pub struct Debouncer<P> {
    pin: P,
    state: LogicalState,
}

impl<P: InputPin> Debouncer<P> {
    /// Take the first sample as the starting state. Startup is not a
    /// transition, so nothing is reported for it.
    pub fn new(mut pin: P) -> Self {
        let state = match read(&mut pin) {
            Ok(state) => state,
            Err(_e) => {
                #[cfg(feature = "defmt")]
                defmt::warn!("Switch: initial read failed ({}), assuming inactive", _e);
                LogicalState::Inactive
            }
        };
        Self { pin, state }
    }

    pub fn state(&self) -> LogicalState {
        self.state
    }

    /// Sample once. Returns the transition if the pin disagrees with the
    /// stored state, after storing the new state.
    pub fn sample(&mut self) -> Option<Transition> {
        let current = match read(&mut self.pin) {
            Ok(state) => state,
            Err(_e) => {
                #[cfg(feature = "defmt")]
                defmt::warn!("Switch: read failed ({})", _e);
                return None;
            }
        };
        if current == self.state {
            return None;
        }

        let previous = self.state;
        self.state = current;
        Some(Transition { previous, current })
    }
}

fn read<P: InputPin>(pin: &mut P) -> Result<LogicalState, Error> {
    pin.is_low()
        .map(LogicalState::from_pin_low)
        .map_err(|_| Error::Pin)
}
