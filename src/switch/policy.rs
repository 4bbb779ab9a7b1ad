//! Mode policy - transition kind in, action out.

use super::action::{Action, Emission, KeySequence};
use super::transition::TransitionKind;
use crate::config::{Mode, Settings};

/// Owns the latched toggle state; otherwise stateless.
#[derive(Clone, Debug)]
pub struct Policy {
    mode: Mode,
    on_keys: KeySequence,
    off_keys: KeySequence,
    toggled: bool,
}

impl Policy {
    pub fn new(mode: Mode, on_keys: KeySequence, off_keys: KeySequence) -> Self {
        Self {
            mode,
            on_keys,
            off_keys,
            toggled: false,
        }
    }

    pub fn from_settings(settings: &Settings) -> Self {
        Self::new(settings.mode, settings.on_keys, settings.off_keys)
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// Latched toggle state (always `false` in direct mode).
    pub fn toggled(&self) -> bool {
        self.toggled
    }

    /// Keys that describe `active` in direct mode; used for the boot
    /// announcement.
    pub fn keys_for(&self, active: bool) -> KeySequence {
        if active {
            self.on_keys
        } else {
            self.off_keys
        }
    }

    pub fn decide(&mut self, kind: TransitionKind) -> Action {
        match (self.mode, kind) {
            (_, TransitionKind::None) => Action::None,

            (Mode::Direct, TransitionKind::Activate) => Action::On(Emission {
                led: true,
                keys: self.on_keys,
            }),
            (Mode::Direct, TransitionKind::Deactivate) => Action::Off(Emission {
                led: false,
                keys: self.off_keys,
            }),

            (Mode::Toggle, TransitionKind::Activate) => {
                self.toggled = !self.toggled;
                Action::Toggle(Emission {
                    led: self.toggled,
                    keys: self.keys_for(self.toggled),
                })
            }
            // Momentary trigger: releasing the switch does nothing.
            (Mode::Toggle, TransitionKind::Deactivate) => Action::None,
        }
    }
}
