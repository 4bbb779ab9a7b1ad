use crate::hid::Key;

/// What to type for one emission.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum KeySequence {
    /// Keys pressed together, held, then released together.
    Chord(&'static [Key]),
    /// Literal text followed by Return.
    Text(&'static str),
}

/// LED level plus keys for one emitting action.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Emission {
    pub led: bool,
    pub keys: KeySequence,
}

/// Unit of work handed to the executor, built fresh every cycle.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Action {
    None,
    On(Emission),
    Off(Emission),
    Toggle(Emission),
}

impl Action {
    pub fn emission(&self) -> Option<&Emission> {
        match self {
            Action::None => None,
            Action::On(e) | Action::Off(e) | Action::Toggle(e) => Some(e),
        }
    }
}
