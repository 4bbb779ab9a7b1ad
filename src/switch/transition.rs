use super::debounce::LogicalState;

/// Edge between two logical states.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum TransitionKind {
    None,
    /// Inactive → Active (switch closed).
    Activate,
    /// Active → Inactive (switch opened).
    Deactivate,
}

pub fn classify(previous: LogicalState, current: LogicalState) -> TransitionKind {
    match (previous, current) {
        (LogicalState::Inactive, LogicalState::Active) => TransitionKind::Activate,
        (LogicalState::Active, LogicalState::Inactive) => TransitionKind::Deactivate,
        _ => TransitionKind::None,
    }
}
