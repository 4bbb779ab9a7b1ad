//! Switch subsystem - turns one noisy input into keystrokes and LED state.
//!
//! ## Pipeline (one poll cycle)
//!
//! ```text
//! pin ─▶ Debouncer ─▶ classify ─▶ Policy ─▶ ActionExecutor ─▶ LED + HID
//!          │                                                  │
//!          └──── dead time after every accepted transition ◀──┘
//! ```
//!
//! [`boot`] performs the one-off BOOTING phase and hands back a
//! [`SwitchController`] in READY, which then polls forever.

pub mod action;
pub mod boot;
pub mod controller;
pub mod debounce;
pub mod executor;
pub mod policy;
pub mod transition;

pub use action::{Action, Emission, KeySequence};
pub use boot::{boot, HostSession};
pub use controller::SwitchController;
pub use debounce::{Debouncer, LogicalState, Transition};
pub use executor::ActionExecutor;
pub use policy::Policy;
pub use transition::{classify, TransitionKind};
