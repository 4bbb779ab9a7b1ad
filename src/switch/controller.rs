//! READY-state poll loop.

use super::action::Action;
use super::debounce::{Debouncer, LogicalState};
use super::executor::ActionExecutor;
use super::policy::Policy;
use super::transition::classify;
use crate::hid::Keyboard;
use crate::led::StatusLed;
use embedded_hal::digital::{InputPin, OutputPin};
use embedded_hal_async::delay::DelayNs;

/// All mutable state of the running firmware, owned in one place.
pub struct SwitchController<I, O, K, D> {
    debouncer: Debouncer<I>,
    policy: Policy,
    executor: ActionExecutor,
    led: StatusLed<O>,
    keyboard: K,
    delay: D,
    dead_time_ms: u32,
    poll_interval_ms: u32,
}

impl<I, O, K, D> SwitchController<I, O, K, D>
where
    I: InputPin,
    O: OutputPin,
    K: Keyboard,
    D: DelayNs,
{
    #[allow(clippy::too_many_arguments)]
    pub(crate) fn new(
        debouncer: Debouncer<I>,
        policy: Policy,
        executor: ActionExecutor,
        led: StatusLed<O>,
        keyboard: K,
        delay: D,
        dead_time_ms: u32,
        poll_interval_ms: u32,
    ) -> Self {
        Self {
            debouncer,
            policy,
            executor,
            led,
            keyboard,
            delay,
            dead_time_ms,
            poll_interval_ms,
        }
    }

    pub fn state(&self) -> LogicalState {
        self.debouncer.state()
    }

    pub fn policy(&self) -> &Policy {
        &self.policy
    }

    pub fn led(&self) -> &StatusLed<O> {
        &self.led
    }

    pub fn keyboard(&self) -> &K {
        &self.keyboard
    }

    /// One poll cycle. Returns the action that was carried out.
    ///
    /// After an accepted transition the dead time is waited even if the
    /// policy chose to do nothing; otherwise the poll interval is.
    pub async fn poll(&mut self) -> Action {
        let Some(transition) = self.debouncer.sample() else {
            self.delay.delay_ms(self.poll_interval_ms).await;
            return Action::None;
        };

        let kind = classify(transition.previous, transition.current);
        #[cfg(feature = "defmt")]
        defmt::debug!("Switch: {} -> {} ({})", transition.previous, transition.current, kind);

        let action = self.policy.decide(kind);
        self.executor
            .execute(&action, &mut self.led, &mut self.keyboard, &mut self.delay)
            .await;

        self.delay.delay_ms(self.dead_time_ms).await;
        action
    }

    pub async fn run(&mut self) -> ! {
        #[cfg(feature = "defmt")]
        defmt::info!("Switch: ready, mode={} state={}", self.policy.mode(), self.state());

        loop {
            self.poll().await;
        }
    }
}
