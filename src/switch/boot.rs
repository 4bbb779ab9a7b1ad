//! BOOTING phase: host session bring-up, LED self-test, first sample.

use super::controller::SwitchController;
use super::debounce::Debouncer;
use super::executor::ActionExecutor;
use super::policy::Policy;
use crate::config::{Mode, ReadinessProbe, Settings};
use crate::error::Error;
use crate::hid::Keyboard;
use crate::led::StatusLed;
use embedded_hal::digital::{InputPin, OutputPin};
use embedded_hal_async::delay::DelayNs;

/// The host-facing USB/HID session.
pub trait HostSession {
    /// Start the session (attach to the bus). Called exactly once.
    fn begin(&mut self);

    /// Whether the host has configured the device.
    fn is_ready(&self) -> bool;
}

/// Poll `session` until it reports ready or the probe runs out.
pub async fn wait_until_ready<S, D>(
    session: &S,
    probe: &ReadinessProbe,
    delay: &mut D,
) -> Result<(), Error>
where
    S: HostSession,
    D: DelayNs,
{
    for _ in 0..probe.attempts {
        if session.is_ready() {
            return Ok(());
        }
        delay.delay_ms(probe.interval_ms).await;
    }
    if session.is_ready() {
        return Ok(());
    }
    Err(Error::HostNotReady {
        attempts: probe.attempts,
    })
}

/// Bring the device up and return the controller in READY.
///
/// Waits are blind: the host is given a fixed time to enumerate before
/// and after the session starts. The first switch sample becomes the
/// starting state and is never treated as a transition.
pub async fn boot<S, I, O, K, D>(
    settings: &Settings,
    session: &mut S,
    switch_pin: I,
    mut led: StatusLed<O>,
    mut keyboard: K,
    mut delay: D,
) -> SwitchController<I, O, K, D>
where
    S: HostSession,
    I: InputPin,
    O: OutputPin,
    K: Keyboard,
    D: DelayNs,
{
    let timings = &settings.timings;

    #[cfg(feature = "defmt")]
    defmt::info!("Boot: waiting {} ms for host", timings.enumeration_wait_ms);
    delay.delay_ms(timings.enumeration_wait_ms).await;

    session.begin();
    delay.delay_ms(timings.session_settle_ms).await;

    if let Some(probe) = settings.readiness.as_ref() {
        match wait_until_ready(session, probe, &mut delay).await {
            Ok(()) => {
                #[cfg(feature = "defmt")]
                defmt::info!("Boot: host configured the device");
            }
            Err(_e) => {
                #[cfg(feature = "defmt")]
                defmt::warn!("Boot: {}, continuing anyway", _e);
            }
        }
    }

    led.set(false);
    delay.delay_ms(timings.pin_settle_ms).await;

    if let Some(pattern) = settings.self_test.as_ref() {
        led.self_test(pattern, &mut delay).await;
    }
    led.set(false);

    let debouncer = Debouncer::new(switch_pin);
    let initial = debouncer.state();
    let policy = Policy::from_settings(settings);
    let executor = ActionExecutor::new(timings);

    if settings.mode == Mode::Direct {
        led.set(initial.is_active());
    }

    if settings.announce_initial {
        let keys = policy.keys_for(initial.is_active());
        executor.emit_keys(&keys, &mut keyboard, &mut delay).await;
    }

    #[cfg(feature = "defmt")]
    defmt::info!("Boot: done, mode={} initial={}", settings.mode, initial);

    SwitchController::new(
        debouncer,
        policy,
        executor,
        led,
        keyboard,
        delay,
        timings.dead_time_ms,
        timings.poll_interval_ms,
    )
}
