//! Action executor - LED first, then keys, then release.

use super::action::{Action, KeySequence};
use crate::config::Timings;
use crate::hid::{Key, Keyboard};
use crate::led::StatusLed;
use embedded_hal::digital::OutputPin;
use embedded_hal_async::delay::DelayNs;

pub struct ActionExecutor {
    led_settle_ms: u32,
    key_hold_ms: u32,
}

impl ActionExecutor {
    pub fn new(timings: &Timings) -> Self {
        Self {
            led_settle_ms: timings.led_settle_ms,
            key_hold_ms: timings.key_hold_ms,
        }
    }

    /// Apply `action`. The LED is written and allowed to settle before
    /// the host sees any key event.
    pub async fn execute<P, K, D>(
        &self,
        action: &Action,
        led: &mut StatusLed<P>,
        keyboard: &mut K,
        delay: &mut D,
    ) where
        P: OutputPin,
        K: Keyboard,
        D: DelayNs,
    {
        let Some(emission) = action.emission() else {
            return;
        };

        #[cfg(feature = "defmt")]
        defmt::info!("Action: {}", action);

        led.set(emission.led);
        delay.delay_ms(self.led_settle_ms).await;

        self.emit_keys(&emission.keys, keyboard, delay).await;
    }

    /// Type `keys` without touching the LED. `release_all` runs exactly
    /// once, whatever happened to the individual presses.
    pub async fn emit_keys<K, D>(&self, keys: &KeySequence, keyboard: &mut K, delay: &mut D)
    where
        K: Keyboard,
        D: DelayNs,
    {
        match keys {
            KeySequence::Chord(chord) => {
                for &key in chord.iter() {
                    keyboard.press(key).await;
                }
                delay.delay_ms(self.key_hold_ms).await;
            }
            KeySequence::Text(text) => {
                keyboard.print(text).await;
                keyboard.write(Key::ENTER).await;
            }
        }
        keyboard.release_all().await;
    }
}
