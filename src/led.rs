//! Status LED.
//!
//! Wraps a push-pull output. Profiles without an LED use
//! [`StatusLed::absent`], which accepts every call and drives nothing.

use crate::config::BlinkPattern;
use embedded_hal::digital::OutputPin;
use embedded_hal_async::delay::DelayNs;

pub struct StatusLed<P> {
    pin: Option<P>,
    lit: bool,
}

impl<P: OutputPin> StatusLed<P> {
    /// Take ownership of an LED output. The pin is not driven until the
    /// first [`set`](Self::set).
    pub fn new(pin: P) -> Self {
        Self {
            pin: Some(pin),
            lit: false,
        }
    }

    pub fn absent() -> Self {
        Self {
            pin: None,
            lit: false,
        }
    }

    pub fn is_present(&self) -> bool {
        self.pin.is_some()
    }

    /// Last level written (always `false` for an absent LED).
    pub fn is_lit(&self) -> bool {
        self.lit
    }

    pub fn set(&mut self, on: bool) {
        let Some(pin) = self.pin.as_mut() else {
            return;
        };
        let result = if on { pin.set_high() } else { pin.set_low() };
        match result {
            Ok(()) => self.lit = on,
            Err(_e) => {
                #[cfg(feature = "defmt")]
                defmt::warn!("LED: write failed");
            }
        }
    }

    /// Blink `pattern.count` times and leave the LED off.
    pub async fn self_test<D: DelayNs>(&mut self, pattern: &BlinkPattern, delay: &mut D) {
        if !self.is_present() {
            return;
        }
        #[cfg(feature = "defmt")]
        defmt::info!("LED: self-test, {} blinks", pattern.count);

        for _ in 0..pattern.count {
            self.set(true);
            delay.delay_ms(pattern.on_ms).await;
            self.set(false);
            delay.delay_ms(pattern.off_ms).await;
        }
        self.set(false);
    }
}
