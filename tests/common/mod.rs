//! Shared test utilities for hidswitch integration tests.
//!
//! Every mock appends to one shared [`Log`], so tests can assert on the
//! exact interleaving of LED writes, key events, session calls and waits.

#![allow(dead_code)]

use core::cell::{Cell, RefCell};
use core::convert::Infallible;
use embedded_hal::digital::{ErrorType, InputPin, OutputPin};
use embedded_hal_async::delay::DelayNs;
use hidswitch::config::Settings;
use hidswitch::hid::{Key, Keyboard};
use hidswitch::led::StatusLed;
use hidswitch::switch::{self, HostSession, SwitchController};
use std::rc::Rc;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Event {
    Begin,
    Led(bool),
    Press(Key),
    ReleaseAll,
    Print(String),
    Write(Key),
    Delay(u32),
}

/// Event record plus a mock clock. Every logged `Delay` advances the clock;
/// `clear` leaves it running.
#[derive(Clone, Default)]
pub struct Log {
    events: Rc<RefCell<Vec<Event>>>,
    now_ms: Rc<Cell<u32>>,
}

impl Log {
    pub fn push(&self, event: Event) {
        if let Event::Delay(ms) = event {
            self.now_ms.set(self.now_ms.get() + ms);
        }
        self.events.borrow_mut().push(event);
    }

    pub fn events(&self) -> Vec<Event> {
        self.events.borrow().clone()
    }

    pub fn clear(&self) {
        self.events.borrow_mut().clear();
    }

    pub fn count(&self, pred: impl Fn(&Event) -> bool) -> usize {
        self.events.borrow().iter().filter(|e| pred(e)).count()
    }

    /// Total mock time waited so far.
    pub fn now_ms(&self) -> u32 {
        self.now_ms.get()
    }
}

/// Input pin replaying `true` = low. Holds the last level once drained.
pub struct ScriptedPin {
    lows: Vec<bool>,
    next: usize,
}

impl ScriptedPin {
    pub fn new(lows: &[bool]) -> Self {
        assert!(!lows.is_empty());
        Self {
            lows: lows.to_vec(),
            next: 0,
        }
    }
}

impl ErrorType for ScriptedPin {
    type Error = Infallible;
}

impl InputPin for ScriptedPin {
    fn is_high(&mut self) -> Result<bool, Infallible> {
        self.is_low().map(|low| !low)
    }

    fn is_low(&mut self) -> Result<bool, Infallible> {
        let i = self.next.min(self.lows.len() - 1);
        self.next += 1;
        Ok(self.lows[i])
    }
}

/// Input pin whose level follows the mock clock.
///
/// `schedule` holds `(from_ms, low)` steps measured from the first read, so
/// boot waits do not shift the timeline.
pub struct TimedPin {
    log: Log,
    schedule: Vec<(u32, bool)>,
    origin: Option<u32>,
}

impl TimedPin {
    pub fn new(log: &Log, schedule: &[(u32, bool)]) -> Self {
        assert_eq!(schedule.first().map(|s| s.0), Some(0));
        Self {
            log: log.clone(),
            schedule: schedule.to_vec(),
            origin: None,
        }
    }
}

impl ErrorType for TimedPin {
    type Error = Infallible;
}

impl InputPin for TimedPin {
    fn is_high(&mut self) -> Result<bool, Infallible> {
        self.is_low().map(|low| !low)
    }

    fn is_low(&mut self) -> Result<bool, Infallible> {
        let now = self.log.now_ms();
        let t = now - *self.origin.get_or_insert(now);
        let low = self
            .schedule
            .iter()
            .take_while(|(from, _)| *from <= t)
            .last()
            .map_or(false, |(_, low)| *low);
        Ok(low)
    }
}

pub struct MockLed {
    log: Log,
}

impl MockLed {
    pub fn new(log: &Log) -> Self {
        Self { log: log.clone() }
    }
}

impl ErrorType for MockLed {
    type Error = Infallible;
}

impl OutputPin for MockLed {
    fn set_low(&mut self) -> Result<(), Infallible> {
        self.log.push(Event::Led(false));
        Ok(())
    }

    fn set_high(&mut self) -> Result<(), Infallible> {
        self.log.push(Event::Led(true));
        Ok(())
    }
}

/// Records calls; presses of keys listed in `rejected` report a no-op.
pub struct MockKeyboard {
    log: Log,
    rejected: Vec<Key>,
}

impl MockKeyboard {
    pub fn new(log: &Log) -> Self {
        Self {
            log: log.clone(),
            rejected: Vec::new(),
        }
    }

    pub fn rejecting(log: &Log, rejected: &[Key]) -> Self {
        Self {
            log: log.clone(),
            rejected: rejected.to_vec(),
        }
    }
}

impl Keyboard for MockKeyboard {
    async fn press(&mut self, key: Key) -> bool {
        self.log.push(Event::Press(key));
        !self.rejected.contains(&key)
    }

    async fn release_all(&mut self) {
        self.log.push(Event::ReleaseAll);
    }

    async fn print(&mut self, text: &str) {
        self.log.push(Event::Print(text.to_string()));
    }

    async fn write(&mut self, key: Key) {
        self.log.push(Event::Write(key));
    }
}

pub struct MockDelay {
    log: Log,
}

impl MockDelay {
    pub fn new(log: &Log) -> Self {
        Self { log: log.clone() }
    }
}

impl DelayNs for MockDelay {
    async fn delay_ns(&mut self, ns: u32) {
        self.log.push(Event::Delay(ns / 1_000_000));
    }

    async fn delay_ms(&mut self, ms: u32) {
        self.log.push(Event::Delay(ms));
    }
}

/// Session that reports ready after `ready_after` probes (never if `None`).
pub struct MockSession {
    log: Log,
    ready_after: Option<u32>,
    probes: Cell<u32>,
}

impl MockSession {
    pub fn new(log: &Log, ready_after: Option<u32>) -> Self {
        Self {
            log: log.clone(),
            ready_after,
            probes: Cell::new(0),
        }
    }

    pub fn probes(&self) -> u32 {
        self.probes.get()
    }
}

impl HostSession for MockSession {
    fn begin(&mut self) {
        self.log.push(Event::Begin);
    }

    fn is_ready(&self) -> bool {
        let n = self.probes.get();
        self.probes.set(n + 1);
        matches!(self.ready_after, Some(after) if n >= after)
    }
}

pub type Controller = SwitchController<ScriptedPin, MockLed, MockKeyboard, MockDelay>;

/// Boot against mocks. `lows[0]` is the first sample; the rest are
/// consumed by subsequent polls.
pub fn boot(settings: &Settings, lows: &[bool], log: &Log) -> Controller {
    boot_with_keyboard(settings, lows, log, MockKeyboard::new(log))
}

pub fn boot_with_keyboard(
    settings: &Settings,
    lows: &[bool],
    log: &Log,
    keyboard: MockKeyboard,
) -> Controller {
    let led = if settings.has_led {
        StatusLed::new(MockLed::new(log))
    } else {
        StatusLed::absent()
    };
    let mut session = MockSession::new(log, Some(0));
    embassy_futures::block_on(switch::boot(
        settings,
        &mut session,
        ScriptedPin::new(lows),
        led,
        keyboard,
        MockDelay::new(log),
    ))
}

/// Only the key-related events.
pub fn key_events(events: &[Event]) -> Vec<Event> {
    events
        .iter()
        .filter(|e| {
            matches!(
                e,
                Event::Press(_) | Event::ReleaseAll | Event::Print(_) | Event::Write(_)
            )
        })
        .cloned()
        .collect()
}
