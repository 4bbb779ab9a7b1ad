//! HID keyboard layer - report type, key usages and the keyboard
//! capability the switch logic sequences against.
//!
//! The switch logic only ever talks to [`Keyboard`]. On target the
//! capability is provided by [`HidKeyboard`] on top of the USB report
//! writer; host tests substitute a recording mock.

pub mod keyboard;
pub mod keys;


pub use keyboard::KeyboardReport;
pub use keys::Key;

/// Keyboard capability set: press/release plus literal text output.
#[allow(async_fn_in_trait)]
pub trait Keyboard {
    /// Press and keep holding `key`. Returns `false` if the press was a
    /// no-op (already held, or no free slot).
    async fn press(&mut self, key: Key) -> bool;

    /// Release every held key and modifier.
    async fn release_all(&mut self);

    /// Type `text` one character at a time.
    async fn print(&mut self, text: &str);

    /// Tap a single key (press, then release it).
    async fn write(&mut self, key: Key);
}

/// Sink for serialized keyboard reports (the HID interrupt IN endpoint).
#[allow(async_fn_in_trait)]
pub trait ReportWriter {
    async fn write_report(&mut self, report: &KeyboardReport);
}

/// [`Keyboard`] implemented on top of boot-protocol reports.
///
/// Every state change sends one report; no-op presses send nothing.
pub struct HidKeyboard<W> {
    writer: W,
    report: KeyboardReport,
}

impl<W: ReportWriter> HidKeyboard<W> {
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            report: KeyboardReport::empty(),
        }
    }

    /// Keys currently reported as held.
    pub fn report(&self) -> &KeyboardReport {
        &self.report
    }

    pub fn into_inner(self) -> W {
        self.writer
    }

    async fn tap(&mut self, key: Key, shift: bool) {
        let shift_added = shift && self.report.press(Key::LEFT_SHIFT);
        let key_added = self.report.press(key);
        if shift_added || key_added {
            self.writer.write_report(&self.report).await;
        }

        let key_removed = key_added && self.report.release(key);
        let shift_removed = shift_added && self.report.release(Key::LEFT_SHIFT);
        if key_removed || shift_removed {
            self.writer.write_report(&self.report).await;
        }
    }
}

impl<W: ReportWriter> Keyboard for HidKeyboard<W> {
    async fn press(&mut self, key: Key) -> bool {
        if !self.report.press(key) {
            #[cfg(feature = "defmt")]
            defmt::debug!("HID: press {:?} ignored", key);
            return false;
        }
        self.writer.write_report(&self.report).await;
        true
    }

    async fn release_all(&mut self) {
        self.report.clear();
        self.writer.write_report(&self.report).await;
    }

    async fn print(&mut self, text: &str) {
        for c in text.bytes() {
            match Key::from_ascii(c) {
                Some((key, shift)) => self.tap(key, shift).await,
                None => {
                    #[cfg(feature = "defmt")]
                    defmt::warn!("HID: no usage for byte {=u8:#x}, skipped", c);
                }
            }
        }
    }

    async fn write(&mut self, key: Key) {
        self.tap(key, false).await;
    }
}
