//! hidswitch firmware entry point (nRF52840).
//!
//! Spawns nothing up front: the USB device task is started by the boot
//! sequence once the enumeration wait has elapsed, then the switch loop
//! runs on the main task forever.

#![no_std]
#![no_main]

use defmt::info;
use embassy_executor::Spawner;
use embassy_nrf::gpio::{Input, Level, Output, OutputDrive, Pull};
use embassy_nrf::pac;
use embassy_time::Delay;
use hidswitch::config::{self, Settings};
use hidswitch::hid::HidKeyboard;
use hidswitch::led::StatusLed;
use hidswitch::switch;
use hidswitch::usb::hid_device::{self, UsbReportWriter, UsbSession};
use {defmt_rtt as _, panic_probe as _};

#[embassy_executor::main]
async fn main(spawner: Spawner) {
    let p = embassy_nrf::init(Default::default());

    // USB needs the external high-frequency crystal running.
    pac::CLOCK.tasks_hfclkstart().write_value(1);
    while pac::CLOCK.events_hfclkstarted().read() != 1 {}

    let settings: Settings = config::PROFILE.settings();
    info!("hidswitch starting, profile={}", config::PROFILE);

    let switch_pin = Input::new(p.P0_11, Pull::Up);
    let led = if settings.has_led {
        StatusLed::new(Output::new(p.P0_13, Level::Low, OutputDrive::Standard))
    } else {
        StatusLed::absent()
    };

    let usb = hid_device::init(p.USBD);
    let mut session = UsbSession::new(spawner, usb.device);
    let keyboard = HidKeyboard::new(UsbReportWriter::new(usb.keyboard_writer));

    let mut controller = switch::boot(&settings, &mut session, switch_pin, led, keyboard, Delay).await;
    controller.run().await
}
