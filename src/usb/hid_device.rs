//! USB HID keyboard device.
//!
//! Initialises the Embassy USB stack on the nRF52840 hardware USB
//! peripheral and exposes one HID keyboard endpoint.

use crate::config;
use crate::hid::{KeyboardReport, ReportWriter};
use crate::hid::keyboard::KEYBOARD_REPORT_SIZE;
use crate::switch::HostSession;
use defmt::{info, warn};
use embassy_executor::Spawner;
use embassy_nrf::usb::vbus_detect::HardwareVbusDetect;
use embassy_nrf::usb::Driver;
use embassy_nrf::{self, bind_interrupts, peripherals};
use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::signal::Signal;
use embassy_usb::class::hid::{Config as HidConfig, HidWriter, State};
use embassy_usb::{Builder, Config, UsbDevice};
use static_cell::StaticCell;
use usbd_hid::descriptor::{KeyboardReport as KeyboardDescriptor, SerializedDescriptor};

bind_interrupts!(struct Irqs {
    USBD => embassy_nrf::usb::InterruptHandler<peripherals::USBD>;
    CLOCK_POWER => embassy_nrf::usb::vbus_detect::InterruptHandler;
});

pub type UsbDriver = Driver<'static, peripherals::USBD, HardwareVbusDetect>;

static KB_STATE: StaticCell<State> = StaticCell::new();
static USB_CONFIG_DESC: StaticCell<[u8; 256]> = StaticCell::new();
static USB_BOS_DESC: StaticCell<[u8; 256]> = StaticCell::new();
static USB_MSOS_DESC: StaticCell<[u8; 256]> = StaticCell::new();
static USB_CTRL_BUF: StaticCell<[u8; 64]> = StaticCell::new();
static USB_STATE_HANDLER: StaticCell<UsbStateHandler> = StaticCell::new();

/// Raised while the host has the device in the configured state.
static USB_CONFIGURED: Signal<CriticalSectionRawMutex, ()> = Signal::new();

struct UsbStateHandler;

impl embassy_usb::Handler for UsbStateHandler {
    fn configured(&mut self, configured: bool) {
        info!("USB: configured={}", configured);
        if configured {
            USB_CONFIGURED.signal(());
        } else {
            USB_CONFIGURED.reset();
        }
    }

    fn suspended(&mut self, suspended: bool) {
        info!("USB: suspended={}", suspended);
    }
}

/// Build result containing the USB device runner and the keyboard writer.
pub struct UsbHidDevice {
    pub device: UsbDevice<'static, UsbDriver>,
    pub keyboard_writer: HidWriter<'static, UsbDriver, 8>,
}

/// Initialise the USB stack and create the HID keyboard.
///
/// Must be called exactly once.  All static buffers are consumed here.
pub fn init(usbd: peripherals::USBD) -> UsbHidDevice {
    // Create the low-level USB driver with hardware VBUS detection.
    let driver = Driver::new(usbd, Irqs, HardwareVbusDetect::new(Irqs));

    // USB device-level configuration.
    let mut usb_config = Config::new(config::USB_VID, config::USB_PID);
    usb_config.manufacturer = Some(config::USB_MANUFACTURER);
    usb_config.product = Some(config::USB_PRODUCT);
    usb_config.serial_number = Some(config::USB_SERIAL_NUMBER);
    usb_config.max_power = 100; // mA
    usb_config.max_packet_size_0 = 64;

    let mut builder = Builder::new(
        driver,
        usb_config,
        USB_CONFIG_DESC.init([0u8; 256]),
        USB_BOS_DESC.init([0u8; 256]),
        USB_MSOS_DESC.init([0u8; 256]),
        USB_CTRL_BUF.init([0u8; 64]),
    );

    builder.handler(USB_STATE_HANDLER.init(UsbStateHandler));

    let kb_config = HidConfig {
        report_descriptor: KeyboardDescriptor::desc(),
        request_handler: None,
        poll_ms: config::USB_HID_POLL_MS,
        max_packet_size: 8,
    };
    let keyboard_writer = HidWriter::new(&mut builder, KB_STATE.init(State::new()), kb_config);

    let device = builder.build();

    info!("USB HID keyboard initialised");

    UsbHidDevice {
        device,
        keyboard_writer,
    }
}

/// Run the USB device stack - handles enumeration, suspend/resume and
/// endpoint servicing forever.
#[embassy_executor::task]
async fn usb_device_task(mut device: UsbDevice<'static, UsbDriver>) -> ! {
    info!("USB device task started");
    device.run().await
}

/// The USB session as seen by the boot sequence. Nothing is attached to
/// the bus until [`HostSession::begin`].
pub struct UsbSession {
    spawner: Spawner,
    device: Option<UsbDevice<'static, UsbDriver>>,
}

impl UsbSession {
    pub fn new(spawner: Spawner, device: UsbDevice<'static, UsbDriver>) -> Self {
        Self {
            spawner,
            device: Some(device),
        }
    }
}

impl HostSession for UsbSession {
    fn begin(&mut self) {
        let Some(device) = self.device.take() else {
            warn!("USB: session already started");
            return;
        };
        if self.spawner.spawn(usb_device_task(device)).is_err() {
            warn!("USB: could not spawn device task");
        }
    }

    fn is_ready(&self) -> bool {
        USB_CONFIGURED.signaled()
    }
}

/// Keyboard reports out through the HID interrupt endpoint.
pub struct UsbReportWriter {
    writer: HidWriter<'static, UsbDriver, 8>,
}

impl UsbReportWriter {
    pub fn new(writer: HidWriter<'static, UsbDriver, 8>) -> Self {
        Self { writer }
    }
}

impl ReportWriter for UsbReportWriter {
    async fn write_report(&mut self, report: &KeyboardReport) {
        let mut buf = [0u8; KEYBOARD_REPORT_SIZE];
        let n = report.serialize(&mut buf);
        if let Err(_e) = self.writer.write(&buf[..n]).await {
            warn!("USB keyboard write failed");
        }
    }
}
