//! USB HID mouse device.
//!
//! Initialises the Embassy USB stack on the nRF52840 hardware USB
//! peripheral and exposes one HID IN endpoint.

use defmt::{info, warn};
use embassy_nrf::usb::vbus_detect::HardwareVbusDetect;
use embassy_nrf::usb::Driver;
use embassy_nrf::{self, bind_interrupts, peripherals};
use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::channel::Receiver;
use embassy_usb::class::hid::{Config as HidConfig, HidWriter, State};
use embassy_usb::{Builder, Config, UsbDevice};
use hidreplay::config;
use hidreplay::error::Error;
use hidreplay::hid::mouse::{MouseReport, MOUSE_REPORT_DESCRIPTOR, MOUSE_REPORT_SIZE};
use static_cell::StaticCell;

bind_interrupts!(struct Irqs {
    USBD => embassy_nrf::usb::InterruptHandler<peripherals::USBD>;
    CLOCK_POWER => embassy_nrf::usb::vbus_detect::InterruptHandler;
});

/// Concrete USB driver type.
pub type UsbDriver = Driver<'static, peripherals::USBD, HardwareVbusDetect>;

/// Receiving end of the control loop → HID writer queue.
pub type ReportReceiver =
    Receiver<'static, CriticalSectionRawMutex, MouseReport, { config::REPORT_QUEUE_DEPTH }>;

static MOUSE_STATE: StaticCell<State> = StaticCell::new();
static USB_CONFIG_DESC: StaticCell<[u8; 256]> = StaticCell::new();
static USB_BOS_DESC: StaticCell<[u8; 256]> = StaticCell::new();
static USB_MSOS_DESC: StaticCell<[u8; 256]> = StaticCell::new();
static USB_CTRL_BUF: StaticCell<[u8; 128]> = StaticCell::new();

/// Build result containing the USB device runner and the HID writer.
pub struct UsbHidDevice {
    pub device: UsbDevice<'static, UsbDriver>,
    pub mouse_writer: HidWriter<'static, UsbDriver, 8>,
}

/// Initialise the USB stack and create the HID mouse device.
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

    // Allocate static descriptor buffers.
    let config_desc = USB_CONFIG_DESC.init([0u8; 256]);
    let bos_desc = USB_BOS_DESC.init([0u8; 256]);
    let msos_desc = USB_MSOS_DESC.init([0u8; 256]);
    let ctrl_buf = USB_CTRL_BUF.init([0u8; 128]);

    let mut builder = Builder::new(
        driver,
        usb_config,
        config_desc,
        bos_desc,
        msos_desc,
        ctrl_buf,
    );

    let mouse_state = MOUSE_STATE.init(State::new());
    let mouse_config = HidConfig {
        report_descriptor: MOUSE_REPORT_DESCRIPTOR,
        request_handler: None,
        poll_ms: config::USB_HID_POLL_MS,
        max_packet_size: 8,
    };
    let mouse_writer = HidWriter::new(&mut builder, mouse_state, mouse_config);

    let device = builder.build();

    info!("USB HID mouse initialised");

    UsbHidDevice {
        device,
        mouse_writer,
    }
}

/// Run the USB device stack - must be spawned as a dedicated Embassy task.
///
/// This handles USB enumeration, suspend/resume, and endpoint servicing.
pub async fn run_usb_device(mut device: UsbDevice<'static, UsbDriver>) -> ! {
    info!("USB device task started");
    device.run().await
}

/// Report forwarding task - reads from the control loop channel and
/// writes each report to the HID endpoint.
///
/// Failed writes are logged and dropped; the next report carries the
/// full button state again.
pub async fn hid_writer_task(
    mut mouse: HidWriter<'static, UsbDriver, 8>,
    report_rx: ReportReceiver,
) -> ! {
    info!("HID writer task started - waiting for reports");

    let mut buf = [0u8; MOUSE_REPORT_SIZE];

    loop {
        let report = report_rx.receive().await;
        if let Err(e) = write_report(&mut mouse, &report, &mut buf).await {
            warn!("USB mouse write failed: {}", e);
        }
    }
}

async fn write_report(
    mouse: &mut HidWriter<'static, UsbDriver, 8>,
    report: &MouseReport,
    buf: &mut [u8; MOUSE_REPORT_SIZE],
) -> Result<(), Error> {
    let n = report.serialize(buf);
    mouse.write(&buf[..n]).await.map_err(|_| Error::Usb)
}
