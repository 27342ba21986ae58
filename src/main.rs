//! hidreplay firmware entry point (nRF52840).
//!
//! Tasks:
//!   - `usb_task`        - USB device stack (enumeration, suspend)
//!   - `hid_writer`      - mouse reports from the channel to the IN endpoint
//!   - control loop      - runs in `main`: samples inputs every tick, drives
//!                         the controller and carries out its events
//!
//! Button sequences stall the control loop for their waits; reports keep
//! flowing to the writer through the channel in order.

#![no_std]
#![no_main]

mod inputs;
mod usb;

use defmt::{info, warn};
use embassy_executor::Spawner;
use embassy_nrf::gpio::{Level, Output, OutputDrive, Pin};
use embassy_nrf::pac;
use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::channel::{Channel, Sender};
use embassy_time::{Duration, Instant, Ticker, Timer};
use embassy_usb::class::hid::HidWriter;
use embassy_usb::UsbDevice;
use hidreplay::config;
use hidreplay::hid::{Command, MouseReport, VirtualMouse};
use hidreplay::trajectory::patterns;
use hidreplay::{Controller, Event};
use inputs::InputPins;
use usb::hid_device::UsbDriver;
use {defmt_rtt as _, panic_probe as _};

type ReportSender =
    Sender<'static, CriticalSectionRawMutex, MouseReport, { config::REPORT_QUEUE_DEPTH }>;

static REPORTS: Channel<CriticalSectionRawMutex, MouseReport, { config::REPORT_QUEUE_DEPTH }> =
    Channel::new();

#[embassy_executor::task]
async fn usb_task(device: UsbDevice<'static, UsbDriver>) -> ! {
    usb::hid_device::run_usb_device(device).await
}

#[embassy_executor::task]
async fn hid_writer(mouse: HidWriter<'static, UsbDriver, 8>) -> ! {
    usb::hid_device::hid_writer_task(mouse, REPORTS.receiver()).await
}

#[embassy_executor::main]
async fn main(spawner: Spawner) {
    let p = embassy_nrf::init(Default::default());
    info!("hidreplay starting");

    // USB needs the external high-frequency crystal.
    pac::CLOCK.tasks_hfclkstart().write_value(1);
    while pac::CLOCK.events_hfclkstarted().read() != 1 {}

    // Enable lines keep their boot level for the lifetime of `main`.
    let _enable_a = Output::new(p.P0_13, Level::from(config::ENABLE_A_HIGH), OutputDrive::Standard);
    let _enable_b = Output::new(p.P0_14, Level::from(config::ENABLE_B_HIGH), OutputDrive::Standard);

    let pins = InputPins::new(p.P0_11.degrade(), p.P0_12.degrade());

    let path = match patterns::find(config::DEFAULT_PATTERN) {
        Ok(path) => path,
        Err(e) => defmt::panic!("pattern '{}' unusable: {}", config::DEFAULT_PATTERN, e),
    };
    info!(
        "pattern '{}': {} waypoints over {} ms",
        config::DEFAULT_PATTERN,
        path.len(),
        path.duration_ms()
    );
    let controller = Controller::with_defaults(path);

    let usb = usb::hid_device::init(p.USBD);
    spawner.must_spawn(usb_task(usb.device));
    spawner.must_spawn(hid_writer(usb.mouse_writer));

    control_loop(pins, controller, REPORTS.sender()).await
}

async fn control_loop(pins: InputPins, mut controller: Controller<'static>, reports: ReportSender) -> ! {
    let mut mouse = VirtualMouse::new();
    let mut ticker = Ticker::every(Duration::from_millis(config::POLL_INTERVAL_MS));

    info!("control loop running, scale {}", controller.scale());

    loop {
        match controller.poll(pins.sample(), Instant::now().as_millis()) {
            Event::None => {}
            Event::Start(sequence) => {
                run_sequence(sequence, &mut mouse, &reports).await;
                // Don't replay the ticks missed during the settle wait.
                ticker.reset();
                controller.begin(Instant::now().as_millis());
                info!("playback started");
            }
            Event::Move { dx, dy } => send_motion(&mouse, dx, dy, &reports).await,
            Event::Finish {
                dx,
                dy,
                emitted,
                sequence,
            } => {
                send_motion(&mouse, dx, dy, &reports).await;
                run_sequence(sequence, &mut mouse, &reports).await;
                ticker.reset();
                info!("playback finished, {} moves", emitted);
            }
            Event::ScaleChanged(scale) => info!("scale -> {}", scale),
        }

        ticker.next().await;
    }
}

async fn run_sequence(sequence: &[Command], mouse: &mut VirtualMouse, reports: &ReportSender) {
    for &command in sequence {
        if let Command::Wait(ms) = command {
            Timer::after(Duration::from_millis(ms as u64)).await;
        } else if let Some(report) = mouse.apply(command) {
            reports.send(report).await;
        }
    }
}

async fn send_motion(mouse: &VirtualMouse, dx: i32, dy: i32, reports: &ReportSender) {
    let mut chunks = 0;
    for report in mouse.motion(dx, dy) {
        reports.send(report).await;
        chunks += 1;
    }
    if chunks > 1 {
        warn!("move ({}, {}) split into {} reports", dx, dy, chunks);
    }
}
