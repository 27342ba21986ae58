//! Application-wide constants and compile-time configuration.
//!
//! All hardware pin assignments, timing parameters, and playback
//! tuning live here so they can be adjusted in one place.

// Playback

/// Name of the pattern loaded at boot (see `trajectory::patterns`).
pub const DEFAULT_PATTERN: &str = "default";

/// Scale applied to waypoint coordinates before rounding.
pub const BASE_SCALE: f32 = 1.0;

/// Relative change between neighbouring scale presets.
pub const SCALE_STEP: f32 = 0.02;

/// Number of scale presets cycled by input B.
pub const SCALE_PRESETS: u8 = 3;

/// Preset selected at boot. Step 1 is exactly `BASE_SCALE`.
pub const SCALE_BOOT_STEP: u8 = 1;

/// Negate the X axis after scaling (move against the recorded path).
pub const FLIP_X: bool = true;

/// Negate the Y axis after scaling.
pub const FLIP_Y: bool = true;

// Timing

/// Delay between pressing the secondary and the primary button (ms).
pub const SETTLE_DELAY_MS: u32 = 700;

/// Delay after the last waypoint before releasing the primary button (ms).
pub const RELEASE_DELAY_MS: u32 = 50;

/// Delay between releasing the primary and the secondary button (ms).
pub const INTER_RELEASE_DELAY_MS: u32 = 10;

/// Control loop period (ms).
pub const POLL_INTERVAL_MS: u64 = 1;

/// Lockout after an accepted edge on input B (ms).
pub const SECONDARY_DEBOUNCE_MS: u64 = 250;

// USB

/// USB VID/PID - use the "pid.codes" open-source test VID.
/// Replace with your own allocated VID/PID for production.
pub const USB_VID: u16 = 0x1209;
pub const USB_PID: u16 = 0x0002;

/// USB device strings.
pub const USB_MANUFACTURER: &str = "hidreplay";
pub const USB_PRODUCT: &str = "Trajectory Replay Mouse";
pub const USB_SERIAL_NUMBER: &str = "000001";

/// USB HID polling interval (ms). 1 ms = 1000 Hz for lowest latency.
pub const USB_HID_POLL_MS: u8 = 1;

/// Depth of the control loop → HID writer report queue.
pub const REPORT_QUEUE_DEPTH: usize = 16;

// GPIO pin assignments (nRF52840-DK defaults)
//
// These are logical names; the actual `embassy_nrf::peripherals::*` pins
// are taken in `main.rs`.  Adjust for your custom PCB.
//
//   Trigger (input A)      → P0.11  pull-down, active high
//   Scale step (input B)   → P0.12  pull-down, active high
//   Enable line A          → P0.13  driven high at boot
//   Enable line B          → P0.14  driven low at boot

/// Level driven on enable line A at boot.
pub const ENABLE_A_HIGH: bool = true;

/// Level driven on enable line B at boot.
pub const ENABLE_B_HIGH: bool = false;
