//! USB Device subsystem - presents a boot-protocol HID mouse to the host.
//!
//! The nRF52840's built-in USB 2.0 Full-Speed controller is driven by
//! `embassy-usb`.  A single HID interface (mouse, boot protocol) is
//! exposed.
//!
//! The HID writer task reads mouse reports from the control loop's
//! channel and writes them to the IN endpoint in order.

pub mod hid_device;
