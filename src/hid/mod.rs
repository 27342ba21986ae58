//! HID report types and the host-facing mouse model.

pub mod mouse;


pub use mouse::{Command, Motion, MouseButton, MouseReport, VirtualMouse};
