//! USB HID mouse report (boot protocol compatible).
//!
//! Layout (4 bytes):
//! ```text
//! Byte 0: Button bitfield
//!         Bit 0 = Left, Bit 1 = Right, Bit 2 = Middle
//! Byte 1: X displacement (signed, -127..127)
//! Byte 2: Y displacement (signed, -127..127)
//! Byte 3: Scroll wheel  (signed, -127..127)
//! ```

/// Mouse report size in bytes.
pub const MOUSE_REPORT_SIZE: usize = 4;

/// Largest displacement a single report can carry on either axis.
pub const MAX_STEP: i32 = 127;

/// Standard USB HID boot-protocol mouse report.
#[derive(Clone, Copy, Default, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct MouseReport {
    /// Button bitfield (bit 0 = left, bit 1 = right, bit 2 = middle).
    pub buttons: u8,
    /// Relative X movement (signed).
    pub x: i8,
    /// Relative Y movement (signed).
    pub y: i8,
    /// Scroll wheel delta (signed).
    pub wheel: i8,
}

impl MouseReport {
    /// Create an idle (no movement, no buttons) report.
    pub const fn empty() -> Self {
        Self {
            buttons: 0,
            x: 0,
            y: 0,
            wheel: 0,
        }
    }

    /// Serialise into a byte slice for USB HID transmission.
    /// Returns the number of bytes written (always 4).
    pub fn serialize(&self, buf: &mut [u8]) -> usize {
        if buf.len() < MOUSE_REPORT_SIZE {
            return 0;
        }
        buf[0] = self.buttons;
        buf[1] = self.x as u8;
        buf[2] = self.y as u8;
        buf[3] = self.wheel as u8;
        MOUSE_REPORT_SIZE
    }

    /// Returns `true` when no buttons are pressed and there is no movement.
    pub fn is_idle(&self) -> bool {
        self.buttons == 0 && self.x == 0 && self.y == 0 && self.wheel == 0
    }
}

/// Physical mouse buttons the replayer drives.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum MouseButton {
    /// Left button.
    Primary,
    /// Right button.
    Secondary,
}

impl MouseButton {
    /// Bit in the report's button field.
    pub const fn mask(self) -> u8 {
        match self {
            MouseButton::Primary => 0x01,
            MouseButton::Secondary => 0x02,
        }
    }
}

/// One step of a button sequence run by the control loop.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Command {
    Press(MouseButton),
    Release(MouseButton),
    /// Stall the control loop for the given number of milliseconds.
    Wait(u32),
}

/// Host-facing mouse model.
///
/// Tracks the held buttons so that every report (including pure motion)
/// carries the current button state; a report with a cleared bit would
/// release that button on the host.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct VirtualMouse {
    buttons: u8,
}

impl VirtualMouse {
    pub const fn new() -> Self {
        Self { buttons: 0 }
    }

    /// Current button bitfield.
    pub fn buttons(&self) -> u8 {
        self.buttons
    }

    pub fn is_pressed(&self, button: MouseButton) -> bool {
        self.buttons & button.mask() != 0
    }

    pub fn press(&mut self, button: MouseButton) -> MouseReport {
        self.buttons |= button.mask();
        self.report(0, 0)
    }

    pub fn release(&mut self, button: MouseButton) -> MouseReport {
        self.buttons &= !button.mask();
        self.report(0, 0)
    }

    /// Apply a sequence command. `Wait` produces no report; timing is
    /// left to the caller.
    pub fn apply(&mut self, command: Command) -> Option<MouseReport> {
        match command {
            Command::Press(b) => Some(self.press(b)),
            Command::Release(b) => Some(self.release(b)),
            Command::Wait(_) => None,
        }
    }

    /// Reports for a relative move of `(dx, dy)`, split so that no report
    /// exceeds `MAX_STEP` on either axis. Yields nothing for `(0, 0)`.
    pub fn motion(&self, dx: i32, dy: i32) -> Motion {
        Motion {
            buttons: self.buttons,
            dx,
            dy,
        }
    }

    fn report(&self, x: i8, y: i8) -> MouseReport {
        MouseReport {
            buttons: self.buttons,
            x,
            y,
            wheel: 0,
        }
    }
}

/// Iterator over the reports making up one relative move.
#[derive(Clone, Debug)]
pub struct Motion {
    buttons: u8,
    dx: i32,
    dy: i32,
}

impl Iterator for Motion {
    type Item = MouseReport;

    fn next(&mut self) -> Option<MouseReport> {
        if self.dx == 0 && self.dy == 0 {
            return None;
        }
        let x = self.dx.clamp(-MAX_STEP, MAX_STEP);
        let y = self.dy.clamp(-MAX_STEP, MAX_STEP);
        self.dx -= x;
        self.dy -= y;
        Some(MouseReport {
            buttons: self.buttons,
            x: x as i8,
            y: y as i8,
            wheel: 0,
        })
    }
}

// USB HID report descriptor for a boot-protocol mouse

/// USB HID Report Descriptor for a standard 3-button mouse with scroll wheel.
pub const MOUSE_REPORT_DESCRIPTOR: &[u8] = &[
    0x05, 0x01, // Usage Page (Generic Desktop)
    0x09, 0x02, // Usage (Mouse)
    0xA1, 0x01, // Collection (Application)
    0x09, 0x01, //   Usage (Pointer)
    0xA1, 0x00, //   Collection (Physical)
    //
    //   - Buttons (3 bits + 5 padding) -
    0x05, 0x09, //     Usage Page (Buttons)
    0x19, 0x01, //     Usage Minimum (Button 1)
    0x29, 0x03, //     Usage Maximum (Button 3)
    0x15, 0x00, //     Logical Minimum (0)
    0x25, 0x01, //     Logical Maximum (1)
    0x95, 0x03, //     Report Count (3)
    0x75, 0x01, //     Report Size (1)
    0x81, 0x02, //     Input (Data, Variable, Absolute)
    0x95, 0x01, //     Report Count (1)
    0x75, 0x05, //     Report Size (5)
    0x81, 0x01, //     Input (Constant) - padding
    //
    //   - X, Y displacement -
    0x05, 0x01, //     Usage Page (Generic Desktop)
    0x09, 0x30, //     Usage (X)
    0x09, 0x31, //     Usage (Y)
    0x15, 0x81, //     Logical Minimum (-127)
    0x25, 0x7F, //     Logical Maximum (127)
    0x75, 0x08, //     Report Size (8)
    0x95, 0x02, //     Report Count (2)
    0x81, 0x06, //     Input (Data, Variable, Relative)
    //
    //   - Scroll wheel -
    0x09, 0x38, //     Usage (Wheel)
    0x15, 0x81, //     Logical Minimum (-127)
    0x25, 0x7F, //     Logical Maximum (127)
    0x75, 0x08, //     Report Size (8)
    0x95, 0x01, //     Report Count (1)
    0x81, 0x06, //     Input (Data, Variable, Relative)
    //
    0xC0, //   End Collection (Physical)
    0xC0, // End Collection (Application)
];
