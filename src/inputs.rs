//! GPIO trigger inputs, sampled once per control tick.
//!
//! Two inputs (active-high with internal pull-down):
//!   - A: trigger     - starts playback while high
//!   - B: scale step  - rising edge cycles the scale preset
//!
//! Edge detection and debouncing of input B happen in the controller;
//! this module only reads levels.

use embassy_nrf::gpio::{AnyPin, Input, Pull};
use hidreplay::Inputs;

pub struct InputPins {
    trigger: Input<'static>,
    secondary: Input<'static>,
}

impl InputPins {
    pub fn new(trigger: AnyPin, secondary: AnyPin) -> Self {
        Self {
            trigger: Input::new(trigger, Pull::Down),
            secondary: Input::new(secondary, Pull::Down),
        }
    }

    /// Read both levels.
    pub fn sample(&self) -> Inputs {
        Inputs {
            trigger: self.trigger.is_high(),
            secondary: self.secondary.is_high(),
        }
    }
}
