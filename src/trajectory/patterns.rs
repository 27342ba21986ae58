//! Compiled-in waypoint tables.

use super::{Polyline, Waypoint};
use crate::error::Error;

/// A named waypoint table.
#[derive(Clone, Copy, Debug)]
pub struct Pattern {
    pub name: &'static str,
    pub waypoints: &'static [Waypoint],
}

impl Pattern {
    pub fn polyline(&self) -> Result<Polyline<'static>, Error> {
        Ok(Polyline::new(self.waypoints)?)
    }
}

/// 27 samples, one every ~64.5 ms.
const DEFAULT_WAYPOINTS: [Waypoint; 27] = [
    Waypoint::new(0.0, 0.0, 0),
    Waypoint::new(-4.5, -33.7, 64),
    Waypoint::new(-16.0, -60.6, 129),
    Waypoint::new(-14.8, -92.6, 193),
    Waypoint::new(-31.5, -123.8, 258),
    Waypoint::new(-32.9, -153.2, 322),
    Waypoint::new(-45.7, -188.9, 387),
    Waypoint::new(-61.0, -213.2, 451),
    Waypoint::new(-59.0, -250.4, 516),
    Waypoint::new(-39.0, -285.1, 580),
    Waypoint::new(-35.1, -322.7, 645),
    Waypoint::new(-25.5, -333.2, 709),
    Waypoint::new(-4.6, -332.2, 774),
    Waypoint::new(9.5, -335.6, 838),
    Waypoint::new(12.3, -351.1, 903),
    Waypoint::new(-5.7, -366.1, 967),
    Waypoint::new(-31.5, -364.0, 1032),
    Waypoint::new(-46.0, -375.8, 1096),
    Waypoint::new(-43.2, -388.7, 1161),
    Waypoint::new(-29.2, -395.2, 1225),
    Waypoint::new(-16.1, -397.4, 1290),
    Waypoint::new(4.5, -396.9, 1354),
    Waypoint::new(8.5, -399.0, 1419),
    Waypoint::new(8.1, -409.4, 1483),
    Waypoint::new(-0.7, -424.0, 1548),
    Waypoint::new(-13.2, -432.5, 1612),
    Waypoint::new(-17.2, -448.0, 1677),
];

/// Constant-speed horizontal sweep, half a count per millisecond for one
/// second. Used to calibrate host sensitivity.
const SWEEP_WAYPOINTS: [Waypoint; 2] = [Waypoint::new(0.0, 0.0, 0), Waypoint::new(500.0, 0.0, 1000)];

/// One revolution of radius 40, starting and ending at the origin, every 28 ms.
const CIRCLE_WAYPOINTS: [Waypoint; 13] = [
    Waypoint::new(0.0, 0.0, 0),
    Waypoint::new(5.36, 20.0, 28),
    Waypoint::new(20.0, 34.64, 56),
    Waypoint::new(40.0, 40.0, 84),
    Waypoint::new(60.0, 34.64, 112),
    Waypoint::new(74.64, 20.0, 140),
    Waypoint::new(80.0, 0.0, 168),
    Waypoint::new(74.64, -20.0, 196),
    Waypoint::new(60.0, -34.64, 224),
    Waypoint::new(40.0, -40.0, 252),
    Waypoint::new(20.0, -34.64, 280),
    Waypoint::new(5.36, -20.0, 308),
    Waypoint::new(0.0, 0.0, 336),
];

pub const DEFAULT: Pattern = Pattern {
    name: "default",
    waypoints: &DEFAULT_WAYPOINTS,
};

pub const SWEEP: Pattern = Pattern {
    name: "sweep",
    waypoints: &SWEEP_WAYPOINTS,
};

pub const CIRCLE: Pattern = Pattern {
    name: "circle",
    waypoints: &CIRCLE_WAYPOINTS,
};

/// Every pattern the firmware can be configured with.
pub const PATTERNS: &[Pattern] = &[DEFAULT, SWEEP, CIRCLE];

/// Look up a pattern by name and validate its table.
pub fn find(name: &str) -> Result<Polyline<'static>, Error> {
    PATTERNS
        .iter()
        .find(|p| p.name == name)
        .ok_or(Error::UnknownPattern)?
        .polyline()
}
