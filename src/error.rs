//! Unified error type for hidreplay.
//!
//! We avoid `alloc` - all error variants carry only fixed-size data.
//! Implements `defmt::Format` for efficient on-target logging.

/// Top-level error type used across the application.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Error {
    // Playback
    /// A waypoint table failed validation.
    Trajectory(TrajectoryError),

    /// No compiled-in pattern carries the requested name.
    UnknownPattern,

    // USB
    /// USB stack returned an error.
    Usb,
}

/// Reasons a waypoint table is rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum TrajectoryError {
    /// The table holds no waypoints.
    Empty,
    /// The first waypoint is not at `t = 0`.
    FirstNotAtZero,
    /// Waypoint `index` is earlier than its predecessor.
    NotMonotonic { index: usize },
    /// Waypoint `index` has a NaN or infinite coordinate.
    NonFinite { index: usize },
}

// Convenience conversions

impl From<TrajectoryError> for Error {
    fn from(e: TrajectoryError) -> Self {
        Error::Trajectory(e)
    }
}
