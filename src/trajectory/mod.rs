//! Time-indexed waypoint tables and piecewise-linear interpolation.
//!
//! A trajectory is a compiled-in table of `(x, y, t_ms)` samples starting
//! at `t = 0`. Positions between two samples are linearly interpolated on
//! elapsed time; the player turns the interpolated position into integer
//! relative moves.

pub mod patterns;

#[cfg(test)]
mod tests;

use crate::error::TrajectoryError;

/// A fixed sample of the trajectory.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Waypoint {
    pub x: f32,
    pub y: f32,
    /// Milliseconds since playback start.
    pub t_ms: u32,
}

impl Waypoint {
    pub const fn new(x: f32, y: f32, t_ms: u32) -> Self {
        Self { x, y, t_ms }
    }
}

/// Interpolated position between two waypoints.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Sample {
    pub x: f32,
    pub y: f32,
    /// Progress through the current segment, always in `[0, 1]`.
    pub fraction: f32,
}

/// A validated waypoint table.
///
/// Non-empty, first waypoint at `t = 0`, timestamps non-decreasing, all
/// coordinates finite.
#[derive(Clone, Copy, Debug)]
pub struct Polyline<'a> {
    points: &'a [Waypoint],
}

impl<'a> Polyline<'a> {
    pub fn new(points: &'a [Waypoint]) -> Result<Self, TrajectoryError> {
        let first = points.first().ok_or(TrajectoryError::Empty)?;
        if first.t_ms != 0 {
            return Err(TrajectoryError::FirstNotAtZero);
        }
        for (index, wp) in points.iter().enumerate() {
            if !wp.x.is_finite() || !wp.y.is_finite() {
                return Err(TrajectoryError::NonFinite { index });
            }
            if index > 0 && wp.t_ms < points[index - 1].t_ms {
                return Err(TrajectoryError::NotMonotonic { index });
            }
        }
        Ok(Self { points })
    }

    pub fn points(&self) -> &'a [Waypoint] {
        self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Always `false`; construction rejects empty tables.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Timestamp of the last waypoint.
    pub fn duration_ms(&self) -> u32 {
        self.last().t_ms
    }

    pub fn last(&self) -> Waypoint {
        self.points[self.points.len() - 1]
    }

    /// Move `cursor` forward past every waypoint that is already due.
    ///
    /// Never moves backwards; `cursor` stays below `len()`.
    pub fn seek(&self, cursor: usize, elapsed_ms: u32) -> usize {
        let mut idx = cursor;
        while idx + 1 < self.points.len() && self.points[idx + 1].t_ms <= elapsed_ms {
            idx += 1;
        }
        idx
    }

    /// Interpolate within the segment starting at `cursor`.
    ///
    /// Returns `None` once `cursor` is the last waypoint.
    pub fn sample(&self, cursor: usize, elapsed_ms: u32) -> Option<Sample> {
        if cursor + 1 >= self.points.len() {
            return None;
        }
        let a = self.points[cursor];
        let b = self.points[cursor + 1];
        let span = b.t_ms.saturating_sub(a.t_ms);
        let fraction = if span == 0 {
            1.0
        } else {
            let p = (elapsed_ms as f32 - a.t_ms as f32) / span as f32;
            p.clamp(0.0, 1.0)
        };
        Some(Sample {
            x: a.x + fraction * (b.x - a.x),
            y: a.y + fraction * (b.y - a.y),
            fraction,
        })
    }

    /// Untransformed position at `elapsed_ms`, holding the final waypoint
    /// once the table is exhausted.
    pub fn position_at(&self, elapsed_ms: u32) -> (f32, f32) {
        let cursor = self.seek(0, elapsed_ms);
        match self.sample(cursor, elapsed_ms) {
            Some(s) => (s.x, s.y),
            None => {
                let last = self.last();
                (last.x, last.y)
            }
        }
    }
}

/// Mapping from trajectory space to integer pointer positions.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Transform {
    pub scale: f32,
    pub flip_x: bool,
    pub flip_y: bool,
}

impl Transform {
    /// Scale 1, no axis inversion.
    pub const IDENTITY: Transform = Transform {
        scale: 1.0,
        flip_x: false,
        flip_y: false,
    };

    pub const fn new(scale: f32, flip_x: bool, flip_y: bool) -> Self {
        Self {
            scale,
            flip_x,
            flip_y,
        }
    }

    /// Scale, round to the nearest integer, then negate flipped axes.
    pub fn apply(&self, x: f32, y: f32) -> (i32, i32) {
        let px = round_to_i32(self.scale * x);
        let py = round_to_i32(self.scale * y);
        (
            if self.flip_x { -px } else { px },
            if self.flip_y { -py } else { py },
        )
    }
}

impl Default for Transform {
    fn default() -> Self {
        Transform::IDENTITY
    }
}

/// Round half away from zero. `core` has no `f32::round`.
///
/// Truncates first and compares the exact remainder; adding 0.5 before
/// truncating would round 0.49999997 up.
pub fn round_to_i32(v: f32) -> i32 {
    let whole = v as i32;
    let rest = v - whole as f32;
    if rest >= 0.5 {
        whole + 1
    } else if rest <= -0.5 {
        whole - 1
    } else {
        whole
    }
}
