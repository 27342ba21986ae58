//! Trajectory player - turns elapsed time into relative pointer moves.
//!
//! Each call to [`Player::advance`] seeks the segment bracketing the
//! elapsed time, interpolates, applies the [`Transform`], and emits the
//! integer delta since the previous emission. Positions that round to the
//! last emitted point produce no move.

use crate::trajectory::{Polyline, Transform};

/// Mutable state of one playback run. Reset by [`Player::start`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct PlaybackState {
    pub active: bool,
    /// Index of the waypoint the current segment starts at.
    pub cursor: usize,
    pub last_x: i32,
    pub last_y: i32,
    /// Number of moves emitted this run.
    pub emitted: u32,
}

impl PlaybackState {
    pub const fn new() -> Self {
        Self {
            active: false,
            cursor: 0,
            last_x: 0,
            last_y: 0,
            emitted: 0,
        }
    }
}

/// Outcome of one [`Player::advance`] call.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Step {
    /// Relative pointer move to send.
    Move { dx: i32, dy: i32 },
    /// Nothing to send this tick.
    Hold,
    /// The table is exhausted. `dx, dy` is the residual move onto the final
    /// waypoint (zero when already there); buttons should be released.
    Finished { dx: i32, dy: i32 },
}

pub struct Player<'a> {
    path: Polyline<'a>,
    transform: Transform,
    state: PlaybackState,
}

impl<'a> Player<'a> {
    pub fn new(path: Polyline<'a>, transform: Transform) -> Self {
        Self {
            path,
            transform,
            state: PlaybackState::new(),
        }
    }

    /// Reset playback state and mark the run active.
    pub fn start(&mut self) {
        self.state = PlaybackState {
            active: true,
            ..PlaybackState::new()
        };
    }

    pub fn state(&self) -> &PlaybackState {
        &self.state
    }

    pub fn path(&self) -> &Polyline<'a> {
        &self.path
    }

    pub fn transform(&self) -> Transform {
        self.transform
    }

    /// Takes effect from the next `advance`; a running playback may jump by
    /// the rescaled difference.
    pub fn set_transform(&mut self, transform: Transform) {
        self.transform = transform;
    }

    pub fn advance(&mut self, elapsed_ms: u32) -> Step {
        if !self.state.active {
            return Step::Hold;
        }

        self.state.cursor = self.path.seek(self.state.cursor, elapsed_ms);

        let Some(sample) = self.path.sample(self.state.cursor, elapsed_ms) else {
            let last = self.path.last();
            let (x, y) = self.transform.apply(last.x, last.y);
            let (dx, dy) = (x - self.state.last_x, y - self.state.last_y);
            if dx != 0 || dy != 0 {
                self.state.emitted += 1;
            }
            self.state.last_x = x;
            self.state.last_y = y;
            self.state.active = false;
            return Step::Finished { dx, dy };
        };

        let (x, y) = self.transform.apply(sample.x, sample.y);
        if x == self.state.last_x && y == self.state.last_y {
            return Step::Hold;
        }

        let (dx, dy) = (x - self.state.last_x, y - self.state.last_y);
        self.state.last_x = x;
        self.state.last_y = y;
        self.state.emitted += 1;
        Step::Move { dx, dy }
    }
}
