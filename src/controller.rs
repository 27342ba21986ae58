//! Trigger state machine driving the player.
//!
//! ```text
//!            trigger high
//!   IDLE ───────────────────► PLAYING
//!    ▲   START_SEQUENCE          │
//!    │                           │ table exhausted
//!    └───────────────────────────┘
//!            STOP_SEQUENCE
//! ```
//!
//! The controller never touches hardware. `poll` returns an [`Event`]
//! and the caller performs it: button sequences are lists of
//! [`Command`]s whose waits stall the control loop. After running the
//! start sequence the caller must call [`Controller::begin`] so that
//! elapsed time counts from the moment the primary button went down.

use crate::config;
use crate::hid::{Command, MouseButton};
use crate::player::{Player, Step};
use crate::scale::ScaleSelector;
use crate::trajectory::{Polyline, Transform};

/// Press secondary, let it settle, press primary.
pub const START_SEQUENCE: &[Command] = &[
    Command::Press(MouseButton::Secondary),
    Command::Wait(config::SETTLE_DELAY_MS),
    Command::Press(MouseButton::Primary),
];

/// Release primary, then secondary, with short gaps.
pub const STOP_SEQUENCE: &[Command] = &[
    Command::Wait(config::RELEASE_DELAY_MS),
    Command::Release(MouseButton::Primary),
    Command::Wait(config::INTER_RELEASE_DELAY_MS),
    Command::Release(MouseButton::Secondary),
];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Phase {
    Idle,
    Playing,
}

/// Digital input levels sampled once per tick (`true` = logic high).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Inputs {
    /// Input A - starts playback.
    pub trigger: bool,
    /// Input B - steps the scale preset.
    pub secondary: bool,
}

/// What the control loop must do after a poll.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Event {
    None,
    /// Run the sequence, then call [`Controller::begin`].
    Start(&'static [Command]),
    Move {
        dx: i32,
        dy: i32,
    },
    /// Send the residual move if non-zero, then run the sequence.
    Finish {
        dx: i32,
        dy: i32,
        emitted: u32,
        sequence: &'static [Command],
    },
    ScaleChanged(f32),
}

pub struct Controller<'a> {
    phase: Phase,
    player: Player<'a>,
    scale: ScaleSelector,
    started_at: Option<u64>,
    secondary_was_high: bool,
    secondary_lockout_until: u64,
}

impl<'a> Controller<'a> {
    pub fn new(mut player: Player<'a>, scale: ScaleSelector) -> Self {
        let transform = Transform {
            scale: scale.scale(),
            ..player.transform()
        };
        player.set_transform(transform);
        Self {
            phase: Phase::Idle,
            player,
            scale,
            started_at: None,
            secondary_was_high: false,
            secondary_lockout_until: 0,
        }
    }

    /// Controller for `path` using the scale presets and axis flips from
    /// [`config`].
    pub fn with_defaults(path: Polyline<'a>) -> Self {
        let player = Player::new(
            path,
            Transform::new(config::BASE_SCALE, config::FLIP_X, config::FLIP_Y),
        );
        let scale = ScaleSelector::new(
            config::BASE_SCALE,
            config::SCALE_STEP,
            config::SCALE_PRESETS,
            config::SCALE_BOOT_STEP,
        );
        Self::new(player, scale)
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn player(&self) -> &Player<'a> {
        &self.player
    }

    pub fn scale(&self) -> f32 {
        self.scale.scale()
    }

    /// Start the playback clock. Ignored unless playing.
    pub fn begin(&mut self, now_ms: u64) {
        if self.phase == Phase::Playing {
            self.started_at = Some(now_ms);
        }
    }

    pub fn poll(&mut self, inputs: Inputs, now_ms: u64) -> Event {
        let secondary_rose = inputs.secondary && !self.secondary_was_high;
        self.secondary_was_high = inputs.secondary;

        match self.phase {
            Phase::Playing => self.poll_playing(now_ms),
            Phase::Idle if inputs.trigger => {
                self.phase = Phase::Playing;
                self.started_at = None;
                self.player.start();
                #[cfg(feature = "defmt")]
                defmt::debug!("controller: IDLE -> PLAYING");
                Event::Start(START_SEQUENCE)
            }
            Phase::Idle if secondary_rose && now_ms >= self.secondary_lockout_until => {
                self.secondary_lockout_until = now_ms + config::SECONDARY_DEBOUNCE_MS;
                let scale = self.scale.next();
                let transform = Transform {
                    scale,
                    ..self.player.transform()
                };
                self.player.set_transform(transform);
                Event::ScaleChanged(scale)
            }
            Phase::Idle => Event::None,
        }
    }

    fn poll_playing(&mut self, now_ms: u64) -> Event {
        let Some(started_at) = self.started_at else {
            return Event::None;
        };
        let elapsed = now_ms.saturating_sub(started_at).min(u32::MAX as u64) as u32;

        match self.player.advance(elapsed) {
            Step::Move { dx, dy } => Event::Move { dx, dy },
            Step::Hold => Event::None,
            Step::Finished { dx, dy } => {
                self.phase = Phase::Idle;
                self.started_at = None;
                #[cfg(feature = "defmt")]
                defmt::debug!("controller: PLAYING -> IDLE after {} ms", elapsed);
                Event::Finish {
                    dx,
                    dy,
                    emitted: self.player.state().emitted,
                    sequence: STOP_SEQUENCE,
                }
            }
        }
    }
}
