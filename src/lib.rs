//! Host-testable library interface for hidreplay.
//!
//! Holds all of the pure logic (trajectory interpolation, playback,
//! trigger state machine, HID report building) so it can be tested on
//! the host with no embedded hardware attached.
//!
//! Usage: `cargo test` (host) / `cargo build --release --features embedded
//! --target thumbv7em-none-eabihf` (firmware)
//!
//! Note: The embedded binary lives in main.rs with #![no_std] and
//! #![no_main] and links against this library for everything that is not
//! hardware glue.

#![cfg_attr(not(test), no_std)]

pub mod config;
pub mod controller;
pub mod error;
pub mod hid;
pub mod player;
pub mod scale;
pub mod trajectory;

pub use controller::{Controller, Event, Inputs, Phase};
pub use error::{Error, TrajectoryError};
pub use player::{PlaybackState, Player, Step};
pub use trajectory::{Polyline, Transform, Waypoint};

// ═══════════════════════════════════════════════════════════════════════════
// Unit Tests
// ═══════════════════════════════════════════════════════════════════════════
