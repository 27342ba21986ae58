//! Unit tests for waypoint validation and interpolation.

use super::patterns::{self, PATTERNS};
use super::{round_to_i32, Polyline, Transform, Waypoint};
use crate::error::{Error, TrajectoryError};

const LINE: [Waypoint; 2] = [Waypoint::new(0.0, 0.0, 0), Waypoint::new(10.0, 0.0, 100)];

// ═══════════════════════════════════════════════════════════════════════════
// Validation
// ═══════════════════════════════════════════════════════════════════════════

#[test]
fn polyline_rejects_empty_table() {
    assert_eq!(Polyline::new(&[]).unwrap_err(), TrajectoryError::Empty);
}

#[test]
fn polyline_rejects_late_first_waypoint() {
    let table = [Waypoint::new(0.0, 0.0, 5), Waypoint::new(1.0, 1.0, 10)];
    assert_eq!(
        Polyline::new(&table).unwrap_err(),
        TrajectoryError::FirstNotAtZero
    );
}

#[test]
fn polyline_rejects_time_going_backwards() {
    let table = [
        Waypoint::new(0.0, 0.0, 0),
        Waypoint::new(1.0, 0.0, 20),
        Waypoint::new(2.0, 0.0, 10),
    ];
    assert_eq!(
        Polyline::new(&table).unwrap_err(),
        TrajectoryError::NotMonotonic { index: 2 }
    );
}

#[test]
fn polyline_rejects_nan_coordinates() {
    let table = [Waypoint::new(0.0, 0.0, 0), Waypoint::new(f32::NAN, 0.0, 10)];
    assert_eq!(
        Polyline::new(&table).unwrap_err(),
        TrajectoryError::NonFinite { index: 1 }
    );
}

#[test]
fn polyline_accepts_repeated_timestamps() {
    let table = [
        Waypoint::new(0.0, 0.0, 0),
        Waypoint::new(3.0, 0.0, 10),
        Waypoint::new(7.0, 0.0, 10),
        Waypoint::new(9.0, 0.0, 20),
    ];
    let path = Polyline::new(&table).unwrap();
    // Zero-length segment is skipped by the seek.
    assert_eq!(path.seek(0, 10), 2);
    assert_eq!(path.position_at(10), (7.0, 0.0));
}

#[test]
fn polyline_single_waypoint_is_already_exhausted() {
    let table = [Waypoint::new(4.0, 2.0, 0)];
    let path = Polyline::new(&table).unwrap();
    assert!(path.sample(0, 0).is_none());
    assert_eq!(path.duration_ms(), 0);
}

// ═══════════════════════════════════════════════════════════════════════════
// Interpolation
// ═══════════════════════════════════════════════════════════════════════════

#[test]
fn sample_midpoint() {
    let path = Polyline::new(&LINE).unwrap();
    let s = path.sample(0, 50).unwrap();
    assert_eq!(s.fraction, 0.5);
    assert_eq!((s.x, s.y), (5.0, 0.0));
}

#[test]
fn sample_fraction_is_clamped() {
    let path = Polyline::new(&LINE).unwrap();
    // Cursor held at 0 while time overshoots the segment.
    let s = path.sample(0, 130).unwrap();
    assert_eq!(s.fraction, 1.0);
    assert_eq!(s.x, 10.0);
}

#[test]
fn sample_fraction_stays_in_unit_range() {
    let path = patterns::DEFAULT.polyline().unwrap();
    let mut cursor = 0;
    for t in 0..path.duration_ms() {
        cursor = path.seek(cursor, t);
        let s = path.sample(cursor, t).unwrap();
        assert!((0.0..=1.0).contains(&s.fraction), "t={} p={}", t, s.fraction);
    }
}

#[test]
fn position_at_waypoint_timestamps_matches_table() {
    let path = patterns::DEFAULT.polyline().unwrap();
    for wp in path.points() {
        let (x, y) = path.position_at(wp.t_ms);
        assert_eq!(round_to_i32(x), round_to_i32(wp.x), "t={}", wp.t_ms);
        assert_eq!(round_to_i32(y), round_to_i32(wp.y), "t={}", wp.t_ms);
    }
}

#[test]
fn seek_is_monotonic() {
    let path = patterns::DEFAULT.polyline().unwrap();
    let mut cursor = 0;
    for t in 0..=path.duration_ms() + 50 {
        let next = path.seek(cursor, t);
        assert!(next >= cursor);
        assert!(next < path.len());
        cursor = next;
    }
    assert_eq!(cursor, path.len() - 1);
}

#[test]
fn position_after_end_holds_final_waypoint() {
    let path = Polyline::new(&LINE).unwrap();
    assert_eq!(path.position_at(10_000), (10.0, 0.0));
}

// ═══════════════════════════════════════════════════════════════════════════
// Transform
// ═══════════════════════════════════════════════════════════════════════════

#[test]
fn round_half_away_from_zero() {
    assert_eq!(round_to_i32(2.5), 3);
    assert_eq!(round_to_i32(-2.5), -3);
    assert_eq!(round_to_i32(2.4), 2);
    assert_eq!(round_to_i32(-2.4), -2);
    assert_eq!(round_to_i32(0.0), 0);
}

#[test]
fn round_just_below_half_stays_down() {
    assert_eq!(round_to_i32(0.49999997), 0);
    assert_eq!(round_to_i32(-0.49999997), 0);
    assert_eq!(round_to_i32(1.4999999), 1);
    assert_eq!(Transform::IDENTITY.apply(0.49999997, -0.49999997), (0, 0));
}

#[test]
fn round_large_odd_values_are_exact() {
    // Above 2^23 every f32 is an integer.
    assert_eq!(round_to_i32(8_388_609.0), 8_388_609);
    assert_eq!(round_to_i32(-8_388_609.0), -8_388_609);
}

#[test]
fn transform_scales_before_rounding() {
    let t = Transform::new(2.0, false, false);
    assert_eq!(t.apply(1.3, -1.3), (3, -3));
}

#[test]
fn transform_flips_axes_after_rounding() {
    let t = Transform::new(1.0, true, false);
    assert_eq!(t.apply(-4.5, -33.7), (5, -34));
    let t = Transform::new(1.0, true, true);
    assert_eq!(t.apply(-4.5, -33.7), (5, 34));
}

// ═══════════════════════════════════════════════════════════════════════════
// Pattern bank
// ═══════════════════════════════════════════════════════════════════════════

#[test]
fn every_pattern_is_valid() {
    for pattern in PATTERNS {
        assert!(pattern.polyline().is_ok(), "pattern {}", pattern.name);
    }
}

#[test]
fn pattern_names_are_unique() {
    for (i, a) in PATTERNS.iter().enumerate() {
        assert!(PATTERNS[i + 1..].iter().all(|b| b.name != a.name));
    }
}

#[test]
fn find_default_pattern() {
    let path = patterns::find("default").unwrap();
    assert_eq!(path.len(), 27);
    assert_eq!(path.duration_ms(), 1677);
}

#[test]
fn find_unknown_pattern_fails() {
    assert_eq!(patterns::find("nope").unwrap_err(), Error::UnknownPattern);
}

#[test]
fn sweep_moves_half_a_count_per_millisecond() {
    let path = patterns::find("sweep").unwrap();
    assert_eq!(path.position_at(500), (250.0, 0.0));
    assert_eq!(path.duration_ms(), 1000);
}

#[test]
fn circle_closes_on_its_start() {
    let path = patterns::find("circle").unwrap();
    assert_eq!(path.duration_ms(), 336);
    assert_eq!(path.position_at(0), (0.0, 0.0));
    assert_eq!(path.position_at(84), (40.0, 40.0));
    assert_eq!(path.position_at(168), (80.0, 0.0));
    assert_eq!(path.position_at(336), (0.0, 0.0));
    assert_eq!(Transform::IDENTITY.apply(path.last().x, path.last().y), (0, 0));
}
