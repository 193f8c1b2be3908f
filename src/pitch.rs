//! Coordinate normalization and the spatial/temporal classifiers.
//!
//! Everything here is a pure function of normalized coordinates: after
//! normalization the acting team always attacks from X=0 towards X=105.

use crate::event::{Direction, Point};
use serde::Serialize;
use strum_macros::{Display, EnumIter, EnumString};

pub const FIELD_LENGTH: f64 = 105.0;
pub const FIELD_WIDTH: f64 = 68.0;

pub const FINAL_THIRD_X: f64 = 70.0;
pub const HALFWAY_X: f64 = 52.5;
pub const PROGRESSIVE_GAIN: f64 = 10.0;

// Standard penalty box on a 105x68 pitch.
pub const PENALTY_AREA_X: f64 = 88.5;
pub const PENALTY_AREA_Y_MIN: f64 = 13.84;
pub const PENALTY_AREA_Y_MAX: f64 = 54.16;
// Central channel used for cross delivery quality.
pub const CENTRAL_CHANNEL_Y_MIN: f64 = 21.1;
pub const CENTRAL_CHANNEL_Y_MAX: f64 = 46.9;

pub const GOAL_CENTER: Point = Point { x: 105.0, y: 34.0 };
pub const GOAL_POST_LOW: Point = Point { x: 105.0, y: 30.34 };
pub const GOAL_POST_HIGH: Point = Point { x: 105.0, y: 37.66 };

pub const SHORT_PASS_MAX: f64 = 20.0;
pub const MIDDLE_PASS_MAX: f64 = 40.0;

/// Mirrors both axes when the team attacks left; identity otherwise.
pub fn normalize(p: Point, direction: Direction) -> Point {
    match direction {
        Direction::Left => Point {
            x: FIELD_LENGTH - p.x,
            y: FIELD_WIDTH - p.y,
        },
        Direction::Right => p,
    }
}

/// `MM:SS` or `HH:MM:SS` to elapsed seconds. Anything else is 0.
pub fn time_to_seconds(time: &str) -> u32 {
    let parts: Option<Vec<u32>> = time
        .trim()
        .split(':')
        .map(|p| p.trim().parse::<u32>().ok())
        .collect();

    match parts.as_deref() {
        Some([m, s]) => m.saturating_mul(60).saturating_add(*s),
        Some([h, m, s]) => h
            .saturating_mul(3600)
            .saturating_add(m.saturating_mul(60))
            .saturating_add(*s),
        _ => 0,
    }
}

pub fn distance(a: Point, b: Point) -> f64 {
    (b.x - a.x).hypot(b.y - a.y)
}

pub fn angle_deg(a: Point, b: Point) -> f64 {
    let deg = (b.y - a.y).atan2(b.x - a.x).to_degrees();
    (deg + 360.0) % 360.0
}

pub fn is_progressive(start_x: f64, end_x: f64) -> bool {
    end_x - start_x >= PROGRESSIVE_GAIN
}

pub fn in_final_third(x: f64) -> bool {
    x >= FINAL_THIRD_X
}

pub fn in_own_half(x: f64) -> bool {
    x <= HALFWAY_X
}

pub fn in_penalty_area(p: Point) -> bool {
    p.x > PENALTY_AREA_X && p.y > PENALTY_AREA_Y_MIN && p.y < PENALTY_AREA_Y_MAX
}

pub fn in_central_penalty_area(p: Point) -> bool {
    in_penalty_area(p) && p.y > CENTRAL_CHANNEL_Y_MIN && p.y < CENTRAL_CHANNEL_Y_MAX
}

/// Angle in radians subtended by the goal mouth as seen from `p`.
pub fn goal_angle(p: Point) -> f64 {
    let (ax, ay) = (GOAL_POST_LOW.x - p.x, GOAL_POST_LOW.y - p.y);
    let (bx, by) = (GOAL_POST_HIGH.x - p.x, GOAL_POST_HIGH.y - p.y);
    let cross = ax * by - ay * bx;
    let dot = ax * bx + ay * by;
    cross.abs().atan2(dot)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, EnumString, Display, Serialize)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum PassDistance {
    Short,
    Middle,
    Long,
}

impl PassDistance {
    pub fn classify(d: f64) -> Self {
        if d < SHORT_PASS_MAX {
            Self::Short
        } else if d < MIDDLE_PASS_MAX {
            Self::Middle
        } else {
            Self::Long
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, EnumString, Display, Serialize)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum PassDirection {
    Forward,
    Left,
    Backward,
    Right,
}

impl PassDirection {
    /// Buckets an angle already wrapped into [0, 360).
    pub fn classify(angle: f64) -> Self {
        if !(45.0..315.0).contains(&angle) {
            Self::Forward
        } else if angle < 135.0 {
            Self::Left
        } else if angle < 225.0 {
            Self::Backward
        } else {
            Self::Right
        }
    }
}
