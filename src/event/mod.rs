pub mod vocab;

pub use self::vocab::{Action, Direction, Half, Side, Tag};

use crate::pitch::{self, PassDirection, PassDistance};
use serde::{Serialize, Serializer};
use std::collections::BTreeSet;
use std::fmt;

/// A pitch location in meters on the 105x68 field.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Builds a point from two optional axis values; a missing or
    /// non-finite axis leaves the whole point unset.
    pub fn from_axes(x: Option<f64>, y: Option<f64>) -> Option<Self> {
        match (x, y) {
            (Some(x), Some(y)) if x.is_finite() && y.is_finite() => Some(Self { x, y }),
            _ => None,
        }
    }
}

/// Deduplicated, alphabetically ordered tags.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TagSet(BTreeSet<Tag>);

impl TagSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns true when the tag was not present before.
    pub fn insert(&mut self, tag: Tag) -> bool {
        self.0.insert(tag)
    }

    pub fn contains(&self, tag: &Tag) -> bool {
        self.0.contains(tag)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Tag> {
        self.0.iter()
    }

    pub fn is_success(&self) -> bool {
        self.contains(&Tag::Success)
    }

    /// Either the manual "Key" tag or the derived "Key Pass" tag.
    pub fn has_key_pass(&self) -> bool {
        self.contains(&Tag::Key) || self.contains(&Tag::KeyPass)
    }

    /// Parses "A, B, C". Empty or absent text yields an empty set.
    pub fn parse(text: &str) -> Self {
        text.split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(|s| s.parse().unwrap_or_else(|_| Tag::Other(s.to_string())))
            .collect()
    }
}

impl FromIterator<Tag> for TagSet {
    fn from_iter<I: IntoIterator<Item = Tag>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl fmt::Display for TagSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, tag) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            f.write_str(tag.as_str())?;
        }
        Ok(())
    }
}

impl Serialize for TagSet {
    fn serialize<S: Serializer>(&self, s: S) -> Result<S::Ok, S::Error> {
        s.collect_str(self)
    }
}

/// One atomic match action.
///
/// Only raw coordinates are stored. Normalized coordinates and every
/// spatial attribute are derived on access from the raw points and the
/// attack direction.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Event {
    pub no: u32,
    pub match_id: String,
    pub team_id: String,
    pub half: Half,
    pub side: Side,
    pub direction: Direction,
    pub time: String,
    pub time_secs: u32,
    pub player: String,
    pub receiver: Option<String>,
    pub action: Action,
    pub start: Option<Point>,
    pub end: Option<Point>,
    pub tags: TagSet,
    pub xg: Option<f64>,
}

impl Event {
    /// A first-half home event attacking right at 00:00 with no coordinates.
    pub fn new(player: impl Into<String>, action: Action) -> Self {
        Self {
            no: 0,
            match_id: String::new(),
            team_id: String::new(),
            half: Half::First,
            side: Side::Home,
            direction: Direction::Right,
            time: "00:00".to_string(),
            time_secs: 0,
            player: player.into(),
            receiver: None,
            action,
            start: None,
            end: None,
            tags: TagSet::new(),
            xg: None,
        }
    }

    pub fn with_no(mut self, no: u32) -> Self {
        self.no = no;
        self
    }

    pub fn with_team(mut self, team_id: impl Into<String>) -> Self {
        self.team_id = team_id.into();
        self
    }

    pub fn with_direction(mut self, direction: Direction) -> Self {
        self.direction = direction;
        self
    }

    pub fn with_start(mut self, x: f64, y: f64) -> Self {
        self.start = Some(Point::new(x, y));
        self
    }

    pub fn with_end(mut self, x: f64, y: f64) -> Self {
        self.end = Some(Point::new(x, y));
        self
    }

    pub fn with_receiver(mut self, receiver: impl Into<String>) -> Self {
        self.receiver = Some(receiver.into());
        self
    }

    pub fn with_tags<I: IntoIterator<Item = Tag>>(mut self, tags: I) -> Self {
        for t in tags {
            self.tags.insert(t);
        }
        self
    }

    pub fn is_success(&self) -> bool {
        self.tags.is_success()
    }

    pub fn start_adj(&self) -> Option<Point> {
        self.start.map(|p| pitch::normalize(p, self.direction))
    }

    pub fn end_adj(&self) -> Option<Point> {
        self.end.map(|p| pitch::normalize(p, self.direction))
    }

    fn adj_segment(&self) -> Option<(Point, Point)> {
        Some((self.start_adj()?, self.end_adj()?))
    }

    /// Euclidean length of the normalized start-to-end segment.
    pub fn distance(&self) -> Option<f64> {
        self.adj_segment().map(|(a, b)| pitch::distance(a, b))
    }

    /// Displacement angle in degrees, counter-clockwise from +X, in [0, 360).
    pub fn angle(&self) -> Option<f64> {
        self.adj_segment().map(|(a, b)| pitch::angle_deg(a, b))
    }

    pub fn pass_distance(&self) -> Option<PassDistance> {
        self.distance().map(PassDistance::classify)
    }

    pub fn pass_direction(&self) -> Option<PassDirection> {
        self.angle().map(PassDirection::classify)
    }

    /// Forward gain in normalized X.
    pub fn x_gain(&self) -> Option<f64> {
        self.adj_segment().map(|(a, b)| b.x - a.x)
    }

    pub fn is_progressive(&self) -> bool {
        self.adj_segment()
            .is_some_and(|(a, b)| pitch::is_progressive(a.x, b.x))
    }

    pub fn starts_in_final_third(&self) -> bool {
        self.start_adj().is_some_and(|p| pitch::in_final_third(p.x))
    }

    pub fn starts_in_own_half(&self) -> bool {
        self.start_adj().is_some_and(|p| pitch::in_own_half(p.x))
    }

    pub fn ends_in_penalty_area(&self) -> bool {
        self.end_adj().is_some_and(pitch::in_penalty_area)
    }
}
