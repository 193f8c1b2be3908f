use super::logline::format_log_line;
use crate::error::{PitchError, PsResult};
use crate::event::{Action, Direction, Event, Half, Point, Side, Tag};
use crate::pitch;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;
use tracing::debug;

static CODE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(\d+)([a-z]+)(\d*)$").expect("static regex"));

/// What the capture UI knows at the moment a code is typed.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CaptureContext {
    pub half: Half,
    pub team: Side,
    pub direction: Direction,
    pub time: String,
}

/// A parsed short code: the canonical log line plus the structured event.
#[derive(Debug, Clone, Serialize)]
pub struct TaggedAction {
    pub log_line: String,
    pub event: Event,
}

/// Action code table. Callers fall back to the first letter when the full
/// code is not listed.
pub fn action_for_code(code: &str) -> Option<Action> {
    let action = match code {
        "ddd" => Action::Goal,
        "dd" => Action::ShotOnTarget,
        "d" => Action::Shot,
        "db" => Action::BlockedShot,
        "zz" => Action::Assist,
        "z" => Action::KeyPass,
        "cc" | "c" => Action::Cross,
        "ss" | "s" => Action::Pass,
        "ee" => Action::Breakthrough,
        "rr" => Action::Dribble,
        "gp" => Action::Gain,
        "m" => Action::Miss,
        "aa" => Action::Tackle,
        "q" => Action::Intercept,
        "qq" => Action::Acquisition,
        "w" => Action::Clear,
        "ww" => Action::Cutout,
        "qw" => Action::Block,
        "v" => Action::Catching,
        "vv" => Action::Punching,
        "bb" | "b" => Action::Duel,
        "f" => Action::Foul,
        "ff" => Action::BeFouled,
        "o" => Action::Offside,
        "t" => Action::Touch,
        _ => return None,
    };
    Some(action)
}

pub fn tag_for_code(code: &str) -> Option<Tag> {
    let tag = match code {
        "k" => Tag::Key,
        "a" => Tag::Assist,
        "h" => Tag::Header,
        "r" => Tag::Aerial,
        "w" => Tag::Suffered,
        "n" => Tag::InBox,
        "u" => Tag::OutBox,
        "p" => Tag::Progressive,
        "c" => Tag::CounterAttack,
        "sw" => Tag::Switch,
        "wf" => Tag::WeakFoot,
        "ft" => Tag::FirstTime,
        _ => return None,
    };
    Some(tag)
}

/// Success/Fail implied by the code itself. `None` for codes that carry no
/// outcome (touch, miss, intercept, acquisition, clear, offside, ...).
pub fn outcome_for_code(code: &str) -> Option<Tag> {
    match code {
        "t" | "m" | "q" | "qq" | "o" | "w" | "p" | "l" | "bl" => None,
        "d" | "db" => Some(Tag::Fail),
        "dd" | "ddd" => Some(Tag::Success),
        _ => {
            let b = code.as_bytes();
            if b.len() > 1 && b[0] == b[1] {
                Some(Tag::Success)
            } else {
                Some(Tag::Fail)
            }
        }
    }
}

fn finite_click(p: Point) -> PsResult<Point> {
    Point::from_axes(Some(p.x), Some(p.y)).ok_or_else(|| {
        PitchError::Validation(format!("clicked point ({}, {}) is not finite", p.x, p.y))
    })
}

/// Parses `<player><action>[<receiver>][.<tag>]*` against the clicked points.
///
/// Two-point actions (pass, cross, breakthrough, dribble, or anything with a
/// receiver) take the last two points as start/end; everything else takes
/// the last point. Nothing is returned unless the whole event is valid.
pub fn parse_short_code(
    input: &str,
    points: &[Point],
    ctx: &CaptureContext,
) -> PsResult<TaggedAction> {
    let code = input.trim().to_ascii_lowercase();
    let mut segments = code.split('.');
    let base = segments.next().unwrap_or_default();

    let caps = CODE_RE
        .captures(base)
        .ok_or_else(|| PitchError::MalformedCode(input.to_string()))?;
    let player = caps[1].to_string();
    let action_code = &caps[2];
    let receiver = Some(caps[3].to_string()).filter(|r| !r.is_empty());

    let action = action_for_code(action_code)
        .or_else(|| action_for_code(&action_code[..1]))
        .ok_or_else(|| PitchError::UnknownAction(action_code.to_string()))?;

    let mut event = Event::new(player, action);
    event.half = ctx.half;
    event.side = ctx.team;
    event.direction = ctx.direction;
    event.time = ctx.time.clone();
    event.time_secs = pitch::time_to_seconds(&ctx.time);

    for tag_code in segments.filter(|s| !s.is_empty()) {
        match tag_for_code(tag_code) {
            Some(tag) => {
                event.tags.insert(tag);
            }
            None => debug!("Ignoring unknown tag code '{}'", tag_code),
        }
    }
    if let Some(outcome) = outcome_for_code(action_code) {
        event.tags.insert(outcome);
    }

    let two_point = action.is_two_point() || receiver.is_some();
    if two_point {
        let [.., start, end] = points else {
            return Err(PitchError::InsufficientCoordinates {
                required: 2,
                captured: points.len(),
            });
        };
        event.start = Some(finite_click(*start)?);
        event.end = Some(finite_click(*end)?);
        if event.is_progressive() {
            event.tags.insert(Tag::Progressive);
        }
    } else {
        let Some(start) = points.last() else {
            return Err(PitchError::InsufficientCoordinates {
                required: 1,
                captured: 0,
            });
        };
        event.start = Some(finite_click(*start)?);
    }
    event.receiver = receiver;

    if event.start_adj().is_some_and(pitch::in_penalty_area) {
        event.tags.insert(Tag::InBox);
    } else if action.is_shot() {
        event.tags.insert(Tag::OutBox);
    }

    let log_line = format_log_line(&event)?;
    Ok(TaggedAction { log_line, event })
}
