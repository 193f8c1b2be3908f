//! Expected-goals model for shot-family events.

use crate::config::XgModel;
use crate::event::{Event, Point, Tag};
use crate::pitch::{self, GOAL_CENTER};

// Keeps the value strictly inside (0, 1) for far-off or degenerate inputs.
const XG_FLOOR: f64 = 1e-6;
const XG_CEIL: f64 = 1.0 - 1e-6;

fn logistic(z: f64) -> f64 {
    (1.0 / (1.0 + z.exp())).clamp(XG_FLOOR, XG_CEIL)
}

/// `1 / (1 + exp(0.14 d - 2.5))`
pub fn distance_xg(shot: Point) -> f64 {
    let d = pitch::distance(shot, GOAL_CENTER);
    logistic(0.14 * d - 2.5)
}

/// `1 / (1 + exp(0.2 d - 2 theta - 1.2 pa + 1.5 head + 0.8 weak - 0.6))`
pub fn distance_angle_xg(shot: Point, in_box: bool, header: bool, weak_foot: bool) -> f64 {
    let d = pitch::distance(shot, GOAL_CENTER);
    let theta = pitch::goal_angle(shot);
    let flag = |b: bool| if b { 1.0 } else { 0.0 };
    logistic(
        0.2 * d - 2.0 * theta - 1.2 * flag(in_box) + 1.5 * flag(header) + 0.8 * flag(weak_foot)
            - 0.6,
    )
}

/// xG of one event: `None` for non-shots and shots without a start point.
pub fn shot_xg(event: &Event, model: XgModel) -> Option<f64> {
    if !event.action.is_shot() {
        return None;
    }
    let shot = event.start_adj()?;
    Some(match model {
        XgModel::Distance => distance_xg(shot),
        XgModel::DistanceAngle => distance_angle_xg(
            shot,
            event.tags.contains(&Tag::InBox),
            event.tags.contains(&Tag::Header),
            event.tags.contains(&Tag::WeakFoot),
        ),
    })
}

/// Overwrites `xg` on every event; non-shots end up with `None`.
pub fn apply(events: &mut [Event], model: XgModel) {
    for e in events.iter_mut() {
        e.xg = shot_xg(e, model);
    }
}
