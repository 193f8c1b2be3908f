//! Sequential back-annotation of key passes and assists.
//!
//! Only the immediately preceding event is inspected. A pass two events
//! before a goal is never tagged, even when it clearly set the goal up.

use crate::event::{Action, Event, Tag};
use serde::Serialize;
use tracing::debug;

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TaggerStats {
    pub assists_added: usize,
    pub key_passes_added: usize,
}

fn qualifies(prev: &Event, cur: &Event) -> bool {
    cur.action.is_shot()
        && prev.action.is_pass()
        && prev.is_success()
        && prev.team_id == cur.team_id
        && prev.player != cur.player
}

/// Sorts by `no` and tags each successful pass that is directly followed by
/// a team-mate's shot. A goal makes it an Assist; any other shot a Key Pass,
/// unless the pass is already an Assist. Re-running is a no-op.
pub fn auto_tag(events: &mut [Event]) -> TaggerStats {
    events.sort_by_key(|e| e.no);
    let mut stats = TaggerStats::default();

    for i in 1..events.len() {
        let (head, tail) = events.split_at_mut(i);
        let prev = &mut head[i - 1];
        let cur = &tail[0];

        if !qualifies(prev, cur) {
            continue;
        }

        if cur.action == Action::Goal {
            if prev.tags.insert(Tag::Assist) {
                stats.assists_added += 1;
            }
        } else if !prev.tags.contains(&Tag::Assist) && prev.tags.insert(Tag::KeyPass) {
            stats.key_passes_added += 1;
        }
    }

    debug!(
        "Auto-tagger added {} assists and {} key passes",
        stats.assists_added, stats.key_passes_added
    );
    stats
}
