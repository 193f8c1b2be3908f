//! Per-player statistical summaries.
//!
//! Every category table has exactly one row per player that acts anywhere in
//! the event log, in order of first appearance, so players with nothing in a
//! category still get an all-zero row.

pub mod advanced;
pub mod crossing;
pub mod passing;
pub mod shooting;

pub use self::advanced::AdvancedRow;
pub use self::crossing::CrossingRow;
pub use self::passing::PassingRow;
pub use self::shooting::ShootingRow;

use crate::event::Event;
use serde::Serialize;
use std::collections::HashMap;
use tracing::debug;

/// Player identifiers in first-appearance order with a reverse lookup.
#[derive(Debug, Clone, Default)]
pub struct PlayerIndex {
    players: Vec<String>,
    lookup: HashMap<String, usize>,
}

impl PlayerIndex {
    pub fn from_events(events: &[Event]) -> Self {
        let mut idx = Self::default();
        for e in events {
            if !idx.lookup.contains_key(&e.player) {
                idx.lookup.insert(e.player.clone(), idx.players.len());
                idx.players.push(e.player.clone());
            }
        }
        idx
    }

    pub fn get(&self, player: &str) -> Option<usize> {
        self.lookup.get(player).copied()
    }

    pub fn players(&self) -> &[String] {
        &self.players
    }

    pub fn len(&self) -> usize {
        self.players.len()
    }

    pub fn is_empty(&self) -> bool {
        self.players.is_empty()
    }
}

/// Category tables aligned by row: row `i` of every table is `players[i]`.
#[derive(Debug, Clone, Default, Serialize)]
pub struct Summaries {
    pub players: Vec<String>,
    pub passing: Vec<PassingRow>,
    pub shooting: Vec<ShootingRow>,
    pub crossing: Vec<CrossingRow>,
    pub advanced: Vec<AdvancedRow>,
}

/// Borrowed view of one player's rows across the category tables.
#[derive(Debug, Clone, Copy)]
pub struct PlayerRows<'a> {
    pub player: &'a str,
    pub passing: &'a PassingRow,
    pub shooting: &'a ShootingRow,
    pub crossing: &'a CrossingRow,
    pub advanced: &'a AdvancedRow,
}

impl Summaries {
    pub fn len(&self) -> usize {
        self.players.len()
    }

    pub fn is_empty(&self) -> bool {
        self.players.is_empty()
    }

    pub fn rows(&self, i: usize) -> Option<PlayerRows<'_>> {
        Some(PlayerRows {
            player: self.players.get(i)?,
            passing: self.passing.get(i)?,
            shooting: self.shooting.get(i)?,
            crossing: self.crossing.get(i)?,
            advanced: self.advanced.get(i)?,
        })
    }

    pub fn iter(&self) -> impl Iterator<Item = PlayerRows<'_>> {
        (0..self.len()).filter_map(move |i| self.rows(i))
    }

    pub fn find(&self, player: &str) -> Option<PlayerRows<'_>> {
        let i = self.players.iter().position(|p| p == player)?;
        self.rows(i)
    }
}

/// Builds all four category tables. The tables only read the event slice,
/// so they are built in parallel.
pub fn summarize(events: &[Event]) -> Summaries {
    let index = PlayerIndex::from_events(events);

    let ((passing, shooting), (crossing, advanced)) = rayon::join(
        || {
            rayon::join(
                || passing::summarize(events, &index),
                || shooting::summarize(events, &index),
            )
        },
        || {
            rayon::join(
                || crossing::summarize(events, &index),
                || advanced::summarize(events, &index),
            )
        },
    );

    debug!(
        "Summarized {} events into {} player rows",
        events.len(),
        index.len()
    );

    Summaries {
        players: index.players().to_vec(),
        passing,
        shooting,
        crossing,
        advanced,
    }
}

/// Percentage rounded to two decimals; 0 when `total` is 0.
pub(crate) fn rate(part: u32, total: u32) -> f64 {
    if total == 0 {
        return 0.0;
    }
    (f64::from(part) / f64::from(total) * 100.0 * 100.0).round_ties_even() / 100.0
}
