//! One-way stage runner: events → enriched events → summaries → scores.
//!
//! Every stage consumes the whole batch before the next begins. The report
//! hands the enriched events out read-only.

use crate::config::Config;
use crate::event::Event;
use crate::pitch;
use crate::scorer::{ScoreCard, Scorer};
use crate::summary::{self, Summaries};
use crate::tagger::{self, TaggerStats};
use crate::xg;
use serde::Serialize;
use tracing::info;

#[derive(Debug, Clone, Serialize)]
pub struct MatchReport {
    events: Vec<Event>,
    pub tagger: TaggerStats,
    pub summaries: Summaries,
    pub scores: Vec<ScoreCard>,
}

impl MatchReport {
    pub fn events(&self) -> &[Event] {
        &self.events
    }
}

pub struct Pipeline {
    pub config: Config,
    pub scorer: Scorer,
}

impl Pipeline {
    pub fn new(config: Config, scorer: Scorer) -> Self {
        Self { config, scorer }
    }

    /// Ordering, elapsed seconds, auto-tagging and xG, in that order.
    pub fn enrich(&self, events: &mut [Event]) -> TaggerStats {
        events.sort_by_key(|e| e.no);
        for e in events.iter_mut() {
            e.time_secs = pitch::time_to_seconds(&e.time);
        }
        let stats = tagger::auto_tag(events);
        xg::apply(events, self.config.model.xg_model);
        stats
    }

    pub fn run(&self, mut events: Vec<Event>) -> MatchReport {
        info!("Running pipeline over {} events", events.len());

        let tagger = self.enrich(&mut events);
        let summaries = summary::summarize(&events);
        let scores = self.scorer.score_all(&summaries);

        info!(
            "Pipeline done: {} players, {} assists and {} key passes inferred",
            summaries.len(),
            tagger.assists_added,
            tagger.key_passes_added
        );

        MatchReport {
            events,
            tagger,
            summaries,
            scores,
        }
    }
}
