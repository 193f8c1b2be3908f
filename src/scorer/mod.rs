pub mod formulas;
pub mod types;

pub use self::types::{CategoryScore, ScoreCard, ScoreCategory};

use crate::config::{Curve, ScoringWeights};
use crate::summary::{PlayerRows, Summaries};
use rayon::prelude::*;
use std::collections::BTreeMap;
use strum::IntoEnumIterator;
use tracing::debug;

pub struct Scorer {
    pub weights: ScoringWeights,
}

impl Scorer {
    pub fn new(weights: ScoringWeights) -> Self {
        Self { weights }
    }

    fn curve(&self, category: ScoreCategory) -> Curve {
        let w = &self.weights;
        match category {
            ScoreCategory::Passing => w.passing.curve,
            ScoreCategory::Shooting => w.shooting.curve,
            ScoreCategory::Cross => w.crossing.curve,
            ScoreCategory::Dribbling => w.dribbling.curve,
            ScoreCategory::Defending => w.defending.curve,
            ScoreCategory::FirstTouch => w.first_touch.curve,
            ScoreCategory::OffTheBall => w.off_the_ball.curve,
            ScoreCategory::Decision => w.decision.curve,
            ScoreCategory::BuildUp => w.build_up.curve,
            ScoreCategory::Drive => w.drive.curve,
            ScoreCategory::Save => w.save.curve,
            ScoreCategory::Header => w.header.curve,
            ScoreCategory::Pace => w.pace.curve,
        }
    }

    /// Pre-sigmoid value of one category; `None` when a ratio category
    /// has no qualifying actions.
    pub fn raw(&self, category: ScoreCategory, rows: &PlayerRows<'_>) -> Option<f64> {
        let w = &self.weights;
        Some(match category {
            ScoreCategory::Passing => formulas::passing(rows, w),
            ScoreCategory::Shooting => formulas::shooting(rows, w),
            ScoreCategory::Cross => formulas::crossing(rows, w),
            ScoreCategory::Dribbling => formulas::dribbling(rows, w),
            ScoreCategory::Defending => formulas::defending(rows, w),
            ScoreCategory::FirstTouch => return formulas::first_touch(rows),
            ScoreCategory::OffTheBall => formulas::off_the_ball(rows, w),
            ScoreCategory::Decision => return formulas::decision(rows),
            ScoreCategory::BuildUp => formulas::build_up(rows, w),
            ScoreCategory::Drive => formulas::drive(rows, w),
            ScoreCategory::Save => formulas::save(rows, w),
            ScoreCategory::Header => formulas::header(rows, w),
            ScoreCategory::Pace => formulas::pace(rows, w),
        })
    }

    pub fn score(&self, category: ScoreCategory, rows: &PlayerRows<'_>) -> CategoryScore {
        let raw = self.raw(category, rows);
        let value = match raw {
            Some(r) => formulas::logistic(r, self.curve(category)),
            None => self.weights.ratio_fallback,
        };
        CategoryScore {
            raw,
            score: formulas::to_score(value),
        }
    }

    pub fn score_player(&self, rows: PlayerRows<'_>) -> ScoreCard {
        let scores: BTreeMap<_, _> = ScoreCategory::iter()
            .map(|c| (c, self.score(c, &rows)))
            .collect();
        ScoreCard {
            player: rows.player.to_string(),
            scores,
        }
    }

    /// One card per summary row, in row order.
    pub fn score_all(&self, summaries: &Summaries) -> Vec<ScoreCard> {
        let cards: Vec<ScoreCard> = (0..summaries.len())
            .into_par_iter()
            .filter_map(|i| summaries.rows(i))
            .map(|rows| self.score_player(rows))
            .collect();
        debug!(
            "Scored {} players on the {:?} profile",
            cards.len(),
            self.weights.profile
        );
        cards
    }
}
