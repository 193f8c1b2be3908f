use serde::Serialize;
use std::collections::BTreeMap;
use strum_macros::{Display, EnumIter, EnumString};

/// Skill categories in report order. `Display` gives the short label used in
/// table headers; the score column is `<label>_Score`.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, EnumIter, EnumString, Display, Serialize,
)]
pub enum ScoreCategory {
    Passing,
    Shooting,
    Cross,
    Dribbling,
    Defending,
    #[strum(serialize = "FST")]
    #[serde(rename = "FST")]
    FirstTouch,
    #[strum(serialize = "OFF")]
    #[serde(rename = "OFF")]
    OffTheBall,
    #[strum(serialize = "DEC")]
    #[serde(rename = "DEC")]
    Decision,
    #[strum(serialize = "BLD")]
    #[serde(rename = "BLD")]
    BuildUp,
    #[strum(serialize = "DRV")]
    #[serde(rename = "DRV")]
    Drive,
    #[strum(serialize = "SAV")]
    #[serde(rename = "SAV")]
    Save,
    #[strum(serialize = "HED")]
    #[serde(rename = "HED")]
    Header,
    #[strum(serialize = "PAC")]
    #[serde(rename = "PAC")]
    Pace,
}

impl ScoreCategory {
    pub fn column(self) -> String {
        format!("{self}_Score")
    }

    /// Ratio categories score a percentage and fall back to a neutral
    /// value when the player has nothing to divide by.
    pub fn is_ratio(self) -> bool {
        matches!(self, Self::FirstTouch | Self::Decision)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CategoryScore {
    /// Pre-sigmoid value; `None` for a ratio category with a zero denominator.
    pub raw: Option<f64>,
    pub score: u8,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoreCard {
    pub player: String,
    pub scores: BTreeMap<ScoreCategory, CategoryScore>,
}

impl ScoreCard {
    pub fn get(&self, category: ScoreCategory) -> Option<u8> {
        self.scores.get(&category).map(|c| c.score)
    }

    pub fn raw(&self, category: ScoreCategory) -> Option<f64> {
        self.scores.get(&category).and_then(|c| c.raw)
    }
}
