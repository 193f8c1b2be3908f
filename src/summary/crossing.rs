use super::{rate, PlayerIndex};
use crate::event::{Action, Event};
use crate::pitch;
use serde::Serialize;

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct CrossingRow {
    #[serde(rename = "Player")]
    pub player: String,
    #[serde(rename = "Total_Crosses")]
    pub total: u32,
    #[serde(rename = "Successful_Crosses")]
    pub successful: u32,
    #[serde(rename = "Cross_Accuracy")]
    pub accuracy: f64,
    #[serde(rename = "Central_PA_Cross_Success")]
    pub central_pa_success: u32,
}

pub fn summarize(events: &[Event], index: &PlayerIndex) -> Vec<CrossingRow> {
    let mut rows: Vec<CrossingRow> = index
        .players()
        .iter()
        .map(|p| CrossingRow {
            player: p.clone(),
            ..Default::default()
        })
        .collect();

    for e in events.iter().filter(|e| e.action == Action::Cross) {
        let Some(i) = index.get(&e.player) else {
            continue;
        };
        let row = &mut rows[i];
        row.total += 1;
        if !e.is_success() {
            continue;
        }
        row.successful += 1;
        if e.end_adj().is_some_and(pitch::in_central_penalty_area) {
            row.central_pa_success += 1;
        }
    }

    for row in &mut rows {
        row.accuracy = rate(row.successful, row.total);
    }
    rows
}
