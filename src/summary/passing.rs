use super::{rate, PlayerIndex};
use crate::event::{Event, Tag};
use crate::pitch::{PassDirection, PassDistance};
use serde::Serialize;

// Build-up credit for an own-half pass: a base value plus a share of the
// forward gain once the gain reaches the threshold.
const BUILD_UP_BASE: f64 = 0.5;
const BUILD_UP_GAIN_MIN: f64 = 5.0;
const BUILD_UP_GAIN_FACTOR: f64 = 0.1;

/// Passing table; covers both passes and crosses.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct PassingRow {
    #[serde(rename = "Player")]
    pub player: String,
    #[serde(rename = "Total_Pass")]
    pub total: u32,
    #[serde(rename = "Success_Pass")]
    pub success: u32,
    #[serde(rename = "Fail_Pass")]
    pub fail: u32,
    #[serde(rename = "Key_Pass")]
    pub key_pass: u32,
    #[serde(rename = "Assist")]
    pub assist: u32,
    #[serde(rename = "Pass_Success_Rate")]
    pub success_rate: f64,
    #[serde(rename = "Progressive_Pass_Success")]
    pub progressive_success: u32,
    #[serde(rename = "Final_Third_Pass_Success")]
    pub final_third_success: u32,
    #[serde(rename = "PA_Pass_Success")]
    pub pa_success: u32,
    #[serde(rename = "Own_Half_Pass_Score")]
    pub own_half_score: f64,
    #[serde(rename = "Own_Half_Pass_Fail")]
    pub own_half_fail: u32,
    pub forward: u32,
    pub left: u32,
    pub right: u32,
    pub backward: u32,
    pub short: u32,
    pub middle: u32,
    pub long: u32,
}

impl PassingRow {
    fn new(player: &str) -> Self {
        Self {
            player: player.to_string(),
            ..Default::default()
        }
    }

    fn add(&mut self, e: &Event) {
        let success = e.is_success();
        self.total += 1;
        if success {
            self.success += 1;
        }
        if e.tags.has_key_pass() {
            self.key_pass += 1;
        }
        if e.tags.contains(&Tag::Assist) {
            self.assist += 1;
        }

        match e.pass_direction() {
            Some(PassDirection::Forward) => self.forward += 1,
            Some(PassDirection::Left) => self.left += 1,
            Some(PassDirection::Backward) => self.backward += 1,
            Some(PassDirection::Right) => self.right += 1,
            None => {}
        }
        match e.pass_distance() {
            Some(PassDistance::Short) => self.short += 1,
            Some(PassDistance::Middle) => self.middle += 1,
            Some(PassDistance::Long) => self.long += 1,
            None => {}
        }

        let own_half = e.starts_in_own_half();
        if !success {
            if own_half {
                self.own_half_fail += 1;
            }
            return;
        }

        if e.is_progressive() {
            self.progressive_success += 1;
        }
        if e.starts_in_final_third() {
            self.final_third_success += 1;
        }
        if e.ends_in_penalty_area() {
            self.pa_success += 1;
        }
        if own_half {
            let gain = e.x_gain().unwrap_or(0.0);
            let bonus = if gain >= BUILD_UP_GAIN_MIN {
                gain * BUILD_UP_GAIN_FACTOR
            } else {
                0.0
            };
            self.own_half_score += BUILD_UP_BASE + bonus;
        }
    }

    fn finish(&mut self) {
        self.fail = self.total - self.success;
        self.success_rate = rate(self.success, self.total);
    }
}

pub fn summarize(events: &[Event], index: &PlayerIndex) -> Vec<PassingRow> {
    let mut rows: Vec<PassingRow> = index.players().iter().map(|p| PassingRow::new(p)).collect();

    for e in events.iter().filter(|e| e.action.is_pass()) {
        if let Some(i) = index.get(&e.player) {
            rows[i].add(e);
        }
    }
    for row in &mut rows {
        row.finish();
    }
    rows
}
