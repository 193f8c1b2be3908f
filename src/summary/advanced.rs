use super::PlayerIndex;
use crate::event::{Action, Event, Tag};
use serde::Serialize;

// Dribbles shorter than this do not count toward the carried distance.
const VALID_DRIBBLE_MIN: f64 = 5.0;

/// Defending and positional counts feeding the composite categories.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct AdvancedRow {
    #[serde(rename = "Player")]
    pub player: String,

    #[serde(rename = "Pass_Success_Count")]
    pub pass_success_count: u32,
    #[serde(rename = "Breakthrough_Success")]
    pub breakthrough_success: u32,
    #[serde(rename = "Pass_Fail_Count")]
    pub pass_fail_count: u32,
    #[serde(rename = "Miss_Count")]
    pub miss_count: u32,

    #[serde(rename = "FT_Pass_Success")]
    pub ft_pass_success: u32,
    #[serde(rename = "FT_Breakthrough_Success")]
    pub ft_breakthrough_success: u32,
    #[serde(rename = "FT_Pass_Fail")]
    pub ft_pass_fail: u32,
    #[serde(rename = "FT_Miss")]
    pub ft_miss: u32,
    #[serde(rename = "FT_Offside")]
    pub ft_offside: u32,
    #[serde(rename = "Final_Third_Tackle_Success")]
    pub ft_tackle_success: u32,
    #[serde(rename = "FT_Intercept")]
    pub ft_intercept: u32,
    #[serde(rename = "FT_Acquisition")]
    pub ft_acquisition: u32,
    #[serde(rename = "FT_Duel_Win")]
    pub ft_duel_win: u32,
    #[serde(rename = "FT_Foul")]
    pub ft_foul: u32,

    #[serde(rename = "Total_Tackles")]
    pub total_tackles: u32,
    #[serde(rename = "Successful_Tackles")]
    pub successful_tackles: u32,
    #[serde(rename = "Duel_Win_Count")]
    pub duel_win: u32,
    #[serde(rename = "Duel_Lose_Count")]
    pub duel_lose: u32,
    #[serde(rename = "Intercept_Count")]
    pub intercept: u32,
    #[serde(rename = "Acquisition_Count")]
    pub acquisition: u32,
    #[serde(rename = "Foul_Count")]
    pub foul: u32,
    #[serde(rename = "PA_Foul_Tackles")]
    pub pa_foul: u32,
    #[serde(rename = "Clear_Count")]
    pub clear: u32,
    #[serde(rename = "Cutout_Count")]
    pub cutout: u32,
    #[serde(rename = "Block_Count")]
    pub block: u32,

    #[serde(rename = "Total_Aerial_Duels")]
    pub total_aerial: u32,
    #[serde(rename = "Aerial_Duels_Won")]
    pub aerial_won: u32,
    #[serde(rename = "Aerial_Duels_Lost")]
    pub aerial_lost: u32,

    #[serde(rename = "Received_Assist")]
    pub received_assist: u32,
    #[serde(rename = "Received_Key_Pass")]
    pub received_key_pass: u32,
    #[serde(rename = "SOT_Count")]
    pub sot_count: u32,
    #[serde(rename = "Goal_Count")]
    pub goal_count: u32,
    #[serde(rename = "Offside_Count")]
    pub offside_count: u32,

    #[serde(rename = "Dribble_Attempt")]
    pub dribble_attempt: u32,
    #[serde(rename = "Dribble_Fail_Count")]
    pub dribble_fail_count: u32,
    #[serde(rename = "Valid_Dribble_Distance")]
    pub valid_dribble_distance: f64,
    #[serde(rename = "Cross_Success")]
    pub cross_success: u32,
    #[serde(rename = "Be_Fouled")]
    pub be_fouled: u32,
    #[serde(rename = "Header_SOT")]
    pub header_sot: u32,
    #[serde(rename = "Header_Clear")]
    pub header_clear: u32,
}

impl AdvancedRow {
    fn new(player: &str) -> Self {
        Self {
            player: player.to_string(),
            ..Default::default()
        }
    }

    pub fn failed_tackles(&self) -> u32 {
        self.total_tackles - self.successful_tackles
    }

    fn add(&mut self, e: &Event) {
        let success = e.is_success();
        let ft = e.starts_in_final_third();
        let header = e.tags.contains(&Tag::Header);

        match e.action {
            Action::Pass | Action::Cross => {
                if success {
                    self.pass_success_count += 1;
                    self.ft_pass_success += u32::from(ft);
                } else {
                    self.pass_fail_count += 1;
                    self.ft_pass_fail += u32::from(ft);
                }
                if e.action == Action::Cross && success {
                    self.cross_success += 1;
                }
            }
            Action::Breakthrough if success => {
                self.breakthrough_success += 1;
                self.ft_breakthrough_success += u32::from(ft);
            }
            Action::Miss => {
                self.miss_count += 1;
                self.ft_miss += u32::from(ft);
            }
            Action::Offside => {
                self.offside_count += 1;
                self.ft_offside += u32::from(ft);
            }
            Action::Tackle => {
                self.total_tackles += 1;
                if success {
                    self.successful_tackles += 1;
                    self.ft_tackle_success += u32::from(ft);
                }
            }
            Action::Duel => {
                let aerial = e.tags.contains(&Tag::Aerial);
                if success {
                    self.duel_win += 1;
                    self.ft_duel_win += u32::from(ft);
                } else {
                    self.duel_lose += 1;
                }
                if aerial {
                    self.total_aerial += 1;
                    if success {
                        self.aerial_won += 1;
                    } else {
                        self.aerial_lost += 1;
                    }
                }
            }
            Action::Intercept => {
                self.intercept += 1;
                self.ft_intercept += u32::from(ft);
            }
            Action::Acquisition => {
                self.acquisition += 1;
                self.ft_acquisition += u32::from(ft);
            }
            Action::Foul => {
                self.foul += 1;
                self.ft_foul += u32::from(ft);
                if e.tags.contains(&Tag::InBox) {
                    self.pa_foul += 1;
                }
            }
            Action::Clear => {
                self.clear += 1;
                self.header_clear += u32::from(header);
            }
            Action::Cutout => self.cutout += 1,
            Action::Block => self.block += 1,
            Action::Dribble => {
                self.dribble_attempt += 1;
                if !success {
                    self.dribble_fail_count += 1;
                }
                if let Some(d) = e.distance().filter(|d| *d >= VALID_DRIBBLE_MIN) {
                    self.valid_dribble_distance += d;
                }
            }
            Action::BeFouled => self.be_fouled += 1,
            _ => {}
        }

        if e.action.is_shot() {
            if e.action.is_on_target() {
                self.sot_count += 1;
                self.header_sot += u32::from(header);
            }
            if e.action == Action::Goal {
                self.goal_count += 1;
            }
        }
    }

    /// Credits a shot to its taker at most once. The shot's own tags win;
    /// otherwise the teammate pass directly before it is read.
    fn add_shot_credit(&mut self, shot: &Event, prev: Option<&Event>) {
        let setup = prev.filter(|p| {
            p.action.is_pass() && p.team_id == shot.team_id && p.player != shot.player
        });
        match shot_credit(shot).or_else(|| setup.and_then(shot_credit)) {
            Some(Tag::Assist) => self.received_assist += 1,
            Some(_) => self.received_key_pass += 1,
            None => {}
        }
    }
}

// Only the derived "Key Pass" tag counts here, not the manual "Key".
fn shot_credit(e: &Event) -> Option<Tag> {
    if e.tags.contains(&Tag::Assist) {
        Some(Tag::Assist)
    } else if e.tags.contains(&Tag::KeyPass) {
        Some(Tag::KeyPass)
    } else {
        None
    }
}

pub fn summarize(events: &[Event], index: &PlayerIndex) -> Vec<AdvancedRow> {
    let mut rows: Vec<AdvancedRow> = index.players().iter().map(|p| AdvancedRow::new(p)).collect();

    for (k, e) in events.iter().enumerate() {
        let Some(i) = index.get(&e.player) else {
            continue;
        };
        rows[i].add(e);
        if e.action.is_shot() {
            let prev = k.checked_sub(1).map(|p| &events[p]);
            rows[i].add_shot_credit(e, prev);
        }
    }
    rows
}
