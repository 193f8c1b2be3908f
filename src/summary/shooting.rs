use super::PlayerIndex;
use crate::event::{Action, Event, Tag};
use serde::Serialize;
use std::collections::HashMap;
use tracing::warn;

/// Shooting table plus the goalkeeper-facing block (catches, and what the
/// opposing team produced on target).
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ShootingRow {
    #[serde(rename = "Player")]
    pub player: String,
    #[serde(rename = "Total_Shots")]
    pub total_shots: u32,
    #[serde(rename = "Shots_On_Target")]
    pub shots_on_target: u32,
    #[serde(rename = "Goals")]
    pub goals: u32,
    #[serde(rename = "Total_xG")]
    pub total_xg: f64,
    #[serde(rename = "Headed_Goals")]
    pub headed_goals: u32,
    #[serde(rename = "Outbox_Goals")]
    pub outbox_goals: u32,
    #[serde(rename = "Counter_Attack_Goals")]
    pub counter_attack_goals: u32,
    #[serde(rename = "Catch_Count")]
    pub catch_count: u32,
    #[serde(rename = "Total_SOT_xG_Conceded")]
    pub sot_xg_conceded: f64,
    #[serde(rename = "Goals_Conceded")]
    pub goals_conceded: u32,
}

impl ShootingRow {
    fn new(player: &str) -> Self {
        Self {
            player: player.to_string(),
            ..Default::default()
        }
    }

    fn add_shot(&mut self, e: &Event) {
        self.total_shots += 1;
        if e.action.is_on_target() {
            self.shots_on_target += 1;
        }
        // Absent xG is skipped, never counted as zero.
        if let Some(xg) = e.xg {
            self.total_xg += xg;
        }
        if e.action != Action::Goal {
            return;
        }
        self.goals += 1;
        if e.tags.contains(&Tag::Header) {
            self.headed_goals += 1;
        }
        if e.tags.contains(&Tag::OutBox) {
            self.outbox_goals += 1;
        }
        if e.tags.contains(&Tag::CounterAttack) {
            self.counter_attack_goals += 1;
        }
    }
}

#[derive(Debug, Default, Clone, Copy)]
struct TeamAttack {
    sot_xg: f64,
    goals: u32,
}

/// Team ids in first-appearance order, each player's (first) team, and
/// what every team produced on target.
struct TeamTable<'a> {
    teams: Vec<&'a str>,
    player_team: HashMap<&'a str, &'a str>,
    attack: HashMap<&'a str, TeamAttack>,
}

impl<'a> TeamTable<'a> {
    fn build(events: &'a [Event]) -> Self {
        let mut teams = Vec::new();
        let mut player_team = HashMap::new();
        let mut attack: HashMap<&str, TeamAttack> = HashMap::new();

        for e in events {
            let team = e.team_id.as_str();
            if !teams.contains(&team) {
                teams.push(team);
            }
            player_team.entry(e.player.as_str()).or_insert(team);

            let entry = attack.entry(team).or_default();
            if e.action.is_on_target() {
                entry.sot_xg += e.xg.unwrap_or(0.0);
            }
            if e.action == Action::Goal {
                entry.goals += 1;
            }
        }

        Self {
            teams,
            player_team,
            attack,
        }
    }

    /// The single opposing team, if the match has exactly two teams.
    fn opponent_of(&self, team: &str) -> Option<&'a str> {
        let mut others = self.teams.iter().copied().filter(|t| *t != team);
        let first = others.next()?;
        if others.next().is_some() {
            return None;
        }
        Some(first)
    }
}

pub fn summarize(events: &[Event], index: &PlayerIndex) -> Vec<ShootingRow> {
    let mut rows: Vec<ShootingRow> = index.players().iter().map(|p| ShootingRow::new(p)).collect();

    for e in events {
        let Some(i) = index.get(&e.player) else {
            continue;
        };
        if e.action.is_shot() {
            rows[i].add_shot(e);
        } else if e.action == Action::Catching {
            rows[i].catch_count += 1;
        }
    }

    let table = TeamTable::build(events);
    if table.teams.len() > 2 {
        warn!(
            "Match has {} team ids; opponent is ambiguous, conceded stats left at 0",
            table.teams.len()
        );
        return rows;
    }

    for row in &mut rows {
        let Some(team) = table.player_team.get(row.player.as_str()) else {
            continue;
        };
        let Some(opp) = table.opponent_of(team) else {
            continue;
        };
        let against = table.attack.get(opp).copied().unwrap_or_default();
        row.sot_xg_conceded = against.sot_xg;
        row.goals_conceded = against.goals;
    }
    rows
}
