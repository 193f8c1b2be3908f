//! Raw (pre-sigmoid) formulas, one per category, and the logistic mapping
//! onto 0..100.

use crate::config::{Curve, ScoringWeights};
use crate::summary::PlayerRows;

/// `100 / (1 + exp(-k (raw - m)))`
pub fn logistic(raw: f64, curve: Curve) -> f64 {
    100.0 / (1.0 + (-curve.steepness * (raw - curve.midpoint)).exp())
}

/// Rounds half to even and clamps into the score range.
pub fn to_score(value: f64) -> u8 {
    if !value.is_finite() {
        return 0;
    }
    value.round_ties_even().clamp(0.0, 100.0) as u8
}

fn n(v: u32) -> f64 {
    f64::from(v)
}

pub fn passing(r: &PlayerRows<'_>, w: &ScoringWeights) -> f64 {
    let p = r.passing;
    let w = &w.passing;
    w.success_rate * p.success_rate
        + w.progressive_success * n(p.progressive_success)
        + w.key_pass * n(p.key_pass)
        + w.assist * n(p.assist)
        + w.pa_success * n(p.pa_success)
        + w.fail_count * n(p.fail)
}

pub fn shooting(r: &PlayerRows<'_>, w: &ScoringWeights) -> f64 {
    let s = r.shooting;
    let w = &w.shooting;
    w.goals_above_xg * (n(s.goals) - s.total_xg)
        + w.xg * s.total_xg
        + w.headed_goals * n(s.headed_goals)
        + w.outbox_goals * n(s.outbox_goals)
}

pub fn crossing(r: &PlayerRows<'_>, w: &ScoringWeights) -> f64 {
    let c = r.crossing;
    let w = &w.crossing;
    w.accuracy * c.accuracy
        + w.log_successful * n(c.successful).ln_1p()
        + w.central_pa_success * n(c.central_pa_success)
}

pub fn dribbling(r: &PlayerRows<'_>, w: &ScoringWeights) -> f64 {
    let a = r.advanced;
    let w = &w.dribbling;
    let failed = a.dribble_attempt.saturating_sub(a.breakthrough_success);
    w.breakthrough_success * n(a.breakthrough_success)
        + w.failed_dribble_and_miss * n(failed + a.miss_count)
        + w.be_fouled * n(a.be_fouled)
}

pub fn defending(r: &PlayerRows<'_>, w: &ScoringWeights) -> f64 {
    let a = r.advanced;
    let w = &w.defending;
    w.successful_tackles * n(a.successful_tackles)
        + w.failed_tackles * n(a.failed_tackles())
        + w.intercepts * n(a.intercept)
        + w.blocks * n(a.block)
        + w.clears * n(a.clear)
        + w.aerial_won * n(a.aerial_won)
        + w.aerial_lost * n(a.aerial_lost)
        + w.duel_wins * n(a.duel_win)
}

fn ratio(good: u32, bad: u32) -> Option<f64> {
    let total = good + bad;
    (total > 0).then(|| n(good) / n(total) * 100.0)
}

/// Share of clean receptions: successful passes and breakthroughs over
/// those plus failed passes and misses.
pub fn first_touch(r: &PlayerRows<'_>) -> Option<f64> {
    let a = r.advanced;
    ratio(
        a.pass_success_count + a.breakthrough_success,
        a.pass_fail_count + a.miss_count,
    )
}

/// First-touch ratio restricted to the final third, with offsides as misses.
pub fn decision(r: &PlayerRows<'_>) -> Option<f64> {
    let a = r.advanced;
    ratio(
        a.ft_pass_success + a.ft_breakthrough_success,
        a.ft_pass_fail + a.ft_miss + a.ft_offside,
    )
}

pub fn off_the_ball(r: &PlayerRows<'_>, w: &ScoringWeights) -> f64 {
    let a = r.advanced;
    let w = &w.off_the_ball;
    w.received_assist * n(a.received_assist)
        + w.received_key_pass * n(a.received_key_pass)
        + w.shots_on_target * n(a.sot_count)
        + w.goals * n(a.goal_count)
        + w.offsides * n(a.offside_count)
}

pub fn build_up(r: &PlayerRows<'_>, w: &ScoringWeights) -> f64 {
    let p = r.passing;
    let w = &w.build_up;
    w.own_half_score * p.own_half_score + w.own_half_fail * n(p.own_half_fail)
}

pub fn drive(r: &PlayerRows<'_>, w: &ScoringWeights) -> f64 {
    let a = r.advanced;
    let w = &w.drive;
    w.valid_dribble_distance * a.valid_dribble_distance
        + w.breakthrough_success * n(a.breakthrough_success)
        + w.dribble_fail * n(a.dribble_fail_count)
}

pub fn save(r: &PlayerRows<'_>, w: &ScoringWeights) -> f64 {
    let s = r.shooting;
    let w = &w.save;
    w.catches * n(s.catch_count) + w.goals_prevented * (s.sot_xg_conceded - n(s.goals_conceded))
}

pub fn header(r: &PlayerRows<'_>, w: &ScoringWeights) -> f64 {
    let a = r.advanced;
    let w = &w.header;
    w.header_sot * n(a.header_sot)
        + w.aerial_won * n(a.aerial_won)
        + w.aerial_lost * n(a.aerial_lost)
        + w.header_clear * n(a.header_clear)
}

pub fn pace(r: &PlayerRows<'_>, w: &ScoringWeights) -> f64 {
    let a = r.advanced;
    let w = &w.pace;
    w.valid_dribble_distance * a.valid_dribble_distance
        + w.ft_breakthrough_success * n(a.ft_breakthrough_success)
        + w.counter_attack_goals * n(r.shooting.counter_attack_goals)
}
