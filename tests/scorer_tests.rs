use pitchstats::config::{ScoreProfile, ScoringWeights};
use pitchstats::event::{Action, Event, Tag};
use pitchstats::scorer::formulas::{logistic, to_score};
use pitchstats::scorer::{ScoreCategory, Scorer};
use pitchstats::summary::summarize;
use rstest::rstest;
use strum::IntoEnumIterator;

fn idle_player_summary() -> pitchstats::summary::Summaries {
    let events = vec![Event::new("idle", Action::Touch)
        .with_no(1)
        .with_team("A")
        .with_start(50.0, 34.0)];
    summarize(&events)
}

#[rstest]
#[case(ScoreProfile::V1, 50)]
#[case(ScoreProfile::V2, 60)]
fn test_zero_action_player_lands_on_neutral_baseline(
    #[case] profile: ScoreProfile,
    #[case] expected: u8,
) {
    let scorer = Scorer::new(ScoringWeights::for_profile(profile));
    let s = idle_player_summary();
    let card = scorer.score_player(s.rows(0).unwrap());

    for category in [
        ScoreCategory::Passing,
        ScoreCategory::Shooting,
        ScoreCategory::Cross,
        ScoreCategory::Dribbling,
        ScoreCategory::Defending,
    ] {
        let score = card.get(category).unwrap();
        assert!((48..=62).contains(&score), "{category}: {score}");
    }
    for category in ScoreCategory::iter() {
        assert_eq!(card.get(category), Some(expected), "{category}");
    }
}

#[test]
fn test_ratio_categories_fall_back_without_denominator() {
    let scorer = Scorer::new(ScoringWeights::default());
    let s = idle_player_summary();
    let card = scorer.score_player(s.rows(0).unwrap());

    assert_eq!(card.raw(ScoreCategory::FirstTouch), None);
    assert_eq!(card.raw(ScoreCategory::Decision), None);
    assert_eq!(card.get(ScoreCategory::FirstTouch), Some(50));
}

fn passer_events() -> Vec<Event> {
    vec![
        Event::new("10", Action::Pass)
            .with_no(1)
            .with_team("A")
            .with_start(30.0, 30.0)
            .with_end(50.0, 30.0)
            .with_tags([Tag::Success]),
        Event::new("10", Action::Pass)
            .with_no(2)
            .with_team("A")
            .with_start(40.0, 30.0)
            .with_end(42.0, 30.0)
            .with_tags([Tag::Fail]),
    ]
}

#[test]
fn test_passing_raw_formula() {
    let s = summarize(&passer_events());
    let scorer = Scorer::new(ScoringWeights::default());
    let rows = s.rows(0).unwrap();

    // 0.8 * 50% + 1.5 * 1 progressive - 0.5 * 1 fail
    let raw = scorer.raw(ScoreCategory::Passing, &rows).unwrap();
    assert!((raw - 41.0).abs() < 1e-9);
    assert_eq!(scorer.score(ScoreCategory::Passing, &rows).score, 96);

    // 1 success out of 2: 50% against a midpoint of 80.
    let fst = scorer.raw(ScoreCategory::FirstTouch, &rows).unwrap();
    assert!((fst - 50.0).abs() < 1e-9);
    assert_eq!(scorer.score(ScoreCategory::FirstTouch, &rows).score, 1);

    // Build-up: 2.5 own-half score - 0.5 * 1 own-half fail.
    let bld = scorer.raw(ScoreCategory::BuildUp, &rows).unwrap();
    assert!((bld - 2.0).abs() < 1e-9);
}

#[test]
fn test_more_defending_scores_higher() {
    let base = vec![Event::new("4", Action::Tackle)
        .with_no(1)
        .with_team("B")
        .with_start(40.0, 30.0)
        .with_tags([Tag::Success])];
    let mut more = base.clone();
    more.push(
        Event::new("4", Action::Intercept)
            .with_no(2)
            .with_team("B")
            .with_start(40.0, 30.0),
    );

    let scorer = Scorer::new(ScoringWeights::default());
    let a = scorer.score_all(&summarize(&base));
    let b = scorer.score_all(&summarize(&more));
    assert!(b[0].get(ScoreCategory::Defending) > a[0].get(ScoreCategory::Defending));
    assert!(a[0].get(ScoreCategory::Defending) > Some(50));
}

#[test]
fn test_shooting_rewards_goals_above_xg() {
    let mut goal = Event::new("9", Action::Goal)
        .with_no(1)
        .with_team("A")
        .with_start(95.0, 34.0);
    goal.xg = Some(0.3);
    let s = summarize(&[goal]);
    let scorer = Scorer::new(ScoringWeights::default());

    // 10 * (1 - 0.3) + 15 * 0.3
    let raw = scorer
        .raw(ScoreCategory::Shooting, &s.rows(0).unwrap())
        .unwrap();
    assert!((raw - 11.5).abs() < 1e-9);
}

#[test]
fn test_score_all_keeps_row_order() {
    let mut events = passer_events();
    events.push(Event::new("4", Action::Tackle).with_no(3).with_team("B"));
    events.push(Event::new("1", Action::Catching).with_no(4).with_team("B"));
    let s = summarize(&events);
    let cards = Scorer::new(ScoringWeights::default()).score_all(&s);

    let players: Vec<&str> = cards.iter().map(|c| c.player.as_str()).collect();
    assert_eq!(players, vec!["10", "4", "1"]);
    assert!(cards
        .iter()
        .all(|c| c.scores.len() == ScoreCategory::iter().count()));
}

#[rstest]
#[case(50.5, 50)]
#[case(51.5, 52)]
#[case(49.4, 49)]
#[case(-3.0, 0)]
#[case(130.0, 100)]
#[case(f64::NAN, 0)]
fn test_to_score_rounding(#[case] value: f64, #[case] expected: u8) {
    assert_eq!(to_score(value), expected);
}

#[test]
fn test_logistic_midpoint_is_fifty() {
    let w = ScoringWeights::default();
    assert!((logistic(0.0, w.passing.curve) - 50.0).abs() < 1e-12);
    assert!((logistic(80.0, w.first_touch.curve) - 50.0).abs() < 1e-12);
}

#[test]
fn test_category_columns() {
    assert_eq!(ScoreCategory::Passing.column(), "Passing_Score");
    assert_eq!(ScoreCategory::Cross.column(), "Cross_Score");
    assert_eq!(ScoreCategory::FirstTouch.column(), "FST_Score");
    assert_eq!(ScoreCategory::Pace.column(), "PAC_Score");
    assert!(ScoreCategory::Decision.is_ratio());
    assert!(!ScoreCategory::Save.is_ratio());
}
