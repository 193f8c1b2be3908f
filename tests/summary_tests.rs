use pitchstats::event::{Action, Direction, Event, Tag};
use pitchstats::summary::{self, summarize};

fn ev(no: u32, player: &str, team: &str, action: Action) -> Event {
    Event::new(player, action).with_no(no).with_team(team)
}

fn sample_match() -> Vec<Event> {
    vec![
        // 10: own-half build-up pass with a 20 m gain, then a short failed pass.
        ev(1, "10", "A", Action::Pass)
            .with_start(30.0, 30.0)
            .with_end(50.0, 30.0)
            .with_receiver("8")
            .with_tags([Tag::Success]),
        ev(2, "10", "A", Action::Pass)
            .with_start(40.0, 30.0)
            .with_end(42.0, 30.0)
            .with_tags([Tag::Fail]),
        // 8: final-third pass into the box that sets up the goal.
        ev(3, "8", "A", Action::Pass)
            .with_start(75.0, 30.0)
            .with_end(95.0, 34.0)
            .with_receiver("9")
            .with_tags([Tag::Success, Tag::Assist]),
        ev(4, "9", "A", Action::Goal)
            .with_start(95.0, 34.0)
            .with_tags([Tag::Success, Tag::InBox, Tag::Header]),
        // Keeper of team B catches; 4 defends.
        ev(5, "1", "B", Action::Catching).with_start(5.0, 34.0),
        ev(6, "4", "B", Action::Tackle)
            .with_start(80.0, 30.0)
            .with_tags([Tag::Success]),
        ev(7, "4", "B", Action::Tackle)
            .with_start(20.0, 30.0)
            .with_tags([Tag::Fail]),
        ev(8, "4", "B", Action::Duel)
            .with_start(50.0, 30.0)
            .with_tags([Tag::Success, Tag::Aerial]),
        ev(9, "4", "B", Action::Duel)
            .with_start(50.0, 30.0)
            .with_tags([Tag::Fail, Tag::Aerial]),
        ev(10, "4", "B", Action::Clear)
            .with_start(10.0, 30.0)
            .with_tags([Tag::Header]),
        ev(11, "4", "B", Action::Foul)
            .with_start(95.0, 30.0)
            .with_tags([Tag::InBox, Tag::Fail]),
        // 7 of team B: a shot on target, a long dribble and a short one.
        ev(12, "7", "B", Action::ShotOnTarget).with_start(90.0, 30.0),
        ev(13, "7", "B", Action::Dribble)
            .with_start(40.0, 30.0)
            .with_end(52.0, 35.0)
            .with_tags([Tag::Success]),
        ev(14, "7", "B", Action::Dribble)
            .with_start(40.0, 30.0)
            .with_end(42.0, 30.0)
            .with_tags([Tag::Fail]),
        ev(15, "7", "B", Action::Cross)
            .with_start(90.0, 5.0)
            .with_end(95.0, 34.0)
            .with_tags([Tag::Success]),
        ev(16, "7", "B", Action::Cross)
            .with_start(90.0, 5.0)
            .with_end(60.0, 34.0)
            .with_tags([Tag::Fail]),
    ]
}

fn enriched() -> Vec<Event> {
    let mut events = sample_match();
    pitchstats::xg::apply(&mut events, pitchstats::config::XgModel::Distance);
    events
}

#[test]
fn test_every_player_gets_a_row_in_every_table() {
    let s = summarize(&enriched());
    let expected = vec!["10", "8", "9", "1", "4", "7"];
    assert_eq!(s.players, expected);
    assert_eq!(s.passing.len(), 6);
    assert_eq!(s.shooting.len(), 6);
    assert_eq!(s.crossing.len(), 6);
    assert_eq!(s.advanced.len(), 6);
    for (i, rows) in s.iter().enumerate() {
        assert_eq!(rows.player, expected[i]);
        assert_eq!(rows.passing.player, expected[i]);
        assert_eq!(rows.advanced.player, expected[i]);
    }
}

#[test]
fn test_zero_action_rows_are_all_zero() {
    let s = summarize(&enriched());
    let keeper = s.find("1").unwrap();
    assert_eq!(keeper.passing.total, 0);
    assert_eq!(keeper.passing.success_rate, 0.0);
    assert_eq!(keeper.crossing.accuracy, 0.0);
    assert_eq!(keeper.shooting.total_shots, 0);
    assert_eq!(keeper.shooting.catch_count, 1);
}

#[test]
fn test_passing_summary() {
    let s = summarize(&enriched());
    let p = s.find("10").unwrap().passing;

    assert_eq!(p.total, 2);
    assert_eq!(p.success, 1);
    assert_eq!(p.fail, 1);
    assert_eq!(p.success_rate, 50.0);
    assert_eq!(p.progressive_success, 1);
    assert_eq!(p.final_third_success, 0);
    assert_eq!(p.forward, 2);
    assert_eq!(p.short, 1);
    assert_eq!(p.middle, 1);
    // 0.5 base + 0.1 * 20 m gain.
    assert!((p.own_half_score - 2.5).abs() < 1e-9);
    assert_eq!(p.own_half_fail, 1);

    let p8 = s.find("8").unwrap().passing;
    assert_eq!(p8.assist, 1);
    assert_eq!(p8.final_third_success, 1);
    assert_eq!(p8.pa_success, 1);
    assert_eq!(p8.middle, 1);
    assert_eq!(p8.own_half_score, 0.0);
}

#[test]
fn test_crosses_count_in_passing_and_crossing() {
    let s = summarize(&enriched());
    let r = s.find("7").unwrap();
    assert_eq!(r.passing.total, 2);
    assert_eq!(r.crossing.total, 2);
    assert_eq!(r.crossing.successful, 1);
    assert_eq!(r.crossing.accuracy, 50.0);
    assert_eq!(r.crossing.central_pa_success, 1);
    assert_eq!(r.advanced.cross_success, 1);
}

#[test]
fn test_shooting_and_goalkeeper_block() {
    let events = enriched();
    let s = summarize(&events);

    let striker = s.find("9").unwrap().shooting;
    assert_eq!(striker.total_shots, 1);
    assert_eq!(striker.goals, 1);
    assert_eq!(striker.headed_goals, 1);
    assert_eq!(striker.outbox_goals, 0);
    assert!((striker.total_xg - events[3].xg.unwrap()).abs() < 1e-12);

    // Keeper "1" plays for B: concedes A's on-target xG and goals.
    let keeper = s.find("1").unwrap().shooting;
    assert_eq!(keeper.goals_conceded, 1);
    assert!((keeper.sot_xg_conceded - events[3].xg.unwrap()).abs() < 1e-12);

    // Players of A concede B's shot on target, no goals.
    let a_player = s.find("10").unwrap().shooting;
    assert_eq!(a_player.goals_conceded, 0);
    assert!((a_player.sot_xg_conceded - events[11].xg.unwrap()).abs() < 1e-12);
}

#[test]
fn test_third_team_leaves_conceded_at_zero() {
    let mut events = enriched();
    events.push(ev(17, "99", "C", Action::Goal).with_start(95.0, 34.0));
    pitchstats::xg::apply(&mut events, pitchstats::config::XgModel::Distance);
    let s = summarize(&events);
    assert!(s.shooting.iter().all(|r| r.goals_conceded == 0));
    assert!(s.shooting.iter().all(|r| r.sot_xg_conceded == 0.0));
}

#[test]
fn test_advanced_defending_counts() {
    let s = summarize(&enriched());
    let a = s.find("4").unwrap().advanced;

    assert_eq!(a.total_tackles, 2);
    assert_eq!(a.successful_tackles, 1);
    assert_eq!(a.failed_tackles(), 1);
    assert_eq!(a.ft_tackle_success, 1);
    assert_eq!(a.duel_win, 1);
    assert_eq!(a.duel_lose, 1);
    assert_eq!(a.total_aerial, 2);
    assert_eq!(a.aerial_won, 1);
    assert_eq!(a.aerial_lost, 1);
    assert_eq!(a.clear, 1);
    assert_eq!(a.header_clear, 1);
    assert_eq!(a.foul, 1);
    assert_eq!(a.pa_foul, 1);
    assert_eq!(a.ft_foul, 1);
}

#[test]
fn test_advanced_dribbling_and_receiving() {
    let s = summarize(&enriched());
    let a = s.find("7").unwrap().advanced;
    assert_eq!(a.dribble_attempt, 2);
    assert_eq!(a.dribble_fail_count, 1);
    assert!((a.valid_dribble_distance - 13.0).abs() < 1e-9);
    assert_eq!(a.sot_count, 1);
    assert_eq!(a.goal_count, 0);

    // The assist was passed to 9, and 9's goal carries no pass tag.
    let striker = s.find("9").unwrap().advanced;
    assert_eq!(striker.received_assist, 1);
    assert_eq!(striker.sot_count, 1);
    assert_eq!(striker.goal_count, 1);
    assert_eq!(striker.header_sot, 1);

    // A pass to 8 without key tags credits nothing.
    let a8 = s.find("8").unwrap().advanced;
    assert_eq!(a8.received_assist, 0);
    assert_eq!(a8.received_key_pass, 0);
}

#[test]
fn test_first_touch_inputs() {
    let s = summarize(&enriched());
    let a = s.find("10").unwrap().advanced;
    assert_eq!(a.pass_success_count, 1);
    assert_eq!(a.pass_fail_count, 1);
    assert_eq!(a.ft_pass_success, 0);

    let a8 = s.find("8").unwrap().advanced;
    assert_eq!(a8.ft_pass_success, 1);
}

#[test]
fn test_direction_is_normalized_before_zoning() {
    // Attacking left from raw x = 20 is normalized x = 85: final third.
    let events = vec![ev(1, "5", "A", Action::Pass)
        .with_direction(Direction::Left)
        .with_start(20.0, 30.0)
        .with_end(10.0, 30.0)
        .with_tags([Tag::Success])];
    let s = summarize(&events);
    let p = s.find("5").unwrap().passing;
    assert_eq!(p.final_third_success, 1);
    assert_eq!(p.progressive_success, 1);
}

#[test]
fn test_empty_input() {
    let s = summarize(&[]);
    assert!(s.is_empty());
    assert!(s.passing.is_empty());
}

#[test]
fn test_player_index_keeps_first_appearance_order() {
    let events = sample_match();
    let idx = summary::PlayerIndex::from_events(&events);
    assert_eq!(idx.get("10"), Some(0));
    assert_eq!(idx.get("7"), Some(5));
    assert_eq!(idx.get("nobody"), None);
    assert_eq!(idx.len(), 6);
}

#[test]
fn test_tagged_goal_after_assist_pass_counts_once() {
    let mut events = vec![
        ev(1, "10", "A", Action::Pass)
            .with_start(60.0, 30.0)
            .with_end(92.0, 34.0)
            .with_receiver("9")
            .with_tags([Tag::Success]),
        ev(2, "9", "A", Action::Goal)
            .with_start(95.0, 34.0)
            .with_tags([Tag::Assist, Tag::InBox, Tag::Success]),
    ];
    pitchstats::tagger::auto_tag(&mut events);
    assert!(events[0].tags.contains(&Tag::Assist));

    let s = summarize(&events);
    let striker = s.find("9").unwrap().advanced;
    assert_eq!(striker.received_assist, 1);
    assert_eq!(striker.received_key_pass, 0);
    assert_eq!(s.find("10").unwrap().advanced.received_assist, 0);
}

#[test]
fn test_received_key_pass_ignores_manual_key_tag() {
    let events = vec![
        ev(1, "9", "A", Action::Shot)
            .with_start(90.0, 34.0)
            .with_tags([Tag::Key]),
        ev(2, "6", "A", Action::Pass)
            .with_start(70.0, 30.0)
            .with_end(88.0, 30.0)
            .with_tags([Tag::Success, Tag::KeyPass]),
        ev(3, "11", "A", Action::ShotOnTarget).with_start(92.0, 30.0),
    ];
    let s = summarize(&events);
    assert_eq!(s.find("9").unwrap().advanced.received_key_pass, 0);
    assert_eq!(s.find("11").unwrap().advanced.received_key_pass, 1);
    assert_eq!(s.find("11").unwrap().advanced.received_assist, 0);
}
