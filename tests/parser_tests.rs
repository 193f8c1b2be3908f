use pitchstats::config::MatchParams;
use pitchstats::error::PitchError;
use pitchstats::event::{Action, Direction, Half, Point, Side, Tag, TagSet};
use pitchstats::parser::{
    format_log_line, parse_log_line, parse_log_lines, parse_short_code, CaptureContext,
};
use pitchstats::parser::shortcode::{action_for_code, outcome_for_code};
use regex::Regex;
use rstest::rstest;

fn ctx(direction: Direction) -> CaptureContext {
    CaptureContext {
        half: Half::First,
        team: Side::Home,
        direction,
        time: "00:00".to_string(),
    }
}

fn clicks() -> Vec<Point> {
    vec![Point::new(30.0, 20.0), Point::new(60.0, 40.0)]
}

#[test]
fn test_short_code_pass_end_to_end() {
    let tagged = parse_short_code("10ss8.k", &clicks(), &ctx(Direction::Right)).unwrap();

    assert_eq!(
        tagged.log_line,
        "1st | home | right | 00:00 | Pos(30, 20) | 10 Pass to 8 | Pos(60, 40) | Tags: Key, Progressive, Success"
    );
    let e = &tagged.event;
    assert_eq!(e.player, "10");
    assert_eq!(e.receiver.as_deref(), Some("8"));
    assert_eq!(e.action, Action::Pass);
    assert_eq!(e.start, Some(Point::new(30.0, 20.0)));
    assert_eq!(e.end, Some(Point::new(60.0, 40.0)));
    assert!(e.tags.contains(&Tag::Key));
    assert!(e.tags.contains(&Tag::Progressive));
    assert!(e.tags.contains(&Tag::Success));
    assert_eq!(e.tags.len(), 3);
}

#[test]
fn test_log_line_shape() {
    let re = Regex::new(
        r"^(1st|2nd) \| (home|away) \| (left|right) \| [^|]+ \| Pos\([^)]+\) \| \d+ [A-Za-z ]+?( to \d+)?( \| Pos\([^)]+\))?( \| Tags: .+)?$",
    )
    .unwrap();
    for code in ["10ss8.k", "7d", "4aa.r", "9ddd.h.c", "3q"] {
        let tagged = parse_short_code(code, &clicks(), &ctx(Direction::Left)).unwrap();
        assert!(re.is_match(&tagged.log_line), "{}", tagged.log_line);
    }
}

#[test]
fn test_single_point_action_uses_last_click() {
    let tagged = parse_short_code("5aa", &clicks(), &ctx(Direction::Right)).unwrap();
    assert_eq!(tagged.event.action, Action::Tackle);
    assert_eq!(tagged.event.start, Some(Point::new(60.0, 40.0)));
    assert_eq!(tagged.event.end, None);
    assert!(tagged.event.is_success());
}

#[test]
fn test_receiver_forces_two_points() {
    // "f" is single-point on its own, a receiver makes it two-point.
    let err = parse_short_code("5f6", &clicks()[..1], &ctx(Direction::Right)).unwrap_err();
    assert!(matches!(
        err,
        PitchError::InsufficientCoordinates {
            required: 2,
            captured: 1
        }
    ));
}

#[rstest]
#[case("10ss8", 1)]
#[case("10cc", 0)]
#[case("3d", 0)]
fn test_insufficient_coordinates(#[case] code: &str, #[case] captured: usize) {
    let all = clicks();
    let err = parse_short_code(code, &all[..captured], &ctx(Direction::Right)).unwrap_err();
    assert!(matches!(err, PitchError::InsufficientCoordinates { .. }));
}

#[rstest]
#[case("9ddd", vec![Point::new(f64::NAN, 30.0)])]
#[case("9ddd", vec![Point::new(95.0, f64::INFINITY)])]
#[case("10ss8", vec![Point::new(30.0, 20.0), Point::new(f64::NAN, 40.0)])]
fn test_non_finite_click_is_rejected(#[case] code: &str, #[case] points: Vec<Point>) {
    let err = parse_short_code(code, &points, &ctx(Direction::Right)).unwrap_err();
    assert!(matches!(err, PitchError::Validation(_)), "{code}: {err}");
}

#[rstest]
#[case("")]
#[case("ss8")]
#[case("10")]
#[case("10SS8 extra")]
#[case("10s-8")]
fn test_malformed_code(#[case] code: &str) {
    let err = parse_short_code(code, &clicks(), &ctx(Direction::Right)).unwrap_err();
    assert!(matches!(err, PitchError::MalformedCode(_)), "{code}: {err}");
}

#[test]
fn test_unknown_action_code() {
    let err = parse_short_code("10xyz", &clicks(), &ctx(Direction::Right)).unwrap_err();
    assert!(matches!(err, PitchError::UnknownAction(ref c) if c == "xyz"));
}

#[test]
fn test_unknown_tag_code_is_ignored() {
    let tagged = parse_short_code("10ss8.zz.k", &clicks(), &ctx(Direction::Right)).unwrap();
    assert!(tagged.event.tags.contains(&Tag::Key));
    assert!(!tagged.log_line.contains("zz"));
}

#[test]
fn test_first_letter_fallback() {
    // "sx" is not in the table; its first letter "s" is Pass.
    let tagged = parse_short_code("10sx8", &clicks(), &ctx(Direction::Right)).unwrap();
    assert_eq!(tagged.event.action, Action::Pass);
    assert!(tagged.event.tags.contains(&Tag::Fail));
}

#[rstest]
#[case("ddd", Action::Goal)]
#[case("dd", Action::ShotOnTarget)]
#[case("d", Action::Shot)]
#[case("db", Action::BlockedShot)]
#[case("ee", Action::Breakthrough)]
#[case("rr", Action::Dribble)]
#[case("qw", Action::Block)]
#[case("vv", Action::Punching)]
#[case("ff", Action::BeFouled)]
#[case("o", Action::Offside)]
#[case("t", Action::Touch)]
fn test_action_code_table(#[case] code: &str, #[case] expected: Action) {
    assert_eq!(action_for_code(code), Some(expected));
}

#[rstest]
#[case("ss", Some(Tag::Success))]
#[case("s", Some(Tag::Fail))]
#[case("dd", Some(Tag::Success))]
#[case("ddd", Some(Tag::Success))]
#[case("d", Some(Tag::Fail))]
#[case("db", Some(Tag::Fail))]
#[case("qw", Some(Tag::Fail))]
#[case("t", None)]
#[case("m", None)]
#[case("q", None)]
#[case("qq", None)]
#[case("w", None)]
#[case("o", None)]
fn test_outcome_rule(#[case] code: &str, #[case] expected: Option<Tag>) {
    assert_eq!(outcome_for_code(code), expected);
}

#[test]
fn test_shot_zone_tags() {
    let inside = [Point::new(95.0, 34.0)];
    let tagged = parse_short_code("9dd", &inside, &ctx(Direction::Right)).unwrap();
    assert!(tagged.event.tags.contains(&Tag::InBox));
    assert!(!tagged.event.tags.contains(&Tag::OutBox));

    let outside = [Point::new(75.0, 34.0)];
    let tagged = parse_short_code("9d", &outside, &ctx(Direction::Right)).unwrap();
    assert!(tagged.event.tags.contains(&Tag::OutBox));

    // Raw (10, 34) attacking left is (95, 34) normalized.
    let mirrored = [Point::new(10.0, 34.0)];
    let tagged = parse_short_code("9ddd", &mirrored, &ctx(Direction::Left)).unwrap();
    assert!(tagged.event.tags.contains(&Tag::InBox));
}

#[test]
fn test_non_shot_outside_box_gets_no_zone_tag() {
    let tagged = parse_short_code("4aa", &[Point::new(40.0, 30.0)], &ctx(Direction::Right)).unwrap();
    assert!(!tagged.event.tags.contains(&Tag::OutBox));
    assert!(!tagged.event.tags.contains(&Tag::InBox));
}

#[test]
fn test_log_line_round_trip() {
    let tagged = parse_short_code("10ss8.k.sw", &clicks(), &ctx(Direction::Left)).unwrap();
    let parsed = parse_log_line(&tagged.log_line).unwrap();
    let orig = &tagged.event;

    assert_eq!(parsed.half, orig.half);
    assert_eq!(parsed.side, orig.side);
    assert_eq!(parsed.direction, orig.direction);
    assert_eq!(parsed.time, orig.time);
    assert_eq!(parsed.start, orig.start);
    assert_eq!(parsed.end, orig.end);
    assert_eq!(parsed.player, orig.player);
    assert_eq!(parsed.receiver, orig.receiver);
    assert_eq!(parsed.action, orig.action);
    assert_eq!(parsed.tags, orig.tags);
    assert_eq!(format_log_line(&parsed).unwrap(), tagged.log_line);
}

#[test]
fn test_parse_log_line_without_optional_segments() {
    let line = "2nd | away | left | 67:12 | Pos(40.5, 22.25) | 4 Tackle";
    let e = parse_log_line(line).unwrap();
    assert_eq!(e.half, Half::Second);
    assert_eq!(e.side, Side::Away);
    assert_eq!(e.direction, Direction::Left);
    assert_eq!(e.start, Some(Point::new(40.5, 22.25)));
    assert_eq!(e.end, None);
    assert_eq!(e.receiver, None);
    assert!(e.tags.is_empty());
}

#[test]
fn test_parse_log_line_tags_without_end() {
    let line = "1st | home | right | 10:00 | Pos(95, 34) | 9 Goal | Tags: In-box, Success, Custom Tag";
    let e = parse_log_line(line).unwrap();
    assert_eq!(e.action, Action::Goal);
    assert_eq!(e.end, None);
    assert_eq!(e.tags, TagSet::parse("Custom Tag, In-box, Success"));
    assert!(e.tags.contains(&Tag::Other("Custom Tag".to_string())));
}

#[rstest]
#[case("1st | home | right | 00:00 | Pos(1, 2)")]
#[case("3rd | home | right | 00:00 | Pos(1, 2) | 4 Pass")]
#[case("1st | neutral | right | 00:00 | Pos(1, 2) | 4 Pass")]
#[case("1st | home | up | 00:00 | Pos(1, 2) | 4 Pass")]
#[case("1st | home | right | 00:00 | Pos(1, 2) | Pass by 4")]
fn test_malformed_log_lines(#[case] line: &str) {
    let err = parse_log_line(line).unwrap_err();
    assert!(matches!(err, PitchError::MalformedLine { .. }), "{err}");
}

#[test]
fn test_unknown_action_name_in_log_line() {
    let err = parse_log_line("1st | home | right | 00:00 | Pos(1, 2) | 4 Sprint").unwrap_err();
    assert!(matches!(err, PitchError::UnknownAction(ref a) if a == "Sprint"));
}

#[test]
fn test_non_numeric_start_is_unset() {
    let e = parse_log_line("1st | home | right | 00:00 | Pos(abc, 2) | 4 Tackle").unwrap();
    assert_eq!(e.start, None);
}

#[test]
fn test_batch_assigns_dense_numbers_and_team_ids() {
    let params = MatchParams {
        match_id: "M1".to_string(),
        home_team_id: "FCH".to_string(),
        away_team_id: "FCA".to_string(),
    };
    let lines = [
        "1st | home | right | 00:10 | Pos(30, 20) | 10 Pass to 8 | Pos(60, 40) | Tags: Success",
        "garbage",
        "",
        "1st | away | left | 00:20 | Pos(50, 30) | 4 Tackle | Tags: Fail",
        "1st | home | right | 00:30 | Pos(95, 34) | 8 Goal | Tags: In-box, Success",
    ];
    let parsed = parse_log_lines(lines, &params);

    assert_eq!(parsed.events.len(), 3);
    assert_eq!(parsed.rejected.len(), 1);
    assert_eq!(parsed.rejected[0].line_no, 2);

    let nos: Vec<u32> = parsed.events.iter().map(|e| e.no).collect();
    assert_eq!(nos, vec![1, 2, 3]);
    assert!(parsed.events.iter().all(|e| e.match_id == "M1"));
    assert_eq!(parsed.events[0].team_id, "FCH");
    assert_eq!(parsed.events[1].team_id, "FCA");
}
