use crate::config::MatchParams;
use crate::error::{PitchError, PsResult};
use crate::event::{Action, Event, Point, Side, TagSet};
use regex::Regex;
use std::fmt::Write;
use std::sync::LazyLock;
use tracing::{debug, warn};

static POS_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"Pos\((.+?), (.+?)\)").expect("static regex"));
static ACTOR_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(\d+) (.+?)(?: to (\d+))?$").expect("static regex"));

const SEPARATOR: &str = " | ";
const MIN_SEGMENTS: usize = 6;

/// `Half | Team | Direction | Time | Pos(x, y) | Player Action[ to R] | [Pos(x, y)] | [Tags: ...]`
pub fn format_log_line(event: &Event) -> PsResult<String> {
    let start = event.start.ok_or_else(|| {
        PitchError::Validation(format!(
            "event {} ({} {}) has no start position",
            event.no, event.player, event.action
        ))
    })?;

    let mut line = format!(
        "{} | {} | {} | {} | Pos({}, {}) | {} {}",
        event.half, event.side, event.direction, event.time, start.x, start.y, event.player,
        event.action
    );
    if let Some(r) = &event.receiver {
        let _ = write!(line, " to {}", r);
    }
    if let Some(end) = event.end {
        let _ = write!(line, " | Pos({}, {})", end.x, end.y);
    }
    if !event.tags.is_empty() {
        let _ = write!(line, " | Tags: {}", event.tags);
    }
    Ok(line)
}

fn malformed(reason: &str, line: &str) -> PitchError {
    PitchError::MalformedLine {
        reason: reason.to_string(),
        line: line.to_string(),
    }
}

fn parse_pos(segment: &str) -> Option<Point> {
    let caps = POS_RE.captures(segment)?;
    Point::from_axes(caps[1].trim().parse().ok(), caps[2].trim().parse().ok())
}

/// Parses one canonical line. `no`, `match_id` and `team_id` are left for
/// the batch parser to assign.
pub fn parse_log_line(line: &str) -> PsResult<Event> {
    let line = line.trim_end_matches(['\r', '\n']);
    let parts: Vec<&str> = line.split(SEPARATOR).collect();
    if parts.len() < MIN_SEGMENTS {
        return Err(malformed("fewer than 6 segments", line));
    }

    let half = parts[0].parse().map_err(|_| malformed("half", line))?;
    let side = parts[1].parse().map_err(|_| malformed("team side", line))?;
    let direction = parts[2].parse().map_err(|_| malformed("direction", line))?;

    let caps = ACTOR_RE
        .captures(parts[5].trim())
        .ok_or_else(|| malformed("player/action segment", line))?;
    let action: Action = caps[2]
        .parse()
        .map_err(|_| PitchError::UnknownAction(caps[2].to_string()))?;

    let mut event = Event::new(&caps[1], action);
    event.receiver = caps.get(3).map(|m| m.as_str().to_string());
    event.half = half;
    event.side = side;
    event.direction = direction;
    event.time = parts[3].to_string();
    event.start = parse_pos(parts[4]);

    for part in &parts[6..] {
        if let Some(tags) = part.strip_prefix("Tags:") {
            event.tags = TagSet::parse(tags);
        } else if part.contains("Pos") {
            event.end = parse_pos(part);
        }
    }
    Ok(event)
}

/// A line the batch parser could not turn into an event.
#[derive(Debug)]
pub struct Rejected {
    /// 1-based position in the input.
    pub line_no: usize,
    pub error: PitchError,
}

#[derive(Debug, Default)]
pub struct ParsedLog {
    pub events: Vec<Event>,
    pub rejected: Vec<Rejected>,
}

/// Parses a batch of lines. Bad lines are collected in `rejected` and the
/// rest keep a dense 1-based `no` in input order.
pub fn parse_log_lines<I, S>(lines: I, params: &MatchParams) -> ParsedLog
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut out = ParsedLog::default();

    for (idx, line) in lines.into_iter().enumerate() {
        let line = line.as_ref();
        if line.trim().is_empty() {
            continue;
        }
        match parse_log_line(line) {
            Ok(mut event) => {
                event.no = out.events.len() as u32 + 1;
                event.match_id = params.match_id.clone();
                event.team_id = resolve_team_id(event.side, params);
                out.events.push(event);
            }
            Err(error) => {
                warn!("Rejected log line {}: {}", idx + 1, error);
                out.rejected.push(Rejected {
                    line_no: idx + 1,
                    error,
                });
            }
        }
    }

    debug!(
        "Parsed {} log lines ({} rejected)",
        out.events.len(),
        out.rejected.len()
    );
    out
}

pub fn resolve_team_id(side: Side, params: &MatchParams) -> String {
    match side {
        Side::Home => params.home_team_id.clone(),
        Side::Away => params.away_team_id.clone(),
    }
}
