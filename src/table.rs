//! CSV interchange: the event table on the way in, the enriched event table
//! and the per-category summaries on the way out.

use crate::config::MatchParams;
use crate::error::{PitchError, PsResult};
use crate::event::{Action, Direction, Event, Half, Point, Side, TagSet};
use crate::parser::{resolve_team_id, ParsedLog, Rejected};
use crate::scorer::{ScoreCard, ScoreCategory};
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::{Read, Write};
use std::path::Path;
use strum::IntoEnumIterator;
use tracing::{debug, warn};

pub const REQUIRED_COLUMNS: [&str; 8] = [
    "Half",
    "Team",
    "Direction",
    "Time",
    "Player",
    "Action",
    "StartX",
    "StartY",
];

#[derive(Debug, Deserialize)]
struct RawRow {
    #[serde(rename = "No", default, deserialize_with = "csv::invalid_option")]
    no: Option<u32>,
    #[serde(rename = "MatchID", default)]
    match_id: Option<String>,
    #[serde(rename = "TeamID", default)]
    team_id: Option<String>,
    #[serde(rename = "Half")]
    half: Half,
    #[serde(rename = "Team")]
    side: Side,
    #[serde(rename = "Direction")]
    direction: Direction,
    #[serde(rename = "Time")]
    time: String,
    #[serde(rename = "Player")]
    player: String,
    #[serde(rename = "Receiver", default)]
    receiver: Option<String>,
    #[serde(rename = "Action")]
    action: Action,
    #[serde(rename = "StartX", deserialize_with = "csv::invalid_option")]
    start_x: Option<f64>,
    #[serde(rename = "StartY", deserialize_with = "csv::invalid_option")]
    start_y: Option<f64>,
    #[serde(rename = "EndX", default, deserialize_with = "csv::invalid_option")]
    end_x: Option<f64>,
    #[serde(rename = "EndY", default, deserialize_with = "csv::invalid_option")]
    end_y: Option<f64>,
    #[serde(rename = "Tags", default)]
    tags: Option<String>,
}

fn non_empty(s: Option<String>) -> Option<String> {
    s.map(|v| v.trim().to_string()).filter(|v| !v.is_empty())
}

impl RawRow {
    fn into_event(self, params: &MatchParams) -> Event {
        let mut e = Event::new(self.player.trim(), self.action);
        e.match_id = non_empty(self.match_id).unwrap_or_else(|| params.match_id.clone());
        e.team_id =
            non_empty(self.team_id).unwrap_or_else(|| resolve_team_id(self.side, params));
        e.half = self.half;
        e.side = self.side;
        e.direction = self.direction;
        e.time = self.time.trim().to_string();
        e.receiver = non_empty(self.receiver);
        e.start = Point::from_axes(self.start_x, self.start_y);
        e.end = Point::from_axes(self.end_x, self.end_y);
        e.tags = TagSet::parse(self.tags.as_deref().unwrap_or(""));
        e
    }
}

/// Reads an event table. A missing required column fails the whole read;
/// a row that cannot be decoded is rejected and the rest continue.
///
/// Rows are ordered by their `No` column. Rows with a blank or invalid
/// `No` follow the numbered ones in input order. The result is renumbered
/// densely from 1.
pub fn read_events<R: Read>(reader: R, params: &MatchParams) -> PsResult<ParsedLog> {
    let mut rdr = csv::ReaderBuilder::new()
        .flexible(true)
        .has_headers(true)
        .trim(csv::Trim::Headers)
        .from_reader(reader);

    let headers = rdr.headers()?.clone();
    for col in REQUIRED_COLUMNS {
        if !headers.iter().any(|h| h == col) {
            return Err(PitchError::MissingColumn(col.to_string()));
        }
    }
    if !headers.iter().any(|h| h == "Tags") {
        debug!("Event table has no Tags column; every event starts untagged");
    }

    let mut out = ParsedLog::default();
    let mut numbered = Vec::new();
    for (idx, result) in rdr.deserialize::<RawRow>().enumerate() {
        // Header is line 1.
        let line_no = idx + 2;
        match result {
            Ok(row) => numbered.push((row.no, row.into_event(params))),
            Err(e) => {
                warn!("Rejected table row {}: {}", line_no, e);
                out.rejected.push(Rejected {
                    line_no,
                    error: e.into(),
                });
            }
        }
    }

    numbered.sort_by_key(|(no, _)| (no.is_none(), *no));
    out.events = numbered
        .into_iter()
        .enumerate()
        .map(|(i, (_, e))| e.with_no(i as u32 + 1))
        .collect();

    debug!(
        "Read {} table rows ({} rejected)",
        out.events.len(),
        out.rejected.len()
    );
    Ok(out)
}

pub fn load_events<P: AsRef<Path>>(path: P, params: &MatchParams) -> PsResult<ParsedLog> {
    let file = File::open(path)?;
    read_events(file, params)
}

/// One row of the enriched event table, columns in interchange order.
#[derive(Debug, Serialize)]
struct EnrichedRow<'a> {
    #[serde(rename = "No")]
    no: u32,
    #[serde(rename = "MatchID")]
    match_id: &'a str,
    #[serde(rename = "TeamID")]
    team_id: &'a str,
    #[serde(rename = "Half")]
    half: Half,
    #[serde(rename = "Team")]
    side: Side,
    #[serde(rename = "Direction")]
    direction: Direction,
    #[serde(rename = "Time")]
    time: &'a str,
    #[serde(rename = "Time(s)")]
    time_secs: u32,
    #[serde(rename = "Player")]
    player: &'a str,
    #[serde(rename = "Receiver")]
    receiver: Option<&'a str>,
    #[serde(rename = "Action")]
    action: Action,
    #[serde(rename = "StartX")]
    start_x: Option<f64>,
    #[serde(rename = "StartY")]
    start_y: Option<f64>,
    #[serde(rename = "EndX")]
    end_x: Option<f64>,
    #[serde(rename = "EndY")]
    end_y: Option<f64>,
    #[serde(rename = "StartX_adj")]
    start_x_adj: Option<f64>,
    #[serde(rename = "StartY_adj")]
    start_y_adj: Option<f64>,
    #[serde(rename = "EndX_adj")]
    end_x_adj: Option<f64>,
    #[serde(rename = "EndY_adj")]
    end_y_adj: Option<f64>,
    #[serde(rename = "Tags")]
    tags: &'a TagSet,
    #[serde(rename = "Distance")]
    distance: Option<f64>,
    #[serde(rename = "Pass_Distance")]
    pass_distance: Option<String>,
    #[serde(rename = "Angle")]
    angle: Option<f64>,
    #[serde(rename = "Pass_Direction")]
    pass_direction: Option<String>,
    #[serde(rename = "xG")]
    xg: Option<f64>,
}

impl<'a> From<&'a Event> for EnrichedRow<'a> {
    fn from(e: &'a Event) -> Self {
        let start_adj = e.start_adj();
        let end_adj = e.end_adj();
        Self {
            no: e.no,
            match_id: &e.match_id,
            team_id: &e.team_id,
            half: e.half,
            side: e.side,
            direction: e.direction,
            time: &e.time,
            time_secs: e.time_secs,
            player: &e.player,
            receiver: e.receiver.as_deref(),
            action: e.action,
            start_x: e.start.map(|p| p.x),
            start_y: e.start.map(|p| p.y),
            end_x: e.end.map(|p| p.x),
            end_y: e.end.map(|p| p.y),
            start_x_adj: start_adj.map(|p| p.x),
            start_y_adj: start_adj.map(|p| p.y),
            end_x_adj: end_adj.map(|p| p.x),
            end_y_adj: end_adj.map(|p| p.y),
            tags: &e.tags,
            distance: e.distance(),
            pass_distance: e.pass_distance().map(|d| d.to_string()),
            angle: e.angle(),
            pass_direction: e.pass_direction().map(|d| d.to_string()),
            xg: e.xg,
        }
    }
}

pub fn write_events<W: Write>(writer: W, events: &[Event]) -> PsResult<()> {
    let mut wtr = csv::Writer::from_writer(writer);
    for e in events {
        wtr.serialize(EnrichedRow::from(e))?;
    }
    wtr.flush()?;
    Ok(())
}

/// Writes any summary table; the header comes from the row type.
pub fn write_rows<W: Write, T: Serialize>(writer: W, rows: &[T]) -> PsResult<()> {
    let mut wtr = csv::Writer::from_writer(writer);
    for row in rows {
        wtr.serialize(row)?;
    }
    wtr.flush()?;
    Ok(())
}

/// `Player` followed by one `<label>_Score` column per category.
pub fn write_scores<W: Write>(writer: W, cards: &[ScoreCard]) -> PsResult<()> {
    let mut wtr = csv::Writer::from_writer(writer);

    let mut header = vec!["Player".to_string()];
    header.extend(ScoreCategory::iter().map(ScoreCategory::column));
    wtr.write_record(&header)?;

    for card in cards {
        let mut record = vec![card.player.clone()];
        record.extend(
            ScoreCategory::iter().map(|c| card.get(c).map(|s| s.to_string()).unwrap_or_default()),
        );
        wtr.write_record(&record)?;
    }
    wtr.flush()?;
    Ok(())
}

pub fn save_to<P, F>(path: P, write: F) -> PsResult<()>
where
    P: AsRef<Path>,
    F: FnOnce(File) -> PsResult<()>,
{
    let file = File::create(path)?;
    write(file)
}
