use crate::reports;
use clap::Args;
use pitchstats::config::{Config, ScoringWeights};
use pitchstats::error::{PitchError, PsResult};
use pitchstats::parser::{parse_log_lines, ParsedLog};
use pitchstats::pipeline::{MatchReport, Pipeline};
use pitchstats::scorer::Scorer;
use pitchstats::table;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;

#[derive(Args, Debug, Clone)]
pub struct AnalyzeArgs {
    /// Canonical log lines, one event per line.
    #[arg(long, conflicts_with = "table", required_unless_present = "table")]
    pub logs: Option<PathBuf>,

    /// Event table (CSV) with at least the required columns.
    #[arg(long)]
    pub table: Option<PathBuf>,

    #[command(flatten)]
    pub config: Config,

    /// JSON weight overrides applied on top of the selected profile.
    #[arg(long)]
    pub weights: Option<PathBuf>,

    /// Directory for the enriched table, summaries, scores and report.json.
    #[arg(short, long)]
    pub out_dir: Option<PathBuf>,
}

fn load_input(args: &AnalyzeArgs) -> PsResult<ParsedLog> {
    let params = &args.config.match_params;
    if let Some(path) = &args.table {
        info!("Loading event table: {}", path.display());
        return table::load_events(path, params);
    }
    let path = args.logs.as_deref().ok_or_else(|| {
        PitchError::Config("either --logs or --table is required".to_string())
    })?;
    info!("Loading log lines: {}", path.display());
    let content = fs::read_to_string(path)?;
    Ok(parse_log_lines(content.lines(), params))
}

fn write_outputs(dir: &Path, report: &MatchReport) -> PsResult<()> {
    fs::create_dir_all(dir)?;
    let s = &report.summaries;

    table::save_to(dir.join("events.csv"), |f| {
        table::write_events(f, report.events())
    })?;
    table::save_to(dir.join("passing.csv"), |f| table::write_rows(f, &s.passing))?;
    table::save_to(dir.join("shooting.csv"), |f| {
        table::write_rows(f, &s.shooting)
    })?;
    table::save_to(dir.join("crossing.csv"), |f| {
        table::write_rows(f, &s.crossing)
    })?;
    table::save_to(dir.join("advanced.csv"), |f| {
        table::write_rows(f, &s.advanced)
    })?;
    table::save_to(dir.join("scores.csv"), |f| {
        table::write_scores(f, &report.scores)
    })?;
    fs::write(
        dir.join("report.json"),
        serde_json::to_string_pretty(report)?,
    )?;

    info!("Wrote outputs to {}", dir.display());
    Ok(())
}

pub fn run(args: AnalyzeArgs) -> PsResult<()> {
    let profile = args.config.model.score_profile;
    let weights = match &args.weights {
        Some(path) => {
            info!("Loading weights from: {}", path.display());
            ScoringWeights::load_from_file(path, profile)?
        }
        None => ScoringWeights::for_profile(profile),
    };

    let parsed = load_input(&args)?;
    reports::print_rejected(&parsed.rejected);

    let pipeline = Pipeline::new(args.config.clone(), Scorer::new(weights));
    let report = pipeline.run(parsed.events);

    reports::print_score_report(&report.scores);
    reports::print_passing_report(&report.summaries.passing);
    reports::print_shooting_report(&report.summaries.shooting);

    if let Some(dir) = &args.out_dir {
        write_outputs(dir, &report)?;
    }
    Ok(())
}
