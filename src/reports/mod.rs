use comfy_table::presets::ASCII_FULL;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};
use pitchstats::parser::Rejected;
use pitchstats::scorer::{ScoreCard, ScoreCategory};
use pitchstats::summary::{PassingRow, ShootingRow};
use strum::IntoEnumIterator;
use tracing::warn;

fn new_table() -> Table {
    let mut table = Table::new();
    table
        .load_preset(ASCII_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic);
    table
}

fn right_align(table: &mut Table, from: usize, to: usize) {
    for i in from..=to {
        if let Some(col) = table.column_mut(i) {
            col.set_cell_alignment(CellAlignment::Right);
        }
    }
}

fn score_cell(score: u8) -> Cell {
    let cell = Cell::new(score);
    if score >= 70 {
        cell.fg(Color::Green)
    } else if score < 40 {
        cell.fg(Color::Red)
    } else {
        cell
    }
}

pub fn print_rejected(rejected: &[Rejected]) {
    if rejected.is_empty() {
        return;
    }
    warn!("{} input line(s) rejected", rejected.len());

    let mut table = new_table();
    table.set_header(vec![
        Cell::new("Line").add_attribute(Attribute::Bold),
        Cell::new("Reason").fg(Color::Red),
    ]);
    for r in rejected {
        table.add_row(vec![Cell::new(r.line_no), Cell::new(&r.error)]);
    }
    println!("\n{}", table);
}

pub fn print_score_report(cards: &[ScoreCard]) {
    let mut table = new_table();

    let mut header = vec![Cell::new("Player").add_attribute(Attribute::Bold)];
    header.extend(ScoreCategory::iter().map(|c| Cell::new(c).fg(Color::Cyan)));
    table.set_header(header);

    for card in cards {
        let mut row = vec![Cell::new(&card.player).add_attribute(Attribute::Bold)];
        row.extend(
            ScoreCategory::iter().map(|c| card.get(c).map(score_cell).unwrap_or_else(|| Cell::new("-"))),
        );
        table.add_row(row);
    }
    right_align(&mut table, 1, ScoreCategory::iter().count());
    println!("\n{}", table);
}

pub fn print_passing_report(rows: &[PassingRow]) {
    let mut table = new_table();
    table.set_header(vec![
        Cell::new("Player").add_attribute(Attribute::Bold),
        Cell::new("Pass"),
        Cell::new("Succ"),
        Cell::new("Rate%").fg(Color::Cyan),
        Cell::new("Prog"),
        Cell::new("FT"),
        Cell::new("PA"),
        Cell::new("Key").fg(Color::Green),
        Cell::new("Ast").fg(Color::Green),
        Cell::new("BuildUp"),
    ]);

    for r in rows.iter().filter(|r| r.total > 0) {
        table.add_row(vec![
            Cell::new(&r.player).add_attribute(Attribute::Bold),
            Cell::new(r.total),
            Cell::new(r.success),
            Cell::new(format!("{:.1}", r.success_rate)).fg(Color::Cyan),
            Cell::new(r.progressive_success),
            Cell::new(r.final_third_success),
            Cell::new(r.pa_success),
            Cell::new(r.key_pass).fg(Color::Green),
            Cell::new(r.assist).fg(Color::Green),
            Cell::new(format!("{:.1}", r.own_half_score)),
        ]);
    }
    right_align(&mut table, 1, 9);
    println!("\n{}", table);
}

pub fn print_shooting_report(rows: &[ShootingRow]) {
    let mut table = new_table();
    table.set_header(vec![
        Cell::new("Player").add_attribute(Attribute::Bold),
        Cell::new("Shots"),
        Cell::new("SOT"),
        Cell::new("Goals").fg(Color::Green),
        Cell::new("xG").fg(Color::Cyan),
        Cell::new("G-xG"),
        Cell::new("Catch"),
        Cell::new("xG Conc."),
        Cell::new("Conc.").fg(Color::Red),
    ]);

    for r in rows
        .iter()
        .filter(|r| r.total_shots > 0 || r.catch_count > 0)
    {
        table.add_row(vec![
            Cell::new(&r.player).add_attribute(Attribute::Bold),
            Cell::new(r.total_shots),
            Cell::new(r.shots_on_target),
            Cell::new(r.goals).fg(Color::Green),
            Cell::new(format!("{:.2}", r.total_xg)).fg(Color::Cyan),
            Cell::new(format!("{:+.2}", f64::from(r.goals) - r.total_xg)),
            Cell::new(r.catch_count),
            Cell::new(format!("{:.2}", r.sot_xg_conceded)),
            Cell::new(r.goals_conceded).fg(Color::Red),
        ]);
    }
    right_align(&mut table, 1, 8);
    println!("\n{}", table);
}
