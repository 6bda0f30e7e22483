// ===== gramforge/src/reports/mod.rs =====
use comfy_table::presets::ASCII_FULL;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};
use gramforge::analyzer::{sort_ngrams_by_frequency, TextAnalysis};
use gramforge::error::GfResult;
use gramforge::metrics::format_time;
use gramforge::session::{SessionRecord, SessionTotals};
use std::path::Path;

/// One ranking table per granularity, top rows only.
pub fn print_analysis(analysis: &TextAnalysis, top: usize, min_frequency: usize) {
    for (name, table) in analysis.tables() {
        let ranked = sort_ngrams_by_frequency(table, min_frequency);
        if ranked.is_empty() {
            println!("\n{}: no grams at this granularity.", name);
            continue;
        }

        let mut out = Table::new();
        out.load_preset(ASCII_FULL)
            .set_content_arrangement(ContentArrangement::Dynamic);

        out.add_row(vec![
            Cell::new(name.to_uppercase()).add_attribute(Attribute::Bold),
            Cell::new("Gram"),
            Cell::new("Count").fg(Color::Cyan),
        ]);

        for (i, (gram, count)) in ranked.iter().take(top).enumerate() {
            out.add_row(vec![
                Cell::new(format!("{}", i + 1)),
                Cell::new(gram).add_attribute(Attribute::Bold),
                Cell::new(format!("{}", count)).fg(Color::Cyan),
            ]);
        }

        for i in [0usize, 2] {
            if let Some(col) = out.column_mut(i) {
                col.set_cell_alignment(CellAlignment::Right);
            }
        }

        println!("\n{}", out);
        if ranked.len() > top {
            println!("  ({} of {} shown)", top, ranked.len());
        }
    }
}

pub fn print_phrases(phrases: &[String]) {
    if phrases.is_empty() {
        println!("\nNo phrases generated.");
        return;
    }

    let mut out = Table::new();
    out.load_preset(ASCII_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic);

    out.add_row(vec![
        Cell::new("#").add_attribute(Attribute::Bold),
        Cell::new("Phrase").add_attribute(Attribute::Bold),
    ]);

    for (i, phrase) in phrases.iter().enumerate() {
        out.add_row(vec![
            Cell::new(format!("{}", i + 1)),
            Cell::new(phrase),
        ]);
    }

    if let Some(col) = out.column_mut(0) {
        col.set_cell_alignment(CellAlignment::Right);
    }

    println!("\n{}", out);
}

pub fn print_session_summary(totals: &SessionTotals, average_cpm: u32) {
    let mut out = Table::new();
    out.load_preset(ASCII_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic);

    out.add_row(vec![
        Cell::new("Session Summary").add_attribute(Attribute::Bold),
        Cell::new(""),
    ]);

    let rows: Vec<(&str, String)> = vec![
        ("Phrases cleared", totals.lessons_completed.to_string()),
        ("Characters typed", totals.total_characters.to_string()),
        ("Time typing", format_time(totals.total_time_secs as u64)),
        ("Average CPM", average_cpm.to_string()),
        ("Best CPM", totals.best_cpm.to_string()),
        ("Current streak", totals.current_streak.to_string()),
        ("Longest streak", totals.longest_streak.to_string()),
    ];

    for (label, value) in rows {
        out.add_row(vec![
            Cell::new(label),
            Cell::new(value).fg(Color::Cyan),
        ]);
    }

    if let Some(col) = out.column_mut(1) {
        col.set_cell_alignment(CellAlignment::Right);
    }

    println!("\n{}", out);
}

/// `rank,ngram,frequency` rows, full ranking.
pub fn export_ranked_csv<P: AsRef<Path>>(path: P, ranked: &[(String, usize)]) -> GfResult<()> {
    let mut wtr = csv::Writer::from_path(path)?;
    wtr.write_record(["rank", "ngram", "frequency"])?;
    for (i, (gram, count)) in ranked.iter().enumerate() {
        wtr.write_record([&(i + 1).to_string(), gram, &count.to_string()])?;
    }
    wtr.flush()?;
    Ok(())
}

pub fn export_history_csv<P: AsRef<Path>>(path: P, records: &[SessionRecord]) -> GfResult<()> {
    let mut wtr = csv::Writer::from_path(path)?;
    for record in records {
        wtr.serialize(record)?;
    }
    wtr.flush()?;
    Ok(())
}
