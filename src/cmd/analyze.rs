use crate::reports;
use clap::Args;
use gramforge::analyzer::{analyze_text, sort_ngrams_by_frequency};
use gramforge::error::GfResult;
use serde_json::json;
use std::fs;
use std::io::Read;
use std::path::PathBuf;
use tracing::info;

#[derive(Args, Debug, Clone)]
pub struct AnalyzeArgs {
    /// Text file to analyze (reads stdin when omitted)
    #[arg(short, long)]
    pub input: Option<PathBuf>,

    /// Rows shown per granularity table
    #[arg(long, default_value_t = 20)]
    pub top: usize,

    /// Hide grams occurring fewer times than this
    #[arg(long, default_value_t = 1)]
    pub min_frequency: usize,

    /// Write the full rankings as CSV files into this directory
    #[arg(long)]
    pub export: Option<PathBuf>,

    /// Emit the rankings as JSON on stdout instead of tables
    #[arg(long, default_value_t = false)]
    pub json: bool,
}

pub fn run(args: AnalyzeArgs) -> GfResult<()> {
    let text = read_input(&args.input)?;
    let analysis = analyze_text(&text);

    if args.json {
        let mut doc = serde_json::Map::new();
        for (name, table) in analysis.tables() {
            let ranked = sort_ngrams_by_frequency(table, args.min_frequency);
            doc.insert(name.to_string(), json!(ranked));
        }
        println!("{}", serde_json::to_string_pretty(&doc)?);
    } else {
        reports::print_analysis(&analysis, args.top, args.min_frequency);
    }

    if let Some(dir) = &args.export {
        fs::create_dir_all(dir)?;
        for (name, table) in analysis.tables() {
            let ranked = sort_ngrams_by_frequency(table, args.min_frequency);
            let path = dir.join(format!("{}.csv", name));
            reports::export_ranked_csv(&path, &ranked)?;
            info!("Exported {} rows to {:?}", ranked.len(), path);
        }
    }

    Ok(())
}

fn read_input(input: &Option<PathBuf>) -> GfResult<String> {
    match input {
        Some(path) => Ok(fs::read_to_string(path)?),
        None => {
            let mut text = String::new();
            std::io::stdin().read_to_string(&mut text)?;
            Ok(text)
        }
    }
}
