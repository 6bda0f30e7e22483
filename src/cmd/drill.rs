use crate::reports;
use clap::Args;
use gramforge::api::PracticeState;
use gramforge::config::Config;
use gramforge::corpus::{load_word_list, CorpusSet};
use gramforge::error::GfResult;
use std::io::{BufRead, Write};
use std::path::PathBuf;
use std::time::Instant;
use tracing::info;

#[derive(Args, Debug, Clone)]
pub struct DrillArgs {
    #[command(flatten)]
    pub config: Config,

    /// Drill source: bigrams, trigrams, tetragrams, words or custom_words
    #[arg(short, long, default_value = "bigrams")]
    pub source: String,

    /// Word-list file backing the custom_words source
    #[arg(long)]
    pub custom_words: Option<PathBuf>,

    /// Seed for a reproducible phrase order
    #[arg(long)]
    pub seed: Option<u64>,

    /// Keep rank order instead of shuffling
    #[arg(long, default_value_t = false)]
    pub no_shuffle: bool,

    /// Advance on completion even when thresholds miss
    #[arg(long, default_value_t = false)]
    pub practice: bool,

    /// Stop after this many cleared phrases (0 = run until an empty line)
    #[arg(long, default_value_t = 0)]
    pub limit: usize,

    /// Write the session history as CSV on exit
    #[arg(long)]
    pub export_history: Option<PathBuf>,
}

pub fn run(args: DrillArgs, config: Config, corpus: CorpusSet) -> GfResult<()> {
    config.validate()?;
    let kind = super::parse_source(&args.source)?;

    // 1. Wire up the practice service.
    let mut state = PracticeState::new(corpus);
    if let Some(path) = &args.custom_words {
        let words = load_word_list(path)?;
        info!("Loaded {} custom words from {:?}", words.len(), path);
        state.set_custom_words(words);
    }
    state.configure_source(kind, &config);
    state.practice_mode = args.practice;

    let mut permuter = super::build_permuter(args.no_shuffle, args.seed);
    state.refresh_phrases(permuter.as_mut());

    if state.current_phrase().is_none() {
        println!("Source '{}' is empty, nothing to drill.", kind);
        return Ok(());
    }

    println!(
        "Drilling '{}' (min {} CPM, min {}% accuracy). Type each phrase and press Enter; an empty line quits.",
        kind, config.thresholds.min_cpm, config.thresholds.min_accuracy
    );

    // 2. The drill loop. Timing runs from prompt to Enter.
    let stdin = std::io::stdin();
    let mut cleared = 0usize;

    while let Some(phrase) = state.current_phrase().map(str::to_string) {
        let settings = state.active_settings();
        println!(
            "\n[{}/{}] {}",
            settings.current_index + 1,
            settings.phrases.len(),
            phrase
        );
        print!("> ");
        std::io::stdout().flush()?;

        let started = Instant::now();
        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }
        let line = line.trim_end_matches(['\n', '\r']);
        if line.trim().is_empty() {
            break;
        }
        let elapsed = started.elapsed().as_secs_f64();

        let Some(outcome) = state.submit(line, elapsed, permuter.as_mut()) else {
            break;
        };

        if outcome.advanced {
            cleared += 1;
            println!(
                "  ok: {} CPM, {}% accuracy (avg {} CPM, streak {})",
                outcome.cpm,
                outcome.accuracy,
                state.average_cpm(),
                state.totals.current_streak
            );
            if outcome.set_exhausted {
                println!("  Set complete. Generated a fresh phrase set.");
            }
        } else {
            println!(
                "  below threshold: {} CPM, {}% accuracy. Try the phrase again.",
                outcome.cpm, outcome.accuracy
            );
        }

        if args.limit > 0 && cleared >= args.limit {
            break;
        }
    }

    // 3. Wrap up.
    reports::print_session_summary(&state.totals, state.average_cpm());
    if let Some(path) = &args.export_history {
        reports::export_history_csv(path, &state.history)?;
        info!("Exported {} history rows to {:?}", state.history.len(), path);
    }

    Ok(())
}
