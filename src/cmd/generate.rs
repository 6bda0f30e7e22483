use crate::reports;
use clap::Args;
use gramforge::analyzer::{extract_ngrams, top_ngrams};
use gramforge::config::Config;
use gramforge::corpus::{get_source, load_word_list, CorpusSet, SourceKind};
use gramforge::error::GfResult;
use gramforge::generator::generate_phrases;
use std::fs;
use std::path::PathBuf;
use tracing::info;

#[derive(Args, Debug, Clone)]
pub struct GenerateArgs {
    #[command(flatten)]
    pub config: Config,

    /// Drill source: bigrams, trigrams, tetragrams, words or custom_words
    #[arg(short, long, default_value = "bigrams")]
    pub source: String,

    /// Word-list file backing the custom_words source
    #[arg(long)]
    pub custom_words: Option<PathBuf>,

    /// Analyze this text file and drill its own top n-grams instead of a
    /// built-in corpus
    #[arg(long)]
    pub from_text: Option<PathBuf>,

    /// Seed for a reproducible phrase order
    #[arg(long)]
    pub seed: Option<u64>,

    /// Keep rank order instead of shuffling
    #[arg(long, default_value_t = false)]
    pub no_shuffle: bool,
}

pub fn run(args: GenerateArgs, config: Config, corpus: CorpusSet) -> GfResult<()> {
    config.validate()?;
    let kind = super::parse_source(&args.source)?;

    // 1. Resolve the source list. --from-text routes the analyzer's
    // ranking straight into the generator.
    let owned: Vec<String>;
    let source: &[String] = if let Some(path) = &args.from_text {
        let text = fs::read_to_string(path)?;
        let table = extract_ngrams(&text, gram_width(kind));
        owned = top_ngrams(&table, table.len());
        info!("Ranked {} grams from {:?}", owned.len(), path);
        &owned
    } else if let Some(path) = &args.custom_words {
        owned = load_word_list(path)?;
        info!("Loaded {} custom words from {:?}", owned.len(), path);
        &owned
    } else {
        get_source(kind, &corpus, None)
    };

    // 2. Generate.
    let params = config.drill.resolved_for(kind);
    let mut permuter = super::build_permuter(args.no_shuffle, args.seed);
    let phrases = generate_phrases(source, &params, permuter.as_mut());

    info!(
        "Generated {} phrases from {} entries (source '{}').",
        phrases.len(),
        source.len(),
        kind
    );
    reports::print_phrases(&phrases);

    Ok(())
}

/// Which analyzer granularity feeds each source kind. Custom drills are
/// word-shaped, like the words corpus.
fn gram_width(kind: SourceKind) -> usize {
    match kind {
        SourceKind::Words | SourceKind::CustomWords => 1,
        SourceKind::Bigrams => 2,
        SourceKind::Trigrams => 3,
        SourceKind::Tetragrams => 4,
    }
}
