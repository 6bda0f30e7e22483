// ===== gramforge/src/corpus.rs =====
use crate::error::GfResult;
use std::fs::File;
use std::io::{Cursor, Read};
use std::path::Path;
use strum_macros::{Display, EnumIter, EnumString};
use tracing::{debug, warn};

/// The five drillable sources. The first four are frequency-ranked corpora
/// shipped with the binary; `custom_words` is whatever the user pasted.
#[derive(Debug, Clone, Copy, EnumIter, EnumString, Display, PartialEq, Eq, Hash)]
#[strum(serialize_all = "snake_case")]
pub enum SourceKind {
    Bigrams,
    Trigrams,
    Tetragrams,
    Words,
    CustomWords,
}

/// The built-in ranked corpora. Each list is ordered by descending corpus
/// frequency: index 0 is rank 1.
#[derive(Debug, Default, Clone)]
pub struct CorpusSet {
    pub bigrams: Vec<String>,
    pub trigrams: Vec<String>,
    pub tetragrams: Vec<String>,
    pub words: Vec<String>,
}

impl CorpusSet {
    /// Loads `{bigrams,trigrams,tetragrams,words}.tsv` from a corpus
    /// directory. Missing files leave that source empty.
    pub fn load_from_dir<P: AsRef<Path>>(dir: P) -> GfResult<Self> {
        let dir = dir.as_ref();
        let mut set = CorpusSet::default();

        for (name, slot) in [
            ("bigrams", &mut set.bigrams),
            ("trigrams", &mut set.trigrams),
            ("tetragrams", &mut set.tetragrams),
            ("words", &mut set.words),
        ] {
            let path = dir.join(format!("{}.tsv", name));
            if path.exists() {
                *slot = load_ranked_list(File::open(&path)?)?;
                debug!("Loaded {} {} from {:?}", slot.len(), name, path);
            } else {
                warn!("Corpus file {:?} not found, source '{}' is empty.", path, name);
            }
        }

        Ok(set)
    }

    /// The corpora compiled into the binary. Keeps the trainer usable when
    /// no data directory is around.
    pub fn embedded() -> Self {
        let parse = |data: &'static str| {
            load_ranked_list(Cursor::new(data.as_bytes())).expect("embedded corpus is well-formed")
        };
        CorpusSet {
            bigrams: parse(include_str!("../data/corpus/bigrams.tsv")),
            trigrams: parse(include_str!("../data/corpus/trigrams.tsv")),
            tetragrams: parse(include_str!("../data/corpus/tetragrams.tsv")),
            words: parse(include_str!("../data/corpus/words.tsv")),
        }
    }
}

/// Reads a `gram<TAB>count` ranked list. Malformed rows are skipped, and
/// the result is re-sorted by count descending (stable) so a hand-edited
/// file still comes out rank-ordered.
pub fn load_ranked_list<R: Read>(reader: R) -> GfResult<Vec<String>> {
    let mut rdr = csv::ReaderBuilder::new()
        .delimiter(b'\t')
        .has_headers(false)
        .quoting(false)
        .flexible(true)
        .from_reader(reader);

    let mut entries: Vec<(String, u64)> = Vec::new();
    let mut skipped = 0usize;

    for result in rdr.records() {
        let rec = match result {
            Ok(r) => r,
            Err(_) => {
                skipped += 1;
                continue;
            }
        };
        if rec.len() < 2 {
            skipped += 1;
            continue;
        }
        let gram = rec[0].trim();
        if gram.is_empty() {
            skipped += 1;
            continue;
        }
        match rec[1].trim().parse::<u64>() {
            Ok(count) => entries.push((gram.to_string(), count)),
            Err(_) => skipped += 1,
        }
    }

    if skipped > 0 {
        debug!("Skipped {} malformed corpus rows.", skipped);
    }

    entries.sort_by(|a, b| b.1.cmp(&a.1));
    Ok(entries.into_iter().map(|(gram, _)| gram).collect())
}

/// Reads a custom word list: free-form text, one source entry per
/// whitespace-delimited token.
pub fn load_word_list<P: AsRef<Path>>(path: P) -> GfResult<Vec<String>> {
    let mut text = String::new();
    File::open(path)?.read_to_string(&mut text)?;
    Ok(text.split_whitespace().map(str::to_string).collect())
}

/// Resolves which list feeds the generator. Custom drills use the supplied
/// words (empty when none were given); everything else is a corpus lookup.
pub fn get_source<'a>(
    kind: SourceKind,
    sources: &'a CorpusSet,
    custom_words: Option<&'a [String]>,
) -> &'a [String] {
    match kind {
        SourceKind::CustomWords => custom_words.unwrap_or(&[]),
        SourceKind::Bigrams => &sources.bigrams,
        SourceKind::Trigrams => &sources.trigrams,
        SourceKind::Tetragrams => &sources.tetragrams,
        SourceKind::Words => &sources.words,
    }
}
