// ===== gramforge/src/analyzer.rs =====
use std::collections::HashMap;

/// Frequency counts for a single n-gram granularity.
///
/// Remembers the order in which grams were first seen, so ranking ties
/// resolve to discovery order under a stable sort.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct FrequencyTable {
    counts: HashMap<String, usize>,
    order: Vec<String>,
}

impl FrequencyTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, gram: &str) {
        match self.counts.get_mut(gram) {
            Some(c) => *c += 1,
            None => {
                self.counts.insert(gram.to_string(), 1);
                self.order.push(gram.to_string());
            }
        }
    }

    pub fn count(&self, gram: &str) -> usize {
        self.counts.get(gram).copied().unwrap_or(0)
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Iterates entries in discovery order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, usize)> {
        self.order.iter().map(|k| (k.as_str(), self.counts[k]))
    }

    pub fn total(&self) -> usize {
        self.counts.values().sum()
    }
}

/// Full analysis of one text: all four granularities.
#[derive(Debug, Default, Clone)]
pub struct TextAnalysis {
    pub words: FrequencyTable,
    pub bigrams: FrequencyTable,
    pub trigrams: FrequencyTable,
    pub tetragrams: FrequencyTable,
}

impl TextAnalysis {
    pub fn tables(&self) -> [(&'static str, &FrequencyTable); 4] {
        [
            ("words", &self.words),
            ("bigrams", &self.bigrams),
            ("trigrams", &self.trigrams),
            ("tetragrams", &self.tetragrams),
        ]
    }
}

/// Extracts n-grams of a specified size from raw text.
///
/// # Arguments
/// * `text` - The raw source text. May be empty or arbitrary paste.
/// * `n` - Gram width: 1 counts whole words, 2+ counts character windows.
///
/// Degrades to an empty table on empty text, `n == 0`, or text shorter
/// than the window. Never fails.
pub fn extract_ngrams(text: &str, n: usize) -> FrequencyTable {
    let mut table = FrequencyTable::new();
    if n == 0 {
        return table;
    }

    // 1. Normalize & Filter
    // Lowercase, then turn everything that is not a letter, digit or
    // underscore into a word separator.
    let cleaned: String = text
        .to_lowercase()
        .chars()
        .map(|c| if c.is_alphanumeric() || c == '_' { c } else { ' ' })
        .collect();

    if n == 1 {
        // 2a. Word granularity: whitespace-delimited tokens.
        for word in cleaned.split_whitespace() {
            table.record(word);
        }
    } else {
        // 2b. Character granularity: windows span word boundaries, so
        // whitespace is stripped before sliding.
        let chars: Vec<char> = cleaned.chars().filter(|c| !c.is_whitespace()).collect();
        for window in chars.windows(n) {
            let gram: String = window.iter().collect();
            table.record(&gram);
        }
    }

    table
}

/// Ranks a frequency table: entries at or above `min_frequency`, sorted
/// descending by count. The sort is stable, so equal counts keep their
/// discovery order.
pub fn sort_ngrams_by_frequency(
    table: &FrequencyTable,
    min_frequency: usize,
) -> Vec<(String, usize)> {
    let mut ranked: Vec<(String, usize)> = table
        .iter()
        .filter(|&(_, freq)| freq >= min_frequency)
        .map(|(gram, freq)| (gram.to_string(), freq))
        .collect();
    ranked.sort_by(|a, b| b.1.cmp(&a.1));
    ranked
}

/// Top `top_n` gram strings by rank. This is the bridge from analysis to
/// phrase generation: pasted text becomes a drill source.
pub fn top_ngrams(table: &FrequencyTable, top_n: usize) -> Vec<String> {
    sort_ngrams_by_frequency(table, 1)
        .into_iter()
        .take(top_n)
        .map(|(gram, _)| gram)
        .collect()
}

/// Runs the analyzer at every granularity the trainer drills on.
pub fn analyze_text(text: &str) -> TextAnalysis {
    TextAnalysis {
        words: extract_ngrams(text, 1),
        bigrams: extract_ngrams(text, 2),
        trigrams: extract_ngrams(text, 3),
        tetragrams: extract_ngrams(text, 4),
    }
}
