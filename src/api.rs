// ===== gramforge/src/api.rs =====
use crate::config::{Config, DrillParams, SessionThresholds};
use crate::corpus::{get_source, CorpusSet, SourceKind};
use crate::generator::{generate_phrases, Permuter};
use crate::metrics;
use crate::session::{epoch_secs, SessionRecord, SessionTotals};
use std::collections::HashMap;
use strum::IntoEnumIterator;
use tracing::debug;

/// Per-source drill state: parameters, the live phrase set, and the CPM
/// history behind the running average.
#[derive(Debug, Clone)]
pub struct SourceSettings {
    pub params: DrillParams,
    pub thresholds: SessionThresholds,
    pub cpms: Vec<u32>,
    pub phrases: Vec<String>,
    pub current_index: usize,
}

impl SourceSettings {
    fn for_kind(kind: SourceKind) -> Self {
        Self {
            params: DrillParams::default().resolved_for(kind),
            thresholds: SessionThresholds::default(),
            cpms: Vec::new(),
            phrases: Vec::new(),
            current_index: 0,
        }
    }
}

/// What one submitted line did to the session.
#[derive(Debug, Clone)]
pub struct SubmitOutcome {
    pub cpm: u32,
    pub accuracy: u32,
    pub met_threshold: bool,
    pub advanced: bool,
    pub set_exhausted: bool,
}

/// The practice service a host drives: corpus plus per-source settings
/// plus running totals. State lives here and only here; the analyzer and
/// generator underneath stay pure.
pub struct PracticeState {
    corpus: CorpusSet,
    custom_words: Option<Vec<String>>,
    settings: HashMap<SourceKind, SourceSettings>,
    active: SourceKind,
    /// Advance on completion even when thresholds miss.
    pub practice_mode: bool,
    pub totals: SessionTotals,
    pub history: Vec<SessionRecord>,
}

impl PracticeState {
    pub fn new(corpus: CorpusSet) -> Self {
        let settings = SourceKind::iter()
            .map(|kind| (kind, SourceSettings::for_kind(kind)))
            .collect();
        Self {
            corpus,
            custom_words: None,
            settings,
            active: SourceKind::Bigrams,
            practice_mode: false,
            totals: SessionTotals::default(),
            history: Vec::new(),
        }
    }

    /// Applies a validated config to one source and makes it active.
    pub fn configure_source(&mut self, kind: SourceKind, config: &Config) {
        let entry = self
            .settings
            .entry(kind)
            .or_insert_with(|| SourceSettings::for_kind(kind));
        entry.params = config.drill.resolved_for(kind);
        entry.thresholds = config.thresholds;
        entry.phrases.clear();
        entry.current_index = 0;
        self.active = kind;
    }

    pub fn set_custom_words(&mut self, words: Vec<String>) {
        self.custom_words = Some(words);
        // A new list invalidates any custom phrase set in flight.
        if let Some(entry) = self.settings.get_mut(&SourceKind::CustomWords) {
            entry.phrases.clear();
            entry.current_index = 0;
        }
    }

    pub fn select_source(&mut self, kind: SourceKind) {
        self.active = kind;
    }

    pub fn active_source(&self) -> SourceKind {
        self.active
    }

    pub fn active_settings(&self) -> &SourceSettings {
        &self.settings[&self.active]
    }

    /// Builds a fresh phrase set for the active source. The old set is
    /// replaced wholesale, never patched.
    pub fn refresh_phrases(&mut self, permuter: &mut dyn Permuter) {
        let source = get_source(self.active, &self.corpus, self.custom_words.as_deref());
        let entry = self
            .settings
            .get_mut(&self.active)
            .expect("every source kind has settings");
        entry.phrases = generate_phrases(source, &entry.params, permuter);
        entry.current_index = 0;
        debug!(
            "Regenerated {} phrases for source '{}'.",
            entry.phrases.len(),
            self.active
        );
    }

    pub fn current_phrase(&self) -> Option<&str> {
        let entry = self.active_settings();
        entry.phrases.get(entry.current_index).map(String::as_str)
    }

    /// Average CPM over the current round on the active source.
    pub fn average_cpm(&self) -> u32 {
        metrics::calculate_average_cpm(&self.active_settings().cpms)
    }

    /// Scores one completed line against the current phrase and moves the
    /// session forward. Clearing the last phrase of the set regenerates a
    /// new one on the spot.
    pub fn submit(
        &mut self,
        typed: &str,
        duration_secs: f64,
        permuter: &mut dyn Permuter,
    ) -> Option<SubmitOutcome> {
        let expected = self.current_phrase()?.to_string();
        let typed = typed.trim();

        let correct = metrics::count_correct_chars(&expected, typed);
        let total = typed.chars().count();
        let cpm = metrics::calculate_cpm(total, duration_secs);
        // Short input scores against the full expected length, so an
        // accurate prefix cannot clear the gate.
        let accuracy = metrics::calculate_accuracy(correct, total.max(expected.chars().count()));

        let (met, advance, lesson, phrase_count) = {
            let entry = self.active_settings();
            let met = metrics::meets_threshold(cpm, accuracy, &entry.thresholds);
            (
                met,
                met || self.practice_mode,
                format!("{}/{}", entry.current_index + 1, entry.phrases.len()),
                entry.phrases.len(),
            )
        };

        let mut exhausted = false;

        if advance {
            let record = SessionRecord {
                timestamp_secs: epoch_secs(),
                source: self.active.to_string(),
                lesson,
                cpm,
                accuracy,
                characters_typed: total,
                duration_secs,
            };
            self.totals.record(&record, met);
            self.history.push(record);

            let entry = self
                .settings
                .get_mut(&self.active)
                .expect("every source kind has settings");
            if entry.current_index == 0 {
                // New round, the average starts over.
                entry.cpms.clear();
            }
            entry.cpms.push(cpm);
            entry.current_index += 1;

            if entry.current_index >= phrase_count {
                exhausted = true;
                self.refresh_phrases(permuter);
            }
        } else {
            self.totals.reset_streak();
        }

        Some(SubmitOutcome {
            cpm,
            accuracy,
            met_threshold: met,
            advanced: advance,
            set_exhausted: exhausted,
        })
    }
}
