// ===== gramforge/src/session.rs =====
use serde::Serialize;
use std::time::{SystemTime, UNIX_EPOCH};

/// One cleared phrase, as it lands in the history export.
#[derive(Debug, Clone, Serialize)]
pub struct SessionRecord {
    pub timestamp_secs: u64,
    pub source: String,
    /// Position within the phrase set, e.g. "3/25".
    pub lesson: String,
    pub cpm: u32,
    pub accuracy: u32,
    pub characters_typed: usize,
    pub duration_secs: f64,
}

/// Lifetime aggregates across every drill.
#[derive(Debug, Default, Clone, Copy, Serialize)]
pub struct SessionTotals {
    pub total_sessions: u32,
    pub total_characters: u64,
    pub total_time_secs: f64,
    pub best_cpm: u32,
    pub lessons_completed: u32,
    pub current_streak: u32,
    pub longest_streak: u32,
}

impl SessionTotals {
    /// Folds a cleared phrase into the totals. `met_threshold` drives the
    /// streak: practice-mode advances that missed the gates break it.
    pub fn record(&mut self, record: &SessionRecord, met_threshold: bool) {
        self.total_sessions += 1;
        self.total_characters += record.characters_typed as u64;
        self.total_time_secs += record.duration_secs;
        self.best_cpm = self.best_cpm.max(record.cpm);
        self.lessons_completed += 1;

        if met_threshold {
            self.current_streak += 1;
            self.longest_streak = self.longest_streak.max(self.current_streak);
        } else {
            self.current_streak = 0;
        }
    }

    /// A failed phrase only costs the streak.
    pub fn reset_streak(&mut self) {
        self.current_streak = 0;
    }
}

pub fn epoch_secs() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0)
}
