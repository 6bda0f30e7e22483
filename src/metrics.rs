// ===== gramforge/src/metrics.rs =====
use crate::config::SessionThresholds;

/// Characters per minute, rounded to the nearest integer. Zero elapsed
/// time reports zero instead of dividing.
pub fn calculate_cpm(total_characters: usize, time_secs: f64) -> u32 {
    if time_secs <= 0.0 {
        return 0;
    }
    ((total_characters as f64 / time_secs) * 60.0).round() as u32
}

/// Accuracy as a rounded percentage. Empty input is 0, not a NaN.
pub fn calculate_accuracy(correct_chars: usize, total_chars: usize) -> u32 {
    if total_chars == 0 {
        return 0;
    }
    ((correct_chars as f64 / total_chars as f64) * 100.0).round() as u32
}

pub fn calculate_average_cpm(cpms: &[u32]) -> u32 {
    if cpms.is_empty() {
        return 0;
    }
    let sum: u64 = cpms.iter().map(|&c| c as u64).sum();
    (sum as f64 / cpms.len() as f64).round() as u32
}

/// Positional comparison against the expected phrase: how many typed
/// characters landed where they should.
pub fn count_correct_chars(expected: &str, typed: &str) -> usize {
    expected
        .chars()
        .zip(typed.chars())
        .filter(|(e, t)| e == t)
        .count()
}

/// Both gates must hold for a phrase to clear.
pub fn meets_threshold(cpm: u32, accuracy: u32, thresholds: &SessionThresholds) -> bool {
    cpm >= thresholds.min_cpm && accuracy >= thresholds.min_accuracy
}

/// HH:MM:SS, zero-padded.
pub fn format_time(total_secs: u64) -> String {
    let hours = total_secs / 3600;
    let minutes = (total_secs % 3600) / 60;
    let secs = total_secs % 60;
    format!("{:02}:{:02}:{:02}", hours, minutes, secs)
}
