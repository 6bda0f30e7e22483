// ===== gramforge/src/config.rs =====
use crate::corpus::SourceKind;
use crate::error::{GfResult, GramForgeError};
use clap::{parser::ValueSource, ArgMatches, Args};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

#[derive(Args, Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    #[command(flatten)]
    pub drill: DrillParams,
    #[command(flatten)]
    pub thresholds: SessionThresholds,
}

/// The three knobs that shape a drill. Scope picks how deep into the
/// ranking practice reaches, combination how many grams join one
/// sub-phrase, repetition how often the sub-phrase repeats per phrase.
#[derive(Args, Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DrillParams {
    /// Top-N ranked entries to drill (0 = whole source; ranked corpora
    /// default to 50 when omitted)
    #[arg(long)]
    pub scope: Option<usize>,

    /// Grams combined into each sub-phrase
    #[arg(long, default_value_t = 2)]
    pub combination: usize,

    /// Times each sub-phrase repeats within a phrase
    #[arg(long, default_value_t = 3)]
    pub repetition: usize,
}

impl Default for DrillParams {
    fn default() -> Self {
        Self {
            scope: None,
            combination: 2,
            repetition: 3,
        }
    }
}

/// Advancement gates: a phrase is only cleared when both minimums hold.
#[derive(Args, Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionThresholds {
    #[arg(long, default_value_t = 200)]
    pub min_cpm: u32,

    #[arg(long, default_value_t = 100)]
    pub min_accuracy: u32,
}

impl Default for SessionThresholds {
    fn default() -> Self {
        Self {
            min_cpm: 200,
            min_accuracy: 100,
        }
    }
}

impl DrillParams {
    /// Boundary validation. The generator itself assumes these hold.
    pub fn validate(&self) -> GfResult<()> {
        if self.combination < 1 {
            return Err(GramForgeError::Config(
                "combination must be >= 1".to_string(),
            ));
        }
        if self.repetition < 1 {
            return Err(GramForgeError::Config(
                "repetition must be >= 1".to_string(),
            ));
        }
        Ok(())
    }

    /// Resolves the effective scope for a source. Absent scope falls back
    /// to the top-50 preset on ranked corpora; custom word lists have no
    /// natural ranking cutoff and drill in full. An explicit 0 always
    /// means the whole source.
    pub fn scope_for(&self, kind: SourceKind) -> Option<usize> {
        match self.scope {
            None => match kind {
                SourceKind::CustomWords => None,
                _ => Some(50),
            },
            Some(0) => None,
            Some(n) => Some(n),
        }
    }

    /// Same params with the scope pinned to its resolved value.
    pub fn resolved_for(&self, kind: SourceKind) -> DrillParams {
        DrillParams {
            scope: self.scope_for(kind),
            ..self.clone()
        }
    }
}

impl SessionThresholds {
    pub fn validate(&self) -> GfResult<()> {
        if self.min_accuracy > 100 {
            return Err(GramForgeError::Config(
                "min_accuracy is a percentage and cannot exceed 100".to_string(),
            ));
        }
        Ok(())
    }
}

impl Config {
    pub fn validate(&self) -> GfResult<()> {
        self.drill.validate()?;
        self.thresholds.validate()
    }

    pub fn load_from_file<P: AsRef<Path>>(path: P) -> GfResult<Self> {
        let content = fs::read_to_string(path)?;
        let config: Config = serde_json::from_str(&content)?;
        Ok(config)
    }

    /// Overlays explicit CLI flags onto a file-loaded profile. Defaults
    /// that the user never typed do not clobber the profile.
    pub fn merge_from_cli(&mut self, cli: &Config, matches: &ArgMatches) {
        macro_rules! update_if_present {
            ($section:ident, $field:ident, $arg_name:expr) => {
                if matches.value_source($arg_name) == Some(ValueSource::CommandLine) {
                    self.$section.$field = cli.$section.$field.clone();
                }
            };
        }

        update_if_present!(drill, scope, "scope");
        update_if_present!(drill, combination, "combination");
        update_if_present!(drill, repetition, "repetition");

        update_if_present!(thresholds, min_cpm, "min_cpm");
        update_if_present!(thresholds, min_accuracy, "min_accuracy");
    }
}
