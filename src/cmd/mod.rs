pub mod analyze;
pub mod drill;
pub mod generate;

use gramforge::corpus::SourceKind;
use gramforge::error::{GfResult, GramForgeError};
use gramforge::generator::{OrderedPermuter, Permuter, RandomPermuter};
use std::str::FromStr;

/// Maps the CLI source name onto a kind, or a Validation error naming the
/// accepted spellings.
pub fn parse_source(name: &str) -> GfResult<SourceKind> {
    SourceKind::from_str(name).map_err(|_| {
        GramForgeError::Validation(format!(
            "Unknown source '{}'. Expected one of: bigrams, trigrams, tetragrams, words, custom_words.",
            name
        ))
    })
}

/// Builds the permuter a drill asked for: rank order, seeded shuffle, or
/// fresh entropy.
pub fn build_permuter(no_shuffle: bool, seed: Option<u64>) -> Box<dyn Permuter> {
    if no_shuffle {
        Box::new(OrderedPermuter)
    } else {
        match seed {
            Some(s) => Box::new(RandomPermuter::with_seed(s)),
            None => Box::new(RandomPermuter::new()),
        }
    }
}
