// ===== gramforge/src/generator.rs =====
use crate::config::DrillParams;
use fastrand::Rng;

/// Injected permutation capability. The generator never touches an ambient
/// RNG directly, so hosts and tests control drill order.
pub trait Permuter {
    fn permute(&mut self, items: &mut [String]);
}

/// Uniform Fisher-Yates shuffle over a fastrand generator.
pub struct RandomPermuter {
    rng: Rng,
}

impl RandomPermuter {
    pub fn new() -> Self {
        Self { rng: Rng::new() }
    }

    /// Seeded variant for reproducible drill sets.
    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: Rng::with_seed(seed),
        }
    }
}

impl Default for RandomPermuter {
    fn default() -> Self {
        Self::new()
    }
}

impl Permuter for RandomPermuter {
    fn permute(&mut self, items: &mut [String]) {
        // Classic Fisher-Yates: j drawn uniformly from [0, i].
        for i in (1..items.len()).rev() {
            let j = self.rng.usize(..=i);
            items.swap(i, j);
        }
    }
}

/// Leaves the source in rank order. Backs `--no-shuffle`, where practicing
/// top-frequency grams first is the point.
pub struct OrderedPermuter;

impl Permuter for OrderedPermuter {
    fn permute(&mut self, _items: &mut [String]) {}
}

/// Turns a ranked n-gram source into practice phrases.
///
/// The source is truncated to its `scope` highest-ranked entries, copied,
/// permuted once, then chunked into `combination`-sized groups. Each chunk
/// joins into a sub-phrase which repeats `repetition` times per phrase.
/// The final chunk may be short and is never padded.
///
/// An empty source yields an empty set. `combination` and `repetition`
/// must be >= 1; `config::validate` enforces that before generation runs.
pub fn generate_phrases(
    source: &[String],
    params: &DrillParams,
    permuter: &mut dyn Permuter,
) -> Vec<String> {
    if source.is_empty() {
        return Vec::new();
    }

    // 1. Scope: keep the top-ranked prefix only.
    let scoped = match params.scope {
        Some(n) if n > 0 => &source[..n.min(source.len())],
        _ => source,
    };

    // 2. Shuffle a working copy. The corpus itself stays untouched.
    let mut pool: Vec<String> = scoped.to_vec();
    permuter.permute(&mut pool);

    // 3. Chunk and repeat.
    let mut phrases = Vec::with_capacity(pool.len().div_ceil(params.combination));
    for chunk in pool.chunks(params.combination) {
        let sub_phrase = chunk.join(" ");
        let phrase = vec![sub_phrase; params.repetition].join(" ");
        phrases.push(phrase);
    }

    phrases
}
