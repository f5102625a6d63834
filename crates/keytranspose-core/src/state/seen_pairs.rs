// Keytranspose Seen-Pairs Registry
// Run-scoped record of every pair already reported

use indexmap::IndexMap;
use smallvec::SmallVec;

/// Registry of emitted pairs, keyed by the original word
///
/// Each original maps to the transposed partners it was reported with.
/// The registry only grows; it lives for one sweep and is then dropped.
#[derive(Debug, Default, Clone)]
pub struct SeenPairs {
    pairs: IndexMap<String, SmallVec<[String; 2]>>,
}

impl SeenPairs {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Record that `original` was reported with `transposed`
    pub fn record(&mut self, original: &str, transposed: &str) {
        let partners = self.pairs.entry(original.to_string()).or_default();
        if !partners.iter().any(|p| p == transposed) {
            partners.push(transposed.to_string());
        }
    }

    /// Check whether `original -> transposed` has been recorded
    pub fn contains(&self, original: &str, transposed: &str) -> bool {
        self.pairs
            .get(original)
            .is_some_and(|partners| partners.iter().any(|p| p == transposed))
    }

    /// Check whether `original / transposed` is the reverse of a pair already
    /// reported as `transposed / original`
    ///
    /// Only one hop is checked; chains like A -> B -> C are not collapsed.
    pub fn is_mirror(&self, original: &str, transposed: &str) -> bool {
        self.contains(transposed, original)
    }

    /// Number of distinct original words recorded
    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }
}
