// Keytranspose Sweep
// Runs every requested sequence over every dictionary word and deduplicates hits

use std::fmt;

use crate::config::DirectionSequence;
use crate::state::SeenPairs;
use crate::transform::{TransposeEngine, Transposition};
use crate::Dictionary;

/// A reported pair of words and the sequence that links them
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranspositionResult {
    pub original: String,
    pub transposed: String,
    pub sequence: DirectionSequence,
}

impl fmt::Display for TranspositionResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} / {}", self.original, self.transposed)
    }
}

/// Counters collected over one sweep
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SweepStats {
    /// (word, sequence) combinations tried
    pub attempts: usize,
    /// Attempts where a character had no key
    pub aborted: usize,
    /// Attempts where at least one letter fell off the board
    pub partial: usize,
    /// Complete shifts that did not land on a dictionary word
    pub not_words: usize,
    /// Hits suppressed as the reverse of an earlier pair
    pub mirrored: usize,
    /// Pairs reported
    pub emitted: usize,
}

/// One run over a dictionary
///
/// Owns the seen-pairs registry, so two sweeps never share dedup state.
#[derive(Debug)]
pub struct Sweep<'a> {
    engine: TransposeEngine<'a>,
    dictionary: &'a Dictionary,
    seen: SeenPairs,
    stats: SweepStats,
}

impl<'a> Sweep<'a> {
    /// Create a sweep with an empty registry
    pub fn new(engine: TransposeEngine<'a>, dictionary: &'a Dictionary) -> Self {
        Self {
            engine,
            dictionary,
            seen: SeenPairs::new(),
            stats: SweepStats::default(),
        }
    }

    /// Try one word against one sequence
    ///
    /// Returns the pair when it should be reported and records it. A pair is
    /// held back only when `transposed / word` was already reported.
    pub fn consider(
        &mut self,
        word: &str,
        sequence: &DirectionSequence,
    ) -> Option<TranspositionResult> {
        self.stats.attempts += 1;

        let transposed = match self.engine.transpose(word, sequence) {
            Transposition::Complete(transposed) => transposed,
            Transposition::Partial { .. } => {
                self.stats.partial += 1;
                return None;
            }
            Transposition::Aborted { .. } => {
                self.stats.aborted += 1;
                return None;
            }
        };

        if !self.dictionary.contains(&transposed) {
            self.stats.not_words += 1;
            return None;
        }

        if self.seen.is_mirror(word, &transposed) {
            log::trace!("skip {} / {} ({}): already reported reversed", word, transposed, sequence);
            self.stats.mirrored += 1;
            return None;
        }

        log::trace!("found {} / {} ({})", word, transposed, sequence);
        self.seen.record(word, &transposed);
        self.stats.emitted += 1;

        Some(TranspositionResult {
            original: word.to_string(),
            transposed,
            sequence: sequence.clone(),
        })
    }

    /// Sweep the whole dictionary
    ///
    /// Words are visited in dictionary order; for each word the sequences are
    /// tried in the order given.
    pub fn run(&mut self, sequences: &[DirectionSequence]) -> Vec<TranspositionResult> {
        let dictionary = self.dictionary;
        let mut results = Vec::new();

        for word in dictionary.iter() {
            for sequence in sequences {
                if let Some(result) = self.consider(word, sequence) {
                    results.push(result);
                }
            }
        }

        log::debug!(
            "sweep of {} words x {} sequences: {:?}, {} words reported as originals",
            dictionary.len(),
            sequences.len(),
            self.stats,
            self.seen.len()
        );
        results
    }

    pub fn seen(&self) -> &SeenPairs {
        &self.seen
    }

    pub fn stats(&self) -> SweepStats {
        self.stats
    }
}

/// Run a fresh sweep on the QWERTY layout
pub fn find_transpositions(
    dictionary: &Dictionary,
    sequences: &[DirectionSequence],
) -> Vec<TranspositionResult> {
    Sweep::new(TransposeEngine::default(), dictionary).run(sequences)
}
