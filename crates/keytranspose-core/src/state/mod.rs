// Keytranspose State Module
// Run-scoped state for deduplicating results

pub mod seen_pairs;

pub use seen_pairs::SeenPairs;
