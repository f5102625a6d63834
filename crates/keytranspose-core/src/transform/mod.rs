// Keytranspose Transform Module
// Word transposition along direction sequences

pub mod engine;

pub use engine::{TransposeEngine, Transposition};
