// Keytranspose Transform Engine
// Shifts every letter of a word along a direction sequence on the key grid
//
// Two failure policies apply, and they are deliberately different:
// - a letter that walks off the edge of the board is dropped on its own,
//   the rest of the word still shifts;
// - a character with no key at all (capital, apostrophe, digit) aborts
//   the whole word.

use crate::config::DirectionSequence;
use crate::{Key, KeyboardLayout};

/// Outcome of shifting one word along one sequence
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Transposition {
    /// Every letter shifted; output has the same length as the input
    Complete(String),
    /// Some letters fell off the board and were dropped
    Partial {
        /// The letters that did shift, in order
        output: String,
        /// How many letters were dropped
        dropped: usize,
    },
    /// A character has no key; the word yields no candidate
    Aborted {
        /// Character index of the first unmapped character
        position: usize,
        character: char,
    },
}

impl Transposition {
    /// The shifted word, only when no letter was lost
    pub fn complete(&self) -> Option<&str> {
        match self {
            Transposition::Complete(word) => Some(word),
            _ => None,
        }
    }

    pub fn into_complete(self) -> Option<String> {
        match self {
            Transposition::Complete(word) => Some(word),
            _ => None,
        }
    }
}

/// Applies direction sequences against a keyboard layout
#[derive(Debug, Clone, Copy)]
pub struct TransposeEngine<'a> {
    layout: &'a KeyboardLayout,
}

impl Default for TransposeEngine<'static> {
    fn default() -> Self {
        Self::new(KeyboardLayout::qwerty())
    }
}

impl<'a> TransposeEngine<'a> {
    /// Create an engine over a layout
    pub fn new(layout: &'a KeyboardLayout) -> Self {
        Self { layout }
    }

    /// Walk one key through every step of the sequence
    ///
    /// Returns `None` as soon as a step has no neighbor.
    pub fn transpose_key(&self, key: Key, sequence: &DirectionSequence) -> Option<Key> {
        sequence
            .steps()
            .iter()
            .try_fold(key, |current, &direction| self.layout.neighbor(current, direction))
    }

    /// Shift every letter of `word` along `sequence`
    pub fn transpose(&self, word: &str, sequence: &DirectionSequence) -> Transposition {
        let mut output = String::with_capacity(word.len());
        let mut dropped = 0;

        for (position, character) in word.chars().enumerate() {
            let key = match Key::from_char(character) {
                Some(key) if self.layout.contains(key) => key,
                _ => return Transposition::Aborted { position, character },
            };

            match self.transpose_key(key, sequence) {
                Some(shifted) => output.push(shifted.as_char()),
                None => dropped += 1,
            }
        }

        if dropped == 0 {
            Transposition::Complete(output)
        } else {
            Transposition::Partial { output, dropped }
        }
    }
}
