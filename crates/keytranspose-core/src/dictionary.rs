// Keytranspose Dictionary
// Membership oracle over a line-oriented word list

use indexmap::IndexSet;
use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

/// Errors that can occur when loading a dictionary
#[derive(Debug, thiserror::Error)]
pub enum DictionaryError {
    #[error("cannot read dictionary {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// A deduplicated set of words with O(1) membership checks.
///
/// Iteration follows the order words first appeared in the source list.
#[derive(Debug, Clone, Default)]
pub struct Dictionary {
    words: IndexSet<String>,
}

impl Dictionary {
    /// Create an empty dictionary
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from raw lines, trimming whitespace and skipping blanks and omitted entries
    pub fn from_lines<I, S, O>(lines: I, omissions: &[O]) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
        O: AsRef<str>,
    {
        let omitted: HashSet<&str> = omissions.iter().map(AsRef::as_ref).collect();
        let mut words = IndexSet::new();
        let mut skipped = 0usize;

        for line in lines {
            let word = line.as_ref().trim();
            if word.is_empty() {
                continue;
            }
            if omitted.contains(word) {
                skipped += 1;
                continue;
            }
            if !words.contains(word) {
                words.insert(word.to_string());
            }
        }

        log::debug!(
            "dictionary built with {} words ({} omitted entries skipped)",
            words.len(),
            skipped
        );

        Self { words }
    }

    /// Load a word list from disk, one word per line
    ///
    /// Bytes that are not valid UTF-8 are replaced rather than rejected; such
    /// words can never transpose anyway.
    pub fn from_path<P: AsRef<Path>, O: AsRef<str>>(
        path: P,
        omissions: &[O],
    ) -> Result<Self, DictionaryError> {
        let path = path.as_ref();
        let bytes = fs::read(path).map_err(|source| DictionaryError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        log::debug!("read {} bytes from {}", bytes.len(), path.display());

        let content = String::from_utf8_lossy(&bytes);
        Ok(Self::from_lines(content.lines(), omissions))
    }

    /// Check if a string is a known word
    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Words in source order
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.words.iter().map(String::as_str)
    }
}

impl<S: Into<String>> FromIterator<S> for Dictionary {
    fn from_iter<T: IntoIterator<Item = S>>(iter: T) -> Self {
        Self {
            words: iter.into_iter().map(Into::into).collect(),
        }
    }
}
