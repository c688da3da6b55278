//! `dictionary`: loads the word list and answers "is this an acceptable word?"
//!
//! The source is a JSON object with a global `"words"` array plus one array per word
//! length, keyed by the length as a string:
//!
//! ```json
//! { "words": ["cats", "taxes"], "4": ["cats"], "5": ["taxes"] }
//! ```
//!
//! A word is acceptable only if it is within the configured [`WordBounds`], present in
//! the bucket for its length, *and* present in the global set. Keeping both checks means
//! a source whose buckets disagree with its global set rejects the word rather than
//! guessing which side is right. A missing bucket is not an error: every word of that
//! length is simply rejected.
//!
//! Like the rest of the crate, parsing works on an in-memory string so it is usable from
//! WASM; [`Dictionary::load_from_path`] is a native-only convenience on top of it.

use std::collections::{HashMap, HashSet};

use log::{debug, info, warn};

use crate::errors::DictionaryError;

/// Inclusive word-length limits for the search and the validator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WordBounds {
    min: usize,
    max: usize,
}

impl WordBounds {
    pub const DEFAULT_MIN: usize = 4;
    pub const DEFAULT_MAX: usize = 10;

    /// # Errors
    ///
    /// [`DictionaryError::InvalidBounds`] unless `1 <= min <= max`.
    pub fn new(min: usize, max: usize) -> Result<Self, DictionaryError> {
        if min == 0 || min > max {
            return Err(DictionaryError::InvalidBounds { min, max });
        }
        Ok(Self { min, max })
    }

    #[must_use]
    pub fn min(&self) -> usize {
        self.min
    }

    #[must_use]
    pub fn max(&self) -> usize {
        self.max
    }

    #[must_use]
    pub fn contains(&self, len: usize) -> bool {
        (self.min..=self.max).contains(&len)
    }
}

impl Default for WordBounds {
    fn default() -> Self {
        Self { min: Self::DEFAULT_MIN, max: Self::DEFAULT_MAX }
    }
}

/// Raw shape of the JSON source before normalization.
#[derive(Debug, serde::Deserialize)]
struct DictionarySource {
    words: Vec<String>,
    #[serde(flatten)]
    buckets: HashMap<String, Vec<String>>,
}

fn normalize(word: &str) -> String {
    word.trim().to_lowercase()
}

/// Read-only word validator.
#[derive(Debug, Clone)]
pub struct Dictionary {
    words: HashSet<String>,
    by_length: HashMap<usize, HashSet<String>>,
    bounds: WordBounds,
}

impl Dictionary {
    /// Build a dictionary from an already-normalized global set and per-length buckets.
    ///
    /// Buckets are taken as given: nothing is synthesized for lengths the source
    /// left out, and a warning is logged for each such length inside `bounds`.
    ///
    /// # Errors
    ///
    /// [`DictionaryError::EmptyWordSet`] if `words` is empty.
    pub fn from_parts(
        words: HashSet<String>,
        by_length: HashMap<usize, HashSet<String>>,
        bounds: WordBounds,
    ) -> Result<Self, DictionaryError> {
        if words.is_empty() {
            return Err(DictionaryError::EmptyWordSet);
        }
        for len in bounds.min()..=bounds.max() {
            if !by_length.contains_key(&len) {
                warn!("dictionary has no \"{len}\" bucket; {len}-letter words will be rejected");
            }
        }
        Ok(Self { words, by_length, bounds })
    }

    /// Parse a dictionary from its JSON text.
    ///
    /// Words are trimmed and lowercased. Keys other than `"words"` that are not decimal
    /// lengths are ignored.
    ///
    /// # Errors
    ///
    /// - [`DictionaryError::Json`] if `contents` is not an object of string arrays with a
    ///   `"words"` key.
    /// - [`DictionaryError::EmptyWordSet`] if `"words"` is empty.
    pub fn parse_from_str(contents: &str, bounds: WordBounds) -> Result<Self, DictionaryError> {
        let source: DictionarySource = serde_json::from_str(contents)?;

        let words: HashSet<String> = source.words.iter().map(|w| normalize(w)).collect();

        let mut by_length: HashMap<usize, HashSet<String>> = HashMap::new();
        for (key, entries) in source.buckets {
            let Ok(len) = key.trim().parse::<usize>() else {
                debug!("ignoring non-length dictionary key \"{key}\"");
                continue;
            };
            by_length
                .entry(len)
                .or_default()
                .extend(entries.iter().map(|w| normalize(w)));
        }

        let dictionary = Self::from_parts(words, by_length, bounds)?;
        info!(
            "Loaded {} words in {} length buckets (accepting {}..={} letters)",
            dictionary.len(),
            dictionary.by_length.len(),
            bounds.min(),
            bounds.max()
        );
        Ok(dictionary)
    }

    /// Native-only convenience method: read from a file path and parse.
    ///
    /// # Errors
    ///
    /// [`DictionaryError::Io`] if the file cannot be read, otherwise anything
    /// [`Dictionary::parse_from_str`] returns.
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load_from_path<P: AsRef<std::path::Path>>(
        path: P,
        bounds: WordBounds,
    ) -> Result<Self, DictionaryError> {
        let path_ref = path.as_ref();
        let data = std::fs::read_to_string(path_ref).map_err(|source| DictionaryError::Io {
            path: path_ref.display().to_string(),
            source,
        })?;
        Self::parse_from_str(&data, bounds)
    }

    /// True iff `word` is within bounds, in its length bucket and in the global set.
    #[must_use]
    pub fn is_acceptable(&self, word: &str) -> bool {
        let len = word.chars().count();
        self.bounds.contains(len)
            && self.by_length.get(&len).is_some_and(|bucket| bucket.contains(word))
            && self.words.contains(word)
    }

    /// Every word [`Dictionary::is_acceptable`] would accept, in no particular order.
    pub fn acceptable_words(&self) -> impl Iterator<Item = &str> + '_ {
        self.words
            .iter()
            .map(String::as_str)
            .filter(|word| self.is_acceptable(word))
    }

    #[must_use]
    pub fn bounds(&self) -> WordBounds {
        self.bounds
    }

    /// Size of the global word set.
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}
