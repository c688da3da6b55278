//! Words already claimed during one search run.

use std::collections::HashSet;

/// Deduplicates discoveries: the first path to spell a word claims it, every later one is
/// dropped.
///
/// One registry is created per run and handed to the search by `&mut`, so independent
/// searches never see each other's words.
#[derive(Debug, Default, Clone)]
pub struct DiscoveryRegistry {
    seen: HashSet<String>,
}

impl DiscoveryRegistry {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record `word`, returning `true` only the first time it is seen.
    pub fn try_claim(&mut self, word: &str) -> bool {
        if self.seen.contains(word) {
            return false;
        }
        self.seen.insert(word.to_string())
    }

    #[must_use]
    pub fn contains(&self, word: &str) -> bool {
        self.seen.contains(word)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.seen.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.seen.is_empty()
    }
}
