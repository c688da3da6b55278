//! The word search: depth-first enumeration of simple paths over the grid.
//!
//! Every cell is a starting point, taken in row-major order. From each start the search
//! walks to neighbors in the fixed order of [`Grid::neighbors`], never revisiting a cell,
//! and stops extending once the path reaches the maximum word size. Whenever the letters
//! along the path form an acceptable word that the [`DiscoveryRegistry`] has not seen, the
//! path is handed to a [`DiscoveryHandler`] and the walk carries on, since longer words can
//! share the same prefix.
//!
//! Because starts and neighbors are visited in a fixed order, the first path found for a
//! word (its canonical path) is always the same for a given grid and dictionary.
//!
//! # Pruning
//!
//! By default the search follows a [`PrefixTree`] of the acceptable words alongside the
//! path and skips any extension that leaves the tree. No acceptable word can be spelled
//! past that point, so the output (words, order and canonical paths) is identical to an
//! [`WordSearch::exhaustive`] run; only the amount of work changes.
//!
//! # Error Handling
//!
//! - S001: `Actuator` (the discovery handler failed; the run is aborted)
//! - S002: `Grid` (the grid cannot hold a word of the minimum size, wraps [`GridError`])
//!
//! # Examples
//!
//! ```
//! use squaredle::dictionary::{Dictionary, WordBounds};
//! use squaredle::grid::{Cell, Grid};
//! use squaredle::search;
//!
//! let grid: Grid = "CAT SXX".parse()?;
//! let dictionary = Dictionary::parse_from_str(
//!     r#"{"words": ["cat", "tax"], "3": ["cat", "tax"]}"#,
//!     WordBounds::new(3, 3)?,
//! )?;
//!
//! let found = search::find_words(&grid, &dictionary)?;
//! assert_eq!(found[0].word, "cat");
//! assert_eq!(found[1].path, vec![Cell::new(0, 2), Cell::new(0, 1), Cell::new(1, 1)]);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

use std::time::Duration;

use instant::Instant;
use log::{debug, info};

use crate::actuator::ActuatorError;
use crate::dictionary::Dictionary;
use crate::errors::GridError;
use crate::grid::{Cell, CellId, Grid};
use crate::prefix_tree::{NodeId, PrefixTree};
use crate::registry::DiscoveryRegistry;

/// Errors that abort a search run.
#[derive(Debug, thiserror::Error)]
pub enum SearchError {
    /// The handler (normally the on-screen gesture) failed for `word`.
    #[error("could not trace \"{word}\": {source}")]
    Actuator {
        word: String,
        #[source]
        source: ActuatorError,
    },

    /// The grid was rejected before the search started.
    #[error("grid rejected: {0}")]
    Grid(#[from] GridError),
}

impl SearchError {
    /// Returns the error code for this error variant
    #[must_use]
    pub fn code(&self) -> &'static str {
        match self {
            SearchError::Actuator { .. } => "S001",
            SearchError::Grid(_) => "S002",
        }
    }

    /// Returns a short description of this error type (for documentation)
    #[must_use]
    pub fn description(&self) -> &'static str {
        match self {
            SearchError::Actuator { .. } => "Gesture for a found word failed",
            SearchError::Grid(_) => "Grid rejected before searching",
        }
    }

    /// Returns detailed explanation of this error type (for documentation)
    #[must_use]
    pub fn details(&self) -> &'static str {
        match self {
            SearchError::Actuator { .. } => "Tracing a found word on screen failed. The search stops at the first failure; words found before it were already traced.",
            SearchError::Grid(_) => "The grid could not be searched with the configured word sizes. This wraps an underlying GridError (see Grid Errors for specific codes).",
        }
    }

    /// Returns a helpful suggestion for this error
    #[must_use]
    pub fn help(&self) -> Option<&'static str> {
        match self {
            SearchError::Actuator { .. } => Some("Check that xdotool is installed and an X display is available, or use --dry-run"),
            SearchError::Grid(_) => None, // GridError has its own help
        }
    }

    /// Formats the error with code and optional help text
    #[must_use]
    pub fn display_detailed(&self) -> String {
        match self {
            SearchError::Grid(ge) => format!("{}\n  caused by: {}", self.code(), ge.display_detailed()),
            SearchError::Actuator { .. } => {
                crate::errors::format_error_with_code_and_help(&self.to_string(), self.code(), self.help())
            }
        }
    }
}

/// A word and the canonical path that spells it.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct Discovery {
    pub word: String,
    pub path: Vec<Cell>,
}

/// Receives each newly discovered word, in discovery order.
pub trait DiscoveryHandler {
    /// Called once per word with its canonical path. An error aborts the search.
    fn on_discovery(&mut self, word: &str, path: &[Cell]) -> Result<(), ActuatorError>;
}

impl DiscoveryHandler for Vec<Discovery> {
    fn on_discovery(&mut self, word: &str, path: &[Cell]) -> Result<(), ActuatorError> {
        self.push(Discovery { word: word.to_string(), path: path.to_vec() });
        Ok(())
    }
}

/// Counters for one run.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct SearchReport {
    /// Words handed to the handler.
    pub discoveries: usize,
    /// Paths examined, including single-cell starts.
    pub paths_visited: u64,
    /// Extensions skipped because no acceptable word starts with their letters.
    pub pruned: u64,
    pub elapsed: Duration,
}

/// A simple path under construction. Each branch owns its own copy.
#[derive(Debug, Clone)]
struct Path {
    ids: Vec<CellId>,
    word: String,
}

impl Path {
    fn start(id: CellId, letter: char) -> Self {
        Self { ids: vec![id], word: letter.to_string() }
    }

    fn extended(&self, id: CellId, letter: char) -> Self {
        let mut next = self.clone();
        next.ids.push(id);
        next.word.push(letter);
        next
    }

    fn len(&self) -> usize {
        self.ids.len()
    }

    fn contains(&self, id: CellId) -> bool {
        self.ids.contains(&id)
    }

    fn last(&self) -> CellId {
        // a path always has its starting cell
        self.ids[self.ids.len() - 1]
    }
}

/// Where a path stands in the prefix tree, if pruning is on.
#[derive(Debug, Clone, Copy)]
enum Cursor {
    Exhaustive,
    Node(NodeId),
}

/// Mutable state threaded through one run.
struct Walk<'r, H> {
    registry: &'r mut DiscoveryRegistry,
    handler: &'r mut H,
    report: SearchReport,
}

/// A configured search over one grid and dictionary.
#[derive(Debug)]
pub struct WordSearch<'a> {
    grid: &'a Grid,
    dictionary: &'a Dictionary,
    prefixes: Option<PrefixTree>,
}

impl<'a> WordSearch<'a> {
    /// Prepare a search with prefix pruning enabled.
    ///
    /// # Errors
    ///
    /// [`GridError::TooSmall`] if the grid has fewer cells than the dictionary's minimum
    /// word size.
    pub fn new(grid: &'a Grid, dictionary: &'a Dictionary) -> Result<Self, GridError> {
        grid.check_word_size(dictionary.bounds().min())?;
        let prefixes = PrefixTree::new(dictionary.acceptable_words());
        debug!("prefix tree has {} nodes", prefixes.node_count());
        Ok(Self { grid, dictionary, prefixes: Some(prefixes) })
    }

    /// Turn pruning off and visit every simple path up to the maximum word size.
    #[must_use]
    pub fn exhaustive(mut self) -> Self {
        self.prefixes = None;
        self
    }

    #[must_use]
    pub fn is_pruning(&self) -> bool {
        self.prefixes.is_some()
    }

    /// Search the whole grid, reporting each new word to `handler`.
    ///
    /// Words already in `registry` are never reported again, so running twice with the
    /// same registry reports nothing the second time.
    ///
    /// # Errors
    ///
    /// [`SearchError::Actuator`] as soon as `handler` fails; the run stops there.
    pub fn run<H: DiscoveryHandler>(
        &self,
        registry: &mut DiscoveryRegistry,
        handler: &mut H,
    ) -> Result<SearchReport, SearchError> {
        let started = Instant::now();
        let mut walk = Walk { registry, handler, report: SearchReport::default() };
        let root = if self.prefixes.is_some() { Cursor::Node(PrefixTree::ROOT) } else { Cursor::Exhaustive };

        for cell in self.grid.cells() {
            let letter = self.grid.letter_at(cell);
            let Some(cursor) = self.advance(root, letter) else {
                walk.report.pruned += 1;
                continue;
            };
            self.explore(&Path::start(self.grid.id_of(cell), letter), cursor, &mut walk)?;
        }

        let mut report = walk.report;
        report.elapsed = started.elapsed();
        info!(
            "Search finished: {} new words, {} paths visited, {} pruned, {:.3}s",
            report.discoveries,
            report.paths_visited,
            report.pruned,
            report.elapsed.as_secs_f64()
        );
        Ok(report)
    }

    /// Step the cursor by `letter`; `None` means no acceptable word continues this way.
    fn advance(&self, cursor: Cursor, letter: char) -> Option<Cursor> {
        match (cursor, &self.prefixes) {
            (Cursor::Node(node), Some(tree)) => tree.child(node, letter).map(Cursor::Node),
            _ => Some(Cursor::Exhaustive),
        }
    }

    fn explore<H: DiscoveryHandler>(
        &self,
        path: &Path,
        cursor: Cursor,
        walk: &mut Walk<'_, H>,
    ) -> Result<(), SearchError> {
        walk.report.paths_visited += 1;
        let bounds = self.dictionary.bounds();
        if path.len() > bounds.max() {
            return Ok(());
        }

        if path.len() >= bounds.min()
            && self.dictionary.is_acceptable(&path.word)
            && walk.registry.try_claim(&path.word)
        {
            let cells: Vec<Cell> = path.ids.iter().map(|&id| self.grid.cell_of(id)).collect();
            debug!("\"{}\" along {}", path.word, format_path(&cells));
            walk.report.discoveries += 1;
            walk.handler
                .on_discovery(&path.word, &cells)
                .map_err(|source| SearchError::Actuator { word: path.word.clone(), source })?;
        }

        if path.len() >= bounds.max() {
            return Ok(());
        }

        let last = self.grid.cell_of(path.last());
        for neighbor in self.grid.neighbors(last) {
            let id = self.grid.id_of(neighbor);
            if path.contains(id) {
                continue;
            }
            let letter = self.grid.letter_at(neighbor);
            let Some(next) = self.advance(cursor, letter) else {
                walk.report.pruned += 1;
                continue;
            };
            self.explore(&path.extended(id, letter), next, walk)?;
        }
        Ok(())
    }
}

/// Collect every discoverable word with its canonical path, in discovery order.
///
/// # Errors
///
/// [`SearchError::Grid`] if the grid is too small for the dictionary's minimum word size.
pub fn find_words(grid: &Grid, dictionary: &Dictionary) -> Result<Vec<Discovery>, SearchError> {
    let mut found = Vec::new();
    WordSearch::new(grid, dictionary)?.run(&mut DiscoveryRegistry::new(), &mut found)?;
    Ok(found)
}

/// Render a path as `(r, c) -> (r, c) -> ...`.
#[must_use]
pub fn format_path(path: &[Cell]) -> String {
    path.iter().map(Cell::to_string).collect::<Vec<_>>().join(" -> ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dictionary::WordBounds;

    fn dictionary(json: &str, min: usize, max: usize) -> Dictionary {
        Dictionary::parse_from_str(json, WordBounds::new(min, max).unwrap()).unwrap()
    }

    fn cat_tax() -> (Grid, Dictionary) {
        let grid: Grid = "CAT SXX".parse().unwrap();
        let dict = dictionary(r#"{"words": ["cat", "tax"], "3": ["cat", "tax"]}"#, 3, 3);
        (grid, dict)
    }

    #[test]
    fn test_cat_tax_scenario() {
        let (grid, dict) = cat_tax();
        let found = find_words(&grid, &dict).unwrap();

        assert_eq!(
            found,
            vec![
                Discovery {
                    word: "cat".to_string(),
                    path: vec![Cell::new(0, 0), Cell::new(0, 1), Cell::new(0, 2)],
                },
                Discovery {
                    word: "tax".to_string(),
                    path: vec![Cell::new(0, 2), Cell::new(0, 1), Cell::new(1, 1)],
                },
            ]
        );
    }

    #[test]
    fn test_exhaustive_matches_pruned() {
        let (grid, dict) = cat_tax();
        let mut pruned = Vec::new();
        let mut exhaustive = Vec::new();

        let pruned_report = WordSearch::new(&grid, &dict).unwrap()
            .run(&mut DiscoveryRegistry::new(), &mut pruned).unwrap();
        let exhaustive_report = WordSearch::new(&grid, &dict).unwrap().exhaustive()
            .run(&mut DiscoveryRegistry::new(), &mut exhaustive).unwrap();

        assert_eq!(pruned, exhaustive);
        assert_eq!(exhaustive_report.pruned, 0);
        assert!(pruned_report.pruned > 0);
        assert!(pruned_report.paths_visited < exhaustive_report.paths_visited);
    }

    #[test]
    fn test_exhaustive_visits_every_simple_path() {
        // 2x2 board: every pair of cells is adjacent, so simple paths of length k
        // number 4 * 3 * ... (4 - k + 1)
        let grid: Grid = "ab cd".parse().unwrap();
        let dict = dictionary(r#"{"words": ["abcd"], "4": ["abcd"]}"#, 1, 4);
        let mut found = Vec::new();
        let report = WordSearch::new(&grid, &dict).unwrap().exhaustive()
            .run(&mut DiscoveryRegistry::new(), &mut found).unwrap();

        assert_eq!(report.paths_visited, 4 + 12 + 24 + 24);
        assert_eq!(found.len(), 1);
    }

    #[test]
    fn test_continues_past_accepted_prefix() {
        let grid: Grid = "cats".parse().unwrap();
        let dict = dictionary(r#"{"words": ["cat", "cats"], "3": ["cat"], "4": ["cats"]}"#, 3, 4);
        let words: Vec<String> = find_words(&grid, &dict).unwrap().into_iter().map(|d| d.word).collect();
        assert_eq!(words, vec!["cat", "cats"]);
    }

    #[test]
    fn test_max_bound_stops_extension() {
        let grid: Grid = "cats".parse().unwrap();
        let dict = dictionary(r#"{"words": ["cat", "cats"], "3": ["cat"], "4": ["cats"]}"#, 3, 3);
        let words: Vec<String> = find_words(&grid, &dict).unwrap().into_iter().map(|d| d.word).collect();
        assert_eq!(words, vec!["cat"]);
    }

    #[test]
    fn test_min_bound_skips_short_words() {
        let grid: Grid = "cats".parse().unwrap();
        let dict = dictionary(r#"{"words": ["cat", "cats"], "3": ["cat"], "4": ["cats"]}"#, 4, 4);
        let words: Vec<String> = find_words(&grid, &dict).unwrap().into_iter().map(|d| d.word).collect();
        assert_eq!(words, vec!["cats"]);
    }

    #[test]
    fn test_duplicate_word_keeps_first_path() {
        // "aa" can be traced (0,0)->(0,1) or (0,1)->(0,0); the first start wins
        let grid: Grid = "aa".parse().unwrap();
        let dict = dictionary(r#"{"words": ["aa"], "2": ["aa"]}"#, 2, 2);
        let found = find_words(&grid, &dict).unwrap();
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].path, vec![Cell::new(0, 0), Cell::new(0, 1)]);
    }

    #[test]
    fn test_no_cell_reuse() {
        // "aaa" would need a cell twice on a two-cell board
        let grid: Grid = "aa".parse().unwrap();
        let dict = dictionary(r#"{"words": ["aaa"], "3": ["aaa"]}"#, 2, 3);
        assert!(find_words(&grid, &dict).unwrap().is_empty());
    }

    #[test]
    fn test_shared_registry_suppresses_repeats() {
        let (grid, dict) = cat_tax();
        let search = WordSearch::new(&grid, &dict).unwrap();
        let mut registry = DiscoveryRegistry::new();

        let mut first = Vec::new();
        search.run(&mut registry, &mut first).unwrap();
        let mut second = Vec::new();
        let report = search.run(&mut registry, &mut second).unwrap();

        assert_eq!(first.len(), 2);
        assert!(second.is_empty());
        assert_eq!(report.discoveries, 0);
    }

    struct Failing;

    impl DiscoveryHandler for Failing {
        fn on_discovery(&mut self, _word: &str, _path: &[Cell]) -> Result<(), ActuatorError> {
            Err(ActuatorError::Platform("display went away".into()))
        }
    }

    #[test]
    fn test_handler_failure_aborts() {
        let (grid, dict) = cat_tax();
        let mut registry = DiscoveryRegistry::new();
        let err = WordSearch::new(&grid, &dict).unwrap().run(&mut registry, &mut Failing).unwrap_err();

        match &err {
            SearchError::Actuator { word, .. } => assert_eq!(word, "cat"),
            other => panic!("expected Actuator error, got {other:?}"),
        }
        assert_eq!(err.code(), "S001");
        // the failing word was claimed, nothing after it was reached
        assert!(registry.contains("cat"));
        assert!(!registry.contains("tax"));
    }

    #[test]
    fn test_grid_too_small() {
        let grid: Grid = "ab".parse().unwrap();
        let dict = dictionary(r#"{"words": ["abcd"], "4": ["abcd"]}"#, 4, 4);
        let err = find_words(&grid, &dict).unwrap_err();
        assert!(matches!(err, SearchError::Grid(GridError::TooSmall { cells: 2, min_word_size: 4 })));
        assert!(err.display_detailed().contains("G004"));
    }

    #[test]
    fn test_format_path() {
        assert_eq!(format_path(&[Cell::new(0, 0), Cell::new(1, 1)]), "(0, 0) -> (1, 1)");
        assert_eq!(format_path(&[]), "");
    }
}
