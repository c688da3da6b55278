//! Integration tests for the Squaredle solver.
//!
//! These tests drive the complete pipeline from board parsing and dictionary loading
//! through the search to the traced gestures, using a small fixture dictionary.

use std::collections::HashSet;
use std::time::Duration;

use squaredle::actuator::{ActuatorEvent, Key, RecordingActuator};
use squaredle::dictionary::{Dictionary, WordBounds};
use squaredle::emitter::ActionEmitter;
use squaredle::errors::{DictionaryError, GridError};
use squaredle::gesture::{Geometry, Point};
use squaredle::grid::{Cell, Grid};
use squaredle::registry::DiscoveryRegistry;
use squaredle::search::{find_words, Discovery, SearchError, WordSearch};

const FIXTURE: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/tests/fixtures/dictionary.json");

/// r a t e
/// s u n e
/// l i o r
/// t e s t
const BOARD: &str = "rate sune lior test";

/// Load the test dictionary from fixtures
fn load_fixture(min: usize, max: usize) -> Dictionary {
    Dictionary::load_from_path(FIXTURE, WordBounds::new(min, max).unwrap())
        .expect("Failed to read test dictionary")
}

fn board() -> Grid {
    BOARD.parse().unwrap()
}

/// Helper to extract just the words, in discovery order
fn words(found: &[Discovery]) -> Vec<&str> {
    found.iter().map(|d| d.word.as_str()).collect()
}

fn spelled(grid: &Grid, path: &[Cell]) -> String {
    path.iter().map(|&cell| grid.letter_at(cell)).collect()
}

#[cfg(test)]
mod scenarios {
    use super::*;

    #[test]
    fn test_cat_and_tax() {
        let grid: Grid = "CAT SXX".parse().unwrap();
        let dictionary = Dictionary::parse_from_str(
            r#"{"words": ["cat", "tax", "cats"], "3": ["cat", "tax"], "4": ["cats"]}"#,
            WordBounds::new(3, 3).unwrap(),
        )
        .unwrap();

        let found = find_words(&grid, &dictionary).unwrap();
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

        // same input, same words, same order, same paths
        assert_eq!(find_words(&grid, &dictionary).unwrap(), found);
    }

    #[test]
    fn test_fixture_board_words() {
        let grid = board();
        let dictionary = load_fixture(3, 6);
        let found = find_words(&grid, &dictionary).unwrap();

        let got: HashSet<&str> = words(&found).into_iter().collect();
        let expected: HashSet<&str> = [
            "ant", "sat", "lie", "rate", "tune", "lion", "rose", "tone", "lies", "toes", "rots",
            "toner", "stoner",
        ]
        .into_iter()
        .collect();
        assert_eq!(got, expected);
    }

    #[test]
    fn test_word_needing_a_cell_twice_is_not_found() {
        // "tot" and "nun" each need a cell visited twice on this board
        let found = find_words(&board(), &load_fixture(3, 6)).unwrap();
        assert!(!words(&found).contains(&"tot"));
        assert!(!words(&found).contains(&"nun"));
    }

    #[test]
    fn test_word_must_be_in_bucket_and_global_list() {
        let found = find_words(&board(), &load_fixture(3, 6)).unwrap();
        // "nose" is traceable but missing from the length-4 bucket
        assert!(!words(&found).contains(&"nose"));
        // "sore" is traceable but missing from the global list
        assert!(!words(&found).contains(&"sore"));
    }

    #[test]
    fn test_length_bounds() {
        let short = find_words(&board(), &load_fixture(3, 5)).unwrap();
        assert!(words(&short).contains(&"toner"));
        assert!(!words(&short).contains(&"stoner"));

        let long = find_words(&board(), &load_fixture(5, 6)).unwrap();
        let got: HashSet<&str> = words(&long).into_iter().collect();
        assert_eq!(got, HashSet::from(["toner", "stoner"]));
    }
}

#[cfg(test)]
mod properties {
    use super::*;

    fn discoveries() -> (Grid, Dictionary, Vec<Discovery>) {
        let grid = board();
        let dictionary = load_fixture(3, 6);
        let found = find_words(&grid, &dictionary).unwrap();
        (grid, dictionary, found)
    }

    #[test]
    fn test_paths_are_simple_and_adjacent() {
        let (grid, _, found) = discoveries();
        for Discovery { word, path } in &found {
            let distinct: HashSet<&Cell> = path.iter().collect();
            assert_eq!(distinct.len(), path.len(), "{word} revisits a cell");
            assert!(path.iter().all(|&cell| grid.is_in_bounds(cell)), "{word} leaves the board");
            for pair in path.windows(2) {
                assert!(pair[0].is_adjacent(pair[1]), "{word}: {} and {} are not adjacent", pair[0], pair[1]);
            }
        }
    }

    #[test]
    fn test_paths_spell_acceptable_words() {
        let (grid, dictionary, found) = discoveries();
        for Discovery { word, path } in &found {
            assert_eq!(&spelled(&grid, path), word);
            assert_eq!(path.len(), word.chars().count());
            assert!(dictionary.bounds().contains(path.len()));
            assert!(dictionary.is_acceptable(word), "{word} is not acceptable");
        }
    }

    #[test]
    fn test_each_word_reported_once() {
        let (_, _, found) = discoveries();
        let distinct: HashSet<&str> = words(&found).into_iter().collect();
        assert_eq!(distinct.len(), found.len());
    }

    #[test]
    fn test_pruned_and_exhaustive_agree() {
        let grid = board();
        let dictionary = load_fixture(3, 6);

        let mut pruned = Vec::new();
        let pruned_report = WordSearch::new(&grid, &dictionary)
            .unwrap()
            .run(&mut DiscoveryRegistry::new(), &mut pruned)
            .unwrap();

        let mut exhaustive = Vec::new();
        let exhaustive_report = WordSearch::new(&grid, &dictionary)
            .unwrap()
            .exhaustive()
            .run(&mut DiscoveryRegistry::new(), &mut exhaustive)
            .unwrap();

        assert_eq!(pruned, exhaustive);
        assert_eq!(pruned_report.discoveries, exhaustive_report.discoveries);
        assert!(pruned_report.paths_visited < exhaustive_report.paths_visited);
        assert_eq!(exhaustive_report.pruned, 0);
    }

    #[test]
    fn test_shared_registry_suppresses_repeats() {
        let grid = board();
        let dictionary = load_fixture(3, 6);
        let search = WordSearch::new(&grid, &dictionary).unwrap();
        let mut registry = DiscoveryRegistry::new();

        let mut first = Vec::new();
        search.run(&mut registry, &mut first).unwrap();
        let mut second = Vec::new();
        let report = search.run(&mut registry, &mut second).unwrap();

        assert!(!first.is_empty());
        assert!(second.is_empty());
        assert_eq!(report.discoveries, 0);
        assert_eq!(registry.len(), first.len());
    }
}

#[cfg(test)]
mod gestures {
    use super::*;

    fn cat_and_tax() -> (Grid, Dictionary) {
        let grid: Grid = "CAT SXX".parse().unwrap();
        let dictionary = Dictionary::parse_from_str(
            r#"{"words": ["cat", "tax"], "3": ["cat", "tax"]}"#,
            WordBounds::new(3, 3).unwrap(),
        )
        .unwrap();
        (grid, dictionary)
    }

    #[test]
    fn test_search_traces_each_word() {
        let (grid, dictionary) = cat_and_tax();
        let geometry = Geometry::new(Point::new(0.0, 0.0), Point::new(10.0, 10.0)).unwrap();
        let mut emitter =
            ActionEmitter::new(RecordingActuator::new(), geometry).with_settle_delay(Duration::ZERO);

        let report = WordSearch::new(&grid, &dictionary)
            .unwrap()
            .run(&mut DiscoveryRegistry::new(), &mut emitter)
            .unwrap();
        assert_eq!(report.discoveries, 2);

        let p = Point::new;
        assert_eq!(
            emitter.actuator().events,
            vec![
                // cat: (0,0) -> (0,1) -> (0,2)
                ActuatorEvent::Down(p(5.0, 5.0)),
                ActuatorEvent::Move(p(5.0, 5.0)),
                ActuatorEvent::Move(p(15.0, 5.0)),
                ActuatorEvent::Move(p(25.0, 5.0)),
                ActuatorEvent::Up(p(25.0, 5.0)),
                ActuatorEvent::Key(Key::Escape),
                // tax: (0,2) -> (0,1) -> (1,1)
                ActuatorEvent::Down(p(25.0, 5.0)),
                ActuatorEvent::Move(p(25.0, 5.0)),
                ActuatorEvent::Move(p(15.0, 5.0)),
                ActuatorEvent::Move(p(15.0, 15.0)),
                ActuatorEvent::Up(p(15.0, 15.0)),
                ActuatorEvent::Key(Key::Escape),
            ]
        );
    }

    #[test]
    fn test_actuator_failure_aborts_search() {
        let (grid, dictionary) = cat_and_tax();
        let geometry = Geometry::new(Point::new(0.0, 0.0), Point::new(10.0, 10.0)).unwrap();
        let actuator = RecordingActuator { fail_after: Some(0), ..RecordingActuator::default() };
        let mut emitter = ActionEmitter::new(actuator, geometry).with_settle_delay(Duration::ZERO);

        let err = WordSearch::new(&grid, &dictionary)
            .unwrap()
            .run(&mut DiscoveryRegistry::new(), &mut emitter)
            .unwrap_err();

        assert_eq!(err.code(), "S001");
        assert!(matches!(err, SearchError::Actuator { ref word, .. } if word == "cat"));
        assert!(emitter.actuator().events.is_empty());
    }
}

#[cfg(test)]
mod errors {
    use super::*;

    #[test]
    fn test_ragged_board() {
        let err = "abcd efg ijkl".parse::<Grid>().unwrap_err();
        assert!(matches!(err, GridError::RaggedRows { row: 1, expected: 4, found: 3 }));
        assert_eq!(err.code(), "G002");
    }

    #[test]
    fn test_empty_board() {
        assert!(matches!("   ".parse::<Grid>().unwrap_err(), GridError::EmptyGrid));
    }

    #[test]
    fn test_board_too_small_for_min_word_size() {
        let grid: Grid = "ab".parse().unwrap();
        let dictionary = load_fixture(3, 6);
        let err = WordSearch::new(&grid, &dictionary).unwrap_err();
        assert!(matches!(err, GridError::TooSmall { cells: 2, min_word_size: 3 }));

        let err = find_words(&grid, &dictionary).unwrap_err();
        assert_eq!(err.code(), "S002");
    }

    #[test]
    fn test_missing_dictionary_file() {
        let err = Dictionary::load_from_path("tests/fixtures/no_such_file.json", WordBounds::default())
            .unwrap_err();
        assert!(matches!(err, DictionaryError::Io { .. }));
        assert_eq!(err.code(), "D001");
    }

    #[test]
    fn test_invalid_bounds() {
        assert!(matches!(WordBounds::new(6, 4), Err(DictionaryError::InvalidBounds { min: 6, max: 4 })));
    }
}
