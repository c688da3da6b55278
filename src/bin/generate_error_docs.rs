//! Generate error code documentation from the source of truth (the error enums).
//!
//! Codes, descriptions, details and help text come straight from each enum's
//! `code()`, `description()`, `details()` and `help()` methods.
//!
//! Run with:
//! ```bash
//! cargo run --bin generate_error_docs > docs/ERROR_CODES.md
//! ```

use std::fmt::Write;
use std::io;

use squaredle::actuator::ActuatorError;
use squaredle::errors::{CalibrationError, DictionaryError, GridError};
use squaredle::search::SearchError;

/// Append one documentation section per error, for any error type with
/// `code()`, `description()`, `details()`, `help()` and `display_detailed()`.
macro_rules! error_docs {
    ($out:expr, $errors:expr) => {
        for error in $errors {
            // NB: writing to a String never fails
            let _ = writeln!($out, "### {}: {}\n", error.code(), error.description());
            let _ = writeln!($out, "**Details:** {}\n", error.details());

            if let Some(help_text) = error.help() {
                let _ = writeln!($out, "**How to fix:**\n```\n{help_text}\n```\n");
            }

            let _ = writeln!($out, "**Example error message:**\n```\n{error}\n```\n");
            let _ = writeln!($out, "**Detailed format:**\n```\n{}\n```\n", error.display_detailed());
            let _ = writeln!($out, "---\n");
        }
    };
}

fn grid_error_variants() -> Vec<GridError> {
    vec![
        GridError::EmptyGrid,
        GridError::RaggedRows { row: 2, expected: 4, found: 3 },
        GridError::InvalidLetter { letter: '7', row: 1, col: 3 },
        GridError::TooSmall { cells: 3, min_word_size: 4 },
        GridError::Unparsable { input: "\u{0}".to_string() },
    ]
}

fn dictionary_error_variants() -> Vec<DictionaryError> {
    vec![
        DictionaryError::Io {
            path: "data/wordle_dictionary.json".to_string(),
            source: io::Error::new(io::ErrorKind::NotFound, "No such file or directory"),
        },
        // Json--create by parsing something that is not JSON
        DictionaryError::Json(serde_json::from_str::<serde_json::Value>("{words").unwrap_err()),
        DictionaryError::EmptyWordSet,
        DictionaryError::InvalidBounds { min: 6, max: 4 },
    ]
}

fn calibration_error_variants() -> Vec<CalibrationError> {
    vec![
        CalibrationError::Unparsable { what: "region", input: "100,200".to_string() },
        CalibrationError::DegenerateCell { width: -25.0, height: 40.0 },
        CalibrationError::Missing,
    ]
}

fn search_error_variants() -> Vec<SearchError> {
    vec![
        SearchError::Actuator {
            word: "taxes".to_string(),
            source: ActuatorError::Spawn {
                program: "xdotool".to_string(),
                source: io::Error::new(io::ErrorKind::NotFound, "No such file or directory"),
            },
        },
        SearchError::Grid(GridError::TooSmall { cells: 3, min_word_size: 4 }),
    ]
}

fn render() -> String {
    let mut out = String::new();
    let _ = writeln!(out, "# Error Code Reference\n");
    let _ = writeln!(out, "**This document is auto-generated from the source code. Do not edit manually.**\n");

    let _ = writeln!(out, "## Table of Contents\n");
    let _ = writeln!(out, "- [Search Errors (S001–S002)](#search-errors)");
    let _ = writeln!(out, "- [Grid Errors (G001–G005)](#grid-errors)");
    let _ = writeln!(out, "- [Dictionary Errors (D001–D004)](#dictionary-errors)");
    let _ = writeln!(out, "- [Calibration Errors (C001–C003)](#calibration-errors)\n");

    let _ = writeln!(out, "## Search Errors\n");
    let _ = writeln!(out, "Errors that stop a search after it has started, or wrap a grid rejected at its start.\n");
    error_docs!(out, search_error_variants());

    let _ = writeln!(out, "## Grid Errors\n");
    let _ = writeln!(out, "Errors in the board line typed at the prompt or passed on the command line.\n");
    error_docs!(out, grid_error_variants());

    let _ = writeln!(out, "## Dictionary Errors\n");
    let _ = writeln!(out, "Errors loading the dictionary or validating the word size limits.\n");
    error_docs!(out, dictionary_error_variants());

    let _ = writeln!(out, "## Calibration Errors\n");
    let _ = writeln!(out, "Errors in the screen position of the board.\n");
    error_docs!(out, calibration_error_variants());

    let _ = writeln!(out, "## Error Display Formats\n");
    let _ = writeln!(out, "```\n<message> (<code>)\n<help text if available>\n```");
    out
}

fn main() {
    print!("{}", render());
}
