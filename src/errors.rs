//! Error types for grid input, dictionary loading and calibration, with error codes
//! and helpful messages.
//!
//! # Error Codes
//!
//! Each error variant has a unique code for documentation lookup:
//!
//! - G001: `GridError::EmptyGrid` (No rows in the grid input)
//! - G002: `GridError::RaggedRows` (Rows of unequal length)
//! - G003: `GridError::InvalidLetter` (Non-alphabetic cell)
//! - G004: `GridError::TooSmall` (Fewer cells than the minimum word size)
//! - G005: `GridError::Unparsable` (Grid line could not be split into rows)
//! - D001: `DictionaryError::Io` (Dictionary file unreadable)
//! - D002: `DictionaryError::Json` (Dictionary is not valid JSON of the expected shape)
//! - D003: `DictionaryError::EmptyWordSet` (No globally accepted words)
//! - D004: `DictionaryError::InvalidBounds` (Bad min/max word size)
//! - C001: `CalibrationError::Unparsable` (Point or region could not be parsed)
//! - C002: `CalibrationError::DegenerateCell` (Cell size not positive)
//! - C003: `CalibrationError::Missing` (No calibration supplied)
//!
//! Search-time failures live in [`crate::search::SearchError`] (S001).
//!
//! # Examples
//!
//! ```
//! use squaredle::errors::GridError;
//! use squaredle::grid::Grid;
//!
//! match "abc de".parse::<Grid>() {
//!     Err(e) => {
//!         assert_eq!(e.code(), "G002");
//!         println!("{}", e.display_detailed());
//!     }
//!     Ok(_) => unreachable!(),
//! }
//! # let _ = GridError::EmptyGrid;
//! ```

use std::io;

/// Failures while turning the grid input line into a [`crate::grid::Grid`].
#[derive(Debug, thiserror::Error)]
pub enum GridError {
    #[error("Empty grid")]
    EmptyGrid,

    #[error("Row {row} has {found} letters, expected {expected} (from row 0)")]
    RaggedRows {
        row: usize,
        expected: usize,
        found: usize,
    },

    #[error("Invalid letter '{letter}' at ({row}, {col})")]
    InvalidLetter { letter: char, row: usize, col: usize },

    #[error("Grid has {cells} cells but words need at least {min_word_size}")]
    TooSmall { cells: usize, min_word_size: usize },

    #[error("Could not read grid rows from \"{input}\"")]
    Unparsable { input: String },
}

impl GridError {
    /// Returns the error code for this error variant
    #[must_use]
    pub fn code(&self) -> &'static str {
        match self {
            GridError::EmptyGrid => "G001",
            GridError::RaggedRows { .. } => "G002",
            GridError::InvalidLetter { .. } => "G003",
            GridError::TooSmall { .. } => "G004",
            GridError::Unparsable { .. } => "G005",
        }
    }

    /// Returns a short description of this error type (for documentation)
    #[must_use]
    pub fn description(&self) -> &'static str {
        match self {
            GridError::EmptyGrid => "No rows in the grid input",
            GridError::RaggedRows { .. } => "Rows of unequal length",
            GridError::InvalidLetter { .. } => "Non-alphabetic cell",
            GridError::TooSmall { .. } => "Fewer cells than the minimum word size",
            GridError::Unparsable { .. } => "Grid line could not be split into rows",
        }
    }

    /// Returns detailed explanation of this error type (for documentation)
    #[must_use]
    pub fn details(&self) -> &'static str {
        match self {
            GridError::EmptyGrid => "The grid line was empty or contained only whitespace, so there is nothing to search.",
            GridError::RaggedRows { .. } => "Every row of the board must have the same number of letters. The first row fixes the column count and each later row is compared against it.",
            GridError::InvalidLetter { .. } => "Board cells must be alphabetic letters. Digits and punctuation usually come from a mistyped row.",
            GridError::TooSmall { .. } => "No simple path on this board can reach the minimum word size, so no word could ever be found.",
            GridError::Unparsable { .. } => "The grid line is expected to be whitespace-separated rows of letters.",
        }
    }

    /// Returns a helpful suggestion or example for this error
    #[must_use]
    pub fn help(&self) -> Option<&'static str> {
        match self {
            GridError::EmptyGrid => Some("Example: 'abcd efgh ijkl mnop' for a 4x4 board"),
            GridError::RaggedRows { .. } => Some("Check for a missing or extra letter in the reported row"),
            GridError::InvalidLetter { .. } => Some("Only letters are allowed; rows are separated by spaces"),
            GridError::TooSmall { .. } => Some("Lower --min-word-size or enter the full board"),
            GridError::Unparsable { .. } => None,
        }
    }

    /// Formats the error with code and optional help text
    #[must_use]
    pub fn display_detailed(&self) -> String {
        format_error_with_code_and_help(&self.to_string(), self.code(), self.help())
    }
}

/// Failures while loading or validating the dictionary source.
#[derive(Debug, thiserror::Error)]
pub enum DictionaryError {
    #[error("failed to read dictionary from '{path}': {source}")]
    Io {
        path: String,
        #[source]
        source: io::Error,
    },

    #[error("invalid dictionary JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("dictionary has no words in its \"words\" set")]
    EmptyWordSet,

    #[error("invalid word size bounds: min={min}, max={max}")]
    InvalidBounds { min: usize, max: usize },
}

impl DictionaryError {
    /// Returns the error code for this error variant
    #[must_use]
    pub fn code(&self) -> &'static str {
        match self {
            DictionaryError::Io { .. } => "D001",
            DictionaryError::Json(_) => "D002",
            DictionaryError::EmptyWordSet => "D003",
            DictionaryError::InvalidBounds { .. } => "D004",
        }
    }

    /// Returns a short description of this error type (for documentation)
    #[must_use]
    pub fn description(&self) -> &'static str {
        match self {
            DictionaryError::Io { .. } => "Dictionary file unreadable",
            DictionaryError::Json(_) => "Dictionary is not valid JSON of the expected shape",
            DictionaryError::EmptyWordSet => "No globally accepted words",
            DictionaryError::InvalidBounds { .. } => "Bad min/max word size",
        }
    }

    /// Returns detailed explanation of this error type (for documentation)
    #[must_use]
    pub fn details(&self) -> &'static str {
        match self {
            DictionaryError::Io { .. } => "The dictionary file is required before any search can start. The path was missing or could not be read as UTF-8 text.",
            DictionaryError::Json(_) => "The dictionary must be a JSON object with a \"words\" array plus one array of words per length, keyed by the length as a string (\"4\", \"5\", ...).",
            DictionaryError::EmptyWordSet => "The \"words\" array was empty, so no candidate could ever be accepted.",
            DictionaryError::InvalidBounds { .. } => "The minimum word size must be at least 1 and no larger than the maximum word size.",
        }
    }

    /// Returns a helpful suggestion or example for this error
    #[must_use]
    pub fn help(&self) -> Option<&'static str> {
        match self {
            DictionaryError::Io { .. } => Some("Pass the dictionary location with --dictionary <PATH>"),
            DictionaryError::Json(_) => Some("Expected shape: {\"words\": [\"cats\", ...], \"4\": [\"cats\", ...]}"),
            DictionaryError::EmptyWordSet => None,
            DictionaryError::InvalidBounds { .. } => Some("The minimum word size cannot exceed the maximum word size"),
        }
    }

    /// Formats the error with code and optional help text
    #[must_use]
    pub fn display_detailed(&self) -> String {
        format_error_with_code_and_help(&self.to_string(), self.code(), self.help())
    }
}

/// Failures while building the screen geometry the gestures are traced on.
#[derive(Debug, thiserror::Error)]
pub enum CalibrationError {
    #[error("could not parse {what} from \"{input}\"")]
    Unparsable { what: &'static str, input: String },

    #[error("cell size must be positive, got {width}x{height}")]
    DegenerateCell { width: f64, height: f64 },

    #[error("no screen calibration supplied")]
    Missing,
}

impl CalibrationError {
    /// Returns the error code for this error variant
    #[must_use]
    pub fn code(&self) -> &'static str {
        match self {
            CalibrationError::Unparsable { .. } => "C001",
            CalibrationError::DegenerateCell { .. } => "C002",
            CalibrationError::Missing => "C003",
        }
    }

    /// Returns a short description of this error type (for documentation)
    #[must_use]
    pub fn description(&self) -> &'static str {
        match self {
            CalibrationError::Unparsable { .. } => "Point or region could not be parsed",
            CalibrationError::DegenerateCell { .. } => "Cell size not positive",
            CalibrationError::Missing => "No calibration supplied",
        }
    }

    /// Returns detailed explanation of this error type (for documentation)
    #[must_use]
    pub fn details(&self) -> &'static str {
        match self {
            CalibrationError::Unparsable { .. } => "Points are written as 'x,y' and board regions as 'x1,y1,x2,y2', in screen pixels.",
            CalibrationError::DegenerateCell { .. } => "The board region must have its second corner strictly right of and below the first, and explicit cell sizes must be positive.",
            CalibrationError::Missing => "Tracing words on screen needs to know where the board is. Either a region or an origin plus a cell size must be given.",
        }
    }

    /// Returns a helpful suggestion or example for this error
    #[must_use]
    pub fn help(&self) -> Option<&'static str> {
        match self {
            CalibrationError::Unparsable { .. } => Some("Example: --region 100,200,500,600 or --origin 100,200 --cell-size 100,100"),
            CalibrationError::DegenerateCell { .. } => Some("Give the top-left corner first, then the bottom-right corner"),
            CalibrationError::Missing => Some("Use --region x1,y1,x2,y2, or --dry-run to only log the gestures"),
        }
    }

    /// Formats the error with code and optional help text
    #[must_use]
    pub fn display_detailed(&self) -> String {
        format_error_with_code_and_help(&self.to_string(), self.code(), self.help())
    }
}

/// Helper function to format error messages with code and optional help text
pub(crate) fn format_error_with_code_and_help(base_msg: &str, code: &str, help: Option<&str>) -> String {
    if let Some(help_text) = help {
        format!("{base_msg} ({code})\n{help_text}")
    } else {
        format!("{base_msg} ({code})")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn all_codes() -> Vec<&'static str> {
        let grid = [
            GridError::EmptyGrid,
            GridError::RaggedRows { row: 1, expected: 4, found: 3 },
            GridError::InvalidLetter { letter: '7', row: 0, col: 2 },
            GridError::TooSmall { cells: 2, min_word_size: 4 },
            GridError::Unparsable { input: "?".to_string() },
        ];
        let dictionary = [
            DictionaryError::Io {
                path: "missing.json".to_string(),
                source: io::Error::new(io::ErrorKind::NotFound, "not found"),
            },
            DictionaryError::EmptyWordSet,
            DictionaryError::InvalidBounds { min: 5, max: 3 },
        ];
        let calibration = [
            CalibrationError::Unparsable { what: "point", input: "1;2".to_string() },
            CalibrationError::DegenerateCell { width: 0.0, height: 10.0 },
            CalibrationError::Missing,
        ];

        grid.iter().map(GridError::code)
            .chain(dictionary.iter().map(DictionaryError::code))
            .chain(calibration.iter().map(CalibrationError::code))
            .collect()
    }

    #[test]
    fn test_error_codes_are_unique() {
        let codes = all_codes();
        let unique: std::collections::HashSet<_> = codes.iter().collect();
        assert_eq!(codes.len(), unique.len(), "duplicate error code in {codes:?}");
    }

    #[test]
    fn test_error_code_format() {
        for code in all_codes() {
            assert_eq!(code.len(), 4, "Error code '{code}' should be 4 characters");
            assert!(matches!(&code[..1], "G" | "D" | "C"), "unexpected prefix in '{code}'");
            assert!(code[1..].parse::<u16>().is_ok(), "Error code '{code}' should end with a number");
        }
    }

    #[test]
    fn test_ragged_rows_detailed() {
        let err = GridError::RaggedRows { row: 2, expected: 4, found: 3 };
        assert_eq!(err.code(), "G002");
        let detailed = err.display_detailed();
        assert!(detailed.contains("Row 2 has 3 letters, expected 4"));
        assert!(detailed.contains("(G002)"));
        assert!(detailed.contains("missing or extra letter"));
    }

    #[test]
    fn test_detailed_without_help() {
        let err = DictionaryError::EmptyWordSet;
        assert_eq!(err.display_detailed(), "dictionary has no words in its \"words\" set (D003)");
    }

    #[test]
    fn test_io_error_keeps_path() {
        let err = DictionaryError::Io {
            path: "words.json".to_string(),
            source: io::Error::new(io::ErrorKind::NotFound, "No such file"),
        };
        let msg = err.to_string();
        assert!(msg.contains("words.json"));
        assert!(msg.contains("No such file"));
        assert!(err.display_detailed().contains("--dictionary"));
    }

    #[test]
    fn test_invalid_bounds_mentions_values() {
        let err = DictionaryError::InvalidBounds { min: 5, max: 3 };
        let detailed = err.display_detailed();
        assert!(detailed.contains('5') && detailed.contains('3'));
        assert!(detailed.contains("minimum word size cannot exceed"));
    }
}
