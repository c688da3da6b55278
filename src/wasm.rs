use wasm_bindgen::prelude::*;

use crate::dictionary::{Dictionary, WordBounds};
use crate::errors::{DictionaryError, GridError};
use crate::grid::Grid;
use crate::log::init_logger;
use crate::search::{find_words, SearchError};

/// Structured error information for JavaScript consumers
#[derive(serde::Serialize)]
struct WasmError {
    /// Error code (e.g., "G002", "D003")
    code: String,
    /// Display message
    message: String,
    /// Short description of error type
    description: String,
    /// Detailed explanation
    details: String,
    /// Optional helpful suggestion
    #[serde(skip_serializing_if = "Option::is_none")]
    help: Option<String>,
}

impl From<GridError> for WasmError {
    fn from(e: GridError) -> Self {
        WasmError {
            code: e.code().to_string(),
            message: e.to_string(),
            description: e.description().to_string(),
            details: e.details().to_string(),
            help: e.help().map(str::to_string),
        }
    }
}

impl From<DictionaryError> for WasmError {
    fn from(e: DictionaryError) -> Self {
        WasmError {
            code: e.code().to_string(),
            message: e.to_string(),
            description: e.description().to_string(),
            details: e.details().to_string(),
            help: e.help().map(str::to_string),
        }
    }
}

impl From<SearchError> for WasmError {
    fn from(e: SearchError) -> Self {
        match e {
            // report the underlying grid problem directly
            SearchError::Grid(ge) => ge.into(),
            other => WasmError {
                code: other.code().to_string(),
                message: other.to_string(),
                description: other.description().to_string(),
                details: other.details().to_string(),
                help: other.help().map(str::to_string),
            },
        }
    }
}

impl From<WasmError> for JsValue {
    fn from(e: WasmError) -> Self {
        let mut msg = format!("Error {}: {}", e.code, e.message);

        if !e.details.is_empty() {
            msg.push_str(&format!("\n\n{}", e.details));
        }

        if let Some(help) = e.help {
            msg.push_str(&format!("\n\nSuggestion: {help}"));
        }

        js_sys::Error::new(&msg).into()
    }
}

/// Set up the panic hook and logging. Call once after the module loads.
#[wasm_bindgen]
pub fn initialize(debug_enabled: bool) {
    console_error_panic_hook::set_once();
    init_logger(debug_enabled);
    log::info!("WASM module initialized");
}

/// JS entry: (grid: string, dictionary_json: string, min_word_size: number, max_word_size: number)
/// returns Array<{ word: string, path: Array<{ row: number, col: number }> }> in discovery order
#[wasm_bindgen]
pub fn find_words_wasm(
    grid: &str,
    dictionary_json: &str,
    min_word_size: usize,
    max_word_size: usize,
) -> Result<JsValue, JsValue> {
    let bounds = WordBounds::new(min_word_size, max_word_size).map_err(WasmError::from)?;
    let dictionary = Dictionary::parse_from_str(dictionary_json, bounds).map_err(WasmError::from)?;
    let grid: Grid = grid.parse().map_err(WasmError::from)?;

    let found = find_words(&grid, &dictionary).map_err(WasmError::from)?;

    serde_wasm_bindgen::to_value(&found).map_err(|e| {
        WasmError {
            code: "WASM001".to_string(),
            message: format!("serialization failed: {e}"),
            description: "Failed to serialize result".to_string(),
            details: "The found words could not be converted to JavaScript format.".to_string(),
            help: Some("This is an internal error. Please report this issue.".to_string()),
        }
        .into()
    })
}
