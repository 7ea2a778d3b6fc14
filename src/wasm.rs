use crate::anagram::find_anagrams;
use crate::dictionary::Dictionary;
use crate::errors::QueryError;
use crate::log::init_logger;
use crate::pattern::match_pattern;
use crate::solver::{solve_multi_anagram_bounded, SearchLimits, SolveStatus, SolverError};
use wasm_bindgen::prelude::*;

use serde_wasm_bindgen::{from_value, to_value};

/// Structured error information for JavaScript consumers
#[derive(serde::Serialize)]
struct WasmError {
    /// Error code (e.g., "E001", "S002")
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

impl From<&QueryError> for WasmError {
    fn from(e: &QueryError) -> Self {
        WasmError {
            code: e.code().to_string(),
            message: e.to_string(),
            description: e.description().to_string(),
            details: e.details().to_string(),
            help: e.help().map(str::to_string),
        }
    }
}

impl From<Box<QueryError>> for WasmError {
    fn from(e: Box<QueryError>) -> Self {
        WasmError::from(&*e)
    }
}

impl From<SolverError> for WasmError {
    fn from(e: SolverError) -> Self {
        match &e {
            // surface the underlying query error directly
            SolverError::InvalidQuery(qe) => WasmError::from(&**qe),
            _ => WasmError {
                code: e.code().to_string(),
                message: e.to_string(),
                description: e.description().to_string(),
                details: e.details().to_string(),
                help: e.help().map(str::to_string),
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

fn internal_error(code: &str, message: String, description: &str) -> WasmError {
    WasmError {
        code: code.to_string(),
        message,
        description: description.to_string(),
        details: "The value could not be converted between Rust and JavaScript.".to_string(),
        help: Some("This is an internal error. Please report this issue.".to_string()),
    }
}

// words: string[] -> Vec<String>
fn words_from_js(words: JsValue) -> Result<Vec<String>, WasmError> {
    from_value(words).map_err(|e| WasmError {
        code: "WASM001".to_string(),
        message: format!("words must be string[]: {e}"),
        description: "Invalid word-list format".to_string(),
        details: "The words parameter must be a JavaScript array of strings.".to_string(),
        help: Some("Pass the array returned by parse_dictionary, e.g., ['cat', 'dog', 'fish']".to_string()),
    })
}

fn strings_to_js<S: serde::Serialize>(value: &S) -> Result<JsValue, JsValue> {
    to_value(value).map_err(|e| internal_error("WASM002", format!("serialization failed: {e}"), "Failed to serialize result").into())
}

/// Initialize panic reporting and logging.
///
/// This function must be called from JavaScript after the WASM module loads.
#[wasm_bindgen]
pub fn initialize(debug_enabled: bool) {
    console_error_panic_hook::set_once();
    init_logger(debug_enabled);
    log::info!("WASM module initialized");
}

/// Parse a newline-separated word list into the normalized `string[]` the
/// other entry points take.
#[wasm_bindgen]
pub fn parse_dictionary(text: &str) -> Result<JsValue, JsValue> {
    strings_to_js(&Dictionary::parse_from_str(text).words)
}

/// JS entry: (pattern: string, words: string[]) -> string[]
#[wasm_bindgen]
pub fn match_pattern_wasm(pattern: &str, words: JsValue) -> Result<JsValue, JsValue> {
    let words = words_from_js(words)?;
    let refs: Vec<&str> = words.iter().map(String::as_str).collect();
    let found = match_pattern(pattern, &refs).map_err(WasmError::from)?;
    strings_to_js(&found)
}

/// JS entry: (letters: string, words: string[]) -> string[]
#[wasm_bindgen]
pub fn find_anagrams_wasm(letters: &str, words: JsValue) -> Result<JsValue, JsValue> {
    let words = words_from_js(words)?;
    let refs: Vec<&str> = words.iter().map(String::as_str).collect();
    let found = find_anagrams(letters, &refs).map_err(WasmError::from)?;
    strings_to_js(&found)
}

#[derive(serde::Serialize)]
struct WasmMultiResult {
    solutions: Vec<Vec<String>>,
    status: String,
}

/// JS entry: (letters: string, lengths: number[], words: string[], max_results?: number)
/// returns `{ solutions: string[][], status: string }`
#[wasm_bindgen]
pub fn multi_anagrams_wasm(
    letters: &str,
    lengths: JsValue,
    words: JsValue,
    max_results: Option<usize>,
) -> Result<JsValue, JsValue> {
    let lengths: Vec<usize> = from_value(lengths).map_err(|e| WasmError {
        code: "WASM003".to_string(),
        message: format!("lengths must be number[]: {e}"),
        description: "Invalid lengths format".to_string(),
        details: "The lengths parameter must be a JavaScript array of positive integers.".to_string(),
        help: Some("Example: [3, 3] for two three-letter words".to_string()),
    })?;
    let words = words_from_js(words)?;
    let refs: Vec<&str> = words.iter().map(String::as_str).collect();

    let limits = SearchLimits { max_results, time_budget: Some(crate::config::DEFAULT_TIME_BUDGET) };
    let result = solve_multi_anagram_bounded(letters, &lengths, &refs, limits).map_err(WasmError::from)?;

    let status = match result.status {
        SolveStatus::Exhausted => "exhausted",
        SolveStatus::FoundEnough => "found_enough",
        SolveStatus::TimedOut { .. } => "timed_out",
    };

    strings_to_js(&WasmMultiResult {
        solutions: result.solutions.iter().map(|s| s.words().to_vec()).collect(),
        status: status.to_string(),
    })
}
