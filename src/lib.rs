// Reusable library API: visible to both CLI and WASM builds
pub mod anagram;
pub mod config;
pub mod dictionary;
pub mod errors;
pub mod letters;
pub mod log;
pub mod output;
pub mod pattern;
pub mod solver;
pub mod word_index;

// Compile the wasm glue only when targeting wasm32.
#[cfg(target_arch = "wasm32")]
pub mod wasm;
