//! Defaults shared by the CLI, the benchmark runner and the WASM front end.

use std::time::Duration;

/// Dictionary used when neither `--dictionary` nor `CW_DICTIONARY` is given.
pub const DEFAULT_DICTIONARY_PATH: &str = "/usr/share/dict/words";

/// Environment fallback for the dictionary path.
pub const DICTIONARY_ENV_VAR: &str = "CW_DICTIONARY";

/// Environment switch for debug logging.
pub const DEBUG_ENV_VAR: &str = "CW_DEBUG";

/// Words per output line.
pub const DEFAULT_COLUMNS: usize = 5;

/// Wall-clock limit the CLI puts on a multi-word search.
pub const DEFAULT_TIME_BUDGET: Duration = Duration::from_secs(30);

/// How many search nodes the bounded collector visits between clock reads.
pub(crate) const BUDGET_POLL_INTERVAL: u64 = 1024;
