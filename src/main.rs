use std::process::ExitCode;
use std::time::Duration;

use clap::{ArgGroup, Parser};
use instant::Instant;

use cw::config;
use cw::dictionary::Dictionary;
use cw::errors::QueryError;
use cw::solver::{self, SearchLimits, SolveStatus};
use cw::{anagram, output, pattern};

/// Crossword helper
#[derive(Parser, Debug)]
#[command(
    author,
    version = concat!(env!("CARGO_PKG_VERSION"), " (", env!("GIT_HASH"), ")"),
    about,
    long_about = None,
    group(ArgGroup::new("mode").args(["anagram", "fill_blanks", "multi"]).multiple(false))
)]
struct Cli {
    /// Anagram mode: words using exactly the given letters
    #[arg(short = 'a')]
    anagram: bool,

    /// Fill-blanks mode (default): '?' or '*' match one unknown letter
    #[arg(short = 's')]
    fill_blanks: bool,

    /// Multi-word anagram mode with comma-separated word lengths (e.g. 3,3)
    #[arg(short = 'm', long = "multi", value_name = "LENGTHS", value_delimiter = ',')]
    multi: Option<Vec<usize>>,

    /// Number of columns
    #[arg(short = 'n', value_name = "COLS", default_value_t = config::DEFAULT_COLUMNS, value_parser = parse_columns)]
    columns: usize,

    /// Path to the dictionary (one word per line)
    #[arg(short = 'd', long, env = config::DICTIONARY_ENV_VAR, default_value = config::DEFAULT_DICTIONARY_PATH)]
    dictionary: String,

    /// Stop the multi-word search after this many results
    #[arg(long)]
    max_results: Option<usize>,

    /// Time budget for the multi-word search, in seconds
    #[arg(long, value_name = "SECS", default_value_t = config::DEFAULT_TIME_BUDGET.as_secs())]
    timeout: u64,

    /// Enable debug logging
    #[arg(long, env = config::DEBUG_ENV_VAR)]
    debug: bool,

    /// Pattern or letters; several arguments are joined with spaces
    #[arg(required = true, num_args = 1..)]
    input: Vec<String>,
}

/// Which lookup to run; `-s` and no flag both mean fill-blanks.
enum Mode<'a> {
    FillBlanks,
    Anagram,
    MultiAnagram(&'a [usize]),
}

impl Cli {
    fn mode(&self) -> Mode<'_> {
        // the "mode" group keeps these mutually exclusive
        match (&self.multi, self.anagram, self.fill_blanks) {
            (Some(lengths), _, _) => Mode::MultiAnagram(lengths),
            (None, true, false) => Mode::Anagram,
            _ => Mode::FillBlanks,
        }
    }
}

fn parse_columns(raw: &str) -> Result<usize, String> {
    match raw.parse::<usize>() {
        Ok(0) => Err("must be at least 1".to_string()),
        Ok(n) => Ok(n),
        Err(e) => Err(e.to_string()),
    }
}

/// Entry point of the cw CLI.
///
/// Delegates to [`try_main`], printing any error in its detailed form
/// before exiting with code 1.
fn main() -> ExitCode {
    let cli = Cli::parse();

    cw::log::init_logger(cli.debug);

    if let Err(e) = try_main(&cli) {
        if let Some(solver_err) = e.downcast_ref::<solver::SolverError>() {
            eprintln!("Error: {}", solver_err.display_detailed());
        } else if let Some(query_err) = e.downcast_ref::<QueryError>() {
            eprintln!("Error: {}", query_err.display_detailed());
        } else {
            eprintln!("Error: {e}");
        }
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}

/// Core application logic.
///
/// 1. Load the dictionary.
/// 2. Run the selected lookup.
/// 3. Print sorted results in columns on stdout.
/// 4. Print timings and counts on stderr.
fn try_main(cli: &Cli) -> Result<(), Box<dyn std::error::Error>> {
    // Several positional arguments are one query ("cat dog" == "catdog").
    let text = cli.input.join(" ");

    // Step 1: load the dictionary, timing it separately from the search.
    let t_load = Instant::now();
    let dictionary = Dictionary::load_from_path(&cli.dictionary)?;
    let load_secs = t_load.elapsed().as_secs_f64();
    let words = dictionary.as_strs();

    // Step 2: run the selected lookup. Every arm yields the display strings
    // plus, for the multi-word search only, how the search ended.
    let t_solve = Instant::now();
    let (items, status) = match cli.mode() {
        Mode::MultiAnagram(lengths) => {
            // both caps are enforced from outside the search
            let limits = SearchLimits {
                max_results: cli.max_results,
                time_budget: Some(Duration::from_secs(cli.timeout)),
            };
            let result = solver::solve_multi_anagram_bounded(&text, lengths, &words, limits)?;
            // Search order isn't alphabetical; sort before display.
            let mut solutions = result.solutions;
            solutions.sort();
            (solutions.iter().map(ToString::to_string).collect::<Vec<_>>(), Some(result.status))
        }
        Mode::Anagram => {
            let mut found = anagram::find_anagrams(&text, &words).map_err(|e| *e)?;
            found.sort_unstable();
            (found.into_iter().map(str::to_string).collect(), None)
        }
        Mode::FillBlanks => {
            let mut found = pattern::match_pattern(&text, &words).map_err(|e| *e)?;
            found.sort_unstable();
            (found.into_iter().map(str::to_string).collect(), None)
        }
    };
    let solve_secs = t_solve.elapsed().as_secs_f64();

    // Step 3: results go to stdout so they can be piped on their own.
    print!("{}", output::columnize(&items, cli.columns));

    // Step 4: everything else goes to stderr. An early stop is not an
    // error, but the user should know the list may be incomplete.
    match status {
        Some(SolveStatus::TimedOut { elapsed }) => {
            eprintln!("Timed out after {:.1}s; some results may be missing", elapsed.as_secs_f64());
        }
        Some(SolveStatus::FoundEnough) => {
            eprintln!("Stopped after {} requested results", items.len());
        }
        Some(SolveStatus::Exhausted) | None => {}
    }

    eprintln!(
        "Loaded {} words in {:.3}s; searched in {:.3}s ({} results).",
        dictionary.len(),
        load_secs,
        solve_secs,
        items.len()
    );

    Ok(())
}
