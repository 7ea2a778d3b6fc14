//! `bench_local.rs`: quick local timing runner for multi-word anagram queries (no Criterion)
//!
//! PURPOSE
//! -------
//! - Fast, ad-hoc timing for a handful of queries on *your* machine.
//! - Loads the dictionary once, then runs each query several times and reports the median.
//!
//! HOW TO RUN
//! ----------
//! - Optimized build:                `cargo run --bin bench_local --release`
//! - Multiple repeats:               `cargo run --bin bench_local --release -- -r 5`
//! - Print a few solutions:          `cargo run --bin bench_local --release -- -p 5`
//!
//! NOTES
//! -----
//! - Not statistically rigorous; use the same machine and `--release`.
//! - One warm-up run per query is done (not included in timing).
//! - Printing is kept outside the timed section.

use clap::Parser;
use std::hint::black_box;
use std::time::Instant;
use cw::config;
use cw::dictionary::Dictionary;
use cw::solver::{self, Solution};

/// Simple local benchmark runner: load dictionary once, time several queries.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Path to the dictionary (one word per line)
    #[arg(short, long, env = config::DICTIONARY_ENV_VAR, default_value = config::DEFAULT_DICTIONARY_PATH)]
    dictionary: String,

    /// Number of repeats per query (median is reported)
    #[arg(short = 'r', long = "repeats", default_value_t = 1)]
    num_repeats: usize,

    /// Print up to this many solutions per query (0 = print none)
    #[arg(short = 'p', long = "print", default_value_t = 0)]
    print_limit: usize,
}

/// A benchmark case: letters and the word lengths to split them into.
#[derive(Clone)]
struct Case {
    letters: &'static str,
    lengths: &'static [usize],
}

/// Edit/add new queries here.
fn get_cases() -> Vec<Case> {
    vec![
        Case { letters: "listen", lengths: &[6] },
        Case { letters: "catdog", lengths: &[3, 3] },
        Case { letters: "dormitory", lengths: &[5, 4] },
        Case { letters: "astronomer", lengths: &[4, 6] },
        Case { letters: "theeyes", lengths: &[3, 4] },
        Case { letters: "elevenplustwo", lengths: &[6, 3, 4] },
        // many equal-length slots stress the dedup cursor
        Case { letters: "conversation", lengths: &[3, 3, 3, 3] },
    ]
}

/// Small helper: robust central tendency for small samples.
fn median(mut xs: Vec<f64>) -> f64 {
    if xs.is_empty() {
        return 0.0;
    }
    xs.sort_by(f64::total_cmp);
    let n = xs.len();
    if n % 2 == 1 {
        xs[n / 2]
    } else {
        0.5 * (xs[n / 2 - 1] + xs[n / 2])
    }
}

fn case_name(case: &Case) -> String {
    let lengths: Vec<String> = case.lengths.iter().map(ToString::to_string).collect();
    format!("{} [{}]", case.letters, lengths.join(","))
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    eprintln!("Loading dictionary from: {}", cli.dictionary);
    let t_load = Instant::now();
    let dictionary = Dictionary::load_from_path(&cli.dictionary)?;
    eprintln!("Loaded {} words in {:.3}s", dictionary.len(), t_load.elapsed().as_secs_f64());
    let words = dictionary.as_strs();

    let mut summary: Vec<(String, f64, usize)> = Vec::new();

    for (idx, case) in get_cases().iter().enumerate() {
        let name = case_name(case);
        eprintln!("\n[{:02}] {}", idx + 1, name);

        if let Err(e) = solver::solve_multi_anagram(case.letters, case.lengths, &words) {
            eprintln!("  ✗ Warm-up failed: {}", e.display_detailed());
            continue;
        }

        let mut times = Vec::with_capacity(cli.num_repeats);
        let mut last_solutions: Vec<Solution> = Vec::new();

        for rep in 0..cli.num_repeats {
            let t_solve = Instant::now();
            let solutions = solver::solve_multi_anagram(black_box(case.letters), case.lengths, &words)?;
            let solve_secs = t_solve.elapsed().as_secs_f64();
            let _keep = black_box(solutions.len());

            times.push(solve_secs);
            last_solutions = solutions;
            eprintln!(
                "  run {:>2}/{:>2}: {:.3}s ({} solutions)",
                rep + 1,
                cli.num_repeats,
                solve_secs,
                last_solutions.len()
            );
        }

        let med = median(times);

        for solution in last_solutions.iter().take(cli.print_limit) {
            println!("{solution}");
        }

        eprintln!(
            "  → median {:.3}s over {} run(s); last run produced {} {}.",
            med,
            cli.num_repeats,
            last_solutions.len(),
            pluralizer(last_solutions.len(), "solution".into(), None)
        );
        summary.push((name, med, last_solutions.len()));
    }

    eprintln!("\n==== Summary ====");
    eprintln!("{:<32} | {:>10} | {:>11}", "query", "median (s)", "# solutions");
    eprintln!("{:-<32}-+-{:-<10}-+-{:-<11}", "", "", "");
    for (name, med, num_solutions) in &summary {
        eprintln!("{name:<32} | {med:>10.3} | {num_solutions:>11}");
    }

    Ok(())
}

fn pluralizer(count: usize, singular: String, plural: Option<String>) -> String {
    if count == 1 {
        singular
    } else {
        plural.unwrap_or_else(|| singular + "s")
    }
}
