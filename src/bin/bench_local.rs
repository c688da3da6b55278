//! `bench_local.rs`: quick local timing runner (no Criterion)
//!
//! PURPOSE
//! -------
//! - Fast, ad-hoc timing of the board search on *your* machine.
//! - Loads the dictionary once, then searches each board several times and reports the median.
//! - Every board is run twice: with prefix pruning and exhaustively, to show what pruning saves.
//!
//! HOW TO RUN
//! ----------
//! - Optimized build:                `cargo run --bin bench_local --release`
//! - Multiple repeats:               `cargo run --bin bench_local --release -- -r 5`
//! - Print the words found:          `cargo run --bin bench_local --release -- -p 5`
//! - See all flags:                  `cargo run --bin bench_local -- --help`
//!
//! NOTES
//! -----
//! - Exhaustive runs on 5x5 boards with long words are slow; lower `--max-word-size` to taste.
//! - I/O (printing) is kept outside the timed section.
//! - We report the *median* over repeats (more robust than mean for small _N_).

use clap::Parser;
use instant::Instant;
use std::hint::black_box;

use squaredle::dictionary::{Dictionary, WordBounds};
use squaredle::grid::Grid;
use squaredle::registry::DiscoveryRegistry;
use squaredle::search::{Discovery, SearchReport, WordSearch};

/// Simple local benchmark runner: load the dictionary once, time several boards.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Path to the JSON dictionary
    #[arg(
        short,
        long,
        default_value = concat!(env!("CARGO_MANIFEST_DIR"), "/data/wordle_dictionary.json")
    )]
    dictionary: String,

    #[arg(long, default_value_t = WordBounds::DEFAULT_MIN)]
    min_word_size: usize,

    #[arg(long, default_value_t = 8)]
    max_word_size: usize,

    /// Number of repeats per board (use >1 to reduce noise; median is reported)
    #[arg(short = 'r', long = "repeats", default_value_t = 1)]
    num_repeats: usize,

    /// Print up to this many words per board (0 = print none)
    #[arg(short = 'p', long = "print", default_value_t = 0)]
    print_limit: usize,
}

/// Boards to time. Edit/add new ones here.
const BOARDS: &[&str] = &[
    "rate sune lior test",
    "abcd efgh ijkl mnop",
    "stare plant crane groin edits",
];

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

/// Time `repeats` runs of `search`, returning the median seconds plus the last run's output.
fn time_search(search: &WordSearch<'_>, repeats: usize) -> (f64, SearchReport, Vec<Discovery>) {
    let mut times = Vec::with_capacity(repeats);
    let mut last = (SearchReport::default(), Vec::new());

    for _ in 0..repeats.max(1) {
        let mut found = Vec::new();
        let t = Instant::now();
        // a discovery handler that only collects never fails
        let Ok(report) = search.run(&mut DiscoveryRegistry::new(), black_box(&mut found)) else {
            continue;
        };
        times.push(t.elapsed().as_secs_f64());
        last = (report, found);
    }

    (median(times), last.0, last.1)
}

const MAX_BOARD_LEN: usize = 32;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    /// One row in the summary: (board, pruned median, exhaustive median, words, paths saved).
    type SummaryRow = (String, f64, f64, usize, u64);

    let cli = Cli::parse();

    eprintln!("Loading dictionary from: {}", cli.dictionary);
    let t_load = Instant::now();
    let bounds = WordBounds::new(cli.min_word_size, cli.max_word_size)?;
    let dictionary = Dictionary::load_from_path(&cli.dictionary, bounds)?;
    eprintln!("Loaded {} words in {:.3}s", dictionary.len(), t_load.elapsed().as_secs_f64());

    let mut summary: Vec<SummaryRow> = Vec::with_capacity(BOARDS.len());

    for (idx, board) in BOARDS.iter().enumerate() {
        eprintln!("\n[{:02}] {}", idx + 1, board);
        let grid: Grid = match board.parse() {
            Ok(grid) => grid,
            Err(e) => {
                eprintln!("  ✗ {}", e.display_detailed());
                continue;
            }
        };
        let pruned = match WordSearch::new(&grid, &dictionary) {
            Ok(search) => search,
            Err(e) => {
                eprintln!("  ✗ {}", e.display_detailed());
                continue;
            }
        };
        let exhaustive = WordSearch::new(&grid, &dictionary)?.exhaustive();

        let (pruned_s, pruned_report, found) = time_search(&pruned, cli.num_repeats);
        let (exhaustive_s, exhaustive_report, _) = time_search(&exhaustive, cli.num_repeats);

        eprintln!(
            "  → pruned {:.3}s ({} paths), exhaustive {:.3}s ({} paths), {} {}",
            pruned_s,
            pruned_report.paths_visited,
            exhaustive_s,
            exhaustive_report.paths_visited,
            found.len(),
            pluralizer(found.len(), "word".into(), None)
        );

        for discovery in found.iter().take(cli.print_limit) {
            println!("{}", discovery.word.to_uppercase());
        }

        summary.push((
            (*board).to_string(),
            pruned_s,
            exhaustive_s,
            found.len(),
            exhaustive_report.paths_visited.saturating_sub(pruned_report.paths_visited),
        ));
    }

    eprintln!("\n==== Summary ====");
    eprintln!(
        "{:<MAX_BOARD_LEN$} | {:>10} | {:>14} | {:>7} | {:>12}",
        "board", "pruned (s)", "exhaustive (s)", "# words", "paths saved"
    );
    eprintln!("{:-<MAX_BOARD_LEN$}-+-{:-<10}-+-{:-<14}-+-{:-<7}-+-{:-<12}", "", "", "", "", "");
    for (board, pruned_s, exhaustive_s, words, saved) in &summary {
        let display = if board.len() > MAX_BOARD_LEN {
            format!("{}…", board.chars().take(MAX_BOARD_LEN - 1).collect::<String>())
        } else {
            board.clone()
        };
        eprintln!("{display:<MAX_BOARD_LEN$} | {pruned_s:>10.3} | {exhaustive_s:>14.3} | {words:>7} | {saved:>12}");
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
