use std::io::{self, BufRead, Write};
use std::process::ExitCode;
use std::time::Duration;

use clap::Parser;
use instant::Instant;

use squaredle::actuator::{Actuator, ActuatorError, DryRunActuator, XdotoolActuator};
use squaredle::dictionary::{Dictionary, WordBounds};
use squaredle::emitter::ActionEmitter;
use squaredle::errors::{CalibrationError, DictionaryError, GridError};
use squaredle::gesture::{Geometry, Point, Region};
use squaredle::grid::{Cell, Grid};
use squaredle::registry::DiscoveryRegistry;
use squaredle::search::{DiscoveryHandler, SearchError, WordSearch};

/// Squaredle solver: finds every word on the board and traces it on screen
#[derive(Parser, Debug)]
#[command(author, version = concat!(env!("CARGO_PKG_VERSION"), " (", env!("GIT_HASH"), ")"), about, long_about = None)]
struct Cli {
    /// The board as whitespace-separated rows (e.g. "abcd efgh ijkl mnop"); prompted for if omitted
    grid: Option<String>,

    /// Path to the JSON dictionary ({"words": [...], "4": [...], ...})
    #[arg(
        short,
        long,
        default_value = concat!(env!("CARGO_MANIFEST_DIR"), "/data/wordle_dictionary.json")
    )]
    dictionary: String,

    /// Shortest word to look for
    #[arg(long, default_value_t = WordBounds::DEFAULT_MIN)]
    min_word_size: usize,

    /// Longest word to look for
    #[arg(long, default_value_t = WordBounds::DEFAULT_MAX)]
    max_word_size: usize,

    /// Board rectangle on screen as x1,y1,x2,y2 (top-left, bottom-right)
    #[arg(long, conflicts_with_all = ["origin", "cell_size"])]
    region: Option<Region>,

    /// Top-left corner of the board on screen as x,y
    #[arg(long, requires = "cell_size")]
    origin: Option<Point>,

    /// Size of one board cell on screen as width,height
    #[arg(long, requires = "origin")]
    cell_size: Option<Point>,

    /// Milliseconds to wait after each traced word before dismissing it
    #[arg(long, default_value_t = 200)]
    settle_ms: u64,

    /// Log gestures instead of moving the pointer
    #[arg(long)]
    dry_run: bool,

    /// Visit every simple path instead of pruning with the prefix tree
    #[arg(long)]
    exhaustive: bool,
}

/// Entry point of the solver.
///
/// Delegates to [`try_main`], printing any error in its detailed form before exiting
/// with code 1.
fn main() -> ExitCode {
    squaredle::log::init_logger(squaredle::log::debug_requested());

    if let Err(e) = try_main() {
        eprintln!("Error: {}", describe(e.as_ref()));
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}

/// Detailed (coded) message for the crate's own errors, plain `Display` otherwise.
fn describe(e: &(dyn std::error::Error + 'static)) -> String {
    if let Some(err) = e.downcast_ref::<GridError>() {
        err.display_detailed()
    } else if let Some(err) = e.downcast_ref::<DictionaryError>() {
        err.display_detailed()
    } else if let Some(err) = e.downcast_ref::<CalibrationError>() {
        err.display_detailed()
    } else if let Some(err) = e.downcast_ref::<SearchError>() {
        err.display_detailed()
    } else {
        e.to_string()
    }
}

/// Prints each word as it is found and hands its path to the emitter.
struct Session<A> {
    emitter: ActionEmitter<A>,
    found: Vec<String>,
}

impl<A: Actuator> DiscoveryHandler for Session<A> {
    fn on_discovery(&mut self, word: &str, path: &[Cell]) -> Result<(), ActuatorError> {
        println!("{}", word.to_uppercase());
        self.found.push(word.to_string());
        self.emitter.emit(path)
    }
}

/// Core application logic.
///
/// Steps:
/// 1. Parse CLI arguments.
/// 2. Load the dictionary (fatal if missing).
/// 3. Read the grid from the arguments or an interactive prompt.
/// 4. Build the screen geometry and pick the actuator.
/// 5. Search, tracing each new word as it is found.
fn try_main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let bounds = WordBounds::new(cli.min_word_size, cli.max_word_size)?;
    let t_load = Instant::now();
    let dictionary = Dictionary::load_from_path(&cli.dictionary, bounds)?;
    let load_secs = t_load.elapsed().as_secs_f64();

    let grid_line = match &cli.grid {
        Some(line) => line.clone(),
        None => prompt("Input today's Squaredle: ")?,
    };
    let grid: Grid = grid_line.parse()?;
    log::info!("Board is {}x{}:\n{grid}", grid.rows(), grid.cols());

    let geometry = geometry(&cli, &grid)?;
    let settle = Duration::from_millis(cli.settle_ms);

    let mut search = WordSearch::new(&grid, &dictionary)?;
    if cli.exhaustive {
        search = search.exhaustive();
    }

    let found = if cli.dry_run {
        run(&search, ActionEmitter::new(DryRunActuator, geometry).with_settle_delay(settle))?
    } else {
        run(&search, ActionEmitter::new(XdotoolActuator::new(), geometry).with_settle_delay(settle))?
    };

    eprintln!(
        "Loaded {} words in {:.3}s; found {} on the board.",
        dictionary.len(),
        load_secs,
        found
    );
    Ok(())
}

fn run<A: Actuator>(search: &WordSearch<'_>, emitter: ActionEmitter<A>) -> Result<usize, SearchError> {
    let mut session = Session { emitter, found: Vec::new() };
    search.run(&mut DiscoveryRegistry::new(), &mut session)?;
    Ok(session.found.len())
}

/// Screen geometry from the calibration flags.
///
/// A dry run without calibration uses a unit geometry so gestures are logged in
/// cell coordinates.
fn geometry(cli: &Cli, grid: &Grid) -> Result<Geometry, CalibrationError> {
    match (cli.region, cli.origin, cli.cell_size) {
        (Some(region), _, _) => Geometry::from_region(region, grid.rows(), grid.cols()),
        (None, Some(origin), Some(cell_size)) => Geometry::new(origin, cell_size),
        _ if cli.dry_run => Geometry::new(Point::new(0.0, 0.0), Point::new(1.0, 1.0)),
        _ => Err(CalibrationError::Missing),
    }
}

fn prompt(message: &str) -> io::Result<String> {
    print!("{message}");
    io::stdout().flush()?;
    let mut line = String::new();
    io::stdin().lock().read_line(&mut line)?;
    Ok(line.trim().to_string())
}
