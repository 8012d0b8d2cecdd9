use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, ValueEnum};

use wordsearch::candidates::{RandomIndex, SeededRandom, ThreadRandom};
use wordsearch::errors::PlacementError;
use wordsearch::placement::{Direction, Puzzle};
use wordsearch::word_list::WordList;

const VERSION: &str = concat!(env!("CARGO_PKG_VERSION"), " (", env!("GIT_HASH"), ")");

/// Which way words are written.
#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
enum DirectionChoice {
    Up,
    Down,
    /// Up or down, chosen per word
    Random,
}

/// Word-search grid generator
#[derive(Parser, Debug)]
#[command(author, version = VERSION, about, long_about = None)]
struct Cli {
    /// Words to place, in order (e.g., "hello again")
    words: Vec<String>,

    /// File with one word per line, placed after any positional words
    #[arg(short, long)]
    word_list: Option<PathBuf>,

    /// Side length of the square grid
    #[arg(short, long, default_value_t = 10)]
    size: usize,

    /// Placement direction
    #[arg(short, long, value_enum, default_value_t = DirectionChoice::Random)]
    direction: DirectionChoice,

    /// Seed for a reproducible puzzle
    #[arg(long)]
    seed: Option<u64>,

    /// Leave out words that do not fit instead of failing
    #[arg(long)]
    skip_unplaceable: bool,
}

/// Entry point of the word-search CLI.
///
/// Delegates to [`try_main`], printing any error before exiting with code 1.
fn main() -> ExitCode {
    let debug_enabled = std::env::var("WORDSEARCH_DEBUG").is_ok();
    wordsearch::log::init_logger(debug_enabled);

    if let Err(e) = try_main() {
        if let Some(placement_err) = e.downcast_ref::<PlacementError>() {
            eprintln!("Error: {}", placement_err.display_detailed());
        } else {
            eprintln!("Error: {e}");
        }
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}

/// Steps:
/// 1. Parse CLI arguments and gather the words.
/// 2. Build a puzzle with a (possibly seeded) shuffled candidate order.
/// 3. Place each word in turn.
/// 4. Print the grid on stdout and the placements on stderr.
fn try_main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let mut words = WordList::from_iter(cli.words);
    if let Some(path) = &cli.word_list {
        words.words.extend(WordList::load_from_path(path)?.words);
    }
    if words.is_empty() {
        return Err("no words to place (pass words as arguments or use --word-list)".into());
    }

    let mut rng: Box<dyn RandomIndex> = match cli.seed {
        Some(seed) => Box::new(SeededRandom::new(seed)),
        None => Box::new(ThreadRandom::new()),
    };

    log::info!("Generating a {0}x{0} grid for {1} words", cli.size, words.len());
    let mut puzzle = Puzzle::new(cli.size, &mut *rng)?;

    for word in &words.words {
        let direction = match cli.direction {
            DirectionChoice::Up => Direction::Up,
            DirectionChoice::Down => Direction::Down,
            DirectionChoice::Random => Direction::random_vertical(&mut *rng),
        };

        match puzzle.place(word, direction) {
            Ok(_) => {}
            Err(PlacementError::GridExhausted { .. }) if cli.skip_unplaceable => {
                log::warn!("skipping \"{word}\"");
            }
            Err(e) => return Err(e.into()),
        }
    }

    print!("{}", puzzle.grid());
    for placement in puzzle.placements() {
        eprintln!("{placement}");
    }
    eprintln!(
        "Placed {}/{} words; {} of {} cells filled.",
        puzzle.placements().len(),
        words.len(),
        puzzle.grid().occupied_count(),
        cli.size * cli.size
    );

    Ok(())
}
