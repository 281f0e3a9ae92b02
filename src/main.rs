// main.rs - command line front for the puzzle generator
use clap::Parser;
use std::error::Error;
use std::io::Write;
use std::path::PathBuf;
use std::time::Duration;
use tokio::sync::mpsc::Receiver;
use tokio::task::JoinHandle;

use scrabble_puzzle::logging::setup_logging;
use scrabble_puzzle::{
    GenerationEvent, GeneratorConfig, PuzzleService, PuzzleSnapshot, WordDictionary,
};

#[derive(Parser, Debug)]
#[command(name = "scrabble_puzzle", version, about = "Generate a mid-game Scrabble puzzle as JSON")]
struct Config {
    /// Seed for a reproducible puzzle
    #[arg(long)]
    seed: Option<u64>,

    /// Word list, one word per line (built-in list when omitted)
    #[arg(short = 'd', long)]
    dictionary: Option<PathBuf>,

    /// Stream every generation event as a JSON line
    #[arg(short = 'a', long, default_value_t = false)]
    animated: bool,

    /// Pause after each word in animated mode
    #[arg(long, default_value_t = 300)]
    delay_ms: u64,

    /// Log level used when RUST_LOG is not set
    #[arg(long, default_value = "info")]
    log_level: String,

    /// Write rotating log files here instead of stderr
    #[arg(long)]
    log_dir: Option<PathBuf>,

    /// Pretty-print the JSON output
    #[arg(long, default_value_t = false)]
    pretty: bool,
}

impl Config {
    fn generator_config(&self) -> GeneratorConfig {
        GeneratorConfig {
            seed: self.seed,
            word_delay_ms: self.delay_ms,
            ..GeneratorConfig::default()
        }
    }
}

fn to_json<T: serde::Serialize>(value: &T, pretty: bool) -> serde_json::Result<String> {
    if pretty {
        serde_json::to_string_pretty(value)
    } else {
        serde_json::to_string(value)
    }
}

/// Writes each event as a JSON line, pausing on `Delay`.
///
/// The last line is always `generation_complete`: when the buffer dropped it,
/// it is rebuilt from the snapshot the task returns.
async fn stream_events<W: Write>(
    mut events: Receiver<GenerationEvent>,
    handle: JoinHandle<scrabble_puzzle::Result<PuzzleSnapshot>>,
    out: &mut W,
    pretty: bool,
) -> Result<PuzzleSnapshot, Box<dyn Error>> {
    let mut completed = false;
    while let Some(event) = events.recv().await {
        writeln!(out, "{}", to_json(&event, pretty)?)?;
        match event {
            GenerationEvent::Delay { duration_ms } => {
                tokio::time::sleep(Duration::from_millis(duration_ms)).await;
            }
            GenerationEvent::GenerationComplete { .. } => completed = true,
            _ => {}
        }
    }

    let puzzle = handle.await??;
    if !completed {
        log::warn!("Completion event was dropped, printing the final puzzle directly");
        let event = GenerationEvent::GenerationComplete {
            snapshot: puzzle.clone(),
        };
        writeln!(out, "{}", to_json(&event, pretty)?)?;
    }
    Ok(puzzle)
}

// ============================================================================
// FONCTION PRINCIPALE
// ============================================================================

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    let config = Config::parse();
    let _logger = setup_logging(&config.log_level, config.log_dir.as_deref())?;
    log::info!("{} {}", scrabble_puzzle::NAME, scrabble_puzzle::VERSION);

    let dictionary = match &config.dictionary {
        Some(path) => WordDictionary::load(path)?,
        None => WordDictionary::builtin(),
    };
    let service = PuzzleService::new(dictionary, config.generator_config())?;

    if !config.animated {
        let puzzle = service.generate().await?;
        println!("{}", to_json(&puzzle, config.pretty)?);
        return Ok(());
    }

    let (events, handle) = service.generate_animated()?;
    let puzzle = stream_events(events, handle, &mut std::io::stdout(), config.pretty).await?;
    log::info!(
        "Puzzle ready: {} tiles on the board, {} in the hand",
        puzzle.placed_tile_count,
        puzzle.hand.len()
    );
    Ok(())
}
