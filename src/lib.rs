//! # Scrabble Puzzle Library
//!
//! Generates "mid-game" Scrabble puzzles: a 15x15 board already holding a
//! network of valid, interconnected words, plus a hand of tiles drawn from what
//! is left in the bag.
//!
//! ## Features
//!
//! - **Game Model**: Tiles, the 100-tile bag and the premium-square board
//! - **Placement Search**: Every legal anchor for a word, cross-words included
//! - **Generator**: Phased fill with a streamable progress event log
//! - **Service**: Async sessions on the blocking pool
//!
//! ## Usage
//!
//! ```rust,no_run
//! use scrabble_puzzle::{GeneratorConfig, PuzzleGenerator, WordDictionary};
//!
//! let mut generator = PuzzleGenerator::new(WordDictionary::builtin(), GeneratorConfig::with_seed(7))?;
//! let puzzle = generator.generate()?;
//! println!("{} tiles on the board", puzzle.placed_tile_count);
//! # Ok::<(), scrabble_puzzle::ScrabblePuzzleError>(())
//! ```

// ============================================================================
// PUBLIC API MODULES
// ============================================================================

/// Tiles, bag and board
pub mod game;

/// Word validity oracle and the built-in word lists
pub mod dictionary;

/// Legal placement search
pub mod placement;

/// Phased puzzle generation and progress events
pub mod generator;

/// Async generation sessions
pub mod services;

/// Logger setup for the binary
pub mod logging;

// ============================================================================
// PUBLIC API RE-EXPORTS
// ============================================================================

pub use dictionary::{DictionaryOracle, WordDictionary};
pub use game::{Board, Orientation, Tile, TileBag, BLANK, BOARD_SIZE, CENTER};
pub use generator::{
    EventLog, EventSink, GenerationEvent, GenerationPhase, GeneratorConfig, PuzzleGenerator,
    PuzzleSnapshot,
};
pub use placement::{find_all_placements, find_placements, LetterSupply, PlacementCandidate};
pub use services::PuzzleService;

// ============================================================================
// ERROR TYPES
// ============================================================================

/// Main error type for the Scrabble puzzle library
#[derive(Debug, thiserror::Error)]
pub enum ScrabblePuzzleError {
    #[error("Bag invariant violated: expected {expected} tiles, found {found}")]
    BagInvariant { expected: usize, found: usize },

    #[error("No '{letter}' left in the bag for ({row}, {col})")]
    SupplyMismatch { letter: char, row: usize, col: usize },

    #[error("Dictionary error: {0}")]
    Dictionary(String),

    #[error("Generation task failed: {0}")]
    Task(#[from] tokio::task::JoinError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for convenience
pub type Result<T> = std::result::Result<T, ScrabblePuzzleError>;

// ============================================================================
// LIBRARY VERSION INFO
// ============================================================================

/// Library version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");

/// Library description
pub const DESCRIPTION: &str = env!("CARGO_PKG_DESCRIPTION");
