//! Puzzle generation: configuration, progress events, the phased fill and the
//! final snapshot.

pub mod config;
pub mod events;
pub mod puzzle_generator;
pub mod snapshot;

pub use config::GeneratorConfig;
pub use events::{ChannelSink, EventLog, EventSink, GenerationEvent, NullSink};
pub use puzzle_generator::{GenerationPhase, PuzzleGenerator, FIRST_WORD_COL, FIRST_WORD_ROW};
pub use snapshot::{sample_hand, BoardState, CellState, PuzzleSnapshot};
