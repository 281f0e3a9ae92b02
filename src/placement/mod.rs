//! Legal word placements on a partially filled board.
//!
//! The search is a pure function of (word, orientation, board, letter supply,
//! dictionary); nothing here mutates the board or the bag.

pub mod find_placements;
pub mod tile_supply;
pub mod word_runs;

pub use find_placements::{find_all_placements, find_placements, PlacementCandidate};
pub use tile_supply::LetterSupply;
