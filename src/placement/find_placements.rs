use crate::dictionary::DictionaryOracle;
use crate::game::board::{Board, BOARD_SIZE};
use crate::game::orientation::Orientation;
use crate::placement::tile_supply::LetterSupply;
use crate::placement::word_runs::{extended_word, run_through};
use serde::{Deserialize, Serialize};

/// Legal first cell for a word in a given orientation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlacementCandidate {
    pub row: usize,
    pub col: usize,
    pub orientation: Orientation,
}

/// Returns every anchor where `word` can be laid along `orientation`.
///
/// An anchor is kept when the word fits on the board, agrees with every tile
/// it covers, fills at least one empty cell with letters the supply can
/// provide, touches existing tiles (overlap, extension or a cross), and every
/// word it forms is accepted by `dictionary`. Anchors come back in row-major
/// order.
pub fn find_placements<D: DictionaryOracle + ?Sized>(
    word: &str,
    orientation: Orientation,
    board: &Board,
    supply: &LetterSupply,
    dictionary: &D,
) -> Vec<PlacementCandidate> {
    let letters: Vec<char> = word.trim().to_uppercase().chars().collect();
    if letters.len() < 2 || letters.len() > BOARD_SIZE {
        return Vec::new();
    }

    let (max_row, max_col) = match orientation {
        Orientation::Horizontal => (BOARD_SIZE, BOARD_SIZE - letters.len() + 1),
        Orientation::Vertical => (BOARD_SIZE - letters.len() + 1, BOARD_SIZE),
    };

    let mut placements = Vec::new();
    for row in 0..max_row {
        for col in 0..max_col {
            if is_legal(&letters, row, col, orientation, board, supply, dictionary) {
                placements.push(PlacementCandidate {
                    row,
                    col,
                    orientation,
                });
            }
        }
    }
    log::trace!(
        "{} {} placement(s) for {}",
        placements.len(),
        orientation,
        word
    );
    placements
}

/// Placements for both orientations, horizontal first.
pub fn find_all_placements<D: DictionaryOracle + ?Sized>(
    word: &str,
    board: &Board,
    supply: &LetterSupply,
    dictionary: &D,
) -> Vec<PlacementCandidate> {
    Orientation::BOTH
        .iter()
        .flat_map(|&orientation| find_placements(word, orientation, board, supply, dictionary))
        .collect()
}

fn is_legal<D: DictionaryOracle + ?Sized>(
    letters: &[char],
    row: usize,
    col: usize,
    orientation: Orientation,
    board: &Board,
    supply: &LetterSupply,
    dictionary: &D,
) -> bool {
    let mut needed = Vec::with_capacity(letters.len());
    let mut empty_cells = Vec::with_capacity(letters.len());
    for (offset, &letter) in letters.iter().enumerate() {
        let (r, c) = orientation.advance(row, col, offset);
        match board.tile_at(r, c) {
            Some(tile) if tile.letter != letter => return false,
            Some(_) => {}
            None => {
                needed.push(letter);
                empty_cells.push((r, c, letter));
            }
        }
    }

    if empty_cells.is_empty() || !supply.covers(&needed) {
        return false;
    }

    let overlaps = empty_cells.len() < letters.len();
    let primary = extended_word(board, letters, row, col, orientation);
    let extends = primary.chars().count() > letters.len();
    let cross_words: Vec<String> = empty_cells
        .iter()
        .map(|&(r, c, letter)| run_through(board, r, c, orientation.cross(), letter))
        .filter(|run| run.chars().count() > 1)
        .collect();

    if !overlaps && !extends && cross_words.is_empty() {
        return false;
    }

    dictionary.is_valid_word(&primary) && cross_words.iter().all(|w| dictionary.is_valid_word(w))
}
