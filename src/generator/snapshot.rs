use crate::game::bag::TileBag;
use crate::game::board::{Board, BOARD_SIZE};
use crate::game::tile::Tile;
use rand::Rng;
use serde::Serialize;

/// One rendered board cell.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CellState {
    pub has_tile: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub letter: Option<char>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub points: Option<u32>,
    pub word_multiplier: u8,
    pub letter_multiplier: u8,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BoardState {
    pub size: usize,
    pub cells: Vec<Vec<CellState>>,
}

impl BoardState {
    pub fn render(board: &Board) -> Self {
        let cells = (0..BOARD_SIZE)
            .map(|row| {
                (0..BOARD_SIZE)
                    .map(|col| {
                        let tile = board.tile_at(row, col);
                        CellState {
                            has_tile: tile.is_some(),
                            letter: tile.map(|t| t.letter),
                            points: tile.map(|t| t.point_value),
                            word_multiplier: board.word_multiplier_at(row, col),
                            letter_multiplier: board.letter_multiplier_at(row, col),
                        }
                    })
                    .collect()
            })
            .collect();
        Self {
            size: BOARD_SIZE,
            cells,
        }
    }

    pub fn letter_at(&self, row: usize, col: usize) -> Option<char> {
        self.cells.get(row)?.get(col)?.letter
    }

    /// Letters of row `row` as a string, `.` for empty cells.
    pub fn row_text(&self, row: usize) -> String {
        self.cells
            .get(row)
            .map(|cells| cells.iter().map(|c| c.letter.unwrap_or('.')).collect())
            .unwrap_or_default()
    }
}

/// The finished puzzle: board, hand and tile counts.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PuzzleSnapshot {
    pub board: BoardState,
    pub hand: Vec<Tile>,
    pub placed_tile_count: usize,
    /// Bag size before the hand was sampled.
    pub remaining_tile_count: usize,
}

impl PuzzleSnapshot {
    /// Renders `board` and samples a hand from `bag` without touching either.
    pub fn capture<R: Rng>(board: &Board, bag: &TileBag, hand_size: usize, rng: &mut R) -> Self {
        Self {
            board: BoardState::render(board),
            hand: sample_hand(bag.snapshot(), hand_size, rng),
            placed_tile_count: board.placed_tile_count(),
            remaining_tile_count: bag.remaining_count(),
        }
    }
}

/// Picks `min(count, pool.len())` tiles from `pool` without replacement.
pub fn sample_hand<R: Rng>(mut pool: Vec<Tile>, count: usize, rng: &mut R) -> Vec<Tile> {
    let count = count.min(pool.len());
    let mut hand = Vec::with_capacity(count);
    for _ in 0..count {
        let index = rng.random_range(0..pool.len());
        hand.push(pool.swap_remove(index));
    }
    hand
}
