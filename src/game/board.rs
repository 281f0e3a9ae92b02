use crate::game::tile::Tile;

pub const BOARD_SIZE: usize = 15;
pub const CENTER: usize = 7;

const TRIPLE_WORD: [(usize, usize); 8] = [
    (0, 0),
    (0, 7),
    (0, 14),
    (7, 0),
    (7, 14),
    (14, 0),
    (14, 7),
    (14, 14),
];

const TRIPLE_LETTER: [(usize, usize); 12] = [
    (1, 5),
    (1, 9),
    (5, 1),
    (5, 5),
    (5, 9),
    (5, 13),
    (9, 1),
    (9, 5),
    (9, 9),
    (9, 13),
    (13, 5),
    (13, 9),
];

const DOUBLE_LETTER: [(usize, usize); 24] = [
    (0, 3),
    (0, 11),
    (2, 6),
    (2, 8),
    (3, 0),
    (3, 7),
    (3, 14),
    (6, 2),
    (6, 6),
    (6, 8),
    (6, 12),
    (7, 3),
    (7, 11),
    (8, 2),
    (8, 6),
    (8, 8),
    (8, 12),
    (11, 0),
    (11, 7),
    (11, 14),
    (12, 6),
    (12, 8),
    (14, 3),
    (14, 11),
];

type Layer = [[u8; BOARD_SIZE]; BOARD_SIZE];

/// 15x15 grid of placed tiles over a fixed premium-square layout.
///
/// The board does no rule checking; placement legality lives in
/// [`crate::placement`].
#[derive(Debug, Clone, PartialEq)]
pub struct Board {
    cells: [[Option<Tile>; BOARD_SIZE]; BOARD_SIZE],
    word_multipliers: Layer,
    letter_multipliers: Layer,
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl Board {
    pub fn new() -> Self {
        let mut word_multipliers = [[1; BOARD_SIZE]; BOARD_SIZE];
        let mut letter_multipliers = [[1; BOARD_SIZE]; BOARD_SIZE];

        // Both diagonals, the centre star keeps multiplier 1.
        for k in 1..BOARD_SIZE - 1 {
            if k != CENTER {
                word_multipliers[k][k] = 2;
                word_multipliers[k][BOARD_SIZE - 1 - k] = 2;
            }
        }
        for &(row, col) in TRIPLE_WORD.iter() {
            word_multipliers[row][col] = 3;
        }
        for &(row, col) in TRIPLE_LETTER.iter() {
            letter_multipliers[row][col] = 3;
        }
        for &(row, col) in DOUBLE_LETTER.iter() {
            letter_multipliers[row][col] = 2;
        }

        Self {
            cells: [[None; BOARD_SIZE]; BOARD_SIZE],
            word_multipliers,
            letter_multipliers,
        }
    }

    pub fn is_valid_position(row: usize, col: usize) -> bool {
        row < BOARD_SIZE && col < BOARD_SIZE
    }

    /// Puts `tile` at (row, col); out-of-range coordinates are ignored.
    pub fn place_tile(&mut self, row: usize, col: usize, tile: Tile) {
        if Self::is_valid_position(row, col) {
            self.cells[row][col] = Some(tile);
        }
    }

    pub fn tile_at(&self, row: usize, col: usize) -> Option<Tile> {
        if Self::is_valid_position(row, col) {
            self.cells[row][col]
        } else {
            None
        }
    }

    /// False for out-of-range coordinates.
    pub fn is_empty_at(&self, row: usize, col: usize) -> bool {
        Self::is_valid_position(row, col) && self.cells[row][col].is_none()
    }

    pub fn is_occupied_at(&self, row: usize, col: usize) -> bool {
        self.tile_at(row, col).is_some()
    }

    pub fn word_multiplier_at(&self, row: usize, col: usize) -> u8 {
        if Self::is_valid_position(row, col) {
            self.word_multipliers[row][col]
        } else {
            1
        }
    }

    pub fn letter_multiplier_at(&self, row: usize, col: usize) -> u8 {
        if Self::is_valid_position(row, col) {
            self.letter_multipliers[row][col]
        } else {
            1
        }
    }

    pub fn is_center_occupied(&self) -> bool {
        self.cells[CENTER][CENTER].is_some()
    }

    /// Empties every cell; the premium layout is untouched.
    pub fn clear(&mut self) {
        self.cells = [[None; BOARD_SIZE]; BOARD_SIZE];
    }

    pub fn placed_tile_count(&self) -> usize {
        self.cells.iter().flatten().filter(|c| c.is_some()).count()
    }

    pub fn all_placed_tiles(&self) -> Vec<Tile> {
        self.cells.iter().flatten().filter_map(|c| *c).collect()
    }
}
