use crate::game::board::Board;
use crate::game::orientation::Orientation;

/// First cell of the occupied run that would end just before (row, col).
fn run_start(board: &Board, row: usize, col: usize, orientation: Orientation) -> (usize, usize) {
    let mut start = (row, col);
    while let Some((r, c)) = orientation.retreat(start.0, start.1) {
        if !board.is_occupied_at(r, c) {
            break;
        }
        start = (r, c);
    }
    start
}

/// Collects occupied letters from (row, col) onwards until the first empty cell.
fn collect_forward(
    board: &Board,
    row: usize,
    col: usize,
    orientation: Orientation,
    out: &mut String,
) {
    let mut offset = 0;
    loop {
        let (r, c) = orientation.advance(row, col, offset);
        match board.tile_at(r, c) {
            Some(tile) => out.push(tile.letter),
            None => break,
        }
        offset += 1;
    }
}

/// The run along `orientation` through (row, col) if `letter` were placed there.
///
/// Length 1 means the cell has no neighbours along `orientation`.
pub fn run_through(
    board: &Board,
    row: usize,
    col: usize,
    orientation: Orientation,
    letter: char,
) -> String {
    let (start_row, start_col) = run_start(board, row, col, orientation);
    let mut run = String::new();
    collect_forward(board, start_row, start_col, orientation, &mut run);
    // collect_forward stops at (row, col) because it is empty.
    run.push(letter);
    let (next_row, next_col) = orientation.advance(row, col, 1);
    collect_forward(board, next_row, next_col, orientation, &mut run);
    run
}

/// `word` laid at the anchor, extended through the occupied cells touching both ends.
pub fn extended_word(
    board: &Board,
    word: &[char],
    row: usize,
    col: usize,
    orientation: Orientation,
) -> String {
    let (start_row, start_col) = run_start(board, row, col, orientation);
    let mut full = String::new();
    if (start_row, start_col) != (row, col) {
        let mut prefix = String::new();
        collect_forward(board, start_row, start_col, orientation, &mut prefix);
        // The prefix walk runs into the anchor cell when it is occupied.
        let before = if orientation == Orientation::Horizontal {
            col - start_col
        } else {
            row - start_row
        };
        full.extend(prefix.chars().take(before));
    }
    full.extend(word.iter());
    let (after_row, after_col) = orientation.advance(row, col, word.len());
    collect_forward(board, after_row, after_col, orientation, &mut full);
    full
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::distribution::tile_for;

    fn board_with(letters: &[(usize, usize, char)]) -> Board {
        let mut board = Board::new();
        for &(row, col, letter) in letters {
            board.place_tile(row, col, tile_for(letter).unwrap());
        }
        board
    }

    #[test]
    fn test_run_through_isolated_cell() {
        let board = Board::new();
        assert_eq!(run_through(&board, 7, 7, Orientation::Vertical, 'A'), "A");
    }

    #[test]
    fn test_run_through_joins_both_sides() {
        let board = board_with(&[(6, 4, 'C'), (8, 4, 'T')]);
        assert_eq!(run_through(&board, 7, 4, Orientation::Vertical, 'A'), "CAT");
        assert_eq!(run_through(&board, 7, 4, Orientation::Horizontal, 'A'), "A");
    }

    #[test]
    fn test_run_through_at_edges() {
        let board = board_with(&[(0, 1, 'O'), (0, 13, 'N')]);
        assert_eq!(run_through(&board, 0, 0, Orientation::Horizontal, 'D'), "DO");
        assert_eq!(run_through(&board, 0, 14, Orientation::Horizontal, 'O'), "NO");
    }

    #[test]
    fn test_extended_word_without_neighbours() {
        let board = Board::new();
        let word: Vec<char> = "CAT".chars().collect();
        assert_eq!(extended_word(&board, &word, 3, 3, Orientation::Horizontal), "CAT");
    }

    #[test]
    fn test_extended_word_picks_up_prefix_and_suffix() {
        let board = board_with(&[(5, 2, 'S'), (5, 6, 'S')]);
        let word: Vec<char> = "CAT".chars().collect();
        assert_eq!(extended_word(&board, &word, 5, 3, Orientation::Horizontal), "SCATS");
        assert_eq!(extended_word(&board, &word, 2, 6, Orientation::Vertical), "CATS");
    }

    #[test]
    fn test_extended_word_over_occupied_anchor() {
        let board = board_with(&[(7, 5, 'H'), (7, 6, 'E')]);
        let word: Vec<char> = "EL".chars().collect();
        assert_eq!(extended_word(&board, &word, 7, 6, Orientation::Horizontal), "HEL");
    }
}
