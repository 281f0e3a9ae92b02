use crate::game::tile::{Tile, BLANK};
use serde::Serialize;

/// Number of tiles in a full bag.
pub const FULL_BAG_SIZE: usize = 100;

/// Point value and full-bag count of one letter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LetterSpec {
    pub letter: char,
    pub points: u32,
    pub count: u32,
}

const fn spec(letter: char, points: u32, count: u32) -> LetterSpec {
    LetterSpec {
        letter,
        points,
        count,
    }
}

/// Standard English distribution, blanks last.
pub static STANDARD_DISTRIBUTION: [LetterSpec; 27] = [
    spec('A', 1, 9),
    spec('B', 3, 2),
    spec('C', 3, 2),
    spec('D', 2, 4),
    spec('E', 1, 12),
    spec('F', 4, 2),
    spec('G', 2, 3),
    spec('H', 4, 2),
    spec('I', 1, 9),
    spec('J', 8, 1),
    spec('K', 5, 1),
    spec('L', 1, 4),
    spec('M', 3, 2),
    spec('N', 1, 6),
    spec('O', 1, 8),
    spec('P', 3, 2),
    spec('Q', 10, 1),
    spec('R', 1, 6),
    spec('S', 1, 4),
    spec('T', 1, 6),
    spec('U', 1, 4),
    spec('V', 4, 2),
    spec('W', 4, 2),
    spec('X', 8, 1),
    spec('Y', 4, 2),
    spec('Z', 10, 1),
    spec(BLANK, 0, 2),
];

pub fn distribution() -> &'static [LetterSpec] {
    &STANDARD_DISTRIBUTION
}

fn lookup(letter: char) -> Option<&'static LetterSpec> {
    let letter = letter.to_ascii_uppercase();
    STANDARD_DISTRIBUTION.iter().find(|s| s.letter == letter)
}

/// Point value of `letter`, case-insensitive; 0 for anything outside A-Z and the blank.
pub fn point_value_of(letter: char) -> u32 {
    lookup(letter).map_or(0, |s| s.points)
}

/// Full-bag count of `letter`, case-insensitive; 0 for anything outside A-Z and the blank.
pub fn count_of(letter: char) -> u32 {
    lookup(letter).map_or(0, |s| s.count)
}

/// Builds one tile per unit of count in `distribution`.
pub fn create_tiles(distribution: &[LetterSpec]) -> Vec<Tile> {
    distribution
        .iter()
        .flat_map(|s| (0..s.count).map(move |_| Tile::new(s.letter, s.points, s.count)))
        .collect()
}

/// Builds the tile for `letter` as it appears in a standard bag.
pub fn tile_for(letter: char) -> Option<Tile> {
    lookup(letter).map(|s| Tile::new(s.letter, s.points, s.count))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_standard_tiles() {
        let tiles = create_tiles(distribution());

        assert_eq!(
            tiles.len(),
            FULL_BAG_SIZE,
            "The bag should contain exactly 100 tiles, but found {}.",
            tiles.len()
        );
        assert_eq!(tiles.iter().filter(|t| t.letter == 'E').count(), 12);
        assert_eq!(tiles.iter().filter(|t| t.is_blank()).count(), 2);
    }

    #[test]
    fn test_point_values() {
        assert_eq!(point_value_of('A'), 1);
        assert_eq!(point_value_of('b'), 3);
        assert_eq!(point_value_of('Q'), 10);
        assert_eq!(point_value_of('z'), 10);
        assert_eq!(point_value_of(BLANK), 0);
        assert_eq!(point_value_of('!'), 0);
        assert_eq!(point_value_of('é'), 0);
    }

    #[test]
    fn test_letter_counts() {
        assert_eq!(count_of('A'), 9);
        assert_eq!(count_of('e'), 12);
        assert_eq!(count_of('Q'), 1);
        assert_eq!(count_of(BLANK), 2);
        assert_eq!(count_of('7'), 0);
    }

    #[test]
    fn test_tile_for() {
        let tile = tile_for('x').unwrap();
        assert_eq!(tile.letter, 'X');
        assert_eq!(tile.point_value, 8);
        assert_eq!(tile.original_count, 1);
        assert!(tile_for('#').is_none());
    }
}
