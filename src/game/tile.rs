use serde::{Deserialize, Serialize};
use std::fmt;
use std::hash::{Hash, Hasher};

/// Letter carried by blank tiles.
pub const BLANK: char = ' ';

/// A single letter tile. Two tiles are equal when their letters are equal.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Tile {
    pub letter: char,
    pub point_value: u32,
    /// How many tiles of this letter a full bag holds.
    pub original_count: u32,
}

impl Tile {
    pub fn new(letter: char, point_value: u32, original_count: u32) -> Self {
        Self {
            letter,
            point_value,
            original_count,
        }
    }

    pub fn is_blank(&self) -> bool {
        self.letter == BLANK
    }
}

impl PartialEq for Tile {
    fn eq(&self, other: &Self) -> bool {
        self.letter == other.letter
    }
}

impl Eq for Tile {}

impl Hash for Tile {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.letter.hash(state);
    }
}

impl fmt::Display for Tile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_blank() {
            write!(f, "BLANK")
        } else {
            write!(f, "{}", self.letter)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_equality_ignores_points() {
        let a = Tile::new('A', 1, 9);
        let other_a = Tile::new('A', 7, 1);
        assert_eq!(a, other_a, "Tiles with the same letter should be equal");
        assert_ne!(a, Tile::new('B', 1, 9));

        let set: HashSet<Tile> = [a, other_a].into_iter().collect();
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn test_display() {
        assert_eq!(Tile::new('Q', 10, 1).to_string(), "Q");
        assert_eq!(Tile::new(BLANK, 0, 2).to_string(), "BLANK");
        assert!(Tile::new(BLANK, 0, 2).is_blank());
    }
}
