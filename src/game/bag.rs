use crate::game::distribution::{create_tiles, distribution, LetterSpec, FULL_BAG_SIZE};
use crate::game::tile::Tile;
use crate::{Result, ScrabblePuzzleError};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use std::collections::HashMap;

/// Fresh seed taken from the thread-local generator.
pub(crate) fn random_seed() -> u64 {
    rand::rng().random::<u64>()
}

/// The bag of undrawn tiles.
#[derive(Debug, Clone)]
pub struct TileBag {
    tiles: Vec<Tile>,
    distribution: &'static [LetterSpec],
    rng: StdRng,
}

impl TileBag {
    /// Full standard bag with an entropy-seeded generator.
    pub fn new() -> Result<Self> {
        Self::with_seed(random_seed())
    }

    pub fn with_seed(seed: u64) -> Result<Self> {
        Self::with_distribution(distribution(), seed)
    }

    /// Bag filled from `distribution`, which must total exactly 100 tiles.
    pub fn with_distribution(distribution: &'static [LetterSpec], seed: u64) -> Result<Self> {
        let mut bag = Self {
            tiles: Vec::with_capacity(FULL_BAG_SIZE),
            distribution,
            rng: StdRng::seed_from_u64(seed),
        };
        bag.reset()?;
        Ok(bag)
    }

    /// Refill to the full distribution.
    pub fn reset(&mut self) -> Result<()> {
        self.tiles = create_tiles(self.distribution);
        if self.tiles.len() != FULL_BAG_SIZE {
            return Err(ScrabblePuzzleError::BagInvariant {
                expected: FULL_BAG_SIZE,
                found: self.tiles.len(),
            });
        }
        Ok(())
    }

    /// Remove one uniformly random tile.
    pub fn draw_random(&mut self) -> Option<Tile> {
        if self.tiles.is_empty() {
            return None;
        }
        let index = self.rng.random_range(0..self.tiles.len());
        Some(self.tiles.swap_remove(index))
    }

    /// Draw up to `count` random tiles; fewer when the bag runs out.
    pub fn draw_tiles(&mut self, count: usize) -> Vec<Tile> {
        let mut drawn = Vec::with_capacity(count.min(self.tiles.len()));
        while drawn.len() < count {
            match self.draw_random() {
                Some(tile) => drawn.push(tile),
                None => break,
            }
        }
        drawn
    }

    /// Remove the first tile carrying `letter`.
    pub fn draw_exact(&mut self, letter: char) -> Option<Tile> {
        let letter = letter.to_ascii_uppercase();
        let index = self.tiles.iter().position(|t| t.letter == letter)?;
        Some(self.tiles.remove(index))
    }

    pub fn return_tile(&mut self, tile: Tile) {
        self.tiles.push(tile);
    }

    pub fn return_tiles(&mut self, tiles: impl IntoIterator<Item = Tile>) {
        self.tiles.extend(tiles);
    }

    pub fn shuffle(&mut self) {
        self.tiles.shuffle(&mut self.rng);
    }

    pub fn remaining_count(&self) -> usize {
        self.tiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    pub fn tiles(&self) -> &[Tile] {
        &self.tiles
    }

    /// Owned copy of the remaining tiles.
    pub fn snapshot(&self) -> Vec<Tile> {
        self.tiles.clone()
    }

    /// Remaining tiles per letter.
    pub fn letter_counts(&self) -> HashMap<char, usize> {
        let mut counts = HashMap::new();
        for tile in &self.tiles {
            *counts.entry(tile.letter).or_insert(0) += 1;
        }
        counts
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::distribution::STANDARD_DISTRIBUTION;
    use crate::game::tile::BLANK;
    use assert_matches::assert_matches;

    static SHORT_DISTRIBUTION: [LetterSpec; 2] = [
        LetterSpec {
            letter: 'A',
            points: 1,
            count: 60,
        },
        LetterSpec {
            letter: 'B',
            points: 3,
            count: 30,
        },
    ];

    #[test]
    fn test_initial_bag_size() {
        let bag = TileBag::with_seed(1).unwrap();
        assert_eq!(bag.remaining_count(), 100, "Bag should start with exactly 100 tiles");
        assert!(!bag.is_empty());
    }

    #[test]
    fn test_distribution_matches_table() {
        let bag = TileBag::with_seed(2).unwrap();
        let counts = bag.letter_counts();
        for spec in STANDARD_DISTRIBUTION.iter() {
            assert_eq!(
                counts.get(&spec.letter).copied().unwrap_or(0),
                spec.count as usize,
                "Wrong count for {:?}",
                spec.letter
            );
        }
        assert_eq!(counts[&'A'], 9);
        assert_eq!(counts[&'E'], 12);
        assert_eq!(counts[&'Q'], 1);
        assert_eq!(counts[&'Z'], 1);
        assert_eq!(counts[&BLANK], 2);
    }

    #[test]
    fn test_draw_single_tile() {
        let mut bag = TileBag::with_seed(3).unwrap();
        assert!(bag.draw_random().is_some());
        assert_eq!(bag.remaining_count(), 99);
    }

    #[test]
    fn test_draw_multiple_tiles() {
        let mut bag = TileBag::with_seed(4).unwrap();
        let tiles = bag.draw_tiles(7);
        assert_eq!(tiles.len(), 7);
        assert_eq!(bag.remaining_count(), 93);
    }

    #[test]
    fn test_empty_bag() {
        let mut bag = TileBag::with_seed(5).unwrap();
        let all = bag.draw_tiles(100);
        assert_eq!(all.len(), 100);
        assert!(bag.is_empty());
        assert!(bag.draw_random().is_none());
        assert!(bag.draw_tiles(5).is_empty(), "Drawing from an empty bag yields nothing");
    }

    #[test]
    fn test_draw_more_than_remaining() {
        let mut bag = TileBag::with_seed(6).unwrap();
        bag.draw_tiles(97);
        let rest = bag.draw_tiles(10);
        assert_eq!(rest.len(), 3);
        assert!(bag.is_empty());
    }

    #[test]
    fn test_draw_exact() {
        let mut bag = TileBag::with_seed(7).unwrap();
        let q = bag.draw_exact('q').unwrap();
        assert_eq!(q.letter, 'Q');
        assert_eq!(q.point_value, 10);
        assert_eq!(bag.remaining_count(), 99);

        assert!(bag.draw_exact('Q').is_none(), "Only one Q exists");
        assert_eq!(bag.remaining_count(), 99, "A failed draw leaves the bag untouched");
    }

    #[test]
    fn test_return_tiles() {
        let mut bag = TileBag::with_seed(8).unwrap();
        let drawn = bag.draw_tiles(5);
        let before = bag.remaining_count();
        bag.return_tiles(drawn);
        assert_eq!(bag.remaining_count(), before + 5);

        let tile = bag.draw_exact('Z').unwrap();
        bag.return_tile(tile);
        assert_eq!(bag.letter_counts()[&'Z'], 1);
    }

    #[test]
    fn test_shuffle_keeps_contents() {
        let mut bag = TileBag::with_seed(9).unwrap();
        let before = bag.letter_counts();
        bag.shuffle();
        assert_eq!(bag.remaining_count(), 100);
        assert_eq!(bag.letter_counts(), before);
    }

    #[test]
    fn test_reset_restores_full_bag() {
        let mut bag = TileBag::with_seed(10).unwrap();
        bag.draw_tiles(40);
        bag.draw_exact('J');
        bag.reset().unwrap();
        assert_eq!(bag.remaining_count(), 100);
        assert_eq!(bag.letter_counts()[&'J'], 1);
    }

    #[test]
    fn test_snapshot_is_a_copy() {
        let mut bag = TileBag::with_seed(11).unwrap();
        let snapshot = bag.snapshot();
        bag.draw_tiles(10);
        assert_eq!(snapshot.len(), 100);
        assert_eq!(bag.remaining_count(), 90);
    }

    #[test]
    fn test_wrong_total_is_rejected() {
        let result = TileBag::with_distribution(&SHORT_DISTRIBUTION, 12);
        assert_matches!(
            result,
            Err(ScrabblePuzzleError::BagInvariant {
                expected: 100,
                found: 90
            })
        );
    }
}
