use crate::game::bag::TileBag;
use std::collections::HashMap;

/// Letters still available in the bag, as a multiset.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LetterSupply {
    counts: HashMap<char, usize>,
}

impl LetterSupply {
    pub fn from_bag(bag: &TileBag) -> Self {
        Self {
            counts: bag.letter_counts(),
        }
    }

    pub fn from_letters(letters: impl IntoIterator<Item = char>) -> Self {
        let mut counts = HashMap::new();
        for letter in letters {
            *counts.entry(letter).or_insert(0) += 1;
        }
        Self { counts }
    }

    pub fn count(&self, letter: char) -> usize {
        self.counts.get(&letter).copied().unwrap_or(0)
    }

    /// True when every letter in `needed` can be drawn, honouring multiplicity.
    pub fn covers(&self, needed: &[char]) -> bool {
        let demand = Self::from_letters(needed.iter().copied());
        demand
            .counts
            .iter()
            .all(|(letter, &wanted)| self.count(*letter) >= wanted)
    }
}
