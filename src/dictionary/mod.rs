//! Word validity and random candidate words.
//!
//! The generator only needs the [`DictionaryOracle`] trait; [`WordDictionary`]
//! is the in-memory implementation backed by a word set.

pub mod builtin_words;

use crate::game::bag::random_seed;
use crate::{Result, ScrabblePuzzleError};
use builtin_words::{COMMON_WORDS, CONNECTOR_WORDS, TWO_LETTER_WORDS};
use rand::prelude::IndexedRandom;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::collections::HashSet;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use std::sync::{Arc, Mutex};

const FALLBACK_WORD: &str = "HELLO";

pub trait DictionaryOracle {
    /// Case-insensitive, trimmed lookup. Blank input is never valid.
    fn is_valid_word(&self, word: &str) -> bool;

    /// Some dictionary word. `target_length` is a hint that implementations may ignore.
    fn random_word(&self, target_length: usize) -> String;

    /// Restarts the candidate sequence from `seed`. Oracles without a random source ignore it.
    fn reseed(&self, _seed: u64) {}
}

impl<T: DictionaryOracle + ?Sized> DictionaryOracle for &T {
    fn is_valid_word(&self, word: &str) -> bool {
        (**self).is_valid_word(word)
    }

    fn random_word(&self, target_length: usize) -> String {
        (**self).random_word(target_length)
    }

    fn reseed(&self, seed: u64) {
        (**self).reseed(seed)
    }
}

impl<T: DictionaryOracle + ?Sized> DictionaryOracle for Arc<T> {
    fn is_valid_word(&self, word: &str) -> bool {
        (**self).is_valid_word(word)
    }

    fn random_word(&self, target_length: usize) -> String {
        (**self).random_word(target_length)
    }

    fn reseed(&self, seed: u64) {
        (**self).reseed(seed)
    }
}

#[derive(Debug)]
pub struct WordDictionary {
    valid_words: HashSet<String>,
    candidates: Vec<String>,
    rng: Mutex<StdRng>,
}

impl Clone for WordDictionary {
    fn clone(&self) -> Self {
        Self {
            valid_words: self.valid_words.clone(),
            candidates: self.candidates.clone(),
            rng: Mutex::new(self.lock_rng().clone()),
        }
    }
}

fn normalize(word: &str) -> String {
    word.trim().to_uppercase()
}

fn is_playable(word: &str) -> bool {
    word.len() >= 2 && word.chars().all(|c| c.is_ascii_uppercase())
}

fn builtin_candidates() -> Vec<String> {
    COMMON_WORDS.iter().map(|w| w.to_string()).collect()
}

impl WordDictionary {
    pub fn new(
        valid_words: impl IntoIterator<Item = String>,
        candidates: impl IntoIterator<Item = String>,
    ) -> Self {
        Self {
            valid_words: valid_words.into_iter().map(|w| normalize(&w)).collect(),
            candidates: candidates.into_iter().map(|w| normalize(&w)).collect(),
            rng: Mutex::new(StdRng::seed_from_u64(random_seed())),
        }
    }

    /// Same words, candidates drawn from a generator seeded with `seed`.
    pub fn with_seed(self, seed: u64) -> Self {
        self.reseed(seed);
        self
    }

    /// Common words, connector words and two-letter words.
    pub fn builtin() -> Self {
        let valid = COMMON_WORDS
            .iter()
            .chain(CONNECTOR_WORDS)
            .chain(TWO_LETTER_WORDS)
            .map(|w| w.to_string());
        Self::new(valid, builtin_candidates())
    }

    /// One word per line; lines that are not 2+ letters of A-Z are skipped.
    pub fn from_reader<R: BufRead>(reader: R) -> Result<Self> {
        let mut valid_words = HashSet::new();
        for line in reader.lines() {
            let word = normalize(&line?);
            if is_playable(&word) {
                valid_words.insert(word);
            }
        }
        if valid_words.is_empty() {
            return Err(ScrabblePuzzleError::Dictionary(
                "word list contains no playable words".to_string(),
            ));
        }
        Ok(Self::new(valid_words, builtin_candidates()))
    }

    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|err| {
            ScrabblePuzzleError::Dictionary(format!("cannot open {}: {}", path.display(), err))
        })?;
        let dictionary = Self::from_reader(BufReader::new(file))?;
        log::info!(
            "Loaded {} words from {}",
            dictionary.len(),
            path.display()
        );
        Ok(dictionary)
    }

    pub fn len(&self) -> usize {
        self.valid_words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.valid_words.is_empty()
    }

    // A poisoned lock still holds a usable generator.
    fn lock_rng(&self) -> std::sync::MutexGuard<'_, StdRng> {
        self.rng.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl DictionaryOracle for WordDictionary {
    fn is_valid_word(&self, word: &str) -> bool {
        let word = normalize(word);
        !word.is_empty() && self.valid_words.contains(&word)
    }

    // Candidates are not filtered by length.
    fn random_word(&self, _target_length: usize) -> String {
        self.candidates
            .choose(&mut *self.lock_rng())
            .cloned()
            .unwrap_or_else(|| FALLBACK_WORD.to_string())
    }

    fn reseed(&self, seed: u64) {
        *self.lock_rng() = StdRng::seed_from_u64(seed);
    }
}
