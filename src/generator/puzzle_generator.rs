//! The fill algorithm.
//!
//! A session walks `Idle -> FirstWordPlaced -> MainFill -> ConnectorFill -> Done`:
//! an opening word through the centre, random dictionary words at random legal
//! anchors while the board is sparse, then short connector words until the bag
//! is nearly empty. Running out of words or attempts only makes the board
//! sparser; it is never an error.

use crate::dictionary::builtin_words::CONNECTOR_WORDS;
use crate::dictionary::DictionaryOracle;
use crate::game::bag::{random_seed, TileBag};
use crate::game::board::{Board, BOARD_SIZE, CENTER};
use crate::game::distribution::FULL_BAG_SIZE;
use crate::game::orientation::Orientation;
use crate::generator::config::GeneratorConfig;
use crate::generator::events::{EventSink, GenerationEvent, NullSink};
use crate::generator::snapshot::PuzzleSnapshot;
use crate::placement::{find_all_placements, find_placements, LetterSupply, PlacementCandidate};
use crate::{Result, ScrabblePuzzleError};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::Serialize;
use uuid::Uuid;

/// Row of the opening word.
pub const FIRST_WORD_ROW: usize = CENTER;
/// Column the opening word starts in.
pub const FIRST_WORD_COL: usize = CENTER - 2;
const MIN_OPENING_LENGTH: usize = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum GenerationPhase {
    Idle,
    FirstWordPlaced,
    MainFill,
    ConnectorFill,
    Done,
}

/// One generation session: owns its bag, board and random source.
#[derive(Debug)]
pub struct PuzzleGenerator<D> {
    session_id: Uuid,
    dictionary: D,
    config: GeneratorConfig,
    bag: TileBag,
    board: Board,
    rng: StdRng,
    phase: GenerationPhase,
    attempts: u32,
}

fn normalize(word: &str) -> String {
    word.trim().to_uppercase()
}

impl<D: DictionaryOracle> PuzzleGenerator<D> {
    pub fn new(dictionary: D, config: GeneratorConfig) -> Result<Self> {
        let seed = config.seed.unwrap_or_else(random_seed);
        let mut rng = StdRng::seed_from_u64(seed);
        let bag = TileBag::with_seed(rng.random::<u64>())?;
        let session_id = Uuid::new_v4();
        log::debug!("Session {} created with seed {}", session_id, seed);
        Ok(Self {
            session_id,
            dictionary,
            config,
            bag,
            board: Board::new(),
            rng,
            phase: GenerationPhase::Idle,
            attempts: 0,
        })
    }

    pub fn session_id(&self) -> Uuid {
        self.session_id
    }

    pub fn phase(&self) -> GenerationPhase {
        self.phase
    }

    /// Fill attempts used so far, across both fill phases.
    ///
    /// Connector fill stops counting at its first fruitless scan.
    pub fn attempts(&self) -> u32 {
        self.attempts
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn bag(&self) -> &TileBag {
        &self.bag
    }

    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    pub fn dictionary(&self) -> &D {
        &self.dictionary
    }

    /// Full bag, empty board, back to `Idle`.
    pub fn reset(&mut self) -> Result<()> {
        self.bag.reset()?;
        self.board.clear();
        self.phase = GenerationPhase::Idle;
        self.attempts = 0;
        Ok(())
    }

    pub fn generate(&mut self) -> Result<PuzzleSnapshot> {
        self.generate_with(&mut NullSink)
    }

    /// Runs a whole session from a fresh bag and board, reporting to `sink`.
    pub fn generate_with<S: EventSink + ?Sized>(&mut self, sink: &mut S) -> Result<PuzzleSnapshot> {
        log::info!("Session {}: generating puzzle", self.session_id);
        self.reset()?;
        self.dictionary.reseed(self.rng.random::<u64>());
        sink.emit(GenerationEvent::GenerationStarted);

        self.place_first_word(sink)?;
        self.run_main_fill(sink)?;
        self.run_connector_fill(sink)?;

        let snapshot = self.finish();
        log::info!(
            "Session {}: {} tiles placed, {} left in the bag after {} attempts",
            self.session_id,
            snapshot.placed_tile_count,
            snapshot.remaining_tile_count,
            self.attempts
        );
        sink.emit(GenerationEvent::GenerationComplete {
            snapshot: snapshot.clone(),
        });
        Ok(snapshot)
    }

    /// Lays the opening word across the centre, starting at column 5 of row 7.
    ///
    /// Returns the word, or `None` when neither the oracle nor the connector
    /// list offered a usable opening.
    pub fn place_first_word<S: EventSink + ?Sized>(&mut self, sink: &mut S) -> Result<Option<String>> {
        let opening = self.choose_opening();
        if let Some(word) = &opening {
            let at = PlacementCandidate {
                row: FIRST_WORD_ROW,
                col: FIRST_WORD_COL,
                orientation: Orientation::Horizontal,
            };
            self.lay_word(word, at, sink, false)?;
            log::debug!("Session {}: opening word {}", self.session_id, word);
        } else {
            log::warn!("Session {}: no usable opening word", self.session_id);
        }
        self.phase = GenerationPhase::FirstWordPlaced;
        Ok(opening)
    }

    /// Random words at random legal anchors while the board is sparse and the bag full enough.
    pub fn run_main_fill<S: EventSink + ?Sized>(&mut self, sink: &mut S) -> Result<()> {
        self.phase = GenerationPhase::MainFill;
        let low = self.config.min_word_length.min(self.config.max_word_length);
        let high = self.config.min_word_length.max(self.config.max_word_length);

        while self.board.placed_tile_count() < self.config.main_fill_tile_limit
            && self.attempts < self.config.main_fill_attempts
            && self.bag.remaining_count() > self.config.main_fill_bag_floor
        {
            self.attempts += 1;
            let length = self.rng.random_range(low..=high);
            let word = normalize(&self.dictionary.random_word(length));
            let supply = LetterSupply::from_bag(&self.bag);
            let pool = find_all_placements(&word, &self.board, &supply, &self.dictionary);
            if pool.is_empty() {
                log::trace!("Attempt {}: no room for {}", self.attempts, word);
                continue;
            }
            let at = pool[self.rng.random_range(0..pool.len())];
            self.commit(&word, at, sink)?;
        }
        Ok(())
    }

    /// Connector words, first fit wins, until the bag is down to a hand.
    pub fn run_connector_fill<S: EventSink + ?Sized>(&mut self, sink: &mut S) -> Result<()> {
        self.phase = GenerationPhase::ConnectorFill;
        while self.bag.remaining_count() > self.config.connector_bag_floor
            && self.attempts < self.config.connector_attempts
        {
            self.attempts += 1;
            match self.find_connector() {
                Some((word, at)) => {
                    self.commit(word, at, sink)?;
                }
                None => {
                    // Nothing changed, so later scans would fail the same way.
                    log::debug!(
                        "Session {}: no connector word fits, stopping with {} tiles in the bag",
                        self.session_id,
                        self.bag.remaining_count()
                    );
                    break;
                }
            }
        }
        Ok(())
    }

    /// Renders the board and deals the hand; the session ends in `Done`.
    pub fn finish(&mut self) -> PuzzleSnapshot {
        self.phase = GenerationPhase::Done;
        PuzzleSnapshot::capture(&self.board, &self.bag, self.config.hand_size, &mut self.rng)
    }

    /// Snapshot of the current state. Board and bag are left untouched.
    pub fn current_puzzle(&self) -> PuzzleSnapshot {
        PuzzleSnapshot::capture(&self.board, &self.bag, self.config.hand_size, &mut rand::rng())
    }

    fn choose_opening(&self) -> Option<String> {
        let supply = LetterSupply::from_bag(&self.bag);
        for _ in 0..self.config.first_word_retries {
            let word = normalize(&self.dictionary.random_word(self.config.first_word_length));
            if self.is_usable_opening(&word, &supply) {
                return Some(word);
            }
        }
        CONNECTOR_WORDS
            .iter()
            .find(|word| self.is_usable_opening(word, &supply))
            .map(|word| word.to_string())
    }

    fn is_usable_opening(&self, word: &str, supply: &LetterSupply) -> bool {
        let letters: Vec<char> = word.chars().collect();
        letters.len() >= MIN_OPENING_LENGTH
            && FIRST_WORD_COL + letters.len() <= BOARD_SIZE
            && letters.iter().all(|c| c.is_ascii_uppercase())
            && supply.covers(&letters)
            && self.dictionary.is_valid_word(word)
    }

    fn find_connector(&self) -> Option<(&'static str, PlacementCandidate)> {
        let supply = LetterSupply::from_bag(&self.bag);
        for &word in CONNECTOR_WORDS {
            for orientation in Orientation::BOTH {
                let pool = find_placements(word, orientation, &self.board, &supply, &self.dictionary);
                if let Some(&first) = pool.first() {
                    return Some((word, first));
                }
            }
        }
        None
    }

    fn commit<S: EventSink + ?Sized>(
        &mut self,
        word: &str,
        at: PlacementCandidate,
        sink: &mut S,
    ) -> Result<()> {
        let placed = self.lay_word(word, at, sink, true)?;
        sink.emit(GenerationEvent::Delay {
            duration_ms: self.config.word_delay_ms,
        });
        log::debug!(
            "Session {}: {} {} at ({}, {}), {} new tiles, {} on board",
            self.session_id,
            at.orientation,
            word,
            at.row,
            at.col,
            placed,
            self.board.placed_tile_count()
        );
        Ok(())
    }

    /// Moves tiles from the bag into every empty cell of the span, then announces the word.
    fn lay_word<S: EventSink + ?Sized>(
        &mut self,
        word: &str,
        at: PlacementCandidate,
        sink: &mut S,
        announce_tiles: bool,
    ) -> Result<usize> {
        let letters: Vec<char> = word.chars().collect();
        let mut placed = 0;
        for (offset, &letter) in letters.iter().enumerate() {
            let (row, col) = at.orientation.advance(at.row, at.col, offset);
            if !self.board.is_empty_at(row, col) {
                continue;
            }
            let tile = self
                .bag
                .draw_exact(letter)
                .ok_or(ScrabblePuzzleError::SupplyMismatch { letter, row, col })?;
            self.board.place_tile(row, col, tile);
            placed += 1;

            if announce_tiles {
                sink.emit(GenerationEvent::TilePlaced {
                    row,
                    col,
                    letter,
                    points: tile.point_value,
                    word: word.to_string(),
                    orientation: at.orientation,
                    position_in_word: offset,
                    word_length: letters.len(),
                    letter_multiplier: self.board.letter_multiplier_at(row, col),
                    word_multiplier: self.board.word_multiplier_at(row, col),
                });
                sink.emit(GenerationEvent::progress(
                    self.board.placed_tile_count(),
                    self.config.target_tiles,
                ));
            }
        }
        debug_assert_eq!(
            self.board.placed_tile_count() + self.bag.remaining_count(),
            FULL_BAG_SIZE
        );

        sink.emit(GenerationEvent::WordComplete {
            word: word.to_string(),
            orientation: at.orientation,
            row: at.row,
            col: at.col,
        });
        Ok(placed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dictionary::WordDictionary;
    use crate::generator::events::EventLog;

    fn dictionary(valid: &[&str], candidates: &[&str]) -> WordDictionary {
        WordDictionary::new(
            valid.iter().map(|w| w.to_string()),
            candidates.iter().map(|w| w.to_string()),
        )
    }

    #[test]
    fn test_new_session_is_idle() {
        let generator = PuzzleGenerator::new(WordDictionary::builtin(), GeneratorConfig::with_seed(1)).unwrap();
        assert_eq!(generator.phase(), GenerationPhase::Idle);
        assert_eq!(generator.bag().remaining_count(), 100);
        assert_eq!(generator.board().placed_tile_count(), 0);
        assert_eq!(generator.attempts(), 0);
    }

    #[test]
    fn test_first_word_goes_through_centre() {
        let dict = dictionary(&["HELLO"], &["HELLO"]);
        let mut generator = PuzzleGenerator::new(&dict, GeneratorConfig::with_seed(2)).unwrap();
        let mut log = EventLog::new();

        let opening = generator.place_first_word(&mut log).unwrap();

        assert_eq!(opening.as_deref(), Some("HELLO"));
        assert_eq!(generator.phase(), GenerationPhase::FirstWordPlaced);
        let row: String = (5..10)
            .map(|col| generator.board().tile_at(7, col).unwrap().letter)
            .collect();
        assert_eq!(row, "HELLO");
        assert!(generator.board().is_center_occupied());
        assert_eq!(generator.bag().remaining_count(), 95);
        assert_eq!(
            log.events(),
            &[GenerationEvent::WordComplete {
                word: "HELLO".to_string(),
                orientation: Orientation::Horizontal,
                row: 7,
                col: 5
            }]
        );
    }

    #[test]
    fn test_unusable_opening_falls_back_to_connector() {
        // ZZZZZ cannot be supplied and is not valid; THE is the first valid connector of 3+ letters.
        let dict = dictionary(&["THE", "AT"], &["ZZZZZ"]);
        let mut generator = PuzzleGenerator::new(&dict, GeneratorConfig::with_seed(3)).unwrap();
        let opening = generator.place_first_word(&mut NullSink).unwrap();
        assert_eq!(opening.as_deref(), Some("THE"));
        assert_eq!(generator.board().tile_at(7, 7).map(|t| t.letter), Some('E'));
    }

    #[test]
    fn test_no_opening_leaves_board_empty() {
        let dict = dictionary(&[], &["QQQ"]);
        let mut generator = PuzzleGenerator::new(&dict, GeneratorConfig::with_seed(4)).unwrap();
        let snapshot = generator.generate().unwrap();
        assert_eq!(snapshot.placed_tile_count, 0);
        assert_eq!(snapshot.remaining_tile_count, 100);
        assert_eq!(snapshot.hand.len(), 7);
        assert_eq!(generator.phase(), GenerationPhase::Done);
        // 300 fruitless main-fill attempts, then one empty connector scan.
        assert_eq!(generator.attempts(), 301);
    }

    #[test]
    fn test_long_candidates_never_open() {
        let dict = dictionary(&["NEVERTHELESS", "THE"], &["NEVERTHELESS"]);
        let mut generator = PuzzleGenerator::new(&dict, GeneratorConfig::with_seed(5)).unwrap();
        let opening = generator.place_first_word(&mut NullSink).unwrap();
        assert_eq!(opening.as_deref(), Some("THE"));
    }

    #[test]
    fn test_connector_fill_takes_first_fit() {
        // Only HE is both a connector and valid here.
        let dict = dictionary(&["HELLO", "HE"], &["HELLO"]);
        let mut generator = PuzzleGenerator::new(&dict, GeneratorConfig::with_seed(6)).unwrap();
        generator.place_first_word(&mut NullSink).unwrap();

        let mut log = EventLog::new();
        generator.run_connector_fill(&mut log).unwrap();

        assert_eq!(generator.phase(), GenerationPhase::ConnectorFill);
        let words: Vec<(&str, usize, usize, Orientation)> = log
            .events()
            .iter()
            .filter_map(|e| match e {
                GenerationEvent::WordComplete {
                    word,
                    row,
                    col,
                    orientation,
                } => Some((word.as_str(), *row, *col, *orientation)),
                _ => None,
            })
            .collect();
        // First row-major horizontal fit: H beside the H of HELLO, E under it.
        assert_eq!(words[0], ("HE", 8, 4, Orientation::Horizontal));
        assert!(words.iter().all(|(word, ..)| *word == "HE"));
        assert_eq!(
            generator.board().placed_tile_count() + generator.bag().remaining_count(),
            100
        );
    }

    #[test]
    fn test_commit_event_sequence() {
        let dict = dictionary(&["HELLO", "HE"], &["HELLO"]);
        let mut generator = PuzzleGenerator::new(&dict, GeneratorConfig::with_seed(7)).unwrap();
        generator.place_first_word(&mut NullSink).unwrap();

        let mut log = EventLog::new();
        let at = PlacementCandidate {
            row: 7,
            col: 5,
            orientation: Orientation::Vertical,
        };
        generator.commit("HE", at, &mut log).unwrap();

        let names: Vec<&str> = log.events().iter().map(|e| e.name()).collect();
        assert_eq!(names, vec!["tile_placed", "progress_update", "word_complete", "delay"]);
        match &log.events()[0] {
            GenerationEvent::TilePlaced {
                row,
                col,
                letter,
                position_in_word,
                word_length,
                ..
            } => {
                assert_eq!((*row, *col, *letter), (8, 5, 'E'));
                assert_eq!((*position_in_word, *word_length), (1, 2));
            }
            other => panic!("unexpected event {:?}", other),
        }
        assert_eq!(log.events()[1], GenerationEvent::progress(6, 93));
    }

    #[test]
    fn test_missing_letter_is_an_invariant_violation() {
        let dict = dictionary(&["QI", "QIS"], &[]);
        let mut generator = PuzzleGenerator::new(&dict, GeneratorConfig::with_seed(8)).unwrap();
        let at = PlacementCandidate {
            row: 0,
            col: 0,
            orientation: Orientation::Horizontal,
        };
        generator.commit("QI", at, &mut NullSink).unwrap();
        let at = PlacementCandidate {
            row: 1,
            col: 0,
            orientation: Orientation::Horizontal,
        };
        let result = generator.commit("QI", at, &mut NullSink);
        assert!(matches!(
            result,
            Err(ScrabblePuzzleError::SupplyMismatch { letter: 'Q', row: 1, col: 0 })
        ));
    }

    #[test]
    fn test_current_puzzle_does_not_mutate() {
        let mut generator = PuzzleGenerator::new(WordDictionary::builtin(), GeneratorConfig::with_seed(9)).unwrap();
        generator.generate().unwrap();
        let board_before = generator.board().clone();
        let first = generator.current_puzzle();
        let second = generator.current_puzzle();
        assert_eq!(generator.board(), &board_before);
        assert_eq!(first.placed_tile_count, second.placed_tile_count);
        assert_eq!(first.board, second.board);
        assert_eq!(first.remaining_tile_count, generator.bag().remaining_count());
    }

    #[test]
    fn test_seed_fixes_builtin_dictionary_words() {
        let run = |seed| {
            PuzzleGenerator::new(WordDictionary::builtin(), GeneratorConfig::with_seed(seed))
                .unwrap()
                .generate()
                .unwrap()
        };
        assert_eq!(run(42), run(42));
    }
}
