use serde::{Deserialize, Serialize};

/// Tunables for one generation session. Defaults reproduce the standard puzzle.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    /// Seed for bag draws, word lengths, anchor choice and hand sampling.
    pub seed: Option<u64>,
    pub first_word_length: usize,
    /// Oracle draws allowed before falling back to a connector word for the opening.
    pub first_word_retries: u32,
    pub min_word_length: usize,
    pub max_word_length: usize,
    /// Main fill stops once the board holds this many tiles.
    pub main_fill_tile_limit: usize,
    pub main_fill_attempts: u32,
    /// Main fill stops once the bag is down to this many tiles.
    pub main_fill_bag_floor: usize,
    /// Attempt budget shared by main fill and connector fill.
    pub connector_attempts: u32,
    pub connector_bag_floor: usize,
    pub hand_size: usize,
    /// Nominal tile count reported in progress updates.
    pub target_tiles: usize,
    /// Pacing hint emitted after each committed word.
    pub word_delay_ms: u64,
    /// Capacity of the channel used for streamed events.
    pub event_buffer: usize,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            seed: None,
            first_word_length: 5,
            first_word_retries: 50,
            min_word_length: 3,
            max_word_length: 6,
            main_fill_tile_limit: 80,
            main_fill_attempts: 300,
            main_fill_bag_floor: 15,
            connector_attempts: 600,
            connector_bag_floor: 7,
            hand_size: 7,
            target_tiles: 93,
            word_delay_ms: 300,
            event_buffer: 1024,
        }
    }
}

impl GeneratorConfig {
    pub fn with_seed(seed: u64) -> Self {
        Self {
            seed: Some(seed),
            ..Self::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_json_keeps_defaults() {
        let config: GeneratorConfig =
            serde_json::from_str(r#"{"seed": 42, "hand_size": 5}"#).unwrap();
        assert_eq!(config.seed, Some(42));
        assert_eq!(config.hand_size, 5);
        assert_eq!(config.main_fill_attempts, 300);
        assert_eq!(config.connector_attempts, 600);
        assert_eq!(config.target_tiles, 93);
    }
}
