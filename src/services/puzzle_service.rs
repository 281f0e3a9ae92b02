// src/services/puzzle_service.rs - async front for puzzle generation

use crate::dictionary::DictionaryOracle;
use crate::generator::{ChannelSink, GenerationEvent, GeneratorConfig, PuzzleGenerator, PuzzleSnapshot};
use crate::{Result, ScrabblePuzzleError};
use std::sync::Arc;
use tokio::sync::mpsc::Receiver;
use tokio::sync::RwLock;
use tokio::task::JoinHandle;
use uuid::Uuid;

// ============================================================================
// SERVICE STATE
// ============================================================================

/// Runs generation sessions off the async runtime and keeps the most recent one.
///
/// Generation is CPU-bound, so every session runs on the blocking pool. The
/// shared dictionary is never mutated and is handed to each session by `Arc`.
pub struct PuzzleService<D> {
    dictionary: Arc<D>,
    config: GeneratorConfig,
    latest: Arc<RwLock<PuzzleGenerator<Arc<D>>>>,
}

impl<D> Clone for PuzzleService<D> {
    fn clone(&self) -> Self {
        Self {
            dictionary: Arc::clone(&self.dictionary),
            config: self.config.clone(),
            latest: Arc::clone(&self.latest),
        }
    }
}

impl<D> PuzzleService<D>
where
    D: DictionaryOracle + Send + Sync + 'static,
{
    /// Starts with an idle session: empty board, full bag.
    pub fn new(dictionary: D, config: GeneratorConfig) -> Result<Self> {
        let dictionary = Arc::new(dictionary);
        let idle = PuzzleGenerator::new(Arc::clone(&dictionary), config.clone())?;
        Ok(Self {
            dictionary,
            config,
            latest: Arc::new(RwLock::new(idle)),
        })
    }

    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    // ========================================================================
    // GENERATION
    // ========================================================================

    /// Generates one puzzle and records its session as the latest.
    pub async fn generate(&self) -> Result<PuzzleSnapshot> {
        let mut generator = self.new_session()?;
        let (generator, outcome) = tokio::task::spawn_blocking(move || {
            let outcome = generator.generate();
            (generator, outcome)
        })
        .await?;
        let snapshot = outcome?;
        *self.latest.write().await = generator;
        Ok(snapshot)
    }

    /// Starts a session that streams its events as they happen.
    ///
    /// Events go through a bounded channel of `event_buffer` entries. The
    /// handle resolves to the final snapshot; dropping the receiver does not
    /// stop generation.
    pub fn generate_animated(
        &self,
    ) -> Result<(Receiver<GenerationEvent>, JoinHandle<Result<PuzzleSnapshot>>)> {
        let mut generator = self.new_session()?;
        let (mut sink, receiver) = ChannelSink::channel(self.config.event_buffer);
        let latest = Arc::clone(&self.latest);

        let handle = tokio::spawn(async move {
            let (generator, outcome) = tokio::task::spawn_blocking(move || {
                let outcome = generator.generate_with(&mut sink);
                if sink.dropped() > 0 {
                    log::warn!("{} events dropped for a slow consumer", sink.dropped());
                }
                (generator, outcome)
            })
            .await?;
            let snapshot = outcome?;
            *latest.write().await = generator;
            Ok::<_, ScrabblePuzzleError>(snapshot)
        });
        Ok((receiver, handle))
    }

    // ========================================================================
    // QUERIES
    // ========================================================================

    /// Fresh snapshot of the latest session, with a newly sampled hand.
    pub async fn current_puzzle(&self) -> PuzzleSnapshot {
        self.latest.read().await.current_puzzle()
    }

    pub async fn latest_session_id(&self) -> Uuid {
        self.latest.read().await.session_id()
    }

    fn new_session(&self) -> Result<PuzzleGenerator<Arc<D>>> {
        PuzzleGenerator::new(Arc::clone(&self.dictionary), self.config.clone())
    }
}
