//! Progress events and the sinks that receive them.
//!
//! Sinks are fire-and-forget: `emit` never fails and never blocks, so a slow
//! or vanished consumer cannot change what gets generated.

use crate::game::orientation::Orientation;
use crate::generator::snapshot::PuzzleSnapshot;
use serde::Serialize;
use tokio::sync::mpsc::{self, error::TrySendError};

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case", rename_all_fields = "camelCase")]
pub enum GenerationEvent {
    GenerationStarted,
    ProgressUpdate {
        tiles_placed: usize,
        total_target: usize,
        percentage: u32,
    },
    WordComplete {
        word: String,
        orientation: Orientation,
        row: usize,
        col: usize,
    },
    TilePlaced {
        row: usize,
        col: usize,
        letter: char,
        points: u32,
        word: String,
        orientation: Orientation,
        position_in_word: usize,
        word_length: usize,
        letter_multiplier: u8,
        word_multiplier: u8,
    },
    /// Pacing hint for animated consumers; the generator itself never waits.
    Delay { duration_ms: u64 },
    GenerationComplete { snapshot: PuzzleSnapshot },
}

impl GenerationEvent {
    pub fn progress(tiles_placed: usize, total_target: usize) -> Self {
        let percentage = if total_target == 0 {
            100
        } else {
            (tiles_placed * 100 / total_target).min(100) as u32
        };
        GenerationEvent::ProgressUpdate {
            tiles_placed,
            total_target,
            percentage,
        }
    }

    /// Wire name of the event kind.
    pub fn name(&self) -> &'static str {
        match self {
            GenerationEvent::GenerationStarted => "generation_started",
            GenerationEvent::ProgressUpdate { .. } => "progress_update",
            GenerationEvent::WordComplete { .. } => "word_complete",
            GenerationEvent::TilePlaced { .. } => "tile_placed",
            GenerationEvent::Delay { .. } => "delay",
            GenerationEvent::GenerationComplete { .. } => "generation_complete",
        }
    }
}

pub trait EventSink {
    fn emit(&mut self, event: GenerationEvent);
}

impl<F: FnMut(GenerationEvent)> EventSink for F {
    fn emit(&mut self, event: GenerationEvent) {
        self(event)
    }
}

/// Discards everything.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullSink;

impl EventSink for NullSink {
    fn emit(&mut self, _event: GenerationEvent) {}
}

/// Keeps every event in memory, in emission order.
#[derive(Debug, Default, Clone)]
pub struct EventLog {
    events: Vec<GenerationEvent>,
}

impl EventLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> &[GenerationEvent] {
        &self.events
    }

    pub fn into_events(self) -> Vec<GenerationEvent> {
        self.events
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}

impl EventSink for EventLog {
    fn emit(&mut self, event: GenerationEvent) {
        self.events.push(event);
    }
}

/// Forwards events into a bounded channel without ever waiting on it.
///
/// A full buffer drops the event; a closed receiver silences the sink.
#[derive(Debug)]
pub struct ChannelSink {
    sender: mpsc::Sender<GenerationEvent>,
    dropped: usize,
    closed: bool,
}

impl ChannelSink {
    pub fn new(sender: mpsc::Sender<GenerationEvent>) -> Self {
        Self {
            sender,
            dropped: 0,
            closed: false,
        }
    }

    /// Bounded channel of `capacity` events (at least 1) with its sink.
    pub fn channel(capacity: usize) -> (Self, mpsc::Receiver<GenerationEvent>) {
        let (sender, receiver) = mpsc::channel(capacity.max(1));
        (Self::new(sender), receiver)
    }

    pub fn dropped(&self) -> usize {
        self.dropped
    }

    pub fn is_closed(&self) -> bool {
        self.closed
    }
}

impl EventSink for ChannelSink {
    fn emit(&mut self, event: GenerationEvent) {
        if self.closed {
            return;
        }
        match self.sender.try_send(event) {
            Ok(()) => {}
            Err(TrySendError::Full(event)) => {
                if self.dropped == 0 {
                    log::warn!("Event buffer full, dropping {} events", event.name());
                }
                self.dropped += 1;
            }
            Err(TrySendError::Closed(_)) => {
                log::warn!("Event receiver closed, no further events will be sent");
                self.closed = true;
            }
        }
    }
}
