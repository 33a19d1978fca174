use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::session::{Phase, SessionSummary};

/// Every state change in the engine produces an Event.
/// Front ends render from them; the CLI prints them as JSON lines.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Event {
    ImagesLoaded {
        count: usize,
        at: DateTime<Utc>,
    },
    SessionStarted {
        playlist_len: usize,
        interval_sec: u64,
        rest_sec: u64,
        /// Identifier of the first image.
        image: String,
        at: DateTime<Utc>,
    },
    ImageShown {
        index: usize,
        image: String,
        duration_secs: u64,
        at: DateTime<Utc>,
    },
    RestStarted {
        /// Index of the image that was just hidden.
        index: usize,
        duration_secs: u64,
        at: DateTime<Utc>,
    },
    Paused {
        from: Phase,
        remaining_secs: u64,
        at: DateTime<Utc>,
    },
    Resumed {
        phase: Phase,
        remaining_secs: u64,
        at: DateTime<Utc>,
    },
    /// Per-second progress while playing.
    Tick {
        phase: Phase,
        index: usize,
        remaining_secs: u64,
        at: DateTime<Utc>,
    },
    SessionFinished {
        summary: SessionSummary,
        /// False when the run was ended early.
        completed: bool,
        at: DateTime<Utc>,
    },
    SessionReset {
        at: DateTime<Utc>,
    },
}
