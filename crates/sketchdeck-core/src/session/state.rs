use serde::{Deserialize, Serialize};

/// Playback phase of a slideshow session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Phase {
    Idle,
    Displaying,
    Resting,
    Paused,
    Finished,
}

impl Phase {
    /// Only these phases have a running countdown.
    pub fn is_playing(self) -> bool {
        matches!(self, Phase::Displaying | Phase::Resting)
    }
}

/// Point-in-time view of the engine, for callers that poll.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionState {
    pub phase: Phase,
    /// Set while `phase` is `Paused`: the phase playback resumes into.
    pub paused_from: Option<Phase>,
    pub index: usize,
    pub remaining_secs: u64,
    pub is_playing: bool,
    pub playlist_len: usize,
}
