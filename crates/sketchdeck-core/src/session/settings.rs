use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// Per-run playback options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SlideshowSettings {
    /// Seconds each image stays on screen. Must be positive.
    #[serde(default = "default_interval_sec")]
    pub interval_sec: u64,
    /// Seconds of blank screen between images; 0 disables resting.
    #[serde(default = "default_rest_sec")]
    pub rest_sec: u64,
    /// Shuffle the playlist on every fresh start.
    #[serde(default)]
    pub randomize: bool,
    /// Play at most this many images; 0 means no limit.
    #[serde(default)]
    pub image_count: usize,
}

fn default_interval_sec() -> u64 {
    60
}
fn default_rest_sec() -> u64 {
    10
}

impl Default for SlideshowSettings {
    fn default() -> Self {
        Self {
            interval_sec: default_interval_sec(),
            rest_sec: default_rest_sec(),
            randomize: false,
            image_count: 0,
        }
    }
}

impl SlideshowSettings {
    /// # Errors
    /// Returns an error if `interval_sec` is zero.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.interval_sec == 0 {
            return Err(ValidationError::NotPositive {
                field: "interval_sec".into(),
            });
        }
        Ok(())
    }
}
