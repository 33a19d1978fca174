use chrono::{DateTime, Local, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::images::ImageRef;

/// Record of one completed run, handed to the history recorder.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionSummary {
    pub id: String,
    pub name: String,
    pub image_count: usize,
    pub interval_sec: u64,
    pub rest_sec: u64,
    pub created_at: DateTime<Utc>,
    /// Identifiers of the images shown, in playback order.
    pub images: Vec<String>,
    #[serde(default)]
    pub thumbnails: Vec<String>,
}

impl SessionSummary {
    /// Build a summary stamped with the current time.
    pub fn new(played: &[ImageRef], interval_sec: u64, rest_sec: u64) -> Self {
        let now = Utc::now();
        Self {
            id: new_id(now),
            name: default_name(now),
            image_count: played.len(),
            interval_sec,
            rest_sec,
            created_at: now,
            images: played.iter().map(ImageRef::identifier).collect(),
            thumbnails: played
                .iter()
                .filter_map(|i| i.thumbnail().map(str::to_owned))
                .collect(),
        }
    }

    /// Path references for replaying this session.
    pub fn image_refs(&self) -> Vec<ImageRef> {
        self.images.iter().map(ImageRef::from_path).collect()
    }
}

/// `session-<unix millis>-<random suffix>`; sortable and unique per run.
fn new_id(at: DateTime<Utc>) -> String {
    let suffix = Uuid::new_v4().simple().to_string();
    format!("session-{}-{}", at.timestamp_millis(), &suffix[..8])
}

fn default_name(at: DateTime<Utc>) -> String {
    format!("Session {}", at.with_timezone(&Local).format("%Y-%m-%d %H:%M:%S"))
}
