mod engine;
pub mod player;
mod settings;
mod state;
mod summary;

pub use engine::SlideshowEngine;
pub use player::{Player, PlayerCommand, PlayerOutcome};
pub use settings::SlideshowSettings;
pub use state::{Phase, SessionState};
pub use summary::SessionSummary;
