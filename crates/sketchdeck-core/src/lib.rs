//! # Sketchdeck Core Library
//!
//! This library provides the playback logic for sketchdeck, a reference-image
//! slideshow for timed drawing practice. Images are shown one at a time for a
//! fixed interval, optionally separated by rest periods, and every finished
//! run is summarized for the session history.
//!
//! ## Architecture
//!
//! - **Slideshow Engine**: A caller-ticked state machine that requires the
//!   caller to invoke `tick()` once per second
//! - **Player**: An async driver that owns the one-second tick source
//! - **Images**: Image references, playlist derivation and path loading
//! - **Storage**: SQLite-based session history and TOML-based configuration
//!
//! ## Key Components
//!
//! - [`SlideshowEngine`]: Core playback state machine
//! - [`Countdown`]: One-second countdown owned by the engine
//! - [`HistoryRecorder`]: Trait for persisting finished sessions
//! - [`HistoryDb`]: SQLite history recorder
//! - [`Config`]: Application configuration management

pub mod error;
pub mod events;
pub mod history;
pub mod images;
pub mod session;
pub mod storage;
pub mod timer;

pub use error::{ConfigError, CoreError, HistoryError, ImageLoadError, ValidationError};
pub use events::Event;
pub use history::{HistoryRecorder, MemoryHistory, NoHistory};
pub use images::{ImageRef, ImageSet, ImageSource, LoadOptions, RandomSource};
pub use session::{
    Phase, Player, PlayerCommand, PlayerOutcome, SessionState, SessionSummary, SlideshowEngine,
    SlideshowSettings,
};
pub use storage::{Config, HistoryDb};
pub use timer::Countdown;
