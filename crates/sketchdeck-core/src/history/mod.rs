//! History recorder collaborator.
//!
//! The engine only ever calls [`HistoryRecorder::save_history`], once per
//! finished run. The remaining operations serve the surrounding application
//! (listing, deleting and renaming past sessions).

mod memory;

pub use memory::MemoryHistory;

use crate::error::HistoryError;
use crate::session::SessionSummary;

pub trait HistoryRecorder {
    /// Persist a finished session.
    fn save_history(&mut self, summary: &SessionSummary) -> Result<(), HistoryError>;

    /// All stored sessions, newest first.
    fn load_history(&self) -> Result<Vec<SessionSummary>, HistoryError>;

    fn delete_history(&mut self, id: &str) -> Result<(), HistoryError>;

    fn update_history_name(&mut self, id: &str, new_name: &str) -> Result<(), HistoryError>;
}

/// Recorder that drops everything, for runs with history turned off.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoHistory;

impl HistoryRecorder for NoHistory {
    fn save_history(&mut self, _summary: &SessionSummary) -> Result<(), HistoryError> {
        Ok(())
    }

    fn load_history(&self) -> Result<Vec<SessionSummary>, HistoryError> {
        Ok(Vec::new())
    }

    fn delete_history(&mut self, id: &str) -> Result<(), HistoryError> {
        Err(HistoryError::NotFound(id.to_string()))
    }

    fn update_history_name(&mut self, id: &str, _new_name: &str) -> Result<(), HistoryError> {
        Err(HistoryError::NotFound(id.to_string()))
    }
}

impl<H: HistoryRecorder + ?Sized> HistoryRecorder for Box<H> {
    fn save_history(&mut self, summary: &SessionSummary) -> Result<(), HistoryError> {
        (**self).save_history(summary)
    }

    fn load_history(&self) -> Result<Vec<SessionSummary>, HistoryError> {
        (**self).load_history()
    }

    fn delete_history(&mut self, id: &str) -> Result<(), HistoryError> {
        (**self).delete_history(id)
    }

    fn update_history_name(&mut self, id: &str, new_name: &str) -> Result<(), HistoryError> {
        (**self).update_history_name(id, new_name)
    }
}
