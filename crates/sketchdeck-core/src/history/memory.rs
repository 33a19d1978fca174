use crate::error::HistoryError;
use crate::session::SessionSummary;

use super::HistoryRecorder;

/// In-process recorder. Keeps summaries in insertion order.
#[derive(Debug, Clone, Default)]
pub struct MemoryHistory {
    entries: Vec<SessionSummary>,
    /// When set, every save fails with `HistoryError::Locked`.
    fail_saves: bool,
}

impl MemoryHistory {
    pub fn new() -> Self {
        Self::default()
    }

    /// A recorder whose saves always fail; for exercising error paths.
    pub fn failing() -> Self {
        Self {
            entries: Vec::new(),
            fail_saves: true,
        }
    }

    pub fn entries(&self) -> &[SessionSummary] {
        &self.entries
    }

    fn position(&self, id: &str) -> Result<usize, HistoryError> {
        self.entries
            .iter()
            .position(|e| e.id == id)
            .ok_or_else(|| HistoryError::NotFound(id.to_string()))
    }
}

impl HistoryRecorder for MemoryHistory {
    fn save_history(&mut self, summary: &SessionSummary) -> Result<(), HistoryError> {
        if self.fail_saves {
            return Err(HistoryError::Locked);
        }
        self.entries.push(summary.clone());
        Ok(())
    }

    fn load_history(&self) -> Result<Vec<SessionSummary>, HistoryError> {
        Ok(self.entries.iter().rev().cloned().collect())
    }

    fn delete_history(&mut self, id: &str) -> Result<(), HistoryError> {
        let pos = self.position(id)?;
        self.entries.remove(pos);
        Ok(())
    }

    fn update_history_name(&mut self, id: &str, new_name: &str) -> Result<(), HistoryError> {
        let pos = self.position(id)?;
        self.entries[pos].name = new_name.to_string();
        Ok(())
    }
}
