//! SQLite-based session history.
//!
//! One row per finished slideshow session. The ordered image and thumbnail
//! identifiers are stored as JSON arrays so a session can be replayed.

use std::path::Path;

use chrono::{DateTime, Utc};
use rusqlite::{params, Connection, OptionalExtension};
use tracing::{debug, info};

use super::data_dir;
use crate::error::{CoreError, HistoryError};
use crate::history::HistoryRecorder;
use crate::session::SessionSummary;

/// SQLite database holding finished sessions.
pub struct HistoryDb {
    conn: Connection,
}

/// Columns as stored, before decoding.
struct RawRow {
    id: String,
    name: String,
    image_count: usize,
    interval_sec: u64,
    rest_sec: u64,
    created_at: String,
    images: String,
    thumbnails: String,
}

const SELECT_COLUMNS: &str =
    "SELECT id, name, image_count, interval_sec, rest_sec, created_at, images, thumbnails FROM history";

impl HistoryDb {
    /// Open the database at `<data_dir>/history.db`.
    ///
    /// Creates the database file and schema if they don't exist.
    ///
    /// # Errors
    /// Returns an error if the data directory or database cannot be opened.
    pub fn open() -> Result<Self, CoreError> {
        let path = data_dir()?.join("history.db");
        Ok(Self::open_at(&path)?)
    }

    /// Open (or create) a database file at an explicit path.
    ///
    /// # Errors
    /// Returns an error if the database cannot be opened or migrated.
    pub fn open_at(path: &Path) -> Result<Self, HistoryError> {
        let conn = Connection::open(path).map_err(|source| HistoryError::OpenFailed {
            path: path.to_path_buf(),
            source,
        })?;
        let db = Self { conn };
        db.migrate()?;
        debug!(path = %path.display(), "history database opened");
        Ok(db)
    }

    /// Open an in-memory database (for tests and throwaway runs).
    ///
    /// # Errors
    /// Returns an error if the schema cannot be created.
    pub fn open_memory() -> Result<Self, HistoryError> {
        let conn = Connection::open_in_memory()?;
        let db = Self { conn };
        db.migrate()?;
        Ok(db)
    }

    fn migrate(&self) -> Result<(), rusqlite::Error> {
        self.conn.execute_batch(
            "CREATE TABLE IF NOT EXISTS history (
                id           TEXT PRIMARY KEY,
                name         TEXT NOT NULL,
                image_count  INTEGER NOT NULL,
                interval_sec INTEGER NOT NULL,
                rest_sec     INTEGER NOT NULL,
                created_at   TEXT NOT NULL,
                images       TEXT NOT NULL,
                thumbnails   TEXT NOT NULL DEFAULT '[]'
            );

            CREATE INDEX IF NOT EXISTS idx_history_created_at ON history(created_at);",
        )?;
        Ok(())
    }

    /// Look up a single session by id.
    ///
    /// # Errors
    /// Returns `HistoryError::NotFound` for unknown ids.
    pub fn get(&self, id: &str) -> Result<SessionSummary, HistoryError> {
        let raw = self
            .conn
            .query_row(&format!("{SELECT_COLUMNS} WHERE id = ?1"), params![id], read_row)
            .optional()?
            .ok_or_else(|| HistoryError::NotFound(id.to_string()))?;
        decode(raw)
    }

    pub fn count(&self) -> Result<u64, HistoryError> {
        let n = self
            .conn
            .query_row("SELECT COUNT(*) FROM history", [], |row| row.get::<_, u64>(0))?;
        Ok(n)
    }
}

impl HistoryRecorder for HistoryDb {
    fn save_history(&mut self, summary: &SessionSummary) -> Result<(), HistoryError> {
        self.conn.execute(
            "INSERT INTO history (id, name, image_count, interval_sec, rest_sec, created_at, images, thumbnails)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)",
            params![
                summary.id,
                summary.name,
                summary.image_count,
                summary.interval_sec,
                summary.rest_sec,
                summary.created_at.to_rfc3339(),
                serde_json::to_string(&summary.images)?,
                serde_json::to_string(&summary.thumbnails)?,
            ],
        )?;
        info!(id = %summary.id, "session saved to history");
        Ok(())
    }

    fn load_history(&self) -> Result<Vec<SessionSummary>, HistoryError> {
        let mut stmt = self
            .conn
            .prepare(&format!("{SELECT_COLUMNS} ORDER BY created_at DESC, rowid DESC"))?;
        let rows = stmt.query_map([], read_row)?;

        let mut out = Vec::new();
        for row in rows {
            out.push(decode(row?)?);
        }
        Ok(out)
    }

    fn delete_history(&mut self, id: &str) -> Result<(), HistoryError> {
        let n = self
            .conn
            .execute("DELETE FROM history WHERE id = ?1", params![id])?;
        if n == 0 {
            return Err(HistoryError::NotFound(id.to_string()));
        }
        Ok(())
    }

    fn update_history_name(&mut self, id: &str, new_name: &str) -> Result<(), HistoryError> {
        let n = self.conn.execute(
            "UPDATE history SET name = ?2 WHERE id = ?1",
            params![id, new_name],
        )?;
        if n == 0 {
            return Err(HistoryError::NotFound(id.to_string()));
        }
        Ok(())
    }
}

fn read_row(row: &rusqlite::Row<'_>) -> rusqlite::Result<RawRow> {
    Ok(RawRow {
        id: row.get(0)?,
        name: row.get(1)?,
        image_count: row.get(2)?,
        interval_sec: row.get(3)?,
        rest_sec: row.get(4)?,
        created_at: row.get(5)?,
        images: row.get(6)?,
        thumbnails: row.get(7)?,
    })
}

fn decode(raw: RawRow) -> Result<SessionSummary, HistoryError> {
    let created_at = DateTime::parse_from_rfc3339(&raw.created_at)
        .map_err(|e| HistoryError::QueryFailed(format!("bad created_at for {}: {e}", raw.id)))?
        .with_timezone(&Utc);
    Ok(SessionSummary {
        id: raw.id,
        name: raw.name,
        image_count: raw.image_count,
        interval_sec: raw.interval_sec,
        rest_sec: raw.rest_sec,
        created_at,
        images: serde_json::from_str(&raw.images)?,
        thumbnails: serde_json::from_str(&raw.thumbnails)?,
    })
}
