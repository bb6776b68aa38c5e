//! Local persistence for tracker state.
//!
//! State lives in a single `SQLite` database holding one key-value table.
//! Each slot holds one JSON-encoded entity group:
//!
//! ```text
//! slot
//!   metrics      → {"steps": .., "caloriesBurned": .., "waterIntake": ..}
//!   activityLog  → [{"id": .., "name": .., "duration": .., "calories": .., "time": ..}, ..]
//!   mealData     → {"breakfast": [..], "lunch": [..], "dinner": [..]}
//! ```

mod slot;

use std::{fs, io, path::PathBuf};

use rusqlite::Connection;

pub use slot::Slot;

/// Errors that can occur during storage operations.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("database error: {0}")]
    Sqlite(#[from] rusqlite::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = core::result::Result<T, StorageError>;

const SCHEMA: &str = "CREATE TABLE IF NOT EXISTS slot (
    key   TEXT PRIMARY KEY,
    value TEXT NOT NULL
)";

/// Key-value store backed by `SQLite`.
pub struct Storage {
    conn: Connection,
}

impl Storage {
    /// Opens (or creates) the database at `path`.
    ///
    /// The parent directory is created if it doesn't exist.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        Self::init(Connection::open(&path)?)
    }

    /// Opens a private database that lives only as long as this value.
    pub fn in_memory() -> Result<Self> {
        Self::init(Connection::open_in_memory()?)
    }

    /// Returns the default database path: `~/.fittrack/fittrack.sqlite`.
    pub fn default_path() -> Option<PathBuf> {
        dirs::home_dir().map(|h| h.join(".fittrack").join("fittrack.sqlite"))
    }

    fn init(conn: Connection) -> Result<Self> {
        conn.execute(SCHEMA, [])?;
        Ok(Self { conn })
    }

    /// Makes every later read and write fail.
    #[cfg(test)]
    pub(crate) fn break_for_test(&self) {
        self.conn.execute("DROP TABLE slot", []).unwrap();
    }
}
