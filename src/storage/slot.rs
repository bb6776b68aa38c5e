//! Slot storage: save, load, and clear named JSON blobs.
//!
//! Every write replaces the whole slot. A slot that was never written, or
//! whose contents no longer parse, loads as absent.

use rusqlite::OptionalExtension;
use serde::{Serialize, de::DeserializeOwned};

use super::{Result, Storage};

/// A named storage location holding one entity group.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Slot {
    Metrics,
    ActivityLog,
    MealData,
}

impl Slot {
    pub const ALL: [Self; 3] = [Self::Metrics, Self::ActivityLog, Self::MealData];

    pub fn key(self) -> &'static str {
        match self {
            Self::Metrics => "metrics",
            Self::ActivityLog => "activityLog",
            Self::MealData => "mealData",
        }
    }
}

impl Storage {
    /// Serializes `value` and overwrites the slot with it.
    pub fn save<T: Serialize>(&self, slot: Slot, value: &T) -> Result<()> {
        let json = serde_json::to_string(value)?;
        self.conn.execute(
            "INSERT OR REPLACE INTO slot (key, value) VALUES (?1, ?2)",
            rusqlite::params![slot.key(), json],
        )?;
        Ok(())
    }

    /// Writes several slots in one transaction: all land or none do.
    pub fn save_snapshot(&self, slots: &[(Slot, String)]) -> Result<()> {
        let tx = self.conn.unchecked_transaction()?;
        for (slot, json) in slots {
            tx.execute(
                "INSERT OR REPLACE INTO slot (key, value) VALUES (?1, ?2)",
                rusqlite::params![slot.key(), json],
            )?;
        }
        tx.commit()?;
        Ok(())
    }

    /// Loads and deserializes a slot.
    ///
    /// Returns `None` if the slot is unset. Malformed contents are logged and
    /// also treated as unset.
    pub fn load<T: DeserializeOwned>(&self, slot: Slot) -> Result<Option<T>> {
        let Some(json) = self.load_raw(slot)? else {
            return Ok(None);
        };
        match serde_json::from_str(&json) {
            Ok(value) => Ok(Some(value)),
            Err(e) => {
                tracing::warn!(slot = slot.key(), error = %e, "ignoring malformed slot");
                Ok(None)
            }
        }
    }

    /// The stored text of a slot, undecoded.
    pub fn load_raw(&self, slot: Slot) -> Result<Option<String>> {
        let json = self
            .conn
            .query_row(
                "SELECT value FROM slot WHERE key = ?1",
                [slot.key()],
                |row| row.get::<_, String>(0),
            )
            .optional()?;
        Ok(json)
    }

    /// Removes a slot. Idempotent: does nothing if it was never set.
    pub fn clear(&self, slot: Slot) -> Result<()> {
        self.conn.execute("DELETE FROM slot WHERE key = ?1", [slot.key()])?;
        Ok(())
    }

    /// Removes every slot in one transaction.
    pub fn clear_all(&self) -> Result<()> {
        let tx = self.conn.unchecked_transaction()?;
        for slot in Slot::ALL {
            tx.execute("DELETE FROM slot WHERE key = ?1", [slot.key()])?;
        }
        tx.commit()?;
        Ok(())
    }
}
