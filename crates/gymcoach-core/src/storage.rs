//! Persistent storage using redb.
//!
//! Holds:
//! - The logged-in user record (the local auth flag)
//! - Past analysis summaries

use crate::error::CoachError;
use crate::types::{AnalysisRecord, User};
use parking_lot::RwLock;
use redb::{Database, ReadableTable, TableDefinition};
use std::path::Path;
use std::sync::Arc;

const SESSION_TABLE: TableDefinition<&str, &[u8]> = TableDefinition::new("session");
const ANALYSES_TABLE: TableDefinition<&str, &[u8]> = TableDefinition::new("analyses");

const USER_KEY: &str = "user";

/// Storage layer using redb for ACID-compliant persistence
#[derive(Clone)]
pub struct Storage {
    db: Arc<RwLock<Database>>,
}

impl Storage {
    /// Create a new storage instance at the given path.
    ///
    /// Creates the parent directory and all tables if missing.
    pub fn new(path: impl AsRef<Path>) -> Result<Self, CoachError> {
        let path = path.as_ref();

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let db = Database::create(path)?;

        let write_txn = db.begin_write()?;
        {
            let _ = write_txn.open_table(SESSION_TABLE)?;
            let _ = write_txn.open_table(ANALYSES_TABLE)?;
        }
        write_txn.commit()?;

        Ok(Self {
            db: Arc::new(RwLock::new(db)),
        })
    }

    // ═══════════════════════════════════════════════════════════════════════
    // Session
    // ═══════════════════════════════════════════════════════════════════════

    pub fn save_user(&self, user: &User) -> Result<(), CoachError> {
        let db = self.db.read();
        let write_txn = db.begin_write()?;
        {
            let mut table = write_txn.open_table(SESSION_TABLE)?;
            let data = serde_json::to_vec(user)?;
            table.insert(USER_KEY, data.as_slice())?;
        }
        write_txn.commit()?;
        Ok(())
    }

    /// Load the persisted user, if any.
    ///
    /// A corrupt record reads as logged out rather than failing startup.
    pub fn load_user(&self) -> Result<Option<User>, CoachError> {
        let db = self.db.read();
        let read_txn = db.begin_read()?;
        let table = read_txn.open_table(SESSION_TABLE)?;

        match table.get(USER_KEY)? {
            Some(v) => match serde_json::from_slice::<User>(v.value()) {
                Ok(user) => Ok(Some(user)),
                Err(e) => {
                    tracing::warn!("Ignoring unreadable session record: {}", e);
                    Ok(None)
                }
            },
            None => Ok(None),
        }
    }

    pub fn clear_user(&self) -> Result<(), CoachError> {
        let db = self.db.read();
        let write_txn = db.begin_write()?;
        {
            let mut table = write_txn.open_table(SESSION_TABLE)?;
            table.remove(USER_KEY)?;
        }
        write_txn.commit()?;
        Ok(())
    }

    // ═══════════════════════════════════════════════════════════════════════
    // Analysis history
    // ═══════════════════════════════════════════════════════════════════════

    pub fn save_analysis(&self, record: &AnalysisRecord) -> Result<(), CoachError> {
        let db = self.db.read();
        let write_txn = db.begin_write()?;
        {
            let mut table = write_txn.open_table(ANALYSES_TABLE)?;
            let data = serde_json::to_vec(record)?;
            let key = record.id.to_string();
            table.insert(key.as_str(), data.as_slice())?;
        }
        write_txn.commit()?;
        Ok(())
    }

    /// All stored analyses, newest first.
    pub fn list_analyses(&self) -> Result<Vec<AnalysisRecord>, CoachError> {
        let db = self.db.read();
        let read_txn = db.begin_read()?;
        let table = read_txn.open_table(ANALYSES_TABLE)?;

        // Record ids are monotonic ULIDs, so key order is creation order.
        let mut records = Vec::new();
        for entry in table.iter()?.rev() {
            let (_, value) = entry?;
            let record: AnalysisRecord = serde_json::from_slice(value.value())?;
            records.push(record);
        }
        Ok(records)
    }

    pub fn delete_analysis(&self, id: &str) -> Result<bool, CoachError> {
        let db = self.db.read();
        let write_txn = db.begin_write()?;
        let existed = {
            let mut table = write_txn.open_table(ANALYSES_TABLE)?;
            let removed = table.remove(id)?;
            removed.is_some()
        };
        write_txn.commit()?;
        Ok(existed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn record(exercise: &str) -> AnalysisRecord {
        AnalysisRecord::new(exercise, "lifter@example.com", 3, Some(42.0), Some(7), "ok")
    }

    #[test]
    fn test_user_roundtrip() {
        let dir = tempdir().unwrap();
        let storage = Storage::new(dir.path().join("test.redb")).unwrap();

        assert!(storage.load_user().unwrap().is_none());
        storage.save_user(&User::new("lifter@example.com")).unwrap();
        assert_eq!(
            storage.load_user().unwrap().map(|u| u.email),
            Some("lifter@example.com".to_string())
        );

        storage.clear_user().unwrap();
        assert!(storage.load_user().unwrap().is_none());
    }

    #[test]
    fn test_user_persists_across_reopen() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("test.redb");
        {
            let storage = Storage::new(&path).unwrap();
            storage.save_user(&User::new("lifter@example.com")).unwrap();
        }
        let storage = Storage::new(&path).unwrap();
        assert!(storage.load_user().unwrap().is_some());
    }

    #[test]
    fn test_analyses_newest_first() {
        let dir = tempdir().unwrap();
        let storage = Storage::new(dir.path().join("test.redb")).unwrap();

        let first = record("Squat");
        let second = record("Deadlift");
        storage.save_analysis(&first).unwrap();
        storage.save_analysis(&second).unwrap();

        let listed = storage.list_analyses().unwrap();
        assert_eq!(listed.len(), 2);
        assert_eq!(listed[0].exercise_name, "Deadlift");
        assert_eq!(listed[1].exercise_name, "Squat");

        assert!(storage.delete_analysis(&first.id.to_string()).unwrap());
        assert!(!storage.delete_analysis(&first.id.to_string()).unwrap());
        assert_eq!(storage.list_analyses().unwrap().len(), 1);
    }

    #[test]
    fn test_back_to_back_analyses_list_in_reverse_order() {
        let dir = tempdir().unwrap();
        let storage = Storage::new(dir.path().join("test.redb")).unwrap();

        let names: Vec<String> = (0..50).map(|i| format!("ex{i}")).collect();
        for name in &names {
            storage.save_analysis(&record(name)).unwrap();
        }

        let listed: Vec<String> = storage
            .list_analyses()
            .unwrap()
            .into_iter()
            .map(|r| r.exercise_name)
            .collect();
        let expected: Vec<String> = names.into_iter().rev().collect();
        assert_eq!(listed, expected);
    }
}
