//! Tab-scoped storage areas for the persisted session record.
//!
//! A storage area is a small string-keyed map owned by one browser tab. Two
//! implementations are provided: [`MemoryStorage`], which disappears with its
//! owner, and [`RedbStorage`], which keeps a tab's entries in its own ReDB file
//! so a command-line "tab" survives between process invocations.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use redb::{Database, TableDefinition};
use tracing::{debug, info};

use crate::error::{Result, UserError};

const STORAGE_TABLE: TableDefinition<&str, &str> = TableDefinition::new("session_storage");

/// A per-tab key/value area holding serialized records.
pub trait StorageArea {
    /// Read the value stored under `key`.
    fn get(&self, key: &str) -> Result<Option<String>>;

    /// Store `value` under `key`, replacing any previous value.
    fn set(&mut self, key: &str, value: &str) -> Result<()>;

    /// Remove `key`. Removing a missing key is not an error.
    fn remove(&mut self, key: &str) -> Result<()>;
}

/// Storage area living only as long as the value itself.
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    entries: HashMap<String, String>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl StorageArea for MemoryStorage {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<()> {
        self.entries.remove(key);
        Ok(())
    }
}

/// Storage area backed by a ReDB file, one file per tab.
pub struct RedbStorage {
    db: Database,
    path: PathBuf,
}

impl RedbStorage {
    /// Open (or create) the storage area at `path`.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref().to_path_buf();

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        debug!("Opening tab storage at: {:?}", path);
        let db = Database::create(&path)?;

        let write_txn = db.begin_write()?;
        {
            let _ = write_txn.open_table(STORAGE_TABLE)?;
        }
        write_txn.commit()?;

        Ok(Self { db, path })
    }

    /// Open the storage area for the tab called `tab` inside `dir`.
    pub fn open_tab(dir: impl AsRef<Path>, tab: &str) -> Result<Self> {
        let valid = !tab.is_empty()
            && tab
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_');
        if !valid {
            return Err(UserError::InvalidTabName(tab.to_string()));
        }

        Self::open(dir.as_ref().join(format!("{}.redb", tab)))
    }

    /// Path of the backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Drop every entry, as when the tab is closed.
    pub fn clear(&mut self) -> Result<()> {
        let write_txn = self.db.begin_write()?;
        {
            write_txn.delete_table(STORAGE_TABLE)?;
            let _ = write_txn.open_table(STORAGE_TABLE)?;
        }
        write_txn.commit()?;

        info!("Cleared tab storage at {:?}", self.path);
        Ok(())
    }
}

impl StorageArea for RedbStorage {
    fn get(&self, key: &str) -> Result<Option<String>> {
        let read_txn = self.db.begin_read()?;
        let table = read_txn.open_table(STORAGE_TABLE)?;
        let value = table.get(key)?.map(|v| v.value().to_string());
        Ok(value)
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        let write_txn = self.db.begin_write()?;
        {
            let mut table = write_txn.open_table(STORAGE_TABLE)?;
            table.insert(key, value)?;
        }
        write_txn.commit()?;
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<()> {
        let write_txn = self.db.begin_write()?;
        {
            let mut table = write_txn.open_table(STORAGE_TABLE)?;
            table.remove(key)?;
        }
        write_txn.commit()?;
        Ok(())
    }
}
