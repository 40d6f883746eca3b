//! Thread-safe handle around a [`Directory`].
//!
//! Clones share the same underlying directory. A poisoned lock is treated
//! like any other failure: mutations report `false`/`0` and reads come back
//! empty.

use crate::directory::Directory;
use crate::models::Record;
use std::sync::{Arc, RwLock};

/// A cheaply clonable, lock-guarded directory.
#[derive(Clone, Default)]
pub struct SharedDirectory {
    inner: Arc<RwLock<Directory>>,
}

impl SharedDirectory {
    /// Create an empty shared directory.
    pub fn new() -> Self {
        Self::default()
    }

    /// Wrap an existing directory.
    pub fn from_directory(directory: Directory) -> Self {
        Self {
            inner: Arc::new(RwLock::new(directory)),
        }
    }

    fn read<T>(&self, default: T, f: impl FnOnce(&Directory) -> T) -> T {
        match self.inner.read() {
            Ok(directory) => f(&directory),
            Err(_) => {
                tracing::warn!("Directory lock poisoned");
                default
            }
        }
    }

    fn write<T>(&self, default: T, f: impl FnOnce(&mut Directory) -> T) -> T {
        match self.inner.write() {
            Ok(mut directory) => f(&mut directory),
            Err(_) => {
                tracing::warn!("Directory lock poisoned");
                default
            }
        }
    }

    /// Insert a new record; `false` if invalid or already present.
    pub fn add(&self, phone: &str, name: &str, email: Option<&str>) -> bool {
        self.write(false, |d| d.add(phone, name, email))
    }

    /// Update an existing record with the directory's email rules.
    pub fn update(&self, phone: &str, name: &str, email: Option<&str>) -> bool {
        self.write(false, |d| d.update(phone, name, email))
    }

    /// Copies of the records matching `query`.
    pub fn find_entries(&self, query: &str) -> Vec<Record> {
        self.read(Vec::new(), |d| d.find_entries(query))
    }

    /// Formatted records matching `query`, ordered by name.
    pub fn find(&self, query: &str) -> Vec<String> {
        self.read(Vec::new(), |d| d.find(query))
    }

    /// Remove records matching `query` and return how many were removed.
    pub fn find_and_remove(&self, query: &str) -> usize {
        self.write(0, |d| d.find_and_remove(query))
    }

    /// Runs the whole import under one write lock.
    pub fn import_from_csv(&self, csv: &str) -> usize {
        self.write(0, |d| d.import_from_csv(csv))
    }

    /// Copy of the record stored under `phone`.
    pub fn get(&self, phone: &str) -> Option<Record> {
        self.read(None, |d| d.get(phone))
    }

    /// Number of stored records.
    pub fn len(&self) -> usize {
        self.read(0, Directory::len)
    }

    /// Whether the directory has no records.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Copy of the current directory contents.
    pub fn snapshot(&self) -> Directory {
        self.read(Directory::new(), Directory::clone)
    }
}

impl std::fmt::Debug for SharedDirectory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SharedDirectory")
            .field("entries", &self.len())
            .finish()
    }
}
