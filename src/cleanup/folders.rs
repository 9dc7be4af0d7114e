//! Folders kept after conversion, waiting for batch cleanup

use std::path::{Path, PathBuf};

use indexmap::IndexSet;

/// Insertion-ordered set of source folders the user chose to keep.
///
/// Paths are canonicalized on insert when possible, so `photos` and
/// `./photos/` end up as a single entry.
#[derive(Debug, Default, Clone)]
pub struct ProcessedFolders {
    folders: IndexSet<PathBuf>,
}

impl ProcessedFolders {
    pub fn new() -> Self {
        Self::default()
    }

    /// Remember a folder. Returns `false` if it was already remembered.
    pub fn remember(&mut self, folder: &Path) -> bool {
        self.folders.insert(normalize(folder))
    }

    /// Forget a folder. Returns `true` if it was remembered.
    pub fn forget(&mut self, folder: &Path) -> bool {
        self.folders.shift_remove(folder) || self.folders.shift_remove(&normalize(folder))
    }

    pub fn contains(&self, folder: &Path) -> bool {
        self.folders.contains(folder) || self.folders.contains(&normalize(folder))
    }

    pub fn len(&self) -> usize {
        self.folders.len()
    }

    pub fn is_empty(&self) -> bool {
        self.folders.is_empty()
    }

    /// Remembered folders in the order they were added
    pub fn iter(&self) -> impl Iterator<Item = &PathBuf> {
        self.folders.iter()
    }

    /// Owned snapshot, for callers that mutate the set while walking it
    pub fn to_vec(&self) -> Vec<PathBuf> {
        self.folders.iter().cloned().collect()
    }
}

fn normalize(folder: &Path) -> PathBuf {
    folder
        .canonicalize()
        .unwrap_or_else(|_| folder.to_path_buf())
}
