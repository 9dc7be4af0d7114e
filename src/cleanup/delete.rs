//! Source folder deletion

use std::fs;
use std::path::Path;

use anyhow::Result;
use tracing::{info, warn};

use crate::cli::Prompter;
use crate::utils::{print_error, print_info, print_success, print_warning};

/// Result of a single folder deletion attempt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeleteOutcome {
    /// The folder and everything in it was removed
    Deleted,
    /// The user answered no; nothing was touched
    Declined,
    /// The path is no longer a directory
    Missing,
    /// Removal failed; the folder may be partially deleted
    Failed,
}

impl DeleteOutcome {
    /// Whether the folder is gone from disk afterwards
    pub fn is_gone(self) -> bool {
        matches!(self, DeleteOutcome::Deleted | DeleteOutcome::Missing)
    }
}

/// Recursively remove `folder` without asking.
///
/// Errors are reported to the console and never propagated.
pub fn remove_folder(folder: &Path) -> DeleteOutcome {
    if !folder.is_dir() {
        print_warning(&format!("Folder no longer exists: {}", folder.display()));
        return DeleteOutcome::Missing;
    }

    print_info(&format!("Deleting {}...", folder.display()));
    match fs::remove_dir_all(folder) {
        Ok(()) => {
            info!(folder = %folder.display(), "folder deleted");
            print_success("Folder deleted successfully");
            DeleteOutcome::Deleted
        }
        Err(e) => {
            warn!(folder = %folder.display(), error = %e, "folder deletion failed");
            print_error(&format!("Error deleting folder: {}", e));
            DeleteOutcome::Failed
        }
    }
}

/// Ask for confirmation, then recursively remove `folder`.
///
/// Only prompt I/O errors are returned; removal failures are reported and
/// folded into [`DeleteOutcome::Failed`].
pub fn delete_with_confirmation(prompter: &mut dyn Prompter, folder: &Path) -> Result<DeleteOutcome> {
    let name = folder
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| folder.display().to_string());

    if !prompter.confirm(&format!("Delete original folder '{}'?", name))? {
        return Ok(DeleteOutcome::Declined);
    }

    Ok(remove_folder(folder))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_remove_folder_recursive() {
        let dir = TempDir::new().unwrap();
        let folder = dir.path().join("album");
        fs::create_dir_all(folder.join("nested")).unwrap();
        fs::write(folder.join("nested").join("a.jpg"), b"x").unwrap();

        assert_eq!(remove_folder(&folder), DeleteOutcome::Deleted);
        assert!(!folder.exists());
    }

    #[test]
    fn test_remove_missing_folder() {
        let dir = TempDir::new().unwrap();
        let outcome = remove_folder(&dir.path().join("never-existed"));
        assert_eq!(outcome, DeleteOutcome::Missing);
        assert!(outcome.is_gone());
    }

    #[test]
    fn test_failed_and_declined_are_not_gone() {
        assert!(!DeleteOutcome::Failed.is_gone());
        assert!(!DeleteOutcome::Declined.is_gone());
    }
}
