//! Export directory handling and output path derivation

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use super::sanitize_filename;

/// Default name of the export directory, relative to the working directory.
pub const DEFAULT_EXPORT_DIR: &str = "export";

/// Create the export directory (and any missing parents) if it does not exist.
///
/// Returns the directory path unchanged so the caller can keep it around.
pub fn ensure_export_folder(path: &Path) -> Result<PathBuf> {
    fs::create_dir_all(path)
        .with_context(|| format!("Failed to create export folder: {}", path.display()))?;
    Ok(path.to_path_buf())
}

/// Path of the PDF a folder named `folder_name` is exported to.
pub fn output_path(folder_name: &str, export_dir: &Path) -> PathBuf {
    export_dir.join(format!("{}.pdf", sanitize_filename(folder_name)))
}

/// Return the output path for `folder_name` if a file already exists there.
pub fn existing_output(folder_name: &str, export_dir: &Path) -> Option<PathBuf> {
    let path = output_path(folder_name, export_dir);
    path.exists().then_some(path)
}

/// Base name of a source folder, used to name its PDF.
///
/// Trailing separators are ignored. Paths like `.` have no file name of their
/// own, so they are resolved against the filesystem first.
pub fn folder_name(folder: &Path) -> Option<String> {
    if let Some(name) = folder.file_name() {
        return Some(name.to_string_lossy().into_owned());
    }
    folder
        .canonicalize()
        .ok()?
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_output_path_is_sanitized() {
        let path = output_path("scan: part 1?", Path::new("export"));
        assert_eq!(path, PathBuf::from("export/scan_ part 1_.pdf"));
    }

    #[test]
    fn test_folder_name_ignores_trailing_separator() {
        assert_eq!(folder_name(Path::new("photos/trip/")), Some("trip".to_string()));
    }

    #[test]
    fn test_folder_name_of_root_is_none() {
        assert_eq!(folder_name(Path::new("/")), None);
    }
}
