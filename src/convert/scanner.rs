//! Folder scanning - find the images that become pages

use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use super::ConvertError;

/// File extensions (lowercase) accepted as pages.
pub const SUPPORTED_EXTENSIONS: [&str; 3] = ["jpg", "jpeg", "png"];

/// Check whether a file name ends in a supported image extension
/// (case-insensitive). A bare `.jpg` counts, and names that are not valid
/// UTF-8 are matched on their lossy form.
pub fn is_supported_image(path: &Path) -> bool {
    let Some(name) = path.file_name() else {
        return false;
    };
    let name = name.to_string_lossy().to_lowercase();
    name.rsplit_once('.')
        .is_some_and(|(_, ext)| SUPPORTED_EXTENSIONS.contains(&ext))
}

/// List the supported images directly inside `dir`, sorted by file name.
///
/// Subdirectories are not descended into, and entries that are not regular
/// files are skipped even when their name looks like an image.
pub fn list_images(dir: &Path) -> Result<Vec<PathBuf>, ConvertError> {
    let entries = fs::read_dir(dir).map_err(|e| ConvertError::io(dir, e))?;

    let mut images = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|e| ConvertError::io(dir, e))?;
        let path = entry.path();
        if !is_supported_image(&path) {
            continue;
        }
        if !path.is_file() {
            debug!(path = %path.display(), "skipping non-file entry");
            continue;
        }
        images.push(path);
    }

    images.sort_by(|a, b| a.file_name().cmp(&b.file_name()));
    debug!(dir = %dir.display(), count = images.len(), "scanned folder");

    Ok(images)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_supported_extensions_case_insensitive() {
        assert!(is_supported_image(Path::new("a.jpg")));
        assert!(is_supported_image(Path::new("a.JPEG")));
        assert!(is_supported_image(Path::new("a.Png")));
    }

    #[test]
    fn test_unsupported_extensions() {
        assert!(!is_supported_image(Path::new("notes.txt")));
        assert!(!is_supported_image(Path::new("scan.gif")));
        assert!(!is_supported_image(Path::new("jpg")));
        assert!(!is_supported_image(Path::new("archive.png.zip")));
    }

    #[test]
    fn test_dotfile_and_non_utf8_names() {
        assert!(is_supported_image(Path::new(".jpg")));
        assert!(is_supported_image(Path::new("album/.PNG")));

        #[cfg(unix)]
        {
            use std::ffi::OsStr;
            use std::os::unix::ffi::OsStrExt;
            assert!(is_supported_image(Path::new(OsStr::from_bytes(b"caf\xe9.jpg"))));
        }
    }
}
