//! Error types for folder-to-PDF conversion.
//!
//! Each variant carries the path it failed on so the control loop can print a
//! useful message without any further context.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while turning a folder of images into a PDF.
#[derive(Debug, Error)]
pub enum ConvertError {
    /// Reading the source directory or writing the output failed.
    #[error("I/O error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// An image could not be opened or decoded.
    #[error("Failed to decode image {path}: {source}")]
    Decode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    /// An image could not be re-encoded as a PDF page.
    #[error("Failed to encode page for {path}: {source}")]
    Encode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    /// The PDF document could not be serialized.
    #[error("Failed to write PDF document {path}: {source}")]
    Pdf {
        path: PathBuf,
        #[source]
        source: lopdf::Error,
    },

    /// The finished document could not be moved into the export directory.
    #[error("Failed to save {path}: {source}")]
    Persist {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The source path has no usable base name (e.g. a filesystem root).
    #[error("Cannot derive an output name from {0}")]
    NoFolderName(PathBuf),
}

impl ConvertError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        ConvertError::Io {
            path: path.into(),
            source,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error;

    #[test]
    fn test_io_display_includes_path() {
        let err = ConvertError::io(
            "/tmp/photos",
            io::Error::new(io::ErrorKind::PermissionDenied, "denied"),
        );
        let message = err.to_string();
        assert!(message.contains("/tmp/photos"));
        assert!(message.contains("denied"));
    }

    #[test]
    fn test_io_exposes_source() {
        let err = ConvertError::io("x", io::Error::new(io::ErrorKind::NotFound, "gone"));
        assert!(err.source().is_some());
    }

    #[test]
    fn test_no_folder_name_display() {
        let err = ConvertError::NoFolderName(PathBuf::from("/"));
        assert_eq!(err.to_string(), "Cannot derive an output name from /");
        assert!(err.source().is_none());
    }
}
