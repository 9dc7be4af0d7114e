//! Convert module - turns a folder of images into a single PDF

pub mod assembler;
pub mod error;
pub mod export;
pub mod sanitize;
pub mod scanner;

use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, info};

pub use assembler::{build_document, load_page, write_pdf, PageImage};
pub use error::ConvertError;
pub use export::*;
pub use sanitize::*;
pub use scanner::*;

/// Highest JPEG quality, used unless configured otherwise.
pub const MAX_QUALITY: u8 = 100;

/// Options for a single folder conversion
#[derive(Debug, Clone, Copy)]
pub struct ConvertOptions {
    /// JPEG quality (1-100) each page is encoded with
    pub quality: u8,
}

impl Default for ConvertOptions {
    fn default() -> Self {
        Self {
            quality: MAX_QUALITY,
        }
    }
}

/// Details of a PDF that was just written
#[derive(Debug, Clone)]
pub struct ConversionReport {
    pub output: PathBuf,
    pub pages: usize,
    pub sources: Vec<PathBuf>,
    pub bytes: u64,
}

/// What a conversion attempt ended with, short of an error
#[derive(Debug, Clone)]
pub enum ConversionOutcome {
    /// A new PDF was written
    Created(ConversionReport),
    /// A PDF for this folder is already in the export directory; nothing was written
    AlreadyExists(PathBuf),
    /// The folder holds no supported images; nothing was written
    NoImages,
}

/// Convert every supported image in `source` into one PDF inside `export_dir`.
///
/// An existing export is never overwritten: when the target PDF is already
/// present the folder is not even scanned.
pub fn convert_folder(
    source: &Path,
    export_dir: &Path,
    options: &ConvertOptions,
) -> Result<ConversionOutcome, ConvertError> {
    let name = folder_name(source).ok_or_else(|| ConvertError::NoFolderName(source.to_path_buf()))?;

    if let Some(existing) = existing_output(&name, export_dir) {
        debug!(path = %existing.display(), "output already exists");
        return Ok(ConversionOutcome::AlreadyExists(existing));
    }

    let images = list_images(source)?;
    if images.is_empty() {
        debug!(source = %source.display(), "no images found");
        return Ok(ConversionOutcome::NoImages);
    }

    let output = output_path(&name, export_dir);
    let pages = write_pdf(&images, &output, options.quality)?;
    let bytes = fs::metadata(&output).map(|m| m.len()).unwrap_or(0);

    info!(
        output = %output.display(),
        pages,
        bytes,
        "PDF written"
    );

    Ok(ConversionOutcome::Created(ConversionReport {
        output,
        pages,
        sources: images,
        bytes,
    }))
}
