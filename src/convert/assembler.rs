//! PDF assembly - one JPEG-encoded page per source image
//!
//! Every image is decoded, flattened to 8-bit RGB and re-encoded as a baseline
//! JPEG, which PDF readers can display directly through the `DCTDecode` filter.
//! Pages are sized at 72 dpi, so a 800x600 image becomes an 800x600 pt page.
//!
//! The document is written to a temporary file next to its destination and only
//! moved into place once complete. The final move refuses to replace an
//! existing file. The temporary file is opened with the usual `0o666` mode so
//! the umask decides the final permissions, as for any other written file.

use std::fs;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use image::codecs::jpeg::JpegEncoder;
use image::io::Reader as ImageReader;
use image::ColorType;
use lopdf::content::{Content, Operation};
use lopdf::{dictionary, Document, Object, ObjectId, Stream};
use tempfile::{Builder, NamedTempFile};
use tracing::debug;

use super::ConvertError;

/// PDF version written into the document header.
const PDF_VERSION: &str = "1.5";

/// Resource name of the single image drawn on each page.
const PAGE_IMAGE_NAME: &str = "Im0";

/// A decoded image re-encoded as JPEG, ready to be embedded as a page.
#[derive(Debug)]
pub struct PageImage {
    pub width: u32,
    pub height: u32,
    pub jpeg: Vec<u8>,
}

/// Decode `path`, drop any alpha channel, and encode it as JPEG at `quality`.
pub fn load_page(path: &Path, quality: u8) -> Result<PageImage, ConvertError> {
    let decoded = ImageReader::open(path)
        .map_err(|e| ConvertError::io(path, e))?
        .with_guessed_format()
        .map_err(|e| ConvertError::io(path, e))?
        .decode()
        .map_err(|source| ConvertError::Decode {
            path: path.to_path_buf(),
            source,
        })?;

    let rgb = decoded.to_rgb8();
    let (width, height) = rgb.dimensions();

    let mut jpeg = Vec::new();
    JpegEncoder::new_with_quality(&mut jpeg, quality)
        .encode(rgb.as_raw(), width, height, ColorType::Rgb8)
        .map_err(|source| ConvertError::Encode {
            path: path.to_path_buf(),
            source,
        })?;

    debug!(
        path = %path.display(),
        width,
        height,
        bytes = jpeg.len(),
        "encoded page"
    );

    Ok(PageImage {
        width,
        height,
        jpeg,
    })
}

/// Add one page showing `page` full-bleed and return its object id.
fn add_page(
    doc: &mut Document,
    pages_id: ObjectId,
    page: PageImage,
) -> Result<ObjectId, lopdf::Error> {
    let width = i64::from(page.width);
    let height = i64::from(page.height);

    let image_id = doc.add_object(Stream::new(
        dictionary! {
            "Type" => "XObject",
            "Subtype" => "Image",
            "Width" => width,
            "Height" => height,
            "ColorSpace" => "DeviceRGB",
            "BitsPerComponent" => 8,
            "Filter" => "DCTDecode",
        },
        page.jpeg,
    ));

    let content = Content {
        operations: vec![
            Operation::new("q", vec![]),
            Operation::new(
                "cm",
                vec![
                    width.into(),
                    0.into(),
                    0.into(),
                    height.into(),
                    0.into(),
                    0.into(),
                ],
            ),
            Operation::new("Do", vec![Object::Name(PAGE_IMAGE_NAME.as_bytes().to_vec())]),
            Operation::new("Q", vec![]),
        ],
    };
    let content_id = doc.add_object(Stream::new(dictionary! {}, content.encode()?));

    Ok(doc.add_object(dictionary! {
        "Type" => "Page",
        "Parent" => pages_id,
        "MediaBox" => vec![0.into(), 0.into(), width.into(), height.into()],
        "Contents" => content_id,
        "Resources" => dictionary! {
            "XObject" => dictionary! {
                PAGE_IMAGE_NAME => image_id,
            },
        },
    }))
}

/// Build an in-memory PDF with one page per image, in the given order.
pub fn build_document(images: &[PathBuf], quality: u8) -> Result<Document, ConvertError> {
    let mut doc = Document::with_version(PDF_VERSION);
    let pages_id = doc.new_object_id();

    let mut kids: Vec<Object> = Vec::with_capacity(images.len());
    for path in images {
        let page = load_page(path, quality)?;
        let page_id = add_page(&mut doc, pages_id, page).map_err(|source| ConvertError::Pdf {
            path: path.to_path_buf(),
            source,
        })?;
        kids.push(page_id.into());
    }

    let count = kids.len() as i64;
    doc.objects.insert(
        pages_id,
        Object::Dictionary(dictionary! {
            "Type" => "Pages",
            "Kids" => kids,
            "Count" => count,
        }),
    );

    let catalog_id = doc.add_object(dictionary! {
        "Type" => "Catalog",
        "Pages" => pages_id,
    });
    doc.trailer.set("Root", catalog_id);
    doc.compress();

    Ok(doc)
}

/// Create the temporary file the document is serialized into.
#[allow(unused_mut)]
fn create_temp_in(dir: &Path) -> std::io::Result<NamedTempFile> {
    let mut builder = Builder::new();
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        builder.permissions(fs::Permissions::from_mode(0o666));
    }
    builder.tempfile_in(dir)
}

/// Write `images` as consecutive pages of a new PDF at `output`.
///
/// Returns the number of pages written. Fails with [`ConvertError::Persist`]
/// if `output` appeared while the document was being written.
pub fn write_pdf(images: &[PathBuf], output: &Path, quality: u8) -> Result<usize, ConvertError> {
    let mut doc = build_document(images, quality)?;

    let dir = output
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."));
    fs::create_dir_all(dir).map_err(|e| ConvertError::io(dir, e))?;

    let temp = create_temp_in(dir).map_err(|e| ConvertError::io(dir, e))?;
    {
        let mut writer = BufWriter::new(temp.as_file());
        doc.save_to(&mut writer).map_err(|e| ConvertError::Pdf {
            path: output.to_path_buf(),
            source: lopdf::Error::from(e),
        })?;
        writer.flush().map_err(|e| ConvertError::io(temp.path(), e))?;
    }

    temp.persist_noclobber(output)
        .map_err(|e| ConvertError::Persist {
            path: output.to_path_buf(),
            source: e.error,
        })?;

    Ok(images.len())
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{Rgba, RgbaImage};
    use tempfile::TempDir;

    #[test]
    fn test_load_page_drops_alpha() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("alpha.png");
        RgbaImage::from_pixel(4, 3, Rgba([10, 20, 30, 0]))
            .save(&path)
            .unwrap();

        let page = load_page(&path, 100).unwrap();
        assert_eq!((page.width, page.height), (4, 3));
        // JPEG SOI marker
        assert_eq!(&page.jpeg[..2], &[0xFF, 0xD8]);
    }

    #[test]
    fn test_load_page_rejects_garbage() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("broken.jpg");
        fs::write(&path, b"definitely not an image").unwrap();

        let err = load_page(&path, 100).unwrap_err();
        assert!(matches!(err, ConvertError::Decode { .. }));
    }

    #[test]
    fn test_build_document_page_count() {
        let dir = TempDir::new().unwrap();
        let mut paths = Vec::new();
        for i in 0..2 {
            let path = dir.path().join(format!("{}.png", i));
            RgbaImage::new(2, 2).save(&path).unwrap();
            paths.push(path);
        }

        let doc = build_document(&paths, 90).unwrap();
        assert_eq!(doc.get_pages().len(), 2);
    }
}
