//! sign-export: turns rendered signs into files.
//!
//! Raster encoding (PNG/JPEG), deterministic artifact naming, the
//! sequential batch pipeline with progress reporting, and ZIP packaging of
//! a finished batch.

pub mod archive;
pub mod artifact;
pub mod batch;
pub mod encode;

pub use archive::archive;
pub use artifact::{ARCHIVE_FILE_NAME, ExportArtifact, batch_file_name, single_file_name};
pub use batch::BatchExporter;
pub use encode::{RasterFormat, encode_target};

use thiserror::Error;

/// Structural export failures. Unlike font degradation these abort the
/// operation in progress and propagate to the caller; nothing here retries.
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("image encoding failed: {0}")]
    Encode(#[from] image::ImageError),
    #[error("archive packaging failed: {0}")]
    Archive(#[from] zip::result::ZipError),
    #[error(transparent)]
    Io(#[from] std::io::Error),
}
