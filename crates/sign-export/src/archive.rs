//! ZIP packaging of a finished batch.

use std::io::{Cursor, Write};

use zip::CompressionMethod;
use zip::ZipWriter;
use zip::write::SimpleFileOptions;

use crate::ExportError;
use crate::artifact::ExportArtifact;

/// Package the ordered artifact collection into one deflate-compressed ZIP.
///
/// Entries keep the artifact order. Failure propagates; artifacts already
/// produced are not individually recoverable from this pipeline.
pub fn archive(artifacts: &[ExportArtifact]) -> Result<Vec<u8>, ExportError> {
    let mut writer = ZipWriter::new(Cursor::new(Vec::new()));
    let options = SimpleFileOptions::default().compression_method(CompressionMethod::Deflated);

    for artifact in artifacts {
        writer.start_file(artifact.file_name.as_str(), options)?;
        writer.write_all(&artifact.bytes)?;
    }

    Ok(writer.finish()?.into_inner())
}
