//! Export artifacts: named byte buffers produced by the pipeline.

/// File name of the combined batch archive.
pub const ARCHIVE_FILE_NAME: &str = "floor-sign-set.zip";

/// One exported file: name, declared MIME type, encoded content.
///
/// Artifacts are transient; they live until written to disk or handed to
/// the archiver.
#[derive(Clone, Debug)]
pub struct ExportArtifact {
    pub file_name: String,
    pub mime: &'static str,
    pub bytes: Vec<u8>,
}

impl ExportArtifact {
    pub fn new(file_name: String, mime: &'static str, bytes: Vec<u8>) -> Self {
        Self {
            file_name,
            mime,
            bytes,
        }
    }
}

/// Name for a single-sign export: `floor-sign-<text>.<ext>`.
pub fn single_file_name(text: &str, extension: &str) -> String {
    format!("floor-sign-{text}.{extension}")
}

/// Name for one batch entry: `sign-<symbol>.png`.
pub fn batch_file_name(symbol: &str) -> String {
    format!("sign-{symbol}.png")
}
