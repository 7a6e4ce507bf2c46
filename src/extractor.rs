//! Archive extraction: unpack an uploaded zip into decoded text documents.
//!
//! The one hard failure in the pipeline lives here — an archive with zero
//! supported entries. Individual corrupt or undecodable entries are logged
//! and skipped so a single bad file never sinks the whole import.

use crate::docx_reader::DocxData;
use crate::document::RawDocument;
use crate::normalize::{normalize_text, repair_filename};
use std::fs::File;
use std::io::{Read, Seek};
use std::path::Path;
use thiserror::Error;
use tracing::{debug, warn};

#[derive(Debug, Error)]
pub enum ImportError {
    #[error("archive contains no importable documents (.md, .txt, .docx)")]
    NoDocuments,

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("archive error: {0}")]
    Zip(#[from] zip::result::ZipError),
}

/// Text-bearing entry formats the importer understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SupportedFormat {
    Markdown,
    PlainText,
    Docx,
}

impl SupportedFormat {
    /// Detect a supported format from an entry name, case-insensitively.
    pub fn from_name(name: &str) -> Option<Self> {
        let lowered = name.to_lowercase();
        if lowered.ends_with(".md") {
            Some(SupportedFormat::Markdown)
        } else if lowered.ends_with(".txt") {
            Some(SupportedFormat::PlainText)
        } else if lowered.ends_with(".docx") {
            Some(SupportedFormat::Docx)
        } else {
            None
        }
    }

    /// Decode entry bytes to text. Failures are reported as strings and
    /// handled by skipping the entry.
    fn decode(self, bytes: &[u8]) -> Result<String, String> {
        match self {
            SupportedFormat::Markdown | SupportedFormat::PlainText => {
                Ok(String::from_utf8_lossy(bytes).into_owned())
            }
            SupportedFormat::Docx => DocxData::from_bytes(bytes)?.to_markdown(),
        }
    }
}

/// Extract all supported documents from an archive on disk.
pub fn extract_archive(path: &Path) -> Result<Vec<RawDocument>, ImportError> {
    let file = File::open(path)?;
    extract_documents(file)
}

/// Extract all supported documents from an archive reader, in entry order.
pub fn extract_documents<R: Read + Seek>(reader: R) -> Result<Vec<RawDocument>, ImportError> {
    let mut archive = zip::ZipArchive::new(reader)?;
    let mut documents = Vec::new();

    for index in 0..archive.len() {
        let mut entry = match archive.by_index(index) {
            Ok(entry) => entry,
            Err(err) => {
                warn!(index, %err, "skipping unreadable archive entry");
                continue;
            }
        };
        if entry.is_dir() {
            continue;
        }

        let filename = repair_filename(entry.name());
        if is_archive_junk(&filename) {
            continue;
        }
        let Some(format) = SupportedFormat::from_name(&filename) else {
            debug!(%filename, "skipping unsupported entry");
            continue;
        };

        let mut bytes = Vec::new();
        if let Err(err) = entry.read_to_end(&mut bytes) {
            warn!(%filename, %err, "skipping corrupt archive entry");
            continue;
        }

        match format.decode(&bytes) {
            Ok(text) => documents.push(RawDocument::new(filename, normalize_text(&text))),
            Err(err) => warn!(%filename, %err, "skipping undecodable entry"),
        }
    }

    if documents.is_empty() {
        return Err(ImportError::NoDocuments);
    }
    Ok(documents)
}

/// macOS zip droppings: resource-fork directories and `._` shadow files.
fn is_archive_junk(name: &str) -> bool {
    name.split('/').any(|part| part == "__MACOSX")
        || name
            .rsplit('/')
            .next()
            .is_some_and(|base| base.starts_with("._"))
}
