use crate::docx_markdown;
use docx_rust::DocxFile;
use std::io::Cursor;

/// A DOCX archive entry held in memory.
///
/// DocxFile owns the raw data; the parsed Docx borrows from it, so we keep
/// the file and parse on demand.
pub struct DocxData {
    file: DocxFile,
}

impl DocxData {
    /// Open a DOCX document from raw bytes. The docx-rust error type does
    /// not implement std::error::Error, so failures surface as strings.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, String> {
        let file = DocxFile::from_reader(Cursor::new(bytes.to_vec()))
            .map_err(|e| format!("failed to open DOCX: {}", e))?;
        Ok(Self { file })
    }

    /// Extract the document body as markdown text.
    pub fn to_markdown(&self) -> Result<String, String> {
        let docx = self
            .file
            .parse()
            .map_err(|e| format!("failed to parse DOCX content: {}", e))?;
        Ok(docx_markdown::docx_to_markdown(&docx))
    }
}
