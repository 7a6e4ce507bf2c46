use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// A decoded text document as it came out of the uploaded archive.
///
/// Constructed only at the extraction boundary; the rest of the pipeline
/// treats it as immutable.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawDocument {
    /// Archive path of the entry, after encoding repair
    pub filename: String,
    /// Decoded, normalized, trimmed text body
    pub content: String,
}

impl RawDocument {
    pub fn new(filename: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            filename: filename.into(),
            content: content.into(),
        }
    }
}

/// A document placed into a matter bucket by the classifier.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassifiedDocument {
    pub filename: String,
    pub content: String,
    /// Human-readable section name derived from the content
    pub title: String,
    /// Classification certainty in [0, 1]. The current policy trusts
    /// filename order, so this is always 1.0; the consuming editor still
    /// renders it.
    pub confidence: f32,
    /// Position the classifier assigned within its bucket
    pub suggested_order: usize,
}

/// Inferred book-level metadata.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Metadata {
    pub title: String,
    pub author: String,
    /// ISO-639-1-ish language code, "en" when nothing was recognized
    pub language: String,
    pub total_sections: usize,
}

/// The three matter buckets plus inferred metadata. The union of the three
/// lists is always exactly the input document set — no loss, no duplication —
/// including after any move between buckets.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassificationResult {
    pub front_matter: Vec<ClassifiedDocument>,
    pub main_matter: Vec<ClassifiedDocument>,
    pub back_matter: Vec<ClassifiedDocument>,
    pub metadata: Metadata,
}

impl ClassificationResult {
    /// Total documents across all three buckets
    pub fn document_count(&self) -> usize {
        self.front_matter.len() + self.main_matter.len() + self.back_matter.len()
    }
}

/// One of the three matter buckets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Bucket {
    Front,
    Main,
    Back,
}

impl fmt::Display for Bucket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Bucket::Front => "front",
            Bucket::Main => "main",
            Bucket::Back => "back",
        };
        f.write_str(s)
    }
}

/// Key into [`BookStructure::content`] for a section in a given bucket.
pub fn content_key(bucket: Bucket, name: &str) -> String {
    format!("{}:{}", bucket, name)
}

/// Ordered section names per bucket.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Outline {
    pub front: Vec<String>,
    pub main: Vec<String>,
    pub back: Vec<String>,
}

impl Outline {
    pub fn section_count(&self) -> usize {
        self.front.len() + self.main.len() + self.back.len()
    }

    /// All section names in bucket order: front, main, back
    pub fn all_names(&self) -> impl Iterator<Item = &String> {
        self.front.iter().chain(&self.main).chain(&self.back)
    }
}

/// The assembled book: outline, section contents, and metadata.
///
/// Every outline name has a corresponding content key; `front[0]` is always
/// a title-page-equivalent entry and `front[1]` a copyright-equivalent one.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BookStructure {
    pub structure: Outline,
    pub content: BTreeMap<String, String>,
    pub metadata: Metadata,
}

impl BookStructure {
    /// Content of the named section, empty when the key is absent
    pub fn section_content(&self, bucket: Bucket, name: &str) -> &str {
        self.content
            .get(&content_key(bucket, name))
            .map(String::as_str)
            .unwrap_or("")
    }
}

/// Outcome of validating an assembled book. Warnings never block the
/// import; errors do.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValidationResult {
    pub is_valid: bool,
    pub errors: Vec<String>,
    pub warnings: Vec<String>,
}
