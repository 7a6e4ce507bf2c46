use crate::document::{Bucket, ClassificationResult, ClassifiedDocument, RawDocument};
use crate::metadata::extract_metadata;
use crate::section::extract_section_title;
use thiserror::Error;

/// Place every extracted document into the main-matter bucket, in input
/// order.
///
/// An earlier keyword heuristic tried to guess front/back placement from
/// chapter markers and proved unreliable across languages; placement is now
/// trusted to filename order and corrected by a human via [`move_document`].
/// Confidence is therefore always 1.0.
pub fn classify_documents(documents: Vec<RawDocument>) -> ClassificationResult {
    let metadata = extract_metadata(&documents);

    let main_matter = documents
        .into_iter()
        .enumerate()
        .map(|(index, doc)| ClassifiedDocument {
            title: extract_section_title(&doc.content),
            filename: doc.filename,
            content: doc.content,
            confidence: 1.0,
            suggested_order: index,
        })
        .collect();

    ClassificationResult {
        front_matter: Vec::new(),
        main_matter,
        back_matter: Vec::new(),
        metadata,
    }
}

#[derive(Debug, Error, PartialEq)]
pub enum MoveError {
    #[error("document {filename:?} not found in {bucket} matter")]
    NotFound { filename: String, bucket: Bucket },
}

/// Move one document between buckets, appending it to the destination.
///
/// Classification is the single source of truth: callers must re-run
/// assembly and validation afterwards rather than patching derived
/// structure by hand. All other documents and buckets are untouched.
pub fn move_document(
    mut classification: ClassificationResult,
    filename: &str,
    from: Bucket,
    to: Bucket,
) -> Result<ClassificationResult, MoveError> {
    let index = bucket_mut(&mut classification, from)
        .iter()
        .position(|doc| doc.filename == filename)
        .ok_or_else(|| MoveError::NotFound {
            filename: filename.to_string(),
            bucket: from,
        })?;

    let doc = bucket_mut(&mut classification, from).remove(index);
    bucket_mut(&mut classification, to).push(doc);
    Ok(classification)
}

fn bucket_mut(
    classification: &mut ClassificationResult,
    bucket: Bucket,
) -> &mut Vec<ClassifiedDocument> {
    match bucket {
        Bucket::Front => &mut classification.front_matter,
        Bucket::Main => &mut classification.main_matter,
        Bucket::Back => &mut classification.back_matter,
    }
}
