use crate::document::{
    content_key, BookStructure, Bucket, ClassificationResult, ClassifiedDocument, Metadata,
    Outline,
};
use crate::vocabulary::{vocabulary_for, SectionVocabulary};
use chrono::{Datelike, Utc};
use std::collections::BTreeMap;

/// Assemble the canonical book structure from a classification.
///
/// Front matter is repaired so a title-page entry sits at index 0 and a
/// copyright entry at index 1, auto-generating either when the source
/// documents provide neither. Main and back matter pass through in
/// classifier order. Pure: the same classification always yields the same
/// structure, and missing data degrades to placeholders instead of failing.
pub fn convert_to_book_structure(result: &ClassificationResult) -> BookStructure {
    let vocab = vocabulary_for(&result.metadata.language);

    let mut front: Vec<String> = result
        .front_matter
        .iter()
        .map(|doc| doc.title.clone())
        .collect();
    ensure_title_page(&mut front, vocab);
    ensure_copyright(&mut front, vocab);

    let main: Vec<String> = result
        .main_matter
        .iter()
        .map(|doc| doc.title.clone())
        .collect();
    let back: Vec<String> = result
        .back_matter
        .iter()
        .map(|doc| doc.title.clone())
        .collect();

    let mut content = BTreeMap::new();
    for name in &front {
        content.insert(
            content_key(Bucket::Front, name),
            resolve_front_content(name, &result.front_matter, vocab, &result.metadata),
        );
    }
    // Order is authoritative for main and back matter: content maps 1:1 by
    // position, no fuzzy matching involved.
    for (name, doc) in main.iter().zip(&result.main_matter) {
        content.insert(content_key(Bucket::Main, name), doc.content.clone());
    }
    for (name, doc) in back.iter().zip(&result.back_matter) {
        content.insert(content_key(Bucket::Back, name), doc.content.clone());
    }

    BookStructure {
        structure: Outline { front, main, back },
        content,
        metadata: result.metadata.clone(),
    }
}

/// Move the first title-page-equivalent name to index 0, or insert the
/// localized label there when none exists.
fn ensure_title_page(front: &mut Vec<String>, vocab: &SectionVocabulary) {
    match front.iter().position(|name| is_title_page_name(name, vocab)) {
        Some(0) => {}
        Some(index) => {
            let name = front.remove(index);
            front.insert(0, name);
        }
        None => front.insert(0, vocab.title_page().to_string()),
    }
}

/// Move the first copyright-equivalent name to index 1, or insert the
/// localized label there. Index 0 is never considered: it already holds the
/// title-page slot, and when several names match, the first in list order
/// wins.
fn ensure_copyright(front: &mut Vec<String>, vocab: &SectionVocabulary) {
    let found = front
        .iter()
        .enumerate()
        .skip(1)
        .find(|(_, name)| is_copyright_name(name, vocab))
        .map(|(index, _)| index);

    match found {
        Some(1) => {}
        Some(index) => {
            let name = front.remove(index);
            front.insert(1, name);
        }
        None => front.insert(1, vocab.copyright().to_string()),
    }
}

fn is_title_page_name(name: &str, vocab: &SectionVocabulary) -> bool {
    let lowered = name.to_lowercase();
    lowered.contains("title page") || lowered == vocab.title_page().to_lowercase()
}

fn is_copyright_name(name: &str, vocab: &SectionVocabulary) -> bool {
    let lowered = name.to_lowercase();
    lowered.contains("copyright")
        || lowered.contains("rights")
        || lowered == vocab.copyright().to_lowercase()
}

/// Resolution ladder for front-matter content: exact title match, fuzzy
/// match, generated placeholder for the essential slots, empty string.
fn resolve_front_content(
    name: &str,
    front_docs: &[ClassifiedDocument],
    vocab: &SectionVocabulary,
    metadata: &Metadata,
) -> String {
    if let Some(doc) = front_docs.iter().find(|doc| doc.title == name) {
        return doc.content.clone();
    }
    if let Some(doc) = front_docs
        .iter()
        .find(|doc| fuzzy_title_match(&doc.title, name, vocab))
    {
        return doc.content.clone();
    }
    if is_title_page_name(name, vocab) {
        return render_title_page(metadata);
    }
    if is_copyright_name(name, vocab) {
        return render_copyright(metadata);
    }
    String::new()
}

fn fuzzy_title_match(a: &str, b: &str, vocab: &SectionVocabulary) -> bool {
    let a_lower = a.to_lowercase();
    let b_lower = b.to_lowercase();
    a_lower.contains(&b_lower)
        || b_lower.contains(&a_lower)
        || (is_title_page_name(a, vocab) && is_title_page_name(b, vocab))
        || (is_copyright_name(a, vocab) && is_copyright_name(b, vocab))
}

fn render_title_page(metadata: &Metadata) -> String {
    format!("# {}\n\nBy {}", metadata.title, metadata.author)
}

fn render_copyright(metadata: &Metadata) -> String {
    format!(
        "Copyright © {} {}\n\nAll rights reserved. No part of \"{}\" may be \
         reproduced in any form without written permission from the author.",
        Utc::now().year(),
        metadata.author,
        metadata.title,
    )
}
