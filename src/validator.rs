use crate::document::{BookStructure, ValidationResult};
use crate::metadata::{DEFAULT_AUTHOR, DEFAULT_TITLE};
use std::collections::HashSet;

/// Check an assembled book for importability.
///
/// Errors block the import: an empty book, or the same section name
/// appearing twice anywhere across the three buckets. Everything else —
/// placeholder title or author, an empty main matter — is a warning for the
/// user to resolve by hand. Pure and total.
pub fn validate_import(book: &BookStructure) -> ValidationResult {
    let mut errors = Vec::new();
    let mut warnings = Vec::new();

    if book.metadata.title == DEFAULT_TITLE {
        warnings.push(format!(
            "No book title detected; using the placeholder \"{}\"",
            DEFAULT_TITLE
        ));
    }
    if book.metadata.author == DEFAULT_AUTHOR {
        warnings.push(format!(
            "No author detected; using the placeholder \"{}\"",
            DEFAULT_AUTHOR
        ));
    }
    if book.structure.main.is_empty() {
        warnings.push("Main matter is empty; the book has no chapters".to_string());
    }

    if book.structure.section_count() == 0 {
        errors.push("No sections found; there is nothing to import".to_string());
    }

    let mut seen = HashSet::new();
    let mut reported = HashSet::new();
    for name in book.structure.all_names() {
        if !seen.insert(name) && reported.insert(name) {
            errors.push(format!("Duplicate section name: \"{}\"", name));
        }
    }

    ValidationResult {
        is_valid: errors.is_empty(),
        errors,
        warnings,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::{Metadata, Outline};
    use std::collections::BTreeMap;

    fn book(front: &[&str], main: &[&str], back: &[&str]) -> BookStructure {
        BookStructure {
            structure: Outline {
                front: front.iter().map(|s| s.to_string()).collect(),
                main: main.iter().map(|s| s.to_string()).collect(),
                back: back.iter().map(|s| s.to_string()).collect(),
            },
            content: BTreeMap::new(),
            metadata: Metadata {
                title: "A Real Title".to_string(),
                author: "Jane Doe".to_string(),
                language: "en".to_string(),
                total_sections: 0,
            },
        }
    }

    #[test]
    fn test_empty_book_is_blocked() {
        let result = validate_import(&book(&[], &[], &[]));
        assert!(!result.is_valid);
        assert!(!result.errors.is_empty());
    }

    #[test]
    fn test_duplicate_names_are_blocked_and_named() {
        let result = validate_import(&book(
            &["Title Page", "Copyright"],
            &["Intro", "Intro"],
            &[],
        ));
        assert!(!result.is_valid);
        assert!(result.errors.iter().any(|e| e.contains("Intro")));
    }

    #[test]
    fn test_duplicates_across_buckets_are_caught() {
        let result = validate_import(&book(
            &["Title Page", "Copyright", "Notes"],
            &["Chapter 1"],
            &["Notes"],
        ));
        assert!(!result.is_valid);
        assert!(result.errors.iter().any(|e| e.contains("Notes")));
    }

    #[test]
    fn test_triple_duplicate_reported_once() {
        let result = validate_import(&book(
            &["Title Page", "Copyright"],
            &["Intro", "Intro", "Intro"],
            &[],
        ));
        let mentions = result.errors.iter().filter(|e| e.contains("Intro")).count();
        assert_eq!(mentions, 1);
    }

    #[test]
    fn test_placeholder_metadata_warns_but_does_not_block() {
        let mut b = book(&["Title Page", "Copyright"], &["Chapter 1"], &[]);
        b.metadata.title = DEFAULT_TITLE.to_string();
        b.metadata.author = DEFAULT_AUTHOR.to_string();
        let result = validate_import(&b);
        assert!(result.is_valid);
        assert_eq!(result.warnings.len(), 2);
    }

    #[test]
    fn test_empty_main_matter_warns_but_does_not_block() {
        let result = validate_import(&book(&["Title Page", "Copyright"], &[], &[]));
        assert!(result.is_valid);
        assert!(result
            .warnings
            .iter()
            .any(|w| w.contains("Main matter is empty")));
    }

    #[test]
    fn test_clean_book_passes_without_findings() {
        let result = validate_import(&book(
            &["Title Page", "Copyright"],
            &["Chapter 1", "Chapter 2"],
            &["Notes"],
        ));
        assert!(result.is_valid);
        assert!(result.errors.is_empty());
        assert!(result.warnings.is_empty());
    }
}
