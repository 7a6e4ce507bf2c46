use crate::document::{Metadata, RawDocument};
use lazy_static::lazy_static;
use regex::Regex;

/// Placeholder title when no candidate line is found.
pub const DEFAULT_TITLE: &str = "Untitled Book";
/// Placeholder author when no candidate line is found.
pub const DEFAULT_AUTHOR: &str = "Unknown Author";
/// Language used when no function words are recognized.
pub const DEFAULT_LANGUAGE: &str = "en";

/// Substrings that disqualify a line from being the book title; these mark
/// copyright boilerplate and Spanish bylines.
const TITLE_BLOCKLIST: [&str; 4] = ["copyright", "©", "derechos", "por "];

lazy_static! {
    /// "By Jane Doe" / "Por Juana García"
    static ref BYLINE: Regex = Regex::new(r"(?i)^(?:by|por)\s+(.+)$").unwrap();
    /// Bare two-word Title-Case name, accented Latin letters included
    static ref TWO_WORD_NAME: Regex = Regex::new(r"^\p{Lu}\p{Ll}+\s+\p{Lu}\p{Ll}+$").unwrap();
}

/// Function-word markers per detectable language, checked in this order.
const LANGUAGE_MARKERS: [(&str, &[&str]); 4] = [
    ("es", &["el", "la", "de", "que"]),
    ("fr", &["le", "de", "et"]),
    ("de", &["der", "die", "und"]),
    ("pt", &["o", "a", "de", "que"]),
];

/// Minimum content length before a document participates in language
/// detection.
const LANGUAGE_MIN_CONTENT: usize = 50;

/// Infer book-level metadata from the raw documents.
///
/// Pure and order-sensitive: the first qualifying title and author line
/// across all documents win, while the language guess is overwritten by
/// each later matching document. Absent signals degrade to placeholders;
/// this never fails.
pub fn extract_metadata(documents: &[RawDocument]) -> Metadata {
    let mut title: Option<String> = None;
    let mut author: Option<String> = None;
    let mut language: Option<&'static str> = None;

    for doc in documents {
        for line in doc.content.lines() {
            let line = line.trim();
            if line.is_empty() {
                continue;
            }
            if title.is_none() {
                if let Some(candidate) = title_candidate(line) {
                    title = Some(candidate);
                }
            }
            if author.is_none() {
                if let Some(name) = author_candidate(line) {
                    author = Some(name);
                }
            }
            if title.is_some() && author.is_some() {
                break;
            }
        }

        if doc.content.chars().count() > LANGUAGE_MIN_CONTENT {
            if let Some(lang) = detect_language(&doc.content) {
                // Last matching document wins
                language = Some(lang);
            }
        }
    }

    Metadata {
        title: title.unwrap_or_else(|| DEFAULT_TITLE.to_string()),
        author: author.unwrap_or_else(|| DEFAULT_AUTHOR.to_string()),
        language: language.unwrap_or(DEFAULT_LANGUAGE).to_string(),
        total_sections: documents.len(),
    }
}

fn title_candidate(line: &str) -> Option<String> {
    if line.starts_with('#') {
        return None;
    }
    let len = line.chars().count();
    if len <= 3 || len >= 100 {
        return None;
    }
    let lowered = line.to_lowercase();
    if TITLE_BLOCKLIST.iter().any(|marker| lowered.contains(marker)) {
        return None;
    }
    // A byline is an author signal, not a title
    if BYLINE.is_match(line) {
        return None;
    }
    Some(line.to_string())
}

fn author_candidate(line: &str) -> Option<String> {
    if let Some(caps) = BYLINE.captures(line) {
        let name = caps[1].trim();
        if !name.is_empty() && name.chars().count() < 50 {
            return Some(name.to_string());
        }
    }
    if line.chars().count() < 30 && TWO_WORD_NAME.is_match(line) {
        return Some(line.to_string());
    }
    None
}

/// Score each candidate language by distinct function-word hits; at least
/// two are required. Ties fall to the earlier entry in `LANGUAGE_MARKERS`.
fn detect_language(content: &str) -> Option<&'static str> {
    let lowered = content.to_lowercase();
    let words: std::collections::HashSet<&str> = lowered.split_whitespace().collect();

    let mut best: Option<(&'static str, usize)> = None;
    for (code, markers) in LANGUAGE_MARKERS {
        let hits = markers.iter().filter(|m| words.contains(**m)).count();
        if hits >= 2 && best.map_or(true, |(_, n)| hits > n) {
            best = Some((code, hits));
        }
    }
    best.map(|(code, _)| code)
}
