use unicode_normalization::UnicodeNormalization;

/// Normalize decoded document text: NFC, collapsed blank lines, no trailing
/// whitespace per line, trimmed body.
pub fn normalize_text(raw: &str) -> String {
    let mut result: String = raw.nfc().collect();

    // Collapse 3+ consecutive blank lines to 2
    while result.contains("\n\n\n") {
        result = result.replace("\n\n\n", "\n\n");
    }

    // Trim trailing whitespace per line
    result = result
        .lines()
        .map(|line| line.trim_end())
        .collect::<Vec<_>>()
        .join("\n");

    result.trim().to_string()
}

/// Normalize an archive entry name and repair known decoding artifacts.
///
/// Zip filenames written with a non-UTF-8 local encoding decode accented
/// characters to U+FFFD; the common case in uploaded manuscripts is a
/// Spanish "-ción" suffix arriving as "-ci\u{FFFD}n.md".
pub fn repair_filename(name: &str) -> String {
    let normalized: String = name.nfc().collect();

    if let Some(stem) = normalized.strip_suffix("\u{FFFD}n.md") {
        return format!("{}ón.md", stem);
    }

    normalized
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_collapses_blank_lines() {
        let cleaned = normalize_text("one\n\n\n\n\ntwo\n");
        assert_eq!(cleaned, "one\n\ntwo");
    }

    #[test]
    fn test_trims_line_ends_and_body() {
        let cleaned = normalize_text("  \nhello   \nworld\t\n\n");
        assert_eq!(cleaned, "hello\nworld");
    }

    #[test]
    fn test_nfc_normalization() {
        // "o" + combining acute accent composes to a single scalar
        let cleaned = normalize_text("Introduccio\u{0301}n");
        assert_eq!(cleaned, "Introducción");
    }

    #[test]
    fn test_repairs_dropped_accent_in_filename() {
        assert_eq!(
            repair_filename("Introducci\u{FFFD}n.md"),
            "Introducción.md"
        );
        assert_eq!(
            repair_filename("cap/Dedicaci\u{FFFD}n.md"),
            "cap/Dedicación.md"
        );
    }

    #[test]
    fn test_leaves_clean_filenames_alone() {
        assert_eq!(repair_filename("chapter-01.md"), "chapter-01.md");
        assert_eq!(repair_filename("notes.txt"), "notes.txt");
    }
}
