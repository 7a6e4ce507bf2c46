/// Placeholder used when a document yields no usable section name.
pub const UNTITLED_SECTION: &str = "Untitled Section";

/// Derive a human-readable section name from document content.
///
/// The first `"# "` heading wins regardless of position. Failing that, the
/// first non-empty line under 100 characters is used, skipping the escaped
/// bracket lines some upstream converters emit. Total over all inputs.
pub fn extract_section_title(content: &str) -> String {
    for line in content.lines() {
        let trimmed = line.trim();
        if let Some(heading) = trimmed.strip_prefix("# ") {
            let heading = heading.trim();
            if !heading.is_empty() {
                return heading.to_string();
            }
        }
    }

    for line in content.lines() {
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('[') || trimmed.starts_with("\\[") {
            continue;
        }
        if trimmed.chars().count() < 100 {
            return trimmed.to_string();
        }
    }

    UNTITLED_SECTION.to_string()
}
