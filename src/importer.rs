use crate::assembler::convert_to_book_structure;
use crate::classifier::classify_documents;
use crate::cli::Cli;
use crate::document::{BookStructure, Bucket, ValidationResult};
use crate::extractor::{extract_archive, ImportError};
use crate::validator::validate_import;
use anyhow::{bail, Context, Result};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;

/// Everything one import produces: the assembled book and its validation
/// report. The caller decides what to do with an invalid book.
#[derive(Debug)]
pub struct Import {
    pub book: BookStructure,
    pub validation: ValidationResult,
}

/// Run the full pipeline over an archive on disk:
/// extract, classify, assemble, validate.
pub fn import_archive(path: &Path) -> Result<Import, ImportError> {
    let documents = extract_archive(path)?;
    info!(count = documents.len(), "extracted documents");

    let classification = classify_documents(documents);
    let book = convert_to_book_structure(&classification);
    let validation = validate_import(&book);
    Ok(Import { book, validation })
}

pub fn run(cli: &Cli) -> Result<()> {
    let import = import_archive(&cli.input)
        .with_context(|| format!("Failed to import archive: {}", cli.input.display()))?;

    for warning in &import.validation.warnings {
        eprintln!("warning: {}", warning);
    }
    if !import.validation.is_valid {
        for error in &import.validation.errors {
            eprintln!("error: {}", error);
        }
        bail!("import blocked by validation errors");
    }

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&import.book)?);
        return Ok(());
    }

    let output_path = resolve_output_path(cli)?;
    write_book(&output_path, &import.book)?;

    let outline = &import.book.structure;
    eprintln!(
        "Imported {} sections ({} front, {} main, {} back) to {}",
        outline.section_count(),
        outline.front.len(),
        outline.main.len(),
        outline.back.len(),
        output_path.display()
    );

    Ok(())
}

fn resolve_output_path(cli: &Cli) -> Result<PathBuf> {
    if let Some(ref path) = cli.output {
        return Ok(path.clone());
    }

    let stem = cli
        .input
        .file_stem()
        .context("Input file has no name")?
        .to_string_lossy();
    Ok(PathBuf::from(stem.as_ref()))
}

fn buckets(book: &BookStructure) -> [(Bucket, &'static str, &Vec<String>); 3] {
    [
        (Bucket::Front, "Front Matter", &book.structure.front),
        (Bucket::Main, "Main Matter", &book.structure.main),
        (Bucket::Back, "Back Matter", &book.structure.back),
    ]
}

fn write_book(output_dir: &Path, book: &BookStructure) -> Result<()> {
    fs::create_dir_all(output_dir)?;

    // One folder per bucket, sections numbered in outline order
    for (bucket, _, names) in buckets(book) {
        let dir = output_dir.join(bucket.to_string());
        fs::create_dir_all(&dir)?;
        for (i, name) in names.iter().enumerate() {
            let path = dir.join(section_filename(i, name));
            let mut content = book.section_content(bucket, name).to_string();
            if !content.ends_with('\n') {
                content.push('\n');
            }
            fs::write(&path, content)
                .with_context(|| format!("Failed to write section: {}", path.display()))?;
        }
    }

    let manifest = serde_json::to_string_pretty(book)?;
    fs::write(output_dir.join("book.json"), manifest + "\n")
        .with_context(|| "Failed to write book.json")?;

    fs::write(output_dir.join("README.md"), format_overview(book))
        .with_context(|| "Failed to write README.md")?;

    Ok(())
}

/// Metadata header plus a table of contents across all three buckets.
fn format_overview(book: &BookStructure) -> String {
    let mut lines = Vec::new();

    lines.push(format!("# {}", book.metadata.title));
    lines.push(String::new());
    lines.push(format!("**Author:** {}", book.metadata.author));
    lines.push(format!("**Language:** {}", book.metadata.language));
    lines.push(String::new());
    lines.push("---".to_string());
    lines.push(String::new());

    for (bucket, heading, names) in buckets(book) {
        if names.is_empty() {
            continue;
        }
        lines.push(format!("## {}", heading));
        lines.push(String::new());
        for (i, name) in names.iter().enumerate() {
            lines.push(format!(
                "{}. [{}]({}/{})",
                i + 1,
                name,
                bucket,
                section_filename(i, name)
            ));
        }
        lines.push(String::new());
    }

    lines.join("\n")
}

fn section_filename(index: usize, name: &str) -> String {
    format!("{:02}-{}.md", index + 1, clean_filename(name))
}

/// Make a section name safe to use as a filename.
fn clean_filename(name: &str) -> String {
    let cleaned: String = name
        .chars()
        .map(|c| {
            if c.is_alphanumeric() || c == '-' || c == '_' {
                c
            } else {
                '-'
            }
        })
        .collect();
    cleaned.trim_matches('-').to_string()
}
