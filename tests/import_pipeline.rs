//! End-to-end pipeline tests over real zip archives.

use bookbuilder::cli::Cli;
use bookbuilder::document::Bucket;
use bookbuilder::{
    classify_documents, convert_to_book_structure, extract_documents, import_archive,
    move_document, validate_import, ImportError,
};
use std::fs::File;
use std::io::Write;
use std::path::Path;
use zip::write::SimpleFileOptions;

fn write_archive(path: &Path, entries: &[(&str, &str)]) {
    let file = File::create(path).unwrap();
    let mut writer = zip::ZipWriter::new(file);
    let options = SimpleFileOptions::default();
    for (name, content) in entries {
        writer.start_file(*name, options).unwrap();
        writer.write_all(content.as_bytes()).unwrap();
    }
    writer.finish().unwrap();
}

#[test]
fn test_import_assembles_markdown_archive() {
    let dir = tempfile::tempdir().unwrap();
    let archive = dir.path().join("manuscript.zip");
    write_archive(
        &archive,
        &[
            ("a.md", "# My Book\nBy Jane Doe"),
            ("b.md", "# Chapter One\nStory text."),
        ],
    );

    let import = import_archive(&archive).unwrap();
    let book = &import.book;

    // Both documents land in main matter, in archive order
    assert_eq!(book.structure.main, ["My Book", "Chapter One"]);
    // Essential front matter is generated with real content
    assert_eq!(book.structure.front, ["Title Page", "Copyright"]);
    let title_page = book.section_content(Bucket::Front, "Title Page");
    let copyright = book.section_content(Bucket::Front, "Copyright");
    assert!(title_page.contains("Jane Doe"));
    assert!(copyright.contains("Copyright ©"));

    assert_eq!(book.metadata.author, "Jane Doe");
    assert_eq!(book.metadata.total_sections, 2);
    assert!(import.validation.is_valid);
}

#[test]
fn test_import_localizes_front_matter_labels() {
    let dir = tempfile::tempdir().unwrap();
    let archive = dir.path().join("manuscrito.zip");
    write_archive(
        &archive,
        &[(
            "capitulo.md",
            "# Capítulo Uno\nEl jardín estaba en silencio y la casa dormía, \
             de modo que nadie supo que ella volvió.",
        )],
    );

    let import = import_archive(&archive).unwrap();
    assert_eq!(import.book.metadata.language, "es");
    assert_eq!(
        import.book.structure.front,
        ["Portada", "Derechos de autor"]
    );
}

#[test]
fn test_import_rejects_archive_without_documents() {
    let dir = tempfile::tempdir().unwrap();
    let archive = dir.path().join("images.zip");
    write_archive(&archive, &[("cover.png", "not text")]);

    let err = import_archive(&archive).unwrap_err();
    assert!(matches!(err, ImportError::NoDocuments));
}

#[test]
fn test_move_then_reassemble_stays_consistent() {
    let dir = tempfile::tempdir().unwrap();
    let archive = dir.path().join("manuscript.zip");
    write_archive(
        &archive,
        &[
            ("01-intro.md", "# Introduction\nWelcome."),
            ("02-chapter.md", "# Chapter One\nStory."),
            ("03-notes.md", "# Notes\nSources."),
        ],
    );

    let documents = extract_documents(File::open(&archive).unwrap()).unwrap();
    let classification = classify_documents(documents);
    assert_eq!(classification.document_count(), 3);

    // The user drags the notes file into back matter; structure and
    // validation are recomputed from the classification, never patched.
    let moved = move_document(classification, "03-notes.md", Bucket::Main, Bucket::Back).unwrap();
    assert_eq!(moved.document_count(), 3);

    let book = convert_to_book_structure(&moved);
    assert_eq!(book.structure.main, ["Introduction", "Chapter One"]);
    assert_eq!(book.structure.back, ["Notes"]);
    assert_eq!(book.section_content(Bucket::Back, "Notes"), "# Notes\nSources.");

    let validation = validate_import(&book);
    assert!(validation.is_valid);
}

#[test]
fn test_duplicate_section_names_block_the_import() {
    let dir = tempfile::tempdir().unwrap();
    let archive = dir.path().join("manuscript.zip");
    write_archive(
        &archive,
        &[
            ("a.md", "# Intro\nFirst."),
            ("b.md", "# Intro\nSecond."),
        ],
    );

    let import = import_archive(&archive).unwrap();
    assert!(!import.validation.is_valid);
    assert!(import
        .validation
        .errors
        .iter()
        .any(|e| e.contains("Intro")));
}

#[test]
fn test_cli_run_writes_book_folder() {
    let dir = tempfile::tempdir().unwrap();
    let archive = dir.path().join("manuscript.zip");
    write_archive(
        &archive,
        &[
            ("a.md", "# My Book\nBy Jane Doe"),
            ("b.md", "# Chapter One\nStory text."),
        ],
    );

    let out = dir.path().join("book");
    let cli = Cli {
        input: archive,
        output: Some(out.clone()),
        json: false,
    };
    bookbuilder::importer::run(&cli).unwrap();

    assert!(out.join("book.json").is_file());
    assert!(out.join("README.md").is_file());
    assert!(out.join("front").join("01-Title-Page.md").is_file());
    assert!(out.join("front").join("02-Copyright.md").is_file());
    assert!(out.join("main").join("01-My-Book.md").is_file());
    assert!(out.join("main").join("02-Chapter-One.md").is_file());

    let manifest = std::fs::read_to_string(out.join("book.json")).unwrap();
    let parsed: bookbuilder::BookStructure = serde_json::from_str(&manifest).unwrap();
    assert_eq!(parsed.structure.main, ["My Book", "Chapter One"]);

    let readme = std::fs::read_to_string(out.join("README.md")).unwrap();
    assert!(readme.contains("**Author:** Jane Doe"));
    assert!(readme.contains("main/02-Chapter-One.md"));
}
