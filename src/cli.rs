use clap::Parser;
use std::path::PathBuf;

/// Assemble an archive of manuscript documents into a structured book
#[derive(Parser, Debug)]
#[command(name = "bookbuilder", version, about)]
pub struct Cli {
    /// Path to the input archive (.zip) of .md, .txt, and .docx documents
    pub input: PathBuf,

    /// Output directory for the assembled book.
    /// Defaults to a directory named after the archive in the current directory.
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Print the assembled book manifest as JSON to stdout instead of writing files
    #[arg(long, default_value_t = false)]
    pub json: bool,
}
