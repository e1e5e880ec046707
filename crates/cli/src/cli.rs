use std::path::PathBuf;

use clap::Parser;

/// Extract text from a PDF, Word or plain-text file and split it into
/// overlapping chunks.
///
/// Prints one JSON object `{"text": ..., "chunks": [{"index", "content"}, ...]}`
/// to stdout. Logs and errors go to stderr.
#[derive(Parser, Debug)]
#[command(name = "docchunk", version, about)]
pub struct CliArgs {
    /// Path of the document to read.
    pub file_path: PathBuf,

    /// MIME type of the document, e.g. `application/pdf` or `text/plain`.
    pub mime_type: String,
}
