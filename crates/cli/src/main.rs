mod cli;

use std::io::Write;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use docchunk_core::config::{self, DEFAULT_LOG_FILTER};
use docchunk_core::{ChunkedDocument, Config, LogConfig};
use docchunk_ingest::{chunk_text, ChunkConfig, Extractor};

use crate::cli::CliArgs;

fn main() -> Result<()> {
    config::load_dotenv();
    let config = Config::from_env();
    init_tracing(&config.log);

    let args = CliArgs::parse();
    config.log_summary();

    let doc = run(&args)?;
    let json = doc.to_json().context("failed to serialize output")?;

    // stdout carries nothing but the record.
    let mut stdout = std::io::stdout().lock();
    writeln!(stdout, "{json}").context("failed to write output")?;
    stdout.flush().context("failed to write output")?;
    Ok(())
}

/// Logs go to stderr so stdout stays a clean JSON channel.
fn init_tracing(log: &LogConfig) {
    let filter = EnvFilter::try_new(&log.filter).unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_ansi(log.ansi)
        .with_writer(std::io::stderr)
        .init();
}

fn run(args: &CliArgs) -> Result<ChunkedDocument> {
    let text = Extractor::default()
        .extract(&args.file_path, &args.mime_type)
        .inspect_err(|e| tracing::debug!(kind = e.kind(), error = %e, "extraction failed"))
        .with_context(|| format!("failed to extract text from {}", args.file_path.display()))?;

    let chunks = chunk_text(&text, &ChunkConfig::default());
    let doc = ChunkedDocument::new(text, chunks);
    tracing::info!(
        path = %args.file_path.display(),
        chars = doc.char_count(),
        chunks = doc.chunks.len(),
        "document processed"
    );
    Ok(doc)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn args(path: PathBuf, mime: &str) -> CliArgs {
        CliArgs {
            file_path: path,
            mime_type: mime.to_string(),
        }
    }

    #[test]
    fn run_produces_text_and_chunks() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("in.txt");
        std::fs::write(&path, "x".repeat(1801)).unwrap();

        let doc = run(&args(path, "text/plain")).unwrap();
        assert_eq!(doc.char_count(), 1801);
        let indices: Vec<usize> = doc.chunks.iter().map(|c| c.index).collect();
        assert_eq!(indices, vec![0, 1, 2]);
    }

    #[test]
    fn error_chain_names_path_and_mime() {
        let err = run(&args(PathBuf::from("scan.tiff"), "image/tiff")).unwrap_err();
        let message = format!("{err:#}");
        assert!(message.contains("scan.tiff"));
        assert!(message.contains("Unsupported file type: image/tiff"));
    }

    #[test]
    fn missing_file_is_reported() {
        let err = run(&args(PathBuf::from("/nope/missing.txt"), "text/plain")).unwrap_err();
        assert!(format!("{err:#}").contains("/nope/missing.txt"));
    }
}
