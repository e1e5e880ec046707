//! Text extraction and fixed-window chunking for PDF, Word and plain-text files.

pub mod document;

pub use document::chunker::{chunk_text, ChunkConfig, ChunkConfigError};
pub use document::{extract_text, ExtractionError, Extractor};
