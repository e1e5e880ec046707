//! Fixed-size sliding-window chunking.
//!
//! Splits extracted text into windows of `chunk_size` characters whose starts
//! are `chunk_size - overlap` apart, trimming each window independently.

mod types;
mod window;

pub use types::{ChunkConfig, ChunkConfigError, DEFAULT_CHUNK_SIZE, DEFAULT_OVERLAP};
pub use window::chunk_text;
