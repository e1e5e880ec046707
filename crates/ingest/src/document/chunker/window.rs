use docchunk_core::Chunk;

use super::types::ChunkConfig;

/// Split `text` into overlapping windows.
///
/// Window `i` covers characters `[i * step, i * step + chunk_size)`, clipped to
/// the end of the text, and is trimmed of surrounding whitespace on its own.
/// A window that is all whitespace still yields a (empty) chunk. Empty text
/// yields no chunks.
pub fn chunk_text(text: &str, config: &ChunkConfig) -> Vec<Chunk> {
    // Byte offset of every char, plus the end, so windows slice on char
    // boundaries.
    let bounds: Vec<usize> = text
        .char_indices()
        .map(|(i, _)| i)
        .chain(std::iter::once(text.len()))
        .collect();
    let len = bounds.len() - 1;

    let mut chunks = Vec::with_capacity(config.expected_chunks(len));
    let mut start = 0;
    while start < len {
        let end = start + config.chunk_size();
        let window = &text[bounds[start]..bounds[end.min(len)]];
        chunks.push(Chunk::new(chunks.len(), window.trim_matches(is_strip_space)));
        start = end - config.overlap();
    }

    tracing::debug!(
        chars = len,
        chunks = chunks.len(),
        chunk_size = config.chunk_size(),
        overlap = config.overlap(),
        "text chunked"
    );
    chunks
}

/// Characters trimmed from window edges: Unicode whitespace plus the ASCII
/// information separators U+001C to U+001F.
fn is_strip_space(c: char) -> bool {
    c.is_whitespace() || ('\u{1c}'..='\u{1f}').contains(&c)
}
