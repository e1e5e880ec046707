use serde::{Deserialize, Serialize};

/// One window of extracted text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Chunk {
    /// 0-based position in the chunk sequence.
    pub index: usize,
    /// Window contents, trimmed of surrounding whitespace.
    pub content: String,
}

impl Chunk {
    pub fn new(index: usize, content: impl Into<String>) -> Self {
        Self {
            index,
            content: content.into(),
        }
    }
}

/// The record emitted for one processed file: the full text plus its chunks.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChunkedDocument {
    pub text: String,
    pub chunks: Vec<Chunk>,
}

impl ChunkedDocument {
    pub fn new(text: String, chunks: Vec<Chunk>) -> Self {
        Self { text, chunks }
    }

    /// Character count of the full text (not bytes).
    pub fn char_count(&self) -> usize {
        self.text.chars().count()
    }

    /// Serialize as a single-line JSON object.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn chunk_serializes_with_index_and_content_only() {
        let value = serde_json::to_value(Chunk::new(3, "hello")).unwrap();
        assert_eq!(value, serde_json::json!({ "index": 3, "content": "hello" }));
    }

    #[test]
    fn document_json_puts_text_before_chunks() {
        let doc = ChunkedDocument::new(
            "abc".to_string(),
            vec![Chunk::new(0, "abc")],
        );
        let json = doc.to_json().unwrap();
        assert_eq!(json, r#"{"text":"abc","chunks":[{"index":0,"content":"abc"}]}"#);
    }

    #[test]
    fn empty_document_has_empty_chunk_array() {
        let doc = ChunkedDocument::new(String::new(), Vec::new());
        assert_eq!(doc.to_json().unwrap(), r#"{"text":"","chunks":[]}"#);
        assert_eq!(doc.char_count(), 0);
    }

    #[test]
    fn char_count_ignores_byte_width() {
        let doc = ChunkedDocument::new("héllo 🎉".to_string(), Vec::new());
        assert_eq!(doc.char_count(), 7);
    }

    #[test]
    fn roundtrips_through_serde() {
        let json = r#"{"text":"x","chunks":[{"index":0,"content":"x"}]}"#;
        let doc: ChunkedDocument = serde_json::from_str(json).unwrap();
        assert_eq!(doc.chunks[0], Chunk::new(0, "x"));
    }
}
