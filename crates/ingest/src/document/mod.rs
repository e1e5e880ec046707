pub mod chunker;
mod pdf;
mod txt;
mod word;

use std::fmt;
use std::path::{Path, PathBuf};

use thiserror::Error;

pub use pdf::{join_pages, PdfExtractPages};
pub use word::{docx_text_from_mem, DocxText};

pub const MIME_PDF: &str = "application/pdf";
pub const MIME_DOCX: &str = "application/vnd.openxmlformats-officedocument.wordprocessingml.document";
pub const MIME_DOC: &str = "application/msword";

#[derive(Debug, Error)]
pub enum ExtractionError {
    #[error("Unsupported file type: {0}")]
    UnsupportedType(String),
    #[error("failed to read {}: {source}", .path.display())]
    FileAccess {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("{} is not valid UTF-8: {source}", .path.display())]
    Decode {
        path: PathBuf,
        #[source]
        source: std::string::FromUtf8Error,
    },
    #[error("PDF extraction failed: {0}")]
    Pdf(String),
    #[error("Word extraction failed: {0}")]
    Word(String),
}

impl ExtractionError {
    /// Stable label for log fields.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::UnsupportedType(_) => "unsupported_type",
            Self::FileAccess { .. } => "file_access",
            Self::Decode { .. } => "decode",
            Self::Pdf(_) | Self::Word(_) => "parser",
        }
    }

    pub(crate) fn file_access(path: &Path, source: std::io::Error) -> Self {
        Self::FileAccess {
            path: path.to_path_buf(),
            source,
        }
    }
}

/// Which extraction path a MIME type routes to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentKind {
    Pdf,
    Word,
    Text,
}

impl DocumentKind {
    /// Classify a caller-supplied MIME string. Rules are checked in order and
    /// matched exactly; no sniffing of the file itself.
    pub fn from_mime(mime_type: &str) -> Result<Self, ExtractionError> {
        if mime_type == MIME_PDF {
            Ok(Self::Pdf)
        } else if mime_type == MIME_DOCX || mime_type == MIME_DOC {
            Ok(Self::Word)
        } else if mime_type.starts_with("text/") {
            Ok(Self::Text)
        } else {
            Err(ExtractionError::UnsupportedType(mime_type.to_string()))
        }
    }
}

impl fmt::Display for DocumentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Pdf => "pdf",
            Self::Word => "word",
            Self::Text => "text",
        };
        f.write_str(label)
    }
}

/// PDF backend: the text of each page in document order. `None` marks a page
/// with no extractable text.
pub trait PdfPages {
    fn pages(&self, path: &Path) -> Result<Vec<Option<String>>, ExtractionError>;
}

/// Word backend: the whole document as plain text.
pub trait WordText {
    fn text(&self, path: &Path) -> Result<String, ExtractionError>;
}

/// Dispatches a file to the right backend based on its MIME type.
pub struct Extractor {
    pdf: Box<dyn PdfPages>,
    word: Box<dyn WordText>,
}

impl Default for Extractor {
    fn default() -> Self {
        Self::new(PdfExtractPages, DocxText)
    }
}

impl Extractor {
    pub fn new(pdf: impl PdfPages + 'static, word: impl WordText + 'static) -> Self {
        Self {
            pdf: Box::new(pdf),
            word: Box::new(word),
        }
    }

    /// Extract the full plain text of `path`. Either the whole text is
    /// returned or an error is; there are no partial results.
    pub fn extract(&self, path: &Path, mime_type: &str) -> Result<String, ExtractionError> {
        let kind = DocumentKind::from_mime(mime_type)?;

        let text = match kind {
            DocumentKind::Pdf => {
                let pages = self.pdf.pages(path)?;
                let empty = pages
                    .iter()
                    .filter(|p| p.as_deref().map_or(true, str::is_empty))
                    .count();
                tracing::debug!(pages = pages.len(), empty, "pdf pages extracted");
                join_pages(pages)
            }
            DocumentKind::Word => self.word.text(path)?,
            DocumentKind::Text => txt::read_utf8(path)?,
        };

        tracing::debug!(
            %kind,
            path = %path.display(),
            mime = mime_type,
            chars = text.chars().count(),
            "text extracted"
        );
        Ok(text)
    }
}

/// Extract text with the default PDF and Word backends.
pub fn extract_text(path: impl AsRef<Path>, mime_type: &str) -> Result<String, ExtractionError> {
    Extractor::default().extract(path.as_ref(), mime_type)
}
