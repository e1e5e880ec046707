use std::path::Path;

use super::{ExtractionError, PdfPages};

/// `pdf-extract` backed page reader.
#[derive(Debug, Clone, Copy, Default)]
pub struct PdfExtractPages;

impl PdfPages for PdfExtractPages {
    fn pages(&self, path: &Path) -> Result<Vec<Option<String>>, ExtractionError> {
        let bytes = std::fs::read(path).map_err(|e| ExtractionError::file_access(path, e))?;

        let pages = pdf_extract::extract_text_from_mem_by_pages(&bytes)
            .map_err(|e| ExtractionError::Pdf(e.to_string()))?;

        let pages: Vec<Option<String>> = pages.into_iter().map(normalize_page).collect();
        if pages.iter().all(Option::is_none) {
            // Scanned/image-only PDFs come back blank; there is no OCR fallback.
            tracing::warn!(path = %path.display(), "no text could be extracted from PDF");
        }
        Ok(pages)
    }
}

/// `pdf-extract` pads each page with layout newlines; strip them so a page
/// carries only its own text. A page left blank has no text.
fn normalize_page(text: String) -> Option<String> {
    let trimmed = text.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

/// Concatenate page texts in order, each followed by a newline. Pages with no
/// text contribute nothing.
pub fn join_pages<I>(pages: I) -> String
where
    I: IntoIterator<Item = Option<String>>,
{
    let mut text = String::new();
    for page in pages.into_iter().flatten() {
        if page.is_empty() {
            continue;
        }
        text.push_str(&page);
        text.push('\n');
    }
    text
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pages(items: &[Option<&str>]) -> Vec<Option<String>> {
        items.iter().map(|p| p.map(str::to_string)).collect()
    }

    #[test]
    fn joins_in_page_order() {
        assert_eq!(join_pages(pages(&[Some("Hello"), Some("World")])), "Hello\nWorld\n");
    }

    #[test]
    fn skips_missing_and_empty_pages() {
        assert_eq!(join_pages(pages(&[None, Some(""), Some("Only")])), "Only\n");
    }

    #[test]
    fn whitespace_only_page_is_kept() {
        // Only truly empty pages are dropped.
        assert_eq!(join_pages(pages(&[Some(" "), Some("x")])), " \nx\n");
    }

    #[test]
    fn page_text_is_not_trimmed() {
        assert_eq!(join_pages(pages(&[Some("a\n")])), "a\n\n");
    }

    #[test]
    fn layout_padding_is_stripped() {
        assert_eq!(normalize_page("\n\nHello".to_string()).as_deref(), Some("Hello"));
        assert_eq!(normalize_page("\n\nTwo\nlines \n".to_string()).as_deref(), Some("Two\nlines"));
    }

    #[test]
    fn blank_page_has_no_text() {
        assert_eq!(normalize_page(String::new()), None);
        assert_eq!(normalize_page("\n\n \x0c".to_string()), None);
    }

    #[test]
    fn no_pages_yields_empty_text() {
        assert_eq!(join_pages(Vec::new()), "");
    }

    #[test]
    fn missing_file_reports_path() {
        let err = PdfExtractPages
            .pages(Path::new("/no/such/dir/report.pdf"))
            .unwrap_err();
        assert!(matches!(err, ExtractionError::FileAccess { .. }));
        assert!(err.to_string().contains("report.pdf"));
    }

    #[test]
    fn garbage_bytes_are_a_parser_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("broken.pdf");
        std::fs::write(&path, b"this is not a pdf at all").unwrap();

        let err = PdfExtractPages.pages(&path).unwrap_err();
        assert_eq!(err.kind(), "parser");
    }
}
