//! Plain-text extraction from Word (OOXML `.docx`) files.
//!
//! A `.docx` is a zip container of WordprocessingML parts. Text is read from the
//! page headers, the main body and the page footers, in that order. Legacy
//! binary `.doc` files are not zip containers and fail to open here.

use std::io::{Cursor, Read};
use std::path::Path;

use quick_xml::events::Event;
use quick_xml::Reader;
use zip::ZipArchive;

use super::{ExtractionError, WordText};

const BODY_PART: &str = "word/document.xml";
const HEADER_PREFIX: &str = "word/header";
const FOOTER_PREFIX: &str = "word/footer";

/// Zip + XML backed `.docx` reader.
#[derive(Debug, Clone, Copy, Default)]
pub struct DocxText;

impl WordText for DocxText {
    fn text(&self, path: &Path) -> Result<String, ExtractionError> {
        let bytes = std::fs::read(path).map_err(|e| ExtractionError::file_access(path, e))?;
        docx_text_from_mem(&bytes)
    }
}

/// Extract text from in-memory `.docx` bytes. The result is trimmed.
pub fn docx_text_from_mem(bytes: &[u8]) -> Result<String, ExtractionError> {
    let mut archive = ZipArchive::new(Cursor::new(bytes))
        .map_err(|e| ExtractionError::Word(format!("not a docx container: {e}")))?;

    let names: Vec<String> = archive.file_names().map(str::to_string).collect();
    let headers = names.iter().filter(|n| is_numbered_part(n, HEADER_PREFIX));
    let footers = names.iter().filter(|n| is_numbered_part(n, FOOTER_PREFIX));

    let mut text = String::new();
    for name in headers {
        text.push_str(&part_text(&mut archive, name)?);
    }
    text.push_str(&part_text(&mut archive, BODY_PART)?);
    for name in footers {
        text.push_str(&part_text(&mut archive, name)?);
    }

    Ok(text.trim().to_string())
}

/// `word/header.xml`, `word/header1.xml`, `word/header12.xml`, ...
fn is_numbered_part(name: &str, prefix: &str) -> bool {
    name.strip_prefix(prefix)
        .map(|rest| rest.trim_start_matches(|c: char| c.is_ascii_digit()))
        .is_some_and(|rest| rest == ".xml")
}

fn part_text(
    archive: &mut ZipArchive<Cursor<&[u8]>>,
    name: &str,
) -> Result<String, ExtractionError> {
    let mut file = archive
        .by_name(name)
        .map_err(|e| ExtractionError::Word(format!("{name}: {e}")))?;
    // The declared size comes from the archive and is not trusted.
    let mut xml = Vec::new();
    file.read_to_end(&mut xml)
        .map_err(|e| ExtractionError::Word(format!("{name}: {e}")))?;

    xml_to_text(&xml).map_err(|e| ExtractionError::Word(format!("{name}: {e}")))
}

/// Flatten one WordprocessingML part to text.
///
/// Run text (`w:t`) is copied, `w:tab` becomes a tab, `w:br`/`w:cr` a newline,
/// and every paragraph (`w:p`) is preceded by a blank line. Tab-stop
/// definitions inside `w:tabs` are formatting, not content.
fn xml_to_text(xml: &[u8]) -> Result<String, quick_xml::Error> {
    let mut reader = Reader::from_reader(xml);
    let mut out = String::new();
    let mut in_run_text = false;
    let mut tab_stops_depth = 0usize;

    loop {
        match reader.read_event()? {
            Event::Start(e) => match e.name().as_ref() {
                b"w:t" => in_run_text = true,
                b"w:tabs" => tab_stops_depth += 1,
                name => push_marker(&mut out, name, tab_stops_depth),
            },
            Event::Empty(e) => push_marker(&mut out, e.name().as_ref(), tab_stops_depth),
            Event::End(e) => match e.name().as_ref() {
                b"w:t" => in_run_text = false,
                b"w:tabs" => tab_stops_depth = tab_stops_depth.saturating_sub(1),
                _ => {}
            },
            Event::Text(t) if in_run_text => out.push_str(&t.unescape()?),
            Event::CData(c) if in_run_text => out.push_str(&String::from_utf8_lossy(&c)),
            Event::Eof => break,
            _ => {}
        }
    }
    Ok(out)
}

fn push_marker(out: &mut String, name: &[u8], tab_stops_depth: usize) {
    match name {
        b"w:p" => out.push_str("\n\n"),
        b"w:tab" if tab_stops_depth == 0 => out.push('\t'),
        b"w:br" | b"w:cr" => out.push('\n'),
        _ => {}
    }
}
