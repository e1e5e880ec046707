use std::path::Path;

use super::ExtractionError;

/// Read the file as strict UTF-8, returning its contents unmodified.
pub(crate) fn read_utf8(path: &Path) -> Result<String, ExtractionError> {
    let bytes = std::fs::read(path).map_err(|e| ExtractionError::file_access(path, e))?;
    String::from_utf8(bytes).map_err(|source| ExtractionError::Decode {
        path: path.to_path_buf(),
        source,
    })
}
