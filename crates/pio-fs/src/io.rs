//! File reads for project documents

use std::fs;

use crate::{Error, NormalizedPath, Result};

/// Read text content from a file.
///
/// A missing file is reported as [`Error::NotFound`] so callers can tell an
/// absent document apart from an unreadable one.
pub fn read_text(path: &NormalizedPath) -> Result<String> {
    let native_path = path.to_native();
    let content = fs::read_to_string(&native_path).map_err(|e| Error::io(&native_path, e))?;
    tracing::trace!(%path, bytes = content.len(), "Read file");
    Ok(content)
}
