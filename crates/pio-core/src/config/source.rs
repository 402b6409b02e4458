//! Sources for secondary documents named in `extra_configs`

use pio_fs::{NormalizedPath, io};
use pio_ini::Document;

use crate::{Error, Result};

/// Turns an `extra_configs` entry into the documents it names.
///
/// A source may yield several documents for one entry; they are folded in
/// the returned order. An entry that names nothing must fail with
/// [`Error::MissingSource`].
pub trait DocumentSource {
    fn resolve(&self, path: &str) -> Result<Vec<Document>>;
}

impl<F> DocumentSource for F
where
    F: Fn(&str) -> Result<Vec<Document>>,
{
    fn resolve(&self, path: &str) -> Result<Vec<Document>> {
        self(path)
    }
}

/// Reads secondary documents from disk, relative to a base directory.
#[derive(Debug, Clone)]
pub struct FsSource {
    base_dir: NormalizedPath,
}

impl FsSource {
    /// Create a source resolving relative paths against `base_dir`.
    pub fn new(base_dir: impl Into<NormalizedPath>) -> Self {
        Self {
            base_dir: base_dir.into(),
        }
    }

    /// Create a source for the directory containing `root`.
    pub fn for_root(root: &NormalizedPath) -> Self {
        Self::new(root.parent().unwrap_or_else(|| NormalizedPath::new(".")))
    }

    pub fn base_dir(&self) -> &NormalizedPath {
        &self.base_dir
    }
}

impl DocumentSource for FsSource {
    fn resolve(&self, path: &str) -> Result<Vec<Document>> {
        let full_path = self.base_dir.join(path);
        Ok(vec![load_document(&full_path)?])
    }
}

/// Source for configurations built from text alone; every entry is missing.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoSource;

impl DocumentSource for NoSource {
    fn resolve(&self, path: &str) -> Result<Vec<Document>> {
        Err(Error::MissingSource {
            path: path.to_string(),
        })
    }
}

/// Read and parse one document file.
pub fn load_document(path: &NormalizedPath) -> Result<Document> {
    let text = io::read_text(path).map_err(|e| match e {
        e if e.is_not_found() => Error::MissingSource {
            path: path.to_string(),
        },
        e => Error::Fs(e),
    })?;
    let doc = Document::parse(&text).map_err(|source| Error::DocumentParse {
        path: path.to_string(),
        source,
    })?;
    tracing::debug!(%path, sections = doc.len(), "Loaded configuration document");
    Ok(doc)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn fs_source_reads_relative_to_base() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("extra.ini"), "[env:uno]\nboard = uno\n").unwrap();

        let source = FsSource::new(temp.path());
        let docs = source.resolve("extra.ini").unwrap();

        assert_eq!(docs.len(), 1);
        assert!(docs[0].has_section("env:uno"));
    }

    #[test]
    fn fs_source_missing_file_is_missing_source() {
        let temp = TempDir::new().unwrap();
        let source = FsSource::new(temp.path());

        let err = source.resolve("nope.ini").unwrap_err();
        assert!(matches!(err, Error::MissingSource { ref path } if path.ends_with("nope.ini")));
    }

    #[test]
    fn fs_source_reports_parse_errors_with_path() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("bad.ini"), "[broken\n").unwrap();

        let err = FsSource::new(temp.path()).resolve("bad.ini").unwrap_err();
        assert!(err.is_parse_error());
        assert!(err.to_string().contains("bad.ini"));
    }

    #[test]
    fn for_root_uses_parent_directory() {
        let root = NormalizedPath::new("project/platformio.ini");
        assert_eq!(FsSource::for_root(&root).base_dir().as_str(), "project");
    }
}
