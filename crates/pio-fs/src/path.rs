//! Lexically normalized paths for project documents

use std::path::{Path, PathBuf};

/// A document path with forward slashes and no `.`/`..` noise.
///
/// `.` segments and redundant separators are dropped and `..` segments are
/// folded lexically, so two spellings of the same file compare equal. A
/// relative path keeps its leading `..` segments; an absolute path cannot
/// climb above its root.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NormalizedPath {
    inner: String,
}

impl NormalizedPath {
    pub fn new(path: impl AsRef<Path>) -> Self {
        let raw = path.as_ref().to_string_lossy();
        Self {
            inner: normalize(&raw),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.inner
    }

    /// Path handed to `std::fs`.
    pub fn to_native(&self) -> PathBuf {
        PathBuf::from(&self.inner)
    }

    /// Whether the path is rooted (`/x` or a drive prefix such as `C:/x`).
    pub fn is_absolute(&self) -> bool {
        self.inner.starts_with('/') || has_drive_prefix(&self.inner)
    }

    /// Resolve `segment` against this path.
    ///
    /// An absolute segment such as `/etc/shared.ini` is returned as is.
    pub fn join(&self, segment: &str) -> Self {
        let segment = Self::new(segment);
        if segment.is_absolute() {
            return segment;
        }
        Self::new(format!("{}/{}", self.inner, segment.inner))
    }

    /// Containing directory; `.` for a bare file name.
    pub fn parent(&self) -> Option<Self> {
        if self.inner == "." || self.inner == "/" {
            return None;
        }
        match self.inner.rfind('/') {
            Some(0) => Some(Self {
                inner: "/".to_string(),
            }),
            Some(idx) => Some(Self {
                inner: self.inner[..idx].to_string(),
            }),
            None => Some(Self {
                inner: ".".to_string(),
            }),
        }
    }

    /// Last segment, unless it is a root or a `..`.
    pub fn file_name(&self) -> Option<&str> {
        match self.inner.rsplit('/').next() {
            Some("") | Some(".") | Some("..") | None => None,
            Some(name) => Some(name),
        }
    }
}

fn has_drive_prefix(s: &str) -> bool {
    let bytes = s.as_bytes();
    bytes.len() >= 2 && bytes[0].is_ascii_alphabetic() && bytes[1] == b':'
}

fn normalize(raw: &str) -> String {
    let slashed = raw.replace('\\', "/");
    let rooted = slashed.starts_with('/');
    let drive = has_drive_prefix(&slashed);

    let mut parts: Vec<&str> = Vec::new();
    for part in slashed.split('/') {
        match part {
            "" | "." => {}
            ".." => match parts.last() {
                Some(&last) if last != ".." && !(drive && parts.len() == 1) => {
                    parts.pop();
                }
                _ if rooted || drive => {}
                _ => parts.push(".."),
            },
            other => parts.push(other),
        }
    }

    let joined = parts.join("/");
    if rooted {
        format!("/{joined}")
    } else if joined.is_empty() {
        ".".to_string()
    } else if drive && parts.len() == 1 {
        format!("{joined}/")
    } else {
        joined
    }
}

impl AsRef<Path> for NormalizedPath {
    fn as_ref(&self) -> &Path {
        Path::new(&self.inner)
    }
}

impl std::fmt::Display for NormalizedPath {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.inner)
    }
}

impl From<&str> for NormalizedPath {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<String> for NormalizedPath {
    fn from(s: String) -> Self {
        Self::new(s)
    }
}

impl From<PathBuf> for NormalizedPath {
    fn from(p: PathBuf) -> Self {
        Self::new(p)
    }
}

impl From<&Path> for NormalizedPath {
    fn from(p: &Path) -> Self {
        Self::new(p)
    }
}
