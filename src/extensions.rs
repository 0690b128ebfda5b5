//! Extension allow-lists and suffix matching

use std::collections::BTreeSet;
use std::path::Path;

use crate::error::{Error, Result};

/// Audio and video formats.
pub const STREAM_FORMATS: &[&str] = &["mp4", "wmv", "mp3", "wav"];
/// Still image formats.
pub const IMAGE_FORMATS: &[&str] = &["jpg", "png", "bmp"];
/// Office document formats.
pub const DOC_FORMATS: &[&str] = &["docx", "doc", "xlsx", "xls", "pptx", "ppt", "pdf"];

/// Set of lowercase extensions without a leading dot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtensionSet(BTreeSet<String>);

impl ExtensionSet {
    /// Build a set from user-supplied values.
    ///
    /// Each value is trimmed, loses one leading `.`, and is lowercased. Values
    /// that end up empty or still contain a dot or path separator are rejected.
    pub fn parse<I, S>(values: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut set = BTreeSet::new();
        for value in values {
            let raw = value.as_ref();
            let ext = raw.trim();
            let ext = ext.strip_prefix('.').unwrap_or(ext).to_lowercase();
            if ext.is_empty() || ext.contains(['.', '/', '\\']) {
                return Err(Error::InvalidExtension(raw.to_string()));
            }
            set.insert(ext);
        }
        Ok(Self(set))
    }

    /// Extensions for a named family: `stream`, `image` or `doc`.
    pub fn preset(name: &str) -> Result<Self> {
        let list = match name.trim().to_lowercase().as_str() {
            "stream" => STREAM_FORMATS,
            "image" => IMAGE_FORMATS,
            "doc" => DOC_FORMATS,
            _ => return Err(Error::UnknownPreset(name.to_string())),
        };
        Ok(Self(list.iter().map(|s| s.to_string()).collect()))
    }

    pub fn extend(&mut self, other: ExtensionSet) {
        self.0.extend(other.0);
    }

    pub fn contains(&self, ext: &str) -> bool {
        self.0.contains(ext)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    /// Whether the file name's extension is in the set.
    pub fn matches(&self, path: &Path) -> bool {
        path.file_name()
            .map(|name| name.to_string_lossy())
            .and_then(|name| extension_of(&name))
            .is_some_and(|ext| self.contains(&ext))
    }
}

impl Default for ExtensionSet {
    fn default() -> Self {
        Self(
            STREAM_FORMATS
                .iter()
                .chain(IMAGE_FORMATS)
                .chain(DOC_FORMATS)
                .map(|s| s.to_string())
                .collect(),
        )
    }
}

/// Lowercased text after the last `.` of a file name.
///
/// A dot in the first position does not count, so `.gitignore` has no
/// extension while `.config.pdf` has `pdf`.
pub fn extension_of(name: &str) -> Option<String> {
    match name.rfind('.') {
        Some(pos) if pos > 0 => Some(name[pos + 1..].to_lowercase()),
        _ => None,
    }
}
