//! Where documents come from.
//!
//! Paths are `/`-separated and relative to the source root, e.g.
//! `locales/es_ES.xml`.

use std::collections::BTreeMap;
use std::fs;
use std::io;
use std::path::PathBuf;

use crate::{Document, MarkupError};

const EXTENSION: &str = ".xml";

/// A tree of markup documents.
pub trait MarkupSource {
    /// Load and parse a document. A missing document is `Ok(None)`.
    fn load(&self, path: &str) -> Result<Option<Document>, MarkupError>;

    /// Sorted stems of the `*.xml` documents directly inside `dir`.
    ///
    /// A missing directory lists as empty.
    fn list(&self, dir: &str) -> Result<Vec<String>, MarkupError>;

    /// Delete a document. Returns whether it existed.
    fn remove(&mut self, path: &str) -> Result<bool, MarkupError>;
}

/// Documents on disk under a root directory.
#[derive(Clone, Debug)]
pub struct FsSource {
    root: PathBuf,
}

impl FsSource {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        FsSource { root: root.into() }
    }

    pub fn root(&self) -> &std::path::Path {
        &self.root
    }

    fn resolve(&self, path: &str) -> PathBuf {
        path.split('/')
            .filter(|part| !part.is_empty())
            .fold(self.root.clone(), |acc, part| acc.join(part))
    }
}

fn io_error(path: &str, source: io::Error) -> MarkupError {
    MarkupError::Io {
        path: path.to_string(),
        source,
    }
}

impl MarkupSource for FsSource {
    fn load(&self, path: &str) -> Result<Option<Document>, MarkupError> {
        let text = match fs::read_to_string(self.resolve(path)) {
            Ok(text) => text,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(io_error(path, e)),
        };
        tracing::trace!(path, bytes = text.len(), "loaded document");
        Document::parse(path, &text).map(Some)
    }

    fn list(&self, dir: &str) -> Result<Vec<String>, MarkupError> {
        let entries = match fs::read_dir(self.resolve(dir)) {
            Ok(entries) => entries,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(io_error(dir, e)),
        };
        let mut stems = Vec::new();
        for entry in entries {
            let entry = entry.map_err(|e| io_error(dir, e))?;
            if !entry.file_type().map_err(|e| io_error(dir, e))?.is_file() {
                continue;
            }
            let name = entry.file_name();
            if let Some(stem) = name.to_str().and_then(|n| n.strip_suffix(EXTENSION)) {
                stems.push(stem.to_string());
            }
        }
        stems.sort_unstable();
        Ok(stems)
    }

    fn remove(&mut self, path: &str) -> Result<bool, MarkupError> {
        match fs::remove_file(self.resolve(path)) {
            Ok(()) => Ok(true),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(false),
            Err(e) => Err(io_error(path, e)),
        }
    }
}

/// Documents held in memory, keyed by path.
#[derive(Clone, Debug, Default)]
pub struct MemorySource {
    files: BTreeMap<String, String>,
}

impl MemorySource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, path: impl Into<String>, text: impl Into<String>) {
        self.files.insert(path.into(), text.into());
    }

    #[must_use]
    pub fn with(mut self, path: impl Into<String>, text: impl Into<String>) -> Self {
        self.insert(path, text);
        self
    }

    pub fn contains(&self, path: &str) -> bool {
        self.files.contains_key(path)
    }
}

impl MarkupSource for MemorySource {
    fn load(&self, path: &str) -> Result<Option<Document>, MarkupError> {
        self.files
            .get(path)
            .map(|text| Document::parse(path, text))
            .transpose()
    }

    fn list(&self, dir: &str) -> Result<Vec<String>, MarkupError> {
        let prefix = format!("{}/", dir.trim_end_matches('/'));
        // BTreeMap iteration keeps the stems sorted.
        Ok(self
            .files
            .keys()
            .filter_map(|path| path.strip_prefix(&prefix))
            .filter(|rest| !rest.contains('/'))
            .filter_map(|rest| rest.strip_suffix(EXTENSION))
            .map(str::to_string)
            .collect())
    }

    fn remove(&mut self, path: &str) -> Result<bool, MarkupError> {
        Ok(self.files.remove(path).is_some())
    }
}
