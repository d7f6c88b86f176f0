//! Archive writers.
//!
//! The assembler only talks to [`ArchiveWriter`]. The bundled
//! [`JsonArchive`] buffers every record and writes one JSON document on
//! export:
//!
//! ```text
//! { "index": {...}, "tags": [...], "terms": [...], "meta": [...] }
//! ```

use std::path::PathBuf;

use serde::Serialize;

use eiji_core::{DictionaryIndex, Error, Result, TagMeta, TermEntry, TermMeta};

/// Sink for finished dictionary records.
///
/// # Implementing a new writer
///
/// ```ignore
/// struct ZipArchive { /* ... */ }
///
/// impl ArchiveWriter for ZipArchive {
///     fn add_entry(&mut self, entry: TermEntry) { /* ... */ }
///     fn add_tag(&mut self, tag: TagMeta) { /* ... */ }
///     fn add_meta(&mut self, meta: TermMeta) { /* ... */ }
///     fn export(&mut self) -> Result<PathBuf> { /* ... */ }
/// }
/// ```
pub trait ArchiveWriter {
    fn add_entry(&mut self, entry: TermEntry);

    fn add_tag(&mut self, tag: TagMeta);

    /// Frequency record for a term.
    fn add_meta(&mut self, meta: TermMeta);

    /// Write everything added so far. Returns the path written.
    fn export(&mut self) -> Result<PathBuf>;
}

#[derive(Serialize)]
struct ArchiveDocument<'a> {
    index: &'a DictionaryIndex,
    tags: &'a [TagMeta],
    terms: &'a [TermEntry],
    meta: &'a [TermMeta],
}

pub struct JsonArchive {
    path: PathBuf,
    index: DictionaryIndex,
    tags: Vec<TagMeta>,
    terms: Vec<TermEntry>,
    meta: Vec<TermMeta>,
}

impl JsonArchive {
    pub fn new(path: impl Into<PathBuf>, index: DictionaryIndex) -> Self {
        Self {
            path: path.into(),
            index,
            tags: Vec::new(),
            terms: Vec::new(),
            meta: Vec::new(),
        }
    }
}

impl ArchiveWriter for JsonArchive {
    fn add_entry(&mut self, entry: TermEntry) {
        self.terms.push(entry);
    }

    /// A tag name registered twice keeps its first metadata.
    fn add_tag(&mut self, tag: TagMeta) {
        if !self.tags.iter().any(|t| t.name == tag.name) {
            self.tags.push(tag);
        }
    }

    fn add_meta(&mut self, meta: TermMeta) {
        self.meta.push(meta);
    }

    fn export(&mut self) -> Result<PathBuf> {
        let document = ArchiveDocument {
            index: &self.index,
            tags: &self.tags,
            terms: &self.terms,
            meta: &self.meta,
        };
        let json = serde_json::to_string(&document)?;
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).map_err(|e| Error::io(parent, e))?;
        }
        std::fs::write(&self.path, &json).map_err(|e| Error::io(&self.path, e))?;

        let size_mb = json.len() as f64 / (1024.0 * 1024.0);
        tracing::info!("Wrote {:?} ({:.1} MB)", self.path, size_mb);
        Ok(self.path.clone())
    }
}
