//! Known plural forms, loaded once from a comma-separated reference file.
//!
//! ```text
//! child,children
//! fish,fish,fishes
//! ```

use std::collections::HashMap;
use std::io::BufRead;
use std::path::Path;

use eiji_core::{Error, Result};

#[derive(Debug, Clone, Default)]
pub struct PluralOverrides {
    plurals: HashMap<String, Vec<String>>,
}

impl PluralOverrides {
    /// Load from a file. A missing or unreadable file is an error: the
    /// fallback rules alone produce wrong plurals for irregular nouns.
    pub fn load(path: &Path) -> Result<Self> {
        let file = std::fs::File::open(path).map_err(|e| Error::io(path, e))?;
        let overrides =
            Self::from_reader(std::io::BufReader::new(file)).map_err(|e| Error::io(path, e))?;
        tracing::info!("Loaded {} plural overrides from {:?}", overrides.len(), path);
        Ok(overrides)
    }

    pub fn from_reader<R: BufRead>(reader: R) -> std::io::Result<Self> {
        let mut overrides = Self::empty();
        for line in reader.lines() {
            overrides.insert_row(&line?);
        }
        Ok(overrides)
    }

    /// Create an empty table (useful for testing).
    pub fn empty() -> Self {
        Self::default()
    }

    /// Rows with fewer than two columns are ignored; a repeated lemma
    /// replaces the earlier row.
    fn insert_row(&mut self, row: &str) {
        let columns: Vec<&str> = row.split(',').map(str::trim).collect();
        if columns.len() < 2 || columns[0].is_empty() {
            return;
        }
        let plurals: Vec<String> = columns[1..]
            .iter()
            .filter(|c| !c.is_empty())
            .map(|c| c.to_string())
            .collect();
        if plurals.is_empty() {
            return;
        }
        self.plurals.insert(columns[0].to_string(), plurals);
    }

    pub fn get(&self, lemma: &str) -> Option<&[String]> {
        self.plurals.get(lemma).map(Vec::as_slice)
    }

    pub fn len(&self) -> usize {
        self.plurals.len()
    }

    pub fn is_empty(&self) -> bool {
        self.plurals.is_empty()
    }
}

impl<'a> FromIterator<&'a str> for PluralOverrides {
    fn from_iter<I: IntoIterator<Item = &'a str>>(rows: I) -> Self {
        let mut overrides = Self::empty();
        for row in rows {
            overrides.insert_row(row);
        }
        overrides
    }
}
