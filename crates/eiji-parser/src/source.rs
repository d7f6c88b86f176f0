//! Forward-only line source over the lexicon file.
//!
//! Lines are pulled one at a time so the raw file is never held in memory.
//! Only significant lines (first non-whitespace char is `■`) are yielded.
//! Undecodable bytes become U+FFFD instead of failing the read, and a
//! leading byte-order mark is dropped.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use encoding_rs_io::DecodeReaderBytesBuilder;

use eiji_core::{Error, Result};

use crate::extractor::is_entry_line;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceEncoding {
    Utf8,
    ShiftJis,
}

impl SourceEncoding {
    /// Distributed `EIJIRO*.txt` files are Shift_JIS; everything else is UTF-8.
    pub fn for_path(path: &Path) -> Self {
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        if name.ends_with(".txt") && name.contains("EIJIRO") {
            SourceEncoding::ShiftJis
        } else {
            SourceEncoding::Utf8
        }
    }
}

const BOM: char = '\u{FEFF}';

pub struct LineSource<R> {
    reader: R,
    buf: Vec<u8>,
    lines_read: usize,
    significant: usize,
}

impl<R: BufRead> LineSource<R> {
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            buf: Vec::new(),
            lines_read: 0,
            significant: 0,
        }
    }

    /// Next physical line without its terminator, or `None` at end of input.
    fn read_line(&mut self) -> std::io::Result<Option<String>> {
        self.buf.clear();
        if self.reader.read_until(b'\n', &mut self.buf)? == 0 {
            return Ok(None);
        }
        let text = String::from_utf8_lossy(&self.buf);
        let text = text.trim_end_matches(['\n', '\r']);
        let text = if self.lines_read == 0 {
            text.trim_start_matches(BOM)
        } else {
            text
        };
        Ok(Some(text.to_string()))
    }

    /// Physical lines consumed so far, significant or not.
    pub fn lines_read(&self) -> usize {
        self.lines_read
    }

    /// Significant lines yielded so far.
    pub fn significant(&self) -> usize {
        self.significant
    }
}

impl<R: BufRead> Iterator for LineSource<R> {
    type Item = std::io::Result<String>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let line = match self.read_line() {
                Ok(Some(line)) => line,
                Ok(None) => return None,
                Err(e) => return Some(Err(e)),
            };
            self.lines_read += 1;
            if is_entry_line(&line) {
                self.significant += 1;
                return Some(Ok(line.trim().to_string()));
            }
        }
    }
}

/// Open a lexicon file, decoding it according to [`SourceEncoding::for_path`].
pub fn open_source(path: &Path) -> Result<LineSource<Box<dyn BufRead>>> {
    let file = File::open(path).map_err(|e| Error::io(path, e))?;
    let encoding = SourceEncoding::for_path(path);
    tracing::info!("Opened {:?} as {:?}", path, encoding);

    let decoder = match encoding {
        SourceEncoding::Utf8 => encoding_rs::UTF_8,
        SourceEncoding::ShiftJis => encoding_rs::SHIFT_JIS,
    };
    let reader: Box<dyn BufRead> = Box::new(BufReader::new(
        DecodeReaderBytesBuilder::new()
            .encoding(Some(decoder))
            .bom_sniffing(true)
            .build(file),
    ));
    Ok(LineSource::new(reader))
}
