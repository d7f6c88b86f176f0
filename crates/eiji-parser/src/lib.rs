pub mod aggregate;
pub mod example;
pub mod extractor;
pub mod region;
pub mod source;

pub use aggregate::Lexicon;
pub use extractor::{is_entry_line, parse_line, ENTRY_MARKER};
pub use source::{open_source, LineSource, SourceEncoding};

use std::io::BufRead;

use eiji_core::{Error, Result};

/// Drain a line source into a [`Lexicon`], logging every `progress_every`
/// significant lines. A read error aborts the whole load.
pub fn read_lexicon<R: BufRead>(
    source: &mut LineSource<R>,
    progress_every: usize,
    origin: &std::path::Path,
) -> Result<Lexicon> {
    let mut lexicon = Lexicon::new();
    let mut skipped = 0usize;

    for line in source.by_ref() {
        let line = line.map_err(|e| Error::io(origin, e))?;
        if !lexicon.push_line(&line) {
            skipped += 1;
        }
        let seen = lexicon.sense_count() + skipped;
        if progress_every > 0 && seen % progress_every == 0 {
            tracing::info!("  {} lines processed", seen);
        }
    }

    tracing::info!(
        "Finished processing {} lines ({} skipped), {} terms",
        source.significant(),
        skipped,
        lexicon.len()
    );
    Ok(lexicon)
}
