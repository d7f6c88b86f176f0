//! Build pipeline: source file → lexicon → inflections → archive.

use std::path::Path;

use serde::Serialize;

use eiji_core::{BuildParams, Result};
use eiji_inflect::{InflectionGenerator, Linguistics, PluralOverrides};
use eiji_parser::{open_source, read_lexicon};

use crate::archive::ArchiveWriter;
use crate::assembler::EntryAssembler;

/// Totals for one build run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct BuildReport {
    /// Physical lines in the source file.
    pub lines_read: usize,
    /// Lines starting with the entry marker.
    pub significant_lines: usize,
    pub terms: usize,
    pub senses: usize,
    pub pronunciations: usize,
    /// Lemma entries, one per tag-run.
    pub lemma_entries: usize,
    /// Non-lemma entries, one per inflected form.
    pub inflection_entries: usize,
    pub examples_highlighted: usize,
}

impl BuildReport {
    pub fn log(&self) {
        tracing::info!("Build finished");
        tracing::info!("  Lines read:           {}", self.lines_read);
        tracing::info!("  Entry lines:          {}", self.significant_lines);
        tracing::info!("  Terms:                {}", self.terms);
        tracing::info!("  Senses:               {}", self.senses);
        tracing::info!("  Pronunciations:       {}", self.pronunciations);
        tracing::info!("  Lemma entries:        {}", self.lemma_entries);
        tracing::info!("  Inflection entries:   {}", self.inflection_entries);
        tracing::info!("  Examples highlighted: {}", self.examples_highlighted);
    }
}

/// Tracks assembly progress in 10% steps.
struct Progress {
    total: usize,
    done: usize,
    percentage: usize,
}

impl Progress {
    fn new(total: usize) -> Self {
        Self {
            total: total.max(1),
            done: 0,
            percentage: 0,
        }
    }

    /// Count one term; returns the step reached when a new 10% boundary is crossed.
    fn advance(&mut self) -> Option<usize> {
        self.done += 1;
        let current = 100 * self.done / self.total;
        let previous = std::mem::replace(&mut self.percentage, current);
        (current / 10 > previous / 10).then_some(current / 10 * 10)
    }
}

/// Run a full build into `archive` and export it.
///
/// The plural table is loaded before the source is opened, so a missing
/// table fails the run before any parsing work.
pub fn run(
    input: &Path,
    plurals: &Path,
    params: &BuildParams,
    linguistics: &dyn Linguistics,
    archive: &mut dyn ArchiveWriter,
) -> Result<BuildReport> {
    let overrides = PluralOverrides::load(plurals)?;

    let mut source = open_source(input)?;
    let lexicon = read_lexicon(&mut source, params.progress_every, input)?;

    let mut report = BuildReport {
        lines_read: source.lines_read(),
        significant_lines: source.significant(),
        terms: lexicon.len(),
        senses: lexicon.sense_count(),
        ..BuildReport::default()
    };

    let generator = InflectionGenerator::new(&overrides, linguistics, params);
    let assembler = EntryAssembler::new(params);
    tracing::info!("Assembling {} terms with {}", lexicon.len(), linguistics.name());

    let mut progress = Progress::new(lexicon.len());
    for record in lexicon.iter() {
        report.pronunciations += record.pronunciations().count();

        let inflections = generator.generate(record);
        let assembled = assembler.assemble(record, &inflections);
        report.lemma_entries += assembled.entries.len();
        report.inflection_entries += assembled.redirects.len();
        report.examples_highlighted += assembled.examples_highlighted;

        for entry in assembled.redirects.into_iter().chain(assembled.entries) {
            archive.add_entry(entry);
        }

        if let Some(step) = progress.advance() {
            tracing::info!("  Entries: {}%", step);
        }
    }

    for tag in assembler.tag_bank() {
        archive.add_tag(tag);
    }
    archive.export()?;

    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::archive::JsonArchive;
    use eiji_core::{DictionaryIndex, Error};
    use eiji_inflect::EnglishRules;
    use serde_json::Value;
    use std::io::Write;

    const LEXICON: &str = "\
■cat : 【発音】kǽt、【分節】cat
■cat  {名-1} : 猫■・The cat sat on the mat.  猫がマットに座った。
■cat  {名-2} : 〈英〉ネコ科の動物
■give up  {句動} : 諦める■・Never give up.  決して諦めるな。
■colour  {名} : 〈英〉→color
■one's way : 道
";

    fn write(dir: &Path, name: &str, content: &str) -> std::path::PathBuf {
        let path = dir.join(name);
        std::fs::File::create(&path)
            .unwrap()
            .write_all(content.as_bytes())
            .unwrap();
        path
    }

    #[test]
    fn builds_archive_from_text_lexicon() {
        let dir = tempfile::tempdir().unwrap();
        let input = write(dir.path(), "input.txt", LEXICON);
        let plurals = write(dir.path(), "noun.csv", "cat,cats\n");
        let output = dir.path().join("eiji.json");

        let params = BuildParams::default();
        let mut archive = JsonArchive::new(&output, DictionaryIndex::from_params(&params));
        let report = run(&input, &plurals, &params, &EnglishRules, &mut archive).unwrap();

        assert_eq!(report.lines_read, 6);
        assert_eq!(report.significant_lines, 6);
        assert_eq!(report.terms, 3);
        assert_eq!(report.senses, 5);
        assert_eq!(report.pronunciations, 1);
        assert_eq!(report.lemma_entries, 3);
        assert_eq!(report.examples_highlighted, 2);

        let value: Value = serde_json::from_str(&std::fs::read_to_string(&output).unwrap()).unwrap();
        let terms = value["terms"].as_array().unwrap();
        assert_eq!(terms.len(), report.lemma_entries + report.inflection_entries);

        let cat: Vec<&Value> = terms.iter().filter(|t| t["term"] == "cat").collect();
        assert_eq!(cat.len(), 1);
        assert_eq!(cat[0]["reading"], "cat");
        assert_eq!(cat[0]["term_tags"], "UK");

        let cats = terms.iter().find(|t| t["term"] == "cats").unwrap();
        assert_eq!(cats["definition"], serde_json::json!(["cat", ["plural"]]));
        assert!(terms.iter().any(|t| t["term"] == "gave up"));
        assert!(terms.iter().any(|t| t["term"] == "colours"));
        assert_eq!(value["tags"].as_array().unwrap().len(), 2);
    }

    #[test]
    fn progress_reports_every_step_for_small_lexicons() {
        let mut progress = Progress::new(15);
        let steps: Vec<usize> = (0..15).filter_map(|_| progress.advance()).collect();
        assert_eq!(steps, [10, 20, 30, 40, 50, 60, 70, 80, 90, 100]);
    }

    #[test]
    fn progress_skips_steps_it_jumps_over() {
        let mut progress = Progress::new(3);
        let steps: Vec<usize> = (0..3).filter_map(|_| progress.advance()).collect();
        assert_eq!(steps, [30, 60, 100]);
    }

    #[test]
    fn missing_plural_table_is_fatal() {
        let dir = tempfile::tempdir().unwrap();
        let input = write(dir.path(), "input.txt", LEXICON);
        let output = dir.path().join("eiji.json");

        let params = BuildParams::default();
        let mut archive = JsonArchive::new(&output, DictionaryIndex::from_params(&params));
        let err = run(&input, &dir.path().join("missing.csv"), &params, &EnglishRules, &mut archive)
            .unwrap_err();
        assert!(matches!(err, Error::Io { .. }));
        assert!(!output.exists());
    }
}
