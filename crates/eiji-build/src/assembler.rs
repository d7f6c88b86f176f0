//! Entry Assembler: one term's senses and inflections → archive records.
//!
//! Senses are grouped into tag-runs: a new output entry starts whenever
//! the part-of-speech tag differs from the previous sense's tag. Every
//! inflected form also becomes a non-lemma entry pointing back at the
//! lemma.

use eiji_core::{
    BuildParams, Definition, InflectionForm, Node, TagMeta, TermEntry, TermRecord,
};
use eiji_inflect::Highlighter;

use crate::content::{definition_list, list_item};

pub const NON_LEMMA: &str = "non-lemma";
pub const TABOO_TAG: &str = "⚠️";
pub const ARCHAIC_TAG: &str = "古";

/// Output of [`EntryAssembler::assemble`] for one term.
#[derive(Debug, Clone, Default)]
pub struct AssembledTerm {
    /// One entry per tag-run, in source order.
    pub entries: Vec<TermEntry>,
    /// Non-lemma entries, one per inflected form.
    pub redirects: Vec<TermEntry>,
    pub examples_highlighted: usize,
}

struct TagRun<'r> {
    tag: &'r str,
    items: Vec<Node>,
    term_tags: Vec<&'static str>,
}

impl<'r> TagRun<'r> {
    fn new(tag: &'r str) -> Self {
        Self {
            tag,
            items: Vec::new(),
            term_tags: Vec::new(),
        }
    }

    fn add_term_tag(&mut self, tag: &'static str) {
        if !self.term_tags.contains(&tag) {
            self.term_tags.push(tag);
        }
    }

    fn into_entry(self, term: &str, reading: &str) -> TermEntry {
        TermEntry {
            term: term.to_string(),
            reading: reading.to_string(),
            definition: Definition::Structured(definition_list(self.items)),
            definition_tags: self.tag.to_string(),
            term_tags: self.term_tags.join(" "),
        }
    }
}

pub struct EntryAssembler<'a> {
    params: &'a BuildParams,
}

impl<'a> EntryAssembler<'a> {
    pub fn new(params: &'a BuildParams) -> Self {
        Self { params }
    }

    pub fn assemble(&self, record: &TermRecord, inflections: &[InflectionForm]) -> AssembledTerm {
        let term = record.term.as_str();
        let reading = record.reading();
        let highlighter = Highlighter::new(term, inflections);

        let mut assembled = AssembledTerm::default();
        let mut current: Option<TagRun> = None;

        for entry in record.lexical() {
            if current.as_ref().map_or(false, |run| run.tag != entry.tag) {
                if let Some(run) = current.take() {
                    assembled.entries.push(run.into_entry(term, reading));
                }
            }
            let run = current.get_or_insert_with(|| TagRun::new(&entry.tag));

            if let Some(region) = entry.region {
                run.add_term_tag(region.label());
            }
            if self.params.register_tags {
                if entry.is_taboo {
                    run.add_term_tag(TABOO_TAG);
                }
                if entry.is_archaic {
                    run.add_term_tag(ARCHAIC_TAG);
                }
            }

            let example = entry
                .english_example
                .as_deref()
                .filter(|e| !e.is_empty())
                .map(|e| highlighter.highlight(e));
            if example.is_some() {
                assembled.examples_highlighted += 1;
            }
            run.items.push(list_item(entry, example.as_ref()));
        }
        if let Some(run) = current {
            assembled.entries.push(run.into_entry(term, reading));
        }

        assembled.redirects = inflections
            .iter()
            .map(|form| TermEntry {
                term: form.form.clone(),
                reading: String::new(),
                definition: Definition::Deinflection(
                    term.to_string(),
                    vec![form.kind.label().to_string()],
                ),
                definition_tags: NON_LEMMA.to_string(),
                term_tags: String::new(),
            })
            .collect();

        assembled
    }

    /// Metadata for the term tags this assembler can emit.
    pub fn tag_bank(&self) -> Vec<TagMeta> {
        let tag = |name: &str, category: &str, notes: &str| TagMeta {
            name: name.to_string(),
            category: category.to_string(),
            sorting_order: -5,
            notes: notes.to_string(),
            popularity_score: 0,
        };

        let mut tags = vec![
            tag("UK", "dialect", "英国式の綴り。米国以外の英語圏で広く使われる"),
            tag("US", "dialect", "米国式の綴り"),
        ];
        if self.params.register_tags {
            tags.push(tag(TABOO_TAG, "taboo", "差別的、または不快感を与える可能性がある語"));
            tags.push(tag(ARCHAIC_TAG, "archaic", "古語、または古風な言い回し"));
        }
        tags
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use eiji_core::{EntryKind, InflectionKind, LexicalEntry, PronunciationEntry, Region, Sense};
    use serde_json::Value;

    fn sense(tag: &str, definition: &str) -> LexicalEntry {
        LexicalEntry {
            term: "light".into(),
            tag: tag.into(),
            kind: EntryKind::Standard,
            definition: definition.into(),
            is_taboo: false,
            is_archaic: false,
            url: None,
            english_example: None,
            japanese_example: None,
            region: None,
        }
    }

    fn record(senses: Vec<LexicalEntry>) -> TermRecord {
        let mut record = TermRecord::new("light");
        record.senses.push(Sense::Pronunciation(PronunciationEntry {
            term: "light".into(),
            word_split: Some("light".into()),
            ..Default::default()
        }));
        record.senses.extend(senses.into_iter().map(Sense::Lexical));
        record
    }

    fn items(entry: &TermEntry) -> Vec<String> {
        let value = serde_json::to_value(&entry.definition).unwrap();
        value["content"]["content"]
            .as_array()
            .unwrap()
            .iter()
            .map(|li| li["content"][0].as_str().unwrap().to_string())
            .collect()
    }

    #[test]
    fn tag_runs_become_separate_entries() {
        let params = BuildParams::default();
        let assembler = EntryAssembler::new(&params);
        let record = record(vec![
            sense("名", "光"),
            sense("名", "明かり"),
            sense("形", "明るい"),
            sense("名", "灯火"),
        ]);

        let out = assembler.assemble(&record, &[]);
        assert_eq!(out.entries.len(), 3);
        assert_eq!(out.entries[0].definition_tags, "名");
        assert_eq!(items(&out.entries[0]), ["光", "明かり"]);
        assert_eq!(out.entries[1].definition_tags, "形");
        assert_eq!(items(&out.entries[1]), ["明るい"]);
        assert_eq!(items(&out.entries[2]), ["灯火"]);
        assert!(out.entries.iter().all(|e| e.reading == "light"));
    }

    #[test]
    fn pronunciation_only_term_emits_nothing() {
        let params = BuildParams::default();
        let out = EntryAssembler::new(&params).assemble(&record(vec![]), &[]);
        assert!(out.entries.is_empty());
        assert!(out.redirects.is_empty());
    }

    #[test]
    fn region_and_register_tags_are_per_run() {
        let mut uk = sense("名", "光");
        uk.region = Some(Region::Uk);
        let mut us = sense("名", "光");
        us.region = Some(Region::Us);
        let mut rude = sense("形", "軽い");
        rude.is_taboo = true;
        rude.is_archaic = true;
        let record = record(vec![uk.clone(), us, uk, rude]);

        let params = BuildParams::default();
        let out = EntryAssembler::new(&params).assemble(&record, &[]);
        assert_eq!(out.entries[0].term_tags, "UK US");
        assert_eq!(out.entries[1].term_tags, "");

        let params = BuildParams {
            register_tags: true,
            ..BuildParams::default()
        };
        let assembler = EntryAssembler::new(&params);
        let out = assembler.assemble(&record, &[]);
        assert_eq!(out.entries[1].term_tags, "⚠️ 古");
        assert_eq!(assembler.tag_bank().len(), 4);
    }

    #[test]
    fn inflections_become_redirects_and_highlights() {
        let mut lit = sense("他動", "火をつける");
        lit.english_example = Some("She lit a candle".into());
        lit.japanese_example = Some("彼女はろうそくに火をつけた。".into());
        let record = record(vec![lit]);
        let forms = [InflectionForm::new(InflectionKind::Past, "lit")];

        let params = BuildParams::default();
        let out = EntryAssembler::new(&params).assemble(&record, &forms);
        assert_eq!(out.examples_highlighted, 1);
        assert_eq!(out.redirects.len(), 1);
        assert_eq!(out.redirects[0].term, "lit");
        assert_eq!(out.redirects[0].definition_tags, NON_LEMMA);
        assert_eq!(
            serde_json::to_value(&out.redirects[0].definition).unwrap(),
            serde_json::json!(["light", ["past"]])
        );

        let value = serde_json::to_value(&out.entries[0].definition).unwrap();
        let spans = &value["content"]["content"][0]["content"][1]["content"]["content"]["content"][0]
            ["content"][0]["content"];
        let matched: Vec<&Value> = spans
            .as_array()
            .unwrap()
            .iter()
            .filter(|s| s.get("style").is_some())
            .collect();
        assert_eq!(matched.len(), 1);
        assert_eq!(matched[0]["content"], "lit");
    }
}
