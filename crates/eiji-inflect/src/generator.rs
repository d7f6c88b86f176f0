//! Inflection Generator: variant headwords for one term.
//!
//! Dispatch is by the part-of-speech tags of the term's senses. The three
//! checks are independent, so a term tagged as noun and verb gets both
//! sets of forms, nouns first.

use eiji_core::{BuildParams, InflectionForm, TermRecord};

use crate::adjective::adjective_inflections;
use crate::linguistics::Linguistics;
use crate::noun::noun_inflections;
use crate::plurals::PluralOverrides;
use crate::verb::verb_inflections;

pub struct InflectionGenerator<'a> {
    overrides: &'a PluralOverrides,
    linguistics: &'a dyn Linguistics,
    params: &'a BuildParams,
}

impl<'a> InflectionGenerator<'a> {
    pub fn new(
        overrides: &'a PluralOverrides,
        linguistics: &'a dyn Linguistics,
        params: &'a BuildParams,
    ) -> Self {
        Self {
            overrides,
            linguistics,
            params,
        }
    }

    pub fn generate(&self, record: &TermRecord) -> Vec<InflectionForm> {
        let term = record.term.as_str();
        let mut forms = Vec::new();

        if record.any_tag(|t| self.params.is_noun_tag(t)) {
            forms.extend(noun_inflections(term, self.overrides));
        }
        if record.any_tag(|t| self.params.is_verb_tag(t)) {
            forms.extend(verb_inflections(term, self.linguistics));
        }
        if record.any_tag(|t| self.params.is_adjective_tag(t)) {
            forms.extend(adjective_inflections(term, self.linguistics));
        }

        if !forms.is_empty() {
            tracing::debug!(
                "{} inflections for {:?} ({})",
                forms.len(),
                term,
                self.linguistics.name()
            );
        }
        forms
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use eiji_core::{EntryKind, InflectionKind, LexicalEntry, PronunciationEntry, Sense};

    use crate::rules::EnglishRules;

    fn record(term: &str, tags: &[&str]) -> TermRecord {
        let mut record = TermRecord::new(term);
        record.senses.push(Sense::Pronunciation(PronunciationEntry {
            term: term.to_string(),
            ..Default::default()
        }));
        for tag in tags {
            record.senses.push(Sense::Lexical(LexicalEntry {
                term: term.to_string(),
                tag: tag.to_string(),
                kind: EntryKind::Standard,
                definition: "…".to_string(),
                is_taboo: false,
                is_archaic: false,
                url: None,
                english_example: None,
                japanese_example: None,
                region: None,
            }));
        }
        record
    }

    fn kinds(forms: &[InflectionForm]) -> Vec<InflectionKind> {
        forms.iter().map(|f| f.kind).collect()
    }

    #[test]
    fn noun_and_verb_tags_combine() {
        let params = BuildParams::default();
        let overrides = PluralOverrides::empty();
        let generator = InflectionGenerator::new(&overrides, &EnglishRules, &params);

        let forms = generator.generate(&record("walk", &["名", "自動"]));
        assert_eq!(
            kinds(&forms),
            vec![
                InflectionKind::Plural,
                InflectionKind::Possessive,
                InflectionKind::Past,
                InflectionKind::Gerund,
                InflectionKind::Future,
                InflectionKind::Present,
            ]
        );
        assert_eq!(forms[0].form, "walks");
        assert_eq!(forms[2].form, "walked");
    }

    #[test]
    fn noun_tag_must_match_exactly() {
        let params = BuildParams::default();
        let overrides = PluralOverrides::empty();
        let generator = InflectionGenerator::new(&overrides, &EnglishRules, &params);

        // 名詞句 is not the bare noun tag.
        assert!(generator.generate(&record("kick-off", &["名詞句"])).is_empty());
    }

    #[test]
    fn untagged_and_pronunciation_only_terms() {
        let params = BuildParams::default();
        let overrides = PluralOverrides::empty();
        let generator = InflectionGenerator::new(&overrides, &EnglishRules, &params);

        assert!(generator.generate(&record("hello", &[""])).is_empty());
        assert!(generator.generate(&record("hello", &[])).is_empty());
    }

    #[test]
    fn adjective_marker_is_a_substring() {
        let params = BuildParams::default();
        let overrides: PluralOverrides = ["child,children"].into_iter().collect();
        let generator = InflectionGenerator::new(&overrides, &EnglishRules, &params);

        let forms = generator.generate(&record("big", &["形"]));
        assert_eq!(forms[0], InflectionForm::new(InflectionKind::Comparative, "bigger"));

        let forms = generator.generate(&record("child", &["名"]));
        assert_eq!(forms[0], InflectionForm::new(InflectionKind::Plural, "children"));
    }
}
