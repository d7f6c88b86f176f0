//! Accumulates parsed senses into per-term records.

use std::collections::HashMap;

use eiji_core::{Sense, TermRecord};

use crate::extractor::parse_line;

/// Every term in first-appearance order, each with its senses in source order.
#[derive(Debug, Clone, Default)]
pub struct Lexicon {
    records: Vec<TermRecord>,
    index: HashMap<String, usize>,
    senses: usize,
}

impl Lexicon {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a sense to its term, creating the record on first sight.
    /// Identical senses are kept as separate entries.
    pub fn push(&mut self, sense: Sense) {
        let slot = match self.index.get(sense.term()) {
            Some(&i) => i,
            None => {
                let i = self.records.len();
                self.index.insert(sense.term().to_string(), i);
                self.records.push(TermRecord::new(sense.term()));
                i
            }
        };
        self.records[slot].senses.push(sense);
        self.senses += 1;
    }

    /// Parse and append one raw line. Returns whether anything was added.
    pub fn push_line(&mut self, line: &str) -> bool {
        match parse_line(line) {
            Some(sense) => {
                self.push(sense);
                true
            }
            None => false,
        }
    }

    pub fn get(&self, term: &str) -> Option<&TermRecord> {
        self.index.get(term).map(|&i| &self.records[i])
    }

    pub fn contains(&self, term: &str) -> bool {
        self.index.contains_key(term)
    }

    pub fn iter(&self) -> impl Iterator<Item = &TermRecord> {
        self.records.iter()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn sense_count(&self) -> usize {
        self.senses
    }
}

impl FromIterator<Sense> for Lexicon {
    fn from_iter<I: IntoIterator<Item = Sense>>(iter: I) -> Self {
        let mut lexicon = Lexicon::new();
        for sense in iter {
            lexicon.push(sense);
        }
        lexicon
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn terms_keep_first_appearance_order() {
        let mut lexicon = Lexicon::new();
        for line in [
            "■dog  {名} : 犬",
            "■cat  {名} : 猫",
            "■dog  {他動} : つけ回す",
        ] {
            assert!(lexicon.push_line(line));
        }
        let terms: Vec<_> = lexicon.iter().map(|r| r.term.as_str()).collect();
        assert_eq!(terms, ["dog", "cat"]);
        assert_eq!(lexicon.get("dog").unwrap().senses.len(), 2);
        assert_eq!(lexicon.sense_count(), 3);
    }

    #[test]
    fn duplicates_are_preserved() {
        let lexicon: Lexicon = ["■cat  {名} : 猫", "■cat  {名} : 猫"]
            .iter()
            .filter_map(|l| parse_line(l))
            .collect();
        assert_eq!(lexicon.len(), 1);
        let record = lexicon.get("cat").unwrap();
        assert_eq!(record.senses.len(), 2);
        assert_eq!(record.senses[0], record.senses[1]);
    }

    #[test]
    fn skipped_lines_create_nothing() {
        let mut lexicon = Lexicon::new();
        assert!(!lexicon.push_line("■one's own : 自分の"));
        assert!(!lexicon.push_line("garbage"));
        assert!(lexicon.is_empty());
        assert!(!lexicon.contains("one's own"));
    }

    #[test]
    fn pronunciation_and_senses_share_a_record() {
        let mut lexicon = Lexicon::new();
        lexicon.push_line("■abandon : 【発音】əbǽndən、【分節】a・ban・don");
        lexicon.push_line("■abandon  {他動-1} : 捨てる");
        let record = lexicon.get("abandon").unwrap();
        assert_eq!(record.senses.len(), 2);
        assert_eq!(record.reading(), "a・ban・don");
        assert_eq!(record.lexical().count(), 1);
    }
}
