//! Example Highlighter: marks occurrences of a term, or any of its
//! inflected forms, inside an example sentence.
//!
//! The sentence is split into word, punctuation and whitespace tokens.
//! Tokens accumulate in a buffer while the buffer is still the start of
//! some candidate; an exact match is emitted as a highlighted fragment.
//! Matching is case-insensitive, so `give`, `Give` and `GIVE` all hit.
//! Concatenating the fragments always gives back the input sentence.

use std::collections::HashSet;

use once_cell::sync::Lazy;
use regex::Regex;

use eiji_core::{Fragment, HighlightedExample, InflectionForm};

static TOKEN: Lazy<Regex> = Lazy::new(|| Regex::new(r"\w+|[^\w\s]+|\s+").unwrap());

/// Lowercase, with every whitespace run collapsed to one space.
fn fold(text: &str) -> String {
    text.split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase()
}

fn is_space(token: &str) -> bool {
    token.chars().all(char::is_whitespace)
}

/// Candidate set for one term, reusable across all of its examples.
#[derive(Debug, Clone)]
pub struct Highlighter {
    candidates: HashSet<String>,
}

impl Highlighter {
    pub fn new(lemma: &str, forms: &[InflectionForm]) -> Self {
        let candidates = std::iter::once(lemma)
            .chain(forms.iter().map(|f| f.form.as_str()))
            .map(fold)
            .filter(|c| !c.is_empty())
            .collect();
        Self { candidates }
    }

    pub fn highlight(&self, sentence: &str) -> HighlightedExample {
        let mut scanner = Scanner {
            highlighter: self,
            fragments: Vec::new(),
            plain: String::new(),
            buffer: Vec::new(),
            closing: false,
        };
        for token in TOKEN.find_iter(sentence) {
            scanner.push(token.as_str());
        }
        scanner.finish()
    }

    fn is_candidate(&self, key: &str) -> bool {
        self.candidates.contains(key)
    }

    fn is_prefix(&self, key: &str) -> bool {
        self.candidates.iter().any(|c| c.starts_with(key))
    }
}

struct Scanner<'h, 's> {
    highlighter: &'h Highlighter,
    fragments: Vec<Fragment>,
    plain: String,
    /// Tokens of a possible match, original casing and spacing.
    buffer: Vec<&'s str>,
    /// Set at end of input, when no further token can complete a match.
    closing: bool,
}

impl<'h, 's> Scanner<'h, 's> {
    fn push(&mut self, token: &'s str) {
        if is_space(token) {
            if self.buffer.is_empty() {
                self.plain.push_str(token);
            } else {
                self.buffer.push(token);
            }
            return;
        }

        self.buffer.push(token);
        let key = fold(&self.buffer.concat());
        if self.highlighter.is_candidate(&key) {
            self.emit_match();
        } else if self.closing || !self.highlighter.is_prefix(&key) {
            self.reject();
        }
    }

    fn emit_match(&mut self) {
        if !self.plain.is_empty() {
            self.fragments.push(Fragment::plain(std::mem::take(&mut self.plain)));
        }
        self.fragments.push(Fragment::matched(self.buffer.concat()));
        self.buffer.clear();
    }

    /// The buffer cannot start a match: its first token becomes plain text
    /// and the rest is scanned again, so a shorter match inside it is
    /// still found.
    fn reject(&mut self) {
        let mut rest = std::mem::take(&mut self.buffer).into_iter();
        if let Some(first) = rest.next() {
            self.plain.push_str(first);
        }
        for token in rest {
            self.push(token);
        }
    }

    fn finish(mut self) -> HighlightedExample {
        self.closing = true;
        if !self.buffer.is_empty() {
            self.reject();
        }
        if !self.plain.is_empty() {
            self.fragments.push(Fragment::plain(self.plain));
        }
        HighlightedExample {
            fragments: self.fragments,
        }
    }
}
