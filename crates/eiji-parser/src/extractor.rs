//! Field extraction for a single `■` line of the lexicon.
//!
//! Two line shapes are recognised:
//! ```text
//! ■abandon : 【発音】əbǽndən、【変化】《動》abandons | abandoning | abandoned、【分節】a・ban・don
//! ■abandon  {他動-1} : 捨てる■・He abandoned his plan. 彼は計画を断念した。
//! ```
//! Anything else is skipped without error.

use once_cell::sync::Lazy;
use regex::Regex;

use eiji_core::{EntryKind, LexicalEntry, PronunciationEntry, Sense};

use crate::example::extract_example;
use crate::region::detect_region;

pub const ENTRY_MARKER: char = '■';

const PRONUNCIATION_MARKERS: [&str; 2] = ["【発音】", "【発音！】"];

/// Headwords containing these are placeholders or possessive patterns.
const EXCLUDED_TERM_PARTS: [&str; 5] = ["__", "~", "one's", "someone's", "oneself"];

static PRONUNCIATION_LINE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^■(.+?)\s*:\s*(.*)$").unwrap());
static IPA: Lazy<Regex> = Lazy::new(|| Regex::new(r"【発音.*?】(.*?)(?:、|$)").unwrap());
static TRANSFORMATIONS: Lazy<Regex> = Lazy::new(|| Regex::new(r"【変化】(.*?)(?:、|$)").unwrap());
static WORD_SPLIT: Lazy<Regex> = Lazy::new(|| Regex::new(r"【分節】(.*?)(?:、|$)").unwrap());

static STANDARD_LINE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^■(.+?)(?:\s*\{([^}]+)\})?\s*:\s*(.+)$").unwrap());
static TAG_TEXT: Lazy<Regex> = Lazy::new(|| Regex::new(r"[^\d\-{}]+").unwrap());

static TABOO: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"差別語|〈.*俗.*〉|〈.*卑.*〉|〈.*軽蔑.*〉").unwrap());
static ARCHAIC: Lazy<Regex> = Lazy::new(|| Regex::new(r"〈.*古.*〉").unwrap());

// The URL runs to the next entry marker so a following example survives.
static URL: Lazy<Regex> = Lazy::new(|| Regex::new(r"【URL】([^■]+)").unwrap());

static LINK: Lazy<Regex> = Lazy::new(|| Regex::new(r"→\s*[a-zA-Z]").unwrap());
static LINK_SYNTAX: Lazy<Regex> = Lazy::new(|| Regex::new(r"<→(.*?)>").unwrap());

/// Whether a raw source line should be handed to [`parse_line`].
pub fn is_entry_line(line: &str) -> bool {
    line.trim_start().starts_with(ENTRY_MARKER)
}

/// Parse one source line. `None` means the line is skipped.
pub fn parse_line(line: &str) -> Option<Sense> {
    let line = line.trim();
    if !line.starts_with(ENTRY_MARKER) {
        return None;
    }

    if PRONUNCIATION_MARKERS.iter().any(|m| line.contains(m)) {
        parse_pronunciation(line).map(Sense::Pronunciation)
    } else {
        parse_standard(line).map(Sense::Lexical)
    }
}

fn parse_pronunciation(line: &str) -> Option<PronunciationEntry> {
    let caps = PRONUNCIATION_LINE.captures(line)?;
    let term = caps[1].trim();
    if term.is_empty() {
        return None;
    }
    let data = caps[2].trim();

    Some(PronunciationEntry {
        term: term.to_string(),
        ipa: labelled_field(&IPA, data),
        transformations: labelled_field(&TRANSFORMATIONS, data),
        word_split: labelled_field(&WORD_SPLIT, data),
        is_noun: data.contains("《複》"),
        is_verb: data.contains("《動》"),
        is_adjective: data.contains("《形》"),
    })
}

fn labelled_field(pattern: &Regex, data: &str) -> Option<String> {
    pattern
        .captures(data)
        .and_then(|c| c.get(1))
        .map(|m| m.as_str().trim().to_string())
}

fn parse_standard(line: &str) -> Option<LexicalEntry> {
    let caps = STANDARD_LINE.captures(line)?;

    let term = strip_affix_hyphens(caps[1].trim());
    if term.trim().is_empty() || is_excluded_term(&term) {
        return None;
    }

    let tag = caps.get(2).map(|m| clean_tag(m.as_str())).unwrap_or_default();
    let mut definition = caps[3].trim().to_string();

    let is_taboo = TABOO.is_match(line);
    let is_archaic = ARCHAIC.is_match(line);

    let url = URL.captures(line).map(|c| c[1].trim().to_string());
    if url.is_some() {
        definition = URL.replace(&definition, "").trim().to_string();
    }

    let example = extract_example(&definition);
    definition = example.definition;

    let (region, rewritten) = detect_region(&definition);
    definition = rewritten;

    let mut kind = EntryKind::Standard;
    if LINK.is_match(line) {
        kind = EntryKind::Link;
        definition = LINK_SYNTAX.replace_all(&definition, " $1").into_owned();
    }

    Some(LexicalEntry {
        term,
        tag,
        kind,
        definition,
        is_taboo,
        is_archaic,
        url,
        english_example: example.english,
        japanese_example: example.japanese,
        region,
    })
}

/// `-able` → `able`, `poly-` → `poly`, `A - B` → `A  B`.
pub fn strip_affix_hyphens(term: &str) -> String {
    let chars: Vec<char> = term.chars().collect();
    let last = chars.len().saturating_sub(1);

    chars
        .iter()
        .enumerate()
        .filter(|&(i, &c)| {
            if c != '-' {
                return true;
            }
            let leading = i == 0;
            let trailing = i == last;
            let isolated = i > 0
                && i < last
                && chars[i - 1].is_whitespace()
                && chars[i + 1].is_whitespace();
            !(leading || trailing || isolated)
        })
        .map(|(_, &c)| c)
        .collect()
}

pub fn is_excluded_term(term: &str) -> bool {
    EXCLUDED_TERM_PARTS.iter().any(|p| term.contains(p))
}

/// `形-1` → `形`, `1` → ``.
pub fn clean_tag(raw: &str) -> String {
    TAG_TEXT
        .find(raw)
        .map(|m| m.as_str().to_string())
        .unwrap_or_default()
}
