//! Example-sentence extraction.
//!
//! An example follows the `■・` marker inside a definition. Two strategies
//! are tried in order and the first that yields an English sentence wins:
//!
//! 1. sentence: `■・English sentence. 日本語の文。/追加の文。`
//! 2. quoted: `■・"English" 日本語` up to the next `■` or end of line.

use std::ops::Range;

use once_cell::sync::Lazy;
use regex::Regex;

/// English sentence ends at `.`, `”`, `」` or end of span; the Japanese
/// sentence runs to the next `。`; trailing `/...。` sentences are absorbed.
static SENTENCE_EXAMPLE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"■・(.*?)(?:\.\s*|”\s*|」\s*|$)(.*?。)((?:/.*?。)*)").unwrap()
});

static QUOTED_EXAMPLE: Lazy<Regex> = Lazy::new(|| Regex::new(r"■・([^■]+)").unwrap());

static QUOTED_SPAN: Lazy<Regex> = Lazy::new(|| Regex::new(r#""([^"]*)"|“([^”]*)”"#).unwrap());

/// An example pair and where it sits in the definition it came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExampleSpan {
    pub english: String,
    pub japanese: String,
    pub range: Range<usize>,
}

/// One extraction strategy: how to find the first example and how to
/// remove every example of its shape from the definition.
pub struct ExampleStrategy {
    pub name: &'static str,
    pub find: fn(&str) -> Option<ExampleSpan>,
    pub strip: fn(&str) -> String,
}

/// Evaluated in order, first match wins.
pub static EXAMPLE_STRATEGIES: [ExampleStrategy; 2] = [
    ExampleStrategy {
        name: "sentence",
        find: sentence_example,
        strip: strip_sentence_examples,
    },
    ExampleStrategy {
        name: "quoted",
        find: quoted_example,
        strip: strip_quoted_examples,
    },
];

/// Result of running the strategies over one definition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Extracted {
    pub english: Option<String>,
    pub japanese: Option<String>,
    pub definition: String,
}

pub fn extract_example(definition: &str) -> Extracted {
    for strategy in &EXAMPLE_STRATEGIES {
        if let Some(span) = (strategy.find)(definition) {
            tracing::trace!(strategy = strategy.name, english = %span.english, "example found");
            return Extracted {
                english: Some(span.english),
                japanese: Some(span.japanese),
                definition: (strategy.strip)(definition),
            };
        }
    }

    Extracted {
        english: None,
        japanese: None,
        definition: definition.to_string(),
    }
}

pub fn sentence_example(definition: &str) -> Option<ExampleSpan> {
    let caps = SENTENCE_EXAMPLE.captures(definition)?;
    let whole = caps.get(0)?;
    let english = caps.get(1).map_or("", |m| m.as_str()).trim();
    if english.is_empty() {
        return None;
    }
    let japanese = caps.get(2).map_or("", |m| m.as_str()).trim();

    Some(ExampleSpan {
        english: english.to_string(),
        japanese: japanese.to_string(),
        range: whole.range(),
    })
}

pub fn quoted_example(definition: &str) -> Option<ExampleSpan> {
    let caps = QUOTED_EXAMPLE.captures(definition)?;
    let whole = caps.get(0)?;
    let full = caps.get(1).map_or("", |m| m.as_str()).trim();

    let english = QUOTED_SPAN
        .captures_iter(full)
        .filter_map(|c| c.get(1).or_else(|| c.get(2)))
        .map(|m| m.as_str().trim())
        .filter(|s| !s.is_empty())
        .collect::<Vec<_>>()
        .join(" ");
    if english.is_empty() {
        return None;
    }
    let japanese = QUOTED_SPAN.replace_all(full, "").trim().to_string();

    Some(ExampleSpan {
        english,
        japanese,
        range: whole.range(),
    })
}

fn strip_sentence_examples(definition: &str) -> String {
    SENTENCE_EXAMPLE.replace_all(definition, "").trim().to_string()
}

fn strip_quoted_examples(definition: &str) -> String {
    QUOTED_EXAMPLE.replace_all(definition, "").trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sentence_strategy_splits_english_and_japanese() {
        let def = "捨てる、断念する■・He abandoned his plan. 彼は計画を断念した。";
        let ex = extract_example(def);
        assert_eq!(ex.english.as_deref(), Some("He abandoned his plan"));
        assert_eq!(ex.japanese.as_deref(), Some("彼は計画を断念した。"));
        assert_eq!(ex.definition, "捨てる、断念する");
    }

    #[test]
    fn sentence_strategy_absorbs_slash_sentences() {
        let def = "あきらめる■・I gave up. 私はあきらめた。/もうやめた。";
        let span = sentence_example(def).unwrap();
        assert_eq!(span.japanese, "私はあきらめた。");
        assert_eq!(&def[span.range.clone()], "■・I gave up. 私はあきらめた。/もうやめた。");
        assert_eq!(extract_example(def).definition, "あきらめる");
    }

    #[test]
    fn sentence_strategy_stops_at_closing_quote() {
        let def = "■・“Shut up!” he said. 「黙れ！」と彼は言った。";
        let span = sentence_example(def).unwrap();
        assert_eq!(span.english, "“Shut up!");
        assert_eq!(span.japanese, "he said. 「黙れ！」と彼は言った。");
    }

    #[test]
    fn quoted_strategy_used_without_japanese_period() {
        let def = "気をつけて■・\"Take care\" 気をつけて";
        assert!(sentence_example(def).is_none());
        let ex = extract_example(def);
        assert_eq!(ex.english.as_deref(), Some("Take care"));
        assert_eq!(ex.japanese.as_deref(), Some("気をつけて"));
        assert_eq!(ex.definition, "気をつけて");
    }

    #[test]
    fn quoted_strategy_joins_every_quote() {
        let span = quoted_example("■・\"Hi\" \"there\" やあ■・other").unwrap();
        assert_eq!(span.english, "Hi there");
        assert_eq!(span.japanese, "やあ");
    }

    #[test]
    fn quoted_strategy_needs_a_quote() {
        assert!(quoted_example("■・ただのメモ").is_none());
        let ex = extract_example("定義■・ただのメモ");
        assert!(ex.english.is_none());
        assert_eq!(ex.definition, "定義■・ただのメモ");
    }

    #[test]
    fn no_marker_leaves_definition_alone() {
        let ex = extract_example("猫");
        assert_eq!(ex, Extracted { english: None, japanese: None, definition: "猫".into() });
    }

    #[test]
    fn removed_span_round_trips() {
        let def = "断念する■・He abandoned his plan. 彼は計画を断念した。";
        let span = sentence_example(def).unwrap();
        let leftover = format!("{}{}", &def[..span.range.start], &def[span.range.end..]);
        let removed = &def[span.range.clone()];
        assert!(removed.contains(&span.english));
        assert!(removed.contains(&span.japanese));

        let mut rebuilt = leftover.clone();
        rebuilt.insert_str(span.range.start, removed);
        assert_eq!(rebuilt, def);
        assert_eq!(rebuilt.len(), leftover.len() + removed.len());
    }
}
