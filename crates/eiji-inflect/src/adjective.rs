//! Comparative, superlative and derived forms of adjectives.

use eiji_core::{InflectionForm, InflectionKind};

use crate::linguistics::Linguistics;
use crate::rules::ends_cvc;

/// lemma, comparative, superlative
const IRREGULAR_ADJECTIVES: &[(&str, &str, &str)] = &[
    ("good", "better", "best"),
    ("bad", "worse", "worst"),
    ("far", "farther", "farthest"),
    ("little", "less", "least"),
    ("many", "more", "most"),
    ("much", "more", "most"),
    ("old", "older", "oldest"),
    ("late", "later", "latest"),
    ("few", "fewer", "fewest"),
];

pub fn adjective_inflections(term: &str, linguistics: &dyn Linguistics) -> Vec<InflectionForm> {
    let term = term.trim();
    let lower = term.to_lowercase();

    if let Some(&(_, comparative, superlative)) =
        IRREGULAR_ADJECTIVES.iter().find(|(lemma, _, _)| *lemma == lower)
    {
        return vec![
            InflectionForm::new(InflectionKind::Comparative, comparative),
            InflectionForm::new(InflectionKind::Superlative, superlative),
        ];
    }

    let mut forms = Vec::new();
    let syllables = if term.contains(char::is_whitespace) {
        None
    } else {
        linguistics.syllable_count(term)
    };

    match syllables {
        Some(1) => {
            let (comparative, superlative) = suffixed(term);
            forms.push(InflectionForm::new(InflectionKind::Comparative, comparative));
            forms.push(InflectionForm::new(InflectionKind::Superlative, superlative));
        }
        Some(2) => {
            let (comparative, superlative) = match term.strip_suffix('y') {
                Some(stem) => (format!("{stem}ier"), format!("{stem}iest")),
                None if term.ends_with('e') => (format!("{term}r"), format!("{term}st")),
                None => (format!("{term}er"), format!("{term}est")),
            };
            forms.push(InflectionForm::new(InflectionKind::Comparative, comparative));
            forms.push(InflectionForm::new(InflectionKind::Superlative, superlative));
            forms.extend(periphrastic(term));
        }
        _ => forms.extend(periphrastic(term)),
    }

    if let Some(derived) = linguistics.adjective_forms(term) {
        if let Some(adverb) = derived.adverb.filter(|a| !a.is_empty() && !a.eq_ignore_ascii_case(term)) {
            forms.push(InflectionForm::new(InflectionKind::Adverb, adverb));
        }
        if let Some(noun) = derived.noun.filter(|n| !n.is_empty() && *n != derived.adjective) {
            forms.push(InflectionForm::new(InflectionKind::Noun, noun));
        }
    }

    forms
}

/// One-syllable comparison: `nice` → nicer, `big` → bigger, `tall` → taller.
fn suffixed(term: &str) -> (String, String) {
    if term.ends_with('e') {
        (format!("{term}r"), format!("{term}st"))
    } else if let Some(last) = term.chars().last().filter(|_| ends_cvc(&term.to_lowercase())) {
        (format!("{term}{last}er"), format!("{term}{last}est"))
    } else {
        (format!("{term}er"), format!("{term}est"))
    }
}

fn periphrastic(term: &str) -> [InflectionForm; 2] {
    [
        InflectionForm::new(InflectionKind::Comparative, format!("more {term}")),
        InflectionForm::new(InflectionKind::Superlative, format!("most {term}")),
    ]
}
