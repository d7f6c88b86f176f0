//! Plural and possessive forms of nouns.

use eiji_core::{InflectionForm, InflectionKind};

use crate::plurals::PluralOverrides;

pub fn noun_inflections(term: &str, overrides: &PluralOverrides) -> Vec<InflectionForm> {
    let mut forms: Vec<InflectionForm> = match overrides.get(term) {
        Some(plurals) => plurals
            .iter()
            .map(|p| InflectionForm::new(InflectionKind::Plural, p.as_str()))
            .collect(),
        None => vec![InflectionForm::new(InflectionKind::Plural, fallback_plural(term))],
    };
    forms.push(InflectionForm::new(InflectionKind::Possessive, possessive(term)));
    forms
}

pub fn possessive(term: &str) -> String {
    if term.ends_with('s') {
        format!("{term}'")
    } else {
        format!("{term}'s")
    }
}

fn is_vowel(c: char) -> bool {
    matches!(c.to_ascii_lowercase(), 'a' | 'e' | 'i' | 'o' | 'u')
}

/// Regular English plural. Rules apply in this order:
/// short word, consonant+y, consonant+o, f, fe, sibilant, default.
pub fn fallback_plural(term: &str) -> String {
    let chars: Vec<char> = term.chars().collect();
    if chars.len() < 2 {
        return format!("{term}s");
    }
    let last = chars[chars.len() - 1];
    let before = chars[chars.len() - 2];

    if last == 'y' && !is_vowel(before) {
        format!("{}ies", &term[..term.len() - 1])
    } else if last == 'o' && !is_vowel(before) {
        format!("{term}es")
    } else if last == 'f' {
        format!("{}ves", &term[..term.len() - 1])
    } else if term.ends_with("fe") {
        format!("{}ves", &term[..term.len() - 2])
    } else if ["s", "sh", "ch", "x", "z"].iter().any(|s| term.ends_with(s)) {
        format!("{term}es")
    } else {
        format!("{term}s")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fallback_rules() {
        assert_eq!(fallback_plural("city"), "cities");
        assert_eq!(fallback_plural("day"), "days");
        assert_eq!(fallback_plural("hero"), "heroes");
        assert_eq!(fallback_plural("radio"), "radios");
        assert_eq!(fallback_plural("leaf"), "leaves");
        assert_eq!(fallback_plural("knife"), "knives");
        assert_eq!(fallback_plural("bus"), "buses");
        assert_eq!(fallback_plural("glass"), "glasses");
        assert_eq!(fallback_plural("dish"), "dishes");
        assert_eq!(fallback_plural("church"), "churches");
        assert_eq!(fallback_plural("box"), "boxes");
        assert_eq!(fallback_plural("quiz"), "quizes");
        assert_eq!(fallback_plural("cat"), "cats");
        assert_eq!(fallback_plural("a"), "as");
        assert_eq!(fallback_plural("猫"), "猫s");
    }

    #[test]
    fn possessive_rule() {
        for (lemma, expected) in [("cat", "cat's"), ("bus", "bus'"), ("James", "James'"), ("city", "city's")] {
            assert_eq!(possessive(lemma), expected);
        }
    }

    #[test]
    fn overrides_replace_fallback() {
        let table: PluralOverrides = ["fish,fish,fishes"].into_iter().collect();
        let forms = noun_inflections("fish", &table);
        assert_eq!(
            forms,
            vec![
                InflectionForm::new(InflectionKind::Plural, "fish"),
                InflectionForm::new(InflectionKind::Plural, "fishes"),
                InflectionForm::new(InflectionKind::Possessive, "fish's"),
            ]
        );
    }

    #[test]
    fn fallback_when_absent() {
        let forms = noun_inflections("knife", &PluralOverrides::empty());
        assert_eq!(forms[0], InflectionForm::new(InflectionKind::Plural, "knives"));
        assert_eq!(forms[1], InflectionForm::new(InflectionKind::Possessive, "knife's"));
    }
}
