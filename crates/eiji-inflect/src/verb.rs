//! Verb tenses for single-word and phrasal headwords.

use eiji_core::{InflectionForm, InflectionKind};

use crate::linguistics::{Linguistics, VerbForms};

/// Subject injected ahead of the verb to bias the backend towards a
/// verb reading ("I run" rather than the noun "run").
const SUBJECT: &str = "I ";
const AUXILIARIES: [&str; 2] = ["is ", "has "];

pub fn verb_inflections(term: &str, linguistics: &dyn Linguistics) -> Vec<InflectionForm> {
    let term = term.trim();
    match term.split_once(char::is_whitespace) {
        None => single_word(term, linguistics),
        Some((head, tail)) => phrasal(term, head, tail.trim(), linguistics),
    }
}

fn single_word(term: &str, linguistics: &dyn Linguistics) -> Vec<InflectionForm> {
    let Some(forms) = linguistics.conjugate(&format!("{SUBJECT}{term}")) else {
        return Vec::new();
    };
    [
        (InflectionKind::Past, forms.past),
        (InflectionKind::Gerund, forms.gerund),
        (InflectionKind::Future, forms.future),
        (InflectionKind::Present, forms.present),
    ]
    .into_iter()
    .filter_map(|(kind, form)| {
        let form = clean_form(&form?);
        (!form.is_empty() && !form.eq_ignore_ascii_case(term)).then(|| InflectionForm::new(kind, form))
    })
    .collect()
}

/// Inflect the head verb and reattach the tail. A first pass that yields
/// nothing new is retried once with the injected subject.
fn phrasal(phrase: &str, head: &str, tail: &str, linguistics: &dyn Linguistics) -> Vec<InflectionForm> {
    let first = linguistics
        .conjugate(head)
        .map(|forms| phrasal_forms(phrase, tail, forms))
        .unwrap_or_default();
    if !first.is_empty() {
        return first;
    }

    tracing::debug!("Retrying {:?} with an injected subject", phrase);
    linguistics
        .conjugate(&format!("{SUBJECT}{head}"))
        .map(|forms| phrasal_forms(phrase, tail, forms))
        .unwrap_or_default()
}

fn phrasal_forms(phrase: &str, tail: &str, forms: VerbForms) -> Vec<InflectionForm> {
    let mut out: Vec<InflectionForm> = Vec::new();
    let candidates = [
        (InflectionKind::Past, forms.past),
        (InflectionKind::Present, forms.present),
        (InflectionKind::Future, forms.future),
        (InflectionKind::Gerund, forms.gerund),
        (InflectionKind::PastParticiple, forms.past_participle),
    ];

    for (kind, form) in candidates {
        let Some(form) = form else { continue };
        let head = clean_form(&form);
        if head.is_empty() {
            continue;
        }
        // Some backends conjugate the whole phrase; don't append the tail twice.
        let full = if tail.is_empty() || head.ends_with(&format!(" {tail}")) {
            head
        } else {
            format!("{head} {tail}")
        };
        if full.eq_ignore_ascii_case(phrase) {
            continue;
        }
        if kind == InflectionKind::PastParticiple
            && out.iter().any(|f| f.kind == InflectionKind::Past && f.form == full)
        {
            continue;
        }
        out.push(InflectionForm::new(kind, full));
    }
    out
}

/// Drop the injected subject and a leading "is "/"has " auxiliary.
fn clean_form(form: &str) -> String {
    let mut form = form.trim();
    if let Some(rest) = form.strip_prefix(SUBJECT) {
        form = rest.trim_start();
    }
    for aux in AUXILIARIES {
        if let Some(rest) = form.strip_prefix(aux) {
            form = rest.trim_start();
            break;
        }
    }
    form.to_string()
}
