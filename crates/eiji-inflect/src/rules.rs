//! Rule-based English backend for [`Linguistics`].
//!
//! Covers what headword variants need: an irregular-verb table, regular
//! suffix spelling (e-drop, y→i, consonant doubling), heuristic syllable
//! counting and -ly/-ness derivation. Not a general morphological analyser.

use std::collections::HashMap;

use once_cell::sync::Lazy;

use crate::linguistics::{AdjectiveForms, Linguistics, VerbForms};

const SUBJECT_PRONOUNS: [&str; 7] = ["i", "you", "he", "she", "it", "we", "they"];

/// base, past, past participle
const IRREGULAR_VERBS: &[(&str, &str, &str)] = &[
    ("arise", "arose", "arisen"),
    ("be", "was", "been"),
    ("bear", "bore", "borne"),
    ("beat", "beat", "beaten"),
    ("become", "became", "become"),
    ("begin", "began", "begun"),
    ("bend", "bent", "bent"),
    ("bet", "bet", "bet"),
    ("bind", "bound", "bound"),
    ("bite", "bit", "bitten"),
    ("bleed", "bled", "bled"),
    ("blow", "blew", "blown"),
    ("break", "broke", "broken"),
    ("breed", "bred", "bred"),
    ("bring", "brought", "brought"),
    ("build", "built", "built"),
    ("burst", "burst", "burst"),
    ("buy", "bought", "bought"),
    ("catch", "caught", "caught"),
    ("choose", "chose", "chosen"),
    ("cling", "clung", "clung"),
    ("come", "came", "come"),
    ("cost", "cost", "cost"),
    ("creep", "crept", "crept"),
    ("cut", "cut", "cut"),
    ("deal", "dealt", "dealt"),
    ("dig", "dug", "dug"),
    ("do", "did", "done"),
    ("draw", "drew", "drawn"),
    ("drink", "drank", "drunk"),
    ("drive", "drove", "driven"),
    ("eat", "ate", "eaten"),
    ("fall", "fell", "fallen"),
    ("feed", "fed", "fed"),
    ("feel", "felt", "felt"),
    ("fight", "fought", "fought"),
    ("find", "found", "found"),
    ("flee", "fled", "fled"),
    ("fly", "flew", "flown"),
    ("forbid", "forbade", "forbidden"),
    ("forget", "forgot", "forgotten"),
    ("forgive", "forgave", "forgiven"),
    ("freeze", "froze", "frozen"),
    ("get", "got", "gotten"),
    ("give", "gave", "given"),
    ("go", "went", "gone"),
    ("grind", "ground", "ground"),
    ("grow", "grew", "grown"),
    ("hang", "hung", "hung"),
    ("have", "had", "had"),
    ("hear", "heard", "heard"),
    ("hide", "hid", "hidden"),
    ("hit", "hit", "hit"),
    ("hold", "held", "held"),
    ("hurt", "hurt", "hurt"),
    ("keep", "kept", "kept"),
    ("kneel", "knelt", "knelt"),
    ("know", "knew", "known"),
    ("lay", "laid", "laid"),
    ("lead", "led", "led"),
    ("leave", "left", "left"),
    ("lend", "lent", "lent"),
    ("let", "let", "let"),
    ("lie", "lay", "lain"),
    ("light", "lit", "lit"),
    ("lose", "lost", "lost"),
    ("make", "made", "made"),
    ("mean", "meant", "meant"),
    ("meet", "met", "met"),
    ("pay", "paid", "paid"),
    ("put", "put", "put"),
    ("quit", "quit", "quit"),
    ("read", "read", "read"),
    ("ride", "rode", "ridden"),
    ("ring", "rang", "rung"),
    ("rise", "rose", "risen"),
    ("run", "ran", "run"),
    ("say", "said", "said"),
    ("see", "saw", "seen"),
    ("seek", "sought", "sought"),
    ("sell", "sold", "sold"),
    ("send", "sent", "sent"),
    ("set", "set", "set"),
    ("shake", "shook", "shaken"),
    ("shine", "shone", "shone"),
    ("shoot", "shot", "shot"),
    ("show", "showed", "shown"),
    ("shrink", "shrank", "shrunk"),
    ("shut", "shut", "shut"),
    ("sing", "sang", "sung"),
    ("sink", "sank", "sunk"),
    ("sit", "sat", "sat"),
    ("sleep", "slept", "slept"),
    ("slide", "slid", "slid"),
    ("speak", "spoke", "spoken"),
    ("spend", "spent", "spent"),
    ("spin", "spun", "spun"),
    ("split", "split", "split"),
    ("spread", "spread", "spread"),
    ("spring", "sprang", "sprung"),
    ("stand", "stood", "stood"),
    ("steal", "stole", "stolen"),
    ("stick", "stuck", "stuck"),
    ("sting", "stung", "stung"),
    ("strike", "struck", "struck"),
    ("swear", "swore", "sworn"),
    ("sweep", "swept", "swept"),
    ("swim", "swam", "swum"),
    ("swing", "swung", "swung"),
    ("take", "took", "taken"),
    ("teach", "taught", "taught"),
    ("tear", "tore", "torn"),
    ("tell", "told", "told"),
    ("think", "thought", "thought"),
    ("throw", "threw", "thrown"),
    ("understand", "understood", "understood"),
    ("wake", "woke", "woken"),
    ("wear", "wore", "worn"),
    ("weep", "wept", "wept"),
    ("win", "won", "won"),
    ("wind", "wound", "wound"),
    ("withdraw", "withdrew", "withdrawn"),
    ("write", "wrote", "written"),
];

static IRREGULAR: Lazy<HashMap<&'static str, (&'static str, &'static str)>> = Lazy::new(|| {
    IRREGULAR_VERBS
        .iter()
        .map(|&(base, past, participle)| (base, (past, participle)))
        .collect()
});

#[derive(Debug, Clone, Copy, Default)]
pub struct EnglishRules;

impl Linguistics for EnglishRules {
    fn conjugate(&self, phrase: &str) -> Option<VerbForms> {
        let mut words: Vec<&str> = phrase.split_whitespace().collect();
        if words.len() > 1 && SUBJECT_PRONOUNS.contains(&words[0].to_lowercase().as_str()) {
            words.remove(0);
        }
        let (&head, tail) = words.split_first()?;
        if !head.chars().all(|c| c.is_ascii_alphabetic()) {
            return None;
        }

        let verb = head.to_lowercase();
        let with_tail = |form: String| -> String {
            if tail.is_empty() {
                form
            } else {
                format!("{} {}", form, tail.join(" "))
            }
        };

        let (past, participle) = match IRREGULAR.get(verb.as_str()) {
            Some(&(past, participle)) => (past.to_string(), participle.to_string()),
            None => {
                let regular = regular_past(&verb);
                (regular.clone(), regular)
            }
        };

        Some(VerbForms {
            past: Some(with_tail(past)),
            present: Some(with_tail(third_person(&verb))),
            future: Some(with_tail(format!("will {verb}"))),
            gerund: Some(with_tail(gerund(&verb))),
            past_participle: Some(with_tail(participle)),
        })
    }

    fn adjective_forms(&self, adjective: &str) -> Option<AdjectiveForms> {
        let word = adjective.trim();
        if word.is_empty() || !word.chars().all(|c| c.is_ascii_alphabetic()) {
            return None;
        }
        let lower = word.to_lowercase();
        Some(AdjectiveForms {
            adjective: lower.clone(),
            adverb: Some(adverb(&lower)),
            noun: Some(abstract_noun(&lower)),
        })
    }

    fn syllable_count(&self, word: &str) -> Option<usize> {
        let count: usize = word.split_whitespace().map(count_syllables).sum();
        (count > 0).then_some(count)
    }

    fn name(&self) -> &str {
        "EnglishRules"
    }
}

fn is_vowel(c: char) -> bool {
    matches!(c, 'a' | 'e' | 'i' | 'o' | 'u')
}

/// Vowel groups, `y` counting as a vowel after the first letter, minus
/// a silent final `e` (but not `-le` after a consonant).
pub fn count_syllables(word: &str) -> usize {
    let chars: Vec<char> = word
        .chars()
        .filter(|c| c.is_ascii_alphabetic())
        .map(|c| c.to_ascii_lowercase())
        .collect();
    if chars.is_empty() {
        return 0;
    }

    let vowel_at = |i: usize| is_vowel(chars[i]) || (chars[i] == 'y' && i > 0);
    let mut count = 0;
    let mut previous = false;
    for i in 0..chars.len() {
        let current = vowel_at(i);
        if current && !previous {
            count += 1;
        }
        previous = current;
    }

    let n = chars.len();
    if n >= 2 && chars[n - 1] == 'e' && !vowel_at(n - 2) && count > 1 {
        let syllabic_le = n >= 3 && chars[n - 2] == 'l' && !vowel_at(n - 3);
        if !syllabic_le {
            count -= 1;
        }
    }
    count.max(1)
}

/// Single short vowel followed by a single consonant other than w/x/y.
pub(crate) fn ends_cvc(word: &str) -> bool {
    let chars: Vec<char> = word.chars().collect();
    let n = chars.len();
    if n < 3 {
        return false;
    }
    let (a, b, c) = (chars[n - 3], chars[n - 2], chars[n - 1]);
    !is_vowel(a) && is_vowel(b) && !is_vowel(c) && !matches!(c, 'w' | 'x' | 'y')
}

fn doubles_final(word: &str) -> bool {
    ends_cvc(word) && count_syllables(word) == 1
}

fn regular_past(verb: &str) -> String {
    if verb.ends_with('e') {
        format!("{verb}d")
    } else if let Some(stem) = consonant_y_stem(verb) {
        format!("{stem}ied")
    } else if doubles_final(verb) {
        format!("{verb}{}ed", &verb[verb.len() - 1..])
    } else {
        format!("{verb}ed")
    }
}

fn third_person(verb: &str) -> String {
    match verb {
        "be" => return "is".to_string(),
        "have" => return "has".to_string(),
        _ => {}
    }
    if ["s", "x", "z", "ch", "sh", "o"].iter().any(|s| verb.ends_with(s)) {
        format!("{verb}es")
    } else if let Some(stem) = consonant_y_stem(verb) {
        format!("{stem}ies")
    } else {
        format!("{verb}s")
    }
}

fn gerund(verb: &str) -> String {
    if let Some(stem) = verb.strip_suffix("ie") {
        format!("{stem}ying")
    } else if verb.ends_with('e') && !["ee", "ye", "oe"].iter().any(|s| verb.ends_with(s)) && verb != "be" {
        format!("{}ing", &verb[..verb.len() - 1])
    } else if doubles_final(verb) {
        format!("{verb}{}ing", &verb[verb.len() - 1..])
    } else {
        format!("{verb}ing")
    }
}

/// `happy` → `happ`, when the word ends in consonant + y.
fn consonant_y_stem(word: &str) -> Option<&str> {
    let stem = word.strip_suffix('y')?;
    match stem.chars().last() {
        Some(c) if !is_vowel(c) => Some(stem),
        _ => None,
    }
}

fn adverb(adjective: &str) -> String {
    match adjective {
        "good" => return "well".to_string(),
        "fast" | "hard" | "late" | "early" | "daily" => return adjective.to_string(),
        _ => {}
    }
    if let Some(stem) = adjective.strip_suffix("le") {
        if stem.chars().last().map_or(false, |c| !is_vowel(c)) {
            return format!("{stem}ly");
        }
    }
    if let Some(stem) = adjective.strip_suffix("ue") {
        return format!("{stem}uly");
    }
    if adjective.ends_with("ic") {
        return format!("{adjective}ally");
    }
    if adjective.ends_with("ll") {
        return format!("{adjective}y");
    }
    if let Some(stem) = consonant_y_stem(adjective) {
        return format!("{stem}ily");
    }
    format!("{adjective}ly")
}

fn abstract_noun(adjective: &str) -> String {
    match consonant_y_stem(adjective) {
        Some(stem) => format!("{stem}iness"),
        None => format!("{adjective}ness"),
    }
}
