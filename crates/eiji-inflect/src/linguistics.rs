//! Pluggable linguistic-analysis backend.
//!
//! The inflection generator never conjugates or counts syllables itself;
//! it asks a `Linguistics` implementation. Current implementation:
//! [`EnglishRules`](crate::rules::EnglishRules). Tests substitute fixtures.

/// Conjugated forms of a verb phrase. A backend may echo a leading
/// subject pronoun or prefix auxiliaries ("is giving", "has given");
/// callers strip those.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VerbForms {
    pub past: Option<String>,
    pub present: Option<String>,
    pub future: Option<String>,
    pub gerund: Option<String>,
    pub past_participle: Option<String>,
}

impl VerbForms {
    pub fn is_empty(&self) -> bool {
        self.past.is_none()
            && self.present.is_none()
            && self.future.is_none()
            && self.gerund.is_none()
            && self.past_participle.is_none()
    }
}

/// Derived forms of an adjective.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdjectiveForms {
    /// The adjective sense as the backend understood it.
    pub adjective: String,
    pub adverb: Option<String>,
    pub noun: Option<String>,
}

/// Linguistic-analysis backend.
///
/// The trait is object-safe and uses `&self`. Returning `None` is always
/// allowed; the generator then falls back to its own rules or skips the
/// category.
pub trait Linguistics {
    /// Conjugate a verb phrase. `phrase` may start with a subject pronoun.
    fn conjugate(&self, phrase: &str) -> Option<VerbForms>;

    fn adjective_forms(&self, adjective: &str) -> Option<AdjectiveForms>;

    fn syllable_count(&self, word: &str) -> Option<usize>;

    /// Human-readable name of this backend (for logging).
    fn name(&self) -> &str;
}
