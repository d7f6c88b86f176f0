//! Spelling-region detection from 〈英〉/〈米〉 annotations.

use eiji_core::Region;

/// `predicate` is tested against the definition; on the first hit the
/// rule's region is taken and `transform` rewrites the definition.
pub struct RegionRule {
    pub name: &'static str,
    pub predicate: fn(&str) -> bool,
    pub region: Region,
    pub transform: fn(&str) -> String,
}

/// Evaluated in order, first match wins.
pub static REGION_RULES: [RegionRule; 6] = [
    RegionRule {
        name: "uk-redirect",
        predicate: |d| d.contains("〈英〉→"),
        region: Region::Uk,
        transform: keep,
    },
    RegionRule {
        name: "us-redirect",
        predicate: |d| d.contains("〈米〉→"),
        region: Region::Us,
        transform: keep,
    },
    // 【同】〈英〉X: the British spelling is X, so this headword is American.
    RegionRule {
        name: "same-as-uk",
        predicate: |d| d.contains("【同】〈英〉"),
        region: Region::Us,
        transform: keep,
    },
    RegionRule {
        name: "same-as-us",
        predicate: |d| d.contains("【同】〈米〉"),
        region: Region::Uk,
        transform: keep,
    },
    RegionRule {
        name: "leading-uk",
        predicate: |d| d.starts_with("〈英〉"),
        region: Region::Uk,
        transform: |d| d.strip_prefix("〈英〉").unwrap_or(d).trim().to_string(),
    },
    RegionRule {
        name: "leading-us",
        predicate: |d| d.starts_with("〈米〉"),
        region: Region::Us,
        transform: |d| d.strip_prefix("〈米〉").unwrap_or(d).trim().to_string(),
    },
];

fn keep(definition: &str) -> String {
    definition.to_string()
}

/// Returns the detected region and the (possibly rewritten) definition.
pub fn detect_region(definition: &str) -> (Option<Region>, String) {
    match REGION_RULES.iter().find(|rule| (rule.predicate)(definition)) {
        Some(rule) => {
            tracing::trace!(rule = rule.name, "region rule matched");
            (Some(rule.region), (rule.transform)(definition))
        }
        None => (None, definition.to_string()),
    }
}
