pub mod error;

pub use error::{Error, Result};

use std::collections::BTreeMap;
use std::path::Path;

use serde::{Deserialize, Serialize};

// ─── Configuration ───────────────────────────────────────────────

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BuildParams {
    #[serde(default = "default_title")]
    pub title: String,
    #[serde(default = "default_revision")]
    pub revision: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub attribution: String,
    #[serde(default)]
    pub url: String,
    /// Tag that marks a noun sense. Compared for equality, so compound
    /// tags such as `名・形` do not receive noun inflections.
    #[serde(default = "default_noun_tag")]
    pub noun_tag: String,
    /// Substring marking any verb tag (`他動`, `自動`, `句動`, ...).
    #[serde(default = "default_verb_marker")]
    pub verb_marker: String,
    /// Substring marking any adjective tag (`形`, `名・形`, `形・副`, ...).
    #[serde(default = "default_adjective_marker")]
    pub adjective_marker: String,
    /// Surface the taboo/archaic register flags as term tags.
    #[serde(default)]
    pub register_tags: bool,
    /// Log a progress line every N significant source lines.
    #[serde(default = "default_progress_every")]
    pub progress_every: usize,
}

fn default_title() -> String {
    "eiji".to_string()
}
fn default_revision() -> String {
    "1.0".to_string()
}
fn default_noun_tag() -> String {
    "名".to_string()
}
fn default_verb_marker() -> String {
    "動".to_string()
}
fn default_adjective_marker() -> String {
    "形".to_string()
}
fn default_progress_every() -> usize {
    10_000
}

impl Default for BuildParams {
    fn default() -> Self {
        Self {
            title: default_title(),
            revision: default_revision(),
            description: String::new(),
            attribution: String::new(),
            url: String::new(),
            noun_tag: default_noun_tag(),
            verb_marker: default_verb_marker(),
            adjective_marker: default_adjective_marker(),
            register_tags: false,
            progress_every: default_progress_every(),
        }
    }
}

impl BuildParams {
    pub fn from_toml_str(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Load parameters from a TOML file. Missing keys take their defaults.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
        Self::from_toml_str(&content)
    }

    pub fn is_noun_tag(&self, tag: &str) -> bool {
        tag == self.noun_tag
    }

    pub fn is_verb_tag(&self, tag: &str) -> bool {
        !self.verb_marker.is_empty() && tag.contains(self.verb_marker.as_str())
    }

    pub fn is_adjective_tag(&self, tag: &str) -> bool {
        !self.adjective_marker.is_empty() && tag.contains(self.adjective_marker.as_str())
    }
}

// ─── Lexicon Types ───────────────────────────────────────────────

/// Spelling region a sense is restricted to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Region {
    #[serde(rename = "UK")]
    Uk,
    #[serde(rename = "US")]
    Us,
}

impl Region {
    pub fn label(self) -> &'static str {
        match self {
            Region::Uk => "UK",
            Region::Us => "US",
        }
    }
}

impl std::fmt::Display for Region {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EntryKind {
    Standard,
    /// Sense that only redirects to another headword.
    Link,
    Pronunciation,
}

/// One definition line of the source lexicon.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LexicalEntry {
    pub term: String,
    pub tag: String,
    pub kind: EntryKind,
    pub definition: String,
    pub is_taboo: bool,
    pub is_archaic: bool,
    pub url: Option<String>,
    pub english_example: Option<String>,
    pub japanese_example: Option<String>,
    pub region: Option<Region>,
}

/// Pronunciation data line. Every sub-field is optional.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PronunciationEntry {
    pub term: String,
    pub ipa: Option<String>,
    pub transformations: Option<String>,
    pub word_split: Option<String>,
    pub is_noun: bool,
    pub is_verb: bool,
    pub is_adjective: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Sense {
    Lexical(LexicalEntry),
    Pronunciation(PronunciationEntry),
}

impl Sense {
    pub fn term(&self) -> &str {
        match self {
            Sense::Lexical(e) => &e.term,
            Sense::Pronunciation(p) => &p.term,
        }
    }

    /// Part-of-speech tag. Pronunciation lines carry none.
    pub fn tag(&self) -> &str {
        match self {
            Sense::Lexical(e) => &e.tag,
            Sense::Pronunciation(_) => "",
        }
    }

    pub fn kind(&self) -> EntryKind {
        match self {
            Sense::Lexical(e) => e.kind,
            Sense::Pronunciation(_) => EntryKind::Pronunciation,
        }
    }
}

/// All senses of one headword in source order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TermRecord {
    pub term: String,
    pub senses: Vec<Sense>,
}

impl TermRecord {
    pub fn new(term: impl Into<String>) -> Self {
        Self {
            term: term.into(),
            senses: Vec::new(),
        }
    }

    pub fn lexical(&self) -> impl Iterator<Item = &LexicalEntry> {
        self.senses.iter().filter_map(|s| match s {
            Sense::Lexical(e) => Some(e),
            Sense::Pronunciation(_) => None,
        })
    }

    pub fn pronunciations(&self) -> impl Iterator<Item = &PronunciationEntry> {
        self.senses.iter().filter_map(|s| match s {
            Sense::Pronunciation(p) => Some(p),
            Sense::Lexical(_) => None,
        })
    }

    /// Word-split string of the first pronunciation line, or empty.
    pub fn reading(&self) -> &str {
        self.pronunciations()
            .next()
            .and_then(|p| p.word_split.as_deref())
            .unwrap_or("")
    }

    pub fn any_tag(&self, pred: impl Fn(&str) -> bool) -> bool {
        self.lexical().any(|e| pred(&e.tag))
    }
}

// ─── Inflection Types ────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum InflectionKind {
    Plural,
    Possessive,
    Past,
    Present,
    Future,
    Gerund,
    PastParticiple,
    Comparative,
    Superlative,
    Adverb,
    Noun,
}

impl InflectionKind {
    /// Rule name written into deinflection entries.
    pub fn label(self) -> &'static str {
        match self {
            InflectionKind::Plural => "plural",
            InflectionKind::Possessive => "possessive",
            InflectionKind::Past => "past",
            InflectionKind::Present => "third-person singular present",
            InflectionKind::Future => "future",
            InflectionKind::Gerund => "present participle",
            InflectionKind::PastParticiple => "past participle",
            InflectionKind::Comparative => "comparative",
            InflectionKind::Superlative => "superlative",
            InflectionKind::Adverb => "adverb",
            InflectionKind::Noun => "noun",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InflectionForm {
    pub kind: InflectionKind,
    pub form: String,
}

impl InflectionForm {
    pub fn new(kind: InflectionKind, form: impl Into<String>) -> Self {
        Self {
            kind,
            form: form.into(),
        }
    }
}

// ─── Highlight Types ─────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Fragment {
    pub is_match: bool,
    pub text: String,
}

impl Fragment {
    pub fn plain(text: impl Into<String>) -> Self {
        Self {
            is_match: false,
            text: text.into(),
        }
    }

    pub fn matched(text: impl Into<String>) -> Self {
        Self {
            is_match: true,
            text: text.into(),
        }
    }
}

/// An example sentence split into plain and highlighted runs.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HighlightedExample {
    pub fragments: Vec<Fragment>,
}

impl HighlightedExample {
    /// Concatenation of every fragment; equals the source sentence.
    pub fn text(&self) -> String {
        self.fragments.iter().map(|f| f.text.as_str()).collect()
    }

    pub fn matches(&self) -> impl Iterator<Item = &str> {
        self.fragments
            .iter()
            .filter(|f| f.is_match)
            .map(|f| f.text.as_str())
    }
}

// ─── Structured Content ──────────────────────────────────────────

/// Node of the structured-content tree handed to the archive writer.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Node {
    Text(String),
    Element(Box<Element>),
    Nodes(Vec<Node>),
}

impl Node {
    pub fn text(text: impl Into<String>) -> Self {
        Node::Text(text.into())
    }
}

impl From<Element> for Node {
    fn from(element: Element) -> Self {
        Node::Element(Box::new(element))
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Element {
    pub tag: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub href: Option<String>,
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub style: BTreeMap<String, String>,
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub data: BTreeMap<String, String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<Node>,
}

impl Element {
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            href: None,
            style: BTreeMap::new(),
            data: BTreeMap::new(),
            content: None,
        }
    }

    pub fn with_content(mut self, content: impl Into<Node>) -> Self {
        self.content = Some(content.into());
        self
    }

    pub fn with_href(mut self, href: impl Into<String>) -> Self {
        self.href = Some(href.into());
        self
    }

    pub fn with_style(mut self, key: &str, value: &str) -> Self {
        self.style.insert(key.to_string(), value.to_string());
        self
    }

    pub fn with_data(mut self, key: &str, value: &str) -> Self {
        self.data.insert(key.to_string(), value.to_string());
        self
    }
}

impl From<String> for Node {
    fn from(text: String) -> Self {
        Node::Text(text)
    }
}

impl From<&str> for Node {
    fn from(text: &str) -> Self {
        Node::Text(text.to_string())
    }
}

impl From<Vec<Node>> for Node {
    fn from(nodes: Vec<Node>) -> Self {
        Node::Nodes(nodes)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StructuredContent {
    #[serde(rename = "type")]
    pub kind: String,
    pub content: Node,
}

impl StructuredContent {
    pub fn new(content: impl Into<Node>) -> Self {
        Self {
            kind: "structured-content".to_string(),
            content: content.into(),
        }
    }
}

// ─── Archive Records ─────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Definition {
    Structured(StructuredContent),
    /// `[lemma, [rule, ...]]`: the entry is an inflected form of `lemma`.
    Deinflection(String, Vec<String>),
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TermEntry {
    pub term: String,
    pub reading: String,
    pub definition: Definition,
    pub definition_tags: String,
    pub term_tags: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TagMeta {
    pub name: String,
    pub category: String,
    pub sorting_order: i32,
    pub notes: String,
    pub popularity_score: i32,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TermMeta {
    pub term: String,
    pub mode: String,
    pub frequency: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DictionaryIndex {
    pub title: String,
    pub revision: String,
    pub format: u8,
    pub description: String,
    pub attribution: String,
    pub url: String,
}

impl DictionaryIndex {
    pub fn from_params(params: &BuildParams) -> Self {
        Self {
            title: params.title.clone(),
            revision: params.revision.clone(),
            format: 3,
            description: params.description.clone(),
            attribution: params.attribution.clone(),
            url: params.url.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn params_defaults_fill_missing_keys() {
        let params = BuildParams::from_toml_str("title = \"英辞郎\"\nregister_tags = true\n").unwrap();
        assert_eq!(params.title, "英辞郎");
        assert!(params.register_tags);
        assert_eq!(params.noun_tag, "名");
        assert_eq!(params.progress_every, 10_000);
    }

    #[test]
    fn params_reject_bad_toml() {
        assert!(matches!(
            BuildParams::from_toml_str("progress_every = \"often\""),
            Err(Error::Config(_))
        ));
    }

    #[test]
    fn params_load_from_file() {
        use std::io::Write;

        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "revision = \"2024.10\"\nprogress_every = 500").unwrap();
        let params = BuildParams::load(file.path()).unwrap();
        assert_eq!(params.revision, "2024.10");
        assert_eq!(params.progress_every, 500);
        assert_eq!(params.title, "eiji");
        assert!(!params.register_tags);
    }

    #[test]
    fn params_load_missing_file_reports_path() {
        let err = BuildParams::load("/nonexistent/eiji.toml").unwrap_err();
        match err {
            Error::Io { path, .. } => assert!(path.ends_with("eiji.toml")),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn tag_predicates() {
        let params = BuildParams::default();
        assert!(params.is_noun_tag("名"));
        assert!(!params.is_noun_tag("名・形"));
        assert!(params.is_verb_tag("句他動"));
        assert!(params.is_adjective_tag("名・形"));
        assert!(!params.is_adjective_tag("副"));
    }

    #[test]
    fn reading_comes_from_first_pronunciation() {
        let mut record = TermRecord::new("abandon");
        assert_eq!(record.reading(), "");
        record.senses.push(Sense::Pronunciation(PronunciationEntry {
            term: "abandon".into(),
            word_split: Some("a・ban・don".into()),
            ..Default::default()
        }));
        record.senses.push(Sense::Pronunciation(PronunciationEntry {
            term: "abandon".into(),
            word_split: Some("other".into()),
            ..Default::default()
        }));
        assert_eq!(record.reading(), "a・ban・don");
        assert_eq!(record.senses[0].tag(), "");
        assert_eq!(record.senses[0].kind(), EntryKind::Pronunciation);
    }

    #[test]
    fn highlighted_example_reconstructs_text() {
        let example = HighlightedExample {
            fragments: vec![
                Fragment::plain("I "),
                Fragment::matched("gave up"),
                Fragment::plain("."),
            ],
        };
        assert_eq!(example.text(), "I gave up.");
        assert_eq!(example.matches().collect::<Vec<_>>(), vec!["gave up"]);
    }

    #[test]
    fn structured_content_serializes_as_nodes() {
        let list = Element::new("ol").with_content(vec![Node::from(
            Element::new("li").with_content(vec![
                Node::text("定義"),
                Element::new("a").with_href("http://x").with_content("http://x").into(),
            ]),
        )]);
        let json = serde_json::to_value(StructuredContent::new(list)).unwrap();
        assert_eq!(json["type"], "structured-content");
        assert_eq!(json["content"]["tag"], "ol");
        assert_eq!(json["content"]["content"][0]["content"][0], "定義");
        assert_eq!(json["content"]["content"][0]["content"][1]["href"], "http://x");
        assert!(json["content"].get("style").is_none());
    }

    #[test]
    fn deinflection_serializes_as_pair() {
        let def = Definition::Deinflection("cat".into(), vec!["plural".into()]);
        let json = serde_json::to_value(def).unwrap();
        assert_eq!(json, serde_json::json!(["cat", ["plural"]]));
    }
}
