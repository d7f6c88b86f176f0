//! Structured-content builders for definition lists and example blocks.

use eiji_core::{Element, HighlightedExample, LexicalEntry, Node, StructuredContent};

const HIGHLIGHT_COLOR: &str = "color-mix(in srgb, lime, var(--text-color, var(--fg, #333)))";
const TEXT_COLOR: &str = "var(--text-color, var(--fg, #333))";

/// `{"type": "structured-content", "content": {"tag": "ol", ...}}`
pub fn definition_list(items: Vec<Node>) -> StructuredContent {
    StructuredContent::new(Element::new("ol").with_content(items))
}

/// One sense: definition text, then an optional link and example block.
pub fn list_item(entry: &LexicalEntry, example: Option<&HighlightedExample>) -> Node {
    let mut content = vec![Node::text(entry.definition.as_str())];
    if let Some(url) = &entry.url {
        content.push(
            Element::new("a")
                .with_href(url.as_str())
                .with_content(url.as_str())
                .into(),
        );
    }
    if let Some(example) = example {
        content.push(example_block(&entry.term, example, entry.japanese_example.as_deref()).into());
    }
    Element::new("li").with_content(content).into()
}

pub fn highlighted_spans(example: &HighlightedExample) -> Vec<Node> {
    example
        .fragments
        .iter()
        .map(|fragment| {
            let span = Element::new("span").with_content(fragment.text.as_str());
            if fragment.is_match {
                Node::from(span.with_style("color", HIGHLIGHT_COLOR))
            } else {
                Node::from(span)
            }
        })
        .collect()
}

/// Bordered example box: highlighted English line over the Japanese line.
pub fn example_block(term: &str, english: &HighlightedExample, japanese: Option<&str>) -> Element {
    let english_line = Element::new("div")
        .with_style("fontSize", "1.3em")
        .with_data("content", "example-sentence-a")
        .with_content(vec![Node::from(
            Element::new("span").with_content(highlighted_spans(english)),
        )]);

    let japanese_line = Element::new("div")
        .with_style("fontSize", "0.8em")
        .with_data("content", "example-sentence-b")
        .with_content(japanese.unwrap_or(""));

    let sentence = Element::new("div")
        .with_style("borderStyle", "none none none solid")
        .with_style("padding", "0.5rem")
        .with_style("borderRadius", "0.4rem")
        .with_style("borderWidth", "calc(3em / var(--font-size-no-units, 14))")
        .with_style("marginTop", "0.5rem")
        .with_style("marginBottom", "0.5rem")
        .with_style("borderColor", TEXT_COLOR)
        .with_style(
            "backgroundColor",
            "color-mix(in srgb, var(--text-color, var(--fg, #333)) 5%, transparent)",
        )
        .with_data("content", "example-sentence")
        .with_data("sentence-key", term)
        .with_content(vec![Node::from(english_line), Node::from(japanese_line)]);

    Element::new("div")
        .with_style("marginLeft", "0.5em")
        .with_data("content", "extra-info")
        .with_content(Element::new("div").with_content(sentence))
}
