use serde::Serialize;

/// Inline text spans with formatting
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Span {
    Text(String),
    Strong(Vec<Span>),
    Emphasis(Vec<Span>),
    Code(String),
    Link { label: Vec<Span>, href: String },
}

/// A single list item. Continuation lines are already folded into its content.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ListItem {
    pub content: Vec<Span>,
}

/// Block-level elements with their inline content tokenized.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Block {
    Heading {
        level: u8,
        content: Vec<Span>,
    },
    Paragraph {
        content: Vec<Span>,
    },
    UnorderedList {
        items: Vec<ListItem>,
    },
    OrderedList {
        /// Number of the first item; the remaining items count up from here.
        start: u64,
        items: Vec<ListItem>,
    },
    CodeBlock {
        /// Info string after the opening fence, empty when absent.
        language: String,
        lines: Vec<String>,
    },
    Rule,
}

/// Block-level elements as the line segmenter emits them, before any inline
/// tokenization. Text payloads are raw.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Segment {
    Heading { level: u8, text: String },
    Paragraph { text: String },
    UnorderedList { items: Vec<String> },
    OrderedList { start: u64, items: Vec<String> },
    CodeBlock { language: String, lines: Vec<String> },
    Rule,
}

impl Span {
    /// Plain text of this span with all formatting dropped.
    pub fn plain_text(&self) -> String {
        match self {
            Span::Text(text) | Span::Code(text) => text.clone(),
            Span::Strong(inner) | Span::Emphasis(inner) => plain_text(inner),
            Span::Link { label, .. } => plain_text(label),
        }
    }
}

/// Concatenated plain text of a span sequence.
pub fn plain_text(spans: &[Span]) -> String {
    spans.iter().map(Span::plain_text).collect()
}
