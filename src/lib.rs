//! Render a small Markdown dialect into a tree of block and inline nodes.
//!
//! Parsing runs in two stages. [`segment`] classifies lines into block
//! segments, then every text payload except code goes through the inline
//! tokenizer. Neither stage can fail: malformed syntax is kept as text.

mod block;
mod config;
mod html;
mod inline;
mod parser;

pub use block::{Block, ListItem, Segment, Span, plain_text};
pub use config::{CodeConfig, Config, ConfigError, DocumentConfig, LinksConfig};
pub use inline::tokenize;

/// Parse markdown text into a vector of blocks.
pub fn parse(markdown: &str) -> Vec<Block> {
    parser::parse(markdown)
}

/// Split markdown text into block segments with raw text payloads.
pub fn segment(markdown: &str) -> Vec<Segment> {
    parser::segment(markdown)
}

/// Convert markdown to HTML using default config.
pub fn markdown_to_html(markdown: &str) -> String {
    markdown_to_html_with_config(markdown, &Config::compiled_default())
}

/// Convert markdown to HTML with custom config.
pub fn markdown_to_html_with_config(markdown: &str, config: &Config) -> String {
    let blocks = parse(markdown);
    html::blocks_to_html(&blocks, config)
}
