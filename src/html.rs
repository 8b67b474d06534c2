use crate::block::{Block, ListItem, Span};
use crate::config::{CodeConfig, Config, LinksConfig};
use html_escape::{encode_double_quoted_attribute_to_string, encode_text_to_string};

/// Convert blocks to HTML markup
pub fn blocks_to_html(blocks: &[Block], config: &Config) -> String {
    let mut out = String::new();

    if config.document.wrap {
        out.push_str("<article");
        push_attr(&mut out, "class", &config.document.class);
        out.push_str(">\n");
    }

    for block in blocks {
        emit_block(block, config, &mut out);
    }

    if config.document.wrap {
        out.push_str("</article>\n");
    }

    out
}

fn emit_block(block: &Block, config: &Config, out: &mut String) {
    match block {
        Block::Heading { level, content } => {
            out.push_str(&format!("<h{level}>"));
            spans_to_html(content, &config.links, out);
            out.push_str(&format!("</h{level}>\n"));
        }
        Block::Paragraph { content } => {
            out.push_str("<p>");
            spans_to_html(content, &config.links, out);
            out.push_str("</p>\n");
        }
        Block::UnorderedList { items } => {
            out.push_str("<ul>\n");
            list_items_to_html(items, &config.links, out);
            out.push_str("</ul>\n");
        }
        Block::OrderedList { start, items } => {
            out.push_str("<ol");
            if *start != 1 {
                push_attr(out, "start", &start.to_string());
            }
            out.push_str(">\n");
            list_items_to_html(items, &config.links, out);
            out.push_str("</ol>\n");
        }
        Block::CodeBlock { language, lines } => {
            out.push_str("<pre><code");
            code_attrs(language, &config.code, out);
            out.push('>');
            encode_text_to_string(lines.join("\n"), out);
            out.push_str("</code></pre>\n");
        }
        Block::Rule => {
            out.push_str("<hr />\n");
        }
    }
}

fn code_attrs(language: &str, code: &CodeConfig, out: &mut String) {
    let language = code.display_language(language);
    if let Some(language) = &language {
        push_attr(out, "class", &format!("{}{}", code.class_prefix, language));
    }
    // data-language is written even when empty
    if code.data_attribute {
        push_attr(out, "data-language", language.as_deref().unwrap_or(""));
    }
}

fn list_items_to_html(items: &[ListItem], links: &LinksConfig, out: &mut String) {
    for item in items {
        out.push_str("  <li>");
        spans_to_html(&item.content, links, out);
        out.push_str("</li>\n");
    }
}

fn spans_to_html(spans: &[Span], links: &LinksConfig, out: &mut String) {
    for span in spans {
        span_to_html(span, links, out);
    }
}

fn span_to_html(span: &Span, links: &LinksConfig, out: &mut String) {
    match span {
        Span::Text(text) => {
            encode_text_to_string(text, out);
        }
        Span::Strong(inner) => {
            out.push_str("<strong>");
            spans_to_html(inner, links, out);
            out.push_str("</strong>");
        }
        Span::Emphasis(inner) => {
            out.push_str("<em>");
            spans_to_html(inner, links, out);
            out.push_str("</em>");
        }
        Span::Code(text) => {
            out.push_str("<code>");
            encode_text_to_string(text, out);
            out.push_str("</code>");
        }
        Span::Link { label, href } => {
            out.push_str("<a");
            push_attr(out, "href", href);
            if links.new_tab {
                push_attr(out, "target", "_blank");
            }
            if !links.rel.is_empty() {
                push_attr(out, "rel", &links.rel);
            }
            out.push('>');
            spans_to_html(label, links, out);
            out.push_str("</a>");
        }
    }
}

fn push_attr(out: &mut String, name: &str, value: &str) {
    out.push(' ');
    out.push_str(name);
    out.push_str("=\"");
    encode_double_quoted_attribute_to_string(value, out);
    out.push('"');
}
