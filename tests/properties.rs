//! Property tests for the renderer: every input parses, code is verbatim,
//! block order follows the source, and parsing is repeatable.

use mdtree::{Block, Segment, Span, parse, plain_text, segment, tokenize};
use proptest::prelude::*;

/// Lines built from the syntax the dialect cares about, so generated
/// documents hit fences, lists and unterminated spans often.
fn markdown_line_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        "[a-z ]{0,12}",
        "#{1,8} [a-z]{1,6}",
        "[-*+] [a-z*`]{0,8}",
        "[0-9]{1,3}[.)] [a-z]{0,6}",
        "  [a-z-]{1,8}",
        "`{3,4}[a-z]{0,4}",
        "-{3,5}",
        "[a-z]{0,4}\\*{1,3}[a-z ]{0,6}\\*{0,3}",
        "\\[[a-z]{0,4}\\]\\([a-z:/]{0,6}\\)?",
        "[ \t]{0,3}",
    ]
}

fn document_strategy() -> impl Strategy<Value = String> {
    (
        prop::collection::vec(markdown_line_strategy(), 0..24),
        prop::bool::ANY,
    )
        .prop_map(|(lines, crlf)| lines.join(if crlf { "\r\n" } else { "\n" }))
}

fn count_nodes(spans: &[Span]) -> usize {
    spans
        .iter()
        .map(|span| match span {
            Span::Strong(inner) | Span::Emphasis(inner) => 1 + count_nodes(inner),
            Span::Link { label, .. } => 1 + count_nodes(label),
            Span::Text(_) | Span::Code(_) => 1,
        })
        .sum()
}

proptest! {
    #[test]
    fn any_string_parses(input in any::<String>()) {
        let _ = parse(&input);
    }

    #[test]
    fn blocks_follow_their_segments(doc in document_strategy()) {
        for (block, seg) in parse(&doc).into_iter().zip(segment(&doc)) {
            match (block, seg) {
                (
                    Block::CodeBlock { language, lines },
                    Segment::CodeBlock { language: raw_language, lines: raw_lines },
                ) => {
                    prop_assert_eq!(language, raw_language);
                    prop_assert_eq!(lines, raw_lines);
                }
                (Block::Paragraph { content }, Segment::Paragraph { text })
                | (Block::Heading { content, .. }, Segment::Heading { text, .. }) => {
                    prop_assert!(plain_text(&content).len() <= text.len());
                }
                (Block::UnorderedList { items }, Segment::UnorderedList { items: raw })
                | (Block::OrderedList { items, .. }, Segment::OrderedList { items: raw, .. }) => {
                    prop_assert_eq!(items.len(), raw.len());
                    for (item, text) in items.iter().zip(&raw) {
                        prop_assert!(plain_text(&item.content).len() <= text.len());
                    }
                }
                (Block::Rule, Segment::Rule) => {}
                (block, seg) => prop_assert!(false, "{:?} does not match {:?}", block, seg),
            }
        }
    }

    #[test]
    fn fenced_lines_never_become_inline_text(body in "[a-z*`\\[\\]() ]{1,16}") {
        prop_assume!(!body.trim().starts_with("```"));
        let doc = format!("```\n{body}\n```");
        prop_assert_eq!(
            parse(&doc),
            vec![Block::CodeBlock { language: String::new(), lines: vec![body.clone()] }]
        );
    }

    #[test]
    fn parse_is_deterministic(doc in document_strategy()) {
        prop_assert_eq!(parse(&doc), parse(&doc));
    }

    #[test]
    fn crlf_matches_lf(doc in document_strategy()) {
        let lf = doc.replace("\r\n", "\n");
        prop_assert_eq!(segment(&doc), segment(&lf));
    }

    #[test]
    fn tokenizer_keeps_all_visible_text(text in "[a-z *`\\[\\]()]{0,40}") {
        let spans = tokenize(&text);
        // Delimiters are dropped, so the visible text never grows.
        prop_assert!(plain_text(&spans).len() <= text.len());
        prop_assert!(count_nodes(&spans) <= text.len());
    }

    #[test]
    fn text_without_delimiters_is_one_node(text in "[a-zA-Z0-9 ,.!?]{1,40}") {
        prop_assert_eq!(tokenize(&text), vec![Span::Text(text.clone())]);
    }

    #[test]
    fn list_items_are_never_empty(doc in document_strategy()) {
        for block in segment(&doc) {
            match block {
                Segment::UnorderedList { items } | Segment::OrderedList { items, .. } => {
                    prop_assert!(!items.is_empty());
                    prop_assert!(items.iter().all(|item| !item.trim().is_empty()));
                }
                _ => {}
            }
        }
    }

    #[test]
    fn code_lines_are_verbatim(
        language in "[a-z]{0,6}",
        lines in prop::collection::vec("[ a-z#*`\\-]{0,12}", 0..8),
    ) {
        // Lines that would close the fence are not part of this property.
        prop_assume!(lines.iter().all(|line| !line.trim().starts_with("```")));
        let doc = format!("```{language}\n{}\n```", lines.join("\n"));
        let expected = if lines.is_empty() { vec![String::new()] } else { lines.clone() };
        prop_assert_eq!(
            parse(&doc),
            vec![Block::CodeBlock { language, lines: expected }]
        );
    }
}

#[test]
fn block_order_follows_source() {
    let doc = "# One\n\npara\n\n- a\n\n1. b\n\n---\n\n```\ncode\n```\n\n## Two";
    let kinds: Vec<&str> = parse(doc)
        .iter()
        .map(|block| match block {
            Block::Heading { .. } => "heading",
            Block::Paragraph { .. } => "paragraph",
            Block::UnorderedList { .. } => "unordered",
            Block::OrderedList { .. } => "ordered",
            Block::CodeBlock { .. } => "code",
            Block::Rule => "rule",
        })
        .collect();
    assert_eq!(
        kinds,
        ["heading", "paragraph", "unordered", "ordered", "rule", "code", "heading"]
    );
}

#[test]
fn unterminated_syntax_degrades_to_text() {
    assert_eq!(
        parse("```\nstill code"),
        vec![Block::CodeBlock {
            language: String::new(),
            lines: vec!["still code".to_string()],
        }]
    );
    assert_eq!(
        parse("a ** b"),
        vec![Block::Paragraph {
            content: vec![Span::Text("a ** b".to_string())],
        }]
    );
}
