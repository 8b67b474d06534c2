use crate::block::{Block, ListItem, Segment};
use crate::inline::tokenize;

/// Parse markdown text into a list of blocks
pub fn parse(markdown: &str) -> Vec<Block> {
    let blocks: Vec<Block> = segment(markdown).into_iter().map(inline_pass).collect();
    log::debug!("parsed {} blocks", blocks.len());
    blocks
}

/// Split markdown text into block segments without touching inline syntax.
pub fn segment(markdown: &str) -> Vec<Segment> {
    let normalized = markdown.replace("\r\n", "\n");
    let mut state = SegmentState::default();

    for line in normalized.lines() {
        state.feed(line);
    }
    state.finish()
}

/// Tokenize the text payloads of a segment. Code lines are kept as they are.
fn inline_pass(segment: Segment) -> Block {
    match segment {
        Segment::Heading { level, text } => Block::Heading {
            level,
            content: tokenize(&text),
        },
        Segment::Paragraph { text } => Block::Paragraph {
            content: tokenize(&text),
        },
        Segment::UnorderedList { items } => Block::UnorderedList {
            items: list_items(&items),
        },
        Segment::OrderedList { start, items } => Block::OrderedList {
            start,
            items: list_items(&items),
        },
        Segment::CodeBlock { language, lines } => Block::CodeBlock { language, lines },
        Segment::Rule => Block::Rule,
    }
}

fn list_items(items: &[String]) -> Vec<ListItem> {
    items
        .iter()
        .map(|item| ListItem {
            content: tokenize(item),
        })
        .collect()
}

/// Accumulators that can be flushed into a segment.
#[derive(Clone, Copy, Debug)]
enum Pending {
    Paragraph,
    Unordered,
    Ordered,
    Code,
}

struct OrderedBuilder {
    start: u64,
    items: Vec<String>,
}

struct CodeBuilder {
    language: String,
    lines: Vec<String>,
}

#[derive(Default)]
struct SegmentState {
    segments: Vec<Segment>,

    // Trimmed lines of the open paragraph
    paragraph: Vec<String>,

    // List state; at most one of these is open
    unordered: Option<Vec<String>>,
    ordered: Option<OrderedBuilder>,

    // Open fenced code block
    code: Option<CodeBuilder>,
}

impl SegmentState {
    fn feed(&mut self, raw: &str) {
        if let Some(code) = self.code.as_mut() {
            if is_fence(raw.trim()) {
                self.flush(Pending::Code);
            } else {
                code.lines.push(raw.to_string());
            }
            return;
        }

        let trimmed = raw.trim();

        if trimmed.is_empty() {
            self.flush_text();
            return;
        }

        if is_fence(trimmed) {
            self.flush_text();
            self.code = Some(CodeBuilder {
                language: trimmed.replace('`', "").trim().to_string(),
                lines: Vec::new(),
            });
            return;
        }

        if is_rule(trimmed) {
            self.flush_text();
            self.segments.push(Segment::Rule);
            return;
        }

        if let Some((level, text)) = heading(trimmed) {
            self.flush_text();
            self.segments.push(Segment::Heading {
                level,
                text: text.to_string(),
            });
            return;
        }

        if is_indented(raw) && self.extend_last_item(trimmed) {
            return;
        }

        if let Some(item) = bullet_item(trimmed) {
            self.flush(Pending::Paragraph);
            self.flush(Pending::Ordered);
            self.unordered
                .get_or_insert_with(Vec::new)
                .push(item.to_string());
            return;
        }

        if let Some((ordinal, item)) = numbered_item(trimmed) {
            self.flush(Pending::Paragraph);
            self.flush(Pending::Unordered);
            self.ordered
                .get_or_insert_with(|| OrderedBuilder {
                    start: ordinal,
                    items: Vec::new(),
                })
                .items
                .push(item.to_string());
            return;
        }

        // A plain line closes any list so the paragraph lands after it.
        self.flush(Pending::Unordered);
        self.flush(Pending::Ordered);
        self.paragraph.push(trimmed.to_string());
    }

    /// Append a continuation line to the last item of the open list.
    fn extend_last_item(&mut self, trimmed: &str) -> bool {
        let last = match (self.unordered.as_mut(), self.ordered.as_mut()) {
            (Some(items), _) => items.last_mut(),
            (None, Some(ordered)) => ordered.items.last_mut(),
            (None, None) => None,
        };
        let Some(last) = last else {
            return false;
        };
        last.push(' ');
        last.push_str(trimmed);
        true
    }

    fn flush_text(&mut self) {
        self.flush(Pending::Paragraph);
        self.flush(Pending::Unordered);
        self.flush(Pending::Ordered);
    }

    fn flush(&mut self, kind: Pending) {
        let segment = match kind {
            Pending::Paragraph => {
                if self.paragraph.is_empty() {
                    return;
                }
                let text = self.paragraph.join(" ");
                self.paragraph.clear();
                Segment::Paragraph { text }
            }
            Pending::Unordered => match self.unordered.take() {
                Some(items) if !items.is_empty() => Segment::UnorderedList { items },
                _ => return,
            },
            Pending::Ordered => match self.ordered.take() {
                Some(OrderedBuilder { start, items }) if !items.is_empty() => {
                    Segment::OrderedList { start, items }
                }
                _ => return,
            },
            Pending::Code => match self.code.take() {
                Some(CodeBuilder { language, lines }) => Segment::CodeBlock { language, lines },
                None => return,
            },
        };
        log::trace!("flushed {:?} accumulator", kind);
        self.segments.push(segment);
    }

    fn finish(mut self) -> Vec<Segment> {
        if let Some(code) = &self.code {
            log::trace!(
                "unterminated code fence, keeping {} lines",
                code.lines.len()
            );
        }
        self.flush(Pending::Paragraph);
        self.flush(Pending::Unordered);
        self.flush(Pending::Ordered);
        self.flush(Pending::Code);
        self.segments
    }
}

/// Three or more backticks open or close a fence; anything after them is the
/// info string.
fn is_fence(trimmed: &str) -> bool {
    trimmed.starts_with("```")
}

fn is_rule(trimmed: &str) -> bool {
    trimmed.len() >= 3 && trimmed.bytes().all(|b| b == b'-')
}

/// A run of `#`, whitespace, then content. Runs longer than six are capped.
fn heading(trimmed: &str) -> Option<(u8, &str)> {
    let hashes = trimmed.bytes().take_while(|&b| b == b'#').count();
    if hashes == 0 {
        return None;
    }
    let text = after_whitespace(&trimmed[hashes..])?;
    Some((hashes.min(6) as u8, text))
}

fn bullet_item(trimmed: &str) -> Option<&str> {
    let rest = trimmed.strip_prefix(['-', '*', '+'])?;
    after_whitespace(rest)
}

fn numbered_item(trimmed: &str) -> Option<(u64, &str)> {
    let digits = trimmed.bytes().take_while(u8::is_ascii_digit).count();
    if digits == 0 {
        return None;
    }
    let rest = trimmed[digits..].strip_prefix(['.', ')'])?;
    let text = after_whitespace(rest)?;
    // Numerals too large for u64 fall back to 1.
    let ordinal = trimmed[..digits].parse().unwrap_or(1);
    Some((ordinal, text))
}

/// Content after required leading whitespace, or `None` when the whitespace
/// or the content is missing.
fn after_whitespace(rest: &str) -> Option<&str> {
    if !rest.starts_with(char::is_whitespace) {
        return None;
    }
    let text = rest.trim();
    (!text.is_empty()).then_some(text)
}

fn is_indented(raw: &str) -> bool {
    raw.chars().take(2).filter(|c| c.is_whitespace()).count() == 2
}
