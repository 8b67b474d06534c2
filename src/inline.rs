use crate::block::Span;

/// A span recognized somewhere in the remaining text.
struct Found {
    start: usize,
    end: usize,
    span: Span,
}

/// Tokenize one block's text into inline spans.
///
/// The leftmost span wins. At a given position the patterns are tried as
/// strong, emphasis, inline code, link. Anything that does not close is kept
/// as literal text, so every input produces a result.
pub fn tokenize(text: &str) -> Vec<Span> {
    let mut spans = Vec::new();
    let mut rest = text;

    while !rest.is_empty() {
        let Some(found) = find_span(rest) else {
            spans.push(Span::Text(rest.to_string()));
            break;
        };

        if found.start > 0 {
            spans.push(Span::Text(rest[..found.start].to_string()));
        }
        spans.push(found.span);
        rest = &rest[found.end..];
    }

    spans
}

fn find_span(text: &str) -> Option<Found> {
    // Delimiters are all ASCII, so every index we stop at is a char boundary.
    for (start, byte) in text.bytes().enumerate() {
        let found = match byte {
            b'*' => strong(text, start).or_else(|| emphasis(text, start)),
            b'`' => code(text, start),
            b'[' => link(text, start),
            _ => None,
        };
        if found.is_some() {
            return found;
        }
    }
    None
}

/// `**body**` where the body is non-empty and does not open with another `*`.
/// The body may hold single asterisks, which lets emphasis nest inside.
fn strong(text: &str, start: usize) -> Option<Found> {
    let body_start = start + 2;
    if !text[start..].starts_with("**") || text[body_start..].starts_with('*') {
        return None;
    }
    let len = text[body_start..].find("**")?;
    if len == 0 {
        return None;
    }
    let body = &text[body_start..body_start + len];
    Some(Found {
        start,
        end: body_start + len + 2,
        span: Span::Strong(tokenize(body)),
    })
}

/// `*body*` with no asterisk inside the body.
fn emphasis(text: &str, start: usize) -> Option<Found> {
    let (body, end) = delimited(text, start, '*')?;
    Some(Found {
        start,
        end,
        span: Span::Emphasis(tokenize(body)),
    })
}

/// `` `body` `` kept literally.
fn code(text: &str, start: usize) -> Option<Found> {
    let (body, end) = delimited(text, start, '`')?;
    Some(Found {
        start,
        end,
        span: Span::Code(body.to_string()),
    })
}

/// `[label](href)`; the label may not contain `]` nor the href `)`.
fn link(text: &str, start: usize) -> Option<Found> {
    let label_start = start + 1;
    let label_len = text[label_start..].find(']')?;
    if label_len == 0 {
        return None;
    }
    let label_end = label_start + label_len;

    let href_start = label_end + 2;
    if !text[label_end..].starts_with("](") {
        return None;
    }
    let href_len = text[href_start..].find(')')?;
    if href_len == 0 {
        return None;
    }

    Some(Found {
        start,
        end: href_start + href_len + 1,
        span: Span::Link {
            label: tokenize(&text[label_start..label_end]),
            href: text[href_start..href_start + href_len].to_string(),
        },
    })
}

/// Body between a single-character delimiter at `start` and its next
/// occurrence. Returns the body and the index just past the closing delimiter.
fn delimited(text: &str, start: usize, delimiter: char) -> Option<(&str, usize)> {
    let body_start = start + delimiter.len_utf8();
    let len = text[body_start..].find(delimiter)?;
    if len == 0 {
        return None;
    }
    Some((
        &text[body_start..body_start + len],
        body_start + len + delimiter.len_utf8(),
    ))
}
