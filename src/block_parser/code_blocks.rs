//! Fenced code block parsing utilities.

use crate::syntax::{BlockId, BlockKind, BlockMeta, Document};
use crate::tokenizer::{Token, TokenKind};

use super::utils::{flatten_text, line_end, skip_indentation, trim};

/// Opening fence: a run of at least three backticks or tildes.
#[derive(Debug, Clone, Copy)]
struct Fence {
    kind: TokenKind,
    length: usize,
    indent: usize,
    /// Index of the fence token.
    at: usize,
}

fn try_parse_fence(tokens: &[Token]) -> Option<Fence> {
    let at = skip_indentation(tokens, 0);
    let fence = tokens.get(at)?;
    if !matches!(fence.kind, TokenKind::Backtick | TokenKind::Tilde) || fence.length < 3 {
        return None;
    }

    // The info string may not contain the fence character
    let opening_line = &tokens[at + 1..line_end(tokens, at)];
    if opening_line.iter().any(|t| t.is(fence.kind)) {
        return None;
    }

    let indent = if at > 0 { tokens[0].length } else { 0 };
    Some(Fence {
        kind: fence.kind,
        length: fence.length,
        indent,
        at,
    })
}

/// Token count of a closing fence line starting at `at`, newline included.
fn closing_len(tokens: &[Token], at: usize, fence: &Fence) -> Option<usize> {
    let mut pos = skip_indentation(tokens, at);
    let marker = tokens.get(pos)?;
    if !marker.is(fence.kind) || marker.length < fence.length {
        return None;
    }
    pos += 1;

    if tokens.get(pos).is_some_and(|t| t.is(TokenKind::Whitespace)) {
        pos += 1;
    }

    match tokens.get(pos) {
        None => Some(pos - at),
        Some(t) if t.is(TokenKind::Newline) => Some(pos + 1 - at),
        Some(_) => None,
    }
}

pub(crate) fn can_parse(tokens: &[Token]) -> bool {
    try_parse_fence(tokens).is_some()
}

pub(crate) fn can_interrupt(tokens: &[Token]) -> bool {
    can_parse(tokens)
}

/// Append one body line, removing up to `indent` leading columns.
fn push_line(out: &mut String, line: &[Token], indent: usize) {
    for (i, token) in line.iter().enumerate() {
        if i == 0 && token.is(TokenKind::Whitespace) {
            if let Some(rest) = token.split_off_front(indent) {
                out.push_str(&rest.raw);
            }
        } else {
            out.push_str(&token.raw);
        }
    }
}

pub(crate) fn parse(doc: &mut Document, parent: BlockId, tokens: &[Token]) -> usize {
    let Some(fence) = try_parse_fence(tokens) else {
        return 0;
    };

    let opening_end = line_end(tokens, fence.at);
    let info = flatten_text(trim(&tokens[fence.at + 1..opening_end]));

    let mut body = String::new();
    let mut pos = opening_end;
    let mut end = tokens.len();
    while pos < tokens.len() {
        if let Some(len) = closing_len(tokens, pos, &fence) {
            end = pos + len;
            break;
        }
        let next = line_end(tokens, pos);
        push_line(&mut body, &tokens[pos..next], fence.indent);
        pos = next;
    }

    if !body.is_empty() && !body.ends_with('\n') {
        body.push('\n');
    }

    log::trace!(
        "Fenced code: {:?} x{} info={:?}",
        fence.kind,
        fence.length,
        info
    );

    let id = doc.append(parent, BlockKind::FencedCode, tokens[..end].to_vec());
    doc.set_meta(
        id,
        BlockMeta::FencedCode {
            info,
            fence: fence.kind.marker_char().unwrap_or('`'),
            fence_length: fence.length,
        },
    );
    doc.set_inline(id, body);
    end
}
