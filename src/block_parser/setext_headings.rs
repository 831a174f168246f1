//! Setext heading parsing: a content line underlined with `=` or `-`.

use crate::syntax::{BlockId, BlockKind, BlockMeta, Document};
use crate::tokenizer::{Token, TokenKind};

use super::utils::{flatten_text, line_end, skip_indentation, trim};
use super::{code_blocks, html_blocks};

/// Underline kind if `tokens[at..]` starts with a valid underline.
fn underline(tokens: &[Token], at: usize) -> Option<TokenKind> {
    let pos = skip_indentation(tokens, at);
    let marker = tokens.get(pos)?;
    if !matches!(marker.kind, TokenKind::Equals | TokenKind::Minus) {
        return None;
    }

    let mut pos = pos + 1;
    if tokens.get(pos).is_some_and(|t| t.is(TokenKind::Whitespace)) {
        pos += 1;
    }

    tokens
        .get(pos)
        .is_none_or(|t| t.is(TokenKind::Newline))
        .then_some(marker.kind)
}

pub(crate) fn can_parse(tokens: &[Token]) -> bool {
    if tokens
        .first()
        .is_some_and(|t| t.is(TokenKind::Whitespace) && t.length > 3)
    {
        return false;
    }

    let first_line_end = line_end(tokens, 0);
    if first_line_end == tokens.len() {
        return false;
    }

    let first_line = &tokens[..first_line_end];
    if trim(first_line).is_empty() {
        return false;
    }

    // Only paragraph text can be underlined
    if code_blocks::can_parse(first_line) || html_blocks::can_parse(first_line) {
        return false;
    }

    underline(tokens, first_line_end).is_some()
}

pub(crate) fn can_interrupt(_tokens: &[Token]) -> bool {
    false
}

pub(crate) fn parse(doc: &mut Document, parent: BlockId, tokens: &[Token]) -> usize {
    let first_line_end = line_end(tokens, 0);
    let end = line_end(tokens, first_line_end);

    let level = match underline(tokens, first_line_end) {
        Some(TokenKind::Equals) => 1,
        _ => 2,
    };
    let inline = flatten_text(trim(&tokens[..first_line_end]));

    let id = doc.append(parent, BlockKind::SetextHeading, tokens[..end].to_vec());
    doc.set_meta(id, BlockMeta::Heading { level });
    doc.set_inline(id, inline);
    end
}
