//! Thematic break parsing: `***`, `- - -`, `___`.

use crate::syntax::{BlockId, BlockKind, BlockMeta, Document};
use crate::tokenizer::{Token, TokenKind};

use super::utils::{line_end, skip_indentation};

/// Total marker count on the line at `tokens[0]`, with the marker kind.
fn marker_run(tokens: &[Token]) -> Option<(TokenKind, usize)> {
    let pos = skip_indentation(tokens, 0);
    let marker = tokens.get(pos)?.kind;
    if !matches!(
        marker,
        TokenKind::Minus | TokenKind::Star | TokenKind::Underscore
    ) {
        return None;
    }

    let mut count = 0;
    for token in &tokens[pos..] {
        match token.kind {
            TokenKind::Newline => break,
            TokenKind::Whitespace => {}
            kind if kind == marker => count += token.length,
            _ => return None,
        }
    }
    Some((marker, count))
}

pub(crate) fn can_parse(tokens: &[Token]) -> bool {
    marker_run(tokens).is_some_and(|(_, count)| count >= 3)
}

pub(crate) fn can_interrupt(tokens: &[Token]) -> bool {
    can_parse(tokens)
}

pub(crate) fn parse(doc: &mut Document, parent: BlockId, tokens: &[Token]) -> usize {
    let end = line_end(tokens, 0);
    let markers: Vec<Token> = tokens[..end]
        .iter()
        .filter(|t| !matches!(t.kind, TokenKind::Whitespace | TokenKind::Newline))
        .cloned()
        .collect();
    let marker = markers
        .first()
        .and_then(|t| t.kind.marker_char())
        .unwrap_or('-');

    let id = doc.append(parent, BlockKind::ThematicBreak, markers);
    doc.set_meta(id, BlockMeta::ThematicBreak { marker });
    end
}
