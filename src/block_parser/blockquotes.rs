//! Blockquote parsing: the only container grammar.
//!
//! Markers are stripped line by line into a fresh token sequence which is
//! then parsed recursively with the blockquote as parent.

use crate::config::Blocks;
use crate::syntax::{BlockId, BlockKind, Document};
use crate::tokenizer::{Token, TokenKind};

use super::BlockParser;
use super::utils::{kill_blank_lines, line_end, next_token, skip_indentation};

/// Index of the `>` marker for the line starting at `at`.
fn marker_at(tokens: &[Token], at: usize) -> Option<usize> {
    next_token(tokens, TokenKind::AngleRight, skip_indentation(tokens, at), Some(1))
}

pub(crate) fn can_parse(tokens: &[Token]) -> bool {
    marker_at(tokens, 0).is_some()
}

pub(crate) fn can_interrupt(blocks: &Blocks, tokens: &[Token]) -> bool {
    !blocks.blank_before_blockquote && can_parse(tokens)
}

pub(crate) fn parse(
    parser: &BlockParser,
    doc: &mut Document,
    parent: BlockId,
    tokens: &[Token],
) -> usize {
    let mut inner: Vec<Token> = Vec::new();
    let mut pos = 0;

    // A line without a marker (blank lines included) ends the quote
    while let Some(marker) = marker_at(tokens, pos) {
        pos = marker + 1;

        // One optional space after the marker belongs to the marker
        if let Some(space) = tokens.get(pos)
            && space.is(TokenKind::Whitespace)
        {
            inner.extend(space.split_off_front(1));
            pos += 1;
        }

        let end = line_end(tokens, pos);
        inner.extend_from_slice(&tokens[pos..end]);
        pos = end;
    }

    let body = kill_blank_lines(&inner);
    log::trace!("Blockquote: {} tokens, {} after stripping markers", pos, body.len());

    let id = doc.append(parent, BlockKind::Blockquote, body.to_vec());
    parser.parse_blocks(doc, id, body);
    pos
}
