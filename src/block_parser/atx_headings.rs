//! ATX heading parsing: `# Title`, `### Title ###`.

use crate::config::Blocks;
use crate::syntax::{BlockId, BlockKind, BlockMeta, Document};
use crate::tokenizer::{Token, TokenKind};

use super::utils::{flatten_text, line_end, skip_indentation, trim};

pub(crate) fn can_parse(tokens: &[Token]) -> bool {
    let pos = skip_indentation(tokens, 0);
    let Some(hashes) = tokens.get(pos) else {
        return false;
    };

    hashes.is(TokenKind::Hash)
        && hashes.length <= 6
        && tokens
            .get(pos + 1)
            .is_none_or(|t| matches!(t.kind, TokenKind::Whitespace | TokenKind::Newline))
}

pub(crate) fn can_interrupt(blocks: &Blocks, tokens: &[Token]) -> bool {
    !blocks.blank_before_header && can_parse(tokens)
}

/// Heading content with the opening run and an optional closing run removed.
fn content(line: &[Token]) -> (u8, &[Token]) {
    let line = trim(line);
    let level = line.first().map_or(1, |t| t.length) as u8;
    let mut rest = trim(line.get(1..).unwrap_or_default());

    // A closing sequence must be separated from the text by whitespace
    if let [before @ .., last] = rest
        && last.is(TokenKind::Hash)
        && before.last().is_none_or(|t| t.is(TokenKind::Whitespace))
    {
        rest = trim(before);
    }

    (level, rest)
}

pub(crate) fn parse(doc: &mut Document, parent: BlockId, tokens: &[Token]) -> usize {
    let end = line_end(tokens, 0);
    let line = &tokens[..end];
    let (level, text) = content(line);
    let inline = flatten_text(text);

    let id = doc.append(parent, BlockKind::AtxHeading, line.to_vec());
    doc.set_meta(id, BlockMeta::Heading { level });
    doc.set_inline(id, inline);
    end
}
