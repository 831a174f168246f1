//! Paragraph parsing: the fallback grammar.

use crate::syntax::{BlockId, BlockKind, Document};
use crate::tokenizer::{Token, TokenKind};

use super::BlockParser;
use super::utils::{flatten_text, is_blank_line, trim};

pub(crate) fn can_parse(_tokens: &[Token]) -> bool {
    true
}

pub(crate) fn can_interrupt(_tokens: &[Token]) -> bool {
    false
}

pub(crate) fn parse(
    parser: &BlockParser,
    doc: &mut Document,
    parent: BlockId,
    tokens: &[Token],
) -> usize {
    let context = doc.block(parent).kind();
    let mut content: Vec<Token> = Vec::new();
    let mut pos = 0;

    while let Some(token) = tokens.get(pos) {
        pos += 1;

        if token.is(TokenKind::Newline) {
            let rest = &tokens[pos..];
            if parser.can_interrupt(context, rest).is_some()
                || is_blank_line(tokens, pos).is_some()
            {
                break;
            }

            // Continuation lines lose their indentation
            while tokens.get(pos).is_some_and(|t| t.is(TokenKind::Whitespace)) {
                pos += 1;
            }
        }

        content.push(token.clone());
    }

    let content = trim(&content).to_vec();
    let inline = flatten_text(&content);

    let id = doc.append(parent, BlockKind::Paragraph, content);
    doc.set_inline(id, inline);
    pos
}
