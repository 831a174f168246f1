//! Indented code block parsing.

use crate::syntax::{BlockId, BlockKind, Document};
use crate::tokenizer::{Token, TokenKind};

use super::utils::{is_blank_line, kill_blank_lines, line_end};

const CODE_INDENT: usize = 4;

fn is_code_line(tokens: &[Token], at: usize) -> bool {
    tokens
        .get(at)
        .is_some_and(|t| t.is(TokenKind::Whitespace) && t.length >= CODE_INDENT)
}

pub(crate) fn can_parse(tokens: &[Token]) -> bool {
    let mut pos = 0;
    while let Some(blank) = is_blank_line(tokens, pos) {
        pos += blank;
    }
    is_code_line(tokens, pos)
}

/// Indented code never interrupts a paragraph.
pub(crate) fn can_interrupt(_tokens: &[Token]) -> bool {
    false
}

/// Code body: four columns stripped from every line, newline terminated.
fn body(tokens: &[Token]) -> String {
    let mut out = String::new();
    let mut line_start = true;
    for token in kill_blank_lines(tokens) {
        if line_start && token.is(TokenKind::Whitespace) {
            if let Some(rest) = token.split_off_front(CODE_INDENT) {
                out.push_str(&rest.raw);
            }
        } else {
            out.push_str(&token.raw);
        }
        line_start = token.is(TokenKind::Newline);
    }
    if !out.is_empty() && !out.ends_with('\n') {
        out.push('\n');
    }
    out
}

pub(crate) fn parse(doc: &mut Document, parent: BlockId, tokens: &[Token]) -> usize {
    let mut pos = 0;
    let mut end = 0;
    while pos < tokens.len() {
        if let Some(blank) = is_blank_line(tokens, pos) {
            pos += blank;
            continue;
        }
        if !is_code_line(tokens, pos) {
            break;
        }
        pos = line_end(tokens, pos);
        end = pos;
    }

    // Trailing blank lines stay with the caller
    let code = &tokens[..end];
    let id = doc.append(parent, BlockKind::IndentedCode, code.to_vec());
    doc.set_inline(id, body(code));
    end
}
