//! HTML block parsing.

use crate::syntax::{BlockId, BlockKind, BlockMeta, Document, HtmlKind};
use crate::tokenizer::{Token, TokenKind};

use super::utils::{flatten_raw, is_blank_line, line_end, skip_indentation};

/// Tag names that start an HTML block.
const BLOCK_TAGS: &[&str] = &[
    "article",
    "aside",
    "blockquote",
    "body",
    "br",
    "button",
    "canvas",
    "caption",
    "col",
    "colgroup",
    "dd",
    "div",
    "dl",
    "dt",
    "embed",
    "fieldset",
    "figcaption",
    "figure",
    "footer",
    "form",
    "h1",
    "h2",
    "h3",
    "h4",
    "h5",
    "h6",
    "header",
    "hgroup",
    "hr",
    "li",
    "map",
    "object",
    "ol",
    "output",
    "p",
    "pre",
    "progress",
    "script",
    "section",
    "style",
    "table",
    "tbody",
    "td",
    "textarea",
    "tfoot",
    "th",
    "thead",
    "tr",
    "ul",
    "video",
];

fn is_block_tag(token: &Token) -> bool {
    token.is(TokenKind::Text)
        && BLOCK_TAGS
            .iter()
            .any(|tag| tag.eq_ignore_ascii_case(&token.raw))
}

/// What may follow a tag name: whitespace, `>`, `/>` or the end of the line.
fn ends_tag_name(token: Option<&Token>) -> bool {
    token.is_none_or(|t| {
        matches!(
            t.kind,
            TokenKind::Whitespace | TokenKind::Newline | TokenKind::AngleRight | TokenKind::Slash
        )
    })
}

fn kind_at(tokens: &[Token], at: usize) -> Option<TokenKind> {
    tokens.get(at).map(|t| t.kind)
}

/// Classify the HTML opener at `tokens[at..]`.
fn opener(tokens: &[Token], at: usize) -> Option<HtmlKind> {
    match kind_at(tokens, at)? {
        TokenKind::HtmlComment => return Some(HtmlKind::Comment),
        TokenKind::Cdata => return Some(HtmlKind::Cdata),
        TokenKind::ProcessingInstruction => return Some(HtmlKind::ProcessingInstruction),
        TokenKind::AngleLeft => {}
        _ => return None,
    }

    match kind_at(tokens, at + 1)? {
        TokenKind::Question => Some(HtmlKind::ProcessingInstruction),
        TokenKind::Bang => {
            let next = tokens.get(at + 2)?;
            if next.is(TokenKind::Minus) && next.length == 2 {
                return Some(HtmlKind::Comment);
            }
            let is_cdata = next.is(TokenKind::BracketLeft)
                && tokens.get(at + 3).is_some_and(|t| t.raw == "CDATA")
                && kind_at(tokens, at + 4) == Some(TokenKind::BracketLeft);
            is_cdata.then_some(HtmlKind::Cdata)
        }
        TokenKind::Slash => {
            let name = tokens.get(at + 2)?;
            (is_block_tag(name) && ends_tag_name(tokens.get(at + 3))).then_some(HtmlKind::CloseTag)
        }
        TokenKind::Text => {
            let name = &tokens[at + 1];
            (is_block_tag(name) && ends_tag_name(tokens.get(at + 2))).then_some(HtmlKind::OpenTag)
        }
        _ => None,
    }
}

pub(crate) fn can_parse(tokens: &[Token]) -> bool {
    opener(tokens, skip_indentation(tokens, 0)).is_some()
}

pub(crate) fn can_interrupt(tokens: &[Token]) -> bool {
    can_parse(tokens)
}

pub(crate) fn parse(doc: &mut Document, parent: BlockId, tokens: &[Token]) -> usize {
    let kind = opener(tokens, skip_indentation(tokens, 0)).unwrap_or(HtmlKind::OpenTag);

    // Runs until a blank line follows or input ends
    let mut end = line_end(tokens, 0);
    while end < tokens.len() && is_blank_line(tokens, end).is_none() {
        end = line_end(tokens, end);
    }

    let html = &tokens[..end];
    let mut inline = flatten_raw(html);
    if inline.ends_with('\n') {
        inline.pop();
    }

    let id = doc.append(parent, BlockKind::Html, html.to_vec());
    doc.set_meta(id, BlockMeta::Html { kind });
    doc.set_inline(id, inline);
    end
}
