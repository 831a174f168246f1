//! Shared utilities for block parsing.
//!
//! Everything here works on read-only token slices and returns indices or
//! counts; callers advance their own cursor.

use crate::tokenizer::{Token, TokenKind};

/// Index of the first token of `kind` in `tokens[from..]`, looking at no
/// more than `max_scan` tokens when given.
pub(crate) fn next_token(
    tokens: &[Token],
    kind: TokenKind,
    from: usize,
    max_scan: Option<usize>,
) -> Option<usize> {
    let limit = max_scan.unwrap_or(usize::MAX);
    tokens
        .iter()
        .enumerate()
        .skip(from)
        .take(limit)
        .find(|(_, t)| t.is(kind))
        .map(|(i, _)| i)
}

/// Index just past the newline ending the line that contains `from`, or the
/// end of input.
pub(crate) fn line_end(tokens: &[Token], from: usize) -> usize {
    next_token(tokens, TokenKind::Newline, from, None).map_or(tokens.len(), |nl| nl + 1)
}

/// Number of tokens making up a blank line at `at`: a newline, whitespace
/// then newline, or whitespace running to end of input.
pub(crate) fn is_blank_line(tokens: &[Token], at: usize) -> Option<usize> {
    match tokens.get(at)?.kind {
        TokenKind::Newline => Some(1),
        TokenKind::Whitespace => match tokens.get(at + 1) {
            None => Some(1),
            Some(t) if t.is(TokenKind::Newline) => Some(2),
            Some(_) => None,
        },
        _ => None,
    }
}

/// Whitespace of at most three columns.
pub(crate) fn is_indentation(tokens: &[Token], at: usize) -> bool {
    tokens
        .get(at)
        .is_some_and(|t| t.is(TokenKind::Whitespace) && t.length <= 3)
}

pub(crate) fn skip_indentation(tokens: &[Token], at: usize) -> usize {
    if is_indentation(tokens, at) { at + 1 } else { at }
}

fn is_space(token: &Token) -> bool {
    matches!(token.kind, TokenKind::Whitespace | TokenKind::Newline)
}

/// Strip whitespace and newline tokens from both ends.
pub(crate) fn trim(tokens: &[Token]) -> &[Token] {
    let start = tokens
        .iter()
        .position(|t| !is_space(t))
        .unwrap_or(tokens.len());
    let end = tokens
        .iter()
        .rposition(|t| !is_space(t))
        .map_or(start, |i| i + 1);
    &tokens[start..end]
}

/// Drop blank lines before the first and after the last line with content.
/// The newline ending the last content line is kept.
pub(crate) fn kill_blank_lines(tokens: &[Token]) -> &[Token] {
    let mut start = 0;
    while let Some(n) = is_blank_line(tokens, start) {
        start += n;
    }

    match tokens.iter().rposition(|t| !is_space(t)) {
        Some(last) if last >= start => &tokens[start..line_end(tokens, last)],
        _ => &[],
    }
}

/// Concatenated source text.
pub(crate) fn flatten_raw(tokens: &[Token]) -> String {
    tokens.iter().map(|t| t.raw.as_str()).collect()
}

/// Concatenated text with backslash escapes resolved.
pub(crate) fn flatten_text(tokens: &[Token]) -> String {
    tokens.iter().map(Token::text).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::tokenizer::tokenize;

    fn lex(input: &str) -> Vec<Token> {
        tokenize(input, &Config::default()).unwrap()
    }

    #[test]
    fn test_next_token_respects_scan_limit() {
        let tokens = lex("  > a");
        assert_eq!(next_token(&tokens, TokenKind::AngleRight, 0, Some(2)), Some(1));
        assert_eq!(next_token(&tokens, TokenKind::AngleRight, 0, Some(1)), None);
        assert_eq!(next_token(&tokens, TokenKind::AngleRight, 2, None), None);
    }

    #[test]
    fn test_line_end() {
        let tokens = lex("ab\ncd");
        assert_eq!(line_end(&tokens, 0), 2);
        assert_eq!(line_end(&tokens, 2), 3);
        assert_eq!(line_end(&tokens, 3), 3);
    }

    #[test]
    fn test_blank_lines() {
        let tokens = lex("\n  \nx\n   ");
        assert_eq!(is_blank_line(&tokens, 0), Some(1));
        assert_eq!(is_blank_line(&tokens, 1), Some(2));
        assert_eq!(is_blank_line(&tokens, 3), None);
        assert_eq!(is_blank_line(&tokens, 5), Some(1));
        assert_eq!(is_blank_line(&tokens, 6), None);
    }

    #[test]
    fn test_indentation() {
        let tokens = lex("   a");
        assert!(is_indentation(&tokens, 0));
        assert_eq!(skip_indentation(&tokens, 0), 1);

        let tokens = lex("    a");
        assert!(!is_indentation(&tokens, 0));
        assert_eq!(skip_indentation(&tokens, 0), 0);
    }

    #[test]
    fn test_trim() {
        let tokens = lex("\n  a b \n");
        assert_eq!(flatten_raw(trim(&tokens)), "a b");
        assert!(trim(&lex(" \n ")).is_empty());
    }

    #[test]
    fn test_kill_blank_lines() {
        let tokens = lex("\n   \nfoo\n\nbar\n\n  \n");
        assert_eq!(flatten_raw(kill_blank_lines(&tokens)), "foo\n\nbar\n");
        assert!(kill_blank_lines(&lex("\n\n")).is_empty());
    }

    #[test]
    fn test_flatten_text_resolves_escapes() {
        let tokens = lex("\\*a\\*");
        assert_eq!(flatten_raw(&tokens), "\\*a\\*");
        assert_eq!(flatten_text(&tokens), "*a*");
    }
}
