//! Token kinds and the token type produced by the tokenizer.

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum TokenKind {
    // Structural
    Whitespace,
    Newline,
    Text,

    // Repeatable runs: one token per maximal run, `length` is the run length
    Hash,       // #
    Minus,      // -
    Equals,     // =
    Star,       // *
    Underscore, // _
    Tilde,      // ~
    Backtick,   // `

    // Single characters
    Colon,        // :
    Slash,        // /
    Bang,         // !
    Question,     // ?
    SingleQuote,  // '
    DoubleQuote,  // "
    ParenLeft,    // (
    ParenRight,   // )
    BracketLeft,  // [
    BracketRight, // ]
    BraceLeft,    // {
    BraceRight,   // }
    AngleLeft,    // <
    AngleRight,   // >
    Backslash,    // \ not followed by punctuation

    /// Backslash followed by ASCII punctuation, e.g. `\#`.
    Escaped(char),

    // Raw multi-line constructs (only with `raw_html` enabled)
    HtmlComment,           // <!-- ... -->
    Cdata,                 // <![CDATA[ ... ]]>
    ProcessingInstruction, // <? ... ?>
}

impl TokenKind {
    /// Kind of a repeatable run starting with `c`.
    pub(crate) fn run(c: char) -> Option<Self> {
        Some(match c {
            '`' => Self::Backtick,
            '=' => Self::Equals,
            '#' => Self::Hash,
            '-' => Self::Minus,
            '*' => Self::Star,
            '~' => Self::Tilde,
            '_' => Self::Underscore,
            ' ' => Self::Whitespace,
            _ => return None,
        })
    }

    /// Kind of a single-character punctuation token.
    pub(crate) fn single(c: char) -> Option<Self> {
        Some(match c {
            ':' => Self::Colon,
            '/' => Self::Slash,
            '!' => Self::Bang,
            '?' => Self::Question,
            '\'' => Self::SingleQuote,
            '"' => Self::DoubleQuote,
            '(' => Self::ParenLeft,
            ')' => Self::ParenRight,
            '[' => Self::BracketLeft,
            ']' => Self::BracketRight,
            '{' => Self::BraceLeft,
            '}' => Self::BraceRight,
            '<' => Self::AngleLeft,
            '>' => Self::AngleRight,
            '\\' => Self::Backslash,
            _ => return None,
        })
    }

    /// The character a run or marker token is made of.
    pub fn marker_char(self) -> Option<char> {
        Some(match self {
            Self::Hash => '#',
            Self::Minus => '-',
            Self::Equals => '=',
            Self::Star => '*',
            Self::Underscore => '_',
            Self::Tilde => '~',
            Self::Backtick => '`',
            Self::AngleRight => '>',
            _ => return None,
        })
    }
}

/// A lexical unit with its 1-based source position.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Token {
    pub kind: TokenKind,
    pub line: usize,
    pub column: usize,
    pub raw: String,
    /// Character count of `raw`; the delimiter count for run tokens.
    pub length: usize,
}

impl Token {
    pub fn new(kind: TokenKind, line: usize, column: usize, raw: impl Into<String>) -> Self {
        let raw = raw.into();
        let length = raw.chars().count();
        Self {
            kind,
            line,
            column,
            raw,
            length,
        }
    }

    pub fn is(&self, kind: TokenKind) -> bool {
        self.kind == kind
    }

    /// Text contributed to inline content: escapes resolve to the escaped character.
    pub fn text(&self) -> &str {
        match self.kind {
            TokenKind::Escaped(_) => &self.raw[1..],
            _ => &self.raw,
        }
    }

    /// Returns the remainder after removing the first `n` characters, as a
    /// fresh token of the same kind. `None` when nothing would remain.
    pub fn split_off_front(&self, n: usize) -> Option<Token> {
        if n >= self.length {
            return None;
        }
        let byte = self
            .raw
            .char_indices()
            .nth(n)
            .map_or(self.raw.len(), |(i, _)| i);
        Some(Token::new(self.kind, self.line, self.column + n, &self.raw[byte..]))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_length_counts_chars() {
        let token = Token::new(TokenKind::Text, 1, 1, "héllo");
        assert_eq!(token.length, 5);
    }

    #[test]
    fn test_escaped_text() {
        let token = Token::new(TokenKind::Escaped('#'), 1, 1, "\\#");
        assert_eq!(token.text(), "#");
        assert_eq!(token.raw, "\\#");
    }

    #[test]
    fn test_split_off_front() {
        let token = Token::new(TokenKind::Whitespace, 2, 3, "   ");
        let rest = token.split_off_front(1).unwrap();
        assert_eq!(rest.raw, "  ");
        assert_eq!(rest.length, 2);
        assert_eq!(rest.column, 4);
        assert_eq!(rest.line, 2);
    }

    #[test]
    fn test_split_off_everything() {
        let token = Token::new(TokenKind::Whitespace, 1, 1, " ");
        assert_eq!(token.split_off_front(1), None);
    }
}
