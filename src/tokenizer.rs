//! Tokenizer: turns normalized text into a lossless stream of tokens.
//!
//! The tokenizer knows character classes only. It never looks at block
//! structure, so every grammar sees the same stream: newlines, runs of
//! repeatable punctuation, single punctuation marks, escapes, whitespace and
//! text.

use std::fmt;
use std::ops::Range;

use serde::Serialize;

use crate::config::Config;

pub mod token;

pub use token::{Token, TokenKind};

/// Raw multi-line HTML constructs recognized when `raw_html` is enabled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum RawConstruct {
    Comment,
    Cdata,
    ProcessingInstruction,
}

impl RawConstruct {
    const ALL: [RawConstruct; 3] = [Self::Comment, Self::Cdata, Self::ProcessingInstruction];

    fn opener(self) -> &'static str {
        match self {
            Self::Comment => "<!--",
            Self::Cdata => "<![CDATA[",
            Self::ProcessingInstruction => "<?",
        }
    }

    fn closer(self) -> &'static str {
        match self {
            Self::Comment => "-->",
            Self::Cdata => "]]>",
            Self::ProcessingInstruction => "?>",
        }
    }

    fn kind(self) -> TokenKind {
        match self {
            Self::Comment => TokenKind::HtmlComment,
            Self::Cdata => TokenKind::Cdata,
            Self::ProcessingInstruction => TokenKind::ProcessingInstruction,
        }
    }

    fn opening(text: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| text.starts_with(c.opener()))
    }
}

impl fmt::Display for RawConstruct {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Comment => write!(f, "HTML comment"),
            Self::Cdata => write!(f, "CDATA section"),
            Self::ProcessingInstruction => write!(f, "processing instruction"),
        }
    }
}

/// Fatal tokenizer errors. Any of these aborts the whole parse.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LexError {
    /// A raw construct was opened but its closing delimiter never appears.
    Unterminated {
        construct: RawConstruct,
        line: usize,
        column: usize,
        /// Byte offset of the opener in the normalized input.
        offset: usize,
    },
}

impl LexError {
    /// Byte range of the offending opener in the normalized input.
    pub fn span(&self) -> Range<usize> {
        match self {
            Self::Unterminated {
                construct, offset, ..
            } => *offset..*offset + construct.opener().len(),
        }
    }
}

impl fmt::Display for LexError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unterminated {
                construct,
                line,
                column,
                ..
            } => write!(
                f,
                "unterminated {} starting at {}:{} (missing `{}`)",
                construct,
                line,
                column,
                construct.closer()
            ),
        }
    }
}

impl std::error::Error for LexError {}

/// Canonicalize line endings to `\n` and expand tabs to the next tab stop.
pub fn normalize(input: &str, tab_width: usize) -> String {
    let width = tab_width.max(1);
    let mut out = String::with_capacity(input.len());
    let mut column = 0;
    let mut chars = input.chars().peekable();

    while let Some(c) = chars.next() {
        match c {
            '\r' => {
                if chars.peek() == Some(&'\n') {
                    chars.next();
                }
                out.push('\n');
                column = 0;
            }
            '\n' => {
                out.push('\n');
                column = 0;
            }
            '\t' => {
                let spaces = width - column % width;
                out.extend(std::iter::repeat_n(' ', spaces));
                column += spaces;
            }
            _ => {
                out.push(c);
                column += 1;
            }
        }
    }

    out
}

/// Normalize `input` and split it into tokens.
///
/// With `raw_html` enabled, raw constructs are recognized at any position,
/// including inside code and paragraph text, so an unclosed one anywhere
/// fails the whole document.
pub fn tokenize(input: &str, config: &Config) -> Result<Vec<Token>, LexError> {
    let normalized = normalize(input, config.tab_width);
    Tokenizer::new(&normalized, config.raw_html).run()
}

struct PendingText {
    start: usize,
    line: usize,
    column: usize,
}

/// Single left-to-right scanner over already normalized input.
pub struct Tokenizer<'a> {
    input: &'a str,
    pos: usize,
    line: usize,
    column: usize,
    raw_html: bool,
    pending: Option<PendingText>,
    tokens: Vec<Token>,
}

impl<'a> Tokenizer<'a> {
    pub fn new(input: &'a str, raw_html: bool) -> Self {
        Self {
            input,
            pos: 0,
            line: 1,
            column: 1,
            raw_html,
            pending: None,
            tokens: Vec::new(),
        }
    }

    pub fn run(mut self) -> Result<Vec<Token>, LexError> {
        while let Some(c) = self.input[self.pos..].chars().next() {
            let rest = &self.input[self.pos..];

            if c == '\n' {
                self.emit(TokenKind::Newline, 1);
                continue;
            }

            if self.raw_html
                && let Some(construct) = RawConstruct::opening(rest)
            {
                let len = self.raw_construct_len(construct, rest)?;
                self.emit(construct.kind(), len);
                continue;
            }

            if c == '\\'
                && let Some(next) = rest[1..].chars().next()
                && next.is_ascii_punctuation()
            {
                self.emit(TokenKind::Escaped(next), 2);
                continue;
            }

            if let Some(kind) = TokenKind::single(c) {
                self.emit(kind, c.len_utf8());
                continue;
            }

            if let Some(kind) = TokenKind::run(c) {
                let len = rest.len() - rest.trim_start_matches(c).len();
                self.emit(kind, len);
                continue;
            }

            // Nothing matched: extend the pending text token
            if self.pending.is_none() {
                self.pending = Some(PendingText {
                    start: self.pos,
                    line: self.line,
                    column: self.column,
                });
            }
            self.pos += c.len_utf8();
            self.column += 1;
        }

        self.flush_text();
        log::trace!("Tokenized {} bytes into {} tokens", self.input.len(), self.tokens.len());
        Ok(self.tokens)
    }

    fn raw_construct_len(&self, construct: RawConstruct, rest: &str) -> Result<usize, LexError> {
        let opener = construct.opener().len();
        rest[opener..]
            .find(construct.closer())
            .map(|i| opener + i + construct.closer().len())
            .ok_or(LexError::Unterminated {
                construct,
                line: self.line,
                column: self.column,
                offset: self.pos,
            })
    }

    fn flush_text(&mut self) {
        if let Some(pending) = self.pending.take() {
            self.tokens.push(Token::new(
                TokenKind::Text,
                pending.line,
                pending.column,
                &self.input[pending.start..self.pos],
            ));
        }
    }

    /// Emit a token spanning `len` bytes at the current position.
    fn emit(&mut self, kind: TokenKind, len: usize) {
        self.flush_text();

        let raw = &self.input[self.pos..self.pos + len];
        self.tokens.push(Token::new(kind, self.line, self.column, raw));

        for c in raw.chars() {
            if c == '\n' {
                self.line += 1;
                self.column = 1;
            } else {
                self.column += 1;
            }
        }
        self.pos += len;
    }
}
