//! Block kinds and the typed metadata attached to each block.

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum BlockKind {
    Root,
    Blockquote,
    ThematicBreak,
    AtxHeading,
    SetextHeading,
    IndentedCode,
    FencedCode,
    Html,
    Paragraph,
}

impl BlockKind {
    /// Containers hold child blocks; leaves hold inline text.
    pub fn is_container(self) -> bool {
        matches!(self, Self::Root | Self::Blockquote)
    }
}

/// How an HTML block was opened.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum HtmlKind {
    Comment,
    Cdata,
    ProcessingInstruction,
    OpenTag,
    CloseTag,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub enum BlockMeta {
    #[default]
    None,
    Heading {
        level: u8,
    },
    FencedCode {
        /// Text after the opening fence, trimmed, escapes resolved.
        info: String,
        fence: char,
        fence_length: usize,
    },
    Html {
        kind: HtmlKind,
    },
    ThematicBreak {
        marker: char,
    },
}

impl BlockMeta {
    pub fn heading_level(&self) -> Option<u8> {
        match self {
            Self::Heading { level } => Some(*level),
            _ => None,
        }
    }

    /// First word of a fenced code block's info string.
    pub fn language(&self) -> Option<&str> {
        match self {
            Self::FencedCode { info, .. } => info.split_whitespace().next(),
            _ => None,
        }
    }
}
