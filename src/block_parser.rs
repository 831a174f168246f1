use crate::config::{Blocks, Config};
use crate::syntax::{BlockId, BlockKind, Document};
use crate::tokenizer::Token;

mod atx_headings;
mod blockquotes;
mod code_blocks;
mod horizontal_rules;
mod html_blocks;
mod indented_code;
mod paragraphs;
mod setext_headings;
pub(crate) mod utils;

fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// One block grammar. Dispatch walks [`Grammar::PRIORITY`] and the first
/// grammar whose `can_parse` holds wins.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Grammar {
    Blockquote,
    ThematicBreak,
    AtxHeading,
    SetextHeading,
    IndentedCode,
    FencedCode,
    HtmlBlock,
    Paragraph,
}

impl Grammar {
    pub const PRIORITY: [Grammar; 8] = [
        Grammar::Blockquote,
        Grammar::ThematicBreak,
        Grammar::AtxHeading,
        Grammar::SetextHeading,
        Grammar::IndentedCode,
        Grammar::FencedCode,
        Grammar::HtmlBlock,
        Grammar::Paragraph,
    ];

    fn enabled(self, blocks: &Blocks) -> bool {
        match self {
            Grammar::Blockquote => blocks.blockquotes,
            Grammar::ThematicBreak => blocks.thematic_breaks,
            Grammar::AtxHeading => blocks.atx_headings,
            Grammar::SetextHeading => blocks.setext_headings,
            Grammar::IndentedCode => blocks.indented_code,
            Grammar::FencedCode => blocks.fenced_code,
            Grammar::HtmlBlock => blocks.html_blocks,
            Grammar::Paragraph => true,
        }
    }

    /// Kind of the block this grammar appends.
    pub fn block_kind(self) -> BlockKind {
        match self {
            Grammar::Blockquote => BlockKind::Blockquote,
            Grammar::ThematicBreak => BlockKind::ThematicBreak,
            Grammar::AtxHeading => BlockKind::AtxHeading,
            Grammar::SetextHeading => BlockKind::SetextHeading,
            Grammar::IndentedCode => BlockKind::IndentedCode,
            Grammar::FencedCode => BlockKind::FencedCode,
            Grammar::HtmlBlock => BlockKind::Html,
            Grammar::Paragraph => BlockKind::Paragraph,
        }
    }

    fn can_interrupt(self, blocks: &Blocks, tokens: &[Token]) -> bool {
        match self {
            Grammar::Blockquote => blockquotes::can_interrupt(blocks, tokens),
            Grammar::ThematicBreak => horizontal_rules::can_interrupt(tokens),
            Grammar::AtxHeading => atx_headings::can_interrupt(blocks, tokens),
            Grammar::SetextHeading => setext_headings::can_interrupt(tokens),
            Grammar::IndentedCode => indented_code::can_interrupt(tokens),
            Grammar::FencedCode => code_blocks::can_interrupt(tokens),
            Grammar::HtmlBlock => html_blocks::can_interrupt(tokens),
            Grammar::Paragraph => paragraphs::can_interrupt(tokens),
        }
    }

    fn can_parse(self, tokens: &[Token]) -> bool {
        match self {
            Grammar::Blockquote => blockquotes::can_parse(tokens),
            Grammar::ThematicBreak => horizontal_rules::can_parse(tokens),
            Grammar::AtxHeading => atx_headings::can_parse(tokens),
            Grammar::SetextHeading => setext_headings::can_parse(tokens),
            Grammar::IndentedCode => indented_code::can_parse(tokens),
            Grammar::FencedCode => code_blocks::can_parse(tokens),
            Grammar::HtmlBlock => html_blocks::can_parse(tokens),
            Grammar::Paragraph => paragraphs::can_parse(tokens),
        }
    }

    fn parse(
        self,
        parser: &BlockParser,
        doc: &mut Document,
        parent: BlockId,
        tokens: &[Token],
    ) -> usize {
        match self {
            Grammar::Blockquote => blockquotes::parse(parser, doc, parent, tokens),
            Grammar::ThematicBreak => horizontal_rules::parse(doc, parent, tokens),
            Grammar::AtxHeading => atx_headings::parse(doc, parent, tokens),
            Grammar::SetextHeading => setext_headings::parse(doc, parent, tokens),
            Grammar::IndentedCode => indented_code::parse(doc, parent, tokens),
            Grammar::FencedCode => code_blocks::parse(doc, parent, tokens),
            Grammar::HtmlBlock => html_blocks::parse(doc, parent, tokens),
            Grammar::Paragraph => paragraphs::parse(parser, doc, parent, tokens),
        }
    }
}

/// Drives block recognition over a token stream.
pub struct BlockParser {
    grammars: Vec<Grammar>,
    blocks: Blocks,
}

impl BlockParser {
    pub fn new(config: &Config) -> Self {
        let grammars: Vec<Grammar> = Grammar::PRIORITY
            .into_iter()
            .filter(|g| g.enabled(&config.blocks))
            .collect();
        log::debug!("Enabled block grammars: {:?}", grammars);
        Self {
            grammars,
            blocks: config.blocks,
        }
    }

    /// Enabled grammars in priority order.
    pub fn grammars(&self) -> &[Grammar] {
        &self.grammars
    }

    pub fn parse(&self, tokens: &[Token]) -> Document {
        #[cfg(debug_assertions)]
        {
            init_logger();
        }

        let mut doc = Document::new();
        self.parse_blocks(&mut doc, BlockId::ROOT, tokens);
        log::debug!("Parsed {} blocks from {} tokens", doc.len() - 1, tokens.len());
        doc
    }

    /// Parse `tokens` into children of `parent`, skipping blank lines
    /// between blocks.
    pub fn parse_blocks(&self, doc: &mut Document, parent: BlockId, tokens: &[Token]) {
        debug_assert!(doc.block(parent).kind().is_container());
        let mut pos = 0;
        while pos < tokens.len() {
            if let Some(blank) = utils::is_blank_line(tokens, pos) {
                pos += blank;
                continue;
            }
            pos += self.parse_block(doc, parent, &tokens[pos..]);
        }
    }

    /// Append exactly one block to `parent` and return how many tokens it
    /// consumed.
    ///
    /// # Panics
    ///
    /// If the selected grammar consumes nothing, which would stall the loop.
    pub fn parse_block(&self, doc: &mut Document, parent: BlockId, tokens: &[Token]) -> usize {
        let grammar = self
            .grammars
            .iter()
            .copied()
            .find(|g| g.can_parse(tokens))
            .unwrap_or(Grammar::Paragraph);

        if let Some(first) = tokens.first() {
            log::debug!(
                "{:?} at {}:{} (parent {:?})",
                grammar,
                first.line,
                first.column,
                doc.block(parent).kind()
            );
        }

        let consumed = grammar.parse(self, doc, parent, tokens);
        assert!(
            consumed > 0,
            "{grammar:?} consumed no tokens out of {}",
            tokens.len()
        );
        consumed
    }

    /// First grammar that may end an open paragraph at the start of `tokens`.
    pub fn can_interrupt(&self, context: BlockKind, tokens: &[Token]) -> Option<Grammar> {
        if tokens.is_empty() {
            return None;
        }
        let grammar = self
            .grammars
            .iter()
            .copied()
            .find(|g| g.can_interrupt(&self.blocks, tokens));
        if let Some(g) = grammar {
            log::trace!("{:?} interrupts paragraph in {:?}", g, context);
        }
        grammar
    }
}

#[cfg(test)]
mod tests {
    mod blockquotes;
    mod code_blocks;
    mod headings;
    mod helpers;
    mod html_blocks;
    mod interruption;
    mod losslessness;
    mod paragraphs;
}
