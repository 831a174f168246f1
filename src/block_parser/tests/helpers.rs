use crate::block_parser::BlockParser;
use crate::config::Config;
use crate::syntax::{Block, BlockKind, Document};
use crate::tokenizer::tokenize;

pub fn parse_blocks(input: &str) -> Document {
    parse_blocks_with(input, &Config::default())
}

pub fn parse_blocks_with(input: &str, config: &Config) -> Document {
    let tokens = tokenize(input, config).unwrap();
    BlockParser::new(config).parse(&tokens)
}

pub fn find_first(doc: &Document, kind: BlockKind) -> Option<Block<'_>> {
    doc.blocks().find(|b| b.kind() == kind)
}

pub fn find_all(doc: &Document, kind: BlockKind) -> Vec<Block<'_>> {
    doc.blocks().filter(|b| b.kind() == kind).collect()
}

pub fn get_blocks(doc: &Document) -> Vec<Block<'_>> {
    doc.root().children().collect()
}

pub fn assert_block_kinds(input: &str, expected: &[BlockKind]) {
    let doc = parse_blocks(input);
    let actual: Vec<_> = get_blocks(&doc).iter().map(|b| b.kind()).collect();
    assert_eq!(
        actual, expected,
        "Block kinds did not match for input:\n{}",
        input
    );
}

/// Inline text of the first block of the kind
pub fn get_text(doc: &Document, kind: BlockKind) -> Option<String> {
    find_first(doc, kind).map(|b| b.inline().to_string())
}

/// Count direct children of a specific kind
pub fn count_children(block: Block<'_>, kind: BlockKind) -> usize {
    block.children().filter(|b| b.kind() == kind).count()
}
