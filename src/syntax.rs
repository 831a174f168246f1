//! Document model: an arena of blocks addressed by [`BlockId`].
//!
//! Nodes are only ever appended, so ids stay valid for the lifetime of the
//! document. Tree order comes from the child lists, not from arena order.

use std::fmt;

use serde::ser::SerializeStruct;
use serde::{Serialize, Serializer};

use crate::tokenizer::Token;

mod kind;

pub use kind::{BlockKind, BlockMeta, HtmlKind};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct BlockId(usize);

impl BlockId {
    pub const ROOT: BlockId = BlockId(0);
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct BlockNode {
    kind: BlockKind,
    parent: Option<BlockId>,
    tokens: Vec<Token>,
    children: Vec<BlockId>,
    inline: String,
    meta: BlockMeta,
}

/// Owns every block of one parse.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    nodes: Vec<BlockNode>,
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}

impl Document {
    pub fn new() -> Self {
        Self {
            nodes: vec![BlockNode {
                kind: BlockKind::Root,
                parent: None,
                tokens: Vec::new(),
                children: Vec::new(),
                inline: String::new(),
                meta: BlockMeta::None,
            }],
        }
    }

    pub fn root(&self) -> Block<'_> {
        self.block(BlockId::ROOT)
    }

    pub fn block(&self, id: BlockId) -> Block<'_> {
        Block { doc: self, id }
    }

    /// Number of blocks, root included.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.len() == 1
    }

    /// All blocks in arena (creation) order, root first.
    pub fn blocks(&self) -> impl Iterator<Item = Block<'_>> {
        (0..self.nodes.len()).map(|i| self.block(BlockId(i)))
    }

    /// Append a new block as the last child of `parent`.
    pub fn append(&mut self, parent: BlockId, kind: BlockKind, tokens: Vec<Token>) -> BlockId {
        let id = BlockId(self.nodes.len());
        self.nodes.push(BlockNode {
            kind,
            parent: Some(parent),
            tokens,
            children: Vec::new(),
            inline: String::new(),
            meta: BlockMeta::None,
        });
        self.nodes[parent.0].children.push(id);
        id
    }

    pub fn set_inline(&mut self, id: BlockId, inline: String) {
        self.nodes[id.0].inline = inline;
    }

    pub fn set_meta(&mut self, id: BlockId, meta: BlockMeta) {
        self.nodes[id.0].meta = meta;
    }

    fn node(&self, id: BlockId) -> &BlockNode {
        &self.nodes[id.0]
    }
}

/// Borrowed view of one block inside its [`Document`].
#[derive(Clone, Copy)]
pub struct Block<'a> {
    doc: &'a Document,
    id: BlockId,
}

impl<'a> Block<'a> {
    pub fn id(&self) -> BlockId {
        self.id
    }

    pub fn kind(&self) -> BlockKind {
        self.doc.node(self.id).kind
    }

    pub fn parent(&self) -> Option<Block<'a>> {
        self.doc.node(self.id).parent.map(|id| self.doc.block(id))
    }

    pub fn root(&self) -> Block<'a> {
        self.doc.root()
    }

    pub fn children(&self) -> impl Iterator<Item = Block<'a>> + 'a {
        let doc = self.doc;
        doc.node(self.id).children.iter().map(move |&id| doc.block(id))
    }

    /// Every block below this one, in document order.
    pub fn descendants(&self) -> Vec<Block<'a>> {
        let mut out = Vec::new();
        let mut stack: Vec<Block<'a>> = self.children().collect();
        stack.reverse();
        while let Some(block) = stack.pop() {
            out.push(block);
            let mut children: Vec<_> = block.children().collect();
            children.reverse();
            stack.extend(children);
        }
        out
    }

    pub fn inline(&self) -> &'a str {
        &self.doc.node(self.id).inline
    }

    pub fn meta(&self) -> &'a BlockMeta {
        &self.doc.node(self.id).meta
    }

    pub fn tokens(&self) -> &'a [Token] {
        &self.doc.node(self.id).tokens
    }

    /// Nesting depth, zero for the root.
    pub fn depth(&self) -> usize {
        let mut depth = 0;
        let mut current = self.parent();
        while let Some(block) = current {
            depth += 1;
            current = block.parent();
        }
        depth
    }
}

impl fmt::Debug for Block<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Block")
            .field("id", &self.id)
            .field("kind", &self.kind())
            .field("inline", &self.inline())
            .finish()
    }
}

impl Serialize for Block<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let children: Vec<Block<'_>> = self.children().collect();
        let mut state = serializer.serialize_struct("Block", 4)?;
        state.serialize_field("kind", &self.kind())?;
        state.serialize_field("meta", self.meta())?;
        state.serialize_field("inline", self.inline())?;
        state.serialize_field("children", &children)?;
        state.end()
    }
}

impl Serialize for Document {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.root().serialize(serializer)
    }
}

/// Indented outline, one block per line.
impl fmt::Display for Document {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for block in self.root().descendants() {
            write!(f, "{}{:?}", "  ".repeat(block.depth() - 1), block.kind())?;
            match block.meta() {
                BlockMeta::None => {}
                BlockMeta::Heading { level } => write!(f, " level={level}")?,
                BlockMeta::FencedCode {
                    info,
                    fence,
                    fence_length,
                } => write!(
                    f,
                    " fence={} info={info:?}",
                    fence.to_string().repeat(*fence_length)
                )?,
                BlockMeta::Html { kind } => write!(f, " html={kind:?}")?,
                BlockMeta::ThematicBreak { marker } => write!(f, " marker={marker:?}")?,
            }
            if !block.inline().is_empty() {
                write!(f, " {:?}", block.inline())?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
