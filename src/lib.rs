pub mod block_parser;
pub mod config;
pub mod renderer;
pub mod syntax;
pub mod tokenizer;

pub use block_parser::{BlockParser, Grammar};
pub use config::Config;
pub use config::ConfigBuilder;
pub use config::Flavor;
pub use renderer::render;
pub use syntax::{Block, BlockId, BlockKind, BlockMeta, Document};
pub use tokenizer::{LexError, Token, TokenKind, tokenize};

fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Parses a document into its block tree.
///
/// Line endings are normalized and tabs expanded before tokenizing.
///
/// # Examples
///
/// ```rust
/// use mdblocks::{BlockKind, parse};
///
/// let doc = parse("# Heading\n\nSome text.\n", None).unwrap();
/// let kinds: Vec<_> = doc.root().children().map(|b| b.kind()).collect();
/// assert_eq!(kinds, [BlockKind::AtxHeading, BlockKind::Paragraph]);
/// ```
///
/// # Arguments
///
/// * `input` - The Markdown source
/// * `config` - Optional configuration (defaults to default config)
///
/// # Errors
///
/// Returns a [`LexError`] when `raw_html` is enabled and a raw construct
/// is never closed.
pub fn parse(input: &str, config: Option<Config>) -> Result<Document, LexError> {
    #[cfg(debug_assertions)]
    {
        init_logger();
    }

    let config = config.unwrap_or_default();
    let tokens = tokenize(input, &config)?;
    Ok(BlockParser::new(&config).parse(&tokens))
}

/// Parses and renders `input` to HTML in one step.
pub fn to_html(input: &str, config: Option<Config>) -> Result<String, LexError> {
    parse(input, config).map(|doc| render(&doc))
}
