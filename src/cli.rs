use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "mdblocks")]
#[command(author, version)]
#[command(about = "Inspect the block structure of CommonMark documents")]
#[command(
    long_about = "mdblocks tokenizes a CommonMark document, recognizes its block structure \
    (blockquotes, thematic breaks, headings, code blocks, HTML blocks and paragraphs) and \
    prints the tokens, the block tree, or rendered HTML."
)]
#[command(after_help = "\
EXAMPLES:

    # Show the block tree of a file
    mdblocks parse document.md

    # Render from stdin
    cat document.md | mdblocks render

    # Dump the token stream
    mdblocks tokens document.md

CONFIGURATION:

mdblocks looks for configuration files in this order:
  1. Explicit --config path
  2. mdblocks.toml or .mdblocks.toml in the input's directory and its parents
  3. ~/.config/mdblocks/config.toml (XDG)
  4. Built-in defaults

Example .mdblocks.toml:

    flavor = \"pandoc\"
    tab_width = 4
    raw_html = true

    [blocks]
    html_blocks = false")]
#[command(arg_required_else_help = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Path to config file
    #[arg(long, global = true, env = "MDBLOCKS_CONFIG")]
    #[arg(help = "Path to configuration file")]
    #[arg(
        long_help = "Path to a custom configuration file. If not specified, mdblocks will \
        search for .mdblocks.toml or mdblocks.toml next to the input and in its parents, \
        then fall back to ~/.config/mdblocks/config.toml."
    )]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Print the token stream, one token per line
    #[command(after_help = "\
Each line shows LINE:COLUMN, the token kind and the raw text:

    1:1 Hash \"#\"
    1:2 Whitespace \" \"
    1:3 Text \"Heading\"")]
    Tokens {
        /// Input file (stdin if not provided)
        #[arg(help = "Input file path")]
        file: Option<PathBuf>,
    },
    /// Parse and display the block tree
    #[command(
        long_about = "Parse a document and display its block tree, one block per line, \
        indented by nesting depth. Use --json for a machine-readable tree."
    )]
    Parse {
        /// Input file (stdin if not provided)
        #[arg(help = "Input file path")]
        file: Option<PathBuf>,

        /// Print the tree as JSON
        #[arg(long)]
        json: bool,
    },
    /// Render the document to HTML
    Render {
        /// Input file (stdin if not provided)
        #[arg(help = "Input file path")]
        file: Option<PathBuf>,
    },
}
