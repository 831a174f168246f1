//! HTML rendering of a parsed [`Document`].

use crate::syntax::{Block, BlockKind, Document};

/// Render the whole document. Blocks are separated by a newline and the
/// output ends with one unless it is empty.
pub fn render(doc: &Document) -> String {
    let mut out = render_children(doc.root());
    if !out.is_empty() {
        out.push('\n');
    }
    out
}

fn render_children(block: Block<'_>) -> String {
    block
        .children()
        .map(render_block)
        .collect::<Vec<_>>()
        .join("\n")
}

fn render_block(block: Block<'_>) -> String {
    match block.kind() {
        BlockKind::Root => render_children(block),
        BlockKind::Blockquote => {
            let inner = render_children(block);
            if inner.is_empty() {
                "<blockquote>\n</blockquote>".to_string()
            } else {
                format!("<blockquote>\n{inner}\n</blockquote>")
            }
        }
        BlockKind::ThematicBreak => "<hr />".to_string(),
        BlockKind::AtxHeading | BlockKind::SetextHeading => {
            let level = block.meta().heading_level().unwrap_or(1);
            format!("<h{level}>{}</h{level}>", escape_html(block.inline()))
        }
        BlockKind::IndentedCode | BlockKind::FencedCode => render_code(block),
        BlockKind::Html => block.inline().to_string(),
        BlockKind::Paragraph => format!("<p>{}</p>", escape_html(block.inline())),
    }
}

fn render_code(block: Block<'_>) -> String {
    let body = escape_html(block.inline());
    match block.meta().language() {
        Some(lang) => format!(
            "<pre><code class=\"language-{}\">{body}</code></pre>",
            escape_html(lang)
        ),
        None => format!("<pre><code>{body}</code></pre>"),
    }
}

/// Escape the characters that are significant in HTML text and attributes.
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(c),
        }
    }
    out
}
