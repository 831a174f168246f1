use super::helpers::{assert_block_kinds, find_first, get_text, parse_blocks, parse_blocks_with};
use crate::config::ConfigBuilder;
use crate::syntax::{BlockKind, BlockMeta, HtmlKind};

fn html_kind(input: &str) -> Option<HtmlKind> {
    let doc = parse_blocks(input);
    match find_first(&doc, BlockKind::Html)?.meta() {
        BlockMeta::Html { kind } => Some(*kind),
        _ => None,
    }
}

#[test]
fn html_openers() {
    assert_eq!(html_kind("<div>\n"), Some(HtmlKind::OpenTag));
    assert_eq!(html_kind("<TABLE class=\"x\">\n"), Some(HtmlKind::OpenTag));
    assert_eq!(html_kind("<hr/>\n"), Some(HtmlKind::OpenTag));
    assert_eq!(html_kind("</p>\n"), Some(HtmlKind::CloseTag));
    assert_eq!(html_kind("<!-- note -->\n"), Some(HtmlKind::Comment));
    assert_eq!(html_kind("<![CDATA[ x ]]>\n"), Some(HtmlKind::Cdata));
    assert_eq!(html_kind("<?xml version=\"1.0\"?>\n"), Some(HtmlKind::ProcessingInstruction));
}

#[test]
fn unknown_tags_are_paragraphs() {
    assert_block_kinds("<span>text</span>\n", &[BlockKind::Paragraph]);
    assert_block_kinds("<divx>\n", &[BlockKind::Paragraph]);
    assert_block_kinds("<3 html\n", &[BlockKind::Paragraph]);
}

#[test]
fn html_block_ends_before_blank_line() {
    let doc = parse_blocks("<div>\n*a*\n</div>\n\nafter\n");
    assert_eq!(
        get_text(&doc, BlockKind::Html).as_deref(),
        Some("<div>\n*a*\n</div>")
    );
    assert_eq!(get_text(&doc, BlockKind::Paragraph).as_deref(), Some("after"));
}

#[test]
fn html_block_runs_to_end_of_input() {
    let doc = parse_blocks("<table>\n<tr>");
    assert_eq!(get_text(&doc, BlockKind::Html).as_deref(), Some("<table>\n<tr>"));
}

#[test]
fn html_block_keeps_indentation() {
    let doc = parse_blocks("  <p>\n");
    assert_eq!(get_text(&doc, BlockKind::Html).as_deref(), Some("  <p>"));
}

#[test]
fn html_block_interrupts_paragraph() {
    assert_block_kinds("text\n<div>\n", &[BlockKind::Paragraph, BlockKind::Html]);
}

#[test]
fn raw_tokens_make_multiline_comment_one_block() {
    let config = ConfigBuilder::default().raw_html(true).build();
    let doc = parse_blocks_with("<!-- a\n\nb -->\n\ntext\n", &config);
    let html = find_first(&doc, BlockKind::Html).unwrap();
    assert_eq!(html.inline(), "<!-- a\n\nb -->");
    assert_eq!(html.meta(), &BlockMeta::Html { kind: HtmlKind::Comment });
    assert_eq!(doc.root().children().count(), 2);
}

#[test]
fn without_raw_tokens_comment_splits_at_blank_line() {
    let doc = parse_blocks("<!-- a\n\nb -->\n");
    assert_block_kinds("<!-- a\n\nb -->\n", &[BlockKind::Html, BlockKind::Paragraph]);
    assert_eq!(get_text(&doc, BlockKind::Html).as_deref(), Some("<!-- a"));
}
