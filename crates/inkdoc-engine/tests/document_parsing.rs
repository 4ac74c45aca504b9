//! Document-level segmentation behavior: block ordering, heading
//! recognition, paragraph joining, and the serialized token stream.

use inkdoc_engine::{Block, InlineRun, InlineStyle, StyleSet, parse_document};
use pretty_assertions::assert_eq;
use rstest::rstest;

fn paragraph(runs: Vec<InlineRun>) -> Block {
    Block::Paragraph { content: runs }
}

fn heading(level: u8, runs: Vec<InlineRun>) -> Block {
    Block::Heading {
        level,
        content: runs,
    }
}

#[test]
fn two_paragraphs_in_document_order() {
    let blocks = parse_document("first paragraph\n\nsecond paragraph\n");
    assert_eq!(
        blocks,
        vec![
            paragraph(vec![InlineRun::plain("first paragraph")]),
            paragraph(vec![InlineRun::plain("second paragraph")]),
        ]
    );
}

#[test]
fn heading_line_produces_heading_block() {
    let blocks = parse_document("## Title");
    assert_eq!(blocks, vec![heading(2, vec![InlineRun::plain("Title")])]);
    assert_eq!(blocks[0].content(), &[InlineRun::plain("Title")]);
}

#[rstest]
#[case("", 0)]
#[case("\n\n\n", 0)]
#[case("   \n\t\n", 0)]
#[case("one", 1)]
#[case("one\n\ntwo\n\nthree", 3)]
fn block_counts(#[case] document: &str, #[case] expected: usize) {
    assert_eq!(parse_document(document).len(), expected);
}

#[test]
fn soft_wrapped_lines_collapse_to_spaces() {
    let blocks = parse_document("wrapped\nacross\nlines");
    assert_eq!(
        blocks,
        vec![paragraph(vec![InlineRun::plain("wrapped across lines")])]
    );
}

#[test]
fn hard_break_survives_in_joined_text() {
    let blocks = parse_document("roses are red  \nviolets are blue");
    assert_eq!(
        blocks,
        vec![paragraph(vec![InlineRun::plain(
            "roses are red\nviolets are blue"
        )])]
    );
}

#[test]
fn hard_break_on_final_line_is_ignored() {
    let blocks = parse_document("text  \n\nnext");
    assert_eq!(
        blocks,
        vec![
            paragraph(vec![InlineRun::plain("text")]),
            paragraph(vec![InlineRun::plain("next")]),
        ]
    );
}

#[test]
fn heading_interrupts_paragraph_without_blank_line() {
    let blocks = parse_document("body text\n# Title\nmore body");
    assert_eq!(
        blocks,
        vec![
            paragraph(vec![InlineRun::plain("body text")]),
            heading(1, vec![InlineRun::plain("Title")]),
            paragraph(vec![InlineRun::plain("more body")]),
        ]
    );
}

#[test]
fn overlong_marker_run_falls_back_to_paragraph() {
    let blocks = parse_document("####### seven hashes");
    assert_eq!(
        blocks,
        vec![paragraph(vec![InlineRun::plain("####### seven hashes")])]
    );
}

#[test]
fn heading_with_closing_run() {
    assert_eq!(
        parse_document("### Chapter ###"),
        vec![heading(3, vec![InlineRun::plain("Chapter")])]
    );
}

#[test]
fn paragraph_markup_is_resolved_after_joining() {
    // The bold span opens on one source line and closes on the next; the
    // join must happen before inline resolution for it to match.
    let blocks = parse_document("some **bold\ntext** here");
    assert_eq!(
        blocks,
        vec![paragraph(vec![
            InlineRun::plain("some "),
            InlineRun::new("bold text", StyleSet::of(InlineStyle::Bold)),
            InlineRun::plain(" here"),
        ])]
    );
}

#[test]
fn mixed_line_endings_parse_identically() {
    let unix = parse_document("# H\n\npara one\n\npara two\n");
    let windows = parse_document("# H\r\n\r\npara one\r\n\r\npara two\r\n");
    let legacy_mac = parse_document("# H\r\rpara one\r\rpara two\r");
    assert_eq!(unix, windows);
    assert_eq!(unix, legacy_mac);
}

#[test]
fn small_document_token_stream() {
    let blocks = parse_document("# Doc\n\nHello **bold** world");
    insta::assert_debug_snapshot!(blocks, @r#"
    [
        Heading {
            level: 1,
            content: [
                InlineRun {
                    content: "Doc",
                    styles: StyleSet(),
                },
            ],
        },
        Paragraph {
            content: [
                InlineRun {
                    content: "Hello ",
                    styles: StyleSet(),
                },
                InlineRun {
                    content: "bold",
                    styles: StyleSet(Bold),
                },
                InlineRun {
                    content: " world",
                    styles: StyleSet(),
                },
            ],
        },
    ]
    "#);
}

#[test]
fn token_stream_serializes_for_external_renderers() {
    let blocks = parse_document("## Title\n\nplain *em*");
    let value = serde_json::to_value(&blocks).unwrap();
    assert_eq!(
        value,
        serde_json::json!([
            {
                "Heading": {
                    "level": 2,
                    "content": [
                        { "content": "Title", "styles": [] }
                    ]
                }
            },
            {
                "Paragraph": {
                    "content": [
                        { "content": "plain ", "styles": [] },
                        { "content": "em", "styles": ["Italic"] }
                    ]
                }
            }
        ])
    );
}

#[test]
fn token_stream_round_trips_through_serde() {
    let blocks = parse_document("# A *b* c\n\nd `e` **f**");
    let json = serde_json::to_string(&blocks).unwrap();
    let back: Vec<Block> = serde_json::from_str(&json).unwrap();
    assert_eq!(back, blocks);
}

#[test]
fn identical_input_yields_identical_output() {
    let document = "# H\n\none **two** `three`  \nfour\n";
    assert_eq!(parse_document(document), parse_document(document));
}
