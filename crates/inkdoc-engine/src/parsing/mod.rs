pub mod blocks;
pub mod inline;

use std::borrow::Cow;

use blocks::{BlockBuilder, LineClassifier, RawBlock};

pub use blocks::Block;
pub use inline::{InlineRun, InlineStyle, StyleSet, parse_inline, parse_inline_with};

/// Parses a whole document into an ordered sequence of blocks.
///
/// Runs block segmentation once over the input, then resolves each
/// block's inline text. Every input is valid; an empty document yields an
/// empty sequence.
pub fn parse_document(input: &str) -> Vec<Block> {
    let normalized = normalize_line_endings(input);
    let classifier = LineClassifier;
    let mut builder = BlockBuilder::new();

    for line in normalized.split('\n') {
        builder.push(&classifier.classify(line));
    }

    builder.finish().into_iter().map(resolve_block).collect()
}

/// Resolves a segmented block's inline text with no inherited styles.
fn resolve_block(raw: RawBlock) -> Block {
    match raw {
        RawBlock::Heading { level, text } => Block::Heading {
            level,
            content: parse_inline(&text),
        },
        RawBlock::Paragraph { text } => Block::Paragraph {
            content: parse_inline(&text),
        },
    }
}

/// Canonicalizes `\r\n` and bare `\r` line terminators to `\n`.
///
/// Segmentation must never split the same construct differently across
/// line-break encodings, so this runs before any other processing.
fn normalize_line_endings(input: &str) -> Cow<'_, str> {
    if !input.contains('\r') {
        return Cow::Borrowed(input);
    }
    Cow::Owned(input.replace("\r\n", "\n").replace('\r', "\n"))
}
