use serde::{Deserialize, Serialize};

use crate::parsing::inline::InlineRun;

/// A block-level node carrying fully resolved inline content.
///
/// Blocks are produced once by the parser and never mutated; the sequence
/// order is document order and rendering consumes it sequentially.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Block {
    /// A heading line. `level` is the marker run length, always 1..=6.
    Heading { level: u8, content: Vec<InlineRun> },
    /// A paragraph of joined source lines.
    Paragraph { content: Vec<InlineRun> },
}

impl Block {
    /// The resolved inline runs of either variant.
    pub fn content(&self) -> &[InlineRun] {
        match self {
            Block::Heading { content, .. } => content,
            Block::Paragraph { content } => content,
        }
    }
}

/// A segmented block whose inline text has not been resolved yet.
///
/// Intermediate between the block builder and the inline resolver; never
/// part of the public token stream.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RawBlock {
    Heading { level: u8, text: String },
    Paragraph { text: String },
}
