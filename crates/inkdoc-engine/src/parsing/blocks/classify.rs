use super::kinds::{Heading, HeadingSig, Paragraph};

/// Classification of a single source line containing only local facts.
///
/// This is phase 1 of block segmentation: each line is classified
/// independently, without reference to surrounding lines.
#[derive(Debug, Clone)]
pub struct LineClass {
    /// Whether the line is blank (empty after trimming whitespace).
    pub is_blank: bool,
    /// Heading signature, if the line parses as a heading.
    pub heading: Option<HeadingSig>,
    /// Whether trailing spaces on this line force a hard break.
    pub hard_break: bool,
    /// Line text with trailing spaces stripped.
    pub text: String,
}

/// Classifies individual lines for the block segmentation phase.
///
/// Expects lines without terminators (the document is normalized and split
/// on `'\n'` before classification).
pub struct LineClassifier;

impl LineClassifier {
    /// Classifies a line into a [`LineClass`] of local facts.
    pub fn classify(&self, line: &str) -> LineClass {
        LineClass {
            is_blank: line.trim().is_empty(),
            heading: Heading::sig(line),
            hard_break: Paragraph::hard_break(line),
            text: line.trim_end_matches(' ').to_string(),
        }
    }
}
