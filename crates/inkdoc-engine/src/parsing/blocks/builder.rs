use super::{classify::LineClass, kinds::Paragraph, types::RawBlock};

/// A paragraph line waiting to be joined, with its break behavior.
#[derive(Debug, Clone)]
struct PendingLine {
    text: String,
    hard_break: bool,
}

/// Streaming block assembler.
///
/// Phase 2 of block segmentation: consumes classified lines in document
/// order, accumulating consecutive non-blank lines into a pending
/// paragraph and flushing it on blank lines, heading lines, and EOF.
pub struct BlockBuilder {
    pending: Vec<PendingLine>,
    out: Vec<RawBlock>,
}

impl BlockBuilder {
    pub fn new() -> Self {
        Self {
            pending: vec![],
            out: vec![],
        }
    }

    pub fn push(&mut self, c: &LineClass) {
        if c.is_blank {
            self.flush_paragraph();
            return;
        }

        if let Some(sig) = &c.heading {
            // Headings are single-line and close any open paragraph.
            self.flush_paragraph();
            self.out.push(RawBlock::Heading {
                level: sig.level,
                text: sig.text.clone(),
            });
            return;
        }

        self.pending.push(PendingLine {
            text: c.text.clone(),
            hard_break: c.hard_break,
        });
    }

    pub fn finish(mut self) -> Vec<RawBlock> {
        // EOF flush
        self.flush_paragraph();
        self.out
    }

    /// Joins pending lines into one paragraph string.
    ///
    /// Every line except the last contributes its separator: a preserved
    /// newline after a hard-break line, a single space otherwise (soft
    /// wrap collapse). A paragraph that trims to nothing emits no block.
    fn flush_paragraph(&mut self) {
        if self.pending.is_empty() {
            return;
        }

        let last = self.pending.len() - 1;
        let mut joined = String::new();
        for (i, line) in self.pending.drain(..).enumerate() {
            joined.push_str(&line.text);
            if i < last {
                joined.push(if line.hard_break {
                    Paragraph::HARD_BREAK
                } else {
                    Paragraph::SOFT_JOIN
                });
            }
        }

        let joined = joined.trim();
        if !joined.is_empty() {
            self.out.push(RawBlock::Paragraph {
                text: joined.to_string(),
            });
        }
    }
}

impl Default for BlockBuilder {
    fn default() -> Self {
        Self::new()
    }
}
