/// Paragraph block type with owned joining rules.
///
/// Paragraphs are the default block when no heading signature matches.
/// Consecutive non-blank lines accumulate into one paragraph and are
/// joined into a single string before inline resolution.
pub struct Paragraph;

impl Paragraph {
    /// Trailing spaces on a source line required to force a hard break.
    pub const HARD_BREAK_SPACES: usize = 2;
    /// Separator preserved in joined text for a hard break; renderers
    /// honor it as a forced line break.
    pub const HARD_BREAK: char = '\n';
    /// Separator for soft-wrapped lines.
    pub const SOFT_JOIN: char = ' ';

    /// Whether `line` ends with enough trailing spaces to force a hard
    /// break when joined with the following line.
    ///
    /// Only space characters count; tabs never produce hard breaks.
    pub fn hard_break(line: &str) -> bool {
        line.len() - line.trim_end_matches(' ').len() >= Self::HARD_BREAK_SPACES
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn two_trailing_spaces_force_a_break() {
        assert!(Paragraph::hard_break("line  "));
        assert!(Paragraph::hard_break("line    "));
    }

    #[test]
    fn fewer_than_two_spaces_do_not() {
        assert!(!Paragraph::hard_break("line"));
        assert!(!Paragraph::hard_break("line "));
    }

    #[test]
    fn tabs_do_not_count() {
        assert!(!Paragraph::hard_break("line\t\t"));
        assert!(!Paragraph::hard_break("line \t"));
    }

    #[test]
    fn interior_spaces_are_irrelevant() {
        assert!(!Paragraph::hard_break("a  b"));
    }
}
