use super::types::{InlineStyle, StyleSet};

/// A delimiter marker and the styles its span introduces.
///
/// `literal` marks raw zones: the interior of a matched literal span is
/// emitted verbatim, never recursively resolved.
#[derive(Debug, Clone, Copy)]
pub struct Delimiter {
    /// The literal character run that opens and closes the span.
    pub marker: &'static str,
    /// Styles added to everything inside the span.
    pub styles: StyleSet,
    /// Whether the span interior bypasses recursive resolution.
    pub literal: bool,
}

/// The delimiter table, in match priority order.
///
/// Markup is ambiguous at the character level: `**` is a prefix of `***`,
/// so a longer marker must always be attempted before the shorter markers
/// it contains. Resolution iterates this table in order and takes the
/// first marker that matches and closes.
pub static DELIMITERS: [Delimiter; 4] = [
    Delimiter {
        marker: "***",
        styles: StyleSet::of(InlineStyle::Bold).with(InlineStyle::Italic),
        literal: false,
    },
    Delimiter {
        marker: "**",
        styles: StyleSet::of(InlineStyle::Bold),
        literal: false,
    },
    Delimiter {
        marker: "*",
        styles: StyleSet::of(InlineStyle::Italic),
        literal: false,
    },
    Delimiter {
        marker: "`",
        styles: StyleSet::of(InlineStyle::Code),
        literal: true,
    },
];
