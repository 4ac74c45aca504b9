use std::fmt;

use serde::de::{SeqAccess, Visitor};
use serde::ser::SerializeSeq;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// A single presentation attribute attached to an inline run.
///
/// Renderers map styles to presentation (font weight, slant, monospacing);
/// the engine treats them as opaque tags that combine via set union.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum InlineStyle {
    Bold,
    Italic,
    Code,
}

impl InlineStyle {
    /// All styles, in bit order.
    pub const ALL: [InlineStyle; 3] = [InlineStyle::Bold, InlineStyle::Italic, InlineStyle::Code];

    const fn bit(self) -> u8 {
        match self {
            InlineStyle::Bold => 1 << 0,
            InlineStyle::Italic => 1 << 1,
            InlineStyle::Code => 1 << 2,
        }
    }
}

/// A set of [`InlineStyle`]s backed by a bit field.
///
/// Style sets are tiny (at most [`InlineStyle::ALL`]), so union and
/// membership are single integer operations and the set is `Copy`.
/// Serializes as a sequence of styles so consumers never see the bit layout.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct StyleSet(u8);

impl StyleSet {
    /// The empty set (plain text).
    pub const EMPTY: StyleSet = StyleSet(0);

    /// A set containing exactly `style`.
    pub const fn of(style: InlineStyle) -> StyleSet {
        StyleSet(style.bit())
    }

    /// This set plus `style`.
    pub const fn with(self, style: InlineStyle) -> StyleSet {
        StyleSet(self.0 | style.bit())
    }

    /// Set union.
    pub const fn union(self, other: StyleSet) -> StyleSet {
        StyleSet(self.0 | other.0)
    }

    /// Whether `style` is a member.
    pub const fn contains(self, style: InlineStyle) -> bool {
        self.0 & style.bit() != 0
    }

    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Iterates members in [`InlineStyle::ALL`] order.
    pub fn iter(self) -> impl Iterator<Item = InlineStyle> {
        InlineStyle::ALL.into_iter().filter(move |s| self.contains(*s))
    }
}

impl From<InlineStyle> for StyleSet {
    fn from(style: InlineStyle) -> StyleSet {
        StyleSet::of(style)
    }
}

impl FromIterator<InlineStyle> for StyleSet {
    fn from_iter<I: IntoIterator<Item = InlineStyle>>(iter: I) -> StyleSet {
        iter.into_iter().fold(StyleSet::EMPTY, StyleSet::with)
    }
}

impl fmt::Debug for StyleSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "StyleSet(")?;
        for (i, style) in self.iter().enumerate() {
            if i > 0 {
                write!(f, " | ")?;
            }
            write!(f, "{style:?}")?;
        }
        write!(f, ")")
    }
}

impl Serialize for StyleSet {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut seq = serializer.serialize_seq(Some(self.iter().count()))?;
        for style in self.iter() {
            seq.serialize_element(&style)?;
        }
        seq.end()
    }
}

impl<'de> Deserialize<'de> for StyleSet {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<StyleSet, D::Error> {
        struct SetVisitor;

        impl<'de> Visitor<'de> for SetVisitor {
            type Value = StyleSet;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a sequence of inline styles")
            }

            fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> Result<StyleSet, A::Error> {
                let mut set = StyleSet::EMPTY;
                while let Some(style) = seq.next_element::<InlineStyle>()? {
                    set = set.with(style);
                }
                Ok(set)
            }
        }

        deserializer.deserialize_seq(SetVisitor)
    }
}

/// A span of resolved text carrying a style combination.
///
/// Runs are immutable once produced. Zero-length content is valid and
/// meaningful: `****` resolves to an empty run styled Bold, and renderers
/// may still react to it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InlineRun {
    pub content: String,
    pub styles: StyleSet,
}

impl InlineRun {
    pub fn new(content: impl Into<String>, styles: StyleSet) -> InlineRun {
        InlineRun {
            content: content.into(),
            styles,
        }
    }

    /// A run with no styles.
    pub fn plain(content: impl Into<String>) -> InlineRun {
        InlineRun::new(content, StyleSet::EMPTY)
    }
}
