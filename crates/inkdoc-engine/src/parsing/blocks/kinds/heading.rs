/// Heading block type with owned marker constants.
///
/// Headings are always single-line; they never absorb following lines.
pub struct Heading;

/// The local facts of a recognized heading line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeadingSig {
    /// Marker run length, 1..=6.
    pub level: u8,
    /// Title text, trimmed, with any closing marker run stripped.
    pub text: String,
}

impl Heading {
    /// The hash character that marks heading lines.
    pub const MARKER: u8 = b'#';
    /// Marker runs longer than this reject the line back to paragraph text.
    pub const MAX_LEVEL: usize = 6;

    /// Recognizes a heading line.
    ///
    /// A line is a heading iff it starts with 1..=6 `#` followed by
    /// end-of-line, a space, or a tab. A trailing `#` run is stripped when
    /// it is preceded by a space or tab, or when it is the whole remainder
    /// (`### ###` is an empty level-3 heading).
    pub fn sig(line: &str) -> Option<HeadingSig> {
        let bytes = line.as_bytes();
        let level = bytes.iter().take_while(|&&b| b == Self::MARKER).count();
        if level == 0 || level > Self::MAX_LEVEL {
            return None;
        }

        let rest = &line[level..];
        match rest.bytes().next() {
            None | Some(b' ') | Some(b'\t') => {}
            Some(_) => return None,
        }

        let text = Self::strip_closing_run(rest.trim()).trim().to_string();
        Some(HeadingSig {
            level: level as u8,
            text,
        })
    }

    /// Strips a closing `#` run from an already-trimmed title.
    fn strip_closing_run(title: &str) -> &str {
        let stripped = title.trim_end_matches(Self::MARKER as char);
        if stripped.is_empty() {
            // The remainder was nothing but hashes.
            return "";
        }
        if stripped.ends_with(' ') || stripped.ends_with('\t') {
            stripped
        } else {
            title
        }
    }
}
