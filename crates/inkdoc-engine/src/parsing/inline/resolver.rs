use super::{
    cursor::Cursor,
    delimiter::{DELIMITERS, Delimiter},
    types::{InlineRun, StyleSet},
};

/// Nesting levels beyond this are emitted as literal text.
///
/// Three styles cannot meaningfully nest deeper than a handful of levels;
/// the guard only matters for adversarial input.
const MAX_DEPTH: usize = 16;

/// Resolves inline markup into a sequence of styled [`InlineRun`]s.
///
/// Every input is valid: unmatched or unclosed delimiter characters appear
/// verbatim in plain-text runs, so malformed markup round-trips losslessly.
///
/// # Returns
/// Runs covering the entire input in order. Adjacent differently-styled
/// spans never merge, and a matched empty span (e.g. `****`) is kept as a
/// zero-length run.
pub fn parse_inline(text: &str) -> Vec<InlineRun> {
    resolve(text, StyleSet::EMPTY, 0)
}

/// Like [`parse_inline`], with styles inherited from an enclosing span.
///
/// Every run produced carries at least `inherited`; styles introduced by
/// matched delimiters are unioned on top.
pub fn parse_inline_with(text: &str, inherited: StyleSet) -> Vec<InlineRun> {
    resolve(text, inherited, 0)
}

/// A matched (opener, interior, closer) triple found at some position.
struct StyledSection {
    delim: &'static Delimiter,
    /// Byte offset of the closing marker.
    close: usize,
}

fn resolve(text: &str, inherited: StyleSet, depth: usize) -> Vec<InlineRun> {
    if text.is_empty() {
        return vec![];
    }
    if depth >= MAX_DEPTH {
        // Degrade to literal text rather than recursing further.
        return vec![InlineRun::new(text, inherited)];
    }

    let mut out = vec![];
    let mut cur = Cursor::new(text);
    let mut text_start = cur.pos();

    while !cur.eof() {
        let pos = cur.pos();
        let Some(section) = find_styled_section(text, pos) else {
            cur.bump();
            continue;
        };

        // Flush plain text accumulated before the opener.
        if pos > text_start {
            out.push(InlineRun::new(&text[text_start..pos], inherited));
        }

        let marker_len = section.delim.marker.len();
        let inner = &text[pos + marker_len..section.close];
        let combined = inherited.union(section.delim.styles);

        if section.delim.literal {
            // Raw zone: the interior is never re-parsed, which is how a
            // code span preserves literal asterisks.
            out.push(InlineRun::new(inner, combined));
        } else if inner.is_empty() {
            out.push(InlineRun::new("", combined));
        } else {
            out.extend(resolve(inner, combined, depth + 1));
        }

        cur.jump_to(section.close + marker_len);
        text_start = cur.pos();
    }

    if text_start < text.len() {
        out.push(InlineRun::new(&text[text_start..], inherited));
    }

    out
}

/// Finds a styled section opening at `pos`, trying delimiters in priority
/// order.
///
/// A marker that matches the text but never closes is remembered as a
/// failed opener; a shorter marker is then rejected when its closer would
/// end inside the stretch the longer, unclosed marker visually claims.
/// This keeps `**word` from being misread as an empty italic span.
fn find_styled_section(text: &str, pos: usize) -> Option<StyledSection> {
    let mut failed_open_len = 0;

    for delim in &DELIMITERS {
        if !text.as_bytes()[pos..].starts_with(delim.marker.as_bytes()) {
            continue;
        }

        let marker_len = delim.marker.len();
        match find_closing(text, delim.marker, pos + marker_len) {
            None => failed_open_len = failed_open_len.max(marker_len),
            Some(close) => {
                if close + marker_len <= pos + failed_open_len {
                    continue;
                }
                return Some(StyledSection { delim, close });
            }
        }
    }

    None
}

/// Scans forward from `start` for a closing occurrence of `marker`.
///
/// An occurrence only closes if no longer marker both starts there and
/// itself closes further on. Matched spans of *other* markers are skipped
/// wholesale: their interior is opaque to this search, so `` `**` `` never
/// donates its asterisks as emphasis closers.
fn find_closing(text: &str, marker: &str, start: usize) -> Option<usize> {
    let mut cur = Cursor::at(text, start);

    while !cur.eof() {
        if cur.starts_with(marker) && !claimed_by_longer(text, marker, cur.pos()) {
            return Some(cur.pos());
        }

        match skip_nested_at(text, marker, cur.pos()) {
            Some(after) => cur.jump_to(after),
            None => {
                cur.bump();
            }
        }
    }

    None
}

/// Whether a longer delimiter with a valid closer also starts at `pos`.
///
/// A longer marker's own open/close pair takes precedence over treating
/// its prefix as a closer of a shorter marker.
fn claimed_by_longer(text: &str, marker: &str, pos: usize) -> bool {
    DELIMITERS
        .iter()
        .filter(|d| d.marker.len() > marker.len())
        .any(|d| {
            text.as_bytes()[pos..].starts_with(d.marker.as_bytes())
                && find_closing(text, d.marker, pos + d.marker.len()).is_some()
        })
}

/// If a different delimiter opens at `pos` and closes, returns the
/// position just past its closing marker.
fn skip_nested_at(text: &str, marker: &str, pos: usize) -> Option<usize> {
    for d in DELIMITERS.iter().filter(|d| d.marker != marker) {
        if !text.as_bytes()[pos..].starts_with(d.marker.as_bytes()) {
            continue;
        }
        if let Some(close) = find_closing(text, d.marker, pos + d.marker.len()) {
            return Some(close + d.marker.len());
        }
    }
    None
}
