use crate::catalog;

/// A date found inside a line of text.
///
/// `start`/`end` are byte offsets of the date text itself, delimiters
/// excluded, so `text == line[start..end]` always holds.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DateMatch {
    pub text: String,
    pub start: usize,
    pub end: usize,
}

/// Find the delimiter-wrapped date under `offset` in `line`.
///
/// Scans left to right for `*...*` spans with no interior asterisk. A span
/// is returned only when `offset` falls strictly inside the inner text —
/// an offset on either delimiter, or exactly on an inner boundary, does not
/// count — and the inner text strict-parses against the format catalog.
/// Arbitrary wrapped phrases that are not well-formed dates are skipped.
///
/// ```
/// let m = datemark::locate("due *2024-09-02* noon", 8).unwrap();
/// assert_eq!(m.text, "2024-09-02");
/// assert_eq!((m.start, m.end), (5, 15));
/// ```
pub fn locate(line: &str, offset: usize) -> Option<DateMatch> {
    let mut open: Option<usize> = None;

    for (i, b) in line.bytes().enumerate() {
        if b != b'*' {
            continue;
        }
        let Some(opened) = open.take() else {
            open = Some(i);
            continue;
        };

        let (start, end) = (opened + 1, i);
        if offset > start && offset < end && catalog::parse_strict(&line[start..end]).is_some() {
            return Some(DateMatch {
                text: line[start..end].to_string(),
                start,
                end,
            });
        }
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_finds_wrapped_date() {
        let line = "meet on *9/2/24* sharp";
        let m = locate(line, 11).unwrap();
        assert_eq!(m.text, "9/2/24");
        assert_eq!(&line[m.start..m.end], "9/2/24");
    }

    #[test]
    fn test_delimiters_and_boundaries_excluded() {
        let line = "*9/2/24*";
        // inner text spans bytes 1..7
        assert!(locate(line, 0).is_none());
        assert!(locate(line, 1).is_none());
        assert!(locate(line, 7).is_none());
        assert!(locate(line, 2).is_some());
        assert!(locate(line, 6).is_some());
    }

    #[test]
    fn test_non_date_span_skipped() {
        assert!(locate("*bold words* here", 3).is_none());
    }

    #[test]
    fn test_second_span_reachable() {
        let line = "*note* and *2024-09-02* end";
        let m = locate(line, 14).unwrap();
        assert_eq!(m.text, "2024-09-02");
        assert_eq!((m.start, m.end), (12, 22));
    }

    #[test]
    fn test_unclosed_delimiter() {
        assert!(locate("open *2024-09-02 and on", 8).is_none());
    }
}
