use chrono::NaiveDate;

use crate::catalog::DateFormat;

/// Marker character wrapped around inserted dates in document text.
pub const DELIMITER: char = '*';

/// Text to splice into a line, plus the recommended cursor offset once the
/// host editor has done so.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Insertion {
    pub text: String,
    pub cursor: usize,
}

/// Render a date per the format's pattern, without delimiters.
pub fn format_date(date: NaiveDate, format: DateFormat) -> String {
    date.format(format.pattern()).to_string()
}

/// Wrap `text` in one pair of delimiters. Text that already carries both a
/// leading and trailing delimiter is returned unchanged, so wrapping is
/// idempotent even if a format happens to begin or end with the marker.
pub fn wrap(text: &str) -> String {
    if text.len() >= 2 && text.starts_with(DELIMITER) && text.ends_with(DELIMITER) {
        return text.to_string();
    }

    format!("{DELIMITER}{text}{DELIMITER}")
}

/// Build the delimiter-wrapped splice for inserting `date` into `line` at
/// byte offset `at`.
///
/// One separator space is appended unless the character already at `at` is
/// a space, so repeated edits never pile up extra spaces. `cursor` is the
/// offset just past the spliced text.
///
/// ```
/// use chrono::NaiveDate;
/// use datemark::DateFormat;
///
/// let date = NaiveDate::from_ymd_opt(2024, 9, 2).unwrap();
/// let ins = datemark::insertion(date, DateFormat::Iso, "due: by friday", 5);
/// assert_eq!(ins.text, "*2024-09-02* ");
/// assert_eq!(ins.cursor, 5 + ins.text.len());
/// ```
pub fn insertion(date: NaiveDate, format: DateFormat, line: &str, at: usize) -> Insertion {
    let mut text = wrap(&format_date(date, format));

    let following = line.get(at..).and_then(|rest| rest.chars().next());
    if following != Some(' ') {
        text.push(' ');
    }

    Insertion {
        cursor: at + text.len(),
        text,
    }
}
