use std::collections::HashMap;

use chrono::{Datelike, NaiveDate};
use lazy_static::lazy_static;

use crate::catalog;

lazy_static! {
    static ref MONTHS: HashMap<&'static str, u32> = {
        let mut map = HashMap::new();

        map.insert("january", 1);
        map.insert("february", 2);
        map.insert("march", 3);
        map.insert("april", 4);
        map.insert("may", 5);
        map.insert("june", 6);
        map.insert("july", 7);
        map.insert("august", 8);
        map.insert("september", 9);
        map.insert("october", 10);
        map.insert("november", 11);
        map.insert("december", 12);
        map.insert("jan", 1);
        map.insert("feb", 2);
        map.insert("mar", 3);
        map.insert("apr", 4);
        map.insert("jun", 6);
        map.insert("jul", 7);
        map.insert("aug", 8);
        map.insert("sep", 9);
        map.insert("sept", 9);
        map.insert("oct", 10);
        map.insert("nov", 11);
        map.insert("dec", 12);

        map
    };
}

/// A single parsing strategy. Tiers are pure and independent; the driver
/// tries them in order and the first hit wins.
type Tier = fn(&str, NaiveDate) -> Option<NaiveDate>;

const TIERS: &[Tier] = &[
    catalog_exact,
    numeric_partial,
    month_name_with_year,
    month_name_single_digit_year,
    month_name_day_optional,
];

/// Parse a free-text fragment into a calendar date.
///
/// Attempts, in order: a strict whole-string match against the format
/// catalog, a numeric month-day pair (`3-3`, `12/25`) filled in with the
/// reference year, and month-name forms with a 4-, 2-, or single-digit year
/// or no year at all. Candidates that are not real calendar dates (month 13,
/// Feb 30) fall through to the next tier.
///
/// `reference` supplies the year for partial dates and disambiguates
/// single-digit years; pass "today" for interactive use.
///
/// ```
/// use chrono::NaiveDate;
///
/// let anchor = NaiveDate::from_ymd_opt(2024, 6, 15).unwrap();
/// let date = datemark::parse_fragment("sept 2 24", anchor).unwrap();
/// assert_eq!(date, NaiveDate::from_ymd_opt(2024, 9, 2).unwrap());
/// ```
pub fn parse_fragment(fragment: &str, reference: NaiveDate) -> Option<NaiveDate> {
    let fragment = fragment.trim();
    if fragment.is_empty() {
        return None;
    }

    TIERS.iter().find_map(|tier| tier(fragment, reference))
}

fn catalog_exact(fragment: &str, _reference: NaiveDate) -> Option<NaiveDate> {
    catalog::parse_strict(fragment)
}

/// `<1-2 digits>[/-]<1-2 digits>`, month then day, reference year assumed.
fn numeric_partial(fragment: &str, reference: NaiveDate) -> Option<NaiveDate> {
    let (month, day) = fragment.split_once(['/', '-'])?;
    if !is_short_number(month) || !is_short_number(day) {
        return None;
    }

    NaiveDate::from_ymd_opt(reference.year(), month.parse().ok()?, day.parse().ok()?)
}

/// `<month word> <day> <2-or-4-digit year>`.
fn month_name_with_year(fragment: &str, _reference: NaiveDate) -> Option<NaiveDate> {
    let words: Vec<&str> = fragment.split_whitespace().collect();
    let [month, day, year] = words.as_slice() else {
        return None;
    };

    let month = resolve_month(month)?;
    if !is_short_number(day) {
        return None;
    }
    if !year.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }

    let year: i32 = match year.len() {
        2 => 2000 + year.parse::<i32>().ok()?,
        4 => year.parse().ok()?,
        _ => return None,
    };

    NaiveDate::from_ymd_opt(year, month, day.parse().ok()?)
}

/// `<month word> <day> <digit>` — a lone year digit is too ambiguous to
/// guess from, so it is accepted only when it matches the last digit of the
/// reference year and resolves to that year.
fn month_name_single_digit_year(fragment: &str, reference: NaiveDate) -> Option<NaiveDate> {
    let words: Vec<&str> = fragment.split_whitespace().collect();
    let [month, day, year] = words.as_slice() else {
        return None;
    };

    let month = resolve_month(month)?;
    if !is_short_number(day) {
        return None;
    }
    if year.len() != 1 || !year.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    if year.parse::<i32>().ok()? != reference.year().rem_euclid(10) {
        return None;
    }

    NaiveDate::from_ymd_opt(reference.year(), month, day.parse().ok()?)
}

/// `<month word>` alone or `<month word> <day>`, reference year assumed;
/// a missing day defaults to the 1st.
fn month_name_day_optional(fragment: &str, reference: NaiveDate) -> Option<NaiveDate> {
    let words: Vec<&str> = fragment.split_whitespace().collect();

    let (month, day) = match words.as_slice() {
        [month] => (resolve_month(month)?, 1),
        [month, day] if is_short_number(day) => (resolve_month(month)?, day.parse().ok()?),
        _ => return None,
    };

    NaiveDate::from_ymd_opt(reference.year(), month, day)
}

fn is_short_number(s: &str) -> bool {
    !s.is_empty() && s.len() <= 2 && s.bytes().all(|b| b.is_ascii_digit())
}

/// Resolve a month word case-insensitively. An exact key wins outright;
/// otherwise the input must be at least 3 characters and a prefix of a known
/// key, preferring the longest key when several qualify.
fn resolve_month(word: &str) -> Option<u32> {
    let word = word.to_lowercase();

    if let Some(&month) = MONTHS.get(word.as_str()) {
        return Some(month);
    }
    if word.len() < 3 {
        return None;
    }

    MONTHS
        .iter()
        .filter(|(key, _)| key.starts_with(word.as_str()))
        .max_by_key(|(key, _)| key.len())
        .map(|(_, &month)| month)
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    fn anchor() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 6, 15).unwrap()
    }

    #[test_case("2024-09-02", 2024, 9, 2 ; "iso")]
    #[test_case("09/02/2024", 2024, 9, 2 ; "slash full year")]
    #[test_case("9/2/24", 2024, 9, 2 ; "slash short year")]
    #[test_case("Sep 2, 2024", 2024, 9, 2 ; "abbreviated month with comma")]
    #[test_case("September 2, 2024", 2024, 9, 2 ; "full month with comma")]
    #[test_case("3-3", 2024, 3, 3 ; "numeric partial dash")]
    #[test_case("12/25", 2024, 12, 25 ; "numeric partial slash")]
    #[test_case("sept 2 24", 2024, 9, 2 ; "sept abbreviation")]
    #[test_case("sep 2 24", 2024, 9, 2 ; "sep abbreviation")]
    #[test_case("September 2 2024", 2024, 9, 2 ; "full month four digit year")]
    #[test_case("march", 2024, 3, 1 ; "month alone defaults to first")]
    #[test_case("jun 15", 2024, 6, 15 ; "month and day")]
    #[test_case("OCTOBER 31", 2024, 10, 31 ; "case insensitive")]
    #[test_case("febr 14 24", 2024, 2, 14 ; "prefix of full name")]
    fn test_parses(fragment: &str, y: i32, m: u32, d: u32) {
        let expected = NaiveDate::from_ymd_opt(y, m, d).unwrap();
        assert_eq!(parse_fragment(fragment, anchor()), Some(expected));
    }

    #[test_case("13/40/99" ; "month and day out of range")]
    #[test_case("feb 30 24" ; "not a real calendar day")]
    #[test_case("2/30" ; "partial not a real calendar day")]
    #[test_case("ja 5" ; "month word shorter than three chars")]
    #[test_case("junk 5 24" ; "not a month prefix")]
    #[test_case("hello world" ; "plain words")]
    #[test_case("" ; "empty")]
    #[test_case("   " ; "whitespace only")]
    #[test_case("sep 2 123" ; "three digit year")]
    fn test_rejects(fragment: &str) {
        assert_eq!(parse_fragment(fragment, anchor()), None);
    }

    #[test]
    fn test_single_digit_year_matches_reference() {
        let reference = NaiveDate::from_ymd_opt(2029, 1, 1).unwrap();
        let expected = NaiveDate::from_ymd_opt(2029, 12, 5).unwrap();
        assert_eq!(parse_fragment("dec 5 9", reference), Some(expected));
    }

    #[test]
    fn test_single_digit_year_mismatch_rejected() {
        assert_eq!(parse_fragment("dec 5 9", anchor()), None);
    }

    #[test]
    fn test_partial_uses_reference_year() {
        let reference = NaiveDate::from_ymd_opt(2031, 1, 1).unwrap();
        let expected = NaiveDate::from_ymd_opt(2031, 3, 3).unwrap();
        assert_eq!(parse_fragment("3-3", reference), Some(expected));
    }

    #[test]
    fn test_two_digit_year_is_two_thousands() {
        let expected = NaiveDate::from_ymd_opt(2003, 4, 1).unwrap();
        assert_eq!(parse_fragment("apr 1 03", anchor()), Some(expected));
    }
}
