use std::str::FromStr;

use chrono::NaiveDate;

use crate::Error;

/// One entry in the catalog of recognized display formats.
///
/// The set is fixed at build time; hosts select the active output format by
/// name (see [`FromStr`]) but parsing always accepts the whole catalog.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum DateFormat {
    /// `YYYY-MM-DD`
    Iso,
    /// `MM/DD/YYYY`
    MonthDayYear,
    /// `M/D/YYYY`
    MonthDayYearCompact,
    /// `MM/DD/YY`
    MonthDayYearShort,
    /// `M/D/YY`
    MonthDayYearCompactShort,
    /// `MMM D, YYYY`, e.g. `Sep 2, 2024`
    AbbreviatedMonth,
    /// `MMMM D, YYYY`, e.g. `September 2, 2024`
    FullMonth,
}

/// Catalog order doubles as strict-parse priority: the ISO form leads to
/// avoid locale ambiguity, and 4-digit-year forms come before 2-digit ones.
const CATALOG: &[DateFormat] = &[
    DateFormat::Iso,
    DateFormat::MonthDayYear,
    DateFormat::MonthDayYearCompact,
    DateFormat::AbbreviatedMonth,
    DateFormat::FullMonth,
    DateFormat::MonthDayYearShort,
    DateFormat::MonthDayYearCompactShort,
];

impl DateFormat {
    /// All recognized formats, in strict-parse priority order.
    pub fn all() -> &'static [DateFormat] {
        CATALOG
    }

    /// The chrono strftime pattern this format renders and parses with.
    pub fn pattern(&self) -> &'static str {
        match self {
            DateFormat::Iso => "%Y-%m-%d",
            DateFormat::MonthDayYear => "%m/%d/%Y",
            DateFormat::MonthDayYearCompact => "%-m/%-d/%Y",
            DateFormat::MonthDayYearShort => "%m/%d/%y",
            DateFormat::MonthDayYearCompactShort => "%-m/%-d/%y",
            DateFormat::AbbreviatedMonth => "%b %-d, %Y",
            DateFormat::FullMonth => "%B %-d, %Y",
        }
    }

    /// Human-readable name, in the token notation hosts configure with.
    pub fn label(&self) -> &'static str {
        match self {
            DateFormat::Iso => "YYYY-MM-DD",
            DateFormat::MonthDayYear => "MM/DD/YYYY",
            DateFormat::MonthDayYearCompact => "M/D/YYYY",
            DateFormat::MonthDayYearShort => "MM/DD/YY",
            DateFormat::MonthDayYearCompactShort => "M/D/YY",
            DateFormat::AbbreviatedMonth => "MMM D, YYYY",
            DateFormat::FullMonth => "MMMM D, YYYY",
        }
    }
}

impl FromStr for DateFormat {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        CATALOG
            .iter()
            .find(|f| f.label().eq_ignore_ascii_case(s.trim()))
            .copied()
            .ok_or_else(|| Error::UnknownFormat(s.to_string()))
    }
}

/// Strict whole-string parse against every catalog pattern, in priority
/// order. chrono is lenient about digit widths (`%Y` accepts `24`), so a
/// candidate only counts when re-rendering it with the same pattern
/// reproduces the input byte for byte.
pub fn parse_strict(text: &str) -> Option<NaiveDate> {
    CATALOG.iter().find_map(|f| {
        let date = NaiveDate::parse_from_str(text, f.pattern()).ok()?;
        (date.format(f.pattern()).to_string() == text).then_some(date)
    })
}

#[test]
fn test_iso_leads_catalog() {
    assert_eq!(DateFormat::all()[0], DateFormat::Iso);
}

#[test]
fn test_from_str() {
    assert_eq!("YYYY-MM-DD".parse::<DateFormat>().unwrap(), DateFormat::Iso);
    assert_eq!(
        "mmm d, yyyy".parse::<DateFormat>().unwrap(),
        DateFormat::AbbreviatedMonth
    );
}

#[test]
fn test_from_str_unknown_fails_loudly() {
    let err = "DD.MM.YYYY".parse::<DateFormat>().unwrap_err();
    assert_eq!(err, Error::UnknownFormat("DD.MM.YYYY".to_string()));
}

#[test]
fn test_parse_strict() {
    let date = NaiveDate::from_ymd_opt(2024, 9, 2).unwrap();
    assert_eq!(parse_strict("2024-09-02"), Some(date));
    assert_eq!(parse_strict("9/2/24"), Some(date));
    assert_eq!(parse_strict("Sep 2, 2024"), Some(date));
    assert_eq!(parse_strict("not a date"), None);
    assert_eq!(parse_strict("2024-09-02 tail"), None);
}

#[test]
fn test_parse_strict_rejects_loose_widths() {
    // Would parse as year 24 under a lenient %Y match.
    assert_ne!(
        parse_strict("9/2/24"),
        NaiveDate::from_ymd_opt(24, 9, 2)
    );
    assert_eq!(parse_strict("2024-9-2"), None);
}
