#![allow(clippy::needless_doctest_main)]
//! # Datemark: Date Tokens for Plain Text
//!
//! A small engine for editor extensions that detect, parse, and format
//! calendar dates inside free-form text. Dates inserted into a document are
//! wrapped in a pair of asterisk delimiters (`*2024-09-02*`) so they can be
//! found again and revised in place.
//!
//! ## Usage
//!
//! Put this in your `Cargo.toml`:
//!
//! ```toml
//! datemark = "0.1"
//! ```
//!
//! ## Example
//!
//! ```rust
//! use chrono::NaiveDate;
//! use datemark::DateFormat;
//!
//! fn main() {
//!     let today = NaiveDate::from_ymd_opt(2024, 6, 15).unwrap();
//!
//!     // a fragment the user typed after the activation character
//!     let date = datemark::parse_fragment("sept 2 24", today).unwrap();
//!
//!     // splice it back into a line, wrapped and followed by a space
//!     let ins = datemark::insertion(date, DateFormat::Iso, "deadline", 0);
//!     assert_eq!(ins.text, "*2024-09-02* ");
//!
//!     // later, a click inside the wrapped text finds it again
//!     let line = "*2024-09-02* deadline";
//!     let hit = datemark::locate(line, 4).unwrap();
//!     assert_eq!(hit.text, "2024-09-02");
//! }
//! ```
//!
//! Everything is a pure function: line text, offsets, the reference date,
//! and the active output format all arrive as parameters, so the engine has
//! no host-editor dependency and no state between calls.
//!
//! ## Recognized input
//! ```text
//! <fragment> ::= <strict>                ; any display format, end to end
//!              | <num> / <num>           ; month/day, reference year
//!              | <num> - <num>
//!              | <month> <num> <num4>    ; 4-digit year
//!              | <month> <num> <num2>    ; 2-digit year, 2000-based
//!              | <month> <num> <digit>   ; only if it ends the reference year
//!              | <month> <num>
//!              | <month>                 ; day defaults to the 1st
//!
//! <strict> ::= YYYY-MM-DD
//!            | MM/DD/YYYY | M/D/YYYY
//!            | MM/DD/YY   | M/D/YY
//!            | MMM D, YYYY
//!            | MMMM D, YYYY
//!
//! <month> ::= january | february | ... | december
//!           | jan | feb | mar | apr | jun | jul | aug | sep | sept
//!           | oct | nov | dec
//!           | any prefix of 3+ characters of the above
//! ```

pub mod catalog;
pub mod formatter;
pub mod locator;
pub mod parser;
pub mod trigger;

use chrono::{Local, NaiveDate};

pub use catalog::DateFormat;
pub use formatter::{format_date, insertion, wrap, Insertion, DELIMITER};
pub use locator::{locate, DateMatch};
pub use parser::parse_fragment;
pub use trigger::{classify, should_offer, Suggestion, SuggestionAction, TriggerQuery};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// The host configuration named a display format the catalog does not
    /// carry. Silently substituting a default would corrupt user-visible
    /// text, so the requesting operation fails instead.
    #[error("unrecognized date format `{0}`")]
    UnknownFormat(String),
}

/// Parse a fragment with today as the reference date.
pub fn parse_fragment_now(fragment: &str) -> Option<NaiveDate> {
    parser::parse_fragment(fragment, Local::now().date_naive())
}

#[test]
fn test_round_trip_every_strict_format() {
    let date = NaiveDate::from_ymd_opt(2024, 9, 2).unwrap();
    let today = NaiveDate::from_ymd_opt(2024, 6, 15).unwrap();

    for &format in DateFormat::all() {
        let rendered = format_date(date, format);
        assert_eq!(
            parse_fragment(&rendered, today),
            Some(date),
            "format {} did not round-trip",
            format.label()
        );
    }
}

#[test]
fn test_insert_then_locate_recovers_date() {
    let date = NaiveDate::from_ymd_opt(2024, 9, 2).unwrap();
    let today = NaiveDate::from_ymd_opt(2024, 6, 15).unwrap();
    let line = "ship by  please";

    for &format in DateFormat::all() {
        let ins = insertion(date, format, line, 8);
        let spliced = format!("{}{}{}", &line[..8], ins.text, &line[8..]);

        let hit = locate(&spliced, 8 + 2).unwrap();
        assert_eq!(parse_fragment(&hit.text, today), Some(date));
    }
}

#[test]
fn test_malformed() {
    let today = NaiveDate::from_ymd_opt(2024, 6, 15).unwrap();
    assert!(parse_fragment("Hello World", today).is_none());
}

#[test]
fn test_empty() {
    let today = NaiveDate::from_ymd_opt(2024, 6, 15).unwrap();
    assert!(parse_fragment("", today).is_none());
}
