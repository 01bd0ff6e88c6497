use chrono::NaiveDate;

use crate::catalog::{self, DateFormat};
use crate::formatter;
use crate::parser;

/// A fragment longer than this is assumed not to be an in-progress date.
pub const MAX_FRAGMENT_LEN: usize = 20;

/// "Month Day Year" is the widest supported shape, so at most two spaces.
pub const MAX_SPACES: usize = 2;

/// The fragment a user has typed since the activation character, rebuilt
/// fresh on every text-change event.
#[derive(Debug, Clone, Copy)]
pub struct TriggerQuery<'a> {
    line: &'a str,
    trigger: usize,
    cursor: usize,
}

impl<'a> TriggerQuery<'a> {
    /// `trigger` and `cursor` are byte offsets into `line`: just past the
    /// activation character, and at the caret. Returns `None` when the
    /// offsets are out of order or not on character boundaries.
    pub fn new(line: &'a str, trigger: usize, cursor: usize) -> Option<Self> {
        line.get(trigger..cursor)?;
        Some(Self {
            line,
            trigger,
            cursor,
        })
    }

    /// The raw text between the activation character and the caret.
    pub fn fragment(&self) -> &'a str {
        &self.line[self.trigger..self.cursor]
    }
}

/// What picking a suggestion should do.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SuggestionAction {
    /// Splice this delimiter-wrapped text in place of the fragment.
    Insert(String),
    /// Open the host's manual date picker.
    PickManually,
}

/// One entry in the pick-list shown to the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Suggestion {
    pub label: String,
    pub action: SuggestionAction,
}

impl Suggestion {
    pub fn is_concrete_date(&self) -> bool {
        matches!(self.action, SuggestionAction::Insert(_))
    }
}

/// Whether the fragment is still a plausible in-progress date worth
/// offering suggestions for.
///
/// Gives up on fragments that are too long, contain more than
/// [`MAX_SPACES`] spaces, open with a space (the user is writing a
/// sentence), or start with an already completed wrapped date followed by
/// further text.
pub fn should_offer(query: &TriggerQuery) -> bool {
    let fragment = query.fragment();

    if fragment.chars().count() > MAX_FRAGMENT_LEN {
        return false;
    }
    if fragment.starts_with(' ') {
        return false;
    }
    if fragment.chars().filter(|&c| c == ' ').count() > MAX_SPACES {
        return false;
    }
    if follows_completed_date(fragment) {
        return false;
    }

    true
}

/// Build the pick-list for a fragment.
///
/// An empty fragment offers "Today"; a fragment the parser resolves offers
/// that date, rendered in `format` and delimiter-wrapped. A generic manual
/// picker entry is always last, so the list is never empty.
pub fn classify(query: &TriggerQuery, reference: NaiveDate, format: DateFormat) -> Vec<Suggestion> {
    let mut suggestions = Vec::new();
    let fragment = query.fragment().trim();

    if fragment.is_empty() {
        suggestions.push(Suggestion {
            label: "Today".to_string(),
            action: SuggestionAction::Insert(formatter::wrap(&formatter::format_date(
                reference, format,
            ))),
        });
    } else if let Some(date) = parser::parse_fragment(fragment, reference) {
        let rendered = formatter::format_date(date, format);
        suggestions.push(Suggestion {
            action: SuggestionAction::Insert(formatter::wrap(&rendered)),
            label: rendered,
        });
    }

    suggestions.push(Suggestion {
        label: "Pick a date…".to_string(),
        action: SuggestionAction::PickManually,
    });

    suggestions
}

/// A completed `*...*` date with trailing text means the suggestion session
/// for it is over and should not re-trigger.
fn follows_completed_date(fragment: &str) -> bool {
    let Some(inner) = fragment.strip_prefix('*') else {
        return false;
    };
    let Some(close) = inner.find('*') else {
        return false;
    };

    catalog::parse_strict(&inner[..close]).is_some() && !inner[close + 1..].trim().is_empty()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn anchor() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 6, 15).unwrap()
    }

    fn query(fragment: &str) -> TriggerQuery {
        TriggerQuery::new(fragment, 0, fragment.len()).unwrap()
    }

    #[test]
    fn test_rejects_long_fragment() {
        assert!(!should_offer(&query("september the second of")));
        // two spaces, but 21 characters: the length cap wins
        assert!(!should_offer(&query("september 22 20244444")));
        assert!(should_offer(&query("september 2 2024")));
    }

    #[test]
    fn test_rejects_too_many_words() {
        assert!(!should_offer(&query("a b c d")));
        assert!(should_offer(&query("sep 2 24")));
    }

    #[test]
    fn test_rejects_leading_space() {
        assert!(!should_offer(&query(" sep")));
    }

    #[test]
    fn test_rejects_completed_date_with_tail() {
        assert!(!should_offer(&query("*9/2/24* x")));
        assert!(should_offer(&query("*9/2/24*")));
        assert!(should_offer(&query("*not a date* x")));
    }

    #[test]
    fn test_classify_empty_offers_today() {
        let suggestions = classify(&query(""), anchor(), DateFormat::Iso);
        assert_eq!(suggestions.len(), 2);
        assert_eq!(suggestions[0].label, "Today");
        assert_eq!(
            suggestions[0].action,
            SuggestionAction::Insert("*2024-06-15*".to_string())
        );
        assert_eq!(suggestions[1].action, SuggestionAction::PickManually);
    }

    #[test]
    fn test_classify_concrete_date() {
        let suggestions = classify(&query("3-3"), anchor(), DateFormat::AbbreviatedMonth);
        assert_eq!(suggestions.len(), 2);
        assert_eq!(suggestions[0].label, "Mar 3, 2024");
        assert_eq!(
            suggestions[0].action,
            SuggestionAction::Insert("*Mar 3, 2024*".to_string())
        );
        assert!(suggestions[0].is_concrete_date());
    }

    #[test]
    fn test_classify_unparseable_still_offers_picker() {
        let suggestions = classify(&query("groceries"), anchor(), DateFormat::Iso);
        assert_eq!(suggestions.len(), 1);
        assert_eq!(suggestions[0].action, SuggestionAction::PickManually);
        assert!(!suggestions[0].is_concrete_date());
    }

    #[test]
    fn test_query_bounds_checked() {
        assert!(TriggerQuery::new("abc", 2, 1).is_none());
        assert!(TriggerQuery::new("abc", 0, 9).is_none());
        assert_eq!(TriggerQuery::new("@3-3", 1, 4).unwrap().fragment(), "3-3");
    }
}
