//! Predicates testing one item against one criterion
//!
//! All predicates are total: absent or malformed input means "does not
//! match", never a panic.

use crate::core::FieldValue;
use chrono::NaiveDate;

/// True if `term` is blank or any extracted text contains it, ignoring case
pub fn text_matches<T, F>(item: &T, extractors: &[F], term: &str) -> bool
where
    F: Fn(&T) -> FieldValue,
{
    if term.trim().is_empty() {
        return true;
    }
    let needle = term.to_lowercase();
    extractors
        .iter()
        .any(|extract| extract(item).text().to_lowercase().contains(&needle))
}

/// True if `expected` is `None` or the field's text equals it
///
/// A list field matches when any of its elements does.
pub fn field_equals(value: &FieldValue, expected: Option<&str>, case_insensitive: bool) -> bool {
    let Some(expected) = expected else {
        return true;
    };
    let eq = |candidate: &str| {
        if case_insensitive {
            candidate.to_lowercase() == expected.to_lowercase()
        } else {
            candidate == expected
        }
    };
    match value {
        FieldValue::Null => false,
        FieldValue::List(items) => items.iter().any(|s| eq(s)),
        other => eq(&other.text()),
    }
}

/// True if the value's calendar date is on or after `bound`
pub fn date_on_or_after(value: &FieldValue, bound: NaiveDate) -> bool {
    value.as_date().is_some_and(|date| date >= bound)
}

/// True if the value's calendar date is strictly before `bound`
pub fn date_before(value: &FieldValue, bound: NaiveDate) -> bool {
    value.as_date().is_some_and(|date| date < bound)
}

/// Half-open date range check with optional bounds
///
/// With both bounds open any date matches, but a missing date still does not.
pub fn date_in_range(
    value: &FieldValue,
    on_or_after: Option<NaiveDate>,
    before: Option<NaiveDate>,
) -> bool {
    if value.as_date().is_none() {
        return false;
    }
    on_or_after.is_none_or(|bound| date_on_or_after(value, bound))
        && before.is_none_or(|bound| date_before(value, bound))
}
