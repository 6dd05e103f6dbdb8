//! Local argument checks run before a request is built.

use std::fmt;

use chrono::{Local, NaiveDate};

use crate::error::{Error, Result};
use crate::types::IdList;

const DATE_FORMAT: &str = "%Y-%m-%d";

/// Fail with `InvalidArgument` unless `value` is one of `allowed`.
pub fn one_of<T>(name: &str, value: T, allowed: &[T]) -> Result<()>
where
    T: PartialEq + fmt::Debug,
{
    if allowed.contains(&value) {
        return Ok(());
    }
    let legal = allowed
        .iter()
        .map(|v| format!("{v:?}"))
        .collect::<Vec<_>>()
        .join(", ");
    Err(Error::InvalidArgument(format!(
        "invalid {name} {value:?}; must be one of {legal}"
    )))
}

/// Whether `ids` is a single id or a well-formed CSV of ids.
///
/// Empty segments are skipped, so `"1,2,"` and `"1,,2"` pass. A segment
/// holding only whitespace is not empty and fails the digit check, so
/// `"1, "` is rejected. A list with no ids at all is rejected.
pub fn is_valid_identifier_list(ids: &IdList) -> bool {
    match ids {
        IdList::Single(_) => true,
        IdList::Csv(csv) => {
            let mut tokens = csv.split(',').filter(|token| !token.is_empty()).peekable();
            tokens.peek().is_some()
                && tokens.all(|token| {
                    let token = token.trim();
                    !token.is_empty() && token.bytes().all(|b| b.is_ascii_digit())
                })
        }
    }
}

pub fn identifier_list(name: &str, ids: &IdList) -> Result<()> {
    if is_valid_identifier_list(ids) {
        Ok(())
    } else {
        Err(Error::InvalidArgument(format!(
            "invalid {name} {ids:?}; expected a game id or a comma-separated list of game ids"
        )))
    }
}

/// Today's local date as `YYYY-MM-DD`.
pub fn today() -> String {
    Local::now().date_naive().format(DATE_FORMAT).to_string()
}

/// Use `date` if given, otherwise today. A supplied date must be a real
/// calendar date written as `YYYY-MM-DD`.
pub fn date_or_today(date: Option<&str>) -> Result<String> {
    let Some(date) = date else {
        return Ok(today());
    };
    let parsed = NaiveDate::parse_from_str(date, DATE_FORMAT)
        .ok()
        .filter(|_| date.len() == 10);
    match parsed {
        Some(parsed) => Ok(parsed.format(DATE_FORMAT).to_string()),
        None => Err(Error::InvalidArgument(format!(
            "invalid date {date:?}; expected YYYY-MM-DD"
        ))),
    }
}
