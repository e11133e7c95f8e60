//! Parsing of commit dates supplied by clients.
//!
//! Clients send dates in whatever shape their tooling produces: ISO calendar
//! dates from date pickers, `dd-mm-yyyy` from older front-ends, and full
//! RFC 3339 timestamps when a date is round-tripped from a previous response.

use chrono::{DateTime, NaiveDate};

use crate::error::CoreError;
use crate::types::CommitDate;

/// Accepted calendar formats, tried in order.
const DATE_FORMATS: [&str; 2] = ["%Y-%m-%d", "%d-%m-%Y"];

/// Parse a client-supplied date into a [`CommitDate`].
///
/// Accepts `YYYY-MM-DD`, `DD-MM-YYYY`, or an RFC 3339 timestamp. A timestamp
/// keeps the calendar date as written; its time and offset are dropped.
///
/// `field` names the input in the error message.
///
/// # Examples
///
/// ```
/// use repotrack_core::dates::parse_commit_date;
///
/// let d = parse_commit_date("2023-10-07", "commit_date").unwrap();
/// assert_eq!(d.to_string(), "2023-10-07");
/// assert_eq!(parse_commit_date("07-10-2023", "commit_date").unwrap(), d);
/// ```
pub fn parse_commit_date(input: &str, field: &str) -> Result<CommitDate, CoreError> {
    let trimmed = input.trim();

    for format in DATE_FORMATS {
        if let Ok(date) = NaiveDate::parse_from_str(trimmed, format) {
            return Ok(date);
        }
    }

    DateTime::parse_from_rfc3339(trimmed)
        .map(|ts| ts.date_naive())
        .map_err(|_| {
            CoreError::Validation(format!(
                "{field} must be a date (YYYY-MM-DD, DD-MM-YYYY or RFC 3339), got '{trimmed}'"
            ))
        })
}
