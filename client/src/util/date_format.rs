//! Comment date formatting (`Oct 25, 2018`).
//!
//! Comment dates arrive as ISO-8601 strings. Full RFC 3339 timestamps and the
//! minute-precision `YYYY-MM-DDTHH:MMZ` form both parse; anything else is shown
//! as received.

#[cfg(test)]
#[path = "date_format_test.rs"]
mod date_format_test;

use time::format_description::BorrowedFormatItem;
use time::format_description::well_known::Rfc3339;
use time::macros::format_description;
use time::{Date, OffsetDateTime, PrimitiveDateTime};

const MINUTE_PRECISION: &[BorrowedFormatItem<'static>] = format_description!("[year]-[month]-[day]T[hour]:[minute]Z");
const DATE_ONLY: &[BorrowedFormatItem<'static>] = format_description!("[year]-[month]-[day]");
const DISPLAY: &[BorrowedFormatItem<'static>] = format_description!("[month repr:short] [day], [year]");

/// Extract the UTC calendar date from a comment timestamp.
pub fn parse_comment_date(raw: &str) -> Option<Date> {
    let raw = raw.trim();
    if let Ok(ts) = OffsetDateTime::parse(raw, &Rfc3339) {
        return Some(ts.to_offset(time::UtcOffset::UTC).date());
    }
    if let Ok(ts) = PrimitiveDateTime::parse(raw, MINUTE_PRECISION) {
        return Some(ts.date());
    }
    Date::parse(raw, DATE_ONLY).ok()
}

/// Render a comment timestamp as `Mon DD, YYYY`.
pub fn format_comment_date(raw: &str) -> String {
    parse_comment_date(raw)
        .and_then(|date| date.format(DISPLAY).ok())
        .unwrap_or_else(|| raw.to_owned())
}
