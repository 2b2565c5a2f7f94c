use crate::error::{Result, SalesSummaryError};
use chrono::{Datelike, Days, Month, NaiveDate};

/// Format the feed serves purchase dates in.
pub const FEED_DATE_FORMAT: &str = "%d/%m/%Y";

pub fn parse_feed_date(raw: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(raw.trim(), FEED_DATE_FORMAT).map_err(|_| {
        SalesSummaryError::InvalidDate(format!("{}. Expected dd/mm/YYYY", raw))
    })
}

pub fn last_day_of_month(year: i32, month: u32) -> NaiveDate {
    let next_month = if month == 12 { 1 } else { month + 1 };
    let next_year = if month == 12 { year + 1 } else { year };

    NaiveDate::from_ymd_opt(next_year, next_month, 1)
        .unwrap()
        .checked_sub_days(Days::new(1))
        .unwrap()
}

/// The month bucket a purchase date falls into, keyed by its closing day
/// (the last calendar day of the month).
pub fn month_end_of(date: NaiveDate) -> NaiveDate {
    last_day_of_month(date.year(), date.month())
}

/// English month name used to label the monthly tables.
pub fn month_display_name(month: u32) -> &'static str {
    Month::try_from(month as u8).map(|m| m.name()).unwrap_or("")
}
