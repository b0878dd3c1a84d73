use chrono::{NaiveDate, ParseError};

pub fn parse_date(value: &str) -> Option<NaiveDate> {
    if value.is_empty() {
        None
    } else {
        NaiveDate::parse_from_str(value, "%Y-%m-%d").ok()
    }
}

pub fn parse_month(input: &str) -> Result<NaiveDate, ParseError> {
    NaiveDate::parse_from_str(&format!("{input}-01"), "%Y-%m-%d")
}
