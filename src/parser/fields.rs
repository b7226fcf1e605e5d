use std::str::FromStr;

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use rust_decimal::Decimal;
use tracing::debug;

use crate::parser::FieldError;

/// Date and time layouts accepted for `InvoiceDate`, tried in order.
const INVOICE_DATE_TIME_FORMATS: [&str; 9] = [
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%dT%H:%M:%S%.f",
    "%m/%d/%Y %H:%M:%S",
    "%m/%d/%Y %H:%M",
    "%m/%d/%Y %I:%M:%S %p",
    "%m/%d/%Y %I:%M %p"
];

/// Date-only layouts, read as midnight.
const INVOICE_DATE_FORMATS: [&str; 2] = ["%Y-%m-%d", "%m/%d/%Y"];

/// Parses an integer cell, falling back to the type's default (zero) when the
/// cell is empty or is not a number.
pub fn parse_or_zero<T: FromStr + Default>(value: &str) -> T {
    match value.trim().parse() {
        Ok(parsed) => parsed,
        Err(_) => {
            debug!("Integer value [{value}] could not be parsed, using zero");
            T::default()
        }
    }
}

/// Parses an `InvoiceDate` cell against the accepted layouts.
///
/// # Errors
/// Returns `FieldError::InvalidDate` with the reason the last layout rejected the value.
pub fn parse_invoice_date(value: &str) -> Result<NaiveDateTime, FieldError> {
    let value = value.trim();
    let mut reason = None;

    for format in INVOICE_DATE_TIME_FORMATS {
        match NaiveDateTime::parse_from_str(value, format) {
            Ok(date_time) => return Ok(date_time),
            Err(error) => reason = Some(error)
        }
    }

    for format in INVOICE_DATE_FORMATS {
        match NaiveDate::parse_from_str(value, format) {
            Ok(date) => return Ok(date.and_time(NaiveTime::MIN)),
            Err(error) => reason = Some(error)
        }
    }

    Err(FieldError::InvalidDate(reason.map(|error| error.to_string()).unwrap_or_default()))
}

pub fn parse_unit_price(value: &str) -> Result<Decimal, FieldError> {
    Ok(Decimal::from_str(value.trim())?)
}
