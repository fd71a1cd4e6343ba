//! Parameter comparison rules.
//!
//! Route values are strings (or null); expected arguments are typed. A
//! parameter matches when, in order:
//!
//! 1. the parameter is nullable and both sides are blank (null or `""`);
//! 2. the expected value is a date/time and the route value parses to the
//!    same instant;
//! 3. otherwise, the expected value's string form equals the route value.

use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime};
use routeprobe_core::{ArgValue, ParamDescriptor, RouteAssertionError};

const DATE_TIME_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M",
    "%Y/%m/%d %H:%M:%S",
    "%m/%d/%Y %H:%M:%S",
];

const DATE_FORMATS: &[&str] = &["%Y-%m-%d", "%Y/%m/%d", "%m/%d/%Y", "%Y%m%d"];

/// Parse a route value as a date/time.
///
/// Accepts RFC 3339 (normalized to UTC), ISO-like date-times with optional
/// fractional seconds, and plain dates (taken as midnight).
pub fn parse_route_date(value: &str) -> Option<NaiveDateTime> {
    let value = value.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(value) {
        return Some(dt.naive_utc());
    }
    DATE_TIME_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(value, fmt).ok())
        .or_else(|| {
            DATE_FORMATS
                .iter()
                .find_map(|fmt| NaiveDate::parse_from_str(value, fmt).ok())
                .map(|d| d.and_time(NaiveTime::MIN))
        })
}

fn is_blank_expected(value: &ArgValue) -> bool {
    match value {
        ArgValue::Null => true,
        ArgValue::Text(s) => s.is_empty(),
        ArgValue::DateTime(_) => false,
    }
}

fn is_blank_actual(value: Option<&str>) -> bool {
    value.is_none_or(str::is_empty)
}

/// Compare one resolved expected value with its route value.
pub fn check_parameter(
    param: &ParamDescriptor,
    expected: &ArgValue,
    actual: Option<&str>,
) -> Result<(), RouteAssertionError> {
    if param.is_nullable() && is_blank_expected(expected) && is_blank_actual(actual) {
        return Ok(());
    }

    let matches = match expected {
        ArgValue::DateTime(expected_dt) => {
            actual.and_then(parse_route_date).as_ref() == Some(expected_dt)
        }
        _ => expected.to_text().as_deref() == actual,
    };

    if matches {
        Ok(())
    } else {
        Err(RouteAssertionError::ParameterMismatch {
            parameter: param.name().to_owned(),
            expected: expected.to_text().map(|t| t.into_owned()),
            actual: actual.map(str::to_owned),
        })
    }
}
