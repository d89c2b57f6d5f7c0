//! Submit-time validation rules.
//!
//! Every rule runs on every submit; failures are collected into
//! `FieldErrors` rather than returned as `Err`. The rules are deliberately
//! lenient: the email check only looks for `@` and the phone check only
//! counts characters.

use std::fmt;

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};

use crate::field::FIELDS;
use crate::types::{FieldErrors, FormState};

pub const EMPLOYEE_ID_MAX_LEN: usize = 10;
pub const PHONE_NUMBER_LEN: usize = 10;

/// A single field check plus the message shown when it fails.
#[derive(Clone, Copy)]
pub struct Rule {
    pub message: &'static str,
    check: fn(&str, DateTime<Utc>) -> bool,
}

impl fmt::Debug for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Rule").field("message", &self.message).finish_non_exhaustive()
    }
}

impl Rule {
    /// `true` when `value` passes at instant `now`.
    pub fn passes(&self, value: &str, now: DateTime<Utc>) -> bool {
        (self.check)(value, now)
    }
}

pub const EMPLOYEE_ID: Rule = Rule {
    message: "Employee ID must be <= 10 characters",
    check: |v, _| !v.is_empty() && v.chars().count() <= EMPLOYEE_ID_MAX_LEN,
};

pub const EMAIL: Rule = Rule {
    message: "Valid Email is required",
    check: |v, _| v.contains('@'),
};

pub const PHONE_NUMBER: Rule = Rule {
    message: "Phone number must be 10 digits",
    check: |v, _| v.chars().count() == PHONE_NUMBER_LEN,
};

pub const DEPARTMENT: Rule = Rule {
    message: "Department is required",
    check: |v, _| !v.is_empty(),
};

pub const DATE_OF_JOINING: Rule = Rule {
    message: "Date cannot be in the future",
    check: date_not_in_future,
};

pub const ROLE: Rule = Rule {
    message: "Role is required",
    check: |v, _| !v.is_empty(),
};

// Unparseable dates have no instant to compare, so they pass.
fn date_not_in_future(value: &str, now: DateTime<Utc>) -> bool {
    if value.is_empty() {
        return false;
    }
    match parse_date(value) {
        Some(instant) => instant <= now,
        None => true,
    }
}

const LOCAL_DATE_TIME_FORMATS: [&str; 2] = ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%dT%H:%M"];

/// Interpret a date input. Date-only forms (`YYYY`, `YYYY-MM`, `YYYY-MM-DD`)
/// start at midnight UTC on the first day they name. An RFC 3339 timestamp
/// is taken as-is, and a date-time without an offset is read as UTC.
pub fn parse_date(value: &str) -> Option<DateTime<Utc>> {
    let value = value.trim();
    if value.len() == 4 && value.bytes().all(|b| b.is_ascii_digit()) {
        let year = value.parse().ok()?;
        return start_of_day(NaiveDate::from_ymd_opt(year, 1, 1)?);
    }
    if let Ok(date) = NaiveDate::parse_from_str(value, "%Y-%m-%d") {
        return start_of_day(date);
    }
    if let Ok(date) = NaiveDate::parse_from_str(&format!("{value}-01"), "%Y-%m-%d") {
        return start_of_day(date);
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(value) {
        return Some(dt.with_timezone(&Utc));
    }
    LOCAL_DATE_TIME_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(value, format).ok())
        .map(|dt| dt.and_utc())
}

fn start_of_day(date: NaiveDate) -> Option<DateTime<Utc>> {
    date.and_hms_opt(0, 0, 0).map(|dt| dt.and_utc())
}

/// Run every rule against `state` at instant `now`.
pub fn validate(state: &FormState, now: DateTime<Utc>) -> FieldErrors {
    let mut errors = FieldErrors::default();
    for spec in FIELDS.iter() {
        if let Some(rule) = spec.rule {
            if !rule.passes(state.get(spec.field), now) {
                errors.set(spec.field, rule.message);
            }
        }
    }
    errors
}
