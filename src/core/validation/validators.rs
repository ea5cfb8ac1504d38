//! Reusable field validators and the order rule set
//!
//! Each validator takes an optional (already coerced) value and returns the
//! message to report when the rule fails. A missing value always fails.

use super::candidate::OrderCandidate;
use super::filters;
use crate::core::error::FieldErrors;
use crate::core::order::OrderStatus;
use regex::Regex;
use std::sync::OnceLock;

/// Minimum length of an order number
pub const ORDER_NUMBER_MIN_CHARS: usize = 6;

pub const ORDER_NUMBER_MESSAGE: &str = "Required, at least 6 characters.";
pub const CUSTOMER_MESSAGE: &str = "Required.";
pub const STATUS_MESSAGE: &str = "Value not allowed.";
pub const DUE_DATE_MESSAGE: &str = "Expected format YYYY-MM-DD.";
pub const TOTAL_GROSS_MESSAGE: &str = "Amount must be greater than 0.";

/// Validator: string present with at least `min` characters
pub fn min_chars(
    min: usize,
    message: &'static str,
) -> impl Fn(Option<&str>) -> Result<(), &'static str> + Send + Sync + Clone {
    move |value: Option<&str>| match value {
        Some(s) if s.chars().count() >= min => Ok(()),
        _ => Err(message),
    }
}

/// Validator: string present and not blank after trimming
pub fn not_blank(
    message: &'static str,
) -> impl Fn(Option<&str>) -> Result<(), &'static str> + Send + Sync + Clone {
    move |value: Option<&str>| match value {
        Some(s) if !filters::trim(s).is_empty() => Ok(()),
        _ => Err(message),
    }
}

/// Validator: string present and one of the order statuses
pub fn known_status(
    message: &'static str,
) -> impl Fn(Option<&str>) -> Result<(), &'static str> + Send + Sync + Clone {
    move |value: Option<&str>| match value.map(str::parse::<OrderStatus>) {
        Some(Ok(_)) => Ok(()),
        _ => Err(message),
    }
}

/// Validator: string present and shaped like `YYYY-MM-DD`
///
/// Only the shape is checked; `2025-13-40` passes.
pub fn date_pattern(
    message: &'static str,
) -> impl Fn(Option<&str>) -> Result<(), &'static str> + Send + Sync + Clone {
    move |value: Option<&str>| match value {
        Some(s) if date_regex().is_match(s) => Ok(()),
        _ => Err(message),
    }
}

/// Validator: number present and strictly positive
pub fn positive(
    message: &'static str,
) -> impl Fn(Option<f64>) -> Result<(), &'static str> + Send + Sync + Clone {
    move |value: Option<f64>| match value {
        Some(n) if n > 0.0 => Ok(()),
        _ => Err(message),
    }
}

fn date_regex() -> &'static Regex {
    static DATE_REGEX: OnceLock<Regex> = OnceLock::new();
    DATE_REGEX.get_or_init(|| Regex::new(r"^[0-9]{4}-[0-9]{2}-[0-9]{2}$").unwrap())
}

/// Run every order rule against `candidate`
///
/// All rules are evaluated; the result holds one entry per failing field and
/// is empty when the candidate is valid.
pub fn validate(candidate: &OrderCandidate) -> FieldErrors {
    let mut errors = FieldErrors::new();

    let checks = [
        (
            "orderNumber",
            min_chars(ORDER_NUMBER_MIN_CHARS, ORDER_NUMBER_MESSAGE)(
                candidate.order_number.as_deref(),
            ),
        ),
        (
            "customer",
            not_blank(CUSTOMER_MESSAGE)(candidate.customer.as_deref()),
        ),
        (
            "status",
            known_status(STATUS_MESSAGE)(candidate.status.as_deref()),
        ),
        (
            "dueDate",
            date_pattern(DUE_DATE_MESSAGE)(candidate.due_date.as_deref()),
        ),
        (
            "totalGross",
            positive(TOTAL_GROSS_MESSAGE)(candidate.total_gross),
        ),
    ];

    for (field, outcome) in checks {
        if let Err(message) = outcome {
            errors.insert(field, message);
        }
    }

    errors
}
