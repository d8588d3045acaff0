//! Parsing of the free-text replies users type after a prompt.

use std::str::FromStr;

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use thiserror::Error;

use crate::models::Rate;

pub const MAX_RATE: Decimal = dec!(1000000);
pub const MAX_HOURS: Decimal = dec!(10000);
pub const MAX_DAYS: u32 = 10_000;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InputError {
    #[error("not a number: {0:?}")]
    NotANumber(String),
    #[error("not a whole number: {0:?}")]
    NotAWholeNumber(String),
    #[error("expected {expected} values, got {found}")]
    WrongArity { expected: usize, found: usize },
    #[error("value must be greater than zero")]
    NotPositive,
    #[error("value must not be negative")]
    Negative,
    #[error("value is larger than {max}")]
    TooLarge { max: Decimal },
}

/// Parses a decimal number, accepting `,` as the decimal separator.
pub fn parse_decimal(text: &str) -> Result<Decimal, InputError> {
    let text = text.trim();
    Decimal::from_str(&text.replace(',', "."))
        .map_err(|_| InputError::NotANumber(text.to_string()))
}

pub fn parse_rate(text: &str) -> Result<Rate, InputError> {
    let value = parse_decimal(text)?;
    if value > MAX_RATE {
        return Err(InputError::TooLarge { max: MAX_RATE });
    }
    Rate::new(value).ok_or(InputError::NotPositive)
}

pub fn parse_hours(text: &str) -> Result<Decimal, InputError> {
    let hours = parse_decimal(text)?;
    if hours < Decimal::ZERO {
        return Err(InputError::Negative);
    }
    if hours > MAX_HOURS {
        return Err(InputError::TooLarge { max: MAX_HOURS });
    }
    Ok(hours)
}

/// Parses a non-negative day count.
pub fn parse_days(text: &str) -> Result<u32, InputError> {
    let text = text.trim();
    let days: i64 = text
        .parse()
        .map_err(|_| InputError::NotAWholeNumber(text.to_string()))?;
    if days < 0 {
        return Err(InputError::Negative);
    }
    match u32::try_from(days) {
        Ok(days) if days <= MAX_DAYS => Ok(days),
        _ => Err(InputError::TooLarge {
            max: Decimal::from(MAX_DAYS),
        }),
    }
}

/// Parses the `OT1 OT2 OT3` day counts of a weekday reply.
pub fn parse_weekday_days(text: &str) -> Result<[u32; 3], InputError> {
    let parts: Vec<&str> = text.split_whitespace().collect();
    if parts.len() != 3 {
        return Err(InputError::WrongArity {
            expected: 3,
            found: parts.len(),
        });
    }

    let mut days = [0; 3];
    for (slot, part) in days.iter_mut().zip(parts) {
        *slot = parse_days(part)?;
    }
    Ok(days)
}
