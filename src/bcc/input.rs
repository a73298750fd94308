use crate::ids::AccountNumber;
use crate::Money;

use thiserror::Error;

/// Form values that are present but cannot become a typed request field
#[derive(Error, Debug, PartialEq, Eq)]
pub enum InputError {
    #[error("Invalid account number: {0:?}")]
    InvalidAccountNumber(String),

    #[error("Invalid amount: {0:?}")]
    InvalidAmount(String),
}

/// Presence check: blank values count as missing
pub fn any_missing(fields: &[&str]) -> bool {
    return fields.iter().any(|field| field.trim().is_empty());
}

pub fn parse_account_number(value: &str) -> Result<AccountNumber, InputError> {
    return value
        .parse()
        .map_err(|_| InputError::InvalidAccountNumber(value.to_string()));
}

pub fn parse_amount(value: &str) -> Result<Money, InputError> {
    return Money::parse(value).map_err(|e| {
        log::debug!("Rejected amount {value:?}: {e}");
        InputError::InvalidAmount(value.to_string())
    });
}
