use rust_decimal::Decimal;
use thiserror::Error;

/// Error returned when a string cannot be parsed as an amount.
#[derive(Debug, Error)]
pub enum ParseAmountError {
    #[error("amount is empty")]
    Empty,

    #[error("invalid amount '{input}': {source}")]
    Invalid {
        input: String,
        #[source]
        source: rust_decimal::Error,
    },

    #[error("amount '{0}' is negative")]
    Negative(String),
}

/// Normalizes input for decimal parsing: trims whitespace and removes commas (thousands separator).
fn normalize_amount_input(s: &str) -> String {
    s.trim().replace(',', "")
}

/// Parses a non-negative money amount.
///
/// Handles comma as thousands separator (e.g. `"50,000"`). Unlike form
/// fields, an empty amount is an error rather than zero.
pub fn parse_amount(s: &str) -> Result<Decimal, ParseAmountError> {
    let normalized = normalize_amount_input(s);
    if normalized.is_empty() {
        return Err(ParseAmountError::Empty);
    }

    let amount: Decimal = normalized.parse().map_err(|e| {
        tracing::debug!(input = %s, "invalid amount: {}", e);
        ParseAmountError::Invalid {
            input: s.to_string(),
            source: e,
        }
    })?;

    if amount.is_sign_negative() && !amount.is_zero() {
        return Err(ParseAmountError::Negative(s.to_string()));
    }
    Ok(amount)
}

/// Upper-cases and trims a jurisdiction or region code given on the command line.
pub fn parse_code(s: &str) -> Result<String, String> {
    let code = s.trim().to_ascii_uppercase();
    if code.is_empty() {
        Err("code must not be empty".to_string())
    } else {
        Ok(code)
    }
}
