use rust_decimal::Decimal;
use validator::ValidationError;

use crate::model::derived::round_money;

pub const NAME_MAX_CHARS: usize = 255;

/// DECIMAL(10,2) leaves eight integer digits.
pub fn money_ceiling() -> Decimal {
    Decimal::from(100_000_000)
}

pub fn validate_name(name: &str) -> Result<(), ValidationError> {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::new("name_empty"));
    }
    if trimmed.chars().count() > NAME_MAX_CHARS {
        return Err(ValidationError::new("name_too_long"));
    }
    Ok(())
}

/// Checks the value as it will be stored, after rounding to cents.
pub fn validate_money(value: &Decimal) -> Result<(), ValidationError> {
    let stored = round_money(*value);
    if stored.is_sign_negative() && !stored.is_zero() {
        return Err(ValidationError::new("amount_negative"));
    }
    if stored >= money_ceiling() {
        return Err(ValidationError::new("amount_too_large"));
    }
    Ok(())
}
