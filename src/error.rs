// ❗ Domain errors
// Capability methods never fail; only account validation has a typed error.

use thiserror::Error;

/// Reasons a bank account is rejected before it reaches storage
#[derive(Debug, Clone, PartialEq, Error)]
pub enum AccountError {
    /// Holder name is empty or whitespace
    #[error("account holder must not be empty")]
    EmptyHolder,

    /// Balance is NaN or infinite
    #[error("account balance must be a finite number (got {balance})")]
    NonFiniteBalance { balance: f64 },

    /// Opening balance below zero
    #[error("account balance must not be negative (got {balance:.2})")]
    NegativeBalance { balance: f64 },
}

/// Shared validation used by both SRP variants
pub fn validate_account_fields(holder: &str, balance: f64) -> Result<(), AccountError> {
    if holder.trim().is_empty() {
        return Err(AccountError::EmptyHolder);
    }

    if !balance.is_finite() {
        return Err(AccountError::NonFiniteBalance { balance });
    }

    if balance < 0.0 {
        return Err(AccountError::NegativeBalance { balance });
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_fields() {
        assert_eq!(validate_account_fields("Maria", 1200.0), Ok(()));
        assert_eq!(validate_account_fields("Maria", 0.0), Ok(()));
    }

    #[test]
    fn test_empty_holder_rejected() {
        assert_eq!(
            validate_account_fields("   ", 10.0),
            Err(AccountError::EmptyHolder)
        );
    }

    #[test]
    fn test_non_finite_balance_rejected() {
        for balance in [f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
            let err = validate_account_fields("Maria", balance).unwrap_err();
            assert!(matches!(err, AccountError::NonFiniteBalance { .. }));
        }

        let err = validate_account_fields("Maria", f64::NAN).unwrap_err();
        assert_eq!(
            err.to_string(),
            "account balance must be a finite number (got NaN)"
        );
    }

    #[test]
    fn test_negative_balance_message() {
        let err = validate_account_fields("Maria", -5.5).unwrap_err();
        assert_eq!(err, AccountError::NegativeBalance { balance: -5.5 });
        assert_eq!(
            err.to_string(),
            "account balance must not be negative (got -5.50)"
        );
    }
}
