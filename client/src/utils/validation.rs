/// Validation utilities for user input
use crate::core::error::{AppError, Result};

/// Largest single wallet top-up the client lets through, in rupees.
pub const MAX_TOP_UP_AMOUNT: f64 = 100_000.0;

pub const OTP_LENGTH: usize = 6;

pub struct ValidationResult {
    pub is_valid: bool,
    pub error: Option<String>,
}

impl ValidationResult {
    pub fn ok() -> Self {
        Self {
            is_valid: true,
            error: None,
        }
    }

    pub fn err(message: impl Into<String>) -> Self {
        Self {
            is_valid: false,
            error: Some(message.into()),
        }
    }

    /// Convert into a `Result` so handlers can bail out with `?`.
    pub fn into_result(self) -> Result<()> {
        if self.is_valid {
            Ok(())
        } else {
            Err(AppError::Validation(
                self.error.unwrap_or_else(|| "Invalid input".to_string()),
            ))
        }
    }
}

/// Validate a phone number in international format (`+` and 10-15 digits).
///
/// Indian numbers (`+91`) must have exactly 10 digits after the country code.
pub fn validate_phone(phone: &str) -> ValidationResult {
    if phone.is_empty() {
        return ValidationResult::err("Phone number is required");
    }

    let Some(digits) = phone.strip_prefix('+') else {
        return ValidationResult::err("Phone number must start with the country code, e.g. +91");
    };

    if !digits.chars().all(|c| c.is_ascii_digit()) {
        return ValidationResult::err("Phone number can only contain digits");
    }

    if digits.len() < 10 || digits.len() > 15 {
        return ValidationResult::err("Phone number must have 10 to 15 digits");
    }

    if let Some(local) = digits.strip_prefix("91") {
        if local.len() != 10 {
            return ValidationResult::err("Indian mobile numbers have 10 digits after +91");
        }
    }

    ValidationResult::ok()
}

/// Validate a one-time password
pub fn validate_otp(otp: &str) -> ValidationResult {
    if otp.is_empty() {
        return ValidationResult::err("OTP is required");
    }

    if otp.len() != OTP_LENGTH || !otp.chars().all(|c| c.is_ascii_digit()) {
        return ValidationResult::err(format!("OTP must be {} digits", OTP_LENGTH));
    }

    ValidationResult::ok()
}

/// Validate a cart quantity (zero is handled as "remove" by the cart screen)
pub fn validate_quantity(quantity: u32) -> ValidationResult {
    if quantity == 0 {
        return ValidationResult::err("Quantity must be at least 1");
    }

    ValidationResult::ok()
}

/// Validate a wallet top-up amount
pub fn validate_top_up_amount(amount: f64) -> ValidationResult {
    if !amount.is_finite() || amount <= 0.0 {
        return ValidationResult::err("Amount must be greater than 0");
    }

    if amount > MAX_TOP_UP_AMOUNT {
        return ValidationResult::err(format!(
            "Amount cannot exceed {}",
            shared::utils::format_price(MAX_TOP_UP_AMOUNT)
        ));
    }

    ValidationResult::ok()
}

/// Validate a delivery address
pub fn validate_address(address: &str) -> ValidationResult {
    if address.trim().is_empty() {
        return ValidationResult::err("Delivery address is required");
    }

    ValidationResult::ok()
}

/// Validate email format
pub fn validate_email(email: &str) -> ValidationResult {
    if email.is_empty() {
        return ValidationResult::err("Email is required");
    }

    let Some((user, domain)) = email.split_once('@') else {
        return ValidationResult::err("Invalid email format");
    };

    if user.is_empty() {
        return ValidationResult::err("Email username cannot be empty");
    }

    if domain.is_empty() || domain.contains('@') || !domain.contains('.') {
        return ValidationResult::err("Invalid email domain");
    }

    ValidationResult::ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_phone_validation() {
        assert!(validate_phone("+919876543210").is_valid);
        assert!(validate_phone("+14155552671").is_valid);
        assert!(!validate_phone("").is_valid);
        assert!(!validate_phone("9876543210").is_valid); // no country code
        assert!(!validate_phone("+91 98765 43210").is_valid);
        assert!(!validate_phone("+9198765").is_valid); // too short
        assert!(!validate_phone("+91987654321").is_valid); // 9 local digits
    }

    #[test]
    fn test_otp_validation() {
        assert!(validate_otp("123456").is_valid);
        assert!(!validate_otp("").is_valid);
        assert!(!validate_otp("12345").is_valid);
        assert!(!validate_otp("12a456").is_valid);
    }

    #[test]
    fn test_quantity_validation() {
        assert!(validate_quantity(1).is_valid);
        assert!(!validate_quantity(0).is_valid);
    }

    #[test]
    fn test_top_up_validation() {
        assert!(validate_top_up_amount(500.0).is_valid);
        assert!(!validate_top_up_amount(0.0).is_valid);
        assert!(!validate_top_up_amount(-10.0).is_valid);
        assert!(!validate_top_up_amount(f64::NAN).is_valid);
        assert!(!validate_top_up_amount(MAX_TOP_UP_AMOUNT + 1.0).is_valid);
    }

    #[test]
    fn test_email_validation() {
        assert!(validate_email("test@example.com").is_valid);
        assert!(!validate_email("invalid").is_valid);
        assert!(!validate_email("@example.com").is_valid);
        assert!(!validate_email("test@").is_valid);
    }

    #[test]
    fn test_into_result() {
        assert!(validate_address("12 MG Road").into_result().is_ok());
        assert_eq!(
            validate_address("  ").into_result(),
            Err(AppError::Validation("Delivery address is required".to_string()))
        );
    }
}
