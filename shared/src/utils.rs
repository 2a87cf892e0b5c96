//! # Shared Utility Functions
//!
//! Display helpers used by the client when rendering snapshots and when
//! writing log lines.
//!
//! ## Usage
//!
//! ```rust
//! use shared::utils::{format_price, mask_phone};
//!
//! assert_eq!(format_price(250.0), "₹250.00");
//! assert_eq!(mask_phone("+919876543210"), "+91******3210");
//! ```

/// Format an amount in rupees with two decimals.
///
/// # Examples
///
/// ```rust
/// use shared::utils::format_price;
///
/// assert_eq!(format_price(99.5), "₹99.50");
/// assert_eq!(format_price(-20.0), "-₹20.00");
/// ```
pub fn format_price(amount: f64) -> String {
    if amount < 0.0 {
        format!("-₹{:.2}", -amount)
    } else {
        format!("₹{:.2}", amount)
    }
}

/// Mask a phone number for logs, keeping the first `prefix_len` and last
/// `suffix_len` characters.
///
/// Numbers too short to keep both ends are masked completely.
pub fn mask_phone_with(phone: &str, prefix_len: usize, suffix_len: usize) -> String {
    let chars: Vec<char> = phone.chars().collect();
    if chars.len() <= prefix_len + suffix_len {
        return "*".repeat(chars.len());
    }

    let hidden = chars.len() - prefix_len - suffix_len;
    let prefix: String = chars.iter().take(prefix_len).collect();
    let suffix: String = chars.iter().skip(prefix_len + hidden).collect();
    format!("{}{}{}", prefix, "*".repeat(hidden), suffix)
}

/// Mask a phone number keeping the country code (3 characters) and the last
/// 4 digits.
pub fn mask_phone(phone: &str) -> String {
    mask_phone_with(phone, 3, 4)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_price() {
        assert_eq!(format_price(250.0), "₹250.00");
        assert_eq!(format_price(0.0), "₹0.00");
        assert_eq!(format_price(12.346), "₹12.35");
        assert_eq!(format_price(-5.5), "-₹5.50");
    }

    #[test]
    fn test_mask_phone() {
        assert_eq!(mask_phone("+919876543210"), "+91******3210");
        assert_eq!(mask_phone_with("9876543210", 2, 2), "98******10");
    }

    #[test]
    fn test_mask_phone_short() {
        assert_eq!(mask_phone("12345"), "*****");
        assert_eq!(mask_phone(""), "");
    }
}
