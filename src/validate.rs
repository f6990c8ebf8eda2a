//! Form Validation
//!
//! Pure field checks shared by the auth and checkout forms. Validation runs
//! before any network call; a non-empty error map blocks submission and
//! annotates the offending fields.

use std::collections::HashMap;

/// Field name -> message for the fields that failed
pub type FieldErrors = HashMap<&'static str, String>;

/// Loose email shape: something@something.something, no whitespace
pub fn valid_email(email: &str) -> bool {
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    let Some((host, tld)) = domain.rsplit_once('.') else {
        return false;
    };
    let no_whitespace = |s: &str| !s.is_empty() && !s.chars().any(char::is_whitespace);
    no_whitespace(local) && no_whitespace(host) && no_whitespace(tld) && !host.contains('@')
}

/// Exactly five ASCII digits
pub fn valid_zip(zip: &str) -> bool {
    zip.len() == 5 && zip.chars().all(|c| c.is_ascii_digit())
}

/// Sixteen digits once spaces are stripped
pub fn valid_card_number(card: &str) -> bool {
    let digits: String = card.chars().filter(|c| !c.is_whitespace()).collect();
    digits.len() == 16 && digits.chars().all(|c| c.is_ascii_digit())
}

/// MM/YY
pub fn valid_expiry(expiry: &str) -> bool {
    let Some((month, year)) = expiry.split_once('/') else {
        return false;
    };
    month.len() == 2
        && year.len() == 2
        && month.chars().all(|c| c.is_ascii_digit())
        && year.chars().all(|c| c.is_ascii_digit())
}

/// Three or four digits
pub fn valid_cvv(cvv: &str) -> bool {
    (cvv.len() == 3 || cvv.len() == 4) && cvv.chars().all(|c| c.is_ascii_digit())
}

/// Local state of the shipping form
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ShippingForm {
    pub full_name: String,
    pub address: String,
    pub city: String,
    pub state: String,
    pub zip: String,
    pub country: String,
}

/// Local state of the payment form
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PaymentForm {
    pub card_name: String,
    pub card_number: String,
    pub expiry: String,
    pub cvv: String,
}

impl PaymentForm {
    /// Last four digits of the card number, the only digits ever transmitted
    pub fn last4(&self) -> String {
        let digits: String = self.card_number.chars().filter(|c| !c.is_whitespace()).collect();
        let start = digits.len().saturating_sub(4);
        digits[start..].to_string()
    }
}

/// Validate both checkout forms together
pub fn validate_checkout(shipping: &ShippingForm, payment: &PaymentForm) -> FieldErrors {
    let mut errors = FieldErrors::new();

    if shipping.full_name.trim().is_empty() {
        errors.insert("full_name", "Full name is required".to_string());
    }
    if shipping.address.trim().is_empty() {
        errors.insert("address", "Address is required".to_string());
    }
    if shipping.city.trim().is_empty() {
        errors.insert("city", "City is required".to_string());
    }
    if shipping.state.trim().is_empty() {
        errors.insert("state", "State is required".to_string());
    }
    if shipping.zip.trim().is_empty() {
        errors.insert("zip", "ZIP code is required".to_string());
    } else if !valid_zip(&shipping.zip) {
        errors.insert("zip", "Invalid ZIP code (5 digits)".to_string());
    }
    if shipping.country.trim().is_empty() {
        errors.insert("country", "Country is required".to_string());
    }

    if payment.card_name.trim().is_empty() {
        errors.insert("card_name", "Name on card is required".to_string());
    }
    if payment.card_number.trim().is_empty() {
        errors.insert("card_number", "Card number is required".to_string());
    } else if !valid_card_number(&payment.card_number) {
        errors.insert("card_number", "Invalid card number (16 digits)".to_string());
    }
    if payment.expiry.trim().is_empty() {
        errors.insert("expiry", "Expiry date is required".to_string());
    } else if !valid_expiry(&payment.expiry) {
        errors.insert("expiry", "Invalid expiry date (MM/YY)".to_string());
    }
    if payment.cvv.trim().is_empty() {
        errors.insert("cvv", "CVV is required".to_string());
    } else if !valid_cvv(&payment.cvv) {
        errors.insert("cvv", "Invalid CVV (3-4 digits)".to_string());
    }

    errors
}

/// Validate the signup form
pub fn validate_signup(name: &str, email: &str, password: &str) -> FieldErrors {
    let mut errors = FieldErrors::new();

    if name.is_empty() {
        errors.insert("name", "Name is required".to_string());
    }
    if email.is_empty() {
        errors.insert("email", "Email is required".to_string());
    } else if !valid_email(email) {
        errors.insert("email", "Invalid email".to_string());
    }
    if password.is_empty() {
        errors.insert("password", "Password is required".to_string());
    } else if password.len() < 6 {
        errors.insert("password", "Password must be at least 6 characters".to_string());
    }

    errors
}

/// Validate a login form (customer and staff alike)
pub fn validate_login(email: &str, password: &str) -> FieldErrors {
    let mut errors = FieldErrors::new();

    if email.is_empty() {
        errors.insert("email", "Email is required".to_string());
    } else if !valid_email(email) {
        errors.insert("email", "Invalid email".to_string());
    }
    if password.is_empty() {
        errors.insert("password", "Password is required".to_string());
    }

    errors
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_email() {
        assert!(valid_email("ada@example.com"));
        assert!(valid_email("a@b.c"));
        assert!(!valid_email("ada@example"));
        assert!(!valid_email("ada example@x.com"));
        assert!(!valid_email("@example.com"));
        assert!(!valid_email(""));
    }

    #[test]
    fn test_valid_zip() {
        assert!(valid_zip("90210"));
        assert!(!valid_zip("9021"));
        assert!(!valid_zip("902101"));
        assert!(!valid_zip("9021a"));
    }

    #[test]
    fn test_card_number_allows_spaces() {
        assert!(valid_card_number("4242424242424242"));
        assert!(valid_card_number("4242 4242 4242 4242"));
    }

    #[test]
    fn test_fifteen_digit_card_is_blocked() {
        let shipping = ShippingForm {
            full_name: "Ada Lovelace".to_string(),
            address: "1 Analytical Way".to_string(),
            city: "London".to_string(),
            state: "LDN".to_string(),
            zip: "12345".to_string(),
            country: "UK".to_string(),
        };
        let payment = PaymentForm {
            card_name: "Ada Lovelace".to_string(),
            card_number: "424242424242424".to_string(),
            expiry: "12/30".to_string(),
            cvv: "123".to_string(),
        };
        let errors = validate_checkout(&shipping, &payment);
        assert_eq!(errors.len(), 1);
        assert_eq!(errors["card_number"], "Invalid card number (16 digits)");
    }

    #[test]
    fn test_checkout_requires_every_field() {
        let errors = validate_checkout(&ShippingForm::default(), &PaymentForm::default());
        for field in [
            "full_name", "address", "city", "state", "zip", "country",
            "card_name", "card_number", "expiry", "cvv",
        ] {
            assert!(errors.contains_key(field), "missing error for {}", field);
        }
    }

    #[test]
    fn test_valid_checkout_passes() {
        let shipping = ShippingForm {
            full_name: "Ada Lovelace".to_string(),
            address: "1 Analytical Way".to_string(),
            city: "London".to_string(),
            state: "LDN".to_string(),
            zip: "12345".to_string(),
            country: "UK".to_string(),
        };
        let payment = PaymentForm {
            card_name: "Ada Lovelace".to_string(),
            card_number: "4242 4242 4242 4242".to_string(),
            expiry: "12/30".to_string(),
            cvv: "1234".to_string(),
        };
        assert!(validate_checkout(&shipping, &payment).is_empty());
    }

    #[test]
    fn test_expiry_and_cvv() {
        assert!(valid_expiry("01/27"));
        assert!(!valid_expiry("1/27"));
        assert!(!valid_expiry("0127"));
        assert!(valid_cvv("123"));
        assert!(valid_cvv("1234"));
        assert!(!valid_cvv("12"));
        assert!(!valid_cvv("12a"));
    }

    #[test]
    fn test_payment_last4() {
        let payment = PaymentForm {
            card_number: "4242 4242 4242 4242".to_string(),
            ..Default::default()
        };
        assert_eq!(payment.last4(), "4242");
    }

    #[test]
    fn test_signup_password_length() {
        let errors = validate_signup("Ada", "ada@example.com", "12345");
        assert_eq!(errors["password"], "Password must be at least 6 characters");
        assert!(validate_signup("Ada", "ada@example.com", "123456").is_empty());
    }

    #[test]
    fn test_login_requires_fields() {
        let errors = validate_login("", "");
        assert!(errors.contains_key("email"));
        assert!(errors.contains_key("password"));
        assert!(validate_login("ada@example.com", "secret").is_empty());
    }
}
