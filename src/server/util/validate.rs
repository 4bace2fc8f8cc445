//! Input shape validation applied when request DTOs become service parameters.

use crate::server::error::AppError;

/// Trims a person's name, requires at least 2 characters and title-cases it.
///
/// Every letter that follows a non-letter starts a new word, so `"o'brien-smith"`
/// becomes `"O'Brien-Smith"`.
pub fn normalize_name(field: &str, value: &str) -> Result<String, AppError> {
    let trimmed = value.trim();
    if trimmed.chars().count() < 2 {
        return Err(AppError::BadRequest(format!(
            "{} must be at least 2 characters",
            field
        )));
    }

    let mut result = String::with_capacity(trimmed.len());
    let mut word_start = true;
    for c in trimmed.chars() {
        if c.is_alphabetic() {
            if word_start {
                result.extend(c.to_uppercase());
            } else {
                result.extend(c.to_lowercase());
            }
            word_start = false;
        } else {
            result.push(c);
            word_start = true;
        }
    }

    Ok(result)
}

/// Lower-cases an email and checks it has the shape `local@domain.tld`.
pub fn normalize_email(value: &str) -> Result<String, AppError> {
    let email = value.trim().to_lowercase();
    let invalid = || AppError::BadRequest(format!("Invalid email address: '{}'", value));

    let (local, domain) = email.split_once('@').ok_or_else(invalid)?;
    if local.is_empty() || domain.contains('@') || email.chars().any(char::is_whitespace) {
        return Err(invalid());
    }

    let (host, tld) = domain.rsplit_once('.').ok_or_else(invalid)?;
    if host.is_empty() || tld.len() < 2 || !tld.chars().all(|c| c.is_ascii_alphabetic()) {
        return Err(invalid());
    }

    Ok(email)
}

/// Strips spaces, dashes and parentheses from a phone number.
///
/// The remainder must be an optional `+`, an optional country code `1`, then 10 to 15 digits.
pub fn normalize_phone(value: &str) -> Result<String, AppError> {
    let phone: String = value
        .chars()
        .filter(|c| !matches!(c, ' ' | '-' | '(' | ')'))
        .collect();
    let invalid = || AppError::BadRequest(format!("Invalid phone number: '{}'", value));

    let digits = phone.strip_prefix('+').unwrap_or(&phone);
    if digits.is_empty() || !digits.chars().all(|c| c.is_ascii_digit()) {
        return Err(invalid());
    }

    // The optional country code may be absorbed into the 10-15 digit count.
    let valid_len = |n: usize| (10..=15).contains(&n);
    let accepted = valid_len(digits.len())
        || (digits.starts_with('1') && valid_len(digits.len() - 1));
    if !accepted {
        return Err(invalid());
    }

    Ok(phone)
}

/// Trims and upper-cases an airport code, rejecting empty input.
pub fn normalize_airport_code(field: &str, value: &str) -> Result<String, AppError> {
    let code = value.trim().to_uppercase();
    if code.is_empty() {
        return Err(AppError::BadRequest(format!("{} must not be empty", field)));
    }

    Ok(code)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn title_cases_names() {
        assert_eq!(normalize_name("first_name", "  jANE ").unwrap(), "Jane");
        assert_eq!(normalize_name("last_name", "o'brien-smith").unwrap(), "O'Brien-Smith");
        assert_eq!(normalize_name("first_name", "mary ann").unwrap(), "Mary Ann");
    }

    #[test]
    fn rejects_short_names() {
        assert!(matches!(
            normalize_name("first_name", " j "),
            Err(AppError::BadRequest(_))
        ));
        assert!(normalize_name("first_name", "").is_err());
    }

    #[test]
    fn lower_cases_emails() {
        assert_eq!(
            normalize_email(" Jane.Doe@Example.COM ").unwrap(),
            "jane.doe@example.com"
        );
    }

    #[test]
    fn rejects_malformed_emails() {
        for email in ["", "jane", "@example.com", "jane@", "jane@example", "jane@@x.com", "jane@x.c", "ja ne@x.com"] {
            assert!(normalize_email(email).is_err(), "expected '{}' to be rejected", email);
        }
    }

    #[test]
    fn strips_phone_formatting() {
        assert_eq!(normalize_phone("+1 (555) 123-4567").unwrap(), "+15551234567");
        assert_eq!(normalize_phone("555-123-4567").unwrap(), "5551234567");
        assert_eq!(normalize_phone("+44 20 7946 0958").unwrap(), "+442079460958");
    }

    #[test]
    fn rejects_bad_phones() {
        for phone in ["", "+", "12345", "555-CALL-NOW", "+1234567890123456789"] {
            assert!(normalize_phone(phone).is_err(), "expected '{}' to be rejected", phone);
        }
    }

    #[test]
    fn upper_cases_airport_codes() {
        assert_eq!(normalize_airport_code("departure_airport", " del ").unwrap(), "DEL");
        assert!(normalize_airport_code("arrival_airport", "  ").is_err());
    }
}
