//! Client-side field validation. Mirrors the constraints the backend
//! enforces; the backend stays the validator of record.

use std::collections::HashMap;

use once_cell::sync::Lazy;
use regex::Regex;

/// Per-field error messages, keyed by field name.
pub type FieldErrors = HashMap<&'static str, String>;

static EMAIL_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\S+@\S+\.\S+$").unwrap());
static ALPHA_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[A-Za-z]+$").unwrap());
static ALPHA_SPACE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[a-zA-Z\s]+$").unwrap());
static PRICE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\d+(\.\d{1,2})?$").unwrap());
static MOBILE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\d{10}$").unwrap());

fn check_email(errors: &mut FieldErrors, email: &str) {
    if email.is_empty() {
        errors.insert("email", "Email is required".into());
    } else if !EMAIL_RE.is_match(email) {
        errors.insert("email", "Email is invalid".into());
    }
}

fn check_password(errors: &mut FieldErrors, password: &str) {
    if password.is_empty() {
        errors.insert("password", "Password is required".into());
    } else if password.len() < 6 {
        errors.insert("password", "Password must be at least 6 characters".into());
    }
}

pub fn validate_login(email: &str, password: &str) -> FieldErrors {
    let mut errors = FieldErrors::new();
    check_email(&mut errors, email);
    check_password(&mut errors, password);
    errors
}

pub fn validate_register(
    first_name: &str,
    last_name: &str,
    email: &str,
    password: &str,
    mobile: &str,
    gender: &str,
) -> FieldErrors {
    let mut errors = FieldErrors::new();

    if first_name.is_empty() {
        errors.insert("firstName", "First name is required".into());
    } else if !ALPHA_RE.is_match(first_name) {
        errors.insert("firstName", "First name is invalid".into());
    }

    if last_name.is_empty() {
        errors.insert("lastName", "Last name is required".into());
    } else if !ALPHA_RE.is_match(last_name) {
        errors.insert("lastName", "Last name is invalid".into());
    }

    check_email(&mut errors, email);
    check_password(&mut errors, password);

    if mobile.is_empty() {
        errors.insert("mobile", "Mobile number is required".into());
    } else if !MOBILE_RE.is_match(mobile) {
        errors.insert("mobile", "Mobile number must be 10 digits".into());
    }

    if gender.is_empty() {
        errors.insert("gender", "Gender is required".into());
    }

    errors
}

/// Image uploads are limited to jpeg / png, checked on the extension.
pub fn has_allowed_extension(file_name: &str) -> bool {
    file_name
        .rsplit('.')
        .next()
        .map(|ext| {
            let ext = ext.to_ascii_lowercase();
            ext == "jpeg" || ext == "png"
        })
        .unwrap_or(false)
}

/// `file_name` is the selected upload, if any. A file is mandatory when
/// creating a product and optional when updating one.
pub fn validate_product(
    name: &str,
    price: &str,
    description: &str,
    file_name: Option<&str>,
    is_update: bool,
) -> FieldErrors {
    let mut errors = FieldErrors::new();

    if !ALPHA_SPACE_RE.is_match(name) {
        errors.insert("name", "Name should contain only alphabets".into());
    }

    if !PRICE_RE.is_match(price) {
        errors.insert("price", "Price should be a decimal value".into());
    }

    if !ALPHA_SPACE_RE.is_match(description) {
        errors.insert("description", "Description should contain only alphabets".into());
    }

    match file_name {
        Some(name) if !has_allowed_extension(name) => {
            errors.insert("file", "File should be in jpeg or png format".into());
        }
        None if !is_update => {
            errors.insert("file", "File is required".into());
        }
        _ => {}
    }

    errors
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn login_accepts_plausible_credentials() {
        assert!(validate_login("a@b.com", "secret1").is_empty());
    }

    #[test]
    fn login_rejects_malformed_email() {
        let errors = validate_login("not-an-email", "secret1");
        assert_eq!(errors.get("email").unwrap(), "Email is invalid");
    }

    #[test]
    fn login_requires_six_character_password() {
        let errors = validate_login("a@b.com", "short");
        assert_eq!(
            errors.get("password").unwrap(),
            "Password must be at least 6 characters"
        );
    }

    #[test]
    fn empty_fields_are_reported_as_required() {
        let errors = validate_login("", "");
        assert_eq!(errors.get("email").unwrap(), "Email is required");
        assert_eq!(errors.get("password").unwrap(), "Password is required");
    }

    #[test]
    fn register_checks_every_field() {
        let errors = validate_register("Ada", "Lovelace", "ada@example.com", "secret1", "0123456789", "Female");
        assert!(errors.is_empty());

        let errors = validate_register("Ada1", "", "ada@example.com", "secret1", "12345", "");
        assert_eq!(errors.get("firstName").unwrap(), "First name is invalid");
        assert_eq!(errors.get("lastName").unwrap(), "Last name is required");
        assert_eq!(errors.get("mobile").unwrap(), "Mobile number must be 10 digits");
        assert_eq!(errors.get("gender").unwrap(), "Gender is required");
    }

    #[test]
    fn mobile_must_be_exactly_ten_digits() {
        let errors = validate_register("Ada", "Lovelace", "a@b.com", "secret1", "01234567890", "Other");
        assert!(errors.contains_key("mobile"));
    }

    #[test]
    fn price_allows_up_to_two_decimals() {
        assert!(validate_product("Mug", "9", "Ceramic mug", Some("m.png"), false).is_empty());
        assert!(validate_product("Mug", "9.99", "Ceramic mug", Some("m.png"), false).is_empty());
        assert!(validate_product("Mug", "9.999", "Ceramic mug", Some("m.png"), false)
            .contains_key("price"));
        assert!(validate_product("Mug", "-1", "Ceramic mug", Some("m.png"), false)
            .contains_key("price"));
    }

    #[test]
    fn product_file_rules_differ_between_create_and_update() {
        let create = validate_product("Mug", "9.99", "Ceramic mug", None, false);
        assert_eq!(create.get("file").unwrap(), "File is required");

        let update = validate_product("Mug", "9.99", "Ceramic mug", None, true);
        assert!(update.is_empty());

        let bad_ext = validate_product("Mug", "9.99", "Ceramic mug", Some("mug.gif"), true);
        assert_eq!(bad_ext.get("file").unwrap(), "File should be in jpeg or png format");
    }

    #[test]
    fn extension_check_is_case_insensitive() {
        assert!(has_allowed_extension("photo.JPEG"));
        assert!(has_allowed_extension("photo.Png"));
        assert!(!has_allowed_extension("photo.jpg"));
        assert!(!has_allowed_extension("photo"));
    }
}
