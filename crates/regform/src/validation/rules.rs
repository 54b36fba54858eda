// File: src/validation/rules.rs
// Purpose: Format predicates shared by the validator and the submission gate

use once_cell::sync::Lazy;
use regex::Regex;

/// Shortest password the validator accepts, in UTF-16 code units
pub const MIN_PASSWORD_LEN: usize = 6;

// Browser-side whitespace class. Differs from Unicode White_Space:
// U+FEFF is included, U+0085 and U+180E are not.
const WHITESPACE_CLASS: &str =
    r"\t\n\x0B\x0C\r \x{A0}\x{1680}\x{2000}-\x{200A}\x{2028}\x{2029}\x{202F}\x{205F}\x{3000}\x{FEFF}";

static WHITESPACE_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(&format!("[{}]+", WHITESPACE_CLASS)).unwrap());

// Loose on purpose: something@something.something, no whitespace, unanchored
static EMAIL_REGEX: Lazy<Regex> = Lazy::new(|| {
    let part = format!("[^{}]+", WHITESPACE_CLASS);
    Regex::new(&format!(r"{part}@{part}\.{part}")).unwrap()
});

// ASCII digits only; `\d` would also admit other Unicode decimal digits
static PHONE_NUMBER_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[0-9]{10}$").unwrap());

static PAN_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[A-Za-z0-9]{10,11}$").unwrap());

static AADHAR_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[0-9]{12}$").unwrap());

pub fn is_filled(value: &str) -> bool {
    !value.is_empty()
}

pub fn is_valid_email(email: &str) -> bool {
    EMAIL_REGEX.is_match(email)
}

/// Length is measured in UTF-16 code units, the way the browser counts it
pub fn is_long_enough_password(password: &str) -> bool {
    password.encode_utf16().count() >= MIN_PASSWORD_LEN
}

/// Exactly ten digits, no separators
pub fn is_valid_phone_number(number: &str) -> bool {
    PHONE_NUMBER_REGEX.is_match(number)
}

/// 10 or 11 alphanumerics. No checksum or positional rules.
pub fn is_valid_pan(pan: &str) -> bool {
    PAN_REGEX.is_match(pan)
}

/// Remove every whitespace character, wherever it appears
pub fn strip_whitespace(value: &str) -> String {
    WHITESPACE_REGEX.replace_all(value, "").into_owned()
}

/// Twelve digits once whitespace is stripped
pub fn is_valid_aadhar(aadhar: &str) -> bool {
    AADHAR_REGEX.is_match(&strip_whitespace(aadhar))
}
