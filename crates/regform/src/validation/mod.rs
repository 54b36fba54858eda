// File: src/validation/mod.rs
// Purpose: Whole-form validation producing a per-field error set

use crate::field::Field;
use crate::state::FormState;
use serde::Serialize;
use std::collections::BTreeMap;

pub mod rules;

use rules::{
    is_filled, is_long_enough_password, is_valid_aadhar, is_valid_email, is_valid_pan,
    is_valid_phone_number,
};

/// Field names to error messages.
///
/// Rebuilt from scratch on every validation pass, so a field that has been
/// fixed simply drops out. Iterates in form order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ErrorSet {
    errors: BTreeMap<Field, String>,
}

impl ErrorSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Errors for `fields` with their standard messages, e.g. to redisplay
    /// the outcome of an earlier validation pass
    pub fn for_fields(fields: impl IntoIterator<Item = Field>) -> Self {
        let mut errors = Self::new();
        for field in fields {
            errors.insert(field, message(field));
        }
        errors
    }

    pub fn insert(&mut self, field: Field, message: impl Into<String>) {
        self.errors.insert(field, message.into());
    }

    /// An empty set is the only success signal
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn contains(&self, field: Field) -> bool {
        self.errors.contains_key(&field)
    }

    pub fn get(&self, field: Field) -> Option<&str> {
        self.errors.get(&field).map(String::as_str)
    }

    /// First message among `fields`, for inputs that share one error slot
    pub fn first_of(&self, fields: &[Field]) -> Option<&str> {
        fields.iter().find_map(|field| self.get(*field))
    }

    pub fn iter(&self) -> impl Iterator<Item = (Field, &str)> {
        self.errors.iter().map(|(field, message)| (*field, message.as_str()))
    }
}

/// Message shown when `field` fails its rule
pub fn message(field: Field) -> &'static str {
    match field {
        Field::FirstName => "First name is required.",
        Field::LastName => "Last name is required.",
        Field::Username => "Username is required.",
        Field::Email => "Valid email is required.",
        Field::Password => "Password must be at least 6 characters.",
        Field::PhoneCode => "Country code is required.",
        Field::PhoneNumber => "Valid 10-digit number is required.",
        Field::Country => "Country is required.",
        Field::City => "City is required.",
        Field::Pan => "PAN should be 10-11 alphanumeric characters.",
        Field::Aadhar => "Aadhar must be exactly 12 digits.",
    }
}

fn passes(field: Field, value: &str) -> bool {
    match field {
        Field::Email => is_valid_email(value),
        Field::Password => is_filled(value) && is_long_enough_password(value),
        Field::PhoneNumber => is_valid_phone_number(value),
        Field::Pan => is_valid_pan(value),
        Field::Aadhar => is_valid_aadhar(value),
        // city is only required here; membership in the country's list is
        // enforced by the select, not by validation
        Field::FirstName
        | Field::LastName
        | Field::Username
        | Field::PhoneCode
        | Field::Country
        | Field::City => is_filled(value),
    }
}

/// Check every field independently and collect the failures.
pub fn validate(state: &FormState) -> ErrorSet {
    let mut errors = ErrorSet::new();
    for field in Field::ALL {
        if !passes(field, state.value(field)) {
            errors.insert(field, message(field));
        }
    }
    errors
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::valid_state;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[test]
    fn test_valid_state_has_no_errors() {
        let errors = validate(&valid_state());
        assert!(errors.is_empty(), "unexpected errors: {:?}", errors);
    }

    #[test]
    fn test_blank_state_fails_every_field() {
        let errors = validate(&FormState::default());
        assert_eq!(errors.len(), Field::ALL.len());
        for field in Field::ALL {
            assert_eq!(errors.get(field), Some(message(field)));
        }
    }

    #[rstest]
    #[case("")]
    #[case("not-an-email")]
    #[case("a@b")]
    fn test_bad_email_only_flags_email(#[case] email: &str) {
        let state = FormState {
            email: email.to_string(),
            ..valid_state()
        };
        let errors = validate(&state);
        assert_eq!(errors.iter().collect::<Vec<_>>(), vec![(Field::Email, "Valid email is required.")]);
    }

    #[test]
    fn test_bad_email_does_not_mask_other_failures() {
        let state = FormState {
            email: "nope".to_string(),
            pan: "short".to_string(),
            ..valid_state()
        };
        let errors = validate(&state);
        assert!(errors.contains(Field::Email));
        assert!(errors.contains(Field::Pan));
        assert_eq!(errors.len(), 2);
    }

    #[test]
    fn test_short_password_rejected() {
        let state = FormState {
            password: "abc".to_string(),
            ..valid_state()
        };
        assert_eq!(
            validate(&state).get(Field::Password),
            Some("Password must be at least 6 characters.")
        );
    }

    #[rstest]
    #[case("😀😀😀", true)]
    #[case("😀😀", false)]
    fn test_password_length_counts_utf16_units(#[case] password: &str, #[case] ok: bool) {
        let state = FormState {
            password: password.to_string(),
            ..valid_state()
        };
        assert_eq!(!validate(&state).contains(Field::Password), ok);
    }

    #[test]
    fn test_city_outside_country_list_still_passes() {
        let state = FormState {
            country: "India".to_string(),
            city: "Chicago".to_string(),
            ..valid_state()
        };
        assert!(validate(&state).is_empty());
    }

    #[rstest]
    #[case("123456789012")]
    #[case("1234 5678 9012")]
    #[case(" 1234 56789012 ")]
    #[case("\u{FEFF}1234 5678 9012")]
    fn test_aadhar_whitespace_variants_validate_alike(#[case] aadhar: &str) {
        let state = FormState {
            aadhar: aadhar.to_string(),
            ..valid_state()
        };
        assert!(validate(&state).is_empty());
    }

    #[test]
    fn test_revalidation_drops_fixed_fields() {
        let mut state = FormState {
            username: String::new(),
            ..valid_state()
        };
        assert!(validate(&state).contains(Field::Username));
        state.username = "ab".to_string();
        assert!(validate(&state).is_empty());
    }

    #[test]
    fn test_first_of_prefers_earlier_field() {
        let errors = validate(&FormState {
            phone_code: String::new(),
            phone_number: "12".to_string(),
            ..valid_state()
        });
        assert_eq!(
            errors.first_of(&[Field::PhoneCode, Field::PhoneNumber]),
            Some("Country code is required.")
        );
    }

    #[test]
    fn test_for_fields_matches_validation() {
        let state = FormState {
            email: "x".to_string(),
            aadhar: "1".to_string(),
            ..valid_state()
        };
        assert_eq!(
            ErrorSet::for_fields([Field::Aadhar, Field::Email]),
            validate(&state)
        );
    }

    #[test]
    fn test_error_set_serializes_as_map() {
        let mut errors = ErrorSet::new();
        errors.insert(Field::PhoneNumber, "bad");
        let json = serde_json::to_string(&errors).unwrap();
        assert_eq!(json, r#"{"phoneNumber":"bad"}"#);
    }
}
