//! Submit-button enabling.
//!
//! Recomputed on every render from the state alone. It only decides whether
//! the submit control is enabled; whether a submission is accepted is the
//! validator's call. The two differ on purpose for passwords: any non-empty
//! password enables the button, but the validator still wants six characters.

use crate::state::FormState;
use crate::validation::rules::{
    is_filled, is_valid_aadhar, is_valid_email, is_valid_pan, is_valid_phone_number,
};

/// Whether the submit control should be enabled for `state`
pub fn can_submit(state: &FormState) -> bool {
    is_filled(&state.first_name)
        && is_filled(&state.last_name)
        && is_filled(&state.username)
        && is_valid_email(&state.email)
        && is_filled(&state.password)
        && is_filled(&state.phone_code)
        && is_valid_phone_number(&state.phone_number)
        && is_filled(&state.country)
        && is_filled(&state.city)
        && is_valid_pan(&state.pan)
        && is_valid_aadhar(&state.aadhar)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::field::Field;
    use crate::state::FormEvent;
    use crate::test_support::valid_state;
    use crate::validation::validate;
    use rstest::rstest;

    #[test]
    fn test_valid_state_enables_submit() {
        assert!(can_submit(&valid_state()));
    }

    #[test]
    fn test_blank_state_disables_submit() {
        assert!(!can_submit(&FormState::default()));
    }

    #[rstest]
    #[case(Field::FirstName, "")]
    #[case(Field::LastName, "")]
    #[case(Field::Username, "")]
    #[case(Field::Email, "a@b")]
    #[case(Field::Password, "")]
    #[case(Field::PhoneCode, "")]
    #[case(Field::PhoneNumber, "12345")]
    #[case(Field::City, "")]
    #[case(Field::Pan, "ABC")]
    #[case(Field::Aadhar, "1234 5678")]
    fn test_single_bad_field_disables_submit(#[case] field: Field, #[case] value: &str) {
        let state = valid_state().apply(FormEvent::changed(field, value));
        assert!(!can_submit(&state));
    }

    #[test]
    fn test_changing_country_disables_until_city_picked() {
        let state = valid_state().apply(FormEvent::changed(Field::Country, "India"));
        assert!(!can_submit(&state));
        let state = state.apply(FormEvent::changed(Field::City, "Delhi"));
        assert!(can_submit(&state));
    }

    #[test]
    fn test_short_password_enables_submit_but_fails_validation() {
        let state = valid_state().apply(FormEvent::changed(Field::Password, "abc"));
        assert!(can_submit(&state));
        assert!(validate(&state).contains(Field::Password));
    }

    #[test]
    fn test_gate_ignores_show_password() {
        let state = valid_state().apply(FormEvent::ShowPassword(true));
        assert!(can_submit(&state));
    }
}
