use crate::state::FormState;

/// A fully valid registration, aadhar typed with spaces
pub(crate) fn valid_state() -> FormState {
    FormState {
        first_name: "A".to_string(),
        last_name: "B".to_string(),
        username: "ab".to_string(),
        email: "a@b.co".to_string(),
        password: "secret1".to_string(),
        show_password: false,
        phone_code: "+1".to_string(),
        phone_number: "1234567890".to_string(),
        country: "USA".to_string(),
        city: "Chicago".to_string(),
        pan: "ABCDE12345".to_string(),
        aadhar: "1234 5678 9012".to_string(),
    }
}
