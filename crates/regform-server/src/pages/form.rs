// File: src/pages/form.rs
// Purpose: Registration form page, the form fragment and the out-of-band status update

use maud::{html, Markup};
use regform::state::SHOW_PASSWORD;
use regform::{Field, FormView, Route};

use crate::request::FAILED_INPUT;

/// Endpoint receiving change events
pub const CHANGE_PATH: &str = "/form/change";

const FORM_TARGET: &str = "#registration-form";

const SUBMIT_ID: &str = "submit-button";
const PHONE_ERROR_ID: &str = "error-phone";

/// Fields with their own error slot; the phone pair shares `PHONE_ERROR_ID`
const SLOTTED_FIELDS: [Field; 9] = [
    Field::FirstName,
    Field::LastName,
    Field::Username,
    Field::Email,
    Field::Password,
    Field::Country,
    Field::City,
    Field::Pan,
    Field::Aadhar,
];

/// What a change event's response replaces
#[derive(Debug, Clone, Copy)]
enum Swap {
    /// The whole form, for events that change its shape
    Form,
    /// Only the out-of-band error slots and submit button; inputs keep what the user typed
    Status,
}

impl Swap {
    fn target(self) -> Option<&'static str> {
        match self {
            Swap::Form => Some(FORM_TARGET),
            Swap::Status => None,
        }
    }

    fn mode(self) -> &'static str {
        match self {
            Swap::Form => "outerHTML",
            Swap::Status => "none",
        }
    }
}

const INPUT_CLASS: &str =
    "w-full border rounded px-3 py-2 focus:outline-none focus:ring-2 focus:ring-blue-400";
const PHONE_CODE_CLASS: &str =
    "w-20 border rounded px-3 py-2 focus:outline-none focus:ring-2 focus:ring-blue-400";
const PHONE_NUMBER_CLASS: &str =
    "flex-1 border rounded px-3 py-2 focus:outline-none focus:ring-2 focus:ring-blue-400";

pub fn page(view: &FormView) -> Markup {
    super::layout(
        "Registration Form",
        html! {
            div class="max-w-xl mx-auto p-6 bg-white rounded-lg shadow-lg mt-8" {
                h2 class="text-2xl font-bold mb-4 text-center" { "Registration Form" }
                (fragment(view))
            }
        },
    )
}

/// The `<form>` element alone
pub fn fragment(view: &FormView) -> Markup {
    let failed = view
        .errors
        .iter()
        .map(|(field, _)| field.key())
        .collect::<Vec<_>>()
        .join(",");
    let values = &view.values;

    html! {
        form id="registration-form" method="post" action=(Route::Form.path()) novalidate class="space-y-4" {
            input type="hidden" name=(FAILED_INPUT) value=(failed);

            @for field in [Field::FirstName, Field::LastName, Field::Username] {
                div {
                    (label(field, field.label()))
                    (live_input(field, "text", values.value(field), None, INPUT_CLASS))
                    (field_error(&error_id(field), view.error(field), false))
                }
            }

            div {
                (label(Field::Email, "Email"))
                (live_input(Field::Email, "email", &values.email, None, INPUT_CLASS))
                (field_error(&error_id(Field::Email), view.error(Field::Email), false))
            }

            div {
                (label(Field::Password, "Password"))
                (live_input(Field::Password, view.password_input_type(), &values.password, None, INPUT_CLASS))
                label class="flex items-center mt-1 text-sm" {
                    input type="checkbox" id=(SHOW_PASSWORD) name=(SHOW_PASSWORD)
                        checked[values.show_password] class="mr-2"
                        hx-post=(CHANGE_PATH) hx-trigger="change"
                        hx-target=[Swap::Form.target()] hx-swap=(Swap::Form.mode());
                    "Show Password"
                }
                (field_error(&error_id(Field::Password), view.error(Field::Password), false))
            }

            div {
                (label(Field::PhoneCode, "Phone Number"))
                div class="flex gap-2" {
                    (live_input(Field::PhoneCode, "text", &values.phone_code, Some("+91"), PHONE_CODE_CLASS))
                    (live_input(Field::PhoneNumber, "text", &values.phone_number, Some("9876543210"), PHONE_NUMBER_CLASS))
                }
                (field_error(PHONE_ERROR_ID, view.phone_error(), false))
            }

            div {
                (label(Field::Country, "Country"))
                (live_select(Field::Country, &values.country, &view.countries, Swap::Form))
                (field_error(&error_id(Field::Country), view.error(Field::Country), false))
            }

            div {
                (label(Field::City, "City"))
                (live_select(Field::City, &values.city, &view.cities, Swap::Status))
                (field_error(&error_id(Field::City), view.error(Field::City), false))
            }

            div {
                (label(Field::Pan, "PAN No."))
                (live_input(Field::Pan, "text", &values.pan, None, INPUT_CLASS))
                (field_error(&error_id(Field::Pan), view.error(Field::Pan), false))
            }

            div {
                (label(Field::Aadhar, "Aadhar No."))
                (live_input(Field::Aadhar, "text", &values.aadhar, None, INPUT_CLASS))
                (field_error(&error_id(Field::Aadhar), view.error(Field::Aadhar), false))
            }

            (submit_button(view.can_submit, false))
        }
    }
}

/// Error slots and submit button, each swapped out-of-band by id.
///
/// Sent back for text and city edits so the inputs themselves are never
/// replaced while the user is typing.
pub fn status_update(view: &FormView) -> Markup {
    html! {
        @for field in SLOTTED_FIELDS {
            (field_error(&error_id(field), view.error(field), true))
        }
        (field_error(PHONE_ERROR_ID, view.phone_error(), true))
        (submit_button(view.can_submit, true))
    }
}

fn error_id(field: Field) -> String {
    format!("error-{}", field.key())
}

fn label(field: Field, text: &str) -> Markup {
    html! {
        label for=(field.key()) class="block font-medium mb-1" { (text) }
    }
}

/// Text input that posts the whole form back as the user types
fn live_input(
    field: Field,
    input_type: &str,
    value: &str,
    placeholder: Option<&str>,
    class: &str,
) -> Markup {
    html! {
        input type=(input_type) id=(field.key()) name=(field.key()) value=(value)
            placeholder=[placeholder] class=(class)
            hx-post=(CHANGE_PATH) hx-trigger="input changed delay:300ms"
            hx-swap=(Swap::Status.mode());
    }
}

fn live_select(field: Field, selected: &str, options: &[&str], swap: Swap) -> Markup {
    html! {
        select id=(field.key()) name=(field.key()) class=(INPUT_CLASS)
            hx-post=(CHANGE_PATH) hx-trigger="change"
            hx-target=[swap.target()] hx-swap=(swap.mode()) {
            option value="" selected[selected.is_empty()] { "Select" }
            @for option in options {
                option value=(option) selected[*option == selected] { (option) }
            }
        }
    }
}

fn field_error(id: &str, message: Option<&str>, oob: bool) -> Markup {
    html! {
        div id=(id) hx-swap-oob=[oob.then_some("true")] {
            @if let Some(message) = message {
                p class="text-red-500 text-sm" { (message) }
            }
        }
    }
}

fn submit_button(enabled: bool, oob: bool) -> Markup {
    html! {
        button type="submit" id=(SUBMIT_ID) disabled[!enabled] class=(submit_class(enabled))
            hx-swap-oob=[oob.then_some("true")] {
            "Submit"
        }
    }
}

fn submit_class(enabled: bool) -> &'static str {
    if enabled {
        "w-full py-2 px-4 rounded text-white bg-blue-600 hover:bg-blue-700"
    } else {
        "w-full py-2 px-4 rounded text-white bg-gray-400 cursor-not-allowed"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use regform::{FormEvent, FormState, RegistrationForm, SubmitOutcome};

    fn render(form: &RegistrationForm) -> String {
        fragment(&form.view()).into_string()
    }

    #[test]
    fn test_blank_form_has_disabled_submit() {
        let html = render(&RegistrationForm::new());
        assert!(html.contains(r#"<button type="submit" id="submit-button" disabled"#));
        assert!(html.contains("bg-gray-400"));
        assert!(html.contains(r#"<option value="" selected>Select</option>"#));
        assert!(html.contains(r#"<option value="India">India</option>"#));
    }

    #[test]
    fn test_city_options_follow_country() {
        let form = RegistrationForm::new()
            .apply(FormEvent::changed(Field::Country, "India"))
            .apply(FormEvent::changed(Field::City, "Mumbai"));
        let html = render(&form);
        assert!(html.contains(r#"<option value="Mumbai" selected>Mumbai</option>"#));
        assert!(html.contains(r#"<option value="Delhi">Delhi</option>"#));
        assert!(!html.contains("Chicago"));
    }

    #[test]
    fn test_rejected_form_shows_errors_and_failed_list() {
        let state = FormState {
            first_name: "A".to_string(),
            ..FormState::default()
        };
        let SubmitOutcome::Rejected(form) = RegistrationForm::from_state(state).submit() else {
            panic!("incomplete form must be rejected");
        };
        let html = render(&form);
        assert!(!html.contains("First name is required."));
        assert!(html.contains("Last name is required."));
        assert!(html.contains("Country code is required."));
        assert!(!html.contains("Valid 10-digit number is required."));
        assert!(html.contains(r#"name="failed" value="lastName,username,email"#));
    }

    #[test]
    fn test_show_password_renders_text_input() {
        let form = RegistrationForm::new()
            .apply(FormEvent::changed(Field::Password, "hunter2"))
            .apply(FormEvent::ShowPassword(true));
        let html = render(&form);
        assert!(html.contains(r#"type="text" id="password" name="password" value="hunter2""#));
        assert!(html.contains(r#"name="showPassword" checked"#));
    }

    #[test]
    fn test_values_are_escaped() {
        let form = RegistrationForm::new().apply(FormEvent::changed(Field::Username, "\"><b>"));
        let html = render(&form);
        assert!(!html.contains("\"><b>"));
        assert!(html.contains("&quot;&gt;&lt;b&gt;"));
    }

    #[test]
    fn test_text_inputs_swap_status_only() {
        let html = render(&RegistrationForm::new());
        assert!(html.contains(r#"name="username" value="" class="#));
        assert!(html.contains(r#"hx-trigger="input changed delay:300ms" hx-swap="none""#));
        assert!(!html.contains(r#"delay:300ms" hx-target"#));
        assert!(html.contains(r#"id="city" name="city""#));
        assert_eq!(html.matches(r##"hx-target="#registration-form""##).count(), 2);
        assert!(!html.contains("hx-swap-oob"));
    }

    #[test]
    fn test_status_update_carries_no_inputs() {
        let state = FormState {
            email: "typed".to_string(),
            ..FormState::default()
        };
        let errors = regform::ErrorSet::for_fields([Field::Email, Field::PhoneNumber]);
        let form = RegistrationForm::restore(state, errors);
        let html = status_update(&form.view()).into_string();

        assert!(!html.contains("<input"));
        assert!(!html.contains("<select"));
        assert!(!html.contains("typed"));
        assert!(html.contains(r#"<div id="error-email" hx-swap-oob="true"><p class="text-red-500 text-sm">Valid email is required.</p></div>"#));
        assert!(html.contains(r#"<div id="error-phone" hx-swap-oob="true"><p"#));
        assert!(html.contains(r#"<div id="error-pan" hx-swap-oob="true"></div>"#));
        assert!(html.contains(r#"id="submit-button" disabled"#));
        assert_eq!(html.matches(r#"hx-swap-oob="true""#).count(), SLOTTED_FIELDS.len() + 2);
    }

    #[test]
    fn test_status_update_enables_submit() {
        let form = RegistrationForm::from_state(FormState {
            first_name: "A".to_string(),
            last_name: "B".to_string(),
            username: "ab".to_string(),
            email: "a@b.co".to_string(),
            password: "secret1".to_string(),
            phone_code: "+1".to_string(),
            phone_number: "1234567890".to_string(),
            country: "USA".to_string(),
            city: "Chicago".to_string(),
            pan: "ABCDE12345".to_string(),
            aadhar: "123456789012".to_string(),
            show_password: false,
        });
        let html = status_update(&form.view()).into_string();
        assert!(html.contains(r#"<button type="submit" id="submit-button" class="#));
        assert!(!html.contains("disabled"));
    }
}
