// File: src/handoff.rs
// Purpose: Payload handed from an accepted form to the results view

use crate::field::Field;
use crate::state::FormState;
use serde::Serialize;

/// Where the navigator can send the user
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    Form,
    Results,
}

impl Route {
    pub fn path(self) -> &'static str {
        match self {
            Route::Form => "/",
            Route::Results => "/success",
        }
    }
}

/// The data fields of an accepted form, values exactly as entered.
///
/// Carries no UI flags: the password visibility toggle stays behind.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Submission {
    pub first_name: String,
    pub last_name: String,
    pub username: String,
    pub email: String,
    pub password: String,
    pub phone_code: String,
    pub phone_number: String,
    pub country: String,
    pub city: String,
    pub pan: String,
    pub aadhar: String,
}

impl From<FormState> for Submission {
    fn from(state: FormState) -> Self {
        Self {
            first_name: state.first_name,
            last_name: state.last_name,
            username: state.username,
            email: state.email,
            password: state.password,
            phone_code: state.phone_code,
            phone_number: state.phone_number,
            country: state.country,
            city: state.city,
            pan: state.pan,
            aadhar: state.aadhar,
        }
    }
}

impl Submission {
    pub fn value(&self, field: Field) -> &str {
        match field {
            Field::FirstName => &self.first_name,
            Field::LastName => &self.last_name,
            Field::Username => &self.username,
            Field::Email => &self.email,
            Field::Password => &self.password,
            Field::PhoneCode => &self.phone_code,
            Field::PhoneNumber => &self.phone_number,
            Field::Country => &self.country,
            Field::City => &self.city,
            Field::Pan => &self.pan,
            Field::Aadhar => &self.aadhar,
        }
    }

    /// `(label, value)` for every field in display order
    pub fn rows(&self) -> impl Iterator<Item = (&'static str, &str)> + '_ {
        Field::ALL
            .into_iter()
            .map(move |field| (field.label(), self.value(field)))
    }
}

/// What the results page shows
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResultsView {
    /// Reached without submitting
    Empty,
    Details(Submission),
}

impl ResultsView {
    pub fn new(payload: Option<Submission>) -> Self {
        match payload {
            Some(submission) => ResultsView::Details(submission),
            None => ResultsView::Empty,
        }
    }

    /// Leaving the results always starts over at the blank form
    pub fn return_route(&self) -> Route {
        Route::Form
    }
}
