// File: src/form.rs
// Purpose: Form view-model tying state, stored errors and the submit flow together

use crate::field::Field;
use crate::gate::can_submit;
use crate::handoff::{Route, Submission};
use crate::location::{cities_for, countries};
use crate::state::{FormEvent, FormState};
use crate::validation::{validate, ErrorSet};
use serde::Serialize;

/// The registration form as the render layer sees it: current values plus
/// the errors from the last submit attempt.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RegistrationForm {
    state: FormState,
    errors: ErrorSet,
}

/// Result of pressing submit
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Valid; hand the payload to the results view
    Accepted(Submission),
    /// Stay on the form, now carrying the errors to display
    Rejected(RegistrationForm),
}

impl SubmitOutcome {
    pub fn route(&self) -> Route {
        match self {
            SubmitOutcome::Accepted(_) => Route::Results,
            SubmitOutcome::Rejected(_) => Route::Form,
        }
    }
}

/// Everything one render needs
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FormView {
    pub values: FormState,
    pub errors: ErrorSet,
    pub can_submit: bool,
    pub countries: Vec<&'static str>,
    pub cities: Vec<&'static str>,
}

impl FormView {
    pub fn error(&self, field: Field) -> Option<&str> {
        self.errors.get(field)
    }

    /// The phone code and number share one message slot
    pub fn phone_error(&self) -> Option<&str> {
        self.errors.first_of(&[Field::PhoneCode, Field::PhoneNumber])
    }

    pub fn password_input_type(&self) -> &'static str {
        if self.values.show_password {
            "text"
        } else {
            "password"
        }
    }
}

impl RegistrationForm {
    /// Blank form, as mounted
    pub fn new() -> Self {
        Self::default()
    }

    /// Resume from values the client already holds, with no errors shown
    pub fn from_state(state: FormState) -> Self {
        Self {
            state,
            errors: ErrorSet::new(),
        }
    }

    /// Resume with the errors of an earlier submit still on display
    pub fn restore(state: FormState, errors: ErrorSet) -> Self {
        Self { state, errors }
    }

    pub fn state(&self) -> &FormState {
        &self.state
    }

    pub fn errors(&self) -> &ErrorSet {
        &self.errors
    }

    /// Replace the state; stored errors only change on submit.
    #[must_use]
    pub fn apply(self, event: FormEvent) -> Self {
        Self {
            state: self.state.apply(event),
            errors: self.errors,
        }
    }

    /// Validate and either hand off the data or keep the errors.
    pub fn submit(self) -> SubmitOutcome {
        let errors = validate(&self.state);
        if errors.is_empty() {
            tracing::debug!("registration accepted");
            SubmitOutcome::Accepted(Submission::from(self.state))
        } else {
            tracing::debug!(failed = errors.len(), "registration rejected");
            SubmitOutcome::Rejected(Self {
                state: self.state,
                errors,
            })
        }
    }

    pub fn view(&self) -> FormView {
        FormView {
            values: self.state.clone(),
            errors: self.errors.clone(),
            can_submit: can_submit(&self.state),
            countries: countries().collect(),
            cities: cities_for(&self.state.country).to_vec(),
        }
    }
}
