// File: src/state.rs
// Purpose: Form state snapshots and the update function that replaces them

use crate::field::{Field, UnknownField};
use serde::{Deserialize, Serialize};

/// Name of the password visibility checkbox
pub const SHOW_PASSWORD: &str = "showPassword";

/// Current values of every input on the registration form.
///
/// A snapshot: every change goes through [`FormState::apply`], which
/// consumes the old state and returns its replacement.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FormState {
    pub first_name: String,
    pub last_name: String,
    pub username: String,
    pub email: String,
    pub password: String,
    pub show_password: bool,
    pub phone_code: String,
    pub phone_number: String,
    pub country: String,
    pub city: String,
    pub pan: String,
    pub aadhar: String,
}

/// A single input event from the render layer
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormEvent {
    Changed { field: Field, value: String },
    ShowPassword(bool),
}

impl FormEvent {
    pub fn changed(field: Field, value: impl Into<String>) -> Self {
        FormEvent::Changed {
            field,
            value: value.into(),
        }
    }

    /// Build the event for an input named `name` now holding `value`.
    ///
    /// `value` is the submitted form value, so the checkbox is checked when
    /// it carries `on` (the browser default) or `true`.
    pub fn from_input(name: &str, value: &str) -> Result<Self, UnknownField> {
        if name == SHOW_PASSWORD {
            return Ok(FormEvent::ShowPassword(is_checked(value)));
        }
        let field = name.parse::<Field>()?;
        Ok(FormEvent::changed(field, value))
    }

    /// Whether applying this event changes more than values and errors:
    /// a new country brings a new city list and a cleared city, and the
    /// visibility toggle flips the password input's type.
    pub fn reshapes_form(&self) -> bool {
        matches!(
            self,
            FormEvent::Changed {
                field: Field::Country,
                ..
            } | FormEvent::ShowPassword(_)
        )
    }
}

fn is_checked(value: &str) -> bool {
    matches!(value, "on" | "true")
}

impl FormState {
    /// Build a snapshot from submitted `name=value` pairs.
    ///
    /// Unknown names are ignored and missing ones keep their defaults.
    pub fn from_fields<I, K, V>(fields: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<String>,
    {
        let mut state = FormState::default();
        for (name, value) in fields {
            let name = name.as_ref();
            let value: String = value.into();
            if name == SHOW_PASSWORD {
                state.show_password = is_checked(&value);
            } else if let Ok(field) = name.parse::<Field>() {
                *state.slot_mut(field) = value;
            }
        }
        state
    }

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

    fn slot_mut(&mut self, field: Field) -> &mut String {
        match field {
            Field::FirstName => &mut self.first_name,
            Field::LastName => &mut self.last_name,
            Field::Username => &mut self.username,
            Field::Email => &mut self.email,
            Field::Password => &mut self.password,
            Field::PhoneCode => &mut self.phone_code,
            Field::PhoneNumber => &mut self.phone_number,
            Field::Country => &mut self.country,
            Field::City => &mut self.city,
            Field::Pan => &mut self.pan,
            Field::Aadhar => &mut self.aadhar,
        }
    }

    /// Replace this snapshot with one that has `event` applied.
    ///
    /// Selecting a country always clears the city, even when the same
    /// country is picked again.
    #[must_use]
    pub fn apply(mut self, event: FormEvent) -> Self {
        match event {
            FormEvent::Changed {
                field: Field::Country,
                value,
            } => {
                self.country = value;
                self.city.clear();
            }
            FormEvent::Changed { field, value } => *self.slot_mut(field) = value,
            FormEvent::ShowPassword(show) => self.show_password = show,
        }
        self
    }
}
