// File: src/field.rs
// Purpose: The closed set of registration fields with their wire keys and labels

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A data field of the registration form.
///
/// Declaration order is display order: the results view and the error set
/// both iterate fields in this order. `showPassword` is a UI flag and is not
/// a field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Field {
    FirstName,
    LastName,
    Username,
    Email,
    Password,
    PhoneCode,
    PhoneNumber,
    Country,
    City,
    Pan,
    Aadhar,
}

/// Returned when a key does not name any form field
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown form field: {0:?}")]
pub struct UnknownField(pub String);

impl Field {
    pub const ALL: [Field; 11] = [
        Field::FirstName,
        Field::LastName,
        Field::Username,
        Field::Email,
        Field::Password,
        Field::PhoneCode,
        Field::PhoneNumber,
        Field::Country,
        Field::City,
        Field::Pan,
        Field::Aadhar,
    ];

    /// Key used for HTML `name` attributes and JSON payloads
    pub fn key(self) -> &'static str {
        match self {
            Field::FirstName => "firstName",
            Field::LastName => "lastName",
            Field::Username => "username",
            Field::Email => "email",
            Field::Password => "password",
            Field::PhoneCode => "phoneCode",
            Field::PhoneNumber => "phoneNumber",
            Field::Country => "country",
            Field::City => "city",
            Field::Pan => "pan",
            Field::Aadhar => "aadhar",
        }
    }

    /// Label shown next to a submitted value on the results view
    pub fn label(self) -> &'static str {
        match self {
            Field::FirstName => "First Name",
            Field::LastName => "Last Name",
            Field::Username => "Username",
            Field::Email => "Email",
            Field::Password => "Password",
            Field::PhoneCode => "Phone Code",
            Field::PhoneNumber => "Phone Number",
            Field::Country => "Country",
            Field::City => "City",
            Field::Pan => "Pan",
            Field::Aadhar => "Aadhar",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for Field {
    type Err = UnknownField;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Field::ALL
            .into_iter()
            .find(|field| field.key() == s)
            .ok_or_else(|| UnknownField(s.to_string()))
    }
}
