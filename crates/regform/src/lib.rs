// Regform - registration form core
// Field state, validation rules, dependent selects and the results handoff

pub mod field;
pub mod form;
pub mod gate;
pub mod handoff;
pub mod location;
pub mod state;
pub mod validation;

pub use field::{Field, UnknownField};
pub use form::{FormView, RegistrationForm, SubmitOutcome};
pub use gate::can_submit;
pub use handoff::{ResultsView, Route, Submission};
pub use location::{cities_for, countries};
pub use state::{FormEvent, FormState};
pub use validation::{validate, ErrorSet};

#[cfg(test)]
pub(crate) mod test_support;
