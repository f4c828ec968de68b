//! Errors raised by the wizard controller and its construction

use crate::state::ValidationErrors;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WizardError {
    #[error("a wizard needs at least one step")]
    NoSteps,

    #[error("field '{0}' is not part of the form")]
    UnknownField(String),

    #[error("field '{0}' is not owned by any step")]
    UnownedField(String),

    #[error("field '{field}' is claimed by step {first} and step {second}")]
    DuplicateField {
        field: String,
        first: usize,
        second: usize,
    },

    #[error("submit is only available on the last step (on step {position} of {count})")]
    NotOnTerminalStep { position: usize, count: usize },

    #[error("a submission is already in flight")]
    SubmissionInFlight,

    #[error("form is invalid: {0}")]
    Invalid(ValidationErrors),
}
