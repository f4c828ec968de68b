//! Multi-step guided form workflow
//!
//! The controller owns the step position and the form; the gateway sends the
//! finished form to a [`CreateAction`](crate::service::CreateAction) and maps
//! the answer back onto the wizard.

mod controller;
mod error;
mod steps;
pub mod store;
mod submission;

pub use controller::{Advance, WizardController};
pub use error::WizardError;
pub use submission::{Navigator, Notifier, SubmissionError, SubmissionGateway, SubmissionResult};
