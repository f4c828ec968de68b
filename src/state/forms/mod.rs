//! Form domain layer
//!
//! Field values, per-field errors and the declarative schema the wizard
//! validates against.

mod field;
mod form_state;
mod schema;

pub use field::FormField;
pub use form_state::FormState;
pub use schema::{FieldSchema, FormValues, Schema, ValidationErrors};
