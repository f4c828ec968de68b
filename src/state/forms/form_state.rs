//! Form state: the ordered field set plus per-field errors

use super::field::FormField;
use super::schema::{FormValues, ValidationErrors};

/// Ordered set of fields making up one form instance
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormState {
    fields: Vec<FormField>,
}

impl FormState {
    pub fn new(fields: Vec<FormField>) -> Self {
        Self { fields }
    }

    pub fn field(&self, name: &str) -> Option<&FormField> {
        self.fields.iter().find(|f| f.name == name)
    }

    pub fn field_mut(&mut self, name: &str) -> Option<&mut FormField> {
        self.fields.iter_mut().find(|f| f.name == name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.field(name).is_some()
    }

    /// Value of `name`, empty when the field does not exist
    pub fn value(&self, name: &str) -> &str {
        self.field(name).map(FormField::as_text).unwrap_or("")
    }

    /// Replace a field's value. Returns false for unknown fields.
    pub fn set_value(&mut self, name: &str, value: impl Into<String>) -> bool {
        match self.field_mut(name) {
            Some(field) => {
                field.set_text(value.into());
                true
            }
            None => false,
        }
    }

    pub fn error(&self, name: &str) -> Option<&str> {
        self.field(name).and_then(|f| f.error.as_deref())
    }

    pub fn set_error(&mut self, name: &str, message: impl Into<String>) {
        if let Some(field) = self.field_mut(name) {
            field.error = Some(message.into());
        }
    }

    pub fn clear_error(&mut self, name: &str) {
        if let Some(field) = self.field_mut(name) {
            field.error = None;
        }
    }

    /// Apply the outcome of validating `names`: fields named in `errors`
    /// get their message, the rest of `names` are cleared.
    pub fn apply_validation<S: AsRef<str>>(&mut self, names: &[S], errors: &ValidationErrors) {
        for name in names {
            let name = name.as_ref();
            if let Some(field) = self.field_mut(name) {
                field.error = errors.get(name).map(str::to_string);
            }
        }
    }

    #[allow(dead_code)]
    pub fn has_errors(&self) -> bool {
        self.fields.iter().any(FormField::has_error)
    }

    /// Snapshot of every value, in form order
    pub fn values(&self) -> FormValues {
        self.fields
            .iter()
            .map(|f| (f.name.clone(), f.value.clone()))
            .collect()
    }

    /// Back to the defaults the form was created with
    pub fn reset(&mut self) {
        for field in &mut self.fields {
            field.clear();
        }
    }
}
