//! Wizard controller: step position, step-scoped validation and the
//! submitting flag

use super::error::WizardError;
use super::steps::{StepDefinition, StepList};
use super::submission::{SubmissionError, SubmissionResult};
use crate::state::{FormField, FormState, FormValues, Schema, ValidationErrors};

/// Result of [`WizardController::advance`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Advance {
    /// Moved to the given position
    Moved { to: usize },
    /// Already on the last step and its fields are valid
    ReadyToSubmit,
    /// Active step has invalid fields; `focus` is the first of them
    Blocked {
        errors: ValidationErrors,
        focus: String,
    },
}

/// How a finished submission was folded back into the wizard
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    /// Entity created, form torn down
    Created { id: String },
    /// Conflict attached to `field`, wizard moved back to `step`
    Conflict { field: String, step: usize },
    /// Generic failure, wizard stays on the last step
    Failed { message: String },
}

#[derive(Debug, Clone)]
pub struct WizardController {
    steps: StepList,
    schema: Schema,
    form: FormState,
    position: usize,
    /// Index into the active step's field list
    focus: usize,
    submitting: bool,
    /// Field a duplicate-name conflict is attached to
    conflict_field: Option<String>,
}

impl WizardController {
    /// Every field a step declares must exist in `form`, and every field
    /// the schema checks must be owned by a step
    pub fn new(steps: StepList, schema: Schema, form: FormState) -> Result<Self, WizardError> {
        for step in steps.iter() {
            if let Some(missing) = step.fields.iter().find(|f| !form.contains(f)) {
                return Err(WizardError::UnknownField(missing.clone()));
            }
        }
        if let Some(orphan) = schema.field_names().find(|f| steps.step_owning(f).is_none()) {
            return Err(WizardError::UnownedField(orphan.to_string()));
        }

        Ok(Self {
            steps,
            schema,
            form,
            position: 1,
            focus: 0,
            submitting: false,
            conflict_field: None,
        })
    }

    /// Attach duplicate-name conflicts to `field`, which a step must own
    pub fn with_conflict_field(mut self, field: &str) -> Result<Self, WizardError> {
        if self.steps.step_owning(field).is_none() {
            return Err(WizardError::UnownedField(field.to_string()));
        }
        self.conflict_field = Some(field.to_string());
        Ok(self)
    }

    pub fn position(&self) -> usize {
        self.position
    }

    pub fn step_count(&self) -> usize {
        self.steps.len()
    }

    pub fn is_terminal(&self) -> bool {
        self.position == self.steps.len()
    }

    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    pub fn form(&self) -> &FormState {
        &self.form
    }

    pub fn current_step(&self) -> &StepDefinition {
        self.steps.step(self.position)
    }

    /// Name of the focused field on the active step
    pub fn focused_field(&self) -> Option<&str> {
        self.current_step()
            .fields
            .get(self.focus)
            .map(String::as_str)
    }

    /// Validate the active step's fields and move forward when they pass
    pub fn advance(&mut self) -> Result<Advance, WizardError> {
        if self.submitting {
            return Err(WizardError::SubmissionInFlight);
        }

        if let Err(errors) = self.validate_step() {
            let focus = errors.first_field().unwrap_or_default().to_string();
            self.focus_field(&focus);
            tracing::debug!("Step {} blocked: {}", self.position, errors);
            return Ok(Advance::Blocked { errors, focus });
        }

        if self.is_terminal() {
            return Ok(Advance::ReadyToSubmit);
        }

        self.move_to(self.position + 1);
        Ok(Advance::Moved { to: self.position })
    }

    /// Step back without revalidating. Floored at step 1 and ignored while
    /// a submission is in flight.
    pub fn retreat(&mut self) -> usize {
        if !self.submitting && self.position > 1 {
            self.move_to(self.position - 1);
        }
        self.position
    }

    /// Validate only the fields owned by the active step and record the
    /// outcome on the form
    pub fn validate_step(&mut self) -> Result<(), ValidationErrors> {
        let names = self.current_step().fields.clone();
        let result = self.schema.validate_subset(&self.form.values(), &names);
        let errors = result.clone().err().unwrap_or_default();
        self.form.apply_validation(&names, &errors);
        result
    }

    /// Replace a field's value and re-check it
    #[allow(dead_code)]
    pub fn set_value(&mut self, name: &str, value: impl Into<String>) -> Result<(), WizardError> {
        if self.submitting {
            return Err(WizardError::SubmissionInFlight);
        }
        if !self.form.set_value(name, value) {
            return Err(WizardError::UnknownField(name.to_string()));
        }
        self.revalidate(name);
        Ok(())
    }

    /// Type into the focused field
    pub fn input_char(&mut self, c: char) {
        self.edit_focused(|field| field.push_char(c));
    }

    /// Delete the last character of the focused field
    pub fn backspace(&mut self) {
        self.edit_focused(|field| field.pop_char());
    }

    pub fn next_field(&mut self) {
        let count = self.current_step().fields.len();
        if count > 0 {
            self.focus = (self.focus + 1) % count;
        }
    }

    pub fn prev_field(&mut self) {
        let count = self.current_step().fields.len();
        if count == 0 {
            return;
        }
        if self.focus == 0 {
            self.focus = count - 1;
        } else {
            self.focus -= 1;
        }
    }

    /// Focus `name` if the active step owns it
    pub fn focus_field(&mut self, name: &str) -> bool {
        match self.current_step().fields.iter().position(|f| f == name) {
            Some(index) => {
                self.focus = index;
                true
            }
            None => false,
        }
    }

    /// Whether the submit trigger should be enabled
    pub fn can_submit(&self) -> bool {
        self.is_terminal() && !self.submitting && self.schema.validate(&self.form.values()).is_ok()
    }

    /// Enter the `Submitting` phase and hand back the values to send.
    ///
    /// The whole schema is applied here. On failure the errors are attached
    /// and the wizard moves to the first step owning an invalid field.
    pub fn begin_submit(&mut self) -> Result<FormValues, WizardError> {
        if self.submitting {
            return Err(WizardError::SubmissionInFlight);
        }
        if !self.is_terminal() {
            return Err(WizardError::NotOnTerminalStep {
                position: self.position,
                count: self.steps.len(),
            });
        }

        let values = self.form.values();
        if let Err(errors) = self.schema.validate(&values) {
            for (field, message) in errors.iter() {
                self.form.set_error(field, message);
            }
            if let Some(field) = errors.first_field() {
                self.show_field(field);
            }
            return Err(WizardError::Invalid(errors));
        }

        self.submitting = true;
        Ok(values)
    }

    /// Fold a submission outcome back into the wizard and unlock it.
    /// Without a conflict field a duplicate-name rejection is a plain failure.
    pub fn resolve(&mut self, result: &SubmissionResult) -> Resolution {
        self.submitting = false;

        match (result, self.conflict_field.clone()) {
            (SubmissionResult::Created { id }, _) => {
                self.form.reset();
                self.position = 1;
                self.focus = 0;
                Resolution::Created { id: id.clone() }
            }
            (SubmissionResult::Rejected(SubmissionError::DuplicateName { message }), Some(field)) => {
                self.form.set_error(&field, message.clone());
                self.show_field(&field);
                Resolution::Conflict {
                    field,
                    step: self.position,
                }
            }
            (
                SubmissionResult::Rejected(
                    SubmissionError::DuplicateName { message } | SubmissionError::Failed { message },
                ),
                _,
            ) => Resolution::Failed {
                message: message.clone(),
            },
        }
    }

    /// Move to the step owning `field` and focus it
    fn show_field(&mut self, field: &str) {
        if let Some(step) = self.steps.step_owning(field) {
            self.move_to(step);
            self.focus_field(field);
        }
    }

    fn move_to(&mut self, position: usize) {
        self.position = position.clamp(1, self.steps.len());
        self.focus = 0;
    }

    fn edit_focused(&mut self, edit: impl FnOnce(&mut FormField)) {
        if self.submitting {
            return;
        }
        let Some(name) = self.focused_field().map(str::to_string) else {
            return;
        };
        if let Some(field) = self.form.field_mut(&name) {
            edit(field);
        }
        self.revalidate(&name);
    }

    /// Every edit re-runs the edited field's rules
    fn revalidate(&mut self, name: &str) {
        let value = self.form.value(name).to_string();
        match self.schema.validate_field(name, &value) {
            Some(message) => self.form.set_error(name, message),
            None => self.form.clear_error(name),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::FieldSchema;
    use crate::wizard::steps::StepDefinition;
    use pretty_assertions::assert_eq;

    /// Three steps, one field each
    fn wizard() -> WizardController {
        let steps = StepList::new(vec![
            StepDefinition::new("Name", "?").field("name"),
            StepDefinition::new("Describe", "?").field("description"),
            StepDefinition::new("Where", "?").field("address"),
        ])
        .unwrap();
        let schema = Schema::new(vec![
            FieldSchema::new("name").required("Name is required"),
            FieldSchema::new("description").required("Description is required"),
            FieldSchema::new("address").required("Address is required"),
        ]);
        let form = FormState::new(vec![
            FormField::text("name", "Store name", ""),
            FormField::textarea("description", "Description", ""),
            FormField::textarea("address", "Address", ""),
        ]);
        WizardController::new(steps, schema, form)
            .and_then(|w| w.with_conflict_field("name"))
            .unwrap()
    }

    fn failed(message: &str) -> SubmissionResult {
        SubmissionResult::Rejected(SubmissionError::Failed {
            message: message.to_string(),
        })
    }

    fn duplicate(message: &str) -> SubmissionResult {
        SubmissionResult::Rejected(SubmissionError::DuplicateName {
            message: message.to_string(),
        })
    }

    fn filled_to_terminal() -> WizardController {
        let mut w = wizard();
        w.set_value("name", "Acme").unwrap();
        w.advance().unwrap();
        w.set_value("description", "Coffee").unwrap();
        w.advance().unwrap();
        w.set_value("address", "1 Main St").unwrap();
        w
    }

    #[test]
    fn test_starts_on_step_one() {
        let w = wizard();
        assert_eq!(w.position(), 1);
        assert_eq!(w.step_count(), 3);
        assert!(!w.is_submitting());
        assert_eq!(w.focused_field(), Some("name"));
    }

    #[test]
    fn test_unknown_step_field_is_rejected() {
        let steps = StepList::new(vec![StepDefinition::new("A", "?").field("phone")]).unwrap();
        let err = WizardController::new(steps, Schema::default(), FormState::default())
            .unwrap_err();
        assert_eq!(err, WizardError::UnknownField("phone".to_string()));
    }

    #[test]
    fn test_schema_field_without_step_is_rejected() {
        let steps = StepList::new(vec![StepDefinition::new("A", "?").field("name")]).unwrap();
        let schema = Schema::new(vec![
            FieldSchema::new("name").required("Name is required"),
            FieldSchema::new("phone").required("Phone is required"),
        ]);
        let form = FormState::new(vec![
            FormField::text("name", "Name", ""),
            FormField::text("phone", "Phone", ""),
        ]);
        assert_eq!(
            WizardController::new(steps, schema, form).unwrap_err(),
            WizardError::UnownedField("phone".to_string())
        );
    }

    #[test]
    fn test_conflict_field_without_step_is_rejected() {
        let steps = StepList::new(vec![StepDefinition::new("A", "?").field("name")]).unwrap();
        let form = FormState::new(vec![FormField::text("name", "Name", "")]);
        let err = WizardController::new(steps, Schema::default(), form)
            .and_then(|w| w.with_conflict_field("phone"))
            .unwrap_err();
        assert_eq!(err, WizardError::UnownedField("phone".to_string()));
    }

    #[test]
    fn test_duplicate_without_conflict_field_is_a_failure() {
        let steps = StepList::new(vec![StepDefinition::new("A", "?").field("name")]).unwrap();
        let form = FormState::new(vec![FormField::text("name", "Name", "")]);
        let mut w = WizardController::new(steps, Schema::default(), form).unwrap();
        w.begin_submit().unwrap();
        assert_eq!(
            w.resolve(&duplicate("taken")),
            Resolution::Failed {
                message: "taken".to_string()
            }
        );
        assert_eq!(w.form().error("name"), None);
    }

    #[test]
    fn test_advance_with_empty_name_is_blocked() {
        let mut w = wizard();
        let outcome = w.advance().unwrap();
        match outcome {
            Advance::Blocked { errors, focus } => {
                assert!(!errors.is_empty());
                assert_eq!(focus, "name");
            }
            other => panic!("expected Blocked, got {other:?}"),
        }
        assert_eq!(w.position(), 1);
        assert_eq!(w.form().error("name"), Some("Name is required"));
    }

    #[test]
    fn test_advance_with_valid_name_moves_to_step_two() {
        let mut w = wizard();
        w.set_value("name", "Acme").unwrap();
        assert_eq!(w.advance().unwrap(), Advance::Moved { to: 2 });
        assert_eq!(w.position(), 2);
        assert_eq!(w.focused_field(), Some("description"));
    }

    #[test]
    fn test_blocked_on_every_step_keeps_position() {
        let mut w = wizard();
        for step in 1..3 {
            assert!(matches!(w.advance().unwrap(), Advance::Blocked { .. }));
            assert_eq!(w.position(), step);
            let field = w.focused_field().unwrap().to_string();
            w.set_value(&field, "ok").unwrap();
            assert_eq!(w.advance().unwrap(), Advance::Moved { to: step + 1 });
        }
    }

    #[test]
    fn test_advance_only_validates_active_step() {
        let mut w = wizard();
        w.set_value("name", "Acme").unwrap();
        w.advance().unwrap();
        assert_eq!(w.form().error("description"), None);
        assert_eq!(w.form().error("address"), None);
    }

    #[test]
    fn test_advance_on_terminal_step_does_not_move() {
        let mut w = filled_to_terminal();
        assert_eq!(w.advance().unwrap(), Advance::ReadyToSubmit);
        assert_eq!(w.position(), 3);
    }

    #[test]
    fn test_retreat_floors_at_one() {
        let mut w = wizard();
        assert_eq!(w.retreat(), 1);
    }

    #[test]
    fn test_retreat_does_not_revalidate() {
        let mut w = filled_to_terminal();
        w.form.set_value("address", "");
        assert_eq!(w.retreat(), 2);
        assert_eq!(w.form().error("address"), None);
        assert_eq!(w.retreat(), 1);
    }

    #[test]
    fn test_input_clears_error_from_blocked_advance() {
        let mut w = wizard();
        w.advance().unwrap();
        assert!(w.form().error("name").is_some());
        w.input_char('A');
        assert_eq!(w.form().error("name"), None);
    }

    #[test]
    fn test_every_edit_validates_the_field() {
        let mut w = wizard();
        w.input_char('A');
        assert_eq!(w.form().error("name"), None);
        w.backspace();
        assert_eq!(w.form().error("name"), Some("Name is required"));
        assert_eq!(w.form().error("description"), None);
        w.set_value("name", "   ").unwrap();
        assert_eq!(w.form().error("name"), Some("Name is required"));
    }

    #[test]
    fn test_set_value_unknown_field() {
        let mut w = wizard();
        assert_eq!(
            w.set_value("phone", "1"),
            Err(WizardError::UnknownField("phone".to_string()))
        );
    }

    #[test]
    fn test_field_focus_cycles_within_step() {
        let steps = StepList::new(vec![StepDefinition::new("A", "?")
            .field("name")
            .field("description")])
        .unwrap();
        let form = FormState::new(vec![
            FormField::text("name", "Name", ""),
            FormField::text("description", "Description", ""),
        ]);
        let mut w = WizardController::new(steps, Schema::default(), form).unwrap();
        w.next_field();
        assert_eq!(w.focused_field(), Some("description"));
        w.next_field();
        assert_eq!(w.focused_field(), Some("name"));
        w.prev_field();
        assert_eq!(w.focused_field(), Some("description"));
    }

    #[test]
    fn test_begin_submit_off_terminal_step() {
        let mut w = wizard();
        assert_eq!(
            w.begin_submit(),
            Err(WizardError::NotOnTerminalStep {
                position: 1,
                count: 3
            })
        );
    }

    #[test]
    fn test_begin_submit_sets_flag_and_blocks_second_call() {
        let mut w = filled_to_terminal();
        assert!(w.can_submit());
        let values = w.begin_submit().unwrap();
        assert_eq!(values.get("name").map(String::as_str), Some("Acme"));
        assert!(w.is_submitting());
        assert!(!w.can_submit());
        assert_eq!(w.begin_submit(), Err(WizardError::SubmissionInFlight));
    }

    #[test]
    fn test_inputs_are_locked_while_submitting() {
        let mut w = filled_to_terminal();
        w.begin_submit().unwrap();
        w.input_char('x');
        assert_eq!(w.form().value("address"), "1 Main St");
        assert_eq!(w.retreat(), 3);
        assert_eq!(w.advance(), Err(WizardError::SubmissionInFlight));
        assert_eq!(
            w.set_value("address", "elsewhere"),
            Err(WizardError::SubmissionInFlight)
        );
    }

    #[test]
    fn test_begin_submit_runs_full_schema() {
        let mut w = filled_to_terminal();
        // Step 2 was valid when left, then cleared behind the wizard's back
        w.form.set_value("description", "");
        let err = w.begin_submit().unwrap_err();
        assert!(matches!(err, WizardError::Invalid(ref e) if e.get("description").is_some()));
        assert_eq!(w.position(), 2);
        assert_eq!(w.focused_field(), Some("description"));
        assert!(!w.is_submitting());
    }

    #[test]
    fn test_resolve_created_tears_down_form() {
        let mut w = filled_to_terminal();
        w.begin_submit().unwrap();
        let resolution = w.resolve(&SubmissionResult::Created {
            id: "store-1".to_string(),
        });
        assert_eq!(
            resolution,
            Resolution::Created {
                id: "store-1".to_string()
            }
        );
        assert_eq!(w.form().value("name"), "");
        assert_eq!(w.position(), 1);
        assert!(!w.is_submitting());
    }

    #[test]
    fn test_resolve_duplicate_moves_to_owning_step() {
        let mut w = filled_to_terminal();
        w.begin_submit().unwrap();
        let resolution = w.resolve(&duplicate("taken"));
        assert_eq!(
            resolution,
            Resolution::Conflict {
                field: "name".to_string(),
                step: 1
            }
        );
        assert_eq!(w.position(), 1);
        assert_eq!(w.focused_field(), Some("name"));
        assert_eq!(w.form().error("name"), Some("taken"));
        assert_eq!(w.form().error("description"), None);
        assert_eq!(w.form().error("address"), None);
    }

    #[test]
    fn test_resolve_failure_stays_on_terminal_step() {
        let mut w = filled_to_terminal();
        w.begin_submit().unwrap();
        let resolution = w.resolve(&failed("boom"));
        assert!(matches!(resolution, Resolution::Failed { .. }));
        assert_eq!(w.position(), 3);
        assert!(!w.form().has_errors());
        assert!(w.can_submit());
    }
}
