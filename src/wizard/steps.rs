//! Declarative step definitions
//!
//! A wizard is an ordered list of steps, each owning a subset of the form's
//! fields. Positions are 1-based everywhere outside this module.

use super::error::WizardError;

/// One page of the wizard
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StepDefinition {
    /// Heading shown above the step's fields
    pub heading: String,
    /// Short question under the heading
    pub prompt: String,
    /// Fields owned by this step, in focus order
    pub fields: Vec<String>,
}

impl StepDefinition {
    pub fn new(heading: &str, prompt: &str) -> Self {
        Self {
            heading: heading.to_string(),
            prompt: prompt.to_string(),
            fields: Vec::new(),
        }
    }

    pub fn field(mut self, name: &str) -> Self {
        self.fields.push(name.to_string());
        self
    }

    pub fn owns(&self, name: &str) -> bool {
        self.fields.iter().any(|f| f == name)
    }
}

/// Non-empty ordered list of steps where every field has exactly one owner
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StepList {
    steps: Vec<StepDefinition>,
}

impl StepList {
    pub fn new(steps: Vec<StepDefinition>) -> Result<Self, WizardError> {
        if steps.is_empty() {
            return Err(WizardError::NoSteps);
        }

        for (i, step) in steps.iter().enumerate() {
            for field in &step.fields {
                let owner = steps.iter().position(|s| s.owns(field));
                if let Some(first) = owner.filter(|&first| first != i) {
                    return Err(WizardError::DuplicateField {
                        field: field.clone(),
                        first: first + 1,
                        second: i + 1,
                    });
                }
                if step.fields.iter().filter(|f| *f == field).count() > 1 {
                    return Err(WizardError::DuplicateField {
                        field: field.clone(),
                        first: i + 1,
                        second: i + 1,
                    });
                }
            }
        }

        Ok(Self { steps })
    }

    /// Number of steps, i.e. the terminal position
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    #[allow(dead_code)]
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Step at a 1-based position, clamped into range
    pub fn step(&self, position: usize) -> &StepDefinition {
        &self.steps[position.clamp(1, self.steps.len()) - 1]
    }

    /// 1-based position of the step that owns `field`
    pub fn step_owning(&self, field: &str) -> Option<usize> {
        self.steps.iter().position(|s| s.owns(field)).map(|i| i + 1)
    }

    pub fn iter(&self) -> impl Iterator<Item = &StepDefinition> {
        self.steps.iter()
    }
}
