//! Declarative field rules and the validator that applies them

use indexmap::IndexMap;
use std::fmt;

/// Ordered field name → value mapping handed to validators and the gateway
pub type FormValues = IndexMap<String, String>;

/// A single constraint on a field value
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Rule {
    /// Value must be non-empty after trimming
    Required { message: String },
    /// Value must have at most `max` characters
    MaxLength { max: usize, message: String },
}

impl Rule {
    /// Returns the rule's message when `value` violates it
    fn check(&self, value: &str) -> Option<&str> {
        let failed = match self {
            Rule::Required { .. } => value.trim().is_empty(),
            Rule::MaxLength { max, .. } => value.chars().count() > *max,
        };
        if failed {
            Some(self.message())
        } else {
            None
        }
    }

    fn message(&self) -> &str {
        match self {
            Rule::Required { message } | Rule::MaxLength { message, .. } => message,
        }
    }
}

/// Rules for one named field
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldSchema {
    pub name: String,
    pub rules: Vec<Rule>,
}

impl FieldSchema {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            rules: Vec::new(),
        }
    }

    pub fn required(mut self, message: &str) -> Self {
        self.rules.push(Rule::Required {
            message: message.to_string(),
        });
        self
    }

    pub fn max_length(mut self, max: usize, message: &str) -> Self {
        self.rules.push(Rule::MaxLength {
            max,
            message: message.to_string(),
        });
        self
    }

    /// First failing rule wins
    pub fn check(&self, value: &str) -> Option<String> {
        self.rules
            .iter()
            .find_map(|rule| rule.check(value))
            .map(str::to_string)
    }
}

/// Field name → human readable message, in form order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationErrors(IndexMap<String, String>);

impl ValidationErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.0.insert(field.into(), message.into());
    }

    pub fn get(&self, field: &str) -> Option<&str> {
        self.0.get(field).map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// The first offending field, used to decide where focus goes
    pub fn first_field(&self) -> Option<&str> {
        self.0.keys().next().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parts: Vec<String> = self.iter().map(|(k, v)| format!("{k}: {v}")).collect();
        write!(f, "{}", parts.join("; "))
    }
}

/// Declarative schema over the whole field set
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Schema {
    fields: Vec<FieldSchema>,
}

impl Schema {
    pub fn new(fields: Vec<FieldSchema>) -> Self {
        Self { fields }
    }

    pub fn field(&self, name: &str) -> Option<&FieldSchema> {
        self.fields.iter().find(|f| f.name == name)
    }

    /// Names of every field the schema checks, in declaration order
    pub fn field_names(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(|f| f.name.as_str())
    }

    /// Check a single field; fields without rules are always valid
    pub fn validate_field(&self, name: &str, value: &str) -> Option<String> {
        self.field(name).and_then(|f| f.check(value))
    }

    /// Validate only `names`, leaving every other field alone.
    /// A missing value is validated as the empty string.
    pub fn validate_subset<S: AsRef<str>>(
        &self,
        values: &FormValues,
        names: &[S],
    ) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();
        for name in names {
            let name = name.as_ref();
            let value = values.get(name).map(String::as_str).unwrap_or("");
            if let Some(message) = self.validate_field(name, value) {
                errors.insert(name, message);
            }
        }
        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }

    /// Validate every field the schema declares
    pub fn validate(&self, values: &FormValues) -> Result<(), ValidationErrors> {
        let names: Vec<&str> = self.field_names().collect();
        self.validate_subset(values, &names)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn schema() -> Schema {
        Schema::new(vec![
            FieldSchema::new("name")
                .required("Name is required")
                .max_length(5, "Too long"),
            FieldSchema::new("code").required("Code is required"),
        ])
    }

    fn values(pairs: &[(&str, &str)]) -> FormValues {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_required_rejects_whitespace() {
        let schema = schema();
        assert_eq!(
            schema.validate_field("name", "   "),
            Some("Name is required".to_string())
        );
    }

    #[test]
    fn test_first_failing_rule_wins() {
        let schema = Schema::new(vec![FieldSchema::new("x")
            .max_length(2, "long")
            .required("req")]);
        assert_eq!(schema.validate_field("x", "   "), Some("long".to_string()));
        assert_eq!(schema.validate_field("x", " "), Some("req".to_string()));
        assert_eq!(schema.validate_field("x", "ab"), None);
    }

    #[test]
    fn test_max_length_counts_chars() {
        let schema = schema();
        assert_eq!(schema.validate_field("name", "ééééé"), None);
        assert_eq!(
            schema.validate_field("name", "ééééééé"),
            Some("Too long".to_string())
        );
    }

    #[test]
    fn test_unknown_field_is_valid() {
        assert_eq!(schema().validate_field("nope", ""), None);
    }

    #[test]
    fn test_subset_only_checks_named_fields() {
        let schema = schema();
        let v = values(&[("name", "Acme"), ("code", "")]);
        assert!(schema.validate_subset(&v, &["name"]).is_ok());

        let errors = schema.validate_subset(&v, &["code"]).unwrap_err();
        assert_eq!(errors.iter().count(), 1);
        assert_eq!(errors.get("code"), Some("Code is required"));
    }

    #[test]
    fn test_missing_value_validates_as_empty() {
        let errors = schema()
            .validate_subset(&FormValues::new(), &["name"])
            .unwrap_err();
        assert_eq!(errors.first_field(), Some("name"));
    }

    #[test]
    fn test_full_validation_keeps_schema_order() {
        let errors = schema().validate(&FormValues::new()).unwrap_err();
        let fields: Vec<&str> = errors.iter().map(|(k, _)| k).collect();
        assert_eq!(fields, vec!["name", "code"]);
        assert_eq!(
            errors.to_string(),
            "name: Name is required; code: Code is required"
        );
    }
}
