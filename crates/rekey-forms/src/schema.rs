//! Declarative schema rules evaluated against the full value map.

use regex::Regex;

use crate::error::{ValidationFailure, ValidationFailures};
use crate::values::FormValues;

/// Trait for schema rules.
///
/// A rule inspects the whole value snapshot, so constraints may reach
/// across fields, and reports failures against a single field.
pub trait Rule: Send + Sync {
    /// The field failures are reported against.
    fn field(&self) -> &str;

    /// Checks the rule and returns the failure message if violated.
    fn check(&self, values: &FormValues) -> Result<(), String>;
}

/// Rule that requires a non-empty value.
///
/// An absent field counts as empty.
#[derive(Debug, Clone)]
pub struct RequiredRule {
    field: String,
    message: String,
}

impl RequiredRule {
    /// Creates the rule with a default message.
    pub fn new(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: "This field is required.".to_string(),
        }
    }

    /// Overrides the failure message.
    #[must_use]
    pub fn message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }
}

impl Rule for RequiredRule {
    fn field(&self) -> &str {
        &self.field
    }

    fn check(&self, values: &FormValues) -> Result<(), String> {
        if values.get_or_empty(&self.field).is_empty() {
            Err(self.message.clone())
        } else {
            Ok(())
        }
    }
}

/// Rule that enforces a minimum length.
///
/// Empty values pass; required-ness is [`RequiredRule`]'s job.
#[derive(Debug, Clone)]
pub struct MinLengthRule {
    field: String,
    min_length: usize,
    message: String,
}

impl MinLengthRule {
    /// Creates the rule with a default message.
    pub fn new(field: impl Into<String>, min_length: usize) -> Self {
        Self {
            field: field.into(),
            min_length,
            message: format!("Ensure this value has at least {min_length} characters."),
        }
    }

    /// Overrides the failure message.
    #[must_use]
    pub fn message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }
}

impl Rule for MinLengthRule {
    fn field(&self) -> &str {
        &self.field
    }

    fn check(&self, values: &FormValues) -> Result<(), String> {
        let value = values.get_or_empty(&self.field);
        if !value.is_empty() && value.len() < self.min_length {
            Err(self.message.clone())
        } else {
            Ok(())
        }
    }
}

/// Rule that enforces a maximum length.
#[derive(Debug, Clone)]
pub struct MaxLengthRule {
    field: String,
    max_length: usize,
    message: String,
}

impl MaxLengthRule {
    /// Creates the rule with a default message.
    pub fn new(field: impl Into<String>, max_length: usize) -> Self {
        Self {
            field: field.into(),
            max_length,
            message: format!("Ensure this value has at most {max_length} characters."),
        }
    }

    /// Overrides the failure message.
    #[must_use]
    pub fn message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }
}

impl Rule for MaxLengthRule {
    fn field(&self) -> &str {
        &self.field
    }

    fn check(&self, values: &FormValues) -> Result<(), String> {
        if values.get_or_empty(&self.field).len() > self.max_length {
            Err(self.message.clone())
        } else {
            Ok(())
        }
    }
}

/// Rule that matches a value against a regex pattern.
///
/// Empty values pass; required-ness is [`RequiredRule`]'s job.
#[derive(Debug, Clone)]
pub struct RegexRule {
    field: String,
    pattern: Regex,
    message: String,
}

impl RegexRule {
    /// Creates the rule.
    pub fn new(
        field: impl Into<String>,
        pattern: &str,
        message: impl Into<String>,
    ) -> Result<Self, regex::Error> {
        Ok(Self {
            field: field.into(),
            pattern: Regex::new(pattern)?,
            message: message.into(),
        })
    }
}

impl Rule for RegexRule {
    fn field(&self) -> &str {
        &self.field
    }

    fn check(&self, values: &FormValues) -> Result<(), String> {
        let value = values.get_or_empty(&self.field);
        if value.is_empty() || self.pattern.is_match(value) {
            Ok(())
        } else {
            Err(self.message.clone())
        }
    }
}

/// Rule that requires a field to equal another field's value.
#[derive(Debug, Clone)]
pub struct MatchesFieldRule {
    field: String,
    other: String,
    message: String,
}

impl MatchesFieldRule {
    /// Creates the rule with a default message.
    pub fn new(field: impl Into<String>, other: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            other: other.into(),
            message: "Values do not match.".to_string(),
        }
    }

    /// Overrides the failure message.
    #[must_use]
    pub fn message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }
}

impl Rule for MatchesFieldRule {
    fn field(&self) -> &str {
        &self.field
    }

    fn check(&self, values: &FormValues) -> Result<(), String> {
        if values.get_or_empty(&self.field) == values.get_or_empty(&self.other) {
            Ok(())
        } else {
            Err(self.message.clone())
        }
    }
}

/// Rule that applies an inner rule only while a trigger field is filled.
///
/// While the trigger field is empty the inner rule has no active
/// constraint.
pub struct WhenFilledRule {
    trigger: String,
    inner: Box<dyn Rule>,
}

impl WhenFilledRule {
    /// Creates the conditional rule.
    pub fn new(trigger: impl Into<String>, inner: impl Rule + 'static) -> Self {
        Self {
            trigger: trigger.into(),
            inner: Box::new(inner),
        }
    }
}

impl std::fmt::Debug for WhenFilledRule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WhenFilledRule")
            .field("trigger", &self.trigger)
            .field("field", &self.inner.field())
            .finish_non_exhaustive()
    }
}

impl Rule for WhenFilledRule {
    fn field(&self) -> &str {
        self.inner.field()
    }

    fn check(&self, values: &FormValues) -> Result<(), String> {
        if values.get_or_empty(&self.trigger).is_empty() {
            Ok(())
        } else {
            self.inner.check(values)
        }
    }
}

/// Ordered rule set evaluated against a value snapshot.
#[derive(Default)]
pub struct Schema {
    rules: Vec<Box<dyn Rule>>,
}

impl std::fmt::Debug for Schema {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Schema")
            .field("rules", &self.rules.len())
            .finish_non_exhaustive()
    }
}

impl Schema {
    /// Creates an empty schema.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a rule.
    #[must_use]
    pub fn rule(mut self, rule: impl Rule + 'static) -> Self {
        self.rules.push(Box::new(rule));
        self
    }

    /// Validates a value snapshot.
    ///
    /// With `collect_all`, every violated rule contributes one failure and
    /// evaluation never short-circuits, so the caller sees every invalid
    /// field after one pass; otherwise evaluation stops at the first
    /// failure.
    pub fn validate(
        &self,
        values: &FormValues,
        collect_all: bool,
    ) -> Result<(), ValidationFailures> {
        let mut failures = ValidationFailures::new();
        for rule in &self.rules {
            if let Err(message) = rule.check(values) {
                failures.push(ValidationFailure::new(rule.field(), message));
                if !collect_all {
                    break;
                }
            }
        }
        if failures.is_empty() {
            Ok(())
        } else {
            Err(failures)
        }
    }
}
