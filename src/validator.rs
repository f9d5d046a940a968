//! The public validator: a compiled schema plus its configuration.

use serde_json::Value;

use crate::{
    error::{CompileError, ValidationError},
    node::{Scope, SchemaList},
    options::ValidationOptions,
};

/// A schema compiled into its validation program.
///
/// Built once, immutable afterwards, and cheap to query; safe to
/// share across threads for concurrent validations.
///
/// ```rust
/// use serde_json::json;
///
/// let schema = json!({"type": "integer", "minimum": 0, "maximum": 10});
/// let validator = jsonvet::validator_for(&schema).expect("valid schema");
///
/// assert!(validator.is_valid(&json!(5)));
/// let error = validator.validate(&json!(11)).unwrap_err();
/// assert_eq!(error.keyword(), Some("maximum"));
/// ```
#[derive(Debug)]
pub struct Validator {
    pub(crate) root: SchemaList,
    pub(crate) config: ValidationOptions,
}

impl Validator {
    /// Compile `schema` with the default configuration.
    pub fn new(schema: &Value) -> Result<Validator, CompileError> {
        ValidationOptions::default().build(schema)
    }

    /// Check `instance` against the compiled schema; on failure the
    /// error names the first failing keyword.
    pub fn validate(&self, instance: &Value) -> Result<(), ValidationError> {
        self.root.validate(instance, Scope::default())
    }

    /// The boolean verdict alone.
    #[must_use]
    pub fn is_valid(&self, instance: &Value) -> bool {
        self.root.is_valid(instance)
    }

    /// The configuration this validator was built with.
    #[must_use]
    pub fn config(&self) -> &ValidationOptions {
        &self.config
    }
}
