//! Configuration for building a [`Validator`].

use serde_json::Value;

use crate::{compiler, error::CompileError, validator::Validator};

pub(crate) const DEFAULT_MAX_DEPTH: usize = 64;

/// A builder for validation configuration.
///
/// The engine is deliberately small: the only knob is the schema
/// nesting bound that protects the native stack during compilation.
///
/// ```rust
/// use serde_json::json;
///
/// let schema = json!({"type": "string"});
/// let validator = jsonvet::options()
///     .with_max_depth(16)
///     .build(&schema)
///     .expect("valid schema");
/// assert!(validator.is_valid(&json!("ok")));
/// ```
#[derive(Debug, Clone)]
pub struct ValidationOptions {
    pub(crate) max_depth: usize,
}

impl Default for ValidationOptions {
    fn default() -> ValidationOptions {
        ValidationOptions {
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

impl ValidationOptions {
    /// Set how deeply nested a schema document may be before
    /// compilation refuses it.
    #[must_use]
    pub fn with_max_depth(mut self, limit: usize) -> ValidationOptions {
        self.max_depth = limit;
        self
    }

    /// The configured schema nesting bound.
    #[must_use]
    pub fn max_depth(&self) -> usize {
        self.max_depth
    }

    /// Compile `schema` into a [`Validator`] using this configuration.
    pub fn build(&self, schema: &Value) -> Result<Validator, CompileError> {
        compiler::build_validator(self.clone(), schema)
    }
}
