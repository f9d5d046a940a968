//! # jsonvet
//!
//! JSON Schema validation via compiled keyword graphs. A schema
//! document is compiled once into an in-memory validation program, a
//! graph of keyword nodes whose sibling interdependencies (applicator
//! fall-back chains, `contains` bounds, `if`/`then`/`else`,
//! `unevaluated*` hand-off) are wired up ahead of time, and then
//! applied to any number of instances.
//!
//! The supported dialect is the keyword set of JSON Schema drafts
//! 2019-09 / 2020-12, minus `$ref` resolution. Annotation and
//! `format` keywords are type-checked at compile time and ignored
//! during validation.
//!
//! ## One-off validation
//!
//! ```rust
//! use serde_json::json;
//!
//! let schema = json!({"maxLength": 5});
//! assert!(jsonvet::is_valid(&schema, &json!("foo")));
//! assert!(!jsonvet::is_valid(&schema, &json!("foo bar")));
//! ```
//!
//! ## Reusable validators
//!
//! ```rust
//! use serde_json::json;
//!
//! let schema = json!({
//!     "properties": {"name": {"type": "string"}},
//!     "additionalProperties": false,
//!     "required": ["name"]
//! });
//! let validator = jsonvet::validator_for(&schema).expect("valid schema");
//!
//! assert!(validator.is_valid(&json!({"name": "jq"})));
//!
//! let error = validator.validate(&json!({"name": "jq", "x": 1})).unwrap_err();
//! assert_eq!(error.keyword(), Some("additionalProperties"));
//! ```
//!
//! ## Configuration
//!
//! ```rust
//! use serde_json::json;
//!
//! let validator = jsonvet::options()
//!     .with_max_depth(32)
//!     .build(&json!({"type": "array"}))
//!     .expect("valid schema");
//! assert!(validator.is_valid(&json!([])));
//! ```
#![warn(missing_docs, missing_debug_implementations)]

mod canon;
mod compiler;
mod error;
mod keywords;
mod node;
mod options;
mod primitive_type;
mod validator;

pub use error::{CompileError, ValidationError};
pub use options::ValidationOptions;
pub use validator::Validator;

use serde_json::Value;

/// Compile `schema` into a reusable [`Validator`] with the default
/// configuration.
pub fn validator_for(schema: &Value) -> Result<Validator, CompileError> {
    Validator::new(schema)
}

/// Configuration entry point; see [`ValidationOptions`].
#[must_use]
pub fn options() -> ValidationOptions {
    ValidationOptions::default()
}

/// A shortcut for a single schema/instance check.
///
/// # Panics
///
/// Panics if the schema does not compile; use [`validator_for`] to
/// handle that case.
#[must_use]
pub fn is_valid(schema: &Value, instance: &Value) -> bool {
    let validator = validator_for(schema).expect("invalid schema");
    validator.is_valid(instance)
}
