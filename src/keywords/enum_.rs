use ahash::AHashSet;
use serde_json::Value;

use crate::{
    canon,
    error::{CompileError, ValidationError},
    keywords::{Keyword, Payload},
    node::KeywordNode,
    primitive_type::JsonKind,
};

/// Canonical forms of the admitted values. Booleans and null are
/// tracked as flags so the set only ever holds forms that need real
/// comparison.
#[derive(Debug)]
pub(crate) struct EnumValidator {
    values: AHashSet<String>,
    has_true: bool,
    has_false: bool,
    has_null: bool,
}

impl EnumValidator {
    pub(crate) fn validate(&self, instance: &Value) -> Result<(), ValidationError> {
        let admitted = match JsonKind::of(instance) {
            JsonKind::True => self.has_true,
            JsonKind::False => self.has_false,
            JsonKind::Null => self.has_null,
            _ => self.values.contains(&canon::canonical(instance)?),
        };
        if admitted {
            Ok(())
        } else {
            Err(ValidationError::mismatch("enum"))
        }
    }
}

pub(crate) fn compile(value: &Value) -> Result<KeywordNode, CompileError> {
    let options = match value {
        Value::Array(options) => options,
        _ => return Err(CompileError::InvalidArgument { keyword: "enum" }),
    };
    let mut validator = EnumValidator {
        values: AHashSet::with_capacity(options.len()),
        has_true: false,
        has_false: false,
        has_null: false,
    };
    for option in options {
        match JsonKind::of(option) {
            JsonKind::True => validator.has_true = true,
            JsonKind::False => validator.has_false = true,
            JsonKind::Null => validator.has_null = true,
            _ => {
                let canonical = canon::canonical(option).map_err(|_| {
                    CompileError::DepthExceeded {
                        limit: canon::DEPTH_BUDGET,
                    }
                })?;
                validator.values.insert(canonical);
            }
        }
    }
    Ok(KeywordNode::new(Keyword::Enum, Payload::Enum(validator)))
}
