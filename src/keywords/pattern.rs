use fancy_regex::Regex;
use serde_json::Value;

use crate::{
    error::{CompileError, ValidationError},
    keywords::{Keyword, Payload},
    node::KeywordNode,
};

/// The regex is compiled once and frozen; `fancy_regex` matching is
/// re-entrant, so the node shares across validation threads. A
/// runtime matcher error (backtrack limit) counts as a mismatch.
#[derive(Debug)]
pub(crate) struct PatternValidator {
    pattern: Regex,
}

impl PatternValidator {
    pub(crate) fn validate(&self, instance: &Value) -> Result<(), ValidationError> {
        if let Value::String(value) = instance {
            if !self.pattern.is_match(value).unwrap_or(false) {
                return Err(ValidationError::mismatch("pattern"));
            }
        }
        Ok(())
    }
}

pub(crate) fn compile(value: &Value) -> Result<KeywordNode, CompileError> {
    let pattern = match value {
        Value::String(pattern) => pattern,
        _ => return Err(CompileError::InvalidArgument { keyword: "pattern" }),
    };
    match Regex::new(pattern) {
        Ok(pattern) => Ok(KeywordNode::new(
            Keyword::Pattern,
            Payload::Pattern(PatternValidator { pattern }),
        )),
        Err(_) => Err(CompileError::InvalidArgument { keyword: "pattern" }),
    }
}
