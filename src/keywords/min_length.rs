use serde_json::Value;

use crate::{
    error::{CompileError, ValidationError},
    keywords::{helpers, Keyword, Payload},
    node::KeywordNode,
};

#[derive(Debug)]
pub(crate) struct MinLengthValidator {
    limit: u64,
}

impl MinLengthValidator {
    pub(crate) fn validate(&self, instance: &Value) -> Result<(), ValidationError> {
        if let Value::String(value) = instance {
            if (value.len() as u64) < self.limit {
                return Err(ValidationError::mismatch("minLength"));
            }
        }
        Ok(())
    }
}

pub(crate) fn compile(value: &Value) -> Result<KeywordNode, CompileError> {
    let limit = helpers::require_unsigned(value, "minLength")?;
    Ok(KeywordNode::new(
        Keyword::MinLength,
        Payload::MinLength(MinLengthValidator { limit }),
    ))
}
