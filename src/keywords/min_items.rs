use serde_json::Value;

use crate::{
    error::{CompileError, ValidationError},
    keywords::{helpers, Keyword, Payload},
    node::KeywordNode,
};

#[derive(Debug)]
pub(crate) struct MinItemsValidator {
    limit: u64,
}

impl MinItemsValidator {
    pub(crate) fn validate(&self, instance: &Value) -> Result<(), ValidationError> {
        if let Value::Array(items) = instance {
            if (items.len() as u64) < self.limit {
                return Err(ValidationError::mismatch("minItems"));
            }
        }
        Ok(())
    }
}

pub(crate) fn compile(value: &Value) -> Result<KeywordNode, CompileError> {
    let limit = helpers::require_unsigned(value, "minItems")?;
    Ok(KeywordNode::new(
        Keyword::MinItems,
        Payload::MinItems(MinItemsValidator { limit }),
    ))
}
