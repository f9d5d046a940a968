use serde_json::Value;

use crate::{
    error::{CompileError, ValidationError},
    keywords::{helpers, Keyword, Payload},
    node::KeywordNode,
};

#[derive(Debug)]
pub(crate) struct MaxItemsValidator {
    limit: u64,
}

impl MaxItemsValidator {
    pub(crate) fn validate(&self, instance: &Value) -> Result<(), ValidationError> {
        if let Value::Array(items) = instance {
            if items.len() as u64 > self.limit {
                return Err(ValidationError::mismatch("maxItems"));
            }
        }
        Ok(())
    }
}

pub(crate) fn compile(value: &Value) -> Result<KeywordNode, CompileError> {
    let limit = helpers::require_unsigned(value, "maxItems")?;
    Ok(KeywordNode::new(
        Keyword::MaxItems,
        Payload::MaxItems(MaxItemsValidator { limit }),
    ))
}
