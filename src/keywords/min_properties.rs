use serde_json::Value;

use crate::{
    error::{CompileError, ValidationError},
    keywords::{helpers, Keyword, Payload},
    node::KeywordNode,
};

#[derive(Debug)]
pub(crate) struct MinPropertiesValidator {
    limit: u64,
}

impl MinPropertiesValidator {
    pub(crate) fn validate(&self, instance: &Value) -> Result<(), ValidationError> {
        if let Value::Object(members) = instance {
            if (members.len() as u64) < self.limit {
                return Err(ValidationError::mismatch("minProperties"));
            }
        }
        Ok(())
    }
}

pub(crate) fn compile(value: &Value) -> Result<KeywordNode, CompileError> {
    let limit = helpers::require_unsigned(value, "minProperties")?;
    Ok(KeywordNode::new(
        Keyword::MinProperties,
        Payload::MinProperties(MinPropertiesValidator { limit }),
    ))
}
