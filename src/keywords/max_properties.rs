use serde_json::Value;

use crate::{
    error::{CompileError, ValidationError},
    keywords::{helpers, Keyword, Payload},
    node::KeywordNode,
};

#[derive(Debug)]
pub(crate) struct MaxPropertiesValidator {
    limit: u64,
}

impl MaxPropertiesValidator {
    pub(crate) fn validate(&self, instance: &Value) -> Result<(), ValidationError> {
        if let Value::Object(members) = instance {
            if members.len() as u64 > self.limit {
                return Err(ValidationError::mismatch("maxProperties"));
            }
        }
        Ok(())
    }
}

pub(crate) fn compile(value: &Value) -> Result<KeywordNode, CompileError> {
    let limit = helpers::require_unsigned(value, "maxProperties")?;
    Ok(KeywordNode::new(
        Keyword::MaxProperties,
        Payload::MaxProperties(MaxPropertiesValidator { limit }),
    ))
}
