use serde_json::Value;

use crate::{
    error::{CompileError, ValidationError},
    keywords::{helpers, Keyword, Payload},
    node::KeywordNode,
};

#[derive(Debug)]
pub(crate) struct ExclusiveMinimumValidator {
    limit: f64,
}

impl ExclusiveMinimumValidator {
    pub(crate) fn validate(&self, instance: &Value) -> Result<(), ValidationError> {
        if let Value::Number(value) = instance {
            if helpers::num_le(value, self.limit) {
                return Err(ValidationError::mismatch("exclusiveMinimum"));
            }
        }
        Ok(())
    }
}

pub(crate) fn compile(value: &Value) -> Result<KeywordNode, CompileError> {
    match value.as_f64() {
        Some(limit) => Ok(KeywordNode::new(
            Keyword::ExclusiveMinimum,
            Payload::ExclusiveMinimum(ExclusiveMinimumValidator { limit }),
        )),
        None => Err(CompileError::InvalidArgument {
            keyword: "exclusiveMinimum",
        }),
    }
}
