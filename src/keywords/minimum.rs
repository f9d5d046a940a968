use serde_json::Value;

use crate::{
    error::{CompileError, ValidationError},
    keywords::{helpers, Keyword, Payload},
    node::KeywordNode,
};

#[derive(Debug)]
pub(crate) struct MinimumValidator {
    limit: f64,
}

impl MinimumValidator {
    pub(crate) fn validate(&self, instance: &Value) -> Result<(), ValidationError> {
        if let Value::Number(value) = instance {
            if helpers::num_lt(value, self.limit) {
                return Err(ValidationError::mismatch("minimum"));
            }
        }
        Ok(())
    }
}

pub(crate) fn compile(value: &Value) -> Result<KeywordNode, CompileError> {
    match value.as_f64() {
        Some(limit) => Ok(KeywordNode::new(
            Keyword::Minimum,
            Payload::Minimum(MinimumValidator { limit }),
        )),
        None => Err(CompileError::InvalidArgument { keyword: "minimum" }),
    }
}
