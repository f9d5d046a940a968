use serde_json::Value;

use crate::{
    error::{CompileError, ValidationError},
    keywords::{Keyword, Payload},
    node::KeywordNode,
};

#[derive(Debug)]
pub(crate) struct RequiredValidator {
    required: Vec<String>,
}

impl RequiredValidator {
    pub(crate) fn validate(&self, instance: &Value) -> Result<(), ValidationError> {
        if let Value::Object(members) = instance {
            for name in &self.required {
                if !members.contains_key(name) {
                    return Err(ValidationError::mismatch("required"));
                }
            }
        }
        Ok(())
    }
}

pub(crate) fn compile(value: &Value) -> Result<KeywordNode, CompileError> {
    let names = match value {
        Value::Array(names) => names,
        _ => return Err(CompileError::InvalidArgument { keyword: "required" }),
    };
    let mut required = Vec::with_capacity(names.len());
    for name in names {
        match name {
            Value::String(name) => required.push(name.clone()),
            _ => return Err(CompileError::InvalidArgument { keyword: "required" }),
        }
    }
    Ok(KeywordNode::new(
        Keyword::Required,
        Payload::Required(RequiredValidator { required }),
    ))
}
