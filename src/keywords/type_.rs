use serde_json::Value;

use crate::{
    error::{CompileError, ValidationError},
    keywords::{Keyword, Payload},
    node::KeywordNode,
    primitive_type::{JsonKind, KindSet},
};

#[derive(Debug)]
pub(crate) struct TypeValidator {
    types: KindSet,
}

impl TypeValidator {
    pub(crate) fn validate(&self, instance: &Value) -> Result<(), ValidationError> {
        if self.types.contains(JsonKind::of(instance)) {
            Ok(())
        } else {
            Err(ValidationError::mismatch("type"))
        }
    }
}

pub(crate) fn compile(value: &Value) -> Result<KeywordNode, CompileError> {
    let mut types = KindSet::empty();
    match value {
        Value::String(name) => {
            if !types.insert_name(name) {
                return Err(invalid());
            }
        }
        Value::Array(names) => {
            for name in names {
                match name {
                    Value::String(name) if types.insert_name(name) => {}
                    _ => return Err(invalid()),
                }
            }
        }
        _ => return Err(invalid()),
    }
    Ok(KeywordNode::new(
        Keyword::Type,
        Payload::Type(TypeValidator { types }),
    ))
}

fn invalid() -> CompileError {
    CompileError::InvalidArgument { keyword: "type" }
}
