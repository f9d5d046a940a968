use serde_json::Value;

use crate::{
    canon,
    error::{CompileError, ValidationError},
    keywords::{Keyword, Payload},
    node::KeywordNode,
    primitive_type::JsonKind,
};

/// The expected value is stored as a kind tag plus its canonical
/// textual form, so `{"const": 1}` accepts `1.0` and key order in
/// object constants is irrelevant.
#[derive(Debug)]
pub(crate) struct ConstValidator {
    kind: JsonKind,
    canonical: String,
}

impl ConstValidator {
    pub(crate) fn validate(&self, instance: &Value) -> Result<(), ValidationError> {
        if JsonKind::of(instance) != self.kind {
            return Err(ValidationError::mismatch("const"));
        }
        if canon::canonical(instance)? == self.canonical {
            Ok(())
        } else {
            Err(ValidationError::mismatch("const"))
        }
    }
}

pub(crate) fn compile(value: &Value) -> Result<KeywordNode, CompileError> {
    let canonical = canon::canonical(value).map_err(|_| CompileError::DepthExceeded {
        limit: canon::DEPTH_BUDGET,
    })?;
    Ok(KeywordNode::new(
        Keyword::Const,
        Payload::Const(ConstValidator {
            kind: JsonKind::of(value),
            canonical,
        }),
    ))
}
