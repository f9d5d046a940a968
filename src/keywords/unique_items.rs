use ahash::AHashSet;
use serde_json::Value;

use crate::{
    canon,
    error::{CompileError, ValidationError},
    keywords::{Keyword, Payload},
    node::KeywordNode,
    primitive_type::JsonKind,
};

/// Uniqueness over canonical forms. The three scalar literals use
/// flags so they never pass through the canonicaliser or the set.
#[derive(Debug)]
pub(crate) struct UniqueItemsValidator {
    enabled: bool,
}

impl UniqueItemsValidator {
    pub(crate) fn validate(&self, instance: &Value) -> Result<(), ValidationError> {
        if !self.enabled {
            return Ok(());
        }
        let items = match instance {
            Value::Array(items) => items,
            _ => return Ok(()),
        };
        let mut seen = AHashSet::with_capacity(items.len());
        let mut seen_true = false;
        let mut seen_false = false;
        let mut seen_null = false;
        for item in items {
            let fresh = match JsonKind::of(item) {
                JsonKind::True => !std::mem::replace(&mut seen_true, true),
                JsonKind::False => !std::mem::replace(&mut seen_false, true),
                JsonKind::Null => !std::mem::replace(&mut seen_null, true),
                _ => seen.insert(canon::canonical(item)?),
            };
            if !fresh {
                return Err(ValidationError::mismatch("uniqueItems"));
            }
        }
        Ok(())
    }
}

pub(crate) fn compile(value: &Value) -> Result<KeywordNode, CompileError> {
    match value {
        Value::Bool(enabled) => Ok(KeywordNode::new(
            Keyword::UniqueItems,
            Payload::UniqueItems(UniqueItemsValidator { enabled: *enabled }),
        )),
        _ => Err(CompileError::InvalidArgument {
            keyword: "uniqueItems",
        }),
    }
}
