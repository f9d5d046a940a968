use serde_json::Value;

use crate::{
    compiler::{self, Context},
    error::{CompileError, ValidationError},
    keywords::{Keyword, Payload},
    node::{KeywordNode, SchemaList},
};

#[derive(Debug)]
pub(crate) struct NotValidator {
    schema: SchemaList,
}

impl NotValidator {
    pub(crate) fn validate(
        &self,
        node: &KeywordNode,
        list: &SchemaList,
        instance: &Value,
    ) -> Result<(), ValidationError> {
        match self.schema.validate(instance, node.child_scope(list)) {
            Ok(()) => Err(ValidationError::mismatch("not")),
            Err(error) if error.is_fatal() => Err(error),
            Err(_) => Ok(()),
        }
    }
}

pub(crate) fn compile(ctx: &Context<'_>, value: &Value) -> Result<KeywordNode, CompileError> {
    let schema = compiler::compile_subschema(ctx, value, "not")?;
    Ok(KeywordNode::new(
        Keyword::Not,
        Payload::Not(NotValidator { schema }),
    ))
}
