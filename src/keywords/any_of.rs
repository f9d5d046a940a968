use serde_json::Value;

use crate::{
    compiler::Context,
    error::{CompileError, ValidationError},
    keywords::{helpers, Keyword, Payload},
    node::{KeywordNode, SchemaList},
};

#[derive(Debug)]
pub(crate) struct AnyOfValidator {
    schemas: Vec<SchemaList>,
}

impl AnyOfValidator {
    pub(crate) fn validate(
        &self,
        node: &KeywordNode,
        list: &SchemaList,
        instance: &Value,
    ) -> Result<(), ValidationError> {
        let passing = helpers::count_passing(&self.schemas, instance, node.child_scope(list))?;
        if passing > 0 {
            Ok(())
        } else {
            Err(ValidationError::mismatch("anyOf"))
        }
    }
}

pub(crate) fn compile(ctx: &Context<'_>, value: &Value) -> Result<KeywordNode, CompileError> {
    let schemas = helpers::compile_subschema_array(ctx, value, "anyOf")?;
    Ok(KeywordNode::new(
        Keyword::AnyOf,
        Payload::AnyOf(AnyOfValidator { schemas }),
    ))
}
