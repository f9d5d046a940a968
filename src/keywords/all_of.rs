use serde_json::Value;

use crate::{
    compiler::Context,
    error::{CompileError, ValidationError},
    keywords::{helpers, Keyword, Payload},
    node::{KeywordNode, SchemaList},
};

#[derive(Debug)]
pub(crate) struct AllOfValidator {
    schemas: Vec<SchemaList>,
}

impl AllOfValidator {
    pub(crate) fn validate(
        &self,
        node: &KeywordNode,
        list: &SchemaList,
        instance: &Value,
    ) -> Result<(), ValidationError> {
        let passing = helpers::count_passing(&self.schemas, instance, node.child_scope(list))?;
        if passing == self.schemas.len() {
            Ok(())
        } else {
            Err(ValidationError::mismatch("allOf"))
        }
    }
}

pub(crate) fn compile(ctx: &Context<'_>, value: &Value) -> Result<KeywordNode, CompileError> {
    let schemas = helpers::compile_subschema_array(ctx, value, "allOf")?;
    Ok(KeywordNode::new(
        Keyword::AllOf,
        Payload::AllOf(AllOfValidator { schemas }),
    ))
}
