use serde_json::Value;

use crate::{
    compiler::{self, Context},
    error::{CompileError, ValidationError},
    keywords::{Keyword, Payload},
    node::{KeywordNode, Scope, SchemaList},
};

/// Each key is validated as if it were a JSON string value.
#[derive(Debug)]
pub(crate) struct PropertyNamesValidator {
    schema: SchemaList,
}

impl PropertyNamesValidator {
    pub(crate) fn validate(&self, instance: &Value) -> Result<(), ValidationError> {
        if let Value::Object(members) = instance {
            for key in members.keys() {
                self.schema
                    .validate(&Value::String(key.clone()), Scope::default())?;
            }
        }
        Ok(())
    }
}

pub(crate) fn compile(ctx: &Context<'_>, value: &Value) -> Result<KeywordNode, CompileError> {
    let schema = compiler::compile_subschema(ctx, value, "propertyNames")?;
    Ok(KeywordNode::new(
        Keyword::PropertyNames,
        Payload::PropertyNames(PropertyNamesValidator { schema }),
    ))
}
