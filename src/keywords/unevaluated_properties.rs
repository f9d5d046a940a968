use serde_json::Value;

use crate::{
    compiler::Context,
    error::{CompileError, ValidationError},
    keywords::{helpers, Keyword, Payload},
    node::{KeywordNode, Scope, SchemaList},
};

/// Tail of the object applicator chain. Reached through the chain
/// (from an adjacent applicator, or injected by a combinator) it
/// decides the delegated member; as chain head it applies its
/// sub-schema to every member value. The `allowed` flag is consulted
/// only on the chain path.
#[derive(Debug)]
pub(crate) struct UnevaluatedPropertiesValidator {
    schema: SchemaList,
}

impl UnevaluatedPropertiesValidator {
    pub(crate) fn validate(&self, instance: &Value) -> Result<(), ValidationError> {
        if let Value::Object(members) = instance {
            for member in members.values() {
                self.schema.validate(member, Scope::default())?;
            }
        }
        Ok(())
    }

    pub(crate) fn validate_as_alternate(&self, member: &Value) -> Result<(), ValidationError> {
        self.schema.validate(member, Scope::default())
    }
}

pub(crate) fn compile(ctx: &Context<'_>, value: &Value) -> Result<KeywordNode, CompileError> {
    let (schema, allowed) = helpers::subschema_or_flag(ctx, value, "unevaluatedProperties")?;
    Ok(
        KeywordNode::new(
            Keyword::UnevaluatedProperties,
            Payload::UnevaluatedProperties(UnevaluatedPropertiesValidator { schema }),
        )
        .with_allowed(allowed),
    )
}
