use serde_json::Value;

use crate::{
    compiler::Context,
    error::{CompileError, ValidationError},
    keywords::{helpers, Keyword, Payload},
    node::{KeywordNode, Scope, SchemaList},
};

/// Chain terminator for object members. Reached through the
/// fall-back protocol it validates the single delegated member;
/// reached directly (as chain head) it applies the sub-schema to the
/// whole value, as the source's shared implementation does. A
/// boolean argument leaves the sub-schema empty and parks the
/// permission on the node's `allowed` flag.
#[derive(Debug)]
pub(crate) struct AdditionalPropertiesValidator {
    schema: SchemaList,
}

impl AdditionalPropertiesValidator {
    pub(crate) fn validate(&self, instance: &Value) -> Result<(), ValidationError> {
        self.schema.validate(instance, Scope::default())
    }

    pub(crate) fn validate_as_alternate(&self, member: &Value) -> Result<(), ValidationError> {
        self.schema.validate(member, Scope::default())
    }
}

pub(crate) fn compile(ctx: &Context<'_>, value: &Value) -> Result<KeywordNode, CompileError> {
    let (schema, allowed) = helpers::subschema_or_flag(ctx, value, "additionalProperties")?;
    Ok(
        KeywordNode::new(
            Keyword::AdditionalProperties,
            Payload::AdditionalProperties(AdditionalPropertiesValidator { schema }),
        )
        .with_allowed(allowed),
    )
}
