use serde_json::Value;

use crate::{
    compiler::Context,
    error::{CompileError, ValidationError},
    keywords::{helpers, Keyword, Payload},
    node::{KeywordNode, Scope, SchemaList},
};

/// Tail of the array applicator chain; combinators inject it as the
/// terminator for their sub-schemas' chains.
#[derive(Debug)]
pub(crate) struct UnevaluatedItemsValidator {
    schema: SchemaList,
}

impl UnevaluatedItemsValidator {
    pub(crate) fn validate(&self, instance: &Value) -> Result<(), ValidationError> {
        self.schema.validate(instance, Scope::default())
    }

    pub(crate) fn validate_as_alternate(&self, item: &Value) -> Result<(), ValidationError> {
        self.schema.validate(item, Scope::default())
    }
}

pub(crate) fn compile(ctx: &Context<'_>, value: &Value) -> Result<KeywordNode, CompileError> {
    let (schema, allowed) = helpers::subschema_or_flag(ctx, value, "unevaluatedItems")?;
    Ok(
        KeywordNode::new(
            Keyword::UnevaluatedItems,
            Payload::UnevaluatedItems(UnevaluatedItemsValidator { schema }),
        )
        .with_allowed(allowed),
    )
}
