use serde_json::Value;

use crate::{
    compiler::Context,
    error::{CompileError, ValidationError},
    keywords::{helpers, Keyword, Payload},
    node::{KeywordNode, Scope, SchemaList},
};

/// Chain terminator for array elements; same shape as the
/// additional/unevaluated object keywords.
#[derive(Debug)]
pub(crate) struct AdditionalItemsValidator {
    schema: SchemaList,
}

impl AdditionalItemsValidator {
    pub(crate) fn validate(&self, instance: &Value) -> Result<(), ValidationError> {
        self.schema.validate(instance, Scope::default())
    }

    pub(crate) fn validate_as_alternate(&self, item: &Value) -> Result<(), ValidationError> {
        self.schema.validate(item, Scope::default())
    }
}

pub(crate) fn compile(ctx: &Context<'_>, value: &Value) -> Result<KeywordNode, CompileError> {
    let (schema, allowed) = helpers::subschema_or_flag(ctx, value, "additionalItems")?;
    Ok(
        KeywordNode::new(
            Keyword::AdditionalItems,
            Payload::AdditionalItems(AdditionalItemsValidator { schema }),
        )
        .with_allowed(allowed),
    )
}

#[cfg(test)]
mod tests {
    use crate::tests_util;
    use serde_json::{json, Value};
    use test_case::test_case;

    #[test_case(&json!({"prefixItems": [{}], "additionalItems": {"type": "integer"}}), &json!(["head", 1, 2]))]
    #[test_case(&json!({"prefixItems": [{}], "additionalItems": false}), &json!(["head"]))]
    fn accepts(schema: &Value, instance: &Value) {
        tests_util::is_valid(schema, instance);
    }

    #[test_case(&json!({"prefixItems": [{}], "additionalItems": false}), &json!(["head", "extra"]), "additionalItems")]
    #[test_case(&json!({"prefixItems": [{}], "additionalItems": {"type": "integer"}}), &json!(["head", "extra"]), "type")]
    fn rejects(schema: &Value, instance: &Value, keyword: &str) {
        tests_util::fails_at(schema, instance, keyword);
    }
}
