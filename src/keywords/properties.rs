use ahash::AHashMap;
use serde_json::Value;

use crate::{
    compiler::{self, Context},
    error::{CompileError, ValidationError},
    keywords::{Keyword, Payload},
    node::{KeywordNode, Scope, SchemaList},
};

/// Head of the object applicator chain: keys found in the map
/// validate against their sub-schema, everything else is delegated
/// through the fall-back protocol.
#[derive(Debug)]
pub(crate) struct PropertiesValidator {
    properties: AHashMap<String, SchemaList>,
}

impl PropertiesValidator {
    pub(crate) fn validate(
        &self,
        node: &KeywordNode,
        list: &SchemaList,
        instance: &Value,
        scope: Scope<'_>,
    ) -> Result<(), ValidationError> {
        if let Value::Object(members) = instance {
            for (key, member) in members {
                match self.properties.get(key) {
                    Some(schema) => schema.validate(member, Scope::default())?,
                    None => node.fall_back_member(list, scope, key, member)?,
                }
            }
        }
        Ok(())
    }

    pub(crate) fn validate_as_alternate(
        &self,
        key: &str,
        member: &Value,
    ) -> Result<(), ValidationError> {
        match self.properties.get(key) {
            Some(schema) => schema.validate(member, Scope::default()),
            None => Ok(()),
        }
    }
}

pub(crate) fn compile(ctx: &Context<'_>, value: &Value) -> Result<KeywordNode, CompileError> {
    let entries = match value {
        Value::Object(entries) => entries,
        _ => {
            return Err(CompileError::InvalidArgument {
                keyword: "properties",
            })
        }
    };
    let mut properties = AHashMap::with_capacity(entries.len());
    for (key, entry) in entries {
        properties.insert(
            key.clone(),
            compiler::compile_subschema(ctx, entry, "properties")?,
        );
    }
    Ok(KeywordNode::new(
        Keyword::Properties,
        Payload::Properties(PropertiesValidator { properties }),
    ))
}

#[cfg(test)]
mod tests {
    use crate::tests_util;
    use serde_json::{json, Value};
    use test_case::test_case;

    #[test_case(&json!({"properties": {"a": {"type": "string"}}}), &json!({"a": "x"}))]
    #[test_case(&json!({"properties": {"a": {"type": "string"}}}), &json!({"b": 1}); "unlisted keys pass without a chain")]
    #[test_case(&json!({"properties": {"a": {"type": "string"}}}), &json!({}))]
    #[test_case(&json!({"properties": {"a": {"type": "string"}}}), &json!(["a"]); "arrays are ignored")]
    fn accepts(schema: &Value, instance: &Value) {
        tests_util::is_valid(schema, instance);
    }

    #[test]
    fn rejects_on_the_inner_keyword() {
        tests_util::fails_at(
            &json!({"properties": {"a": {"type": "string"}}}),
            &json!({"a": 1}),
            "type",
        );
    }

    #[test]
    fn boolean_member_schema() {
        tests_util::is_not_valid(&json!({"properties": {"a": false}}), &json!({"a": 1}));
        tests_util::is_valid(&json!({"properties": {"a": false}}), &json!({"b": 1}));
    }

    #[test]
    fn bad_argument() {
        tests_util::does_not_compile(&json!({"properties": [1]}), "properties");
    }
}
