use serde_json::Value;

use crate::{
    compiler::Context,
    error::{CompileError, ValidationError},
    keywords::{helpers, Keyword, Payload},
    node::{KeywordNode, SchemaList},
};

#[derive(Debug)]
pub(crate) struct OneOfValidator {
    schemas: Vec<SchemaList>,
}

impl OneOfValidator {
    pub(crate) fn validate(
        &self,
        node: &KeywordNode,
        list: &SchemaList,
        instance: &Value,
    ) -> Result<(), ValidationError> {
        let passing = helpers::count_passing(&self.schemas, instance, node.child_scope(list))?;
        if passing == 1 {
            Ok(())
        } else {
            Err(ValidationError::mismatch("oneOf"))
        }
    }
}

pub(crate) fn compile(ctx: &Context<'_>, value: &Value) -> Result<KeywordNode, CompileError> {
    let schemas = helpers::compile_subschema_array(ctx, value, "oneOf")?;
    Ok(KeywordNode::new(
        Keyword::OneOf,
        Payload::OneOf(OneOfValidator { schemas }),
    ))
}

#[cfg(test)]
mod tests {
    use crate::tests_util;
    use serde_json::{json, Value};
    use test_case::test_case;

    #[test_case(&json!({"oneOf": [{"type": "integer"}, {"minimum": 2}]}), &json!(1); "first branch only")]
    #[test_case(&json!({"oneOf": [{"type": "integer"}, {"minimum": 2}]}), &json!(2.5); "second branch only")]
    fn accepts(schema: &Value, instance: &Value) {
        tests_util::is_valid(schema, instance);
    }

    #[test_case(&json!({"oneOf": [{"type": "integer"}, {"minimum": 2}]}), &json!(3); "both branches")]
    #[test_case(&json!({"oneOf": [{"type": "integer"}, {"minimum": 2}]}), &json!(1.5); "neither branch")]
    #[test_case(&json!({"oneOf": []}), &json!(1); "no branches")]
    fn rejects(schema: &Value, instance: &Value) {
        tests_util::fails_at(schema, instance, "oneOf");
    }
}
