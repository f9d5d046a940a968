use serde_json::Value;

use crate::{
    error::{CompileError, ValidationError},
    keywords::{helpers, Keyword, Payload},
    node::KeywordNode,
};

#[derive(Debug)]
pub(crate) struct ExclusiveMaximumValidator {
    limit: f64,
}

impl ExclusiveMaximumValidator {
    pub(crate) fn validate(&self, instance: &Value) -> Result<(), ValidationError> {
        if let Value::Number(value) = instance {
            if helpers::num_ge(value, self.limit) {
                return Err(ValidationError::mismatch("exclusiveMaximum"));
            }
        }
        Ok(())
    }
}

pub(crate) fn compile(value: &Value) -> Result<KeywordNode, CompileError> {
    match value.as_f64() {
        Some(limit) => Ok(KeywordNode::new(
            Keyword::ExclusiveMaximum,
            Payload::ExclusiveMaximum(ExclusiveMaximumValidator { limit }),
        )),
        None => Err(CompileError::InvalidArgument {
            keyword: "exclusiveMaximum",
        }),
    }
}

#[cfg(test)]
mod tests {
    use crate::tests_util;
    use serde_json::{json, Value};
    use test_case::test_case;

    #[test_case(&json!({"exclusiveMaximum": 3}), &json!(2.9))]
    #[test_case(&json!({"exclusiveMaximum": 3}), &json!("3"); "strings are ignored")]
    fn accepts(schema: &Value, instance: &Value) {
        tests_util::is_valid(schema, instance);
    }

    #[test_case(&json!({"exclusiveMaximum": 3}), &json!(3))]
    #[test_case(&json!({"exclusiveMaximum": 3}), &json!(3.0))]
    #[test_case(&json!({"exclusiveMaximum": 3}), &json!(4))]
    fn rejects(schema: &Value, instance: &Value) {
        tests_util::fails_at(schema, instance, "exclusiveMaximum");
    }
}
