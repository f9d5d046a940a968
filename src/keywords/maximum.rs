use serde_json::Value;

use crate::{
    error::{CompileError, ValidationError},
    keywords::{helpers, Keyword, Payload},
    node::KeywordNode,
};

#[derive(Debug)]
pub(crate) struct MaximumValidator {
    limit: f64,
}

impl MaximumValidator {
    pub(crate) fn validate(&self, instance: &Value) -> Result<(), ValidationError> {
        if let Value::Number(value) = instance {
            if helpers::num_gt(value, self.limit) {
                return Err(ValidationError::mismatch("maximum"));
            }
        }
        Ok(())
    }
}

pub(crate) fn compile(value: &Value) -> Result<KeywordNode, CompileError> {
    match value.as_f64() {
        Some(limit) => Ok(KeywordNode::new(
            Keyword::Maximum,
            Payload::Maximum(MaximumValidator { limit }),
        )),
        None => Err(CompileError::InvalidArgument { keyword: "maximum" }),
    }
}

#[cfg(test)]
mod tests {
    use crate::tests_util;
    use serde_json::{json, Value};
    use test_case::test_case;

    #[test_case(&json!({"maximum": 10}), &json!(10))]
    #[test_case(&json!({"maximum": 10}), &json!(9.5))]
    #[test_case(&json!({"maximum": 10.5}), &json!(10))]
    #[test_case(&json!({"maximum": 10}), &json!("11"); "strings are ignored")]
    #[test_case(&json!({"maximum": -1}), &json!(-3))]
    fn accepts(schema: &Value, instance: &Value) {
        tests_util::is_valid(schema, instance);
    }

    #[test_case(&json!({"maximum": 10}), &json!(11))]
    #[test_case(&json!({"maximum": 10}), &json!(10.5))]
    #[test_case(&json!({"maximum": -1}), &json!(0))]
    fn rejects(schema: &Value, instance: &Value) {
        tests_util::fails_at(schema, instance, "maximum");
    }

    #[test]
    fn bad_argument() {
        tests_util::does_not_compile(&json!({"maximum": "3"}), "maximum");
    }
}
