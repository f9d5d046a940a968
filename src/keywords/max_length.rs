use serde_json::Value;

use crate::{
    error::{CompileError, ValidationError},
    keywords::{helpers, Keyword, Payload},
    node::KeywordNode,
};

// Length facets count bytes of the decoded string, not characters.
#[derive(Debug)]
pub(crate) struct MaxLengthValidator {
    limit: u64,
}

impl MaxLengthValidator {
    pub(crate) fn validate(&self, instance: &Value) -> Result<(), ValidationError> {
        if let Value::String(value) = instance {
            if value.len() as u64 > self.limit {
                return Err(ValidationError::mismatch("maxLength"));
            }
        }
        Ok(())
    }
}

pub(crate) fn compile(value: &Value) -> Result<KeywordNode, CompileError> {
    let limit = helpers::require_unsigned(value, "maxLength")?;
    Ok(KeywordNode::new(
        Keyword::MaxLength,
        Payload::MaxLength(MaxLengthValidator { limit }),
    ))
}

#[cfg(test)]
mod tests {
    use crate::tests_util;
    use serde_json::{json, Value};
    use test_case::test_case;

    #[test_case(&json!({"maxLength": 3}), &json!("abc"))]
    #[test_case(&json!({"maxLength": 3}), &json!(""))]
    #[test_case(&json!({"maxLength": 3}), &json!(12345); "numbers are ignored")]
    fn accepts(schema: &Value, instance: &Value) {
        tests_util::is_valid(schema, instance);
    }

    #[test_case(&json!({"maxLength": 3}), &json!("abcd"))]
    #[test_case(&json!({"maxLength": 3}), &json!("éé"); "bytes, not characters")]
    fn rejects(schema: &Value, instance: &Value) {
        tests_util::fails_at(schema, instance, "maxLength");
    }

    #[test_case(&json!({"maxLength": -1}))]
    #[test_case(&json!({"maxLength": "3"}))]
    fn bad_argument(schema: &Value) {
        tests_util::does_not_compile(schema, "maxLength");
    }
}
