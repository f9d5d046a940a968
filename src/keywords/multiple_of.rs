use serde_json::Value;

use crate::{
    error::{CompileError, ValidationError},
    keywords::{Keyword, Payload},
    node::KeywordNode,
};

#[derive(Debug)]
pub(crate) struct MultipleOfValidator {
    multiple: f64,
}

impl MultipleOfValidator {
    pub(crate) fn validate(&self, instance: &Value) -> Result<(), ValidationError> {
        if let Value::Number(value) = instance {
            let value = value
                .as_f64()
                .expect("a JSON number is always representable as f64");
            if (value / self.multiple).fract() != 0.0 {
                return Err(ValidationError::mismatch("multipleOf"));
            }
        }
        Ok(())
    }
}

pub(crate) fn compile(value: &Value) -> Result<KeywordNode, CompileError> {
    match value.as_f64() {
        Some(multiple) if multiple > 0.0 => Ok(KeywordNode::new(
            Keyword::MultipleOf,
            Payload::MultipleOf(MultipleOfValidator { multiple }),
        )),
        _ => Err(CompileError::InvalidArgument {
            keyword: "multipleOf",
        }),
    }
}

#[cfg(test)]
mod tests {
    use crate::tests_util;
    use serde_json::{json, Value};
    use test_case::test_case;

    #[test_case(&json!({"multipleOf": 2}), &json!(8); "multiple of two, eight")]
    #[test_case(&json!({"multipleOf": 2}), &json!(-8); "multiple of two, negative eight")]
    #[test_case(&json!({"multipleOf": 2}), &json!(0); "multiple of two, zero")]
    #[test_case(&json!({"multipleOf": 2.5}), &json!(7.5); "multiple of two point five, seven point five")]
    #[test_case(&json!({"multipleOf": 2}), &json!("7"); "strings are ignored")]
    fn accepts(schema: &Value, instance: &Value) {
        tests_util::is_valid(schema, instance);
    }

    #[test_case(&json!({"multipleOf": 2}), &json!(7))]
    #[test_case(&json!({"multipleOf": 2.5}), &json!(7))]
    fn rejects(schema: &Value, instance: &Value) {
        tests_util::fails_at(schema, instance, "multipleOf");
    }

    #[test_case(&json!({"multipleOf": "2"}))]
    #[test_case(&json!({"multipleOf": 0}); "zero divisor")]
    #[test_case(&json!({"multipleOf": -2}); "negative divisor")]
    fn bad_argument(schema: &Value) {
        tests_util::does_not_compile(schema, "multipleOf");
    }
}
