//! `title`, `description`, `$comment`, `$schema`, `deprecated`,
//! `readOnly`, `writeOnly`, `example`, `default`: nothing to
//! validate, but the argument still has a required kind.

use serde_json::Value;

use crate::{
    error::CompileError,
    keywords::{Keyword, Payload},
    node::KeywordNode,
};

fn node() -> KeywordNode {
    KeywordNode::new(Keyword::Annotation, Payload::Annotation)
}

pub(crate) fn compile_string_valued(
    keyword: &'static str,
    value: &Value,
) -> Result<KeywordNode, CompileError> {
    if value.is_string() {
        Ok(node())
    } else {
        Err(CompileError::InvalidArgument { keyword })
    }
}

pub(crate) fn compile_boolean_valued(
    keyword: &'static str,
    value: &Value,
) -> Result<KeywordNode, CompileError> {
    if value.is_boolean() {
        Ok(node())
    } else {
        Err(CompileError::InvalidArgument { keyword })
    }
}

pub(crate) fn compile_array_valued(
    keyword: &'static str,
    value: &Value,
) -> Result<KeywordNode, CompileError> {
    if value.is_array() {
        Ok(node())
    } else {
        Err(CompileError::InvalidArgument { keyword })
    }
}

pub(crate) fn compile_free() -> KeywordNode {
    node()
}

#[cfg(test)]
mod tests {
    use crate::tests_util;
    use serde_json::{json, Value};
    use test_case::test_case;

    #[test]
    fn annotations_never_reject() {
        let schema = json!({
            "title": "t",
            "description": "d",
            "deprecated": true,
            "example": [1],
            "default": {"anything": ["goes"]}
        });
        tests_util::is_valid(&schema, &json!(null));
        tests_util::is_valid(&schema, &json!({"x": 1}));
    }

    #[test_case(&json!({"title": 3}), "title")]
    #[test_case(&json!({"$schema": false}), "$schema")]
    #[test_case(&json!({"readOnly": "yes"}), "readOnly")]
    #[test_case(&json!({"example": "not an array"}), "example")]
    fn argument_kinds_are_checked(schema: &Value, keyword: &str) {
        tests_util::does_not_compile(schema, keyword);
    }

    #[test]
    fn unknown_keywords_are_skipped() {
        tests_util::is_valid(&json!({"x-vendor": {"weird": true}}), &json!(1));
    }
}
