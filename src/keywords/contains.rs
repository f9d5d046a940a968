use serde_json::Value;

use crate::{
    compiler::{self, Context},
    error::{CompileError, ValidationError},
    keywords::{helpers, Keyword, Payload},
    node::{KeywordNode, Scope, SchemaList},
};

/// Counts elements matching the owned sub-schema; the admissible
/// window comes from wired `minContains`/`maxContains` siblings and
/// defaults to `[1, ∞]`.
#[derive(Debug)]
pub(crate) struct ContainsValidator {
    schema: SchemaList,
    min_contains: Option<usize>,
    max_contains: Option<usize>,
}

/// Payload of a `minContains`/`maxContains` node; inert on its own,
/// read through the sibling `contains`.
#[derive(Debug)]
pub(crate) struct ContainsBoundValidator {
    pub(crate) limit: u64,
}

impl ContainsValidator {
    pub(crate) fn set_dependents(&mut self, min_contains: Option<usize>, max_contains: Option<usize>) {
        self.min_contains = min_contains;
        self.max_contains = max_contains;
    }

    pub(crate) fn validate(
        &self,
        list: &SchemaList,
        instance: &Value,
    ) -> Result<(), ValidationError> {
        let items = match instance {
            Value::Array(items) => items,
            _ => return Ok(()),
        };
        let mut matches: u64 = 0;
        for item in items {
            match self.schema.validate(item, Scope::default()) {
                Ok(()) => matches += 1,
                Err(error) if error.is_fatal() => return Err(error),
                Err(_) => {}
            }
        }
        let minimum = self
            .min_contains
            .and_then(|index| list.contains_bound(index))
            .unwrap_or(1);
        if matches < minimum {
            let keyword = if self.min_contains.is_some() {
                "minContains"
            } else {
                "contains"
            };
            return Err(ValidationError::mismatch(keyword));
        }
        if let Some(maximum) = self
            .max_contains
            .and_then(|index| list.contains_bound(index))
        {
            if matches > maximum {
                return Err(ValidationError::mismatch("maxContains"));
            }
        }
        Ok(())
    }
}

pub(crate) fn compile(ctx: &Context<'_>, value: &Value) -> Result<KeywordNode, CompileError> {
    let schema = compiler::compile_subschema(ctx, value, "contains")?;
    Ok(KeywordNode::new(
        Keyword::Contains,
        Payload::Contains(ContainsValidator {
            schema,
            min_contains: None,
            max_contains: None,
        }),
    ))
}

pub(crate) fn compile_bound(keyword: Keyword, value: &Value) -> Result<KeywordNode, CompileError> {
    let limit = helpers::require_unsigned(value, keyword.as_str())?;
    Ok(KeywordNode::new(
        keyword,
        Payload::ContainsBound(ContainsBoundValidator { limit }),
    ))
}

#[cfg(test)]
mod tests {
    use crate::tests_util;
    use serde_json::{json, Value};
    use test_case::test_case;

    #[test_case(&json!({"contains": {"minimum": 5}}), &json!([1, 5, 2]))]
    #[test_case(&json!({"contains": {"minimum": 5}}), &json!("55"); "strings are ignored")]
    #[test_case(&json!({"contains": {"minimum": 5}, "minContains": 2}), &json!([5, 6, 1]))]
    #[test_case(&json!({"contains": {"minimum": 5}, "minContains": 0}), &json!([]); "explicit zero minimum")]
    #[test_case(&json!({"contains": {"minimum": 5}, "maxContains": 2}), &json!([5, 6, 1]))]
    #[test_case(&json!({"contains": {"minimum": 5}, "minContains": 1, "maxContains": 1}), &json!([5]))]
    fn accepts(schema: &Value, instance: &Value) {
        tests_util::is_valid(schema, instance);
    }

    #[test_case(&json!({"contains": {"minimum": 5}}), &json!([1, 2]), "contains")]
    #[test_case(&json!({"contains": {"minimum": 5}}), &json!([]), "contains")]
    #[test_case(&json!({"contains": {"minimum": 5}, "minContains": 2}), &json!([5, 1]), "minContains")]
    #[test_case(&json!({"contains": {"minimum": 5}, "maxContains": 1}), &json!([5, 6]), "maxContains")]
    fn rejects(schema: &Value, instance: &Value, keyword: &str) {
        tests_util::fails_at(schema, instance, keyword);
    }

    #[test]
    fn bounds_without_contains_are_inert() {
        tests_util::is_valid(&json!({"minContains": 2}), &json!([]));
        tests_util::is_valid(&json!({"maxContains": 0}), &json!([1, 2, 3]));
    }

    #[test_case(&json!({"contains": 3}), "contains")]
    #[test_case(&json!({"contains": {}, "minContains": -1}), "minContains")]
    #[test_case(&json!({"contains": {}, "maxContains": "2"}), "maxContains")]
    fn bad_argument(schema: &Value, keyword: &str) {
        tests_util::does_not_compile(schema, keyword);
    }
}
