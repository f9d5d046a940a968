use serde_json::Value;

use crate::{
    error::{CompileError, ValidationError},
    keywords::{Keyword, Payload},
    node::KeywordNode,
};

#[derive(Debug)]
pub(crate) struct DependentRequiredValidator {
    dependents: Vec<(String, Vec<String>)>,
}

impl DependentRequiredValidator {
    pub(crate) fn validate(&self, instance: &Value) -> Result<(), ValidationError> {
        if let Value::Object(members) = instance {
            for (trigger, names) in &self.dependents {
                if !members.contains_key(trigger) {
                    continue;
                }
                for name in names {
                    if !members.contains_key(name) {
                        return Err(ValidationError::mismatch("dependentRequired"));
                    }
                }
            }
        }
        Ok(())
    }
}

pub(crate) fn compile(value: &Value) -> Result<KeywordNode, CompileError> {
    let entries = match value {
        Value::Object(entries) => entries,
        _ => {
            return Err(CompileError::InvalidArgument {
                keyword: "dependentRequired",
            })
        }
    };
    let mut dependents = Vec::with_capacity(entries.len());
    for (trigger, names) in entries {
        // A non-array entry or a non-string name fails the whole
        // compilation; there is no meaningful partial reading.
        let names = match names {
            Value::Array(names) => names,
            _ => return Err(malformed()),
        };
        let mut resolved = Vec::with_capacity(names.len());
        for name in names {
            match name {
                Value::String(name) => resolved.push(name.clone()),
                _ => return Err(malformed()),
            }
        }
        dependents.push((trigger.clone(), resolved));
    }
    Ok(KeywordNode::new(
        Keyword::DependentRequired,
        Payload::DependentRequired(DependentRequiredValidator { dependents }),
    ))
}

fn malformed() -> CompileError {
    CompileError::Structural {
        keyword: "dependentRequired",
    }
}

#[cfg(test)]
mod tests {
    use crate::tests_util;
    use serde_json::{json, Value};
    use test_case::test_case;

    #[test_case(&json!({"b": ["a"]}), &json!({}); "trigger absent")]
    #[test_case(&json!({"b": ["a"]}), &json!({"a": 1}); "only dependent present")]
    #[test_case(&json!({"b": ["a"]}), &json!({"a": 1, "b": 2}))]
    #[test_case(&json!({"b": []}), &json!({"b": 1}); "no dependents")]
    fn accepts(argument: &Value, instance: &Value) {
        tests_util::is_valid(&json!({ "dependentRequired": argument }), instance);
    }

    #[test_case(&json!({"b": ["a"]}), &json!({"b": 2}))]
    #[test_case(&json!({"b": ["a", "c"]}), &json!({"b": 2, "a": 1}))]
    fn rejects(argument: &Value, instance: &Value) {
        tests_util::fails_at(
            &json!({ "dependentRequired": argument }),
            instance,
            "dependentRequired",
        );
    }

    #[test_case(&json!({"dependentRequired": {"b": "a"}}); "entry is not an array")]
    #[test_case(&json!({"dependentRequired": {"b": [1]}}); "dependent is not a string")]
    fn malformed_entries_fail_compilation(schema: &Value) {
        tests_util::does_not_compile(schema, "dependentRequired");
    }
}
