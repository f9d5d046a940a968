use fancy_regex::Regex;
use serde_json::Value;

use crate::{
    compiler::{self, Context},
    error::{CompileError, ValidationError},
    keywords::{Keyword, Payload},
    node::{KeywordNode, Scope, SchemaList},
};

/// Every pattern that matches a key contributes its sub-schema to
/// that key's conjunction; a key matching no pattern is delegated
/// through the fall-back protocol.
#[derive(Debug)]
pub(crate) struct PatternPropertiesValidator {
    patterns: Vec<(Regex, SchemaList)>,
}

impl PatternPropertiesValidator {
    fn validate_member(
        &self,
        node: &KeywordNode,
        list: &SchemaList,
        scope: Scope<'_>,
        key: &str,
        member: &Value,
    ) -> Result<(), ValidationError> {
        let mut matched = false;
        for (pattern, schema) in &self.patterns {
            if pattern.is_match(key).unwrap_or(false) {
                matched = true;
                schema.validate(member, Scope::default())?;
            }
        }
        if matched {
            Ok(())
        } else {
            node.fall_back_member(list, scope, key, member)
        }
    }

    pub(crate) fn validate(
        &self,
        node: &KeywordNode,
        list: &SchemaList,
        instance: &Value,
        scope: Scope<'_>,
    ) -> Result<(), ValidationError> {
        if let Value::Object(members) = instance {
            for (key, member) in members {
                self.validate_member(node, list, scope, key, member)?;
            }
        }
        Ok(())
    }

    pub(crate) fn validate_as_alternate(
        &self,
        node: &KeywordNode,
        list: &SchemaList,
        scope: Scope<'_>,
        key: &str,
        member: &Value,
    ) -> Result<(), ValidationError> {
        self.validate_member(node, list, scope, key, member)
    }
}

pub(crate) fn compile(ctx: &Context<'_>, value: &Value) -> Result<KeywordNode, CompileError> {
    let entries = match value {
        Value::Object(entries) => entries,
        _ => return Err(invalid()),
    };
    let mut patterns = Vec::with_capacity(entries.len());
    for (source, entry) in entries {
        let pattern = Regex::new(source).map_err(|_| invalid())?;
        patterns.push((
            pattern,
            compiler::compile_subschema(ctx, entry, "patternProperties")?,
        ));
    }
    Ok(KeywordNode::new(
        Keyword::PatternProperties,
        Payload::PatternProperties(PatternPropertiesValidator { patterns }),
    ))
}

fn invalid() -> CompileError {
    CompileError::InvalidArgument {
        keyword: "patternProperties",
    }
}
