use serde_json::Value;

use crate::{
    compiler::{self, Context},
    error::{CompileError, ValidationError},
    keywords::{Keyword, Payload},
    node::{KeywordNode, Scope, SchemaList},
};

/// Head of the array applicator chain: one sub-schema per position,
/// elements past the tuple are delegated with their absolute index.
#[derive(Debug)]
pub(crate) struct PrefixItemsValidator {
    tuple: Vec<SchemaList>,
}

impl PrefixItemsValidator {
    pub(crate) fn validate(
        &self,
        node: &KeywordNode,
        list: &SchemaList,
        instance: &Value,
        scope: Scope<'_>,
    ) -> Result<(), ValidationError> {
        if let Value::Array(items) = instance {
            for (index, item) in items.iter().enumerate() {
                match self.tuple.get(index) {
                    Some(schema) => schema.validate(item, Scope::default())?,
                    None => node.fall_back_item(list, scope, item, index)?,
                }
            }
        }
        Ok(())
    }
}

pub(crate) fn compile(ctx: &Context<'_>, value: &Value) -> Result<KeywordNode, CompileError> {
    let tuple = match value {
        Value::Array(entries) => entries
            .iter()
            .map(|entry| compiler::compile_subschema(ctx, entry, "prefixItems"))
            .collect::<Result<Vec<_>, _>>()?,
        _ => {
            return Err(CompileError::InvalidArgument {
                keyword: "prefixItems",
            })
        }
    };
    Ok(KeywordNode::new(
        Keyword::PrefixItems,
        Payload::PrefixItems(PrefixItemsValidator { tuple }),
    ))
}
