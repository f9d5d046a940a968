use serde_json::Value;

use crate::{
    compiler::{self, Context},
    error::{CompileError, ValidationError},
    keywords::{Keyword, Payload},
    node::{KeywordNode, Scope, SchemaList},
};

/// `items` keeps the source's two shapes: an object (or boolean)
/// argument applies one sub-schema to every element, while an array
/// argument turns the keyword into a second positional tuple that
/// aligns with the absolute element index when reached through the
/// chain.
#[derive(Debug)]
enum ItemsShape {
    Tuple(Vec<SchemaList>),
    Schema(SchemaList),
}

#[derive(Debug)]
pub(crate) struct ItemsValidator {
    shape: ItemsShape,
}

impl ItemsValidator {
    pub(crate) fn validate(
        &self,
        node: &KeywordNode,
        list: &SchemaList,
        instance: &Value,
        scope: Scope<'_>,
    ) -> Result<(), ValidationError> {
        let items = match instance {
            Value::Array(items) => items,
            _ => return Ok(()),
        };
        match &self.shape {
            ItemsShape::Tuple(tuple) => {
                for (index, item) in items.iter().enumerate() {
                    match tuple.get(index) {
                        Some(schema) => schema.validate(item, Scope::default())?,
                        None => node.fall_back_item(list, scope, item, index)?,
                    }
                }
            }
            ItemsShape::Schema(schema) => {
                if !schema.allowed {
                    if items.is_empty() {
                        return Ok(());
                    }
                    return Err(ValidationError::mismatch("items"));
                }
                for item in items {
                    schema.validate(item, Scope::default())?;
                }
            }
        }
        Ok(())
    }

    pub(crate) fn validate_as_alternate(
        &self,
        node: &KeywordNode,
        list: &SchemaList,
        scope: Scope<'_>,
        item: &Value,
        index: usize,
    ) -> Result<(), ValidationError> {
        match &self.shape {
            ItemsShape::Tuple(tuple) => match tuple.get(index) {
                Some(schema) => schema.validate(item, Scope::default()),
                None => node.fall_back_item(list, scope, item, index),
            },
            ItemsShape::Schema(schema) => schema.validate(item, Scope::default()),
        }
    }
}

pub(crate) fn compile(ctx: &Context<'_>, value: &Value) -> Result<KeywordNode, CompileError> {
    let shape = match value {
        Value::Array(entries) => ItemsShape::Tuple(
            entries
                .iter()
                .map(|entry| compiler::compile_subschema(ctx, entry, "items"))
                .collect::<Result<Vec<_>, _>>()?,
        ),
        Value::Object(_) | Value::Bool(_) => {
            ItemsShape::Schema(compiler::compile_subschema(ctx, value, "items")?)
        }
        _ => return Err(CompileError::InvalidArgument { keyword: "items" }),
    };
    let allowed = !matches!(value, Value::Bool(false));
    Ok(
        KeywordNode::new(Keyword::Items, Payload::Items(ItemsValidator { shape }))
            .with_allowed(allowed),
    )
}
