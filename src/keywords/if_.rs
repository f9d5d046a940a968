use serde_json::Value;

use crate::{
    compiler::{self, Context},
    error::{CompileError, ValidationError},
    keywords::{Keyword, Payload},
    node::{KeywordNode, Scope, SchemaList},
};

/// The `if` node owns the condition and, after the interdependence
/// pass, the indices of its sibling `then`/`else` nodes. A missing
/// branch is a vacuous success.
#[derive(Debug)]
pub(crate) struct IfValidator {
    schema: SchemaList,
    then_branch: Option<usize>,
    else_branch: Option<usize>,
}

/// Payload of a `then`/`else` node; evaluated only through the
/// sibling `if`.
#[derive(Debug)]
pub(crate) struct BranchValidator {
    pub(crate) schema: SchemaList,
}

impl IfValidator {
    pub(crate) fn set_dependents(
        &mut self,
        then_branch: Option<usize>,
        else_branch: Option<usize>,
    ) {
        self.then_branch = then_branch;
        self.else_branch = else_branch;
    }

    pub(crate) fn validate(
        &self,
        list: &SchemaList,
        instance: &Value,
    ) -> Result<(), ValidationError> {
        let taken = match self.schema.validate(instance, Scope::default()) {
            Ok(()) => self.then_branch,
            Err(error) if error.is_fatal() => return Err(error),
            Err(_) => self.else_branch,
        };
        match taken.and_then(|index| list.branch(index)) {
            Some(schema) => schema.validate(instance, Scope::default()),
            None => Ok(()),
        }
    }
}

pub(crate) fn compile(ctx: &Context<'_>, value: &Value) -> Result<KeywordNode, CompileError> {
    let schema = compiler::compile_subschema(ctx, value, "if")?;
    Ok(KeywordNode::new(
        Keyword::If,
        Payload::If(IfValidator {
            schema,
            then_branch: None,
            else_branch: None,
        }),
    ))
}

pub(crate) fn compile_then(ctx: &Context<'_>, value: &Value) -> Result<KeywordNode, CompileError> {
    let schema = compiler::compile_subschema(ctx, value, "then")?;
    Ok(KeywordNode::new(
        Keyword::Then,
        Payload::SchemaBranch(BranchValidator { schema }),
    ))
}

pub(crate) fn compile_else(ctx: &Context<'_>, value: &Value) -> Result<KeywordNode, CompileError> {
    let schema = compiler::compile_subschema(ctx, value, "else")?;
    Ok(KeywordNode::new(
        Keyword::Else,
        Payload::SchemaBranch(BranchValidator { schema }),
    ))
}
