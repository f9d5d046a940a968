//! `format` never rejects an instance; it only insists its argument
//! is a string. The format vocabulary of the source engine
//! (`date-time`, `email`, `ipv4`, `uuid`, ...) is informational.

use serde_json::Value;

use crate::{
    error::CompileError,
    keywords::{Keyword, Payload},
    node::KeywordNode,
};

pub(crate) fn compile(value: &Value) -> Result<KeywordNode, CompileError> {
    match value {
        Value::String(_) => Ok(KeywordNode::new(Keyword::Format, Payload::Format)),
        _ => Err(CompileError::InvalidArgument { keyword: "format" }),
    }
}
