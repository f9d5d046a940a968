//! Small shared pieces of keyword compilation and evaluation.

use num_cmp::NumCmp;
use serde_json::{Number, Value};

use crate::{
    compiler::{self, Context},
    error::{CompileError, ValidationError},
    node::{Scope, SchemaList},
};

/// `value > limit` across the integer widths a JSON number can hold,
/// without round-tripping large integers through `f64`.
pub(crate) fn num_gt(value: &Number, limit: f64) -> bool {
    if let Some(value) = value.as_u64() {
        NumCmp::num_gt(value, limit)
    } else if let Some(value) = value.as_i64() {
        NumCmp::num_gt(value, limit)
    } else {
        NumCmp::num_gt(as_f64(value), limit)
    }
}

pub(crate) fn num_ge(value: &Number, limit: f64) -> bool {
    if let Some(value) = value.as_u64() {
        NumCmp::num_ge(value, limit)
    } else if let Some(value) = value.as_i64() {
        NumCmp::num_ge(value, limit)
    } else {
        NumCmp::num_ge(as_f64(value), limit)
    }
}

pub(crate) fn num_lt(value: &Number, limit: f64) -> bool {
    if let Some(value) = value.as_u64() {
        NumCmp::num_lt(value, limit)
    } else if let Some(value) = value.as_i64() {
        NumCmp::num_lt(value, limit)
    } else {
        NumCmp::num_lt(as_f64(value), limit)
    }
}

pub(crate) fn num_le(value: &Number, limit: f64) -> bool {
    if let Some(value) = value.as_u64() {
        NumCmp::num_le(value, limit)
    } else if let Some(value) = value.as_i64() {
        NumCmp::num_le(value, limit)
    } else {
        NumCmp::num_le(as_f64(value), limit)
    }
}

fn as_f64(value: &Number) -> f64 {
    value
        .as_f64()
        .expect("a JSON number is always representable as f64")
}

/// Validate `instance` against every sub-schema and count the passes.
/// Depth errors abort instead of counting as failures.
pub(crate) fn count_passing(
    schemas: &[SchemaList],
    instance: &Value,
    scope: Scope<'_>,
) -> Result<usize, ValidationError> {
    let mut passing = 0;
    for schema in schemas {
        match schema.validate(instance, scope) {
            Ok(()) => passing += 1,
            Err(error) if error.is_fatal() => return Err(error),
            Err(_) => {}
        }
    }
    Ok(passing)
}

/// Compile a combinator argument: an array of sub-schemas.
pub(crate) fn compile_subschema_array(
    ctx: &Context<'_>,
    value: &Value,
    keyword: &'static str,
) -> Result<Vec<SchemaList>, CompileError> {
    match value {
        Value::Array(entries) => entries
            .iter()
            .map(|entry| compiler::compile_subschema(ctx, entry, keyword))
            .collect(),
        _ => Err(CompileError::InvalidArgument { keyword }),
    }
}

/// Compile the argument of `items`/`additional*`/`unevaluated*`:
/// either an embedded sub-schema or a boolean permission flag. A
/// boolean yields an empty always-passing list; the flag lands on
/// the node's `allowed` field, which is what the fall-back protocol
/// consults.
pub(crate) fn subschema_or_flag(
    ctx: &Context<'_>,
    value: &Value,
    keyword: &'static str,
) -> Result<(SchemaList, bool), CompileError> {
    match value {
        Value::Bool(flag) => Ok((SchemaList::boolean(true), *flag)),
        Value::Object(_) => Ok((compiler::compile_subschema(ctx, value, keyword)?, true)),
        _ => Err(CompileError::InvalidArgument { keyword }),
    }
}

/// A non-negative integer argument (`maxLength`, `minItems`, ...).
pub(crate) fn require_unsigned(value: &Value, keyword: &'static str) -> Result<u64, CompileError> {
    value
        .as_u64()
        .ok_or(CompileError::InvalidArgument { keyword })
}
