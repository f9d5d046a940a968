//! Schema compilation: walk the document once, build a pending node
//! list per schema object, then run the interdependence pass that
//! wires sibling keywords together.

use serde_json::Value;

use crate::{
    error::CompileError,
    keywords::{self, Group, Keyword, Payload},
    node::{KeywordNode, SchemaList},
    options::ValidationOptions,
    validator::Validator,
};

/// Compile-time state: the configuration plus the recursion guard
/// protecting the native stack from hostile schema nesting.
#[derive(Debug)]
pub(crate) struct Context<'a> {
    config: &'a ValidationOptions,
    depth: usize,
}

impl<'a> Context<'a> {
    pub(crate) fn new(config: &'a ValidationOptions) -> Context<'a> {
        Context { config, depth: 0 }
    }

    fn descend(&self) -> Result<Context<'a>, CompileError> {
        if self.depth >= self.config.max_depth {
            return Err(CompileError::DepthExceeded {
                limit: self.config.max_depth,
            });
        }
        Ok(Context {
            config: self.config,
            depth: self.depth + 1,
        })
    }
}

pub(crate) fn build_validator(
    config: ValidationOptions,
    schema: &Value,
) -> Result<Validator, CompileError> {
    let root = compile(&Context::new(&config), schema)?;
    Ok(Validator { root, config })
}

/// Compile one schema document or embedded sub-schema.
pub(crate) fn compile(ctx: &Context<'_>, schema: &Value) -> Result<SchemaList, CompileError> {
    let ctx = ctx.descend()?;
    match schema {
        Value::Bool(allowed) => Ok(SchemaList::boolean(*allowed)),
        Value::Object(members) => {
            let mut pending = Vec::with_capacity(members.len());
            for (keyword, value) in members {
                if let Some(node) = keywords::build(&ctx, keyword, value)? {
                    pending.push(node);
                }
            }
            link_interdependent(pending)
        }
        _ => Err(CompileError::InvalidSchema),
    }
}

/// Like [`compile`], but a structurally impossible argument is
/// blamed on the keyword that embeds the sub-schema.
pub(crate) fn compile_subschema(
    ctx: &Context<'_>,
    schema: &Value,
    keyword: &'static str,
) -> Result<SchemaList, CompileError> {
    compile(ctx, schema).map_err(|error| match error {
        CompileError::InvalidSchema => CompileError::InvalidArgument { keyword },
        other => other,
    })
}

/// The interdependence pass. Pure metadata wiring over the pending
/// nodes of one schema object:
///
/// - applicators of each family sort by priority into a fall-back
///   chain and only the chain head joins the evaluation order;
/// - combinators learn where the sibling unevaluated applicators
///   live;
/// - `contains` absorbs `minContains`/`maxContains`, `if` absorbs
///   `then`/`else`;
/// - everything else keeps its pending position.
fn link_interdependent(nodes: Vec<KeywordNode>) -> Result<SchemaList, CompileError> {
    let mut nodes = nodes;
    let mut order = Vec::with_capacity(nodes.len());
    let mut array_chain = Vec::new();
    let mut object_chain = Vec::new();
    let mut combinators = Vec::new();
    let mut contains = None;
    let mut min_contains = None;
    let mut max_contains = None;
    let mut if_node = None;
    let mut then_node = None;
    let mut else_node = None;

    for (index, node) in nodes.iter().enumerate() {
        match node.keyword.group() {
            Group::ArrayApplicator => array_chain.push(index),
            Group::ObjectApplicator => object_chain.push(index),
            Group::Combinator => {
                combinators.push(index);
                order.push(index);
            }
            Group::Conditional => match node.keyword {
                Keyword::If => if_node = Some(index),
                Keyword::Then => then_node = Some(index),
                _ => else_node = Some(index),
            },
            Group::Contains => {
                contains = Some(index);
                order.push(index);
            }
            Group::ContainsBound => match node.keyword {
                Keyword::MinContains => min_contains = Some(index),
                _ => max_contains = Some(index),
            },
            Group::Plain => order.push(index),
        }
    }

    match (if_node, then_node.or(else_node)) {
        (Some(_), None) => return Err(CompileError::Structural { keyword: "if" }),
        (None, Some(stray)) => {
            return Err(CompileError::Structural {
                keyword: nodes[stray].keyword.as_str(),
            })
        }
        _ => {}
    }
    if let Some(index) = if_node {
        if let Payload::If(conditional) = &mut nodes[index].payload {
            conditional.set_dependents(then_node, else_node);
        }
        order.push(index);
    }

    if let Some(index) = contains {
        if let Payload::Contains(validator) = &mut nodes[index].payload {
            validator.set_dependents(min_contains, max_contains);
        }
    }

    let unevaluated_items = find(&nodes, &array_chain, Keyword::UnevaluatedItems);
    let unevaluated_properties = find(&nodes, &object_chain, Keyword::UnevaluatedProperties);
    for &index in &combinators {
        nodes[index].unevaluated_items = unevaluated_items;
        nodes[index].unevaluated_properties = unevaluated_properties;
    }

    for chain in [&mut array_chain, &mut object_chain] {
        chain.sort_by_key(|&index| nodes[index].priority);
        if let Some(&head) = chain.first() {
            order.push(head);
        }
        for pair in chain.windows(2) {
            nodes[pair[0]].alternate = Some(pair[1]);
        }
    }

    Ok(SchemaList {
        allowed: true,
        nodes,
        order,
    })
}

fn find(nodes: &[KeywordNode], chain: &[usize], keyword: Keyword) -> Option<usize> {
    chain
        .iter()
        .copied()
        .find(|&index| nodes[index].keyword == keyword)
}
