//! The compiled schema graph: keyword nodes, keyword lists and the
//! fall-back protocol that ties sibling applicators together.

use serde_json::Value;

use crate::{
    error::ValidationError,
    keywords::{Keyword, Payload},
};

/// The compiled form of one schema object.
///
/// `nodes` holds every keyword compiled from the object; `order`
/// holds the indices validated directly, in conjunction. Nodes that
/// are only reachable through wiring (`then`, `else`, `minContains`,
/// `maxContains`, non-head applicators) stay out of `order`.
/// A boolean schema compiles to an empty list whose `allowed` flag
/// carries the verdict.
#[derive(Debug)]
pub(crate) struct SchemaList {
    pub(crate) allowed: bool,
    pub(crate) nodes: Vec<KeywordNode>,
    pub(crate) order: Vec<usize>,
}

/// References a combinator hands to its sub-schemas so that chain
/// tails inside them fall back to the enclosing object's
/// unevaluated applicators instead of accepting.
#[derive(Debug, Clone, Copy, Default)]
pub(crate) struct Scope<'a> {
    pub(crate) unevaluated_items: Option<&'a KeywordNode>,
    pub(crate) unevaluated_properties: Option<&'a KeywordNode>,
}

impl SchemaList {
    pub(crate) fn boolean(allowed: bool) -> SchemaList {
        SchemaList {
            allowed,
            nodes: Vec::new(),
            order: Vec::new(),
        }
    }

    pub(crate) fn validate(
        &self,
        instance: &Value,
        scope: Scope<'_>,
    ) -> Result<(), ValidationError> {
        if !self.allowed {
            return Err(ValidationError::false_schema());
        }
        for &index in &self.order {
            self.nodes[index].validate(self, instance, scope)?;
        }
        Ok(())
    }

    pub(crate) fn is_valid(&self, instance: &Value) -> bool {
        self.validate(instance, Scope::default()).is_ok()
    }

    /// The sub-schema owned by a wired `then`/`else` node.
    pub(crate) fn branch(&self, index: usize) -> Option<&SchemaList> {
        match &self.nodes[index].payload {
            Payload::SchemaBranch(branch) => Some(&branch.schema),
            _ => None,
        }
    }

    /// The value carried by a wired `minContains`/`maxContains` node.
    pub(crate) fn contains_bound(&self, index: usize) -> Option<u64> {
        match &self.nodes[index].payload {
            Payload::ContainsBound(bound) => Some(bound.limit),
            _ => None,
        }
    }
}

/// One compiled keyword. Cross-references (`alternate`,
/// `unevaluated_*`) are indices into the owning list's node vector,
/// finalised by the interdependence pass and immutable afterwards.
#[derive(Debug)]
pub(crate) struct KeywordNode {
    pub(crate) keyword: Keyword,
    pub(crate) priority: u8,
    pub(crate) allowed: bool,
    pub(crate) alternate: Option<usize>,
    pub(crate) unevaluated_items: Option<usize>,
    pub(crate) unevaluated_properties: Option<usize>,
    pub(crate) payload: Payload,
}

impl KeywordNode {
    pub(crate) fn new(keyword: Keyword, payload: Payload) -> KeywordNode {
        KeywordNode {
            keyword,
            priority: keyword.priority(),
            allowed: true,
            alternate: None,
            unevaluated_items: None,
            unevaluated_properties: None,
            payload,
        }
    }

    pub(crate) fn with_allowed(mut self, allowed: bool) -> KeywordNode {
        self.allowed = allowed;
        self
    }

    pub(crate) fn name(&self) -> &'static str {
        self.keyword.as_str()
    }

    pub(crate) fn child_scope<'a>(&self, list: &'a SchemaList) -> Scope<'a> {
        Scope {
            unevaluated_items: self.unevaluated_items.map(|index| &list.nodes[index]),
            unevaluated_properties: self.unevaluated_properties.map(|index| &list.nodes[index]),
        }
    }

    pub(crate) fn validate(
        &self,
        list: &SchemaList,
        instance: &Value,
        scope: Scope<'_>,
    ) -> Result<(), ValidationError> {
        match &self.payload {
            // No-op keywords, and nodes evaluated only through the
            // sibling that owns them.
            Payload::Annotation
            | Payload::Format
            | Payload::SchemaBranch(_)
            | Payload::ContainsBound(_) => Ok(()),
            Payload::Type(validator) => validator.validate(instance),
            Payload::Const(validator) => validator.validate(instance),
            Payload::Enum(validator) => validator.validate(instance),
            Payload::Maximum(validator) => validator.validate(instance),
            Payload::Minimum(validator) => validator.validate(instance),
            Payload::ExclusiveMaximum(validator) => validator.validate(instance),
            Payload::ExclusiveMinimum(validator) => validator.validate(instance),
            Payload::MultipleOf(validator) => validator.validate(instance),
            Payload::MaxLength(validator) => validator.validate(instance),
            Payload::MinLength(validator) => validator.validate(instance),
            Payload::Pattern(validator) => validator.validate(instance),
            Payload::MaxItems(validator) => validator.validate(instance),
            Payload::MinItems(validator) => validator.validate(instance),
            Payload::UniqueItems(validator) => validator.validate(instance),
            Payload::MaxProperties(validator) => validator.validate(instance),
            Payload::MinProperties(validator) => validator.validate(instance),
            Payload::Required(validator) => validator.validate(instance),
            Payload::DependentRequired(validator) => validator.validate(instance),
            Payload::PropertyNames(validator) => validator.validate(instance),
            Payload::Contains(validator) => validator.validate(list, instance),
            Payload::PrefixItems(validator) => validator.validate(self, list, instance, scope),
            Payload::Items(validator) => validator.validate(self, list, instance, scope),
            Payload::AdditionalItems(validator) => validator.validate(instance),
            Payload::UnevaluatedItems(validator) => validator.validate(instance),
            Payload::Properties(validator) => validator.validate(self, list, instance, scope),
            Payload::PatternProperties(validator) => validator.validate(self, list, instance, scope),
            Payload::AdditionalProperties(validator) => validator.validate(instance),
            Payload::UnevaluatedProperties(validator) => validator.validate(instance),
            Payload::AllOf(validator) => validator.validate(self, list, instance),
            Payload::AnyOf(validator) => validator.validate(self, list, instance),
            Payload::OneOf(validator) => validator.validate(self, list, instance),
            Payload::Not(validator) => validator.validate(self, list, instance),
            Payload::If(validator) => validator.validate(list, instance),
        }
    }

    /// Delegate an array element this applicator cannot decide to
    /// the next applicator in the chain, or to the scoped
    /// unevaluated applicator when the chain is exhausted inside a
    /// combinator. No successor at all means the element is
    /// accepted.
    pub(crate) fn fall_back_item(
        &self,
        list: &SchemaList,
        scope: Scope<'_>,
        item: &Value,
        index: usize,
    ) -> Result<(), ValidationError> {
        match self
            .alternate
            .map(|next| &list.nodes[next])
            .or(scope.unevaluated_items)
        {
            None => Ok(()),
            Some(next) if !next.allowed => Err(ValidationError::mismatch(next.name())),
            Some(next) => next.validate_item_as_alternate(list, scope, item, index),
        }
    }

    /// Object-member counterpart of [`fall_back_item`].
    ///
    /// [`fall_back_item`]: KeywordNode::fall_back_item
    pub(crate) fn fall_back_member(
        &self,
        list: &SchemaList,
        scope: Scope<'_>,
        key: &str,
        member: &Value,
    ) -> Result<(), ValidationError> {
        match self
            .alternate
            .map(|next| &list.nodes[next])
            .or(scope.unevaluated_properties)
        {
            None => Ok(()),
            Some(next) if !next.allowed => Err(ValidationError::mismatch(next.name())),
            Some(next) => next.validate_member_as_alternate(list, scope, key, member),
        }
    }

    fn validate_item_as_alternate(
        &self,
        list: &SchemaList,
        scope: Scope<'_>,
        item: &Value,
        index: usize,
    ) -> Result<(), ValidationError> {
        match &self.payload {
            Payload::Items(validator) => {
                validator.validate_as_alternate(self, list, scope, item, index)
            }
            Payload::AdditionalItems(validator) => validator.validate_as_alternate(item),
            Payload::UnevaluatedItems(validator) => validator.validate_as_alternate(item),
            _ => Ok(()),
        }
    }

    fn validate_member_as_alternate(
        &self,
        list: &SchemaList,
        scope: Scope<'_>,
        key: &str,
        member: &Value,
    ) -> Result<(), ValidationError> {
        match &self.payload {
            Payload::Properties(validator) => validator.validate_as_alternate(key, member),
            Payload::PatternProperties(validator) => {
                validator.validate_as_alternate(self, list, scope, key, member)
            }
            Payload::AdditionalProperties(validator) => validator.validate_as_alternate(member),
            Payload::UnevaluatedProperties(validator) => validator.validate_as_alternate(member),
            _ => Ok(()),
        }
    }
}
