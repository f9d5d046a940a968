pub(crate) mod additional_items;
pub(crate) mod additional_properties;
pub(crate) mod all_of;
pub(crate) mod annotation;
pub(crate) mod any_of;
pub(crate) mod const_;
pub(crate) mod contains;
pub(crate) mod dependent_required;
pub(crate) mod enum_;
pub(crate) mod exclusive_maximum;
pub(crate) mod exclusive_minimum;
pub(crate) mod format;
pub(crate) mod helpers;
pub(crate) mod if_;
pub(crate) mod items;
pub(crate) mod max_items;
pub(crate) mod max_length;
pub(crate) mod max_properties;
pub(crate) mod maximum;
pub(crate) mod min_items;
pub(crate) mod min_length;
pub(crate) mod min_properties;
pub(crate) mod minimum;
pub(crate) mod multiple_of;
pub(crate) mod not;
pub(crate) mod one_of;
pub(crate) mod pattern;
pub(crate) mod pattern_properties;
pub(crate) mod prefix_items;
pub(crate) mod properties;
pub(crate) mod property_names;
pub(crate) mod required;
pub(crate) mod type_;
pub(crate) mod unevaluated_items;
pub(crate) mod unevaluated_properties;
pub(crate) mod unique_items;

use serde_json::Value;

use crate::{compiler::Context, error::CompileError, node::KeywordNode};

/// The closed set of keywords the engine understands. Everything
/// else compiles to nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Keyword {
    AdditionalItems,
    AdditionalProperties,
    AllOf,
    Annotation,
    AnyOf,
    Const,
    Contains,
    DependentRequired,
    Else,
    Enum,
    ExclusiveMaximum,
    ExclusiveMinimum,
    Format,
    If,
    Items,
    MaxContains,
    MaxItems,
    MaxLength,
    MaxProperties,
    Maximum,
    MinContains,
    MinItems,
    MinLength,
    MinProperties,
    Minimum,
    MultipleOf,
    Not,
    OneOf,
    Pattern,
    PatternProperties,
    PrefixItems,
    Properties,
    PropertyNames,
    Required,
    Then,
    Type,
    UnevaluatedItems,
    UnevaluatedProperties,
    UniqueItems,
}

/// Which part of the interdependence rewiring a keyword
/// participates in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Group {
    ArrayApplicator,
    Combinator,
    Conditional,
    Contains,
    ContainsBound,
    ObjectApplicator,
    Plain,
}

impl Keyword {
    pub(crate) fn as_str(self) -> &'static str {
        match self {
            Keyword::AdditionalItems => "additionalItems",
            Keyword::AdditionalProperties => "additionalProperties",
            Keyword::AllOf => "allOf",
            Keyword::Annotation => "annotation",
            Keyword::AnyOf => "anyOf",
            Keyword::Const => "const",
            Keyword::Contains => "contains",
            Keyword::DependentRequired => "dependentRequired",
            Keyword::Else => "else",
            Keyword::Enum => "enum",
            Keyword::ExclusiveMaximum => "exclusiveMaximum",
            Keyword::ExclusiveMinimum => "exclusiveMinimum",
            Keyword::Format => "format",
            Keyword::If => "if",
            Keyword::Items => "items",
            Keyword::MaxContains => "maxContains",
            Keyword::MaxItems => "maxItems",
            Keyword::MaxLength => "maxLength",
            Keyword::MaxProperties => "maxProperties",
            Keyword::Maximum => "maximum",
            Keyword::MinContains => "minContains",
            Keyword::MinItems => "minItems",
            Keyword::MinLength => "minLength",
            Keyword::MinProperties => "minProperties",
            Keyword::Minimum => "minimum",
            Keyword::MultipleOf => "multipleOf",
            Keyword::Not => "not",
            Keyword::OneOf => "oneOf",
            Keyword::Pattern => "pattern",
            Keyword::PatternProperties => "patternProperties",
            Keyword::PrefixItems => "prefixItems",
            Keyword::Properties => "properties",
            Keyword::PropertyNames => "propertyNames",
            Keyword::Required => "required",
            Keyword::Then => "then",
            Keyword::Type => "type",
            Keyword::UnevaluatedItems => "unevaluatedItems",
            Keyword::UnevaluatedProperties => "unevaluatedProperties",
            Keyword::UniqueItems => "uniqueItems",
        }
    }

    pub(crate) fn group(self) -> Group {
        match self {
            Keyword::PrefixItems
            | Keyword::Items
            | Keyword::AdditionalItems
            | Keyword::UnevaluatedItems => Group::ArrayApplicator,
            Keyword::Properties
            | Keyword::PatternProperties
            | Keyword::AdditionalProperties
            | Keyword::UnevaluatedProperties => Group::ObjectApplicator,
            Keyword::AllOf | Keyword::AnyOf | Keyword::OneOf | Keyword::Not => Group::Combinator,
            Keyword::If | Keyword::Then | Keyword::Else => Group::Conditional,
            Keyword::Contains => Group::Contains,
            Keyword::MinContains | Keyword::MaxContains => Group::ContainsBound,
            _ => Group::Plain,
        }
    }

    /// Position in the fall-back chain; zero for keywords outside
    /// the applicator groups.
    pub(crate) fn priority(self) -> u8 {
        match self {
            Keyword::PrefixItems | Keyword::Properties => 1,
            Keyword::Items | Keyword::PatternProperties => 2,
            Keyword::AdditionalItems | Keyword::AdditionalProperties => 3,
            Keyword::UnevaluatedItems | Keyword::UnevaluatedProperties => 4,
            _ => 0,
        }
    }
}

/// Per-keyword compiled state. One variant per keyword, so the
/// factory is total over the closed set and dispatch is checked
/// exhaustively.
#[derive(Debug)]
pub(crate) enum Payload {
    AdditionalItems(additional_items::AdditionalItemsValidator),
    AdditionalProperties(additional_properties::AdditionalPropertiesValidator),
    AllOf(all_of::AllOfValidator),
    Annotation,
    AnyOf(any_of::AnyOfValidator),
    Const(const_::ConstValidator),
    Contains(contains::ContainsValidator),
    ContainsBound(contains::ContainsBoundValidator),
    DependentRequired(dependent_required::DependentRequiredValidator),
    Enum(enum_::EnumValidator),
    ExclusiveMaximum(exclusive_maximum::ExclusiveMaximumValidator),
    ExclusiveMinimum(exclusive_minimum::ExclusiveMinimumValidator),
    Format,
    If(if_::IfValidator),
    Items(items::ItemsValidator),
    MaxItems(max_items::MaxItemsValidator),
    MaxLength(max_length::MaxLengthValidator),
    MaxProperties(max_properties::MaxPropertiesValidator),
    Maximum(maximum::MaximumValidator),
    MinItems(min_items::MinItemsValidator),
    MinLength(min_length::MinLengthValidator),
    MinProperties(min_properties::MinPropertiesValidator),
    Minimum(minimum::MinimumValidator),
    MultipleOf(multiple_of::MultipleOfValidator),
    Not(not::NotValidator),
    OneOf(one_of::OneOfValidator),
    Pattern(pattern::PatternValidator),
    PatternProperties(pattern_properties::PatternPropertiesValidator),
    PrefixItems(prefix_items::PrefixItemsValidator),
    Properties(properties::PropertiesValidator),
    PropertyNames(property_names::PropertyNamesValidator),
    Required(required::RequiredValidator),
    SchemaBranch(if_::BranchValidator),
    Type(type_::TypeValidator),
    UnevaluatedItems(unevaluated_items::UnevaluatedItemsValidator),
    UnevaluatedProperties(unevaluated_properties::UnevaluatedPropertiesValidator),
    UniqueItems(unique_items::UniqueItemsValidator),
}

/// The keyword factory: build the node for one schema member, or
/// nothing for names outside the vocabulary.
pub(crate) fn build(
    ctx: &Context<'_>,
    keyword: &str,
    value: &Value,
) -> Result<Option<KeywordNode>, CompileError> {
    let node = match keyword {
        "additionalItems" => additional_items::compile(ctx, value)?,
        "additionalProperties" => additional_properties::compile(ctx, value)?,
        "allOf" => all_of::compile(ctx, value)?,
        "anyOf" => any_of::compile(ctx, value)?,
        "const" => const_::compile(value)?,
        "contains" => contains::compile(ctx, value)?,
        "dependentRequired" => dependent_required::compile(value)?,
        "else" => if_::compile_else(ctx, value)?,
        "enum" => enum_::compile(value)?,
        "exclusiveMaximum" => exclusive_maximum::compile(value)?,
        "exclusiveMinimum" => exclusive_minimum::compile(value)?,
        "format" => format::compile(value)?,
        "if" => if_::compile(ctx, value)?,
        "items" => items::compile(ctx, value)?,
        "maxContains" => contains::compile_bound(Keyword::MaxContains, value)?,
        "maxItems" => max_items::compile(value)?,
        "maxLength" => max_length::compile(value)?,
        "maxProperties" => max_properties::compile(value)?,
        "maximum" => maximum::compile(value)?,
        "minContains" => contains::compile_bound(Keyword::MinContains, value)?,
        "minItems" => min_items::compile(value)?,
        "minLength" => min_length::compile(value)?,
        "minProperties" => min_properties::compile(value)?,
        "minimum" => minimum::compile(value)?,
        "multipleOf" => multiple_of::compile(value)?,
        "not" => not::compile(ctx, value)?,
        "oneOf" => one_of::compile(ctx, value)?,
        "pattern" => pattern::compile(value)?,
        "patternProperties" => pattern_properties::compile(ctx, value)?,
        "prefixItems" => prefix_items::compile(ctx, value)?,
        "properties" => properties::compile(ctx, value)?,
        "propertyNames" => property_names::compile(ctx, value)?,
        "required" => required::compile(value)?,
        "then" => if_::compile_then(ctx, value)?,
        "type" => type_::compile(value)?,
        "unevaluatedItems" => unevaluated_items::compile(ctx, value)?,
        "unevaluatedProperties" => unevaluated_properties::compile(ctx, value)?,
        "uniqueItems" => unique_items::compile(value)?,
        "title" => annotation::compile_string_valued("title", value)?,
        "description" => annotation::compile_string_valued("description", value)?,
        "$comment" => annotation::compile_string_valued("$comment", value)?,
        "$schema" => annotation::compile_string_valued("$schema", value)?,
        "deprecated" => annotation::compile_boolean_valued("deprecated", value)?,
        "readOnly" => annotation::compile_boolean_valued("readOnly", value)?,
        "writeOnly" => annotation::compile_boolean_valued("writeOnly", value)?,
        "example" => annotation::compile_array_valued("example", value)?,
        "default" => annotation::compile_free(),
        _ => return Ok(None),
    };
    Ok(Some(node))
}

#[cfg(test)]
mod tests {
    use super::{Group, Keyword};

    #[test]
    fn chain_priorities_ascend() {
        for chain in [
            [
                Keyword::PrefixItems,
                Keyword::Items,
                Keyword::AdditionalItems,
                Keyword::UnevaluatedItems,
            ],
            [
                Keyword::Properties,
                Keyword::PatternProperties,
                Keyword::AdditionalProperties,
                Keyword::UnevaluatedProperties,
            ],
        ] {
            for (position, keyword) in chain.iter().enumerate() {
                assert_eq!(keyword.priority() as usize, position + 1);
            }
        }
    }

    #[test]
    fn groups_cover_the_wired_keywords() {
        assert_eq!(Keyword::Contains.group(), Group::Contains);
        assert_eq!(Keyword::MinContains.group(), Group::ContainsBound);
        assert_eq!(Keyword::If.group(), Group::Conditional);
        assert_eq!(Keyword::Not.group(), Group::Combinator);
        assert_eq!(Keyword::Required.group(), Group::Plain);
    }
}
