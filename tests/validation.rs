//! End-to-end behaviour of compiled schemas: keyword interplay,
//! fall-back chains, and the kind-guard policy.

use serde_json::{json, Value};
use test_case::test_case;

fn verdict(schema: &Value, instance: &Value) -> bool {
    jsonvet::validator_for(schema)
        .expect("schema must compile")
        .is_valid(instance)
}

#[track_caller]
fn assert_fails_at(schema: &Value, instance: &Value, keyword: &str) {
    let validator = jsonvet::validator_for(schema).expect("schema must compile");
    let error = validator
        .validate(instance)
        .expect_err("instance must be rejected");
    assert_eq!(error.keyword(), Some(keyword));
}

#[test]
fn numeric_window() {
    let schema = json!({"type": "integer", "minimum": 0, "maximum": 10});
    assert!(verdict(&schema, &json!(5)));
    assert_fails_at(&schema, &json!(11), "maximum");
    assert_fails_at(&schema, &json!(-1), "minimum");
    assert_fails_at(&schema, &json!(5.5), "type");
}

#[test]
fn tuple_with_closed_tail() {
    let schema = json!({
        "prefixItems": [{"type": "string"}, {"type": "number"}],
        "items": false
    });
    assert!(verdict(&schema, &json!(["a", 1])));
    assert_fails_at(&schema, &json!(["a", 1, true]), "items");
}

#[test]
fn object_chain_with_closed_tail() {
    let schema = json!({
        "properties": {"a": {"type": "string"}},
        "patternProperties": {"^x": {"type": "number"}},
        "additionalProperties": false
    });
    assert!(verdict(&schema, &json!({"a": "ok", "x1": 3})));
    assert_fails_at(&schema, &json!({"a": "ok", "z": 1}), "additionalProperties");
}

#[test]
fn unevaluated_members_across_combinators() {
    let schema = json!({
        "allOf": [{"type": "object"}],
        "unevaluatedProperties": false,
        "properties": {"a": {}}
    });
    assert_fails_at(&schema, &json!({"a": 1, "b": 2}), "unevaluatedProperties");
    assert!(verdict(&schema, &json!({"a": 1})));
}

#[test]
fn conditional_requirements() {
    let schema = json!({
        "if": {"properties": {"k": {"const": "A"}}, "required": ["k"]},
        "then": {"required": ["x"]},
        "else": {"required": ["y"]}
    });
    assert!(verdict(&schema, &json!({"k": "A", "x": 1})));
    assert!(verdict(&schema, &json!({"k": "B", "y": 1})));
    assert!(!verdict(&schema, &json!({"k": "A"})));
}

// Keywords are inert outside their kind domain: every instance of a
// foreign kind passes.
#[test_case(&json!({"minimum": 100}))]
#[test_case(&json!({"maximum": -100}))]
#[test_case(&json!({"exclusiveMinimum": 100}))]
#[test_case(&json!({"exclusiveMaximum": -100}))]
#[test_case(&json!({"multipleOf": 7}))]
#[test_case(&json!({"minLength": 100}))]
#[test_case(&json!({"maxLength": 0}))]
#[test_case(&json!({"pattern": "^never-matches$"}))]
#[test_case(&json!({"minItems": 100}))]
#[test_case(&json!({"maxItems": 0}))]
#[test_case(&json!({"uniqueItems": true}))]
#[test_case(&json!({"contains": {"minimum": 5}}))]
#[test_case(&json!({"minProperties": 100}))]
#[test_case(&json!({"maxProperties": 0}))]
#[test_case(&json!({"required": ["missing"]}))]
#[test_case(&json!({"dependentRequired": {"a": ["missing"]}}))]
#[test_case(&json!({"propertyNames": {"minLength": 100}}))]
fn kind_guards(schema: &Value) {
    let validator = jsonvet::validator_for(schema).expect("schema must compile");
    let foreign: Vec<Value> = match schema.as_object().and_then(|s| s.keys().next()) {
        Some(key) if key.contains("Length") || key == "pattern" => {
            vec![json!(1), json!([1]), json!({"a": 1}), json!(null), json!(true)]
        }
        Some(key)
            if key.contains("Items")
                || key.contains("Contains")
                || key == "contains"
                || key == "uniqueItems" =>
        {
            vec![json!(1), json!("x"), json!({"a": 1}), json!(null), json!(true)]
        }
        Some(key)
            if key.contains("Properties")
                || key.contains("Names")
                || key.contains("equired") =>
        {
            vec![json!(1), json!("x"), json!([1]), json!(null), json!(true)]
        }
        _ => vec![json!("x"), json!([1]), json!({"a": 1}), json!(null), json!(true)],
    };
    for instance in &foreign {
        assert!(
            validator.is_valid(instance),
            "{instance} should pass {schema}"
        );
    }
}

// Fall-back exhaustiveness: an uncaptured value is accepted exactly
// when the chain tail permits it.
#[test_case(&json!({"properties": {"a": {}}}), true; "open object chain")]
#[test_case(&json!({"properties": {"a": {}}, "additionalProperties": true}), true; "permissive tail")]
#[test_case(&json!({"properties": {"a": {}}, "additionalProperties": false}), false; "closed tail")]
#[test_case(&json!({"properties": {"a": {}}, "patternProperties": {"^never": {}}, "additionalProperties": false}), false; "closed tail behind patterns")]
fn fall_back_exhaustiveness(schema: &Value, accepted: bool) {
    assert_eq!(verdict(schema, &json!({"a": 1, "stray": 2})), accepted);
}

#[test]
fn contains_window_arithmetic() {
    let matching = |count: usize, len: usize| -> Value {
        let mut items = vec![json!(9); count];
        items.resize(len, json!(0));
        Value::Array(items)
    };
    for (min, max) in [(None, None), (Some(0), Some(2)), (Some(2), None), (Some(1), Some(1))] {
        let mut schema = json!({"contains": {"minimum": 5}});
        if let Some(min) = min {
            schema["minContains"] = json!(min);
        }
        if let Some(max) = max {
            schema["maxContains"] = json!(max);
        }
        let validator = jsonvet::validator_for(&schema).expect("schema must compile");
        for count in 0..4_usize {
            let expected =
                count as u64 >= min.unwrap_or(1) && max.map_or(true, |max| count as u64 <= max);
            assert_eq!(
                validator.is_valid(&matching(count, 4)),
                expected,
                "count {count} against window {min:?}..{max:?}"
            );
        }
    }
}

#[test_case(0, false)]
#[test_case(1, true)]
#[test_case(2, false)]
fn one_of_counts_exactly(passing: usize, accepted: bool) {
    // Branches pass for instances 0..branch.
    let schema = json!({"oneOf": [{"exclusiveMinimum": 0}, {"exclusiveMinimum": 1}]});
    assert_eq!(verdict(&schema, &json!(passing)), accepted);
}

#[test]
fn negation_tracks_the_sub_schema() {
    let schema = json!({"not": {"type": "string"}});
    assert!(verdict(&schema, &json!(1)));
    assert!(!verdict(&schema, &json!("s")));
}

#[test]
fn nested_chains_stay_independent() {
    // The inner object has its own chain; the outer tail must not
    // leak into it.
    let schema = json!({
        "properties": {
            "inner": {
                "properties": {"a": {}},
            }
        },
        "additionalProperties": false
    });
    assert!(verdict(&schema, &json!({"inner": {"a": 1, "b": 2}})));
    assert!(!verdict(&schema, &json!({"outer": 1})));
}

#[test]
fn compiled_schema_is_shareable_across_threads() {
    let schema = json!({
        "type": "object",
        "patternProperties": {"^n": {"type": "number"}},
        "unevaluatedProperties": false
    });
    let validator = jsonvet::validator_for(&schema).expect("schema must compile");
    let object_with = |key: String, value: i32| {
        let mut members = serde_json::Map::new();
        members.insert(key, json!(value));
        Value::Object(members)
    };
    std::thread::scope(|scope| {
        for worker in 0..4 {
            let validator = &validator;
            let object_with = &object_with;
            scope.spawn(move || {
                for round in 0..100 {
                    let key = format!("n{worker}_{round}");
                    assert!(validator.is_valid(&object_with(key.clone(), round)));
                    assert!(!validator.is_valid(&object_with(format!("x{key}"), round)));
                }
            });
        }
    });
}

#[test]
fn first_failing_keyword_is_deterministic() {
    let schema = json!({"minimum": 10, "multipleOf": 7});
    let validator = jsonvet::validator_for(&schema).expect("schema must compile");
    let first = validator.validate(&json!(3)).unwrap_err();
    for _ in 0..10 {
        assert_eq!(validator.validate(&json!(3)).unwrap_err(), first);
    }
}
