//! Canonical textual form of a JSON value.
//!
//! This is the equality kernel for `const`, `enum` and `uniqueItems`:
//! two values are equal exactly when their canonical strings are.
//! Strings render with minimal escaping, numbers with integral values
//! render without a fraction (`1`, `1.0` and `1e0` all become `1`),
//! object keys are sorted bytewise and no whitespace is emitted.

use serde_json::{Number, Value};
use std::fmt::Write;

use crate::error::ValidationError;

/// Instance nesting the canonicaliser will follow before giving up.
/// Independent of the schema depth guard: instances are not under
/// the schema author's control.
pub(crate) const DEPTH_BUDGET: usize = 512;

pub(crate) fn canonical(value: &Value) -> Result<String, ValidationError> {
    let mut out = String::new();
    write_value(value, &mut out, DEPTH_BUDGET)?;
    Ok(out)
}

fn write_value(value: &Value, out: &mut String, budget: usize) -> Result<(), ValidationError> {
    if budget == 0 {
        return Err(ValidationError::depth_exceeded());
    }
    match value {
        Value::Null => out.push_str("null"),
        Value::Bool(true) => out.push_str("true"),
        Value::Bool(false) => out.push_str("false"),
        Value::Number(number) => write_number(number, out),
        Value::String(string) => write_string(string, out),
        Value::Array(items) => {
            out.push('[');
            for (position, item) in items.iter().enumerate() {
                if position > 0 {
                    out.push(',');
                }
                write_value(item, out, budget - 1)?;
            }
            out.push(']');
        }
        Value::Object(members) => {
            let mut entries: Vec<(&String, &Value)> = members.iter().collect();
            entries.sort_unstable_by_key(|(key, _)| key.as_str());
            out.push('{');
            for (position, (key, member)) in entries.into_iter().enumerate() {
                if position > 0 {
                    out.push(',');
                }
                write_string(key, out);
                out.push(':');
                write_value(member, out, budget - 1)?;
            }
            out.push('}');
        }
    }
    Ok(())
}

// Largest magnitude at which every integral f64 is exact.
const EXACT_INTEGRAL_BOUND: f64 = 9_007_199_254_740_992.0;

fn write_number(number: &Number, out: &mut String) {
    if let Some(value) = number.as_u64() {
        let _ = write!(out, "{value}");
    } else if let Some(value) = number.as_i64() {
        let _ = write!(out, "{value}");
    } else {
        let value = number
            .as_f64()
            .expect("a JSON number is always representable as f64");
        if value.fract() == 0.0 && value.abs() < EXACT_INTEGRAL_BOUND {
            let _ = write!(out, "{}", value as i64);
        } else {
            let _ = write!(out, "{value}");
        }
    }
}

fn write_string(string: &str, out: &mut String) {
    out.push('"');
    for ch in string.chars() {
        match ch {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            control if (control as u32) < 0x20 => {
                let _ = write!(out, "\\u{:04x}", control as u32);
            }
            other => out.push(other),
        }
    }
    out.push('"');
}

#[cfg(test)]
mod tests {
    use super::canonical;
    use serde_json::{json, Value};
    use test_case::test_case;

    fn canon(value: &Value) -> String {
        canonical(value).expect("within depth budget")
    }

    #[test_case(&json!(null), "null")]
    #[test_case(&json!(true), "true")]
    #[test_case(&json!(1), "1")]
    #[test_case(&json!(1.0), "1"; "integral float collapses")]
    #[test_case(&json!(-0.0), "0"; "negative zero collapses")]
    #[test_case(&json!(1.5), "1.5")]
    #[test_case(&json!(-7), "-7")]
    #[test_case(&json!("a\"b"), r#""a\"b""#)]
    #[test_case(&json!([1.0, "x"]), r#"[1,"x"]"#)]
    #[test_case(&json!({"b": 1, "a": [true]}), r#"{"a":[true],"b":1}"#; "keys sorted")]
    fn canonical_form(value: &Value, expected: &str) {
        assert_eq!(canon(value), expected);
    }

    #[test]
    fn number_representations_collapse() {
        assert_eq!(canon(&json!(0)), canon(&json!(0.0)));
        assert_eq!(canon(&json!(12)), canon(&json!(12.0)));
        assert_ne!(canon(&json!(12)), canon(&json!(12.5)));
    }

    #[test]
    fn key_order_is_irrelevant() {
        let left: Value = serde_json::from_str(r#"{"x": 1, "y": {"b": 2, "a": 3}}"#).unwrap();
        let right: Value = serde_json::from_str(r#"{"y": {"a": 3, "b": 2}, "x": 1}"#).unwrap();
        assert_eq!(canon(&left), canon(&right));
    }

    #[test]
    fn strings_and_numbers_never_collide() {
        assert_ne!(canon(&json!("1")), canon(&json!(1)));
        assert_ne!(canon(&json!("true")), canon(&json!(true)));
    }

    #[test]
    fn runaway_nesting_is_reported() {
        let mut value = json!(0);
        for _ in 0..600 {
            value = json!([value]);
        }
        assert!(canonical(&value).is_err());
    }
}
