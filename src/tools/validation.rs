//! Check tool call arguments against a tool's JSON Schema before execution.

use serde_json::Value;

/// Validate tool arguments against a JSON Schema.
///
/// Covers what the registry needs: the top-level object shape, presence of
/// required fields, unknown fields when `additionalProperties` is `false`, and
/// the declared type of each known property. Returns the first violation found
/// as a human-readable message.
pub fn validate_arguments(args: &Value, schema: &Value) -> Result<(), String> {
    let expects_object = schema.get("type").and_then(Value::as_str) == Some("object");
    let obj = match args.as_object() {
        Some(obj) => obj,
        None if expects_object => {
            return Err(format!(
                "expected object arguments, got {}",
                json_type_name(args)
            ))
        }
        None => return Ok(()),
    };

    let required = schema
        .get("required")
        .and_then(Value::as_array)
        .into_iter()
        .flatten()
        .filter_map(Value::as_str);
    for name in required {
        if !obj.contains_key(name) {
            return Err(format!("missing required field '{name}'"));
        }
    }

    let Some(properties) = schema.get("properties").and_then(Value::as_object) else {
        return Ok(());
    };
    let closed = schema.get("additionalProperties") == Some(&Value::Bool(false));
    for (key, value) in obj {
        if closed && !properties.contains_key(key) {
            return Err(format!("unexpected field '{key}'"));
        }
        let expected = properties
            .get(key)
            .and_then(|prop| prop.get("type"))
            .and_then(Value::as_str);
        if let Some(expected) = expected {
            if !value_matches_type(value, expected) {
                return Err(format!(
                    "field '{key}' expected type '{expected}', got {}",
                    json_type_name(value)
                ));
            }
        }
    }

    Ok(())
}

fn value_matches_type(value: &Value, expected: &str) -> bool {
    match expected {
        "string" => value.is_string(),
        "number" => value.is_number(),
        "integer" => value.is_i64() || value.is_u64() || integral_float(value).is_some(),
        "boolean" => value.is_boolean(),
        "object" => value.is_object(),
        "array" => value.is_array(),
        "null" => value.is_null(),
        _ => true,
    }
}

/// Rewrite integral floats (`3.0`) in `integer` properties as integers so
/// typed decoding sees an `i64`. Call after [`validate_arguments`] succeeds.
pub fn normalize_integers(args: &mut Value, schema: &Value) {
    let (Some(obj), Some(properties)) = (
        args.as_object_mut(),
        schema.get("properties").and_then(Value::as_object),
    ) else {
        return;
    };
    for (key, value) in obj.iter_mut() {
        let is_integer = properties
            .get(key)
            .and_then(|prop| prop.get("type"))
            .and_then(Value::as_str)
            == Some("integer");
        if let Some(n) = integral_float(value).filter(|_| is_integer) {
            *value = Value::from(n);
        }
    }
}

fn integral_float(value: &Value) -> Option<i64> {
    let n = value.as_f64().filter(|_| value.is_f64())?;
    // Bounds exclude values that would saturate in the cast.
    (n.fract() == 0.0 && n >= i64::MIN as f64 && n < i64::MAX as f64).then_some(n as i64)
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(n) if n.is_f64() => "number",
        Value::Number(_) => "integer",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
