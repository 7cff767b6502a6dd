use serde_json::Value;
use tracing::debug;

/// Truthiness of a JSON value: `null`, `false`, zero, and empty strings,
/// arrays or objects are falsy, everything else is truthy.
pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(a) => !a.is_empty(),
        Value::Object(o) => !o.is_empty(),
    }
}

/// Looks up `key` in a JSON object and returns it only if it is truthy.
/// Non-object values never yield a field.
pub fn truthy_field<'a>(value: &'a Value, key: &str) -> Option<&'a Value> {
    let Some(object) = value.as_object() else {
        debug!("expected a JSON object when looking up {key:?}");
        return None;
    };

    object.get(key).filter(|v| is_truthy(v))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn is_truthy_falsy_values() {
        for value in [
            json!(null),
            json!(false),
            json!(0),
            json!(0.0),
            json!(""),
            json!([]),
            json!({}),
        ] {
            assert!(!is_truthy(&value), "{value} should be falsy");
        }
    }

    #[test]
    fn is_truthy_truthy_values() {
        for value in [
            json!(true),
            json!(1),
            json!(-2.5),
            json!("A tree"),
            json!(" "),
            json!([0]),
            json!({"a": null}),
        ] {
            assert!(is_truthy(&value), "{value} should be truthy");
        }
    }

    #[test]
    fn truthy_field_missing_key_returns_none() {
        let body = json!({"text": "A tree"});
        assert!(truthy_field(&body, "prompt").is_none());
    }

    #[test]
    fn truthy_field_falsy_value_returns_none() {
        let body = json!({"prompt": ""});
        assert!(truthy_field(&body, "prompt").is_none());
    }

    #[test]
    fn truthy_field_non_object_returns_none() {
        assert!(truthy_field(&json!(["prompt"]), "prompt").is_none());
        assert!(truthy_field(&json!("prompt"), "prompt").is_none());
    }

    #[test]
    fn truthy_field_returns_value() {
        let body = json!({"prompt": "A tree", "extra": 1});
        assert_eq!(truthy_field(&body, "prompt"), Some(&json!("A tree")));
    }
}
