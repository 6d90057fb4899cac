use json::JsonValue;

use crate::error::{Error, Result};
use crate::Value;

impl Value {
    /// Parse JSON text into a value.
    pub fn parse_json(text: &str) -> Result<Value> {
        let parsed = json::parse(text).map_err(|_| Error::InvalidJson)?;
        Ok(Value::from(&parsed))
    }
}

impl From<&JsonValue> for Value {
    fn from(value: &JsonValue) -> Self {
        match value {
            JsonValue::Null => Value::Null,
            JsonValue::Boolean(b) => Value::Boolean(*b),
            JsonValue::Number(n) => Value::from(f64::from(*n)),
            JsonValue::Short(s) => Value::from(s.as_str()),
            JsonValue::String(s) => Value::from(s.as_str()),
            JsonValue::Array(items) => items.iter().map(Value::from).collect(),
            JsonValue::Object(object) => {
                Value::record(object.iter().map(|(key, value)| (key, Value::from(value))))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use insta::assert_snapshot;

    use super::*;

    #[test]
    fn test_parse_records() {
        let value = Value::parse_json(r#"[{"a": 1, "b": "two"}, {"c": null}]"#).unwrap();
        let records = value.as_list().unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].field("a"), Value::from(1));
        assert_eq!(records[0].field("b"), Value::from("two"));
        assert_eq!(records[1].field("c"), Value::Null);
    }

    #[test]
    fn test_parse_nested_display() {
        let value = Value::parse_json("[1, [2.5, [true]], \"x\"]").unwrap();
        assert_snapshot!(value.to_string(), @"1,2.5,true,x");
    }

    #[test]
    fn test_parse_invalid() {
        assert_eq!(Value::parse_json("{nope"), Err(Error::InvalidJson));
    }
}
