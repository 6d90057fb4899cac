use std::hash::{Hash, Hasher};
use std::rc::Rc;

use indexmap::IndexMap;
use ordered_float::OrderedFloat;

/// The entries of a record, in insertion order.
pub type Record = IndexMap<String, Value, ahash::RandomState>;

/// An untyped value.
///
/// Composite values are reference counted, so cloning a list or a record
/// shares the underlying storage rather than copying it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum Value {
    /// A missing value, like an absent field or an out of range index.
    #[default]
    Undefined,
    Null,
    Boolean(bool),
    Number(OrderedFloat<f64>),
    String(Rc<str>),
    List(Rc<Vec<Value>>),
    Record(Rc<Record>),
}

// records compare without regard to entry order, so we hash them in key
// order to stay consistent with PartialEq
impl Hash for Value {
    fn hash<H: Hasher>(&self, state: &mut H) {
        std::mem::discriminant(self).hash(state);
        match self {
            Value::Undefined | Value::Null => {}
            Value::Boolean(b) => b.hash(state),
            Value::Number(n) => n.hash(state),
            Value::String(s) => s.hash(state),
            Value::List(items) => items.hash(state),
            Value::Record(record) => {
                let mut entries = record.iter().collect::<Vec<_>>();
                entries.sort_by(|a, b| a.0.cmp(b.0));
                entries.hash(state);
            }
        }
    }
}

impl Value {
    /// Build a list value.
    pub fn list(items: impl IntoIterator<Item = Value>) -> Self {
        items.into_iter().collect()
    }

    /// Build a record value from its entries.
    pub fn record<K: Into<String>>(entries: impl IntoIterator<Item = (K, Value)>) -> Self {
        Value::Record(Rc::new(
            entries
                .into_iter()
                .map(|(key, value)| (key.into(), value))
                .collect(),
        ))
    }

    /// Whether the value counts as true when used as a condition.
    ///
    /// `undefined`, `null`, `false`, zero, `NaN` and the empty string are
    /// falsy. Everything else is truthy, including empty lists and records.
    pub fn is_truthy(&self) -> bool {
        match self {
            Value::Undefined | Value::Null => false,
            Value::Boolean(b) => *b,
            Value::Number(OrderedFloat(n)) => !(n.is_nan() || *n == 0.0),
            Value::String(s) => !s.is_empty(),
            Value::List(_) | Value::Record(_) => true,
        }
    }

    /// Look up a named property.
    ///
    /// Records answer with their entry, strings and lists answer `length`.
    /// Anything else is [`Value::Undefined`].
    pub fn field(&self, name: &str) -> Value {
        match self {
            Value::Record(record) => record.get(name).cloned().unwrap_or_default(),
            Value::String(_) | Value::List(_) if name == "length" => {
                self.length().map(Value::from).unwrap_or_default()
            }
            _ => Value::Undefined,
        }
    }

    /// The number of characters in a string or items in a list.
    pub fn length(&self) -> Option<usize> {
        match self {
            Value::String(s) => Some(s.chars().count()),
            Value::List(items) => Some(items.len()),
            _ => None,
        }
    }

    pub fn as_list(&self) -> Option<&[Value]> {
        match self {
            Value::List(items) => Some(items),
            _ => None,
        }
    }

    /// Turn the value into a list of values.
    ///
    /// A list yields its items; any other value becomes a list of one.
    pub fn cast_list(self) -> Vec<Value> {
        match self {
            Value::List(items) => Rc::unwrap_or_clone(items),
            other => vec![other],
        }
    }
}

impl FromIterator<Value> for Value {
    fn from_iter<I: IntoIterator<Item = Value>>(iter: I) -> Self {
        Value::List(Rc::new(iter.into_iter().collect()))
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Boolean(b)
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Value::Number(OrderedFloat(n))
    }
}

impl From<i32> for Value {
    fn from(n: i32) -> Self {
        Value::Number(OrderedFloat(n.into()))
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Value::Number(OrderedFloat(n as f64))
    }
}

impl From<usize> for Value {
    fn from(n: usize) -> Self {
        Value::Number(OrderedFloat(n as f64))
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::String(s.into())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::String(s.into())
    }
}

impl From<Vec<Value>> for Value {
    fn from(items: Vec<Value>) -> Self {
        Value::List(Rc::new(items))
    }
}

impl From<Record> for Value {
    fn from(record: Record) -> Self {
        Value::Record(Rc::new(record))
    }
}

#[cfg(test)]
mod tests {
    use ahash::{HashSet, HashSetExt};

    use super::*;

    #[test]
    fn test_truthiness() {
        let falsy = [
            Value::Undefined,
            Value::Null,
            Value::from(false),
            Value::from(0),
            Value::from(-0.0),
            Value::from(f64::NAN),
            Value::from(""),
        ];
        assert!(falsy.iter().all(|v| !v.is_truthy()));

        let truthy = [
            Value::from(true),
            Value::from(1),
            Value::from("a"),
            Value::list([]),
            Value::record::<&str>([]),
        ];
        assert!(truthy.iter().all(Value::is_truthy));
    }

    #[test]
    fn test_field() {
        let record = Value::record([("a", Value::from(1)), ("b", Value::from("x"))]);
        assert_eq!(record.field("a"), Value::from(1));
        assert_eq!(record.field("c"), Value::Undefined);
        assert_eq!(Value::from("three").field("length"), Value::from(5));
        assert_eq!(
            Value::list([Value::Null, Value::Null]).field("length"),
            Value::from(2)
        );
        assert_eq!(Value::from(4).field("length"), Value::Undefined);
    }

    #[test]
    fn test_length_counts_characters() {
        assert_eq!(Value::from("héllo").length(), Some(5));
        assert_eq!(Value::from(true).length(), None);
    }

    #[test]
    fn test_record_equality_ignores_order() {
        let a = Value::record([("x", Value::from(1)), ("y", Value::from(2))]);
        let b = Value::record([("y", Value::from(2)), ("x", Value::from(1))]);
        assert_eq!(a, b);
        let mut set = HashSet::new();
        set.insert(a);
        assert!(set.contains(&b));
    }

    #[test]
    fn test_nan_equals_itself() {
        assert_eq!(Value::from(f64::NAN), Value::from(f64::NAN));
    }

    #[test]
    fn test_cast_list() {
        assert_eq!(Value::from("foo").cast_list(), vec![Value::from("foo")]);
        assert_eq!(Value::list([Value::from(1)]).cast_list(), vec![Value::from(1)]);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_serialize() {
        let value = Value::record([
            ("name", Value::from("x")),
            ("ok", Value::from(true)),
            ("items", Value::list([Value::from(1.5), Value::Null])),
        ]);
        assert_eq!(
            serde_json::to_string(&value).unwrap(),
            r#"{"Record":{"name":{"String":"x"},"ok":{"Boolean":true},"items":{"List":[{"Number":1.5},"Null"]}}}"#
        );
    }

    #[test]
    fn test_clones_share_storage() {
        let list = Value::list([Value::from(1)]);
        let copies = vec![list.clone(); 2];
        match (&copies[0], &list) {
            (Value::List(a), Value::List(b)) => assert!(Rc::ptr_eq(a, b)),
            _ => unreachable!(),
        }
    }
}
