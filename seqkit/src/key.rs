use seqkit_value::Value;

/// A way to derive a grouping key from an element.
///
/// Any closure `Fn(&T) -> K` is a key selector. [`Field`] selects a named
/// property instead, for element types that have them.
///
/// ```
/// use seqkit::{count_by, Field, Value};
///
/// let words = ["one", "two", "three"].map(Value::from);
/// let counts = count_by(&words, Field("length"));
/// assert_eq!(counts[&Value::from(3)], 2);
/// ```
pub trait KeySelector<T, K> {
    fn select(&self, item: &T) -> K;
}

impl<T, K, F> KeySelector<T, K> for F
where
    F: Fn(&T) -> K,
{
    fn select(&self, item: &T) -> K {
        self(item)
    }
}

/// Select a property by name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Field<'a>(pub &'a str);

impl<T: FieldAccess> KeySelector<T, T::Output> for Field<'_> {
    fn select(&self, item: &T) -> T::Output {
        item.field(self.0)
    }
}

/// Element types with named properties.
pub trait FieldAccess {
    type Output;

    fn field(&self, name: &str) -> Self::Output;
}

impl FieldAccess for Value {
    type Output = Value;

    fn field(&self, name: &str) -> Value {
        Value::field(self, name)
    }
}

/// Things with a length, for [`longest_item`](crate::longest_item).
pub trait Length {
    fn length(&self) -> usize;
}

impl Length for str {
    fn length(&self) -> usize {
        self.chars().count()
    }
}

impl Length for String {
    fn length(&self) -> usize {
        self.chars().count()
    }
}

impl<T> Length for [T] {
    fn length(&self) -> usize {
        self.len()
    }
}

impl<T> Length for Vec<T> {
    fn length(&self) -> usize {
        self.len()
    }
}

// values without a length never win
impl Length for Value {
    fn length(&self) -> usize {
        Value::length(self).unwrap_or(0)
    }
}

impl<T: Length + ?Sized> Length for &T {
    fn length(&self) -> usize {
        (**self).length()
    }
}
