use seqkit_value::Value;

/// A tree of values: either a single value or a list of further trees.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Nested<T> {
    Leaf(T),
    List(Vec<Nested<T>>),
}

impl<T> Nested<T> {
    pub fn leaf(value: T) -> Self {
        Nested::Leaf(value)
    }

    pub fn list(items: impl IntoIterator<Item = Nested<T>>) -> Self {
        Nested::List(items.into_iter().collect())
    }

    /// How many levels of lists there are above the deepest leaf.
    pub fn depth(&self) -> usize {
        match self {
            Nested::Leaf(_) => 0,
            Nested::List(items) => 1 + items.iter().map(Nested::depth).max().unwrap_or(0),
        }
    }
}

/// Lists become [`Nested::List`], any other value is a leaf.
impl From<Value> for Nested<Value> {
    fn from(value: Value) -> Self {
        match value {
            Value::List(items) => Nested::List(items.iter().cloned().map(Nested::from).collect()),
            other => Nested::Leaf(other),
        }
    }
}

impl From<Nested<Value>> for Value {
    fn from(nested: Nested<Value>) -> Self {
        match nested {
            Nested::Leaf(value) => value,
            Nested::List(items) => items.into_iter().map(Value::from).collect(),
        }
    }
}

/// Flatten nested lists by up to `depth` levels.
///
/// Lists nested deeper than `depth` are kept as lists. A `depth` of zero
/// leaves the sequence as it is.
///
/// ```
/// use seqkit::{flatten, Nested};
///
/// let leaf = Nested::leaf;
/// let seq = [
///     leaf(1),
///     Nested::list([leaf(2), Nested::list([leaf(3), Nested::list([leaf(4)])])]),
/// ];
/// assert_eq!(
///     flatten(&seq, 2),
///     vec![leaf(1), leaf(2), leaf(3), Nested::list([leaf(4)])]
/// );
/// ```
pub fn flatten<T: Clone>(seq: &[Nested<T>], depth: usize) -> Vec<Nested<T>> {
    if depth == 0 {
        return seq.to_vec();
    }
    let mut flattened = Vec::with_capacity(seq.len());
    for item in seq {
        match item {
            Nested::List(items) if depth > 1 => flattened.extend(flatten(items, depth - 1)),
            Nested::List(items) => flattened.extend(items.iter().cloned()),
            leaf => flattened.push(leaf.clone()),
        }
    }
    flattened
}

/// Flatten nested lists all the way down to their leaves.
pub fn deep_flatten<T: Clone>(seq: &[Nested<T>]) -> Vec<T> {
    let mut leaves = Vec::with_capacity(seq.len());
    collect_leaves(seq, &mut leaves);
    leaves
}

fn collect_leaves<T: Clone>(seq: &[Nested<T>], leaves: &mut Vec<T>) {
    for item in seq {
        match item {
            Nested::Leaf(value) => leaves.push(value.clone()),
            Nested::List(items) => collect_leaves(items, leaves),
        }
    }
}

/// Build nested lists with the given sizes, filled with `initial`.
///
/// Without any dimensions this is just `initial` as a leaf.
pub fn initialize_nd_array<T: Clone>(initial: T, dims: &[usize]) -> Nested<T> {
    match dims.split_first() {
        None => Nested::Leaf(initial),
        Some((&size, rest)) => Nested::List(
            (0..size)
                .map(|_| initialize_nd_array(initial.clone(), rest))
                .collect(),
        ),
    }
}
