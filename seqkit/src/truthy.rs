use seqkit_value::Value;

/// Values that can stand in for a condition.
///
/// This is the default predicate of [`all_truthy`](crate::all_truthy),
/// [`any_truthy`](crate::any_truthy), [`none_truthy`](crate::none_truthy) and
/// [`compact`](crate::compact). Zero, `NaN`, `false`, the empty string and
/// absent values are falsy; everything else is truthy.
pub trait Truthy {
    fn is_truthy(&self) -> bool;
}

impl Truthy for bool {
    fn is_truthy(&self) -> bool {
        *self
    }
}

macro_rules! integer_truthy {
    ($($t:ty),*) => {
        $(
            impl Truthy for $t {
                fn is_truthy(&self) -> bool {
                    *self != 0
                }
            }
        )*
    };
}

integer_truthy!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

impl Truthy for f32 {
    fn is_truthy(&self) -> bool {
        !(self.is_nan() || *self == 0.0)
    }
}

impl Truthy for f64 {
    fn is_truthy(&self) -> bool {
        !(self.is_nan() || *self == 0.0)
    }
}

impl Truthy for str {
    fn is_truthy(&self) -> bool {
        !self.is_empty()
    }
}

impl Truthy for String {
    fn is_truthy(&self) -> bool {
        !self.is_empty()
    }
}

// a sequence is present, even when it is empty
impl<T> Truthy for Vec<T> {
    fn is_truthy(&self) -> bool {
        true
    }
}

impl<T: Truthy> Truthy for Option<T> {
    fn is_truthy(&self) -> bool {
        self.as_ref().is_some_and(Truthy::is_truthy)
    }
}

impl<T: Truthy + ?Sized> Truthy for &T {
    fn is_truthy(&self) -> bool {
        (**self).is_truthy()
    }
}

impl Truthy for Value {
    fn is_truthy(&self) -> bool {
        Value::is_truthy(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_primitives() {
        assert!(!0i32.is_truthy());
        assert!(7u8.is_truthy());
        assert!(!f64::NAN.is_truthy());
        assert!(!"".is_truthy());
        assert!("a".is_truthy());
        assert!(Vec::<i32>::new().is_truthy());
        assert!(!None::<i32>.is_truthy());
        assert!(!Some(0i32).is_truthy());
        assert!(Some(3i64).is_truthy());
    }
}
