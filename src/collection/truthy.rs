//! Truthiness.
//!
//! Loose boolean coercion used by the legacy compat modes: zero, NaN, empty
//! strings, `false` and absent values are falsy; everything else is truthy.

/// Loose boolean coercion of a value.
pub trait Truthy {
    fn is_truthy(&self) -> bool;

    fn is_falsy(&self) -> bool {
        !self.is_truthy()
    }

    /// `null`-like: an absent option or JSON null. Narrower than falsy.
    fn is_nullish(&self) -> bool {
        false
    }

    /// Value a legacy fold substitutes for a falsy accumulator (`acc || 0`).
    fn falsy_reset() -> Self
    where
        Self: Sized + Default,
    {
        Self::default()
    }
}

macro_rules! impl_truthy_int {
    ($($t:ty),*) => {
        $(
            impl Truthy for $t {
                #[inline]
                fn is_truthy(&self) -> bool {
                    *self != 0
                }
            }
        )*
    };
}

impl_truthy_int!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

macro_rules! impl_truthy_float {
    ($($t:ty),*) => {
        $(
            impl Truthy for $t {
                /// `0.0`, `-0.0` and NaN are falsy.
                #[inline]
                fn is_truthy(&self) -> bool {
                    *self != 0.0 && !self.is_nan()
                }
            }
        )*
    };
}

impl_truthy_float!(f32, f64);

impl Truthy for bool {
    #[inline]
    fn is_truthy(&self) -> bool {
        *self
    }
}

impl Truthy for char {
    #[inline]
    fn is_truthy(&self) -> bool {
        true
    }
}

impl Truthy for str {
    #[inline]
    fn is_truthy(&self) -> bool {
        !self.is_empty()
    }
}

impl Truthy for String {
    #[inline]
    fn is_truthy(&self) -> bool {
        !self.is_empty()
    }
}

impl<T: Truthy> Truthy for Option<T> {
    #[inline]
    fn is_truthy(&self) -> bool {
        self.as_ref().is_some_and(Truthy::is_truthy)
    }

    fn is_nullish(&self) -> bool {
        self.is_none()
    }
}

// Sequences are objects: truthy even when empty.
impl<T> Truthy for Vec<T> {
    #[inline]
    fn is_truthy(&self) -> bool {
        true
    }
}

impl<T: Truthy + ?Sized> Truthy for &T {
    #[inline]
    fn is_truthy(&self) -> bool {
        (**self).is_truthy()
    }

    #[inline]
    fn is_nullish(&self) -> bool {
        (**self).is_nullish()
    }
}

impl Truthy for serde_json::Value {
    fn is_truthy(&self) -> bool {
        use serde_json::Value;
        match self {
            Value::Null => false,
            Value::Bool(b) => *b,
            Value::Number(n) => n.as_f64().is_some_and(|f| f.is_truthy()),
            Value::String(s) => !s.is_empty(),
            Value::Array(_) | Value::Object(_) => true,
        }
    }

    fn is_nullish(&self) -> bool {
        self.is_null()
    }

    fn falsy_reset() -> Self {
        serde_json::Value::from(0)
    }
}
