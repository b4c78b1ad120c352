//! Value model
//!
//! An LLSD value is a closed tagged union over the data model's eleven kinds
//! plus a transparent [`Value::Indirect`] wrapper. Producers classify their own
//! objects into one of these variants before calling the encoder; the encoder
//! dispatches on the tag alone.
//!
//! - Scalars own their payload outright (`String`, `Vec<u8>`, ...).
//! - [`Array`] is either a materialized `Vec` or a single-pass [`LazySeq`].
//! - Maps are a `Vec` of `(key, value)` pairs kept in producer order. Keys are
//!   not sorted and duplicates are not merged.
//!
//! Values are never mutated by the encoder. The one exception to "read many
//! times" is a lazy array, which can only be drained once.
use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use num_bigint::BigInt;
use strum::EnumIs;
use uuid::Uuid;

pub mod date;
pub mod integer;
pub mod seq;

pub use date::Date;
pub use integer::Integer;
pub use seq::LazySeq;

/// The elements of an LLSD array.
#[derive(Debug, EnumIs)]
pub enum Array {
    /// A finite, materialized sequence.
    Elements(Vec<Value>),

    /// A finite sequence produced on demand.
    Lazy(LazySeq),
}

impl Default for Array {
    fn default() -> Self {
        Array::Elements(Vec::new())
    }
}

/// An LLSD value.
#[derive(Debug, Default, EnumIs)]
pub enum Value {
    #[default]
    Undefined,
    Boolean(bool),
    Integer(Integer),
    Real(f64),

    /// UTF-8 text.
    String(String),

    /// A UUID, or `None` for the null UUID. The nil UUID encodes the same way.
    Uuid(Option<Uuid>),
    Date(Date),
    Uri(String),
    Binary(Vec<u8>),
    Array(Array),

    /// Key/value pairs in the order the producer supplied them.
    Map(Vec<(String, Value)>),

    /// A wrapper that encodes exactly as its inner value.
    Indirect(Box<Value>),
}

impl Value {
    /// Build a map from any sequence of pairs, coercing keys to text.
    ///
    /// ```rust
    /// # use llsd::value::Value;
    /// let map = Value::map([("name", Value::from("hive")), ("count", Value::from(3))]);
    /// assert!(map.is_map());
    /// ```
    pub fn map<K, V, I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<Value>,
    {
        Value::Map(
            pairs
                .into_iter()
                .map(|(key, value)| (key.into(), value.into()))
                .collect(),
        )
    }

    pub fn array<V, I>(elements: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<Value>,
    {
        Value::Array(Array::Elements(
            elements.into_iter().map(Into::into).collect(),
        ))
    }

    /// Build an array whose elements are pulled from `source` while encoding.
    pub fn lazy<I>(source: I) -> Self
    where
        I: IntoIterator<Item = Value>,
        I::IntoIter: Send + 'static,
    {
        Value::Array(Array::Lazy(LazySeq::new(source)))
    }

    pub fn binary(bytes: impl Into<Vec<u8>>) -> Self {
        Value::Binary(bytes.into())
    }

    pub fn uri(text: impl Into<String>) -> Self {
        Value::Uri(text.into())
    }

    pub fn null_uuid() -> Self {
        Value::Uuid(None)
    }

    pub fn indirect(inner: impl Into<Value>) -> Self {
        Value::Indirect(Box::new(inner.into()))
    }

    /// Strip any number of [`Value::Indirect`] layers.
    pub fn resolve(&self) -> &Value {
        let mut current = self;
        while let Value::Indirect(inner) = current {
            current = inner.as_ref();
        }
        current
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Value::Boolean(value)
    }
}

macro_rules! impl_integer_from {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for Value {
                fn from(value: $ty) -> Self {
                    Value::Integer(value.into())
                }
            }
        )*
    };
}

impl_integer_from!(i8, i16, i32, i64, i128, u8, u16, u32, u64, BigInt, Integer);

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Value::Real(value)
    }
}

impl From<f32> for Value {
    fn from(value: f32) -> Self {
        Value::Real(value.into())
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::String(value.to_owned())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Value::String(value)
    }
}

impl From<Uuid> for Value {
    fn from(value: Uuid) -> Self {
        Value::Uuid(Some(value))
    }
}

impl From<Date> for Value {
    fn from(value: Date) -> Self {
        Value::Date(value)
    }
}

impl From<NaiveDate> for Value {
    fn from(value: NaiveDate) -> Self {
        Value::Date(value.into())
    }
}

impl From<NaiveDateTime> for Value {
    fn from(value: NaiveDateTime) -> Self {
        Value::Date(value.into())
    }
}

impl From<DateTime<Utc>> for Value {
    fn from(value: DateTime<Utc>) -> Self {
        Value::Date(value.into())
    }
}

impl From<Vec<Value>> for Value {
    fn from(value: Vec<Value>) -> Self {
        Value::Array(Array::Elements(value))
    }
}

impl From<Array> for Value {
    fn from(value: Array) -> Self {
        Value::Array(value)
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(value: Option<T>) -> Self {
        value.map_or(Value::Undefined, Into::into)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn map_preserves_order_and_duplicates() {
        let map = Value::map([("b", 1), ("a", 2), ("b", 3)]);
        let Value::Map(pairs) = map else {
            panic!("expected a map");
        };
        let keys: Vec<_> = pairs.iter().map(|(k, _)| k.as_str()).collect();
        assert_eq!(keys, ["b", "a", "b"]);
    }

    #[test]
    fn none_becomes_undefined() {
        assert!(Value::from(None::<i64>).is_undefined());
        assert!(Value::from(Some(true)).is_boolean());
    }

    #[test]
    fn resolve_strips_nested_indirections() {
        let value = Value::indirect(Value::indirect("inner"));
        assert!(matches!(value.resolve(), Value::String(s) if s == "inner"));
    }

    #[test]
    fn large_unsigned_keeps_exact_magnitude() {
        let value = Value::from(u64::MAX);
        assert!(matches!(value, Value::Integer(Integer::Big(_))));
    }
}
