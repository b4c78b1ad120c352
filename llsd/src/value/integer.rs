//! Integer payloads.
use num_bigint::BigInt;

/// An LLSD integer.
///
/// Most integers fit in a machine word and take the [`Integer::Native`] path.
/// Producers holding arbitrary-precision values keep them exact through
/// [`Integer::Big`]; the encoder emits their full decimal expansion under the
/// same `<integer>` tag rather than truncating.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Integer {
    Native(i64),
    Big(BigInt),
}

impl Integer {
    /// `true` for the zero value of either representation.
    pub fn is_zero(&self) -> bool {
        match self {
            Integer::Native(value) => *value == 0,
            Integer::Big(value) => value.sign() == num_bigint::Sign::NoSign,
        }
    }
}

impl Default for Integer {
    fn default() -> Self {
        Integer::Native(0)
    }
}

impl From<BigInt> for Integer {
    /// Normalizes into [`Integer::Native`] whenever the value fits in an `i64`.
    fn from(value: BigInt) -> Self {
        match i64::try_from(&value) {
            Ok(native) => Integer::Native(native),
            Err(_) => Integer::Big(value),
        }
    }
}

impl From<i128> for Integer {
    fn from(value: i128) -> Self {
        match i64::try_from(value) {
            Ok(native) => Integer::Native(native),
            Err(_) => Integer::Big(value.into()),
        }
    }
}

impl From<u64> for Integer {
    fn from(value: u64) -> Self {
        match i64::try_from(value) {
            Ok(native) => Integer::Native(native),
            Err(_) => Integer::Big(value.into()),
        }
    }
}

macro_rules! impl_native_from {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for Integer {
                fn from(value: $ty) -> Self {
                    Integer::Native(value.into())
                }
            }
        )*
    };
}

impl_native_from!(i8, i16, i32, i64, u8, u16, u32);

impl std::fmt::Display for Integer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Integer::Native(value) => value.fmt(f),
            Integer::Big(value) => value.fmt(f),
        }
    }
}
