use parking_lot::Mutex;

use crate::value::Value;

type BoxedSource = Box<dyn Iterator<Item = Value> + Send>;

/// A single-pass, finite source of array elements.
///
/// The source is drained on demand while the enclosing array is encoded and is
/// never rewound: once exhausted, any later encode of the same value sees an
/// empty sequence. The iterator sits behind a lock so that a [`Value`] tree
/// holding lazy arrays remains `Send + Sync`; the lock is held only while one
/// element is pulled, never while that element is encoded.
///
/// The source must terminate. Encoding an infinite source never returns unless
/// [`EncoderConfig::max_lazy_elements`](crate::utils::conf::EncoderConfig) is set.
pub struct LazySeq {
    source: Mutex<BoxedSource>,
}

impl LazySeq {
    pub fn new<I>(source: I) -> Self
    where
        I: IntoIterator<Item = Value>,
        I::IntoIter: Send + 'static,
    {
        Self {
            source: Mutex::new(Box::new(source.into_iter())),
        }
    }

    /// Pull the next element, if any.
    pub fn next_value(&self) -> Option<Value> {
        self.source.lock().next()
    }
}

impl std::fmt::Debug for LazySeq {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LazySeq").finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value::Integer;

    #[test]
    fn drains_in_order_then_stays_exhausted() {
        let seq = LazySeq::new((1i64..=3).map(Value::from));
        let drained: Vec<_> = std::iter::from_fn(|| seq.next_value())
            .map(|v| match v {
                Value::Integer(Integer::Native(n)) => n,
                other => panic!("unexpected element {other:?}"),
            })
            .collect();
        assert_eq!(drained, vec![1, 2, 3]);
        assert!(seq.next_value().is_none());
        assert!(seq.next_value().is_none());
    }
}
