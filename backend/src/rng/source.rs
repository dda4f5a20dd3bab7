//! Random source capability

/// A source of uniformly distributed integers.
///
/// The generator only ever asks for `next_int(1, 60)`; implementations are
/// expected to return values inside the inclusive bounds. Values outside are
/// reported by the generator as a broken source rather than silently used.
pub trait RandomSource {
    /// Return an integer in `[low, high]` (both inclusive).
    fn next_int(&mut self, low: i64, high: i64) -> i64;
}

impl<S: RandomSource + ?Sized> RandomSource for &mut S {
    fn next_int(&mut self, low: i64, high: i64) -> i64 {
        (**self).next_int(low, high)
    }
}

/// Replays a fixed list of values, cycling when exhausted.
///
/// Bounds are ignored. Useful to pin the exact sequence a generator sees.
///
/// # Example
/// ```
/// use lucky_dip_core_rs::rng::{RandomSource, ScriptedSource};
///
/// let mut source = ScriptedSource::new(vec![4, 8]);
/// assert_eq!(source.next_int(1, 60), 4);
/// assert_eq!(source.next_int(1, 60), 8);
/// assert_eq!(source.next_int(1, 60), 4);
/// ```
#[derive(Debug, Clone)]
pub struct ScriptedSource {
    values: Vec<i64>,
    cursor: usize,
    calls: usize,
}

impl ScriptedSource {
    /// # Panics
    /// Panics if `values` is empty
    pub fn new(values: Vec<i64>) -> Self {
        assert!(!values.is_empty(), "scripted source needs at least one value");
        Self {
            values,
            cursor: 0,
            calls: 0,
        }
    }

    /// Number of values handed out so far.
    pub fn calls(&self) -> usize {
        self.calls
    }
}

impl RandomSource for ScriptedSource {
    fn next_int(&mut self, _low: i64, _high: i64) -> i64 {
        let value = self.values[self.cursor];
        self.cursor = (self.cursor + 1) % self.values.len();
        self.calls += 1;
        value
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scripted_source_cycles() {
        let mut source = ScriptedSource::new(vec![1, 2, 3]);
        let seen: Vec<i64> = (0..7).map(|_| source.next_int(1, 60)).collect();
        assert_eq!(seen, vec![1, 2, 3, 1, 2, 3, 1]);
        assert_eq!(source.calls(), 7);
    }

    #[test]
    #[should_panic(expected = "at least one value")]
    fn test_scripted_source_rejects_empty() {
        ScriptedSource::new(Vec::new());
    }

    #[test]
    fn test_mut_ref_forwards() {
        fn draw_one<R: RandomSource>(mut source: R) -> i64 {
            source.next_int(1, 60)
        }

        let mut source = ScriptedSource::new(vec![9]);
        assert_eq!(draw_one(&mut source), 9);
        assert_eq!(source.calls(), 1);
    }
}
