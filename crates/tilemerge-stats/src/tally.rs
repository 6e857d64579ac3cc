use std::collections::BTreeMap;

use serde::Serialize;

/// Frequency count of discrete values, ordered by value.
///
/// Serializes as a JSON object mapping each value to its count.
///
/// # Example
///
/// ```
/// use tilemerge_stats::tally::ValueTally;
///
/// let mut tally = ValueTally::new();
/// tally.record(512);
/// tally.record(256);
/// tally.record(512);
///
/// assert_eq!(tally.total(), 3);
/// assert_eq!(tally.count(512), 2);
/// assert_eq!(tally.count(2048), 0);
/// assert_eq!(tally.iter().collect::<Vec<_>>(), vec![(256, 1), (512, 2)]);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ValueTally {
    counts: BTreeMap<u32, usize>,
}

impl ValueTally {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            counts: BTreeMap::new(),
        }
    }

    #[must_use]
    pub fn from_values<I>(values: I) -> Self
    where
        I: IntoIterator<Item = u32>,
    {
        let mut tally = Self::new();
        for value in values {
            tally.record(value);
        }
        tally
    }

    pub fn record(&mut self, value: u32) {
        *self.counts.entry(value).or_default() += 1;
    }

    #[must_use]
    pub fn count(&self, value: u32) -> usize {
        self.counts.get(&value).copied().unwrap_or(0)
    }

    /// Returns the number of recorded values.
    #[must_use]
    pub fn total(&self) -> usize {
        self.counts.values().sum()
    }

    #[must_use]
    pub fn max_value(&self) -> Option<u32> {
        self.counts.keys().next_back().copied()
    }

    /// Returns `(value, count)` pairs in ascending value order.
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = (u32, usize)> + '_ {
        self.counts.iter().map(|(value, count)| (*value, *count))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_tally() {
        let tally = ValueTally::new();
        assert_eq!(tally.total(), 0);
        assert_eq!(tally.max_value(), None);
        assert_eq!(tally.iter().count(), 0);
    }

    #[test]
    fn test_serializes_as_map() {
        let tally = ValueTally::from_values([128, 256, 128]);
        let json = serde_json::to_string(&tally).unwrap();
        assert_eq!(json, r#"{"128":2,"256":1}"#);
    }
}
