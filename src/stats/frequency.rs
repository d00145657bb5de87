//! Byte occurrence tables.

use std::ops::Add;

/// Occurrence count for each of the 256 byte values of a stream.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrequencyTable {
    counts: [u64; 256],
}

impl Default for FrequencyTable {
    fn default() -> Self {
        Self::new()
    }
}

impl FrequencyTable {
    /// Creates a table with every count at zero.
    pub fn new() -> Self {
        FrequencyTable { counts: [0; 256] }
    }

    /// Counts every byte of `bytes` in a single pass.
    ///
    /// # Examples
    ///
    /// ```
    /// use cyrcipher::stats::FrequencyTable;
    ///
    /// let table = FrequencyTable::from_bytes(b"abracadabra");
    /// assert_eq!(table.count(b'a'), 5);
    /// assert_eq!(table.total(), 11);
    /// assert_eq!(table.distinct(), 5);
    /// ```
    pub fn from_bytes(bytes: &[u8]) -> Self {
        let mut table = Self::new();
        for &b in bytes {
            table.record(b);
        }
        table
    }

    #[inline]
    pub(crate) fn record(&mut self, byte: u8) {
        self.counts[byte as usize] += 1;
    }

    /// Occurrences of `byte`.
    pub fn count(&self, byte: u8) -> u64 {
        self.counts[byte as usize]
    }

    /// All 256 counts, indexed by byte value.
    pub fn counts(&self) -> &[u64; 256] {
        &self.counts
    }

    /// Sum of all counts, equal to the length of the counted stream.
    pub fn total(&self) -> u64 {
        self.counts.iter().sum()
    }

    /// Number of byte values seen at least once.
    pub fn distinct(&self) -> usize {
        self.counts.iter().filter(|&&c| c > 0).count()
    }

    /// Largest single count, 0 for an empty table.
    pub fn max_count(&self) -> u64 {
        self.counts.iter().copied().max().unwrap_or(0)
    }

    /// True when nothing has been counted.
    pub fn is_empty(&self) -> bool {
        self.total() == 0
    }

    /// Observed byte values with their counts, ascending by byte value.
    ///
    /// Byte values that never occur are omitted.
    pub fn ordered(&self) -> Vec<(u8, u64)> {
        self.counts
            .iter()
            .enumerate()
            .filter(|&(_, &c)| c > 0)
            .map(|(b, &c)| (b as u8, c))
            .collect()
    }

    /// Shannon entropy of the counted stream in bits per byte.
    pub fn entropy(&self) -> f64 {
        super::entropy::table_entropy(self)
    }
}

impl Add for &FrequencyTable {
    type Output = FrequencyTable;

    /// Entry-wise sum of two tables.
    fn add(self, rhs: Self) -> FrequencyTable {
        let mut sum = self.clone();
        for (acc, &c) in sum.counts.iter_mut().zip(rhs.counts.iter()) {
            *acc += c;
        }
        sum
    }
}

impl FromIterator<u8> for FrequencyTable {
    fn from_iter<I: IntoIterator<Item = u8>>(iter: I) -> Self {
        let mut table = Self::new();
        for b in iter {
            table.record(b);
        }
        table
    }
}
