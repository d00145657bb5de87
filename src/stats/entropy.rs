//! Shannon entropy over raw bytes.
//!
//! Entropy is always computed over the 256 byte values, so upper and lower
//! case letters, spaces and punctuation count as distinct symbols.

use super::frequency::FrequencyTable;

/// Shannon entropy of `bytes` in bits per byte.
///
/// Returns 0.0 for an empty stream.
///
/// # Examples
///
/// ```
/// use cyrcipher::stats::shannon_entropy;
///
/// assert_eq!(shannon_entropy(&[]), 0.0);
/// assert_eq!(shannon_entropy(&[7; 64]), 0.0);
/// assert_eq!(shannon_entropy(b"abab"), 1.0);
/// ```
pub fn shannon_entropy(bytes: &[u8]) -> f64 {
    table_entropy(&FrequencyTable::from_bytes(bytes))
}

pub(crate) fn table_entropy(table: &FrequencyTable) -> f64 {
    if table.is_empty() {
        return 0.0;
    }
    let len = table.total() as f64;
    let entropy: f64 = table
        .counts()
        .iter()
        .filter(|&&c| c > 0)
        .map(|&c| {
            let p = c as f64 / len;
            -p * p.log2()
        })
        .sum();
    // a single symbol sums to -0.0
    if entropy <= 0.0 {
        0.0
    } else {
        entropy
    }
}

/// Upper bound on the entropy of the counted stream: `log2(distinct)`.
pub fn max_entropy(table: &FrequencyTable) -> f64 {
    match table.distinct() {
        0 => 0.0,
        n => (n as f64).log2(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_uniform_bytes_give_eight_bits() {
        let bytes: Vec<u8> = (0..=255u8).cycle().take(256 * 4).collect();
        assert_eq!(shannon_entropy(&bytes), 8.0);
    }

    #[test]
    fn test_single_value_is_zero() {
        let entropy = shannon_entropy(&[0xC0; 1000]);
        assert_eq!(entropy, 0.0);
        assert!(entropy.is_sign_positive());
    }

    #[test]
    fn test_bounded_by_distinct_count() {
        let bytes = b"the quick brown fox jumps over the lazy dog";
        let table = FrequencyTable::from_bytes(bytes);
        let entropy = table.entropy();
        assert!(entropy > 0.0);
        assert!(entropy <= max_entropy(&table) + 1e-12);
    }

    #[test]
    fn test_skewed_two_symbol_stream() {
        // p = 1/4, 3/4
        let entropy = shannon_entropy(b"abbb");
        let expected = -(0.25f64 * 0.25f64.log2() + 0.75 * 0.75f64.log2());
        assert!((entropy - expected).abs() < 1e-12);
    }

    #[test]
    fn test_max_entropy_of_empty_table() {
        assert_eq!(max_entropy(&FrequencyTable::new()), 0.0);
    }
}
