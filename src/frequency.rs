//! Symbol occurrence counting over whole byte buffers.

use crate::artifact::FrequencyEntry;

/// Occurrence counts for every possible byte value.
///
/// Built once per input and read-only afterwards. The symbol space is
/// exactly `u8`, so a dense 256 slot array beats a keyed map here.
pub struct FrequencyTable {
    counts: [u64; 256],
}

impl FrequencyTable {
    /// Count the occurrences of each byte in `input`.
    ///
    /// An empty input yields a table with no present symbols. That is a
    /// valid state, not an error.
    pub fn count(input: &[u8]) -> Self {
        let mut counts = [0u64; 256];
        for byte in input {
            counts[*byte as usize] += 1;
        }
        FrequencyTable { counts }
    }

    /// Rebuild the table the decoder side uses from parsed header entries.
    pub fn from_entries(entries: &[FrequencyEntry]) -> Self {
        let mut counts = [0u64; 256];
        for entry in entries {
            counts[entry.symbol as usize] = u64::from(entry.frequency);
        }
        FrequencyTable { counts }
    }

    pub fn get(&self, symbol: u8) -> u64 {
        self.counts[symbol as usize]
    }

    /// Number of distinct symbols with a non-zero count.
    pub fn distinct(&self) -> usize {
        self.counts.iter().filter(|count| **count > 0).count()
    }

    /// Total number of counted symbols, i.e. the input length.
    pub fn total(&self) -> u64 {
        self.counts.iter().sum()
    }

    /// Iterate over `(symbol, count)` pairs with non-zero counts,
    /// ascending by symbol value.
    pub fn iter(&self) -> impl Iterator<Item = (u8, u64)> + '_ {
        self.counts
            .iter()
            .enumerate()
            .filter(|(_, count)| **count > 0)
            .map(|(symbol, count)| (symbol as u8, *count))
    }
}
