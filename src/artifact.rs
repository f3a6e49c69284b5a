//! The compressed artifact layout.
//!
//! All integers are little-endian and fixed-width:
//!
//! | Field                  | Type                       |
//! |------------------------|----------------------------|
//! | original_length        | u64                        |
//! | symbol_count           | u16                        |
//! | entries[symbol_count]  | (u8 symbol, u32 frequency) |
//! | padding_bits           | u8                         |
//! | payload                | bit-packed codes, MSB first|
//!
//! The header carries raw frequencies rather than code lengths or tree
//! shape: the decoder reruns the same deterministic tree construction on
//! them, so the tree never needs serializing.

/// One `(symbol, frequency)` header entry. Entries are stored ascending
/// by symbol value and frequencies are always non-zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrequencyEntry {
    pub symbol: u8,
    pub frequency: u32,
}

pub struct ArtifactHeader {
    /// Number of symbols the payload decodes to.
    pub original_length: u64,
    pub entries: Vec<FrequencyEntry>,
    /// Zero bits appended to fill the final payload byte, 0..=7.
    pub padding_bits: u8,
}

#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum ArtifactHeaderError {
    #[error("Artifact too short. Is: {got} bytes, Should be at least: {need} bytes")]
    Truncated { need: usize, got: usize },
    #[error("Header entries must be sorted ascending by symbol without duplicates. Symbol {symbol} follows {previous}")]
    EntriesNotSorted { previous: u8, symbol: u8 },
    #[error("Header entry for symbol {symbol} has frequency zero")]
    ZeroFrequency { symbol: u8 },
    #[error("Invalid padding_bits field. Is: {got}, Should be lower than: 8")]
    InvalidPadding { got: u8 },
    #[error("Frequencies sum to {sum} but the header declares {declared} symbols")]
    LengthMismatch { declared: u64, sum: u64 },
    #[error("Header declares {declared_length} symbols but carries no frequency entries")]
    MissingEntries { declared_length: u64 },
}

impl ArtifactHeader {
    /// Append the serialized header to `output`.
    pub fn serialize(&self, output: &mut Vec<u8>) {
        output.extend_from_slice(&self.original_length.to_le_bytes());
        output.extend_from_slice(&(self.entries.len() as u16).to_le_bytes());
        for entry in &self.entries {
            output.push(entry.symbol);
            output.extend_from_slice(&entry.frequency.to_le_bytes());
        }
        output.push(self.padding_bits);
    }

    /// Parse and validate a header from the front of `artifact`.
    ///
    /// Returns the header and the offset at which the payload starts.
    pub fn parse(artifact: &[u8]) -> Result<(Self, usize), ArtifactHeaderError> {
        use ArtifactHeaderError as err;

        // u64 length + u16 entry count + u8 padding is the minimum
        const FIXED_LEN: usize = 8 + 2 + 1;
        const ENTRY_LEN: usize = 1 + 4;

        if artifact.len() < FIXED_LEN {
            return Err(err::Truncated {
                need: FIXED_LEN,
                got: artifact.len(),
            });
        }

        let original_length = u64::from_le_bytes(artifact[0..8].try_into().unwrap());
        let symbol_count = u16::from_le_bytes(artifact[8..10].try_into().unwrap()) as usize;

        let need = FIXED_LEN + symbol_count * ENTRY_LEN;
        if artifact.len() < need {
            return Err(err::Truncated {
                need,
                got: artifact.len(),
            });
        }

        let mut entries = Vec::with_capacity(symbol_count);
        let mut offset = 10;
        let mut frequency_sum: u64 = 0;
        for _ in 0..symbol_count {
            let symbol = artifact[offset];
            let frequency =
                u32::from_le_bytes(artifact[offset + 1..offset + 5].try_into().unwrap());
            offset += ENTRY_LEN;

            if frequency == 0 {
                return Err(err::ZeroFrequency { symbol });
            }
            if let Some(previous) = entries.last().map(|e: &FrequencyEntry| e.symbol) {
                if symbol <= previous {
                    return Err(err::EntriesNotSorted { previous, symbol });
                }
            }
            frequency_sum += u64::from(frequency);
            entries.push(FrequencyEntry { symbol, frequency });
        }

        if entries.is_empty() && original_length > 0 {
            return Err(err::MissingEntries {
                declared_length: original_length,
            });
        }
        if frequency_sum != original_length {
            return Err(err::LengthMismatch {
                declared: original_length,
                sum: frequency_sum,
            });
        }

        let padding_bits = artifact[offset];
        offset += 1;
        if padding_bits >= 8 {
            return Err(err::InvalidPadding { got: padding_bits });
        }

        Ok((
            ArtifactHeader {
                original_length,
                entries,
                padding_bits,
            },
            offset,
        ))
    }
}
