//! The encode side of the codec: frequencies to tree to code table to
//! bit-packed artifact.

use tracing::debug;

use super::bit_writer::BitWriter;
use crate::artifact::{ArtifactHeader, FrequencyEntry};
use crate::code_table::{CodeTable, CodeTableError};
use crate::frequency::FrequencyTable;
use crate::tree::build_tree;

#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum EncodeError {
    #[error(transparent)]
    CodeTable(#[from] CodeTableError),
    #[error("Symbol {symbol} occurs {count} times, more than the header format can record ({max})", max = u32::MAX)]
    FrequencyOverflow { symbol: u8, count: u64 },
}

/// Compress `input` into a self-describing artifact.
///
/// The artifact embeds the symbol frequencies, so [`crate::decode`] needs
/// nothing beyond the artifact itself. Empty input is valid and produces
/// a header-only artifact that decodes back to an empty buffer.
pub fn encode(input: &[u8]) -> Result<Vec<u8>, EncodeError> {
    let frequencies = FrequencyTable::count(input);

    let mut entries = Vec::with_capacity(frequencies.distinct());
    for (symbol, count) in frequencies.iter() {
        let frequency = u32::try_from(count)
            .map_err(|_| EncodeError::FrequencyOverflow { symbol, count })?;
        entries.push(FrequencyEntry { symbol, frequency });
    }

    let (payload, padding_bits) = match build_tree(&frequencies) {
        Some(tree) => {
            let table = CodeTable::from_tree(&tree)?;
            let mut writer = BitWriter::new();
            for byte in input {
                let code = table
                    .get(*byte)
                    .expect("every symbol present in the input has a code");
                writer.write_bits(code.bits, code.len);
            }
            writer.finish()
        }
        // empty input, nothing to pack
        None => (Vec::new(), 0),
    };

    let header = ArtifactHeader {
        original_length: input.len() as u64,
        entries,
        padding_bits,
    };

    let mut artifact = Vec::with_capacity(11 + 5 * header.entries.len() + payload.len());
    header.serialize(&mut artifact);
    artifact.extend_from_slice(&payload);

    debug!(
        input_len = input.len(),
        distinct_symbols = header.entries.len(),
        artifact_len = artifact.len(),
        "encoded buffer"
    );

    Ok(artifact)
}
