//! The decode side of the codec: header parse, canonical tree
//! reconstruction, and the bit-walk back to the original bytes.

use std::collections::TryReserveError;

use tracing::debug;

use super::bit_reader::BitReader;
use crate::artifact::{ArtifactHeader, ArtifactHeaderError};
use crate::frequency::FrequencyTable;
use crate::tree::{build_tree, HuffNode};

#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum DecodeError {
    #[error("Corrupt artifact header: {0}")]
    CorruptHeader(#[from] ArtifactHeaderError),
    #[error("Payload ended after {decoded} symbols but the header declares {expected}")]
    TruncatedPayload { decoded: usize, expected: usize },
    #[error("Bit at offset {bit_offset} does not continue any valid code")]
    InvalidCode { bit_offset: usize },
    #[error("Failed to allocate the output buffer: {0}")]
    AllocationFailure(#[from] TryReserveError),
}

/// Decompress an artifact produced by [`crate::encode`] back into the
/// original byte sequence.
///
/// The tree is rebuilt from the header frequencies with the same
/// deterministic construction the encoder used, so no tree shape is read
/// from the artifact. Decoding is length-driven: exactly
/// `original_length` symbols are emitted and trailing padding bits are
/// never examined.
pub fn decode(artifact: &[u8]) -> Result<Vec<u8>, DecodeError> {
    let (header, payload_start) = ArtifactHeader::parse(artifact)?;
    let payload = &artifact[payload_start..];
    let expected = header.original_length as usize;

    let mut output = Vec::new();
    output.try_reserve_exact(expected)?;

    if expected == 0 {
        return Ok(output);
    }

    let frequencies = FrequencyTable::from_entries(&header.entries);
    let tree = build_tree(&frequencies)
        .expect("header validation guarantees entries for a non-zero length");

    let mut reader = BitReader::new(payload, header.padding_bits);

    match &tree.root {
        // Degenerate tree: one distinct symbol, one bit per occurrence.
        HuffNode::Leaf { symbol, .. } => {
            for _ in 0..expected {
                let bit = reader.read_bit().map_err(|_| DecodeError::TruncatedPayload {
                    decoded: output.len(),
                    expected,
                })?;
                if bit != 0 {
                    return Err(DecodeError::InvalidCode {
                        bit_offset: reader.bits_read() - 1,
                    });
                }
                output.push(*symbol);
            }
        }
        root @ HuffNode::Internal { .. } => {
            let mut node = root;
            while output.len() < expected {
                let bit = reader.read_bit().map_err(|_| DecodeError::TruncatedPayload {
                    decoded: output.len(),
                    expected,
                })?;
                node = match node {
                    HuffNode::Internal { left, right, .. } => {
                        if bit == 0 {
                            left.as_ref()
                        } else {
                            right.as_ref()
                        }
                    }
                    // walk always restarts from the root below
                    HuffNode::Leaf { .. } => unreachable!("walk never rests on a leaf"),
                };
                if let HuffNode::Leaf { symbol, .. } = node {
                    output.push(*symbol);
                    node = root;
                }
            }
        }
    }

    debug!(
        artifact_len = artifact.len(),
        decoded_len = output.len(),
        "decoded artifact"
    );

    Ok(output)
}
