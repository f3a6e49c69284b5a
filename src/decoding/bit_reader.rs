//! Sequential bit-level access to the artifact payload.

#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum BitReaderError {
    #[error("Cant read past the end of the bit stream. Read so far: {bits_read} bits of {bits_total}")]
    OutOfBits { bits_read: usize, bits_total: usize },
}

/// Reads single bits from a byte buffer, most significant bit first.
pub(crate) struct BitReader<'s> {
    /// Index counts bits already read
    idx: usize,
    /// Total number of readable bits, excluding trailing padding
    bits_total: usize,
    source: &'s [u8],
}

impl<'s> BitReader<'s> {
    /// `padding_bits` trailing bits of the final byte are never served;
    /// they exist only to round the payload up to whole bytes.
    pub fn new(source: &'s [u8], padding_bits: u8) -> Self {
        let bits_total = (source.len() * 8).saturating_sub(padding_bits as usize);
        BitReader {
            idx: 0,
            bits_total,
            source,
        }
    }

    pub fn bits_left(&self) -> usize {
        self.bits_total - self.idx
    }

    pub fn bits_read(&self) -> usize {
        self.idx
    }

    pub fn read_bit(&mut self) -> Result<u8, BitReaderError> {
        if self.idx >= self.bits_total {
            return Err(BitReaderError::OutOfBits {
                bits_read: self.idx,
                bits_total: self.bits_total,
            });
        }
        let byte = self.source[self.idx / 8];
        let bit = (byte >> (7 - self.idx % 8)) & 1;
        self.idx += 1;
        Ok(bit)
    }
}

#[cfg(test)]
mod tests {
    use super::{BitReader, BitReaderError};

    #[test]
    fn reads_msb_first() {
        let mut br = BitReader::new(&[0b1011_0001], 0);
        let bits: Vec<u8> = (0..8).map(|_| br.read_bit().unwrap()).collect();
        assert_eq!(bits, vec![1, 0, 1, 1, 0, 0, 0, 1]);
        assert_eq!(br.bits_left(), 0);
    }

    #[test]
    fn padding_bits_are_not_served() {
        let mut br = BitReader::new(&[0b1110_0000], 5);
        assert_eq!(br.bits_left(), 3);
        for _ in 0..3 {
            assert_eq!(br.read_bit().unwrap(), 1);
        }
        assert!(matches!(
            br.read_bit(),
            Err(BitReaderError::OutOfBits {
                bits_read: 3,
                bits_total: 3
            })
        ));
    }

    #[test]
    fn crosses_byte_boundaries() {
        let mut br = BitReader::new(&[0b0000_0001, 0b1000_0000], 0);
        let bits: Vec<u8> = (0..16).map(|_| br.read_bit().unwrap()).collect();
        assert_eq!(bits, vec![0, 0, 0, 0, 0, 0, 0, 1, 1, 0, 0, 0, 0, 0, 0, 0]);
        assert_eq!(br.bits_read(), 16);
    }

    #[test]
    fn empty_source() {
        let mut br = BitReader::new(&[], 0);
        assert_eq!(br.bits_left(), 0);
        assert!(br.read_bit().is_err());
    }
}
