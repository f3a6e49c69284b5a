//! An interface for writing an arbitrary number of bits into a buffer.

/// Packs bits into a byte buffer, most significant bit first.
pub(crate) struct BitWriter {
    /// The buffer that's filled with bits
    output: Vec<u8>,
    /// The number of bits that have been written into the buffer so far
    bit_idx: usize,
}

impl BitWriter {
    pub fn new() -> Self {
        Self {
            output: Vec::new(),
            bit_idx: 0,
        }
    }

    /// Write the low `num_bits` of `bits` into the buffer, starting with
    /// the most significant of those bits.
    pub fn write_bits(&mut self, bits: u64, num_bits: u8) {
        debug_assert!(u32::from(num_bits) <= u64::BITS);
        for shift in (0..num_bits).rev() {
            let bit = (bits >> shift) & 1;
            let bit_offset = self.bit_idx % 8;
            if bit_offset == 0 {
                self.output.push(0);
            }
            if bit == 1 {
                let byte_idx = self.bit_idx / 8;
                self.output[byte_idx] |= 1 << (7 - bit_offset);
            }
            self.bit_idx += 1;
        }
    }

    pub fn bits_written(&self) -> usize {
        self.bit_idx
    }

    /// Consume the writer, returning the packed buffer and how many zero
    /// bits pad the final byte (0..=7). The padding bits are already
    /// present in the buffer because partial bytes start out zeroed.
    pub fn finish(self) -> (Vec<u8>, u8) {
        let padding_bits = match self.bit_idx % 8 {
            0 => 0,
            partial => (8 - partial) as u8,
        };
        (self.output, padding_bits)
    }
}

#[cfg(test)]
mod tests {
    use super::BitWriter;

    #[test]
    fn single_byte_written_4_4() {
        let mut bw = BitWriter::new();
        bw.write_bits(0b1111, 4);
        bw.write_bits(0b0000, 4);
        let (output, padding) = bw.finish();
        assert_eq!(output, vec![0b1111_0000]);
        assert_eq!(padding, 0);
    }

    #[test]
    fn single_byte_written_3_5() {
        let mut bw = BitWriter::new();
        bw.write_bits(0b111, 3);
        bw.write_bits(0b00000, 5);
        let (output, padding) = bw.finish();
        assert_eq!(output, vec![0b1110_0000]);
        assert_eq!(padding, 0);
    }

    #[test]
    fn partial_final_byte_reports_padding() {
        let mut bw = BitWriter::new();
        bw.write_bits(0b101, 3);
        assert_eq!(bw.bits_written(), 3);
        let (output, padding) = bw.finish();
        assert_eq!(output, vec![0b1010_0000]);
        assert_eq!(padding, 5);
    }

    #[test]
    fn boundary_crossed_4_12() {
        let mut bw = BitWriter::new();
        bw.write_bits(0b1111, 4);
        bw.write_bits(0b0000_0000_1010, 12);
        let (output, padding) = bw.finish();
        assert_eq!(output, vec![0b1111_0000, 0b0000_1010]);
        assert_eq!(padding, 0);
    }

    #[test]
    fn empty_writer() {
        let (output, padding) = BitWriter::new().finish();
        assert!(output.is_empty());
        assert_eq!(padding, 0);
    }

    #[test]
    fn zero_length_write_is_a_noop() {
        let mut bw = BitWriter::new();
        bw.write_bits(0b1111, 0);
        assert_eq!(bw.bits_written(), 0);
    }
}
