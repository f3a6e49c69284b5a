//! Per-symbol prefix codes derived from a Huffman tree.

use crate::tree::{HuffNode, HuffmanTree};

/// A single prefix code. The code occupies the low `len` bits of `bits`
/// and is emitted most significant bit first.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Code {
    pub bits: u64,
    pub len: u8,
}

/// Codes are built one bit per tree level, so a 64 bit budget would only
/// run out on a tree 65 levels deep. Reaching that depth takes a weight
/// distribution no in-memory buffer can produce, but the table build is
/// kept total and reports it instead of mangling codes.
pub const MAX_CODE_LEN: u8 = 64;

#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum CodeTableError {
    #[error("Code for symbol {symbol} would be longer than {MAX_CODE_LEN} bits")]
    CodeOverflow { symbol: u8 },
}

/// Symbol indexed code lookup table.
///
/// Prefix-freeness holds by construction: codes are only assigned at the
/// leaves of a binary tree, so no code can be a prefix of another.
pub struct CodeTable {
    codes: [Option<Code>; 256],
}

impl CodeTable {
    /// Walk the tree depth-first, appending `0` for every left descent and
    /// `1` for every right descent, recording the accumulated bits at each
    /// leaf.
    ///
    /// A root that is itself a leaf (single distinct symbol) gets the
    /// one-bit code `0` by convention, since a zero-length code cannot be
    /// decoded.
    pub fn from_tree(tree: &HuffmanTree) -> Result<Self, CodeTableError> {
        let mut table = CodeTable { codes: [None; 256] };
        match &tree.root {
            HuffNode::Leaf { symbol, .. } => {
                table.codes[*symbol as usize] = Some(Code { bits: 0, len: 1 });
            }
            root @ HuffNode::Internal { .. } => {
                table.assign(root, 0, 0)?;
            }
        }
        Ok(table)
    }

    fn assign(&mut self, node: &HuffNode, bits: u64, len: u8) -> Result<(), CodeTableError> {
        match node {
            HuffNode::Leaf { symbol, .. } => {
                self.codes[*symbol as usize] = Some(Code { bits, len });
                Ok(())
            }
            HuffNode::Internal { left, right, .. } => {
                if len == MAX_CODE_LEN {
                    let symbol = leftmost_symbol(left);
                    return Err(CodeTableError::CodeOverflow { symbol });
                }
                self.assign(left, bits << 1, len + 1)?;
                self.assign(right, (bits << 1) | 1, len + 1)
            }
        }
    }

    pub fn get(&self, symbol: u8) -> Option<Code> {
        self.codes[symbol as usize]
    }

    /// Iterate over all `(symbol, code)` pairs, ascending by symbol.
    pub fn iter(&self) -> impl Iterator<Item = (u8, Code)> + '_ {
        self.codes
            .iter()
            .enumerate()
            .filter_map(|(symbol, code)| code.map(|code| (symbol as u8, code)))
    }
}

fn leftmost_symbol(node: &HuffNode) -> u8 {
    match node {
        HuffNode::Leaf { symbol, .. } => *symbol,
        HuffNode::Internal { left, .. } => leftmost_symbol(left),
    }
}

#[cfg(test)]
mod tests {
    use super::{Code, CodeTable};
    use crate::frequency::FrequencyTable;
    use crate::tree::build_tree;

    fn table_for(input: &[u8]) -> CodeTable {
        let tree = build_tree(&FrequencyTable::count(input)).unwrap();
        CodeTable::from_tree(&tree).unwrap()
    }

    fn is_prefix(shorter: Code, longer: Code) -> bool {
        shorter.len <= longer.len && (longer.bits >> (longer.len - shorter.len)) == shorter.bits
    }

    #[test]
    fn single_symbol_gets_one_bit_code() {
        let table = table_for(b"aaaa");
        assert_eq!(table.get(b'a'), Some(Code { bits: 0, len: 1 }));
        assert_eq!(table.iter().count(), 1);
    }

    #[test]
    fn frequent_symbol_gets_shorter_code() {
        let table = table_for(b"aaaab");
        let a = table.get(b'a').unwrap();
        let b = table.get(b'b').unwrap();
        assert!(a.len < b.len || (a.len == 1 && b.len == 1));
        // two-leaf tree: both codes are one bit, b popped first so b = 0
        assert_eq!(b, Code { bits: 0, len: 1 });
        assert_eq!(a, Code { bits: 1, len: 1 });
    }

    #[test]
    fn codes_are_prefix_free() {
        let input = b"this is a sample with a fairly uneven symbol distribution aaaa eee";
        let table = table_for(input);
        let codes: Vec<(u8, Code)> = table.iter().collect();
        for (i, (_, a)) in codes.iter().enumerate() {
            for (j, (_, b)) in codes.iter().enumerate() {
                if i != j {
                    assert!(!is_prefix(*a, *b), "{a:?} is a prefix of {b:?}");
                }
            }
        }
    }

    #[test]
    fn full_alphabet_all_codes_nonempty() {
        let input: Vec<u8> = (0u8..=255).collect();
        let table = table_for(&input);
        assert_eq!(table.iter().count(), 256);
        for (_, code) in table.iter() {
            assert!(code.len >= 1);
        }
        // 256 equal weights give a perfectly balanced tree
        for (_, code) in table.iter() {
            assert_eq!(code.len, 8);
        }
    }
}
