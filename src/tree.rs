//! Huffman tree construction.
//!
//! The tree only lives long enough to derive the code table (encode side)
//! or to drive the bit-walk (decode side). Each internal node exclusively
//! owns its children, so dropping the root tears down the whole tree.

use crate::frequency::FrequencyTable;
use crate::heap::MinHeap;

#[derive(Debug)]
pub enum HuffNode {
    Leaf {
        symbol: u8,
        weight: u64,
    },
    Internal {
        weight: u64,
        left: Box<HuffNode>,
        right: Box<HuffNode>,
    },
}

impl HuffNode {
    pub fn weight(&self) -> u64 {
        match self {
            HuffNode::Leaf { weight, .. } => *weight,
            HuffNode::Internal { weight, .. } => *weight,
        }
    }

    /// Join two subtrees under a fresh parent. The first popped node goes
    /// left (bit 0), the second right (bit 1). This assignment is fixed;
    /// both sides of the codec depend on it producing identical trees.
    fn merge(left: HuffNode, right: HuffNode) -> HuffNode {
        let weight = left.weight() + right.weight();
        HuffNode::Internal {
            weight,
            left: Box::new(left),
            right: Box::new(right),
        }
    }
}

pub struct HuffmanTree {
    pub root: HuffNode,
}

/// Greedily build the tree for all symbols present in `frequencies`.
///
/// Returns `None` when no symbols are present (empty input). A single
/// present symbol yields a tree whose root is that one leaf; the code
/// table assigns it the one-bit code `0`.
pub fn build_tree(frequencies: &FrequencyTable) -> Option<HuffmanTree> {
    let mut heap = MinHeap::new();
    // Ascending symbol order seeds the FIFO tie-break deterministically.
    for (symbol, weight) in frequencies.iter() {
        heap.push(weight, HuffNode::Leaf { symbol, weight });
    }

    if heap.is_empty() {
        return None;
    }

    while heap.len() > 1 {
        let left = heap.pop()?;
        let right = heap.pop()?;
        let parent = HuffNode::merge(left, right);
        heap.push(parent.weight(), parent);
    }

    heap.pop().map(|root| HuffmanTree { root })
}
