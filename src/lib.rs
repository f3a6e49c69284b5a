//! A Huffman coding compressor and decompressor for whole in-memory
//! buffers.
//!
//! The encoder counts symbol frequencies, builds a minimum-redundancy
//! prefix code over them and bit-packs the input into a self-describing
//! artifact. The decoder reads the frequencies back out of the artifact
//! header, rebuilds the identical tree (the construction is fully
//! deterministic, including its tie-break rule) and walks the packed bits
//! back into the original bytes.
//!
//! ```
//! let input = b"so much depends upon a red wheel barrow";
//! let artifact = ruhuff::encode(input).unwrap();
//! let restored = ruhuff::decode(&artifact).unwrap();
//! assert_eq!(restored, input);
//! ```
#![deny(trivial_casts, trivial_numeric_casts, rust_2018_idioms)]

pub mod artifact;
pub mod code_table;
pub mod decoding;
pub mod encoding;
pub mod frequency;
pub mod heap;
pub mod tree;


pub use decoding::{decode, DecodeError};
pub use encoding::{encode, EncodeError};
