//! Modules used for decoding a Huffman artifact back into bytes.

pub(crate) mod bit_reader;
mod decoder;

pub use decoder::{decode, DecodeError};
