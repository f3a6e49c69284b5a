//! Modules used for encoding data into a Huffman artifact.

pub(crate) mod bit_writer;
mod encoder;

pub use encoder::{encode, EncodeError};
