//! Image container decoding and encoding.

pub mod codec;
