//! Session-level entry point: bytes in, composited bytes out.

pub mod pipeline;
