//! Source file parsers.
//!
//! - `source`: JS/TS/JSX/TSX parser (uses swc) producing a comment token stream

pub mod source;
