#![warn(missing_docs)]

//! A crate for inspecting the chunks of PNG files.
//!
//! This decodes the *structure* of a PNG: the signature, the chunk framing,
//! each chunk's CRC-32, and the payloads of the image header (`IHDR`) and
//! background color (`bKGD`) chunks. It does not decompress image data or
//! produce pixels.
//!
//! Start at the [`png`] module.

pub mod color;
pub use color::*;

pub mod crc;
pub use crc::*;

mod parse_helpers;
pub(crate) use parse_helpers::*;

mod error;
pub use error::*;

pub mod png;
pub use png::*;
