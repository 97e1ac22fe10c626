//! The crate's error type.
//!
//! Only *structural* problems are errors: a bad signature, a chunk that runs
//! off the end of the buffer, a file that can't be read. Content problems
//! (CRC mismatches, unknown chunk types, unrecognized color types) never
//! abort a parse; they show up as unpopulated fields on the affected chunk
//! instead.

use thiserror::Error;

/// An error from the `pngolin` crate.
#[derive(Debug, Error)]
pub enum PngError {
  /// The first 8 bytes of the data were missing or not the PNG signature.
  #[error("first 8 bytes are not the PNG signature")]
  SignatureMismatch,

  /// A chunk field extended past the end of the buffer.
  ///
  /// The declared length, type code, payload, and CRC of a chunk all count;
  /// a stream that stops partway through any of them is truncated.
  #[error("truncated chunk: needed {needed} bytes, {remaining} remain")]
  TruncatedChunk {
    /// How many bytes the current field needed.
    needed: usize,
    /// How many bytes were actually left.
    remaining: usize,
  },

  /// The source file couldn't be read at all.
  #[error("unreadable file: {0}")]
  Unreadable(#[from] std::io::Error),
}
