//! Holds all the tools for walking PNG chunk data.
//!
//! The general format of a PNG is an 8-byte signature followed by "chunks".
//! Each chunk is self-delimiting: a 4-byte big-endian payload length, a
//! 4-byte type code, the payload, and a CRC-32 over the type code and
//! payload together. That framing is what this module decodes.
//!
//! Two chunk types get their payloads interpreted: the `IHDR` image header
//! and the `bKGD` background color. `bKGD` is the interesting one: its
//! payload can't be understood without the color type and bit depth of the
//! header chunk earlier in the stream, so the parser hands each new chunk
//! the list of chunks already decoded. Every other type code is carried as a
//! [`ChunkInfo::Raw`] chunk with its framing fields and payload intact,
//! which is enough to extend the same pattern to the rest of the chunk set.
//!
//! ## Usage
//!
//! Load a file (or adopt an in-memory buffer), then parse:
//!
//! ```no_run
//! # fn demo() -> Result<(), pngolin::PngError> {
//! use pngolin::png::PngReader;
//! let reader = PngReader::load("some.png")?;
//! for chunk in reader.parse()? {
//!   println!("{chunk:?}");
//! }
//! # Ok(())
//! # }
//! ```
//!
//! Only structural problems abort a parse: a missing signature, a chunk that
//! runs off the end of the buffer, an unreadable file. A chunk whose CRC
//! doesn't check out is still returned, flagged via
//! [`is_valid`](Chunk::is_valid), with its decoded fields left empty.

use crate::error::PngError;

mod chunk_ty;
pub use chunk_ty::*;

mod raw_chunk;
pub(crate) use raw_chunk::*;

mod chunk;
pub use chunk::*;

mod ihdr;
pub use ihdr::*;

mod bkgd;
pub use bkgd::*;

use std::path::Path;

/// The first eight bytes of a PNG datastream should match these bytes.
pub const PNG_SIGNATURE: [u8; 8] = [137, 80, 78, 71, 13, 10, 26, 10];

/// Checks the signature and gives back everything after it.
///
/// `None` when the input is shorter than the signature or starts with
/// anything else.
#[inline]
#[must_use]
pub const fn strip_signature(bytes: &[u8]) -> Option<&[u8]> {
  match bytes {
    [137, 80, 78, 71, 13, 10, 26, 10, rest @ ..] => Some(rest),
    _ => None,
  }
}

/// Parses the post-signature portion of a PNG stream into chunks.
///
/// Chunks come back in exactly their stream order; back-references (like a
/// background chunk needing the header's color type) rely on that order.
///
/// ## Failure
/// A chunk running off the end of the buffer fails the whole parse with
/// [`PngError::TruncatedChunk`]; chunks decoded before the truncation point
/// are discarded, not returned.
pub fn parse_chunks(mut rest: &[u8]) -> Result<Vec<Chunk<'_>>, PngError> {
  let mut chunks: Vec<Chunk<'_>> = Vec::new();
  while !rest.is_empty() {
    let (raw, tail) = RawChunk::pull(rest)?;
    let chunk = Chunk::from_raw(raw, &chunks);
    log::debug!("decoded {} chunk, {} payload bytes", chunk.ty(), chunk.declared_len());
    chunks.push(chunk);
    rest = tail;
  }
  Ok(chunks)
}

/// Parses a full PNG stream: signature, then chunks.
pub fn parse(bytes: &[u8]) -> Result<Vec<Chunk<'_>>, PngError> {
  let rest = strip_signature(bytes).ok_or(PngError::SignatureMismatch)?;
  parse_chunks(rest)
}

/// Owns a PNG file's bytes and hands out parses of them.
///
/// The chunks returned by [`parse`](Self::parse) borrow their payloads from
/// this buffer, so the reader has to outlive them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PngReader {
  contents: Vec<u8>,
}

impl PngReader {
  /// Reads the file at `path`.
  ///
  /// Any I/O failure is [`PngError::Unreadable`]. Notably this does *not*
  /// treat an unreadable file as an empty one: an empty buffer would then
  /// parse to the same [`PngError::SignatureMismatch`] a corrupt file gives,
  /// and the I/O problem would be unreportable.
  pub fn load(path: impl AsRef<Path>) -> Result<Self, PngError> {
    let path = path.as_ref();
    let contents = std::fs::read(path)?;
    log::debug!("read {} bytes from {}", contents.len(), path.display());
    Ok(Self { contents })
  }

  /// Adopts an in-memory buffer instead of touching the filesystem.
  #[inline]
  #[must_use]
  pub const fn from_bytes(contents: Vec<u8>) -> Self {
    Self { contents }
  }

  /// The raw file bytes.
  #[inline]
  #[must_use]
  pub fn contents(&self) -> &[u8] {
    &self.contents
  }

  /// Validates the signature and parses the chunk list.
  #[inline]
  pub fn parse(&self) -> Result<Vec<Chunk<'_>>, PngError> {
    parse(&self.contents)
  }
}

impl From<Vec<u8>> for PngReader {
  #[inline]
  #[must_use]
  fn from(contents: Vec<u8>) -> Self {
    Self::from_bytes(contents)
  }
}

#[cfg(test)]
mod tests;
