use super::*;

use crate::crc::png_crc;

/// What the crate decoded out of a chunk's payload.
///
/// One closed set of variants, selected by the uppercased type code. Chunk
/// types without a dedicated decoder land in [`Raw`](ChunkInfo::Raw) and keep
/// their payload bytes available through [`Chunk::data`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChunkInfo {
  /// No dedicated decoder for this type code.
  Raw,
  /// Image header. `None` when the CRC check failed or the payload isn't the
  /// fixed 13-byte layout.
  Ihdr(Option<Ihdr>),
  /// Background color.
  Bkgd(Bkgd),
}

/// One decoded chunk of a PNG stream.
///
/// The common framing fields are always populated, whether or not the chunk
/// checks out; per-type decoded fields live in [`info`](Self::info) and are
/// only populated when [`is_valid`](Self::is_valid) holds. Chunks are
/// constructed by the parser and never change afterwards.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct Chunk<'b> {
  ty: ChunkTy,
  declared_len: u32,
  data: &'b [u8],
  declared_crc: u32,
  computed_crc: u32,
  info: ChunkInfo,
}

impl<'b> Chunk<'b> {
  /// Decodes a raw chunk, looking up back-references in `earlier` (the
  /// chunks already parsed out of the same stream, in stream order).
  ///
  /// This never fails: a CRC mismatch or an uninterpretable payload just
  /// leaves the per-type fields unpopulated.
  pub(crate) fn from_raw(raw: RawChunk<'b>, earlier: &[Chunk<'b>]) -> Self {
    let computed_crc = png_crc(raw.ty.0.iter().copied().chain(raw.data.iter().copied()));
    let crc_ok = computed_crc == raw.declared_crc;
    if !crc_ok {
      log::warn!(
        "crc mismatch on {} chunk: stored {:08x}, computed {computed_crc:08x}",
        raw.ty,
        raw.declared_crc
      );
    }
    let info = match &raw.ty.to_uppercase().0 {
      b"IHDR" => ChunkInfo::Ihdr(if crc_ok { Ihdr::from_payload(raw.data) } else { None }),
      b"BKGD" => ChunkInfo::Bkgd(Bkgd::new(raw.data, crc_ok, earlier)),
      _ => ChunkInfo::Raw,
    };
    Self {
      ty: raw.ty,
      declared_len: raw.declared_len,
      data: raw.data,
      declared_crc: raw.declared_crc,
      computed_crc,
      info,
    }
  }

  /// The chunk's type code, original case preserved.
  #[inline]
  #[must_use]
  pub const fn ty(&self) -> ChunkTy {
    self.ty
  }
  /// The length field from the stream (equal to `data().len()`).
  #[inline]
  #[must_use]
  pub const fn declared_len(&self) -> u32 {
    self.declared_len
  }
  /// The raw payload bytes.
  #[inline]
  #[must_use]
  pub const fn data(&self) -> &'b [u8] {
    self.data
  }
  /// The CRC stored in the stream.
  #[inline]
  #[must_use]
  pub const fn declared_crc(&self) -> u32 {
    self.declared_crc
  }
  /// The CRC computed over type code ++ payload.
  #[inline]
  #[must_use]
  pub const fn computed_crc(&self) -> u32 {
    self.computed_crc
  }
  /// Did the stored and computed CRC agree?
  #[inline]
  #[must_use]
  pub const fn is_valid(&self) -> bool {
    self.computed_crc == self.declared_crc
  }
  /// The decoded per-type fields.
  #[inline]
  #[must_use]
  pub const fn info(&self) -> &ChunkInfo {
    &self.info
  }
  /// The decoded header fields, when this is a well-formed `IHDR` chunk.
  #[inline]
  #[must_use]
  pub const fn ihdr(&self) -> Option<&Ihdr> {
    match &self.info {
      ChunkInfo::Ihdr(Some(ihdr)) => Some(ihdr),
      _ => None,
    }
  }
  /// The decoded background fields, when this is a `bKGD` chunk.
  #[inline]
  #[must_use]
  pub const fn bkgd(&self) -> Option<&Bkgd> {
    match &self.info {
      ChunkInfo::Bkgd(bkgd) => Some(bkgd),
      _ => None,
    }
  }
}

impl core::fmt::Debug for Chunk<'_> {
  fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
    f.debug_struct("Chunk")
      .field("ty", &self.ty)
      .field("declared_len", &self.declared_len)
      .field("data", &(&self.data[..self.data.len().min(12)], self.data.len()))
      .field("declared_crc", &self.declared_crc)
      .field("computed_crc", &self.computed_crc)
      .field("is_valid", &self.is_valid())
      .field("info", &self.info)
      .finish()
  }
}
