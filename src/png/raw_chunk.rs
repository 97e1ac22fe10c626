use super::*;

use crate::{error::PngError, parse_helpers::try_split_off_byte_array};

/// One unparsed chunk: the `(length, type, data, crc)` quadruple as it sits
/// in the stream.
#[derive(Clone, Copy, PartialEq, Eq)]
pub(crate) struct RawChunk<'b> {
  pub(crate) ty: ChunkTy,
  pub(crate) declared_len: u32,
  pub(crate) data: &'b [u8],
  pub(crate) declared_crc: u32,
}
impl core::fmt::Debug for RawChunk<'_> {
  #[inline]
  fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
    f.debug_struct("RawChunk")
      .field("ty", &self.ty)
      .field("declared_len", &self.declared_len)
      .field("data", &(&self.data[..self.data.len().min(12)], self.data.len()))
      .field("declared_crc", &self.declared_crc)
      .finish()
  }
}

impl<'b> RawChunk<'b> {
  /// Splits one chunk off the front of `bytes`.
  ///
  /// Every field is measured against what's actually left, so a stream that
  /// stops partway through the length, type, payload, or CRC fails with
  /// [`PngError::TruncatedChunk`] instead of reading out of bounds.
  pub(crate) fn pull(bytes: &'b [u8]) -> Result<(Self, &'b [u8]), PngError> {
    let truncated = |needed: usize, remaining: usize| PngError::TruncatedChunk { needed, remaining };
    let (len_bytes, rest) =
      try_split_off_byte_array::<4>(bytes).ok_or_else(|| truncated(4, bytes.len()))?;
    let declared_len = u32::from_be_bytes(len_bytes);
    let (ty_bytes, rest) =
      try_split_off_byte_array::<4>(rest).ok_or_else(|| truncated(4, rest.len()))?;
    let ty = ChunkTy(ty_bytes);
    let len = declared_len as usize;
    if rest.len() < len {
      return Err(truncated(len, rest.len()));
    }
    let (data, rest) = rest.split_at(len);
    let (crc_bytes, rest) =
      try_split_off_byte_array::<4>(rest).ok_or_else(|| truncated(4, rest.len()))?;
    let declared_crc = u32::from_be_bytes(crc_bytes);
    Ok((Self { ty, declared_len, data, declared_crc }, rest))
  }
}
