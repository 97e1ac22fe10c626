use super::*;

use crate::parse_helpers::{try_pull_pod, U32BE};

use bytemuck::{Pod, Zeroable};

/// The types of color that PNG supports.
///
/// This is deliberately total over `u8`: a code outside the set PNG defines
/// decodes to [`Unrecognized`](ColorType::Unrecognized) rather than failing,
/// and downstream consumers just skip what they can't interpret.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ColorType {
  /// Greyscale
  Greyscale,
  /// Red, Green, Blue
  Truecolor,
  /// Index into a palette.
  Indexed,
  /// Greyscale + Alpha
  GreyscaleAlpha,
  /// Red, Green, Blue, Alpha
  TruecolorAlpha,
  /// A code this crate doesn't know (carries the raw value).
  Unrecognized(u8),
}
impl ColorType {
  /// The wire value of this color type.
  #[inline]
  #[must_use]
  pub const fn code(self) -> u8 {
    match self {
      Self::Greyscale => 0,
      Self::Truecolor => 2,
      Self::Indexed => 3,
      Self::GreyscaleAlpha => 4,
      Self::TruecolorAlpha => 6,
      Self::Unrecognized(code) => code,
    }
  }
  /// The number of channels in this type of color, when recognized.
  #[inline]
  #[must_use]
  pub const fn channel_count(self) -> Option<usize> {
    match self {
      Self::Greyscale | Self::Indexed => Some(1),
      Self::GreyscaleAlpha => Some(2),
      Self::Truecolor => Some(3),
      Self::TruecolorAlpha => Some(4),
      Self::Unrecognized(_) => None,
    }
  }
}
impl From<u8> for ColorType {
  #[inline]
  #[must_use]
  fn from(code: u8) -> Self {
    match code {
      0 => Self::Greyscale,
      2 => Self::Truecolor,
      3 => Self::Indexed,
      4 => Self::GreyscaleAlpha,
      6 => Self::TruecolorAlpha,
      other => Self::Unrecognized(other),
    }
  }
}

/// The wire layout of an `IHDR` payload: exactly 13 bytes, integers
/// big-endian.
#[derive(Clone, Copy, Pod, Zeroable)]
#[repr(C)]
struct RawIhdr {
  width: U32BE,
  height: U32BE,
  bit_depth: u8,
  color_type: u8,
  compression_method: u8,
  filter_method: u8,
  interlace_method: u8,
}

/// Image header fields, decoded from an `IHDR` payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Ihdr {
  /// width in pixels
  pub width: u32,
  /// height in pixels
  pub height: u32,
  /// bits per channel
  pub bit_depth: u8,
  /// pixel color type
  pub color_type: ColorType,
  /// compression method (0 is the only one defined)
  pub compression_method: u8,
  /// filter method (0 is the only one defined)
  pub filter_method: u8,
  /// interlace method (0 = none, 1 = Adam7)
  pub interlace_method: u8,
}
impl Ihdr {
  /// Decodes the header out of a payload slice.
  ///
  /// `None` when the payload isn't the fixed 13-byte layout. Questionable
  /// *values* (odd bit depths, unknown color types, nonzero methods) are
  /// carried as-is; only the shape is checked here.
  #[must_use]
  pub(crate) fn from_payload(data: &[u8]) -> Option<Self> {
    if data.len() != 13 {
      return None;
    }
    let (raw, _) = try_pull_pod::<RawIhdr>(data)?;
    Some(Self {
      width: raw.width.to_u32(),
      height: raw.height.to_u32(),
      bit_depth: raw.bit_depth,
      color_type: ColorType::from(raw.color_type),
      compression_method: raw.compression_method,
      filter_method: raw.filter_method,
      interlace_method: raw.interlace_method,
    })
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_decode_1x1_truecolor() {
    let payload = [0, 0, 0, 1, 0, 0, 0, 1, 8, 2, 0, 0, 0];
    let ihdr = Ihdr::from_payload(&payload).unwrap();
    assert_eq!(ihdr.width, 1);
    assert_eq!(ihdr.height, 1);
    assert_eq!(ihdr.bit_depth, 8);
    assert_eq!(ihdr.color_type, ColorType::Truecolor);
    assert_eq!(ihdr.compression_method, 0);
    assert_eq!(ihdr.filter_method, 0);
    assert_eq!(ihdr.interlace_method, 0);
  }

  #[test]
  fn test_unrecognized_color_type_is_carried() {
    let payload = [0, 0, 1, 0, 0, 0, 0, 32, 16, 9, 0, 0, 1];
    let ihdr = Ihdr::from_payload(&payload).unwrap();
    assert_eq!(ihdr.color_type, ColorType::Unrecognized(9));
    assert_eq!(ihdr.color_type.code(), 9);
    assert_eq!(ihdr.color_type.channel_count(), None);
    assert_eq!(ihdr.interlace_method, 1);
  }

  #[test]
  fn test_wrong_shape_is_none() {
    assert!(Ihdr::from_payload(&[]).is_none());
    assert!(Ihdr::from_payload(&[0; 12]).is_none());
    assert!(Ihdr::from_payload(&[0; 14]).is_none());
  }
}
