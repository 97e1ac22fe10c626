use super::*;

use crate::color::{Color, ALPHA_OPAQUE};

/// Background color fields, decoded from a `bKGD` payload.
///
/// A background chunk can't be interpreted on its own: the payload's shape
/// depends on the image's color type, which lives in the header chunk earlier
/// in the stream. Construction copies `color_type` and `bit_depth` out of the
/// most recent decoded header rather than holding a reference to the header
/// chunk itself. With no header in sight all three fields stay `None`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Bkgd {
  /// Color type borrowed from the preceding header, if one was found.
  pub color_type: Option<ColorType>,
  /// Bit depth borrowed from the preceding header, if one was found.
  pub bit_depth: Option<u8>,
  /// The background color itself.
  ///
  /// `None` when the chunk failed its CRC check, no header preceded it, the
  /// color type is unrecognized, or the payload has the wrong shape for the
  /// color type.
  pub color: Option<Color>,
}

impl Bkgd {
  pub(crate) fn new(data: &[u8], crc_ok: bool, earlier: &[Chunk<'_>]) -> Self {
    let header = earlier.iter().rev().find_map(Chunk::ihdr);
    let (color_type, bit_depth) = match header {
      Some(ihdr) => (Some(ihdr.color_type), Some(ihdr.bit_depth)),
      None => (None, None),
    };
    let color = if crc_ok {
      color_type.and_then(|ct| decode_color(ct, data))
    } else {
      None
    };
    Self { color_type, bit_depth, color }
  }

  /// Renders [`color`](Self::color) at the borrowed bit depth.
  #[inline]
  #[must_use]
  pub fn color_hex(&self) -> Option<String> {
    let color = self.color?;
    Some(color.hex(self.bit_depth.unwrap_or(Color::DEFAULT_BIT_DEPTH)))
  }
}

/// Payload shapes per color type: 2-byte grey level, 6-byte RGB triple, or a
/// 1-byte palette index. Alpha is never in the payload.
fn decode_color(color_type: ColorType, data: &[u8]) -> Option<Color> {
  Some(match (color_type, data) {
    (ColorType::Greyscale | ColorType::GreyscaleAlpha, [y0, y1]) => {
      Color::Greyscale { grey: u16::from_be_bytes([*y0, *y1]), alpha: ALPHA_OPAQUE }
    }
    (ColorType::Truecolor | ColorType::TruecolorAlpha, [r0, r1, g0, g1, b0, b1]) => {
      Color::Truecolor {
        red: u16::from_be_bytes([*r0, *r1]),
        green: u16::from_be_bytes([*g0, *g1]),
        blue: u16::from_be_bytes([*b0, *b1]),
        alpha: ALPHA_OPAQUE,
      }
    }
    (ColorType::Indexed, [i]) => Color::Indexed { index: *i },
    _ => return None,
  })
}
