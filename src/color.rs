//! Color values decoded out of chunk payloads.

use core::fmt::Write;

/// The alpha level used when a payload doesn't carry one.
///
/// Background colors never encode alpha, so any [`Color`] decoded from a
/// `bKGD` payload gets this value. Treat it as "fully opaque", not as data
/// that was actually in the stream.
pub const ALPHA_OPAQUE: u16 = 0xFFFF;

/// A decoded reference color.
///
/// Channel values are stored at full `u16` width regardless of the owning
/// image's bit depth. The bit depth only matters when rendering: see
/// [`hex`](Color::hex).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Color {
  /// Red, Green, Blue (plus an alpha that may be defaulted).
  Truecolor { red: u16, green: u16, blue: u16, alpha: u16 },
  /// A single grey level (plus an alpha that may be defaulted).
  Greyscale { grey: u16, alpha: u16 },
  /// An index into the image's palette.
  Indexed { index: u8 },
}

impl Color {
  /// The bit depth assumed when the owning image's depth isn't known.
  pub const DEFAULT_BIT_DEPTH: u8 = 8;

  /// Renders the color as `#`-prefixed lowercase hex.
  ///
  /// Each color channel gets one field of `ceil(bit_depth / 4)` digits, so an
  /// 8-bit truecolor value renders as the usual `#rrggbb`. Alpha is never
  /// rendered: a `bKGD` payload can't encode one, so printing the defaulted
  /// value would fabricate stream data.
  #[must_use]
  pub fn hex(self, bit_depth: u8) -> String {
    let depth = if bit_depth == 0 { Self::DEFAULT_BIT_DEPTH } else { bit_depth };
    let digits = usize::from(depth).div_ceil(4);
    let mut out = String::from("#");
    match self {
      Self::Truecolor { red, green, blue, alpha: _ } => {
        for channel in [red, green, blue] {
          write!(out, "{channel:0digits$x}").unwrap();
        }
      }
      Self::Greyscale { grey, alpha: _ } => write!(out, "{grey:0digits$x}").unwrap(),
      Self::Indexed { index } => write!(out, "{index:02x}").unwrap(),
    }
    out
  }
}

impl core::fmt::Display for Color {
  #[inline]
  fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
    f.write_str(&self.hex(Self::DEFAULT_BIT_DEPTH))
  }
}
