use super::*;

use crate::{
  color::{Color, ALPHA_OPAQUE},
  crc::png_crc,
  error::PngError,
};

/// Frames one chunk the way an encoder would, CRC included.
fn frame_chunk(out: &mut Vec<u8>, ty: &[u8; 4], data: &[u8]) {
  out.extend_from_slice(&(data.len() as u32).to_be_bytes());
  out.extend_from_slice(ty);
  out.extend_from_slice(data);
  let crc = png_crc(ty.iter().copied().chain(data.iter().copied()));
  out.extend_from_slice(&crc.to_be_bytes());
}

/// A 1x1, 8-bit, truecolor image header payload.
const IHDR_1X1_RGB: [u8; 13] = [0, 0, 0, 1, 0, 0, 0, 1, 8, 2, 0, 0, 0];

fn tiny_png() -> Vec<u8> {
  let mut out = PNG_SIGNATURE.to_vec();
  frame_chunk(&mut out, b"IHDR", &IHDR_1X1_RGB);
  frame_chunk(&mut out, b"bKGD", &[0, 0xFF, 0, 0x80, 0, 0x00]);
  frame_chunk(&mut out, b"IEND", &[]);
  out
}

#[test]
fn test_strip_signature() {
  assert!(strip_signature(&[]).is_none());
  assert!(strip_signature(&[137, 80, 78]).is_none());
  assert!(strip_signature(b"GIF89a..").is_none());
  assert_eq!(strip_signature(&PNG_SIGNATURE), Some(&[][..]));
  let png = tiny_png();
  assert_eq!(strip_signature(&png), Some(&png[8..]));
}

#[test]
fn test_parse_preserves_count_and_order() {
  let png = tiny_png();
  let chunks = parse(&png).unwrap();
  assert_eq!(chunks.len(), 3);
  assert_eq!(chunks[0].ty(), ChunkTy::IHDR);
  assert_eq!(chunks[1].ty(), ChunkTy::bKGD);
  assert_eq!(chunks[2].ty(), ChunkTy::IEND);
  assert!(chunks.iter().all(Chunk::is_valid));
}

#[test]
fn test_header_decodes() {
  let png = tiny_png();
  let chunks = parse(&png).unwrap();
  let ihdr = chunks[0].ihdr().unwrap();
  assert_eq!(ihdr.width, 1);
  assert_eq!(ihdr.height, 1);
  assert_eq!(ihdr.bit_depth, 8);
  assert_eq!(ihdr.color_type, ColorType::Truecolor);
}

#[test]
fn test_background_borrows_from_header() {
  let png = tiny_png();
  let chunks = parse(&png).unwrap();
  let bkgd = chunks[1].bkgd().unwrap();
  assert_eq!(bkgd.color_type, Some(ColorType::Truecolor));
  assert_eq!(bkgd.bit_depth, Some(8));
  assert_eq!(
    bkgd.color,
    Some(Color::Truecolor { red: 0xFF, green: 0x80, blue: 0x00, alpha: ALPHA_OPAQUE })
  );
  assert_eq!(bkgd.color_hex().unwrap(), "#ff8000");
}

#[test]
fn test_background_without_header_has_no_color() {
  // valid CRC, but no IHDR anywhere before it
  let mut png = PNG_SIGNATURE.to_vec();
  frame_chunk(&mut png, b"bKGD", &[0, 0xFF, 0, 0x80, 0, 0x00]);
  let chunks = parse(&png).unwrap();
  assert_eq!(chunks.len(), 1);
  assert!(chunks[0].is_valid());
  let bkgd = chunks[0].bkgd().unwrap();
  assert_eq!(bkgd.color_type, None);
  assert_eq!(bkgd.bit_depth, None);
  assert_eq!(bkgd.color, None);
}

#[test]
fn test_background_uses_most_recent_header() {
  // two headers; the second one switches to indexed color
  let mut png = PNG_SIGNATURE.to_vec();
  frame_chunk(&mut png, b"IHDR", &IHDR_1X1_RGB);
  frame_chunk(&mut png, b"IHDR", &[0, 0, 0, 1, 0, 0, 0, 1, 8, 3, 0, 0, 0]);
  frame_chunk(&mut png, b"bKGD", &[5]);
  let chunks = parse(&png).unwrap();
  let bkgd = chunks[2].bkgd().unwrap();
  assert_eq!(bkgd.color_type, Some(ColorType::Indexed));
  assert_eq!(bkgd.color, Some(Color::Indexed { index: 5 }));
}

#[test]
fn test_corrupt_crc_is_not_fatal() {
  let mut png = tiny_png();
  // flip one payload byte of the IHDR chunk (offset: 8 sig + 8 framing)
  png[16] ^= 0x40;
  let chunks = parse(&png).unwrap();
  assert_eq!(chunks.len(), 3);
  assert!(!chunks[0].is_valid());
  assert_eq!(chunks[0].ihdr(), None);
  // the background chunk now has no decoded header to borrow from
  let bkgd = chunks[1].bkgd().unwrap();
  assert_eq!(bkgd.color_type, None);
  assert_eq!(bkgd.color, None);
}

#[test]
fn test_truncated_stream_fails_whole_parse() {
  let mut png = PNG_SIGNATURE.to_vec();
  png.extend_from_slice(&100_u32.to_be_bytes());
  png.extend_from_slice(b"IDAT");
  png.extend_from_slice(&[0; 10]);
  let err = parse(&png).unwrap_err();
  assert!(matches!(err, PngError::TruncatedChunk { needed: 100, remaining: 10 }));
}

#[test]
fn test_bad_signature_fails() {
  assert!(matches!(parse(&[]), Err(PngError::SignatureMismatch)));
  assert!(matches!(parse(b"\x89PNG\r\n\x1a"), Err(PngError::SignatureMismatch)));
  let mut png = tiny_png();
  png[0] = 0x88;
  assert!(matches!(parse(&png), Err(PngError::SignatureMismatch)));
}

#[test]
fn test_reader_from_bytes() {
  let reader = PngReader::from_bytes(tiny_png());
  let chunks = reader.parse().unwrap();
  assert_eq!(chunks.len(), 3);
  // parsing is repeatable off the same buffer
  let again = reader.parse().unwrap();
  assert_eq!(chunks, again);
}
