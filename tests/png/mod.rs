use pngolin::png::{parse, ChunkTy, PngReader, PNG_SIGNATURE};
use pngolin::{png_crc, PngError};

use std::io::Write;

fn frame_chunk(out: &mut Vec<u8>, ty: &[u8; 4], data: &[u8]) {
  out.extend_from_slice(&(data.len() as u32).to_be_bytes());
  out.extend_from_slice(ty);
  out.extend_from_slice(data);
  let crc = png_crc(ty.iter().copied().chain(data.iter().copied()));
  out.extend_from_slice(&crc.to_be_bytes());
}

#[test]
fn test_parse_never_panics_on_garbage() {
  // totally random data should come back as a clean error or a chunk list,
  // never a panic or an out-of-bounds read.
  for _ in 0..10 {
    let v = super::rand_bytes(1024);
    let _ = parse(&v);
  }
  // random data behind a real signature exercises the chunk walker itself
  for _ in 0..10 {
    let mut v = PNG_SIGNATURE.to_vec();
    v.extend_from_slice(&super::rand_bytes(1024));
    let _ = parse(&v);
  }
}

#[test]
fn test_reader_round_trips_through_a_file() {
  let mut png = PNG_SIGNATURE.to_vec();
  frame_chunk(&mut png, b"IHDR", &[0, 0, 0, 2, 0, 0, 0, 3, 8, 6, 0, 0, 0]);
  frame_chunk(&mut png, b"IEND", &[]);

  let mut file = tempfile::NamedTempFile::new().unwrap();
  file.write_all(&png).unwrap();
  file.flush().unwrap();

  let reader = PngReader::load(file.path()).unwrap();
  assert_eq!(reader.contents(), &png[..]);
  let chunks = reader.parse().unwrap();
  assert_eq!(chunks.len(), 2);
  assert_eq!(chunks[0].ty(), ChunkTy::IHDR);
  let ihdr = chunks[0].ihdr().unwrap();
  assert_eq!((ihdr.width, ihdr.height), (2, 3));
}

#[test]
fn test_loading_a_missing_file_is_an_error() {
  let dir = tempfile::tempdir().unwrap();
  let missing = dir.path().join("not_actually_here.png");
  let err = PngReader::load(&missing).unwrap_err();
  assert!(matches!(err, PngError::Unreadable(_)));
}
