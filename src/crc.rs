#![forbid(unsafe_code)]

//! Table-driven CRC computation.
//!
//! The engine is parameterized over the polynomial, the bit order, and the
//! initial value, so it covers more than just the PNG flavor of CRC-32. One
//! 256-entry lookup table is built per `(polynomial, reflected)` pair and
//! cached for the life of the process; every computation with the same
//! parameters reuses the same table.
//!
//! [`png_crc`] is the fixed call that PNG chunk checking uses: polynomial
//! `0xEDB88320`, initial value `u32::MAX`, reflected, and the result XORed
//! with `u32::MAX`. PNG requires exactly this pre/post conditioning, so don't
//! improvise.

use std::{
  collections::BTreeMap,
  sync::{OnceLock, RwLock},
};

/// The (reflected) polynomial used by PNG's CRC-32.
pub const PNG_CRC_POLYNOMIAL: u32 = 0xEDB8_8320;

/// Builds the 256-entry lookup table for one byte of CRC input.
///
/// * `reflected` runs the standard LSB-first reduction: shift right, XOR with
///   `polynomial` whenever the bit shifted out was set.
/// * Non-reflected runs the MSB-first reduction: the byte value starts in the
///   top byte, shift left, XOR whenever the bit shifted out was set.
#[must_use]
pub fn build_table(polynomial: u32, reflected: bool) -> [u32; 256] {
  let mut table = [0_u32; 256];
  let mut n = 0;
  while n < 256 {
    let mut c: u32 = if reflected { n as u32 } else { (n as u32) << 24 };
    let mut k = 0;
    while k < 8 {
      c = if reflected {
        if (c & 1) != 0 {
          polynomial ^ (c >> 1)
        } else {
          c >> 1
        }
      } else {
        if (c & 0x8000_0000) != 0 {
          polynomial ^ (c << 1)
        } else {
          c << 1
        }
      };
      //
      k += 1;
    }
    table[n] = c;
    //
    n += 1;
  }
  table
}

static TABLE_CACHE: OnceLock<RwLock<BTreeMap<(u32, bool), &'static [u32; 256]>>> = OnceLock::new();

/// Gets the cached lookup table for a `(polynomial, reflected)` pair.
///
/// The table for any given pair is built at most once; later calls return the
/// same `'static` reference and only take a read lock.
#[must_use]
pub fn table_for(polynomial: u32, reflected: bool) -> &'static [u32; 256] {
  let cache = TABLE_CACHE.get_or_init(|| RwLock::new(BTreeMap::new()));
  if let Some(table) = cache.read().unwrap().get(&(polynomial, reflected)).copied() {
    return table;
  }
  let mut cache = cache.write().unwrap();
  *cache
    .entry((polynomial, reflected))
    .or_insert_with(|| &*Box::leak(Box::new(build_table(polynomial, reflected))))
}

/// Runs the table-driven CRC over `data`.
///
/// No output conditioning is applied; callers XOR the result themselves when
/// their CRC flavor calls for it.
#[must_use]
pub fn crc32(data: &[u8], polynomial: u32, initial: u32, reflected: bool) -> u32 {
  let table = table_for(polynomial, reflected);
  let mut crc = initial;
  for byte in data.iter().copied() {
    crc = if reflected {
      table[((crc ^ u32::from(byte)) & 0xFF) as usize] ^ (crc >> 8)
    } else {
      table[(((crc >> 24) ^ u32::from(byte)) & 0xFF) as usize] ^ (crc << 8)
    };
  }
  crc
}

/// The CRC-32 that PNG chunk validation uses.
///
/// Takes an iterator so that a chunk's type code and payload can be chained
/// without copying them into one buffer first.
#[inline]
#[must_use]
pub fn png_crc(bytes: impl Iterator<Item = u8>) -> u32 {
  let table = table_for(PNG_CRC_POLYNOMIAL, true);
  let mut crc = u32::MAX;
  for byte in bytes {
    crc = table[((crc ^ u32::from(byte)) & 0xFF) as usize] ^ (crc >> 8);
  }
  crc ^ u32::MAX
}
