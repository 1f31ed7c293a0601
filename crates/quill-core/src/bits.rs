//! Packing of 11-bit word indices into a big-endian bit string.
//!
//! Bit `n` of the stream is bit `7 - n % 8` of byte `n / 8`. Both directions
//! are pure; the caller splits the packed bytes into entropy and checksum.

use crate::constants::BITS_PER_WORD;

const INDEX_MASK: u16 = (1 << BITS_PER_WORD) - 1;

/// Bytes needed to hold `count` packed indices.
pub fn packed_len(count: usize) -> usize {
    (count * BITS_PER_WORD).div_ceil(8)
}

/// Pack indices MSB-first, 11 bits each. Unused trailing bits are zero.
///
/// Only the low 11 bits of each index are used.
///
/// # Examples
///
/// ```
/// use quill_core::bits::pack_indices;
/// assert_eq!(pack_indices(&[0x7FF]), vec![0xFF, 0xE0]);
/// ```
pub fn pack_indices(indices: &[u16]) -> Vec<u8> {
    let mut out = vec![0u8; packed_len(indices.len())];
    for (i, index) in indices.iter().enumerate() {
        let index = index & INDEX_MASK;
        for j in 0..BITS_PER_WORD {
            let pos = i * BITS_PER_WORD + j;
            let b = ((index >> (BITS_PER_WORD - 1 - j)) & 1) as u8;
            out[pos / 8] |= b << (7 - pos % 8);
        }
    }
    out
}

/// Read `count` 11-bit indices MSB-first from `bytes`.
///
/// Bits past the end of `bytes` read as zero.
///
/// # Examples
///
/// ```
/// use quill_core::bits::unpack_indices;
/// assert_eq!(unpack_indices(&[0xFF, 0xE0], 1), vec![0x7FF]);
/// ```
pub fn unpack_indices(bytes: &[u8], count: usize) -> Vec<u16> {
    (0..count)
        .map(|i| {
            (0..BITS_PER_WORD).fold(0u16, |acc, j| {
                let pos = i * BITS_PER_WORD + j;
                let b = bytes
                    .get(pos / 8)
                    .map_or(0, |byte| (byte >> (7 - pos % 8)) & 1);
                (acc << 1) | u16::from(b)
            })
        })
        .collect()
}
