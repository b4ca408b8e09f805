use crate::crypto::error::{DesError, DesResult};
use crate::crypto::text_encoding::{TextEncoding, encode_utf16_le};
use bitvec::prelude::{BitSlice, BitVec};

/// Output bit `k` takes input bit `table[k] - 1`. Positions past the end of
/// `bits` read as zero.
pub fn permute(bits: &BitSlice, table: &[usize]) -> BitVec {
    let mut permuted_bits = BitVec::with_capacity(table.len());

    for &pos in table {
        let adjusted_pos = pos.saturating_sub(1);
        permuted_bits.push(bits.get(adjusted_pos).is_some_and(|bit| *bit));
    }

    permuted_bits
}

pub fn xor_bits(a: &BitSlice, b: &BitSlice) -> BitVec {
    debug_assert_eq!(a.len(), b.len(), "XOR operands must have equal length");

    a.iter()
        .by_vals()
        .zip(b.iter().by_vals())
        .map(|(x, y)| x ^ y)
        .collect()
}

pub fn bytes_to_bits(input: &[u8]) -> BitVec {
    let mut bits = BitVec::with_capacity(input.len() * 8);
    for &byte in input {
        for i in (0..8).rev() {
            bits.push((byte >> i) & 1 != 0);
        }
    }
    bits
}

/// MSB first; an incomplete trailing group is zero-filled into a last byte.
pub fn bits_to_bytes(bits: &BitSlice) -> Vec<u8> {
    let mut bytes = Vec::with_capacity(bits.len().div_ceil(8));

    for chunk in bits.chunks(8) {
        let mut byte = 0;
        for (i, bit) in chunk.iter().by_vals().enumerate() {
            if bit {
                byte |= 1 << (7 - i);
            }
        }
        bytes.push(byte);
    }
    bytes
}

pub fn int_to_bits(value: u64, length: usize) -> BitVec {
    (0..length)
        .rev()
        .map(|shift| {
            u32::try_from(shift)
                .ok()
                .and_then(|shift| value.checked_shr(shift))
                .is_some_and(|shifted| shifted & 1 == 1)
        })
        .collect()
}

pub fn bytes_to_hex(bytes: &[u8]) -> String {
    bytes
        .iter()
        .map(|byte| format!("{byte:02X}"))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Whitespace between digits is ignored.
pub fn hex_to_bytes(hex_str: &str) -> DesResult<Vec<u8>> {
    let clean: String = hex_str.chars().filter(|c| !c.is_whitespace()).collect();

    if clean.len() % 2 != 0 {
        return Err(DesError::InvalidHexFormat(format!(
            "odd number of hex digits ({})",
            clean.len()
        )));
    }

    hex::decode(&clean).map_err(|err| DesError::InvalidHexFormat(err.to_string()))
}

pub fn bits_to_hex(bits: &BitSlice) -> String {
    bytes_to_hex(&bits_to_bytes(bits))
}

pub fn hex_to_bits(hex_str: &str) -> DesResult<BitVec> {
    hex_to_bytes(hex_str).map(|bytes| bytes_to_bits(&bytes))
}

pub fn text_to_bits(text: &str) -> BitVec {
    bytes_to_bits(&encode_utf16_le(text))
}

/// Bits past the last full byte are dropped. Falls back to single-byte
/// decoding when the bytes are not valid UTF-16LE.
pub fn bits_to_text(bits: &BitSlice) -> String {
    let full_bytes = bits.len() / 8 * 8;
    let bytes = bits_to_bytes(&bits[..full_bytes]);
    TextEncoding::Utf16Le.decode_with_fallback(&bytes)
}
