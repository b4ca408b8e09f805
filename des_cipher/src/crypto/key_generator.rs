//! Key generation and the per-byte odd parity rule.
//!
//! A DES key is eight bytes of seven data bits followed by one parity bit.
//! Every byte, parity bit included, must hold an odd number of set bits.

use crate::crypto::error::{DesError, DesResult};
use crate::crypto::utils::{bits_to_hex, bytes_to_bits, hex_to_bits};
use bitvec::prelude::{BitSlice, BitVec};
use rand::RngCore;

pub const KEY_BITS: usize = 64;
pub const KEY_DATA_BITS: usize = 56;
const DATA_BITS_PER_BYTE: usize = 7;

/// The bit that gives `data` plus itself an odd number of ones.
fn odd_parity_bit(data: &BitSlice) -> bool {
    data.count_ones() % 2 == 0
}

pub fn validate_parity(key: &BitSlice) -> bool {
    if key.len() != KEY_BITS {
        return false;
    }

    key.chunks(8).all(|byte| {
        let (data, parity) = byte.split_at(DATA_BITS_PER_BYTE);
        parity[0] == odd_parity_bit(data)
    })
}

/// Spreads 56 data bits over eight bytes and appends a parity bit to each.
pub fn add_parity(data: &BitSlice) -> DesResult<BitVec> {
    if data.len() != KEY_DATA_BITS {
        return Err(DesError::InvalidBitLength {
            expected: KEY_DATA_BITS,
            actual: data.len(),
        });
    }

    Ok(spread_with_parity(data))
}

fn spread_with_parity(data: &BitSlice) -> BitVec {
    let mut key = BitVec::with_capacity(KEY_BITS);
    for group in data.chunks(DATA_BITS_PER_BYTE) {
        key.extend_from_bitslice(group);
        key.push(odd_parity_bit(group));
    }
    key
}

pub fn generate_random_key_hex() -> String {
    generate_key_hex_with(&mut rand::rng())
}

pub fn generate_key_hex_with<R: RngCore + ?Sized>(rng: &mut R) -> String {
    let mut data = [0u8; KEY_DATA_BITS / 8];
    rng.fill_bytes(&mut data);

    bits_to_hex(&spread_with_parity(&bytes_to_bits(&data)))
}

/// Parses a hex key and checks its width, then its parity.
pub fn parse_key(key_hex: &str) -> DesResult<BitVec> {
    let key = hex_to_bits(key_hex)?;

    if key.len() != KEY_BITS {
        return Err(DesError::InvalidKeyLength(key.len()));
    }
    if !validate_parity(&key) {
        return Err(DesError::InvalidKeyParity);
    }
    Ok(key)
}
