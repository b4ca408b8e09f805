use crate::crypto::des_tables::{E, P, S_BOXES};
use crate::crypto::encryption_transformation::EncryptionTransformation;
use crate::crypto::utils::{int_to_bits, permute, xor_bits};
use bitvec::prelude::{BitSlice, BitVec};

const SBOX_INPUT_BITS: usize = 6;
const SBOX_OUTPUT_BITS: usize = 4;

pub struct DesTransformation;

fn bit(group: &BitSlice, index: usize) -> usize {
    usize::from(group.get(index).is_some_and(|bit| *bit))
}

impl EncryptionTransformation for DesTransformation {
    fn transform(&self, r_block: &BitSlice, round_key: &BitSlice) -> BitVec {
        // 1. Expansion
        let expanded = permute(r_block, &E);

        // 2. XOR
        let mixed = xor_bits(&expanded, round_key);

        // 3. S-boxes
        let mut s_result = BitVec::with_capacity(S_BOXES.len() * SBOX_OUTPUT_BITS);
        for (s_box, group) in S_BOXES.iter().zip(mixed.chunks(SBOX_INPUT_BITS)) {
            let row = 2 * bit(group, 0) + bit(group, 5);
            let col = 8 * bit(group, 1) + 4 * bit(group, 2) + 2 * bit(group, 3) + bit(group, 4);
            let s_val = s_box[row][col];
            s_result.extend_from_bitslice(&int_to_bits(u64::from(s_val), SBOX_OUTPUT_BITS));
        }

        // 4. P-permutation
        permute(&s_result, &P)
    }
}

/// The DES round function `f(R, K)`: 32-bit half block, 48-bit subkey.
pub fn f_function(right: &BitSlice, subkey: &BitSlice) -> BitVec {
    DesTransformation.transform(right, subkey)
}
