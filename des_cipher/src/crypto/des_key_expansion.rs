use crate::crypto::des_tables::{PC1, PC2, SHIFT_BITS};
use crate::crypto::key_expansion::KeyExpansion;
use crate::crypto::utils::permute;
use bitvec::prelude::{BitSlice, BitVec};

pub struct DesKeyExpansion;

impl KeyExpansion for DesKeyExpansion {
    /// 16 subkeys of 48 bits, in round order. The caller checks the key is
    /// 64 bits wide.
    fn generate_round_keys(&self, key: &BitSlice) -> Vec<BitVec> {
        // PC-1 drops the parity bits: 64 -> 56
        let permuted = permute(key, &PC1);

        let (c, d) = permuted.split_at(permuted.len() / 2);
        let mut c = c.to_bitvec();
        let mut d = d.to_bitvec();

        let mut round_keys = Vec::with_capacity(SHIFT_BITS.len());
        for &shift in &SHIFT_BITS {
            c.rotate_left(shift);
            d.rotate_left(shift);

            let mut cd = BitVec::with_capacity(c.len() + d.len());
            cd.extend_from_bitslice(&c);
            cd.extend_from_bitslice(&d);

            round_keys.push(permute(&cd, &PC2));
        }

        round_keys
    }
}

/// Subkeys for `key`, first round first.
pub fn generate_subkeys(key: &BitSlice) -> Vec<BitVec> {
    DesKeyExpansion.generate_round_keys(key)
}
