use crate::crypto::encryption_transformation::EncryptionTransformation;
use crate::crypto::utils::xor_bits;
use bitvec::prelude::{BitSlice, BitVec};
use std::sync::Arc;

pub struct FeistelNetwork {
    num_round: usize,
    transformation: Arc<dyn EncryptionTransformation + Send + Sync>,
}

impl FeistelNetwork {
    pub fn new(
        num_round: usize,
        transformation: Arc<dyn EncryptionTransformation + Send + Sync>,
    ) -> Self {
        Self {
            num_round,
            transformation,
        }
    }

    pub fn num_round(&self) -> usize {
        self.num_round
    }

    /// Runs the rounds with `round_keys` in order and emits `right || left`,
    /// so the halves come out swapped relative to the last round.
    pub fn encrypt_with_round_keys(&self, block: &BitSlice, round_keys: &[BitVec]) -> BitVec {
        debug_assert_eq!(block.len() % 2, 0, "Block size must be even");

        let (left, right) = block.split_at(block.len() / 2);

        let mut left = left.to_bitvec();
        let mut right = right.to_bitvec();

        for round_key in round_keys.iter().take(self.num_round) {
            let feistel_out = self.transformation.transform(&right, round_key);
            debug_assert_eq!(feistel_out.len(), left.len(), "Round output must match half block");
            let new_right = xor_bits(&left, &feistel_out);
            left = std::mem::replace(&mut right, new_right);
        }

        right.extend_from_bitslice(&left);
        right
    }

    /// Inverse of [`Self::encrypt_with_round_keys`]: takes the halves back in
    /// swapped roles and walks the round keys from last to first.
    pub fn decrypt_with_round_keys(&self, block: &BitSlice, round_keys: &[BitVec]) -> BitVec {
        debug_assert_eq!(block.len() % 2, 0, "Block size must be even");

        let (right, left) = block.split_at(block.len() / 2);

        let mut left = left.to_bitvec();
        let mut right = right.to_bitvec();

        for round_key in round_keys.iter().take(self.num_round).rev() {
            let feistel_out = self.transformation.transform(&left, round_key);
            debug_assert_eq!(feistel_out.len(), right.len(), "Round output must match half block");
            let new_left = xor_bits(&right, &feistel_out);
            right = std::mem::replace(&mut left, new_left);
        }

        left.extend_from_bitslice(&right);
        left
    }
}
