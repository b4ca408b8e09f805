use bitvec::prelude::{BitSlice, BitVec};

/// The keyed round function of a Feistel network.
pub trait EncryptionTransformation {
    fn transform(&self, input_block: &BitSlice, round_key: &BitSlice) -> BitVec;
}
