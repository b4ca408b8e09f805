use bitvec::prelude::{BitSlice, BitVec};

pub trait KeyExpansion {
    fn generate_round_keys(&self, key: &BitSlice) -> Vec<BitVec>;
}
