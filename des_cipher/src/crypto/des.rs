use crate::crypto::des_key_expansion::DesKeyExpansion;
use crate::crypto::des_tables::{FP, IP};
use crate::crypto::des_transformation::DesTransformation;
use crate::crypto::encryption_transformation::EncryptionTransformation;
use crate::crypto::error::{DesError, DesResult};
use crate::crypto::feistel_network::FeistelNetwork;
use crate::crypto::key_expansion::KeyExpansion;
use crate::crypto::key_generator::{KEY_BITS, validate_parity};
use crate::crypto::utils::{bits_to_hex, bits_to_text, hex_to_bits, permute, text_to_bits};
use bitvec::prelude::{BitSlice, BitVec};
use std::sync::Arc;

pub const BLOCK_BITS: usize = 64;
pub const BLOCK_BYTES: usize = BLOCK_BITS / 8;
const ROUNDS: usize = 16;

pub struct DES {
    feistel_network: FeistelNetwork,
    key_expansion: Arc<dyn KeyExpansion + Send + Sync>,
}

impl DES {
    pub fn new(
        key_expansion: Arc<dyn KeyExpansion + Send + Sync>,
        transformation: Arc<dyn EncryptionTransformation + Send + Sync>,
    ) -> Self {
        let feistel_network = FeistelNetwork::new(ROUNDS, transformation);

        DES {
            feistel_network,
            key_expansion,
        }
    }

    pub fn encrypt_bits(&self, block: &BitSlice, key: &BitSlice) -> DesResult<BitVec> {
        let round_keys = self.round_keys_for(block, key)?;

        let permuted = permute(block, &IP);
        let result = self.feistel_network.encrypt_with_round_keys(&permuted, &round_keys);
        Ok(permute(&result, &FP))
    }

    pub fn decrypt_bits(&self, block: &BitSlice, key: &BitSlice) -> DesResult<BitVec> {
        let round_keys = self.round_keys_for(block, key)?;

        let permuted = permute(block, &IP);
        let result = self.feistel_network.decrypt_with_round_keys(&permuted, &round_keys);
        Ok(permute(&result, &FP))
    }

    /// Checks sizes, then parity, then derives this call's subkeys.
    fn round_keys_for(&self, block: &BitSlice, key: &BitSlice) -> DesResult<Vec<BitVec>> {
        if key.len() != KEY_BITS {
            return Err(DesError::InvalidKeyLength(key.len()));
        }
        if block.len() != BLOCK_BITS {
            return Err(DesError::InvalidBlockLength(block.len()));
        }
        if !validate_parity(key) {
            return Err(DesError::InvalidKeyParity);
        }
        Ok(self.key_expansion.generate_round_keys(key))
    }
}

impl Default for DES {
    fn default() -> Self {
        DES::new(Arc::new(DesKeyExpansion), Arc::new(DesTransformation))
    }
}

/// Encrypts four UTF-16 characters. Returns the ciphertext as hex.
pub fn encrypt_block(plaintext: &str, key_hex: &str) -> DesResult<String> {
    let key = hex_to_bits(key_hex)?;
    let block = text_to_bits(plaintext);
    DES::default().encrypt_bits(&block, &key).map(|bits| bits_to_hex(&bits))
}

/// Decrypts one hex block back into text.
pub fn decrypt_block(ciphertext_hex: &str, key_hex: &str) -> DesResult<String> {
    let block = hex_to_bits(ciphertext_hex)?;
    let key = hex_to_bits(key_hex)?;
    DES::default().decrypt_bits(&block, &key).map(|bits| bits_to_text(&bits))
}

pub fn encrypt_block_hex(plaintext_hex: &str, key_hex: &str) -> DesResult<String> {
    let block = hex_to_bits(plaintext_hex)?;
    let key = hex_to_bits(key_hex)?;
    DES::default().encrypt_bits(&block, &key).map(|bits| bits_to_hex(&bits))
}

pub fn decrypt_block_hex(ciphertext_hex: &str, key_hex: &str) -> DesResult<String> {
    let block = hex_to_bits(ciphertext_hex)?;
    let key = hex_to_bits(key_hex)?;
    DES::default().decrypt_bits(&block, &key).map(|bits| bits_to_hex(&bits))
}
