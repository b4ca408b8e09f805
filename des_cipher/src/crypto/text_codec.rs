//! Text framing around the single-block cipher.
//!
//! Text is encoded, zero-padded to whole 64-bit blocks and every block is
//! encrypted on its own under the same key (ECB). Ciphertext is written as
//! space separated hex pairs; on the way back either that layout or one
//! contiguous run of hex digits is accepted.

use crate::crypto::des::{BLOCK_BYTES, DES};
use crate::crypto::error::{DesError, DesResult};
use crate::crypto::key_generator::{generate_random_key_hex, parse_key};
use crate::crypto::text_encoding::TextEncoding;
use crate::crypto::utils::{bits_to_bytes, bits_to_hex, bytes_to_bits, hex_to_bits};
use bitvec::prelude::BitVec;
use rayon::prelude::*;
use std::sync::Arc;

pub const DEFAULT_PARALLEL_THRESHOLD: usize = 64;

const TOKENS_PER_BLOCK: usize = BLOCK_BYTES;
const HEX_DIGITS_PER_BLOCK: usize = BLOCK_BYTES * 2;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CodecOptions {
    pub encoding: TextEncoding,
    /// Block count from which blocks go to the rayon pool.
    pub parallel_threshold: usize,
}

impl Default for CodecOptions {
    fn default() -> Self {
        Self {
            encoding: TextEncoding::Utf16Le,
            parallel_threshold: DEFAULT_PARALLEL_THRESHOLD,
        }
    }
}

#[derive(Clone)]
pub struct BlockCodec {
    des: Arc<DES>,
    options: CodecOptions,
}

impl BlockCodec {
    pub fn new(options: CodecOptions) -> Self {
        Self::with_cipher(DES::default(), options)
    }

    pub fn with_cipher(des: DES, options: CodecOptions) -> Self {
        Self {
            des: Arc::new(des),
            options,
        }
    }

    pub fn options(&self) -> &CodecOptions {
        &self.options
    }

    /// Characters that fill one block under the configured encoding.
    pub fn chars_per_block(&self) -> usize {
        BLOCK_BYTES / self.options.encoding.unit_width()
    }

    pub fn encrypt(&self, text: &str, key_hex: &str) -> DesResult<String> {
        let key = self.checked_key(key_hex)?;

        let mut data = self.options.encoding.encode(text)?;
        if data.is_empty() {
            return Ok(String::new());
        }
        // null characters up to the block boundary
        data.resize(data.len().div_ceil(BLOCK_BYTES) * BLOCK_BYTES, 0);

        let blocks: Vec<&[u8]> = data.chunks(BLOCK_BYTES).collect();
        log::debug!(
            "Encrypting {} block(s) of {} text",
            blocks.len(),
            self.options.encoding.name()
        );

        let encrypted = self.process_blocks(&blocks, |block| {
            self.des
                .encrypt_bits(&bytes_to_bits(block), &key)
                .map(|bits| bits_to_hex(&bits))
        })?;

        Ok(encrypted.join(" "))
    }

    pub fn decrypt(&self, ciphertext_hex: &str, key_hex: &str) -> DesResult<String> {
        let key = self.checked_key(key_hex)?;

        let blocks = split_cipher_blocks(ciphertext_hex)?;
        log::debug!("Decrypting {} block(s)", blocks.len());

        let decrypted = self.process_blocks(&blocks, |block| {
            let bits = hex_to_bits(block)?;
            self.des
                .decrypt_bits(&bits, &key)
                .map(|bits| bits_to_bytes(&bits))
        })?;

        // Decode once so a surrogate pair split across two blocks survives.
        let text = self.options.encoding.decode_with_fallback(&decrypted.concat());
        Ok(text.trim_end_matches('\0').to_owned())
    }

    fn checked_key(&self, key_hex: &str) -> DesResult<BitVec> {
        parse_key(key_hex).inspect_err(|err| log::warn!("Rejected key: {err}"))
    }

    /// Applies `op` to every block; results keep the input order.
    fn process_blocks<B, T, F>(&self, blocks: &[B], op: F) -> DesResult<Vec<T>>
    where
        B: Sync,
        T: Send,
        F: Fn(&B) -> DesResult<T> + Sync + Send,
    {
        if blocks.len() >= self.options.parallel_threshold {
            log::trace!("Processing {} blocks on the rayon pool", blocks.len());
            blocks.par_iter().map(op).collect()
        } else {
            blocks.iter().map(op).collect()
        }
    }
}

impl Default for BlockCodec {
    fn default() -> Self {
        Self::new(CodecOptions::default())
    }
}

/// Groups ciphertext into 64-bit blocks of space separated byte pairs.
///
/// Whitespace separated tokens are taken eight at a time when every token is
/// one byte pair and their count allows it. Otherwise all tokens are joined
/// and cut every 16 hex digits.
pub fn split_cipher_blocks(ciphertext_hex: &str) -> DesResult<Vec<String>> {
    let tokens: Vec<&str> = ciphertext_hex.split_whitespace().collect();

    let byte_tokens = tokens.iter().all(|token| token.len() == 2);
    if byte_tokens && tokens.len() % TOKENS_PER_BLOCK == 0 {
        return Ok(tokens
            .chunks(TOKENS_PER_BLOCK)
            .map(|block| block.join(" "))
            .collect());
    }

    let joined = tokens.concat();
    if joined.len() % HEX_DIGITS_PER_BLOCK != 0 {
        return Err(DesError::InvalidHexFormat(format!(
            "{} hex digits do not divide into 64-bit blocks",
            joined.len()
        )));
    }

    Ok(joined
        .as_bytes()
        .chunks(HEX_DIGITS_PER_BLOCK)
        .map(|block| {
            block
                .chunks(2)
                .map(String::from_utf8_lossy)
                .collect::<Vec<_>>()
                .join(" ")
        })
        .collect())
}

pub fn generate_key() -> String {
    generate_random_key_hex()
}

pub fn encrypt(plaintext: &str, key_hex: &str) -> DesResult<String> {
    BlockCodec::default().encrypt(plaintext, key_hex)
}

pub fn decrypt(ciphertext_hex: &str, key_hex: &str) -> DesResult<String> {
    BlockCodec::default().decrypt(ciphertext_hex, key_hex)
}
