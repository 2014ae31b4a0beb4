//! One-shot byte-slice API
//!
//! Convenience functions over raw byte buffers, dispatching on key length:
//! 16, 24, or 32 bytes select AES-128, AES-192, or AES-256, and anything
//! else is rejected before any key-schedule work. Each call expands the key
//! schedule afresh and discards it on return; callers doing bulk work under
//! one key should hold an [`Ecb`] (or a [`BlockCipher`]) instance instead.

use rand::rngs::OsRng;
use rand::RngCore;
use zeroize::Zeroizing;

use crate::block::aes::{
    Aes128, Aes192, Aes256, AES128_KEY_SIZE, AES192_KEY_SIZE, AES256_KEY_SIZE, AES_BLOCK_SIZE,
};
use crate::block::{BlockCipher, Ecb};
use crate::error::{validate, Error, Result};
use crate::types::SecretBytes;

/// Runs `$body` with `$cipher` bound to the AES variant selected by key
/// length, or fails fast on an unsupported length.
macro_rules! with_cipher {
    ($key:expr, |$cipher:ident| $body:expr) => {
        match $key.len() {
            AES128_KEY_SIZE => {
                let $cipher = Aes128::new(&SecretBytes::<AES128_KEY_SIZE>::from_slice($key)?);
                $body
            }
            AES192_KEY_SIZE => {
                let $cipher = Aes192::new(&SecretBytes::<AES192_KEY_SIZE>::from_slice($key)?);
                $body
            }
            AES256_KEY_SIZE => {
                let $cipher = Aes256::new(&SecretBytes::<AES256_KEY_SIZE>::from_slice($key)?);
                $body
            }
            _ => Err(Error::param(
                "AES key",
                "length must be 16, 24, or 32 bytes",
            )),
        }
    };
}

/// Encrypts a single 16-byte block
pub fn encrypt_block(block: &[u8], key: &[u8]) -> Result<[u8; AES_BLOCK_SIZE]> {
    validate::length("AES block", block.len(), AES_BLOCK_SIZE)?;

    let mut out = [0u8; AES_BLOCK_SIZE];
    out.copy_from_slice(block);
    with_cipher!(key, |cipher| {
        cipher.encrypt_block(&mut out)?;
        Ok(out)
    })
}

/// Decrypts a single 16-byte block
pub fn decrypt_block(block: &[u8], key: &[u8]) -> Result<[u8; AES_BLOCK_SIZE]> {
    validate::length("AES block", block.len(), AES_BLOCK_SIZE)?;

    let mut out = [0u8; AES_BLOCK_SIZE];
    out.copy_from_slice(block);
    with_cipher!(key, |cipher| {
        cipher.decrypt_block(&mut out)?;
        Ok(out)
    })
}

/// Encrypts a block-aligned buffer in ECB mode
///
/// The plaintext length must be a multiple of 16 bytes; no padding is
/// applied.
pub fn ecb_encrypt(plaintext: &[u8], key: &[u8]) -> Result<Vec<u8>> {
    with_cipher!(key, |cipher| Ecb::new(cipher).encrypt(plaintext))
}

/// Decrypts a block-aligned buffer in ECB mode
pub fn ecb_decrypt(ciphertext: &[u8], key: &[u8]) -> Result<Vec<u8>> {
    with_cipher!(key, |cipher| Ecb::new(cipher).decrypt(ciphertext))
}

/// Generates a random AES key of `size` bytes from the OS entropy source
///
/// Only 16, 24, and 32 are valid sizes. The returned buffer zeroizes when
/// dropped.
pub fn generate_key(size: usize) -> Result<Zeroizing<Vec<u8>>> {
    validate::parameter(
        matches!(size, AES128_KEY_SIZE | AES192_KEY_SIZE | AES256_KEY_SIZE),
        "AES key size",
        "must be 16, 24, or 32 bytes",
    )?;

    let mut key = Zeroizing::new(vec![0u8; size]);
    OsRng.fill_bytes(&mut key);
    Ok(key)
}
