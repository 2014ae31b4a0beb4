//! Electronic Codebook (ECB) mode implementation
//!
//! ECB encrypts each block of the input independently under the same key
//! and concatenates the results: no chaining, no IV, no padding. Equal
//! plaintext blocks therefore produce equal ciphertext blocks, which leaks
//! structure; ECB is the mode this library specifies, not a recommendation
//! for new protocols.
//!
//! Input lengths must be an exact multiple of the block size. Anything
//! else is rejected up front rather than silently truncated, and padding
//! is the caller's responsibility.

#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
use zeroize::{Zeroize, ZeroizeOnDrop};

use super::super::BlockCipher;
use crate::error::{validate, Result};

/// ECB mode implementation
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct Ecb<B: BlockCipher + Zeroize + ZeroizeOnDrop> {
    cipher: B,
}

impl<B: BlockCipher + Zeroize + ZeroizeOnDrop> Ecb<B> {
    /// Creates a new ECB mode instance around the given cipher
    pub fn new(cipher: B) -> Self {
        Self { cipher }
    }

    /// Encrypts a message using ECB mode
    ///
    /// The plaintext length must be a multiple of the block size; empty
    /// input yields empty output.
    pub fn encrypt(&self, plaintext: &[u8]) -> Result<Vec<u8>> {
        let block_size = B::block_size();
        validate::multiple_of("ECB plaintext", plaintext.len(), block_size)?;

        let mut ciphertext = Vec::with_capacity(plaintext.len());

        // Each block is independent; outputs concatenate in block order
        for chunk in plaintext.chunks(block_size) {
            let mut block = [0u8; 16]; // AES block size is 16 bytes
            block[..chunk.len()].copy_from_slice(chunk);

            self.cipher.encrypt_block(&mut block)?;

            ciphertext.extend_from_slice(&block);
        }

        Ok(ciphertext)
    }

    /// Decrypts a message using ECB mode
    ///
    /// The ciphertext length must be a multiple of the block size.
    pub fn decrypt(&self, ciphertext: &[u8]) -> Result<Vec<u8>> {
        let block_size = B::block_size();
        validate::multiple_of("ECB ciphertext", ciphertext.len(), block_size)?;

        let mut plaintext = Vec::with_capacity(ciphertext.len());

        for chunk in ciphertext.chunks(block_size) {
            let mut block = [0u8; 16]; // AES block size is 16 bytes
            block[..chunk.len()].copy_from_slice(chunk);

            self.cipher.decrypt_block(&mut block)?;

            plaintext.extend_from_slice(&block);
        }

        Ok(plaintext)
    }
}
