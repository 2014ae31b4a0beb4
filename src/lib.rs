//! From-scratch implementation of the Advanced Encryption Standard (AES)
//!
//! This crate implements the AES block cipher as specified in FIPS 197:
//! key expansion, the forward and inverse round transformations, full
//! encryption and decryption of single 16-byte blocks for 128-, 192-, and
//! 256-bit keys, and an Electronic Codebook (ECB) driver that applies the
//! block primitive independently across a block-aligned buffer.
//!
//! Byte substitution is table-based (the FIPS 197 S-boxes embedded as
//! constant arrays); MixColumns arithmetic is built from the fixed GF(2^8)
//! multipliers the standard requires and nothing more. Key material is held
//! in zeroizing containers and compared in constant time.
//!
//! ECB reveals equal-plaintext-block patterns and authenticates nothing;
//! it is provided as the library's mode of operation, not as a
//! recommendation for new protocols.
//!
//! # Example
//!
//! ```
//! use cryp_aes::{Aes128, BlockCipher, Ecb};
//! use rand::rngs::OsRng;
//!
//! let key = Aes128::generate_key(&mut OsRng);
//! let ecb = Ecb::new(Aes128::new(&key));
//!
//! let plaintext = [0u8; 32]; // any multiple of 16 bytes
//! let ciphertext = ecb.encrypt(&plaintext).unwrap();
//! assert_eq!(ecb.decrypt(&ciphertext).unwrap(), plaintext);
//! ```

#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]
#![deny(missing_docs)]

#[cfg(feature = "alloc")]
extern crate alloc;

// Error module and re-exports
pub mod error;
pub use error::{validate, Error, Result};

// Block cipher implementations
pub mod block;
pub use block::{Aes128, Aes192, Aes256, BlockCipher, CipherAlgorithm};
#[cfg(feature = "alloc")]
pub use block::Ecb;

// Type system
pub mod types;
pub use types::SecretBytes;

// One-shot byte-slice API
#[cfg(feature = "std")]
pub mod oneshot;
