//! AES block cipher implementation
//!
//! This module implements the Advanced Encryption Standard (AES) block
//! cipher as specified in FIPS 197, for all three key sizes.
//!
//! Byte substitution is table-based (the embedded FIPS 197 S-boxes); the
//! MixColumns arithmetic uses only the fixed GF(2^8) multipliers from
//! [`gf`]. Expanded round keys are held in zeroizing buffers and wiped
//! when a cipher is dropped. Table lookups are not constant-time; harder
//! side-channel guarantees are out of scope here.

use rand::{CryptoRng, RngCore};
use zeroize::{Zeroize, ZeroizeOnDrop};

use super::{BlockCipher, CipherAlgorithm};
use crate::error::{validate, Result};
use crate::types::SecretBytes;

mod gf;
mod state;
mod tables;

use state::State;
use tables::{AES_S_BOX, RCON_TABLE};

/// AES block size in bytes, common to all key sizes
pub const AES_BLOCK_SIZE: usize = 16;
/// AES-128 key size in bytes
pub const AES128_KEY_SIZE: usize = 16;
/// AES-192 key size in bytes
pub const AES192_KEY_SIZE: usize = 24;
/// AES-256 key size in bytes
pub const AES256_KEY_SIZE: usize = 32;

/// Converts 4 bytes to a u32 in big-endian order
#[inline(always)]
fn bytes_to_u32(bytes: &[u8]) -> u32 {
    ((bytes[0] as u32) << 24)
        | ((bytes[1] as u32) << 16)
        | ((bytes[2] as u32) << 8)
        | (bytes[3] as u32)
}

/// Converts a u32 to 4 bytes in big-endian order
#[inline(always)]
fn u32_to_bytes(word: u32) -> [u8; 4] {
    [
        (word >> 24) as u8,
        (word >> 16) as u8,
        (word >> 8) as u8,
        word as u8,
    ]
}

/// RotWord: rotates a word left by 8 bits (1 byte)
#[inline(always)]
fn rotate_word(word: u32) -> u32 {
    word.rotate_left(8)
}

/// SubWord: substitutes each byte in a word through the forward S-box
#[inline(always)]
fn sub_word(word: u32) -> u32 {
    let bytes = u32_to_bytes(word);
    let sub_bytes = [
        AES_S_BOX[bytes[0] as usize],
        AES_S_BOX[bytes[1] as usize],
        AES_S_BOX[bytes[2] as usize],
        AES_S_BOX[bytes[3] as usize],
    ];
    bytes_to_u32(&sub_bytes)
}

/// Rcon(j): the round-constant word `[x^(j-1), {00}, {00}, {00}]`, 1-indexed
///
/// An index outside the table's range is a hard error; it must never wrap
/// or read out of bounds. In-range schedules (Nk in {4, 6, 8}) stay within
/// the table, so the error arm guards against misuse, not normal operation.
fn rcon(j: usize) -> Result<u32> {
    validate::parameter(
        (1..=RCON_TABLE.len()).contains(&j),
        "Rcon index",
        "outside the defined round-constant table",
    )?;
    Ok((RCON_TABLE[j - 1] as u32) << 24)
}

/// Key expansion (FIPS 197 section 5.2), shared across key sizes
///
/// `NK` is the key length in words, `WORDS` the schedule length
/// `4 * (Nr + 1)`, and `BYTES` the same in bytes. The first `NK` words are
/// the key itself; each later word XORs the word `NK` back with a `temp`
/// that is S-box/rotation/Rcon-transformed at the `i % NK == 0` boundary,
/// with the extra `SubWord` step at `i % NK == 4` for 256-bit keys.
fn expand_key<const NK: usize, const WORDS: usize, const BYTES: usize>(
    key: &[u8],
) -> Result<SecretBytes<BYTES>> {
    validate::length("AES key", key.len(), NK * 4)?;

    let mut w = [0u32; WORDS];

    // Schedule is seeded with the cipher key, read in word order
    for i in 0..NK {
        w[i] = bytes_to_u32(&key[i * 4..(i + 1) * 4]);
    }

    for i in NK..WORDS {
        let mut temp = w[i - 1];
        if i % NK == 0 {
            temp = sub_word(rotate_word(temp)) ^ rcon(i / NK)?;
        } else if NK > 6 && i % NK == 4 {
            temp = sub_word(temp);
        }
        w[i] = w[i - NK] ^ temp;
    }

    let mut round_key_bytes = [0u8; BYTES];
    for i in 0..WORDS {
        round_key_bytes[i * 4..(i + 1) * 4].copy_from_slice(&u32_to_bytes(w[i]));
    }
    let schedule = SecretBytes::new(round_key_bytes);

    w.zeroize();
    round_key_bytes.zeroize();
    Ok(schedule)
}

/// Encrypts one block in place with an expanded schedule (section 5.1)
///
/// AddRoundKey with round 0, then `rounds - 1` full rounds, then the final
/// round without MixColumns.
fn encrypt_rounds(round_keys: &[u8], rounds: usize, block: &mut [u8]) -> Result<()> {
    validate::length("AES block", block.len(), AES_BLOCK_SIZE)?;

    let mut state = State::from_block(block);

    state.add_round_key(&round_keys[0..16]);

    for round in 1..rounds {
        state.sub_bytes();
        state.shift_rows();
        state.mix_columns();

        let offset = round * 16;
        state.add_round_key(&round_keys[offset..offset + 16]);
    }

    state.sub_bytes();
    state.shift_rows();
    state.add_round_key(&round_keys[rounds * 16..rounds * 16 + 16]);

    state.to_block(block);
    Ok(())
}

/// Decrypts one block in place, mirroring [`encrypt_rounds`] (section 5.3)
fn decrypt_rounds(round_keys: &[u8], rounds: usize, block: &mut [u8]) -> Result<()> {
    validate::length("AES block", block.len(), AES_BLOCK_SIZE)?;

    let mut state = State::from_block(block);

    state.add_round_key(&round_keys[rounds * 16..rounds * 16 + 16]);

    for round in (1..rounds).rev() {
        state.inv_shift_rows();
        state.inv_sub_bytes();

        let offset = round * 16;
        state.add_round_key(&round_keys[offset..offset + 16]);
        state.inv_mix_columns();
    }

    state.inv_shift_rows();
    state.inv_sub_bytes();
    state.add_round_key(&round_keys[0..16]);

    state.to_block(block);
    Ok(())
}

/// Type-level constants for AES-128
pub enum Aes128Algorithm {}

impl CipherAlgorithm for Aes128Algorithm {
    const KEY_SIZE: usize = AES128_KEY_SIZE;
    const BLOCK_SIZE: usize = AES_BLOCK_SIZE;

    fn name() -> &'static str {
        "AES-128"
    }
}

/// Type-level constants for AES-192
pub enum Aes192Algorithm {}

impl CipherAlgorithm for Aes192Algorithm {
    const KEY_SIZE: usize = AES192_KEY_SIZE;
    const BLOCK_SIZE: usize = AES_BLOCK_SIZE;

    fn name() -> &'static str {
        "AES-192"
    }
}

/// Type-level constants for AES-256
pub enum Aes256Algorithm {}

impl CipherAlgorithm for Aes256Algorithm {
    const KEY_SIZE: usize = AES256_KEY_SIZE;
    const BLOCK_SIZE: usize = AES_BLOCK_SIZE;

    fn name() -> &'static str {
        "AES-256"
    }
}

/// AES-128 block cipher: 10 rounds over an 11-round-key schedule
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct Aes128 {
    round_keys: SecretBytes<176>, // 11 round keys x 16 bytes
}

/// AES-192 block cipher: 12 rounds over a 13-round-key schedule
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct Aes192 {
    round_keys: SecretBytes<208>, // 13 round keys x 16 bytes
}

/// AES-256 block cipher: 14 rounds over a 15-round-key schedule
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct Aes256 {
    round_keys: SecretBytes<240>, // 15 round keys x 16 bytes
}

impl BlockCipher for Aes128 {
    type Algorithm = Aes128Algorithm;
    type Key = SecretBytes<16>;

    fn new(key: &Self::Key) -> Self {
        // Key length is guaranteed by the type; Rcon stays in range for Nk = 4
        let round_keys =
            expand_key::<4, 44, 176>(key.as_ref()).expect("AES-128 key expansion should not fail");

        Aes128 { round_keys }
    }

    fn encrypt_block(&self, block: &mut [u8]) -> Result<()> {
        encrypt_rounds(self.round_keys.as_ref(), 10, block)
    }

    fn decrypt_block(&self, block: &mut [u8]) -> Result<()> {
        decrypt_rounds(self.round_keys.as_ref(), 10, block)
    }

    fn generate_key<R: RngCore + CryptoRng>(rng: &mut R) -> Self::Key {
        SecretBytes::random(rng)
    }
}

impl BlockCipher for Aes192 {
    type Algorithm = Aes192Algorithm;
    type Key = SecretBytes<24>;

    fn new(key: &Self::Key) -> Self {
        let round_keys =
            expand_key::<6, 52, 208>(key.as_ref()).expect("AES-192 key expansion should not fail");

        Aes192 { round_keys }
    }

    fn encrypt_block(&self, block: &mut [u8]) -> Result<()> {
        encrypt_rounds(self.round_keys.as_ref(), 12, block)
    }

    fn decrypt_block(&self, block: &mut [u8]) -> Result<()> {
        decrypt_rounds(self.round_keys.as_ref(), 12, block)
    }

    fn generate_key<R: RngCore + CryptoRng>(rng: &mut R) -> Self::Key {
        SecretBytes::random(rng)
    }
}

impl BlockCipher for Aes256 {
    type Algorithm = Aes256Algorithm;
    type Key = SecretBytes<32>;

    fn new(key: &Self::Key) -> Self {
        let round_keys =
            expand_key::<8, 60, 240>(key.as_ref()).expect("AES-256 key expansion should not fail");

        Aes256 { round_keys }
    }

    fn encrypt_block(&self, block: &mut [u8]) -> Result<()> {
        encrypt_rounds(self.round_keys.as_ref(), 14, block)
    }

    fn decrypt_block(&self, block: &mut [u8]) -> Result<()> {
        decrypt_rounds(self.round_keys.as_ref(), 14, block)
    }

    fn generate_key<R: RngCore + CryptoRng>(rng: &mut R) -> Self::Key {
        SecretBytes::random(rng)
    }
}

#[cfg(test)]
mod tests;
