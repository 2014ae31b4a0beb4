//! The AES state: a 4x4 byte matrix over one 16-byte block
//!
//! The block is placed column-major, as FIPS 197 section 3.4 prescribes:
//! matrix entry (r, c) holds `block[r + 4*c]`. `State` stores the four
//! columns contiguously, so column c is `cols[c]` and entry (r, c) is
//! `cols[c][r]`; flattening the columns in order is the exact inverse of
//! [`State::from_block`].
//!
//! A `State` exists only inside a single block operation and is mutated in
//! place by every round transformation.

use super::gf::{mul11, mul13, mul14, mul9, xtime};
use super::tables::{AES_S_BOX, INV_S_BOX};

/// One block's worth of state, stored as four 4-byte columns
pub(crate) struct State {
    cols: [[u8; 4]; 4],
}

impl State {
    /// Load a 16-byte block column-major
    ///
    /// Callers validate the block length first; this is the hot path.
    pub(crate) fn from_block(block: &[u8]) -> Self {
        debug_assert_eq!(block.len(), 16);
        let mut cols = [[0u8; 4]; 4];
        for (c, col) in cols.iter_mut().enumerate() {
            col.copy_from_slice(&block[c * 4..c * 4 + 4]);
        }
        State { cols }
    }

    /// Store the state back into a 16-byte block, inverting `from_block`
    pub(crate) fn to_block(&self, block: &mut [u8]) {
        debug_assert_eq!(block.len(), 16);
        for (c, col) in self.cols.iter().enumerate() {
            block[c * 4..c * 4 + 4].copy_from_slice(col);
        }
    }

    /// SubBytes: per-byte forward S-box lookup (FIPS 197 section 5.1.1)
    pub(crate) fn sub_bytes(&mut self) {
        for col in self.cols.iter_mut() {
            for byte in col.iter_mut() {
                *byte = AES_S_BOX[*byte as usize];
            }
        }
    }

    /// InvSubBytes: per-byte inverse S-box lookup (section 5.3.2)
    pub(crate) fn inv_sub_bytes(&mut self) {
        for col in self.cols.iter_mut() {
            for byte in col.iter_mut() {
                *byte = INV_S_BOX[*byte as usize];
            }
        }
    }

    /// ShiftRows: matrix row r rotates left by r positions (section 5.1.2)
    ///
    /// In column storage that reads as: row r of the new column c comes
    /// from column (c + r) mod 4.
    pub(crate) fn shift_rows(&mut self) {
        let old = self.cols;
        for c in 0..4 {
            for r in 1..4 {
                self.cols[c][r] = old[(c + r) % 4][r];
            }
        }
    }

    /// InvShiftRows: matrix row r rotates right by r positions (section 5.3.1)
    pub(crate) fn inv_shift_rows(&mut self) {
        let old = self.cols;
        for c in 0..4 {
            for r in 1..4 {
                self.cols[c][r] = old[(c + 4 - r) % 4][r];
            }
        }
    }

    /// MixColumns: multiply each column by {03}x^3 + {01}x^2 + {01}x + {02}
    /// modulo x^4 + 1 (section 5.1.3)
    ///
    /// Uses the adjacent-pair identity: with t the XOR of the whole column,
    /// `c0' = c0 ^ t ^ xtime(c0 ^ c1)` and cyclically for the rest. This is
    /// algebraically the full matrix product, minus most of the multiplies.
    pub(crate) fn mix_columns(&mut self) {
        for col in self.cols.iter_mut() {
            let c0 = col[0];
            let t = col[0] ^ col[1] ^ col[2] ^ col[3];
            col[0] ^= t ^ xtime(col[0] ^ col[1]);
            col[1] ^= t ^ xtime(col[1] ^ col[2]);
            col[2] ^= t ^ xtime(col[2] ^ col[3]);
            col[3] ^= t ^ xtime(c0 ^ col[3]);
        }
    }

    /// InvMixColumns: multiply each column by {0B}x^3 + {0D}x^2 + {09}x + {0E}
    /// (section 5.3.3), via the fixed GF(2^8) multipliers
    pub(crate) fn inv_mix_columns(&mut self) {
        for col in self.cols.iter_mut() {
            let (c0, c1, c2, c3) = (col[0], col[1], col[2], col[3]);
            col[0] = mul14(c0) ^ mul11(c1) ^ mul13(c2) ^ mul9(c3);
            col[1] = mul9(c0) ^ mul14(c1) ^ mul11(c2) ^ mul13(c3);
            col[2] = mul13(c0) ^ mul9(c1) ^ mul14(c2) ^ mul11(c3);
            col[3] = mul11(c0) ^ mul13(c1) ^ mul9(c2) ^ mul14(c3);
        }
    }

    /// AddRoundKey: bytewise XOR with one 16-byte round key (section 5.1.4)
    ///
    /// The round key is laid out column-major like the block, so the XOR is
    /// positional. Self-inverse.
    pub(crate) fn add_round_key(&mut self, round_key: &[u8]) {
        debug_assert_eq!(round_key.len(), 16);
        for (c, col) in self.cols.iter_mut().enumerate() {
            for (r, byte) in col.iter_mut().enumerate() {
                *byte ^= round_key[c * 4 + r];
            }
        }
    }
}
