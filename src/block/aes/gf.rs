//! Fixed multipliers in GF(2^8)
//!
//! AES needs no general field multiplication: MixColumns multiplies by
//! {02} and {03}, its inverse by {09}, {0B}, {0D}, and {0E}. Everything
//! here is built from `xtime` (multiplication by x) plus XORs, following
//! the binary decomposition of each constant.

/// Multiply by x ({02}) modulo x^8 + x^4 + x^3 + x + 1
///
/// Branch-free: the reduction by 0x1B is selected with a mask derived
/// from the pre-shift high bit.
#[inline(always)]
pub(crate) fn xtime(b: u8) -> u8 {
    (b << 1) ^ ((b >> 7) * 0x1B)
}

/// Multiply by {09} = x^3 + 1
#[inline(always)]
pub(crate) fn mul9(b: u8) -> u8 {
    xtime(xtime(xtime(b))) ^ b
}

/// Multiply by {0B} = x^3 + x + 1
#[inline(always)]
pub(crate) fn mul11(b: u8) -> u8 {
    xtime(xtime(xtime(b)) ^ b) ^ b
}

/// Multiply by {0D} = x^3 + x^2 + 1
#[inline(always)]
pub(crate) fn mul13(b: u8) -> u8 {
    xtime(xtime(xtime(b) ^ b)) ^ b
}

/// Multiply by {0E} = x^3 + x^2 + x
#[inline(always)]
pub(crate) fn mul14(b: u8) -> u8 {
    xtime(xtime(xtime(b) ^ b) ^ b)
}
