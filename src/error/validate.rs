//! Validation utilities for the AES primitives

use super::{Error, Result};

/// Validate a parameter condition
#[inline(always)]
pub fn parameter(condition: bool, name: &'static str, reason: &'static str) -> Result<()> {
    if !condition {
        return Err(Error::param(name, reason));
    }
    Ok(())
}

/// Validate a length
#[inline(always)]
pub fn length(context: &'static str, actual: usize, expected: usize) -> Result<()> {
    if actual != expected {
        return Err(Error::Length {
            context,
            expected,
            actual,
        });
    }
    Ok(())
}

/// Validate that a length is a whole number of `divisor`-byte units
///
/// The reported expected length is the next multiple up, so a caller who
/// forgot to pad sees how many bytes are missing.
#[inline(always)]
pub fn multiple_of(context: &'static str, actual: usize, divisor: usize) -> Result<()> {
    if actual % divisor != 0 {
        return Err(Error::Length {
            context,
            expected: ((actual / divisor) + 1) * divisor,
            actual,
        });
    }
    Ok(())
}
