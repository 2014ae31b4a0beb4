//! Block cipher modes of operation
//!
//! Only Electronic Codebook (ECB) is implemented: blocks are processed
//! independently, with no chaining, IV, or padding.

pub mod ecb;

// Re-exports
pub use ecb::Ecb;
