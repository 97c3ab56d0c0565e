//! Global constants for the Revelation v2 container layout.
//!
//! Byte layout: magic (4) + version (1) + salt (32) + encrypted payload.

/// Version byte handled by this strategy.
pub const VERSION_TWO: u8 = 2;

/// Salt length in bytes (header offsets 5..37).
pub const SALT_LEN: usize = 32;

/// Derived key length (32 bytes = 256-bit key).
pub const KEY_LEN: usize = 32;
