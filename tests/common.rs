//! tests/common.rs
//! Common constants and helpers shared across test files

/// Standard test passphrase used across test vectors
#[allow(dead_code)]
pub const TEST_PASSPHRASE: &str = "test";

/// 5-byte version 2 signature: magic "rvl\0" plus version byte
#[allow(dead_code)]
pub const V2_SIGNATURE: [u8; 5] = [0x72, 0x76, 0x6C, 0x00, 0x02];

/// Pinned key for passphrase "test" over an all-zero 32-byte salt,
/// computed once against the multihash construction and fixed here
#[allow(dead_code)]
pub const GOLDEN_ZERO_SALT_TEST_KEY: [u8; 32] = [
    0xe1, 0xed, 0xbc, 0x7c, 0x31, 0xff, 0x35, 0xd2, 0xd9, 0xa1, 0x8a, 0xaf, 0xa5, 0x49, 0x8f,
    0x3b, 0x59, 0x4e, 0xc6, 0x9d, 0x0e, 0x4d, 0xd8, 0x2b, 0x57, 0xb4, 0x30, 0x18, 0x7f, 0x47,
    0x8f, 0x9b,
];

/// Assemble a complete v2 container image: signature, salt, payload
#[allow(dead_code)]
pub fn v2_file_bytes(salt: &[u8; 32], payload: &[u8]) -> Vec<u8> {
    let mut bytes = Vec::with_capacity(V2_SIGNATURE.len() + salt.len() + payload.len());
    bytes.extend_from_slice(&V2_SIGNATURE);
    bytes.extend_from_slice(salt);
    bytes.extend_from_slice(payload);
    bytes
}
