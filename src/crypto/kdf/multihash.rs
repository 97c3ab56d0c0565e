//! src/crypto/kdf/multihash.rs
//! Revelation v2 salted multihash, the format's fixed key-stretching scheme.

use crate::aliases::{Aes256Key32, PasswordString, Salt32};
use sha2::{Digest, Sha256};

/// Extra SHA-256 rounds applied after the initial salted hash, as fixed
/// by the v2 container format. 10,001 compressions in total.
pub const MULTIHASH_ROUNDS: u32 = 10_000;

/// Derive the payload key directly into the caller's buffer.
///
/// The construction, reproduced byte-for-byte from the files this
/// format's writers produce:
///
/// 1. `digest = SHA-256(passphrase || salt)`: raw 32-byte output with
///    no separator and no length prefix
/// 2. [`MULTIHASH_ROUNDS`] further rounds of `digest = SHA-256(digest)`,
///    with neither passphrase nor salt mixed back in
///
/// The round count and the single salt mix are part of the on-disk
/// contract; changing either makes existing files undecryptable.
///
/// Deterministic and infallible. An empty passphrase hashes as an empty
/// byte sequence and is a valid input.
#[inline(always)]
pub fn derive_multihash_key(
    passphrase: &PasswordString,
    salt: &Salt32,
    out_key: &mut Aes256Key32,
) {
    let mut hasher = Sha256::new();
    hasher.update(passphrase.expose_secret().as_bytes());
    hasher.update(salt.expose_secret());
    let mut digest: [u8; 32] = hasher.finalize_reset().into();

    for _ in 0..MULTIHASH_ROUNDS {
        hasher.update(digest);
        digest = hasher.finalize_reset().into();
    }

    out_key.expose_secret_mut().copy_from_slice(&digest);
}
