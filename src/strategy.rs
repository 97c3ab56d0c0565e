//! Capability seam between the version dispatcher and the per-version
//! readers. The dispatcher probes each strategy's [`is_applicable`]
//! (newest version first) and constructs only the one that matched.
//!
//! [`is_applicable`]: VersionStrategy::is_applicable

use crate::aliases::{Aes256Key32, PasswordString};
use crate::error::RevelationError;
use std::path::Path;

/// One container version's detection and key-preparation contract.
///
/// Payload decryption is the cipher layer's job and stays outside this
/// trait.
pub trait VersionStrategy {
    /// Probe whether `path` carries this version's 5-byte signature.
    ///
    /// An associated function, not a method: the probe runs before any
    /// strategy instance exists and uses its own transient file handle.
    /// Wrong magic, wrong version byte, or a file too short to hold the
    /// signature all mean `Ok(false)`. Only a failed open is an error.
    fn is_applicable(path: &Path) -> Result<bool, RevelationError>
    where
        Self: Sized;

    /// Derive the payload key from `passphrase` and the salt stored in
    /// the container header.
    ///
    /// Precondition: the strategy's stream is positioned on the first
    /// byte after the signature. On success the stream sits on the
    /// first payload byte, ready for the cipher layer.
    fn prepare_key(
        &mut self,
        passphrase: &PasswordString,
    ) -> Result<Aes256Key32, RevelationError>;
}
