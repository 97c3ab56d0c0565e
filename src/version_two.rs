//! # Version 2 Strategy
//!
//! Reader strategy for version 2 containers. Version 2 layers a
//! 32-byte salt behind the signature and stretches the passphrase with
//! the salted multihash before the payload cipher runs.

use crate::aliases::{Aes256Key32, PasswordString};
use crate::consts::{KEY_LEN, VERSION_TWO};
use crate::crypto::kdf::multihash::derive_multihash_key;
use crate::error::RevelationError;
use crate::header::probe_version;
use crate::read::read_salt;
use crate::strategy::VersionStrategy;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

/// Check whether `path` is a version 2 container.
///
/// Opens its own read-only handle, scoped to this call and released on
/// every exit path; the caller's streams are never touched.
///
/// # Errors
///
/// [`RevelationError::Open`] when the file cannot be opened. An
/// unreadable path is a different outcome than "wrong format" and is
/// never reported as `false`.
pub fn is_applicable(path: &Path) -> Result<bool, RevelationError> {
    let file = File::open(path).map_err(|source| RevelationError::Open {
        path: path.to_path_buf(),
        source,
    })?;

    Ok(probe_version(BufReader::new(file))? == Some(VERSION_TWO))
}

/// A version 2 container bound to an already-probed, already-positioned
/// stream.
///
/// The dispatcher constructs this only after [`is_applicable`] matched,
/// handing over a reader positioned on the first byte after the 5-byte
/// signature. The header is not re-validated here.
pub struct VersionTwo<R> {
    reader: R,
}

impl<R: Read> VersionTwo<R> {
    /// Bind the strategy to `reader`.
    ///
    /// Precondition: `reader` is positioned immediately after the
    /// signature, on the first salt byte.
    pub fn new(reader: R) -> Self {
        Self { reader }
    }

    /// Read the salt and derive the payload key from `passphrase`.
    ///
    /// Advances the stream past the salt; afterwards it sits on the
    /// first encrypted payload byte. The passphrase is only hashed,
    /// never stored or logged, and an empty passphrase is valid.
    ///
    /// # Errors
    ///
    /// [`RevelationError::TruncatedSalt`] when the file ends inside the
    /// salt field, [`RevelationError::Io`] on read failure.
    pub fn prepare_key(
        &mut self,
        passphrase: &PasswordString,
    ) -> Result<Aes256Key32, RevelationError> {
        let salt = read_salt(&mut self.reader)?;

        let mut key = Aes256Key32::new([0u8; KEY_LEN]);
        derive_multihash_key(passphrase, &salt, &mut key);
        Ok(key)
    }

    /// Hand the positioned stream back, for the payload cipher layer.
    pub fn into_inner(self) -> R {
        self.reader
    }
}

impl<R: Read> VersionStrategy for VersionTwo<R> {
    fn is_applicable(path: &Path) -> Result<bool, RevelationError> {
        is_applicable(path)
    }

    fn prepare_key(
        &mut self,
        passphrase: &PasswordString,
    ) -> Result<Aes256Key32, RevelationError> {
        VersionTwo::prepare_key(self, passphrase)
    }
}
