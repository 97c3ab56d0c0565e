//! src/read.rs
//! Stream read primitives for the container header fields.

use crate::aliases::Salt32;
use crate::consts::SALT_LEN;
use crate::error::RevelationError;
use std::io::{ErrorKind, Read};

/// Fill `buf` from `reader`, stopping early only at end of stream.
///
/// Returns the number of bytes actually read, which is less than
/// `buf.len()` exactly when the stream ended first. `Interrupted`
/// reads are retried.
pub(crate) fn read_full<R: Read>(
    reader: &mut R,
    buf: &mut [u8],
) -> Result<usize, RevelationError> {
    let mut filled = 0;

    while filled < buf.len() {
        match reader.read(&mut buf[filled..]) {
            Ok(0) => break,
            Ok(n) => filled += n,
            Err(e) if e.kind() == ErrorKind::Interrupted => continue,
            Err(e) => return Err(RevelationError::Io(e)),
        }
    }

    Ok(filled)
}

/// Read the 32-byte key-derivation salt at the reader's current position.
///
/// The reader must be positioned on the first salt byte, immediately
/// after the 5-byte signature. On return the cursor sits on the first
/// payload byte. The salt lands in an auto-zeroizing buffer and is
/// returned verbatim; no validation is applied to its content.
///
/// # Errors
///
/// [`RevelationError::TruncatedSalt`] when the stream ends before 32
/// bytes are available. A short salt would silently weaken the derived
/// key, so it is rejected here instead of at the cipher layer.
pub fn read_salt<R: Read>(reader: &mut R) -> Result<Salt32, RevelationError> {
    let mut salt = Salt32::new([0u8; SALT_LEN]);
    let filled = read_full(reader, salt.expose_secret_mut())?;

    if filled < SALT_LEN {
        return Err(RevelationError::TruncatedSalt {
            expected: SALT_LEN,
            actual: filled,
        });
    }

    Ok(salt)
}
