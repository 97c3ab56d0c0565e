//! # Header Probing
//!
//! The first five bytes of a Revelation container identify it: a fixed
//! 4-byte magic followed by a single version byte. [`probe_version`]
//! reads that signature and reports the version, without committing to
//! any particular strategy.

use crate::error::RevelationError;
use crate::read::read_full;
use std::io::Read;

/// Magic bytes at offset 0 of every Revelation container (`"rvl\0"`).
pub const MAGIC: [u8; 4] = [0x72, 0x76, 0x6C, 0x00];

/// Signature length: magic plus version byte.
pub const HEADER_LEN: usize = 5;

/// Probe the 5-byte signature at the reader's current position.
///
/// Returns `Some(version)` when the magic matches, `None` when it does
/// not. A file shorter than five bytes cannot carry the signature and
/// also yields `None` rather than an error, so a dispatcher can keep
/// probing other formats.
///
/// # Errors
///
/// [`RevelationError::Io`] only on a genuine read failure; content
/// never produces an error here.
///
/// # Example
///
/// ```
/// use revelation_rs::probe_version;
/// use std::io::Cursor;
///
/// let header = b"rvl\x00\x02 trailing payload";
/// assert_eq!(probe_version(Cursor::new(header))?, Some(2));
///
/// assert_eq!(probe_version(Cursor::new(b"PK\x03\x04"))?, None);
/// # Ok::<(), revelation_rs::RevelationError>(())
/// ```
pub fn probe_version<R: Read>(mut reader: R) -> Result<Option<u8>, RevelationError> {
    let mut header = [0u8; HEADER_LEN];
    let filled = read_full(&mut reader, &mut header)?;

    if filled < HEADER_LEN || header[..4] != MAGIC {
        return Ok(None);
    }

    Ok(Some(header[4]))
}
