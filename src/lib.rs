// src/lib.rs

pub mod aliases;
pub mod consts;
pub mod crypto;
pub mod error;
pub mod header;
pub mod read;
pub mod strategy;
pub mod version_two;

// High-level API: this is what the version dispatcher imports
pub use error::RevelationError;
pub use strategy::VersionStrategy;
pub use version_two::{is_applicable, VersionTwo};

// Low-level primitives, public at the root because custom flows
// (e.g. re-deriving a key for an already-read salt) need them directly
pub use crypto::kdf::multihash::{derive_multihash_key, MULTIHASH_ROUNDS};
pub use header::probe_version;
pub use read::read_salt;
