//! # Secure-Gate Type Aliases
//!
//! Type aliases for secret material, backed by [`secure-gate`](https://github.com/Slurp9187/secure-gate).
//! All types zeroize on drop and require explicit `.expose_secret()` /
//! `.expose_secret_mut()` to touch the underlying bytes.
//!
//! [`Salt32`] and [`Aes256Key32`] are both 32 bytes but deliberately
//! separate aliases: the salt is public header material, the key is the
//! cipher input, and the two must never be interchanged.

use secure_gate::dynamic_alias;
use secure_gate::fixed_alias;

// Dynamic secrets
dynamic_alias!(pub PasswordString, String);

// Fixed-size concrete secrets
fixed_alias!(pub Aes256Key32, 32); // derived payload key
fixed_alias!(pub Salt32, 32); // per-file multihash salt
