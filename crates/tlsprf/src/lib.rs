// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! TLS pseudo-random function
//!
//! Expands a secret and a seed into an arbitrary-length byte stream with the
//! HMAC-based `P_hash` construction, either over a single hash or, as TLS
//! 1.0/1.1 does, as the XOR of `P_MD5` and `P_SHA1` over the two halves of
//! the secret. HMAC and the hash functions come from RustCrypto.
//! Chain values and output blocks are zeroized once used; the keyed HMAC
//! state is owned by `hmac` and dropped without wiping.
//!
//! ```
//! use tlsprf::{Prf, PrfMode};
//!
//! let prf = Prf::new(PrfMode::MD5_SHA1);
//! let key_block = prf
//!     .generate_vec(104, b"master secret bytes", &[b"key expansion", b"randoms"])
//!     .expect("Failed to generate_vec(..)");
//! assert_eq!(key_block.len(), 104);
//! ```
//!
//! References:
//! - RFC 2246: The TLS Protocol Version 1.0, Section 5
//!   <https://datatracker.ietf.org/doc/html/rfc2246#section-5>
//! - RFC 2104: HMAC: Keyed-Hashing for Message Authentication
//!   <https://datatracker.ietf.org/doc/html/rfc2104>

#![cfg_attr(not(test), no_std)]
#![warn(missing_docs)]

extern crate alloc;

#[cfg(test)]
mod tests;

mod error;
mod expander;
mod mode;
mod p_hash;
mod prf;
mod split;

pub mod tls;

pub use error::PrfError;
pub use hmac::Hmac;
pub use md5::Md5;
pub use mode::{PrfHash, PrfMode};
pub use p_hash::PHash;
pub use prf::{Prf, generate};
pub use sha1::Sha1;
pub use sha2::{Sha224, Sha256, Sha384, Sha512};
pub use split::split_secret;
